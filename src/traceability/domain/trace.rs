use super::wire;
use serde::{Deserialize, Serialize};

/// Status reported for a traced serial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TraceStatus {
    Reject,
    Other(String),
}

impl TraceStatus {
    const REJECT: &'static str = "REJECT";

    pub fn parse(raw: &str) -> Self {
        if raw == Self::REJECT {
            TraceStatus::Reject
        } else {
            TraceStatus::Other(raw.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TraceStatus::Reject => Self::REJECT,
            TraceStatus::Other(s) => s,
        }
    }

    pub fn is_reject(&self) -> bool {
        matches!(self, TraceStatus::Reject)
    }
}

/// Result of tracing one serial: its batch, supplier and batch siblings.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SerialTraceResult {
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub serial: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub batch_id: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub supplier_id: Option<String>,
    #[serde(default, deserialize_with = "wire::opt_text")]
    pub supplier_name: Option<String>,
    /// Serials sharing the batch, in backend order
    #[serde(default, deserialize_with = "wire::opt_text_list")]
    pub affected_serials: Option<Vec<String>>,
}

impl SerialTraceResult {
    pub fn trace_status(&self) -> Option<TraceStatus> {
        self.status.as_deref().map(TraceStatus::parse)
    }

    /// Batch siblings; an absent list reads as empty
    pub fn affected(&self) -> &[String] {
        self.affected_serials.as_deref().unwrap_or(&[])
    }
}
