use super::content::RegionContent;
use crate::traceability::domain::HealthStatus;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionId {
    Suppliers,
    Trace,
    RandomSerials,
}

impl RegionId {
    pub fn title(self) -> &'static str {
        match self {
            RegionId::Suppliers => "Supplier quality",
            RegionId::Trace => "Serial trace",
            RegionId::RandomSerials => "Random serials",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlSnapshot {
    pub label: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionSnapshot {
    pub id: RegionId,
    pub controls: Vec<ControlSnapshot>,
    pub content: RegionContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthView {
    pub status: HealthStatus,
    pub message: String,
}

impl From<HealthStatus> for HealthView {
    fn from(status: HealthStatus) -> Self {
        Self {
            message: status.message().to_string(),
            status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputSnapshot {
    pub value: String,
    pub focused: bool,
    /// Inline validation message, when shown
    pub notice: Option<String>,
}

/// Point-in-time copy of every view handle, ready for a renderer.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub api_base: String,
    pub rendered_at: DateTime<Utc>,
    pub admin_controls: bool,
    pub health: HealthView,
    pub trace_input: InputSnapshot,
    pub regions: Vec<RegionSnapshot>,
}

impl DashboardSnapshot {
    pub fn region(&self, id: RegionId) -> Option<&RegionSnapshot> {
        self.regions.iter().find(|r| r.id == id)
    }
}
