use serde::Serialize;
use serde_json::Value;

/// Why a health probe did not come back healthy.
///
/// Both kinds share one visual error state; they stay distinct so the
/// diagnostic log can tell a dead backend from a confused one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthFailureKind {
    /// Transport failure or a non-2xx status
    Unreachable,
    /// 2xx with a malformed body or a falsy `ok` field
    UnexpectedResponse,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthFailure {
    pub kind: HealthFailureKind,
    /// Diagnostic detail; never shown in the rendered view
    #[serde(skip)]
    pub detail: String,
}

impl HealthFailure {
    pub fn unreachable(detail: impl Into<String>) -> Self {
        Self {
            kind: HealthFailureKind::Unreachable,
            detail: detail.into(),
        }
    }

    pub fn unexpected_response(detail: impl Into<String>) -> Self {
        Self {
            kind: HealthFailureKind::UnexpectedResponse,
            detail: detail.into(),
        }
    }
}

/// Tri-state backend reachability.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum HealthStatus {
    #[default]
    Pending,
    Ok,
    Error(HealthFailure),
}

impl HealthStatus {
    /// Human message shown next to the indicator
    pub fn message(&self) -> &'static str {
        match self {
            HealthStatus::Pending => "Checking health…",
            HealthStatus::Ok => "Healthy",
            HealthStatus::Error(failure) => match failure.kind {
                HealthFailureKind::Unreachable => "Failed to reach backend",
                HealthFailureKind::UnexpectedResponse => "Unexpected response",
            },
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, HealthStatus::Ok)
    }

    /// Maps a decoded `/api/health` body onto a status.
    ///
    /// Healthy iff the body carries a truthy `ok` field. A body that is not
    /// an object (or has no `ok`) counts as an unexpected response.
    pub fn from_body(body: &Value) -> Self {
        match body.get("ok") {
            Some(ok) if is_truthy(ok) => HealthStatus::Ok,
            Some(ok) => HealthStatus::Error(HealthFailure::unexpected_response(format!(
                "health body reported ok = {}",
                ok
            ))),
            None => HealthStatus::Error(HealthFailure::unexpected_response(format!(
                "health body has no `ok` field: {}",
                body
            ))),
        }
    }
}

/// Loose truthiness of a JSON value, the way the backend's own clients read `ok`.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
