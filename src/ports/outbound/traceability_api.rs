use crate::traceability::domain::{
    HealthFailure, HealthStatus, SerialNumber, SerialTraceResult, SupplierQualityRow,
};
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Failure of a single backend call.
///
/// `NotFound` is only produced by the trace lookup; every other endpoint
/// reports a 404 as a plain `Http` error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {details}")]
    Network { details: String },

    #[error("HTTP {status}")]
    Http { status: u16 },

    #[error("serial not found")]
    NotFound,

    #[error("unexpected response body: {details}")]
    Decode { details: String },
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// TraceabilityApi port for the traceability backend
///
/// One method per endpoint. Calls are never retried and never panic: every
/// failure comes back as an [`ApiError`] for the caller to branch on.
#[async_trait]
pub trait TraceabilityApi: Send + Sync {
    /// GET `/api/health`, returning the decoded body
    async fn probe_health(&self) -> ApiResult<Value>;

    /// GET `/api/suppliers/quality`, rows in backend order
    async fn fetch_supplier_quality(&self) -> ApiResult<Vec<SupplierQualityRow>>;

    /// GET `/api/serial/{serial}/trace` with the serial percent-encoded
    ///
    /// # Errors
    /// Returns [`ApiError::NotFound`] when the backend answers 404
    async fn fetch_serial_trace(&self, serial: &SerialNumber) -> ApiResult<SerialTraceResult>;

    /// GET `/api/serial/random`; an absent list is empty
    async fn fetch_random_serials(&self) -> ApiResult<Vec<String>>;

    /// POST `/api/admin/clear` - wipes all backend data
    async fn clear_database(&self) -> ApiResult<Value>;

    /// POST `/api/admin/seed` - loads the demo data set
    async fn seed_database(&self) -> ApiResult<Value>;

    /// Probes the backend and classifies the outcome
    ///
    /// Transport failures and non-2xx statuses are `Unreachable`; an
    /// undecodable body or a falsy `ok` is `UnexpectedResponse`.
    async fn check_health(&self) -> HealthStatus {
        match self.probe_health().await {
            Ok(body) => HealthStatus::from_body(&body),
            Err(err @ (ApiError::Network { .. } | ApiError::Http { .. } | ApiError::NotFound)) => {
                HealthStatus::Error(HealthFailure::unreachable(err.to_string()))
            }
            Err(err @ ApiError::Decode { .. }) => {
                HealthStatus::Error(HealthFailure::unexpected_response(err.to_string()))
            }
        }
    }
}
