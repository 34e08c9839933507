pub mod health;
pub mod serial;
pub mod supplier;
pub mod trace;
mod wire;

pub use health::{HealthFailure, HealthFailureKind, HealthStatus};
pub use serial::{RandomSerials, SerialNumber, ValidationError};
pub use supplier::SupplierQualityRow;
pub use trace::{SerialTraceResult, TraceStatus};
