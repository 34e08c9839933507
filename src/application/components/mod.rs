/// Dashboard components
///
/// Each component owns the view handles it writes to and performs one
/// backend call per user action. Remote failures end up as placeholders plus
/// a diagnostic report; nothing propagates past a component.
mod admin_controls;
mod health_indicator;
mod serial_trace;
mod supplier_quality;

pub use admin_controls::{AdminButtons, AdminControls, AdminTargets};
pub use health_indicator::HealthIndicator;
pub use serial_trace::SerialTraceView;
pub use supplier_quality::SupplierQualityView;

use crate::shared::error::ExitCode;

/// How a user action ended, as far as the view is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Content was rendered into the region
    Rendered,
    /// The backend answered with nothing; a guidance placeholder is shown
    Empty,
    /// The trace lookup found no such serial
    NotFound,
    /// The backend call failed; an error placeholder is shown
    Failed,
    /// Local validation failed before any call was made
    Rejected,
    /// The user declined a confirmation; nothing happened
    Declined,
    /// The triggering control was still busy with the same action; nothing happened
    Busy,
}

impl ActionOutcome {
    pub fn exit_code(self) -> ExitCode {
        match self {
            ActionOutcome::Rendered
            | ActionOutcome::Empty
            | ActionOutcome::Declined
            | ActionOutcome::Busy => ExitCode::Success,
            ActionOutcome::NotFound | ActionOutcome::Failed => ExitCode::ActionFailed,
            ActionOutcome::Rejected => ExitCode::InvalidArguments,
        }
    }
}
