use crate::application::view::HealthLamp;
use crate::ports::outbound::{DiagnosticReporter, TraceabilityApi};
use crate::traceability::domain::HealthStatus;
use std::sync::Arc;

/// HealthIndicator - reflects backend reachability in the health lamp
///
/// The lamp goes back to pending only when a new probe starts; there is no
/// periodic polling.
pub struct HealthIndicator<A, D> {
    api: Arc<A>,
    diagnostics: Arc<D>,
    lamp: HealthLamp,
}

impl<A, D> HealthIndicator<A, D>
where
    A: TraceabilityApi,
    D: DiagnosticReporter,
{
    pub fn new(api: Arc<A>, diagnostics: Arc<D>, lamp: HealthLamp) -> Self {
        Self {
            api,
            diagnostics,
            lamp,
        }
    }

    /// Runs one health probe and updates the lamp
    pub async fn probe(&self) -> HealthStatus {
        self.lamp.set(HealthStatus::Pending);

        let status = self.api.check_health().await;
        if let HealthStatus::Error(failure) = &status {
            self.diagnostics
                .report_error("Health check failed", &failure.detail);
        }

        self.lamp.set(status.clone());
        status
    }
}
