use crate::ports::outbound::DiagnosticReporter;

/// TracingDiagnosticReporter adapter - forwards diagnostics to `tracing`
///
/// Where the output ends up (stderr, filtered by level) is decided by the
/// subscriber installed in `main`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnosticReporter;

impl TracingDiagnosticReporter {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticReporter for TracingDiagnosticReporter {
    fn report(&self, message: &str) {
        tracing::info!(target: "supply_trace::diagnostics", "{}", message);
    }

    fn report_error(&self, context: &str, details: &str) {
        tracing::error!(target: "supply_trace::diagnostics", %details, "{}", context);
    }
}
