/// DiagnosticReporter port - the diagnostic channel
///
/// Components report full error detail here while the visible view only
/// ever shows a short placeholder. Implementations must be `Send + Sync`
/// so components can be shared across concurrently running actions.
pub trait DiagnosticReporter: Send + Sync {
    /// Reports an informational message
    ///
    /// # Arguments
    /// * `message` - The message to report
    fn report(&self, message: &str);

    /// Reports a failure with its full technical detail
    ///
    /// # Arguments
    /// * `context` - What was being attempted (e.g. "Trace request failed")
    /// * `details` - The underlying error, as text
    fn report_error(&self, context: &str, details: &str);
}
