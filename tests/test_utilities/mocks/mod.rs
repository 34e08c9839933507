/// Mock implementations for testing
mod mock_confirmation_prompt;
mod mock_diagnostic_reporter;
mod mock_traceability_api;

pub use mock_confirmation_prompt::ScriptedConfirmation;
pub use mock_diagnostic_reporter::MockDiagnosticReporter;
pub use mock_traceability_api::MockTraceabilityApi;
