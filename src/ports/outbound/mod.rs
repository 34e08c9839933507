/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (backend API, console, etc.).
pub mod confirmation_prompt;
pub mod diagnostic_reporter;
pub mod output_presenter;
pub mod traceability_api;
pub mod view_renderer;

pub use confirmation_prompt::ConfirmationPrompt;
pub use diagnostic_reporter::DiagnosticReporter;
pub use output_presenter::OutputPresenter;
pub use traceability_api::{ApiError, ApiResult, TraceabilityApi};
pub use view_renderer::ViewRenderer;
