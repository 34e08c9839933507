/// Console adapters - diagnostics, prompts, spinner and stdout output
mod activity_spinner;
mod confirmation_prompt;
mod diagnostic_reporter;
mod stdout_presenter;

pub use activity_spinner::ActivitySpinner;
pub use confirmation_prompt::{AssumeYes, ConsoleConfirmation, StdinConfirmationPrompt};
pub use diagnostic_reporter::TracingDiagnosticReporter;
pub use stdout_presenter::StdoutPresenter;
