use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish a backend-side failure from
/// bad input and from a broken local setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the action completed (empty results and a declined clear included)
    Success = 0,
    /// The backend call failed, the serial was not found, or the backend is unhealthy
    ActionFailed = 1,
    /// Invalid command-line arguments or an empty serial number
    InvalidArguments = 2,
    /// Application error (config file, invalid API base, admin controls disabled, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ActionFailed => write!(f, "Action Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the traceability console.
///
/// Remote failures never show up here: they are rendered as placeholders
/// by the components. These cover the local setup around them.
#[derive(Debug, Error)]
pub enum TraceConsoleError {
    #[error("Invalid API base URL: {url}\nReason: {reason}\n\n💡 Hint: Use an absolute http(s) URL such as https://backend.example.com")]
    InvalidApiBase { url: String, reason: String },

    #[error("Failed to read config file: {path}\nDetails: {details}\n\n💡 Hint: Check that the file exists and is readable")]
    ConfigReadError { path: PathBuf, details: String },

    #[error("Admin controls are disabled\n\n💡 Hint: Pass --admin or set `admin_controls: true` in supply-trace.config.yml")]
    AdminControlsDisabled,

    #[error("Unknown output format: {value}\n\n💡 Hint: Use 'text' or 'json'")]
    UnknownFormat { value: String },

    #[error("Failed to initialise HTTP client\nDetails: {details}")]
    HttpClientInit { details: String },
}
