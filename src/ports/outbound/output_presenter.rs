use crate::shared::Result;

/// OutputPresenter port for presenting rendered views
///
/// This port abstracts the output destination where the rendered
/// dashboard content ends up (stdout in the CLI, a buffer in tests).
pub trait OutputPresenter {
    /// Presents the rendered content
    ///
    /// # Errors
    /// Returns an error if writing to the output destination fails
    fn present(&self, content: &str) -> Result<()>;
}
