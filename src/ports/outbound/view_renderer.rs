use crate::application::view::DashboardSnapshot;
use crate::shared::Result;

/// ViewRenderer port for turning a dashboard snapshot into output text
///
/// Rendering is a pure function of the snapshot; renderers never call the
/// backend or touch view handles.
pub trait ViewRenderer {
    /// Renders the snapshot
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn render(&self, snapshot: &DashboardSnapshot) -> Result<String>;
}
