use crate::application::view::DashboardSnapshot;
use crate::ports::outbound::ViewRenderer;
use crate::shared::Result;

/// JsonRenderer adapter - pretty-printed JSON snapshot for scripting
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewRenderer for JsonRenderer {
    fn render(&self, snapshot: &DashboardSnapshot) -> Result<String> {
        Ok(serde_json::to_string_pretty(snapshot)?)
    }
}
