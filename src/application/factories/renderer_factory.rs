use crate::adapters::outbound::renderers::{JsonRenderer, TextRenderer};
use crate::application::dto::RenderFormat;
use crate::ports::outbound::ViewRenderer;

/// Factory for creating view renderers
///
/// Selecting the renderer adapter is an application concern: the CLI only
/// knows the format name.
pub struct RendererFactory;

impl RendererFactory {
    /// Creates a renderer for the given format
    ///
    /// # Arguments
    /// * `format` - Output format
    /// * `colored` - Whether the text renderer may emit ANSI colours
    pub fn create(format: RenderFormat, colored: bool) -> Box<dyn ViewRenderer> {
        match format {
            RenderFormat::Text => Box::new(TextRenderer::new(colored)),
            RenderFormat::Json => Box::new(JsonRenderer::new()),
        }
    }
}
