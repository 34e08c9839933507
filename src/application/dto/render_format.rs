/// Output format for rendered dashboard snapshots
///
/// Shared by the CLI (inbound) and the renderers (outbound), so it lives in
/// the application layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderFormat {
    /// Human-readable terminal text (default)
    #[default]
    Text,
    /// Machine-readable JSON snapshot
    Json,
}

impl std::str::FromStr for RenderFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Ok(RenderFormat::Text),
            "json" => Ok(RenderFormat::Json),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'text' or 'json'",
                s
            )),
        }
    }
}

impl std::fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderFormat::Text => write!(f, "text"),
            RenderFormat::Json => write!(f, "json"),
        }
    }
}
