/// Data Transfer Objects for application layer
///
/// Values shared between the inbound CLI and the outbound adapters.
mod render_format;

pub use render_format::RenderFormat;
