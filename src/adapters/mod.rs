/// Adapters layer - Infrastructure implementations
///
/// Outbound adapters implement the ports; the inbound shell drives the
/// dashboard from user input.
pub mod inbound;
pub mod outbound;
