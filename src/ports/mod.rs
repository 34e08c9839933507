/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports describe what the application core needs from the outside
/// world: the backend API, a diagnostic channel, a yes/no prompt, and the
/// renderer/presenter pair that produce the visible output.
pub mod outbound;
