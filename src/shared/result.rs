/// Type alias for Result with anyhow::Error as the error type.
/// Application plumbing (config, CLI wiring, rendering) uses this alias;
/// remote calls use the typed `ApiResult` from the outbound port instead.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
