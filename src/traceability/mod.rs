/// Traceability domain layer
///
/// Pure data types for what the backend reports, plus the fixed business
/// rules applied when presenting them. Nothing in here performs IO.
pub mod domain;
pub mod policies;
