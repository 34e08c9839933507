pub mod reject_rate;

pub use reject_rate::{PillVariant, RejectRatePolicy};
