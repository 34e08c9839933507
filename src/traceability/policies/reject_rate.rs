use serde::Serialize;

/// Visual variant of a status pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PillVariant {
    Ok,
    Reject,
}

impl PillVariant {
    pub fn class_name(self) -> &'static str {
        match self {
            PillVariant::Ok => "ok",
            PillVariant::Reject => "reject",
        }
    }
}

/// RejectRatePolicy encodes how supplier reject rates are presented.
///
/// - A numeric rate is shown with exactly two decimals and a trailing `%`
/// - A missing rate is shown as `-`
/// - A rate at or above 10% gets the reject pill; everything else, including
///   a missing rate, gets the ok pill
pub struct RejectRatePolicy;

impl RejectRatePolicy {
    /// Fixed business threshold, in percent.
    pub const REJECT_THRESHOLD_PERCENT: f64 = 10.0;

    /// Placeholder shown for any absent value.
    pub const PLACEHOLDER: &'static str = "-";

    pub fn format_rate(rate: Option<f64>) -> String {
        match rate {
            Some(r) if r.is_finite() => format!("{:.2}%", r),
            _ => Self::PLACEHOLDER.to_string(),
        }
    }

    pub fn pill_for(rate: Option<f64>) -> PillVariant {
        match rate {
            Some(r) if r >= Self::REJECT_THRESHOLD_PERCENT => PillVariant::Reject,
            _ => PillVariant::Ok,
        }
    }
}
