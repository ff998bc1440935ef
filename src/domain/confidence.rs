use serde::Serialize;

pub const MAX_CONFIDENCE: f64 = 0.95;

/// Certainty of a verdict, held in `[0.0, MAX_CONFIDENCE]` at two decimals.
///
/// Rounding is half away from zero (`f64::round`), not banker's rounding.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Confidence(f64);

impl Confidence {
    pub fn new(raw: f64) -> Self {
        let clamped = if raw.is_nan() {
            0.0
        } else {
            raw.clamp(0.0, MAX_CONFIDENCE)
        };
        Self((clamped * 100.0).round() / 100.0)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}
