use super::classification::Classification;
use super::confidence::Confidence;

/// Classifier output before localization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Verdict {
    pub classification: Classification,
    pub confidence: Confidence,
    /// Raw statistic the verdict was derived from.
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub classification: Classification,
    pub confidence: Confidence,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AudioInfo {
    pub codec: String,
    pub sample_rate: u32,
    pub channels: usize,
    pub frames: u64,
    pub duration_secs: f64,
}
