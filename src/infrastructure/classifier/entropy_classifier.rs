use crate::application::ports::{ClassifierError, VoiceClassifier};
use crate::domain::{AudioPayload, Classification, Confidence, Verdict};

pub const DEFAULT_ENTROPY_THRESHOLD: f64 = 7.2;

/// Entropy at which an AI verdict would score zero confidence.
const AI_CONFIDENCE_FLOOR: f64 = 6.5;

/// Classifies payloads by the Shannon entropy of their byte histogram.
///
/// Synthesized audio tends to compress into denser, near-uniform byte
/// streams, so entropy above the threshold is read as AI-generated.
pub struct EntropyClassifier {
    threshold: f64,
}

impl EntropyClassifier {
    pub fn new(threshold: f64) -> Result<Self, ClassifierError> {
        if !(0.0..=8.0).contains(&threshold) {
            return Err(ClassifierError::InitializationFailed(format!(
                "entropy threshold must be within 0..=8 bits, got {}",
                threshold
            )));
        }
        Ok(Self { threshold })
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn verdict_for(&self, entropy: f64) -> Verdict {
        if entropy > self.threshold {
            Verdict {
                classification: Classification::AiGenerated,
                confidence: Confidence::new((entropy - AI_CONFIDENCE_FLOOR) / 2.0),
                score: entropy,
            }
        } else {
            Verdict {
                classification: Classification::HumanGenerated,
                confidence: Confidence::new((self.threshold - entropy) / 2.0),
                score: entropy,
            }
        }
    }
}

impl Default for EntropyClassifier {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_ENTROPY_THRESHOLD,
        }
    }
}

#[async_trait::async_trait]
impl VoiceClassifier for EntropyClassifier {
    async fn classify(&self, audio: &AudioPayload) -> Result<Verdict, ClassifierError> {
        if audio.is_empty() {
            return Err(ClassifierError::ClassificationFailed(
                "empty audio payload".to_string(),
            ));
        }

        let entropy = shannon_entropy(audio.as_bytes());
        tracing::debug!(entropy, threshold = self.threshold, "Byte entropy computed");

        Ok(self.verdict_for(entropy))
    }
}

/// Shannon entropy in bits per byte. Empty input yields 0.
pub fn shannon_entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    let mut histogram = [0usize; 256];
    for &byte in data {
        histogram[byte as usize] += 1;
    }

    let len = data.len() as f64;
    histogram
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

