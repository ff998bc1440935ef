use crate::application::ports::{ClassifierError, VoiceClassifier};
use crate::domain::{AudioPayload, Classification, Confidence, Verdict};

/// Returns a fixed verdict regardless of input.
pub struct MockClassifier {
    verdict: Verdict,
}

impl MockClassifier {
    pub fn new(classification: Classification, confidence: f64) -> Self {
        Self {
            verdict: Verdict {
                classification,
                confidence: Confidence::new(confidence),
                score: confidence,
            },
        }
    }
}

impl Default for MockClassifier {
    fn default() -> Self {
        Self::new(Classification::HumanGenerated, 0.5)
    }
}

#[async_trait::async_trait]
impl VoiceClassifier for MockClassifier {
    async fn classify(&self, _audio: &AudioPayload) -> Result<Verdict, ClassifierError> {
        Ok(self.verdict)
    }
}
