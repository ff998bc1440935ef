use std::sync::Arc;

use crate::application::ports::{ClassifierError, VoiceClassifier};
use crate::presentation::config::ClassifierProvider;

use super::entropy_classifier::EntropyClassifier;
use super::mock_classifier::MockClassifier;

pub struct ClassifierFactory;

impl ClassifierFactory {
    pub fn create(
        provider: ClassifierProvider,
        entropy_threshold: f64,
    ) -> Result<Arc<dyn VoiceClassifier>, ClassifierError> {
        match provider {
            ClassifierProvider::Entropy => {
                let classifier = EntropyClassifier::new(entropy_threshold)?;
                tracing::info!(
                    threshold = classifier.threshold(),
                    "Using byte-entropy classifier"
                );
                Ok(Arc::new(classifier))
            }
            ClassifierProvider::Mock => {
                tracing::warn!("Using mock classifier, verdicts are fixed");
                Ok(Arc::new(MockClassifier::default()))
            }
        }
    }
}
