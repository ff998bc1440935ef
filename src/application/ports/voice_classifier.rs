use async_trait::async_trait;

use crate::domain::{AudioPayload, Verdict};

#[async_trait]
pub trait VoiceClassifier: Send + Sync {
    async fn classify(&self, audio: &AudioPayload) -> Result<Verdict, ClassifierError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("classification failed: {0}")]
    ClassificationFailed(String),
    #[error("classifier initialization failed: {0}")]
    InitializationFailed(String),
}
