use crate::domain::{AudioInfo, AudioPayload};

/// Verifies that a payload decodes as audio. Implementations are CPU-bound and
/// are expected to run off the async executor.
pub trait AudioInspector: Send + Sync {
    fn inspect(&self, audio: &AudioPayload) -> Result<AudioInfo, AudioInspectionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioInspectionError {
    #[error("audio decoding failed: {0}")]
    DecodingFailed(String),
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),
}
