use std::sync::Arc;

use crate::application::ports::{
    AudioInspectionError, AudioInspector, ClassifierError, VoiceClassifier,
};
use crate::domain::{
    AudioPayload, DEFAULT_MIN_AUDIO_BYTES, Detection, Language, PayloadError, explain,
};

#[derive(Debug, Clone, Copy)]
pub struct DetectionOptions {
    pub min_audio_bytes: usize,
}

impl Default for DetectionOptions {
    fn default() -> Self {
        Self {
            min_audio_bytes: DEFAULT_MIN_AUDIO_BYTES,
        }
    }
}

pub struct DetectionService<C>
where
    C: VoiceClassifier + ?Sized,
{
    classifier: Arc<C>,
    inspector: Option<Arc<dyn AudioInspector>>,
    options: DetectionOptions,
}

impl<C> DetectionService<C>
where
    C: VoiceClassifier + ?Sized,
{
    pub fn new(
        classifier: Arc<C>,
        inspector: Option<Arc<dyn AudioInspector>>,
        options: DetectionOptions,
    ) -> Self {
        Self {
            classifier,
            inspector,
            options,
        }
    }

    pub async fn detect(
        &self,
        audio_base64: &str,
        language: &str,
    ) -> Result<Detection, DetectionError> {
        let parsed_language = language.parse::<Language>().ok();
        if parsed_language.is_none() {
            tracing::debug!(
                language = %language,
                "Unrecognised language, using generic explanation"
            );
        }

        let payload = AudioPayload::from_base64(audio_base64, self.options.min_audio_bytes)?;

        tracing::debug!(bytes = payload.len(), "Audio payload decoded");

        if let Some(inspector) = &self.inspector {
            let inspector = Arc::clone(inspector);
            let audio = payload.clone();
            let info = tokio::task::spawn_blocking(move || inspector.inspect(&audio))
                .await
                .map_err(|e| DetectionError::Internal(format!("inspection task: {}", e)))??;

            tracing::debug!(
                codec = %info.codec,
                sample_rate = info.sample_rate,
                channels = info.channels,
                duration_secs = info.duration_secs,
                "Audio payload verified"
            );
        }

        let verdict = self.classifier.classify(&payload).await?;

        tracing::info!(
            classification = %verdict.classification,
            confidence = verdict.confidence.value(),
            score = verdict.score,
            language = parsed_language.map(|l| l.as_str()).unwrap_or("unknown"),
            "Voice classified"
        );

        Ok(Detection {
            classification: verdict.classification,
            confidence: verdict.confidence,
            explanation: explain(parsed_language, verdict.classification).to_string(),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error(transparent)]
    Payload(#[from] PayloadError),
    #[error("audio inspection failed: {0}")]
    Inspection(#[from] AudioInspectionError),
    #[error(transparent)]
    Classification(#[from] ClassifierError),
    #[error("internal error: {0}")]
    Internal(String),
}
