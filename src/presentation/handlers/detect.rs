use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::ports::VoiceClassifier;
use crate::application::services::DetectionError;
use crate::domain::{Classification, Confidence, Detection, PayloadError};
use crate::presentation::handlers::{ErrorResponse, JsonBody};
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct DetectRequest {
    pub audio_base64: String,
    pub language: String,
}

#[derive(Serialize)]
pub struct DetectResponse {
    pub classification: Classification,
    pub confidence: Confidence,
    pub explanation: String,
}

impl From<Detection> for DetectResponse {
    fn from(detection: Detection) -> Self {
        Self {
            classification: detection.classification,
            confidence: detection.confidence,
            explanation: detection.explanation,
        }
    }
}

#[tracing::instrument(skip_all)]
pub async fn detect_handler<C>(
    State(state): State<AppState<C>>,
    JsonBody(request): JsonBody<DetectRequest>,
) -> Response
where
    C: VoiceClassifier + ?Sized + 'static,
{
    tracing::debug!(
        language = %request.language,
        encoded_len = request.audio_base64.len(),
        "Processing detection request"
    );

    match state
        .detection_service
        .detect(&request.audio_base64, &request.language)
        .await
    {
        Ok(detection) => (StatusCode::OK, Json(DetectResponse::from(detection))).into_response(),
        Err(e) => error_response(e),
    }
}

fn error_response(error: DetectionError) -> Response {
    let (status, message) = match &error {
        DetectionError::Payload(PayloadError::InvalidBase64(_)) => {
            (StatusCode::BAD_REQUEST, "Invalid Base64 audio".to_string())
        }
        DetectionError::Payload(PayloadError::AudioTooShort { .. }) => (
            StatusCode::BAD_REQUEST,
            "Audio too short for analysis".to_string(),
        ),
        DetectionError::Inspection(e) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("Audio could not be decoded: {}", e),
        ),
        DetectionError::Classification(_) | DetectionError::Internal(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Classification failed".to_string(),
        ),
    };

    if status.is_server_error() {
        tracing::error!(error = %error, "Detection failed");
    } else {
        tracing::warn!(error = %error, "Detection request rejected");
    }

    (status, Json(ErrorResponse { error: message })).into_response()
}
