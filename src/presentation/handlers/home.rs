use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::application::ports::VoiceClassifier;
use crate::presentation::handlers::ErrorResponse;
use crate::presentation::state::AppState;

/// Serves the landing page configured at `server.index_path`.
pub async fn home_handler<C>(State(state): State<AppState<C>>) -> Response
where
    C: VoiceClassifier + ?Sized + 'static,
{
    let path = &state.settings.server.index_path;

    match tokio::fs::read_to_string(path).await {
        Ok(page) => Html(page).into_response(),
        Err(e) => {
            tracing::warn!(path = %path, error = %e, "Landing page unavailable");
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Landing page not found".to_string(),
                }),
            )
                .into_response()
        }
    }
}
