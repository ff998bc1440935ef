use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::response::{IntoResponse, Response};

use crate::presentation::handlers::ErrorResponse;

/// `Json` extractor whose rejections use the `{"error": ...}` body of the
/// other handlers. The rejection's status (400, 413, 415, 422) is kept.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                let status = rejection.status();
                let message = rejection.body_text();
                tracing::warn!(status = %status, error = %message, "Request body rejected");
                Err((status, Json(ErrorResponse { error: message })).into_response())
            }
        }
    }
}
