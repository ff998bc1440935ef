use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::VoiceClassifier;
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{detect_handler, health_handler, home_handler};
use crate::presentation::state::AppState;

pub fn create_router<C>(state: AppState<C>) -> Router
where
    C: VoiceClassifier + ?Sized + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = DefaultBodyLimit::max(state.settings.server.max_body_bytes);

    Router::new()
        .route("/", get(home_handler::<C>))
        .route("/health", get(health_handler))
        .route("/detect", post(detect_handler::<C>))
        .layer(body_limit)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
