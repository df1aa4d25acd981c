use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{DocumentRenderer, FileLoader, LlmClient};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{download_handler, generate_handler, health_handler};
use crate::presentation::state::AppState;

/// Headroom for the non-file form fields.
const FORM_OVERHEAD_BYTES: usize = 1024 * 1024;

pub fn create_router<F, L, R>(state: AppState<F, L, R>) -> Router
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
    R: DocumentRenderer + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    // Backstop only. The generate handler enforces the exact file limit while
    // the upload streams in.
    let body_limit = state
        .settings
        .storage
        .max_file_size
        .saturating_mul(2)
        .saturating_add(FORM_OVERHEAD_BYTES);

    Router::new()
        .route("/api/health", get(health_handler::<F, L, R>))
        .route(
            "/api/generate",
            post(generate_handler::<F, L, R>).layer(DefaultBodyLimit::max(body_limit)),
        )
        .route("/api/download/{filename}", get(download_handler::<F, L, R>))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
