use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::ports::{DocumentRenderer, FileLoader, LlmClient};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    /// Seconds since the server started.
    pub uptime: f64,
}

pub async fn health_handler<F, L, R>(State(state): State<AppState<F, L, R>>) -> impl IntoResponse
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
    R: DocumentRenderer + 'static,
{
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            uptime: state.started_at.elapsed().as_secs_f64(),
        }),
    )
}
