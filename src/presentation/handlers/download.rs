use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;

use crate::application::ports::{DocumentRenderer, FileLoader, LlmClient};
use crate::domain::OutputFilename;
use crate::presentation::state::AppState;

use super::error::ApiError;

pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[tracing::instrument(skip(state))]
pub async fn download_handler<F, L, R>(
    State(state): State<AppState<F, L, R>>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
    R: DocumentRenderer + 'static,
{
    let output =
        OutputFilename::parse(&filename).map_err(|e| ApiError::validation(e.to_string()))?;

    let bytes = state.generation_service.fetch_output(&output).await?;
    tracing::debug!(bytes = bytes.len(), "Serving generated document");

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, DOCX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", output),
            ),
        ],
        bytes,
    ))
}
