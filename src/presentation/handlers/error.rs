use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{FileLoaderError, FileStoreError};
use crate::application::services::GenerationError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

/// An error as the HTTP client sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub kind: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            kind,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "ValidationError", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "NotFound", message)
    }
}

impl From<GenerationError> for ApiError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::FileLoading(FileLoaderError::UnsupportedFileType(ext)) => Self::new(
                StatusCode::BAD_REQUEST,
                "UnsupportedFileType",
                format!("Unsupported file type: {ext}"),
            ),
            GenerationError::FileLoading(e) => Self::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                "ExtractionError",
                e.to_string(),
            ),
            GenerationError::Storage(FileStoreError::NotFound(_)) => {
                Self::not_found("File not found")
            }
            GenerationError::Storage(e) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "StorageError",
                e.to_string(),
            ),
            GenerationError::Rendering(e) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "RenderError",
                e.to_string(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(
                status = %self.status,
                kind = self.kind,
                error = %self.message,
                "Request failed"
            );
        } else {
            tracing::warn!(
                status = %self.status,
                kind = self.kind,
                error = %self.message,
                "Request rejected"
            );
        }

        (
            self.status,
            Json(ErrorResponse {
                success: false,
                error: self.message,
                kind: self.kind,
            }),
        )
            .into_response()
    }
}
