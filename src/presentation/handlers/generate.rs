use axum::Json;
use axum::extract::multipart::{Field, MultipartError};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use bytes::{Bytes, BytesMut};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::ports::{DocumentRenderer, FileLoader, LlmClient};
use crate::application::services::GenerationRequest;
use crate::domain::{
    ALLOWED_EXTENSIONS, DocumentType, InvalidDocumentType, InvalidPlatform, Platform,
    ProjectDetails, extension_of,
};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::error::ApiError;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    pub download_url: String,
    pub filename: String,
    pub generated_at: DateTime<Utc>,
}

struct Upload {
    filename: String,
    data: Bytes,
}

#[derive(Default)]
struct GenerateForm {
    upload: Option<Upload>,
    platform: Option<String>,
    document_type: Option<String>,
    project_details: Option<String>,
    additional_info: Option<String>,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn generate_handler<F, L, R>(
    State(state): State<AppState<F, L, R>>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError>
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
    R: DocumentRenderer + 'static,
{
    let max_bytes = state.settings.storage.max_file_size;
    let oversize = format!(
        "File size exceeds the {}MB limit",
        state.settings.storage.max_file_size_mb()
    );

    let form = read_form(multipart, max_bytes, &oversize).await?;

    let upload = form
        .upload
        .ok_or_else(|| ApiError::validation("No SOW file uploaded"))?;

    let mut project: ProjectDetails = form
        .project_details
        .as_deref()
        .and_then(|raw| serde_json::from_str(raw).ok())
        .ok_or_else(|| ApiError::validation("Invalid projectDetails format"))?;

    let platform: Platform = form
        .platform
        .unwrap_or_default()
        .parse()
        .map_err(|e: InvalidPlatform| ApiError::validation(e.to_string()))?;

    let document_type: DocumentType = form
        .document_type
        .unwrap_or_default()
        .parse()
        .map_err(|e: InvalidDocumentType| ApiError::validation(e.to_string()))?;

    if !project.has_required_fields() {
        return Err(ApiError::validation(
            "projectName, clientName, and authorName are required",
        ));
    }
    if project.version.trim().is_empty() {
        project.version = ProjectDetails::default().version;
    }

    let additional_info = form.additional_info.filter(|info| !info.trim().is_empty());
    if let Some(info) = &additional_info {
        tracing::debug!(additional_info = %sanitize_prompt(info), "Additional info supplied");
    }

    tracing::info!(
        filename = %upload.filename,
        bytes = upload.data.len(),
        %platform,
        %document_type,
        "Generate request accepted"
    );

    let service = &state.generation_service;
    let source = service.stage_upload(&upload.filename, upload.data).await?;
    let generated = service
        .generate(GenerationRequest {
            source,
            platform,
            document_type,
            project,
            additional_info,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(GenerateResponse {
            success: true,
            download_url: format!("/api/download/{}", generated.output),
            filename: generated.download_name,
            generated_at: generated.generated_at,
        }),
    ))
}

async fn read_form(
    mut multipart: Multipart,
    max_bytes: usize,
    oversize: &str,
) -> Result<GenerateForm, ApiError> {
    let mut form = GenerateForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, oversize))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "sowFile" => form.upload = Some(read_upload(field, max_bytes, oversize).await?),
            "platform" => form.platform = Some(read_text(field, oversize).await?),
            "documentType" => form.document_type = Some(read_text(field, oversize).await?),
            "projectDetails" => form.project_details = Some(read_text(field, oversize).await?),
            "additionalInfo" => form.additional_info = Some(read_text(field, oversize).await?),
            other => tracing::debug!(field = other, "Ignoring unknown form field"),
        }
    }

    Ok(form)
}

/// Checks the extension before reading, then enforces the size limit while
/// the file streams in.
async fn read_upload(
    mut field: Field<'_>,
    max_bytes: usize,
    oversize: &str,
) -> Result<Upload, ApiError> {
    let filename = field.file_name().unwrap_or_default().to_string();
    let extension = extension_of(&filename);
    if !ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(ApiError::validation(format!(
            "Invalid file type: {}. Allowed: {}",
            extension,
            ALLOWED_EXTENSIONS.join(", ")
        )));
    }

    let mut data = BytesMut::new();
    while let Some(chunk) = field
        .chunk()
        .await
        .map_err(|e| multipart_error(e, oversize))?
    {
        if data.len() + chunk.len() > max_bytes {
            return Err(ApiError::validation(oversize));
        }
        data.extend_from_slice(&chunk);
    }

    Ok(Upload {
        filename,
        data: data.freeze(),
    })
}

async fn read_text(field: Field<'_>, oversize: &str) -> Result<String, ApiError> {
    field.text().await.map_err(|e| multipart_error(e, oversize))
}

fn multipart_error(err: MultipartError, oversize: &str) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::validation(oversize)
    } else {
        ApiError::validation(format!("Failed to read multipart: {}", err.body_text()))
    }
}
