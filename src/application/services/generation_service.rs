use std::sync::Arc;

use bytes::Bytes;
use chrono::{DateTime, Utc};

use crate::application::ports::{
    DocumentRenderer, FileLoader, FileLoaderError, FileStore, FileStoreError, LlmClient,
    RenderError,
};
use crate::domain::{
    DocumentType, OutputFilename, Platform, ProjectDetails, RenderContext, SourceDocument,
    SourceFormat, extension_of,
};

use super::analysis_service::AnalysisService;
use super::assembler::assemble;

/// A validated generate request whose upload has been staged.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub source: SourceDocument,
    pub platform: Platform,
    pub document_type: DocumentType,
    pub project: ProjectDetails,
    pub additional_info: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedDocument {
    pub output: OutputFilename,
    pub download_name: String,
    pub generated_at: DateTime<Utc>,
}

/// Runs one SOW through extraction, analysis, assembly and rendering, then
/// persists the result in the outputs store.
pub struct GenerationService<F, L, R>
where
    F: FileLoader,
    L: LlmClient,
    R: DocumentRenderer,
{
    file_loader: Arc<F>,
    analysis: AnalysisService<L>,
    renderer: Arc<R>,
    uploads: Arc<dyn FileStore>,
    outputs: Arc<dyn FileStore>,
}

impl<F, L, R> GenerationService<F, L, R>
where
    F: FileLoader,
    L: LlmClient,
    R: DocumentRenderer,
{
    pub fn new(
        file_loader: Arc<F>,
        llm_client: Arc<L>,
        renderer: Arc<R>,
        uploads: Arc<dyn FileStore>,
        outputs: Arc<dyn FileStore>,
    ) -> Self {
        Self {
            file_loader,
            analysis: AnalysisService::new(llm_client),
            renderer,
            uploads,
            outputs,
        }
    }

    /// Writes the raw upload to the uploads store and describes it.
    pub async fn stage_upload(
        &self,
        filename: &str,
        data: Bytes,
    ) -> Result<SourceDocument, GenerationError> {
        let format = SourceFormat::from_filename(filename).ok_or_else(|| {
            FileLoaderError::UnsupportedFileType(extension_of(filename))
        })?;
        let document = SourceDocument::new(filename.to_string(), format, data.len() as u64);
        self.uploads.put(&document.staged_name(), data).await?;
        tracing::debug!(
            filename = %document.filename,
            size_bytes = document.size_bytes,
            "Upload staged"
        );
        Ok(document)
    }

    /// Generates the document. The staged upload is removed whether or not
    /// generation succeeds.
    #[tracing::instrument(
        skip(self, request),
        fields(
            generation_id = %request.source.id.as_uuid(),
            platform = %request.platform,
            document_type = %request.document_type,
        )
    )]
    pub async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GeneratedDocument, GenerationError> {
        let staged = request.source.staged_name();
        let result = self.run(request).await;

        if let Err(e) = self.uploads.delete(&staged).await {
            tracing::warn!(error = %e, upload = %staged, "Failed to remove staged upload");
        }

        match &result {
            Ok(generated) => tracing::info!(output = %generated.output, "Document generated"),
            Err(e) => tracing::error!(error = %e, "Document generation failed"),
        }
        result
    }

    async fn run(&self, request: GenerationRequest) -> Result<GeneratedDocument, GenerationError> {
        let GenerationRequest {
            source,
            platform,
            document_type,
            project,
            additional_info,
        } = request;

        let data = self.uploads.fetch(&source.staged_name()).await?;
        let sow_text = self.file_loader.extract_text(&data, &source).await?;
        tracing::debug!(sow_chars = sow_text.len(), "SOW text extracted");

        let analysis = self
            .analysis
            .analyze(&sow_text, platform, document_type, &project)
            .await;

        let generated_at = Utc::now();
        let output = OutputFilename::new(
            &source.id,
            &project.project_name,
            document_type,
            &project.version,
        );
        let download_name =
            OutputFilename::download_name(&project.project_name, document_type, &project.version);

        let context = RenderContext::merge(
            analysis,
            project,
            additional_info,
            platform,
            document_type,
            generated_at.date_naive(),
        );
        let blocks = assemble(&context);
        let bytes = self.renderer.render(&blocks, &context)?;
        tracing::debug!(blocks = blocks.len(), docx_bytes = bytes.len(), "Document rendered");

        self.outputs.put(output.as_str(), Bytes::from(bytes)).await?;

        Ok(GeneratedDocument {
            output,
            download_name,
            generated_at,
        })
    }

    /// Reads a generated document back for download.
    pub async fn fetch_output(&self, output: &OutputFilename) -> Result<Vec<u8>, GenerationError> {
        Ok(self.outputs.fetch(output.as_str()).await?)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("file loading: {0}")]
    FileLoading(#[from] FileLoaderError),
    #[error("rendering: {0}")]
    Rendering(#[from] RenderError),
    #[error("storage: {0}")]
    Storage(#[from] FileStoreError),
}
