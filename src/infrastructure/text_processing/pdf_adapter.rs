use std::io::Write;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;
use tempfile::NamedTempFile;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{SourceDocument, SourceFormat};

use super::text_sanitizer::sanitize_extracted_text;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);
const PAGE_SEPARATOR: &str = "\n\n";

/// Text layer of a PDF, page by page. Scanned pages without a text layer
/// are skipped.
#[derive(Default)]
pub struct PdfAdapter;

struct PdfText {
    page_count: usize,
    pages: Vec<String>,
}

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    /// `pdf_oxide` only opens files, so the upload is spooled to a temp file
    /// that is removed when this returns.
    fn read_pages(data: &[u8]) -> Result<PdfText, FileLoaderError> {
        let mut spool = NamedTempFile::new()
            .and_then(|mut file| file.write_all(data).map(|_| file))
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to spool PDF: {e}")))?;
        spool
            .flush()
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to spool PDF: {e}")))?;

        let mut doc = PdfDocument::open(spool.path())
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;
        let page_count = doc.page_count().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        let pages = (0..page_count)
            .filter_map(|index| match doc.extract_text(index) {
                Ok(raw) => Some(sanitize_extracted_text(&raw)).filter(|t| !t.is_empty()),
                Err(e) => {
                    tracing::debug!(page = index + 1, error = %e, "Skipping unreadable page");
                    None
                }
            })
            .collect();

        Ok(PdfText { page_count, pages })
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(
            generation_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &SourceDocument,
    ) -> Result<String, FileLoaderError> {
        if document.format != SourceFormat::Pdf {
            return Err(FileLoaderError::UnsupportedFileType(
                document.format.as_extension().to_string(),
            ));
        }

        let bytes = data.to_vec();
        let extracted = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::read_pages(&bytes)),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(
            page_count = extracted.page_count,
            pages_with_text = extracted.pages.len(),
            "PDF text extraction complete"
        );

        if extracted.pages.is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        Ok(extracted.pages.join(PAGE_SEPARATOR))
    }
}
