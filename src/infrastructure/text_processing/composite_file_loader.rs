use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{SourceDocument, SourceFormat};

use super::{DocxAdapter, PdfAdapter, PlainTextAdapter};

/// Dispatches each upload to the adapter registered for its format.
pub struct CompositeFileLoader {
    adapters: HashMap<SourceFormat, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new(adapters: Vec<(SourceFormat, Arc<dyn FileLoader>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }
}

impl Default for CompositeFileLoader {
    /// Text, PDF and DOCX adapters.
    fn default() -> Self {
        let text: Arc<dyn FileLoader> = Arc::new(PlainTextAdapter);
        let pdf: Arc<dyn FileLoader> = Arc::new(PdfAdapter::new());
        let docx: Arc<dyn FileLoader> = Arc::new(DocxAdapter);
        Self::new(vec![
            (SourceFormat::Text, text),
            (SourceFormat::Pdf, pdf),
            (SourceFormat::Docx, docx),
        ])
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &SourceDocument,
    ) -> Result<String, FileLoaderError> {
        let adapter = self.adapters.get(&document.format).ok_or_else(|| {
            FileLoaderError::UnsupportedFileType(document.format.as_extension().to_string())
        })?;

        tracing::debug!(format = document.format.as_extension(), "Dispatching extraction");
        adapter.extract_text(data, document).await
    }
}
