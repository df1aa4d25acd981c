use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{SourceDocument, SourceFormat};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// UTF-8 text files, with a leading byte order mark dropped.
pub struct PlainTextAdapter;

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &SourceDocument,
    ) -> Result<String, FileLoaderError> {
        if document.format != SourceFormat::Text {
            return Err(FileLoaderError::UnsupportedFileType(
                document.format.as_extension().to_string(),
            ));
        }

        let body = data.strip_prefix(UTF8_BOM).unwrap_or(data);
        std::str::from_utf8(body)
            .map(str::to_owned)
            .map_err(|e| {
                FileLoaderError::ExtractionFailed(format!(
                    "invalid UTF-8 at byte {}",
                    e.valid_up_to()
                ))
            })
    }
}
