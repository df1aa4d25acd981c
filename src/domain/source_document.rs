use super::GenerationId;

/// An uploaded SOW file awaiting text extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDocument {
    pub id: GenerationId,
    pub filename: String,
    pub format: SourceFormat,
    pub size_bytes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    Pdf,
    Docx,
    Text,
}

pub const ALLOWED_EXTENSIONS: [&str; 3] = [".pdf", ".docx", ".txt"];

impl SourceFormat {
    /// Maps a lowercase extension including the leading dot.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            ".pdf" => Some(Self::Pdf),
            ".docx" => Some(Self::Docx),
            ".txt" => Some(Self::Text),
            _ => None,
        }
    }

    pub fn from_filename(filename: &str) -> Option<Self> {
        Self::from_extension(&extension_of(filename))
    }

    pub fn as_extension(&self) -> &'static str {
        match self {
            Self::Pdf => ".pdf",
            Self::Docx => ".docx",
            Self::Text => ".txt",
        }
    }
}

/// Lowercased extension with its dot, or an empty string when there is none.
pub fn extension_of(filename: &str) -> String {
    match filename.rfind('.') {
        Some(idx) if idx > 0 => filename[idx..].to_lowercase(),
        _ => String::new(),
    }
}

impl SourceDocument {
    pub fn new(filename: String, format: SourceFormat, size_bytes: u64) -> Self {
        Self {
            id: GenerationId::new(),
            filename,
            format,
            size_bytes,
        }
    }

    /// Name under which the raw upload is kept while it is processed.
    pub fn staged_name(&self) -> String {
        format!("{}{}", self.id.as_uuid(), self.format.as_extension())
    }
}
