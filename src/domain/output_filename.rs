use std::fmt;

use super::{DocumentType, GenerationId};

/// Name of a generated document inside the outputs store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFilename(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid filename")]
pub struct InvalidFilename;

impl OutputFilename {
    /// `{id}_{safe project}_{ABBR}_v{version}.docx`
    pub fn new(
        id: &GenerationId,
        project_name: &str,
        document_type: DocumentType,
        version: &str,
    ) -> Self {
        Self(format!(
            "{}_{}",
            id.as_uuid(),
            Self::download_name(project_name, document_type, version)
        ))
    }

    /// Name offered to the browser, without the generation id prefix.
    pub fn download_name(project_name: &str, document_type: DocumentType, version: &str) -> String {
        format!(
            "{}_{}_v{}.docx",
            safe_name(project_name),
            document_type.abbreviation(),
            version
        )
    }

    /// Accepts a client-supplied name, rejecting anything that could escape
    /// the outputs directory.
    pub fn parse(raw: &str) -> Result<Self, InvalidFilename> {
        if raw.is_empty() || raw.contains("..") || raw.contains('/') || raw.contains('\\') {
            return Err(InvalidFilename);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Replaces every character outside `[A-Za-z0-9_-]` with `_`.
pub fn safe_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

impl fmt::Display for OutputFilename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
