use serde::{Deserialize, Deserializer, Serialize};

/// Metadata the user supplies alongside the SOW upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectDetails {
    pub project_name: String,
    pub client_name: String,
    pub author_name: String,
    #[serde(default = "default_version", deserialize_with = "version_or_default")]
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

fn default_version() -> String {
    "1.0".to_string()
}

fn version_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_version))
}

impl Default for ProjectDetails {
    fn default() -> Self {
        Self::new("", "", "")
    }
}

impl ProjectDetails {
    pub fn new(
        project_name: impl Into<String>,
        client_name: impl Into<String>,
        author_name: impl Into<String>,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            client_name: client_name.into(),
            author_name: author_name.into(),
            version: default_version(),
            region: None,
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn has_required_fields(&self) -> bool {
        !self.project_name.trim().is_empty()
            && !self.client_name.trim().is_empty()
            && !self.author_name.trim().is_empty()
    }

    /// Region with empty strings treated as absent.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref().filter(|r| !r.trim().is_empty())
    }
}
