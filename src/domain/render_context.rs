use chrono::NaiveDate;

use super::{DocumentType, Platform, ProjectDetails, SowAnalysis};

pub const UNTITLED_PROJECT: &str = "Untitled Project";
pub const DEFAULT_CLIENT: &str = "Client";

/// Everything an assembler and renderer need for one document.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderContext {
    pub analysis: SowAnalysis,
    pub project: ProjectDetails,
    pub additional_info: String,
    pub platform: Platform,
    pub document_type: DocumentType,
    pub generated_on: NaiveDate,
    pub project_name: String,
    pub client_name: String,
}

impl RenderContext {
    /// User-supplied names take precedence over the ones found in the SOW.
    pub fn merge(
        analysis: SowAnalysis,
        project: ProjectDetails,
        additional_info: Option<String>,
        platform: Platform,
        document_type: DocumentType,
        generated_on: NaiveDate,
    ) -> Self {
        let project_name = first_non_empty(&[&project.project_name, &analysis.project_name])
            .unwrap_or(UNTITLED_PROJECT)
            .to_string();
        let client_name = first_non_empty(&[&project.client_name, &analysis.client_name])
            .unwrap_or(DEFAULT_CLIENT)
            .to_string();

        Self {
            analysis,
            project,
            additional_info: additional_info.unwrap_or_default(),
            platform,
            document_type,
            generated_on,
            project_name,
            client_name,
        }
    }

    /// Date in the `Month D, YYYY` form used throughout the documents.
    pub fn formatted_date(&self) -> String {
        self.generated_on.format("%B %-d, %Y").to_string()
    }

    pub fn has_additional_info(&self) -> bool {
        !self.additional_info.trim().is_empty()
    }
}

fn first_non_empty<'a>(candidates: &[&'a String]) -> Option<&'a str> {
    candidates
        .iter()
        .map(|s| s.as_str())
        .find(|s| !s.trim().is_empty())
}
