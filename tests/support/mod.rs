use std::collections::HashMap;

use chrono::NaiveDate;

use sowdoc::application::ports::FileLoader;
use sowdoc::domain::{
    DocumentType, Platform, ProjectDetails, RenderContext, SourceDocument, SourceFormat,
    SowAnalysis,
};
use sowdoc::infrastructure::text_processing::DocxAdapter;
use sowdoc::presentation::{Environment, Settings};

pub const BOUNDARY: &str = "sowdoc-test-boundary";

pub fn project() -> ProjectDetails {
    ProjectDetails::new("Acme Migration", "Acme Corp", "Jane Architect").with_region("eu-west-1")
}

pub fn context(analysis: SowAnalysis, platform: Platform, doc_type: DocumentType) -> RenderContext {
    RenderContext::merge(
        analysis,
        project(),
        None,
        platform,
        doc_type,
        NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
    )
}

pub fn settings_from(vars: &[(&str, &str)]) -> Settings {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Settings::from_vars(Environment::Test, vars).unwrap()
}

/// Extracts the visible text of a generated document.
pub async fn docx_text(bytes: &[u8]) -> String {
    let document = SourceDocument::new(
        "generated.docx".to_string(),
        SourceFormat::Docx,
        bytes.len() as u64,
    );
    DocxAdapter.extract_text(bytes, &document).await.unwrap()
}

pub enum Part<'a> {
    Text(&'a str, &'a str),
    File(&'a str, &'a str, &'a [u8]),
}

pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File(name, filename, data) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(data);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}
