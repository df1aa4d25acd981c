use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

static FENCED_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"```(?:json)?\s*([\s\S]*?)```").unwrap());

static OBJECT_SPAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{[\s\S]*\}").unwrap());

#[derive(Debug, thiserror::Error)]
#[error("model response is not valid JSON ({length} chars)")]
pub struct UnparseableResponse {
    pub length: usize,
}

/// Extracts the JSON payload from a model reply.
///
/// Tries the whole body, then the first fenced code block, then the widest
/// `{...}` span.
pub fn parse_analysis_response(text: &str) -> Result<Value, UnparseableResponse> {
    if let Ok(value) = serde_json::from_str::<Value>(text) {
        return Ok(value);
    }

    if let Some(captures) = FENCED_BLOCK.captures(text) {
        match serde_json::from_str::<Value>(captures[1].trim()) {
            Ok(value) => return Ok(value),
            Err(e) => tracing::debug!(error = %e, "Fenced block is not valid JSON"),
        }
    }

    if let Some(found) = OBJECT_SPAN.find(text) {
        match serde_json::from_str::<Value>(found.as_str()) {
            Ok(value) => return Ok(value),
            Err(e) => tracing::debug!(error = %e, "Object span is not valid JSON"),
        }
    }

    Err(UnparseableResponse { length: text.len() })
}
