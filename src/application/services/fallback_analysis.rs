use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{
    DEFAULT_CLIENT, ExecutiveSummary, ProjectDetails, Scope, SolutionStrategy, SowAnalysis,
    UNTITLED_PROJECT,
};

static IN_SCOPE: LazyLock<Regex> =
    LazyLock::new(|| keyword_pattern("in scope|included|scope includes"));
static OUT_OF_SCOPE: LazyLock<Regex> =
    LazyLock::new(|| keyword_pattern("out of scope|excluded|not included"));
static REQUIREMENT: LazyLock<Regex> = LazyLock::new(|| keyword_pattern("requirement|shall|must"));
static ASSUMPTION: LazyLock<Regex> = LazyLock::new(|| keyword_pattern("assumption|assumed"));

fn keyword_pattern(keywords: &str) -> Regex {
    Regex::new(&format!(r"(?i)(?:{keywords})[:\s]*([^\n]+)")).unwrap()
}

/// Structurally complete analysis built without the model, using keyword
/// scans over the raw SOW text.
pub fn fallback_analysis(sow_text: &str, project: &ProjectDetails) -> SowAnalysis {
    SowAnalysis {
        project_name: non_empty_or(&project.project_name, UNTITLED_PROJECT),
        client_name: non_empty_or(&project.client_name, DEFAULT_CLIENT),
        executive_summary: ExecutiveSummary {
            overview: "Executive summary to be completed based on SOW analysis.".to_string(),
            ..ExecutiveSummary::default()
        },
        solution_strategy: SolutionStrategy {
            migration_approach: "To be determined".to_string(),
            ..SolutionStrategy::default()
        },
        scope: Scope {
            in_scope: extract_lines(&IN_SCOPE, sow_text),
            out_of_scope: extract_lines(&OUT_OF_SCOPE, sow_text),
        },
        requirements: extract_lines(&REQUIREMENT, sow_text),
        assumptions: extract_lines(&ASSUMPTION, sow_text),
        raw_text: sow_text.to_string(),
        ..SowAnalysis::default()
    }
}

fn extract_lines(pattern: &Regex, text: &str) -> Vec<String> {
    pattern
        .captures_iter(text)
        .map(|c| c[1].trim().to_string())
        .collect()
}

fn non_empty_or(value: &str, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}
