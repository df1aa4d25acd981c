use std::sync::Arc;

use sowdoc::application::services::{AnalysisError, AnalysisService};
use sowdoc::domain::{DocumentType, Platform};
use sowdoc::infrastructure::llm::MockLlmClient;

use crate::support::project;

const SOW: &str = "Requirement: Dual VPN tunnels to the data centre";

#[tokio::test]
async fn given_model_returns_json_when_analyzing_then_normalizes_reply() {
    let llm = Arc::new(MockLlmClient::with_response(
        r#"{"projectName":"Landing Zone","requirements":["Encrypt data at rest"]}"#,
    ));
    let service = AnalysisService::new(llm.clone());

    let analysis = service
        .analyze(SOW, Platform::Aws, DocumentType::Hld, &project())
        .await;

    assert_eq!(llm.calls(), 1);
    assert_eq!(analysis.project_name, "Landing Zone");
    assert_eq!(analysis.requirements, ["Encrypt data at rest"]);
    assert_eq!(analysis.raw_text, SOW);
}

#[tokio::test]
async fn given_model_unreachable_when_analyzing_then_uses_keyword_fallback() {
    let service = AnalysisService::new(Arc::new(MockLlmClient::failing()));

    let analysis = service
        .analyze(SOW, Platform::Azure, DocumentType::Lld, &project())
        .await;

    assert_eq!(analysis.project_name, "Acme Migration");
    assert_eq!(analysis.requirements, ["Dual VPN tunnels to the data centre"]);
}

#[tokio::test]
async fn given_model_returns_prose_when_analyzing_then_uses_keyword_fallback() {
    let service = AnalysisService::new(Arc::new(MockLlmClient::with_response(
        "Sorry, I cannot help with that.",
    )));

    let analysis = service
        .analyze(SOW, Platform::Aws, DocumentType::Hld, &project())
        .await;

    assert_eq!(analysis.client_name, "Acme Corp");
    assert_eq!(
        analysis.solution_strategy.migration_approach,
        "To be determined"
    );
}

#[tokio::test]
async fn given_model_returns_prose_when_trying_analysis_then_reports_unparseable() {
    let service = AnalysisService::new(Arc::new(MockLlmClient::with_response("no json here")));

    let result = service
        .try_analyze(SOW, Platform::Aws, DocumentType::Hld, &project())
        .await;

    assert!(matches!(result, Err(AnalysisError::AiResponseUnparseable(_))));
}

#[tokio::test]
async fn given_model_unreachable_when_trying_analysis_then_reports_completion_error() {
    let service = AnalysisService::new(Arc::new(MockLlmClient::failing()));

    let result = service
        .try_analyze(SOW, Platform::Aws, DocumentType::Hld, &project())
        .await;

    assert!(matches!(result, Err(AnalysisError::Completion(_))));
}
