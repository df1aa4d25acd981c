use std::sync::Arc;
use std::time::Instant;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{DocumentType, Platform, ProjectDetails, SowAnalysis};

use super::fallback_analysis::fallback_analysis;
use super::normalizer::normalize;
use super::prompt::build_analysis_prompt;
use super::response_parser::{UnparseableResponse, parse_analysis_response};

pub struct AnalysisService<L>
where
    L: LlmClient,
{
    llm_client: Arc<L>,
}

impl<L> AnalysisService<L>
where
    L: LlmClient,
{
    pub fn new(llm_client: Arc<L>) -> Self {
        Self { llm_client }
    }

    /// Analyzes the SOW with the model, degrading to the keyword-based
    /// fallback when the call or the response parsing fails.
    #[tracing::instrument(
        skip(self, sow_text, project),
        fields(model = %self.llm_client.model(), sow_chars = sow_text.len())
    )]
    pub async fn analyze(
        &self,
        sow_text: &str,
        platform: Platform,
        document_type: DocumentType,
        project: &ProjectDetails,
    ) -> SowAnalysis {
        match self
            .try_analyze(sow_text, platform, document_type, project)
            .await
        {
            Ok(analysis) => analysis,
            Err(e) => {
                tracing::warn!(error = %e, "AI analysis failed, using fallback analysis");
                fallback_analysis(sow_text, project)
            }
        }
    }

    pub async fn try_analyze(
        &self,
        sow_text: &str,
        platform: Platform,
        document_type: DocumentType,
        project: &ProjectDetails,
    ) -> Result<SowAnalysis, AnalysisError> {
        let prompt = build_analysis_prompt(sow_text, platform, document_type, project);

        let started = Instant::now();
        let response = self.llm_client.complete(&prompt).await?;
        tracing::info!(
            model = %self.llm_client.model(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            response_chars = response.len(),
            "SOW analysis complete"
        );

        let raw = parse_analysis_response(&response)?;
        Ok(normalize(&raw, sow_text))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("completion: {0}")]
    Completion(#[from] LlmClientError),
    #[error("unparseable response: {0}")]
    AiResponseUnparseable(#[from] UnparseableResponse),
}
