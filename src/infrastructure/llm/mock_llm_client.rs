use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{LlmClient, LlmClientError};

enum Reply {
    Text(String),
    NetworkFailure,
}

/// Scripted client for tests: answers every prompt the same way and counts
/// how often it was asked.
pub struct MockLlmClient {
    reply: Reply,
    calls: AtomicUsize,
}

impl MockLlmClient {
    pub fn with_response(text: impl Into<String>) -> Self {
        Self {
            reply: Reply::Text(text.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: Reply::NetworkFailure,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, _prompt: &str) -> Result<String, LlmClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Reply::Text(text) => Ok(text.clone()),
            Reply::NetworkFailure => Err(LlmClientError::ApiRequestFailed(
                "connection refused".to_string(),
            )),
        }
    }

    fn model(&self) -> &str {
        "mock"
    }
}
