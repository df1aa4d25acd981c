use crate::domain::{DocumentBlock, RenderContext};

pub trait DocumentRenderer: Send + Sync {
    /// Serializes the blocks, preceded by a title page, into a finished file.
    fn render(
        &self,
        blocks: &[DocumentBlock],
        context: &RenderContext,
    ) -> Result<Vec<u8>, RenderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("document serialization failed: {0}")]
    Serialization(String),
}
