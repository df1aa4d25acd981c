use std::sync::Arc;
use std::time::Instant;

use crate::application::ports::{DocumentRenderer, FileLoader, LlmClient};
use crate::application::services::GenerationService;
use crate::presentation::config::Settings;

pub struct AppState<F, L, R>
where
    F: FileLoader,
    L: LlmClient,
    R: DocumentRenderer,
{
    pub generation_service: Arc<GenerationService<F, L, R>>,
    pub settings: Settings,
    pub started_at: Instant,
}

impl<F, L, R> AppState<F, L, R>
where
    F: FileLoader,
    L: LlmClient,
    R: DocumentRenderer,
{
    pub fn new(generation_service: Arc<GenerationService<F, L, R>>, settings: Settings) -> Self {
        Self {
            generation_service,
            settings,
            started_at: Instant::now(),
        }
    }
}

impl<F, L, R> Clone for AppState<F, L, R>
where
    F: FileLoader,
    L: LlmClient,
    R: DocumentRenderer,
{
    fn clone(&self) -> Self {
        Self {
            generation_service: Arc::clone(&self.generation_service),
            settings: self.settings.clone(),
            started_at: self.started_at,
        }
    }
}
