use std::sync::Arc;

use tokio::net::TcpListener;

use sowdoc::application::services::GenerationService;
use sowdoc::infrastructure::llm::create_gemini_client;
use sowdoc::infrastructure::observability::{TracingConfig, init_tracing};
use sowdoc::infrastructure::rendering::DocxRenderer;
use sowdoc::infrastructure::storage::FileStoreFactory;
use sowdoc::infrastructure::text_processing::CompositeFileLoader;
use sowdoc::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env()?;
    let settings = Settings::load(environment)?;

    init_tracing(
        TracingConfig::from_settings(&settings.logging, environment),
        settings.server.port,
    )?;

    let stores = FileStoreFactory::create(&settings.storage)?;
    let llm_client = Arc::new(create_gemini_client(&settings.llm)?);

    let generation_service = Arc::new(GenerationService::new(
        Arc::new(CompositeFileLoader::default()),
        llm_client,
        Arc::new(DocxRenderer::new()),
        stores.uploads,
        stores.outputs,
    ));

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let router = create_router(AppState::new(generation_service, settings));

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Listening on http://{}", addr);
    tracing::info!("Health check: http://{}/api/health", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
