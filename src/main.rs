use compass::api::{self, app_state::AppState};
use compass::catalog::SermonCatalog;
use compass::config::loader::ConfigLoader;
use compass::llm::create_chat_model;
use compass::observability::{
    self, ObservabilityState, create_observability_router, metrics_middleware,
};
use compass::services::create_conversation_service;
use compass::storage::FileUserStore;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ConfigLoader::load()?;
    ConfigLoader::validate(&config)?;

    observability::init_tracing(
        &config.app_name,
        &config.logging.level,
        config.logging.structured,
    );

    info!("Starting Compass...");
    info!("Configuration loaded successfully");

    let catalog = Arc::new(SermonCatalog::load(&config.catalog.path));

    let store = Arc::new(FileUserStore::new(&config.storage.logs_dir));
    info!("User store rooted at {}", config.storage.logs_dir.display());

    let api_key = std::env::var("OPENAI_API_KEY").ok();
    let chat_model = create_chat_model(&config.model, api_key, &config.app_name)?;
    info!(
        "Chat model initialized: {} (backend: {})",
        config.model.model, config.model.backend
    );

    let conversation_service = create_conversation_service(
        store,
        Arc::from(chat_model),
        catalog.clone(),
        config.persona.variant,
    );
    info!(
        "Conversation service initialized (persona variant: {:?})",
        config.persona.variant
    );

    let observability_state = Arc::new(ObservabilityState::new(
        env!("CARGO_PKG_VERSION").to_string(),
    ));
    observability_state.metrics.set_catalog_size(catalog.len());

    let app_state = AppState::new(
        conversation_service,
        observability_state.metrics.clone(),
        config.pages.static_dir.clone(),
    );
    info!("Application state created");

    let api_router = api::create_router(app_state);
    let router = create_observability_router(observability_state.clone())
        .merge(api_router)
        .layer(axum::middleware::from_fn_with_state(
            observability_state,
            metrics_middleware,
        ));
    info!("API router created with observability endpoints");

    // PaaS 部署（Railway 等）用 PORT 环境变量覆盖监听端口
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(config.server.port);
    let addr = format!("{}:{}", config.server.host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
