use motochat_ai::{GeminiBackend, GenerativeBackend};
use motochat_assistant::MessageRouter;
use motochat_catalog::{CatalogKind, CatalogLookup, MemoryCatalog, SqlCatalog};
use motochat_conversation::ConversationStore;
use motochat_server::{config::ServerConfig, routes, state::AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = ServerConfig::from_env().expect("failed to load configuration");
    tracing::info!("Loaded configuration");

    // Open the catalog variant chosen by configuration; the router only
    // ever sees the CatalogLookup trait.
    let catalog: Arc<dyn CatalogLookup> = match config.catalog.kind {
        CatalogKind::Sql => {
            let catalog = SqlCatalog::connect(&config.catalog.database_url)
                .await
                .expect("failed to open catalog database");

            tracing::info!("Running catalog migrations...");
            sqlx::migrate!("./migrations")
                .run(catalog.pool())
                .await
                .expect("failed to run migrations");

            Arc::new(catalog)
        }
        CatalogKind::Memory => {
            tracing::info!("Using in-memory demo catalog");
            Arc::new(MemoryCatalog::demo())
        }
    };

    let backend = GeminiBackend::new(config.gemini.clone())
        .expect("failed to build generative backend");
    tracing::info!(model = backend.model(), "Generative backend ready");

    let store = Arc::new(ConversationStore::new());

    // Spawn periodic idle-session eviction
    let sweep_store = store.clone();
    let max_idle = chrono::Duration::minutes(config.session.idle_minutes);
    let sweep_interval =
        std::time::Duration::from_secs(config.session.cleanup_interval_seconds);
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(sweep_interval);
        loop {
            interval.tick().await;
            let removed = sweep_store.remove_idle(max_idle);
            if removed > 0 {
                tracing::debug!(removed_sessions = removed, "evicted idle sessions");
            }
        }
    });

    let router = MessageRouter::new(store.clone(), catalog, Arc::new(backend), config.persona);
    let state = Arc::new(AppState::new(store, router));

    let app = routes::app(state, &config.assets_dir);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .expect("failed to bind to address");

    tracing::info!("listening on http://{}", config.listen_addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("server error");
}
