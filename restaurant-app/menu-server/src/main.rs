use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tracing::info;

use menu_api::{router, AppState};
use menu_core::engine::id_generator_for;
use menu_core::repositories::MenuRepository;
use menu_core::services::MenuEditorService;
use menu_infrastructure::InMemoryMenuRepository;
use menu_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().context("failed to load configuration")?;

    // Initialize telemetry (guard flushes the log file on exit)
    let _log_guard = menu_shared::telemetry::init_telemetry(&config.logging)?;

    info!("Menu server starting ({} environment)...", config.app.env);

    // Persistence adapter
    let repo = if config.editor.seed_sample_menu {
        InMemoryMenuRepository::with_sample_menu()
    } else {
        InMemoryMenuRepository::new()
    };
    let menu_repo: Arc<dyn MenuRepository> = Arc::new(repo);

    // Editor service
    let ids = id_generator_for(config.editor.id_strategy);
    info!("Using {:?} id strategy", config.editor.id_strategy);
    let editor = Arc::new(MenuEditorService::new(menu_repo, ids));

    // Build router
    let state = AppState::new(editor, config.clone());

    // Spawn idle session sweeper
    let sessions = state.sessions.clone();
    let sweep_every = sessions.ttl().max(Duration::from_secs(1));
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(sweep_every);
        loop {
            ticker.tick().await;
            sessions.cleanup_expired();
        }
    });
    info!("Idle editor sessions expire after {:?}", state.sessions.ttl());

    let app = router(state).layer(
        CorsLayer::new()
            .allow_origin("http://localhost:5173".parse::<axum::http::HeaderValue>()?)
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([axum::http::header::CONTENT_TYPE]),
    );

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Menu server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
