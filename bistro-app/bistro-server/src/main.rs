use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{error, info};

use bistro_api::{build_router, html::HtmlRenderer, AppState};
use bistro_core::services::SiteService;
use bistro_core::{SiteContent, SiteLinks, TracingRenderLog};
use bistro_infrastructure::FileMenuRepository;
use bistro_shared::config::AppConfig;
use bistro_shared::AppError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    bistro_shared::telemetry::init_telemetry();

    info!("Bistro server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", AppError::from(e));
            std::process::exit(1);
        }
    };
    let environment = config.environment();
    info!("Configuration loaded (env: {})", environment);

    // Load menu data
    let repository = FileMenuRepository::new(&config.menu.data_path);
    info!("Loading menu data from {}", repository.path().display());
    let site = SiteService::from_repository(
        &repository,
        SiteContent::from_settings(&config.site),
        SiteLinks::new(&config.site.base_url),
        environment,
        Arc::new(TracingRenderLog),
    )
    .await?;

    // Build router
    let html = HtmlRenderer::new(&config.assets.mount_path())?;
    let app = build_router(AppState::new(site, html), &config.assets);

    // Bind address
    let host: std::net::IpAddr = config
        .app
        .host
        .parse()
        .map_err(|_| AppError::InvalidAddress(config.app.host.clone()))?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("{} listening on {}", config.app.name, addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
