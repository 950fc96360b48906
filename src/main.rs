use anyhow::Context;
use tokio::net::TcpListener;

use portfolio_tracker::app;
use portfolio_tracker::config::AppConfig;
use portfolio_tracker::logging::{init_logging, LoggingConfig};
use portfolio_tracker::services::PortfolioService;
use portfolio_tracker::state::AppState;
use portfolio_tracker::store::PortfolioStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    init_logging(LoggingConfig::from_env())
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    let config = AppConfig::from_env().map_err(anyhow::Error::msg)?;

    // The table is read once here; every add after that writes it back.
    let service = PortfolioService::open(PortfolioStore::new(&config.portfolio_file))
        .with_context(|| format!("Failed to load portfolio from {:?}", config.portfolio_file))?;
    tracing::info!(
        "📂 Portfolio file {:?} ({} assets)",
        config.portfolio_file,
        service.table().len()
    );

    let app = app::create_app(AppState::new(service));

    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    tracing::info!("🚀 Portfolio tracker running at http://{}/", config.bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
