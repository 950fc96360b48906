use std::io;

use portfolio_tracker::config::AppConfig;
use portfolio_tracker::console::ConsoleSession;
use portfolio_tracker::logging::{init_logging, LoggingConfig};
use portfolio_tracker::services::PortfolioService;
use portfolio_tracker::store::PortfolioStore;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // stdout belongs to the menu
    init_logging(LoggingConfig::from_env().with_stderr())
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    let config = AppConfig::from_env().map_err(anyhow::Error::msg)?;

    // Starts empty; option 7 reads the file.
    let service = PortfolioService::new(PortfolioStore::new(&config.portfolio_file));

    let stdin = io::stdin();
    let mut session = ConsoleSession::new(service, stdin.lock(), io::stdout());
    session.run()?;

    Ok(())
}
