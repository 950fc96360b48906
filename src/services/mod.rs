pub mod metrics_service;
pub mod portfolio_service;

pub use portfolio_service::PortfolioService;
