pub mod portfolio_file;

pub use portfolio_file::{LoadSource, PortfolioStore};
