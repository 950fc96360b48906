use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_PORTFOLIO_FILE: &str = "portfolio.csv";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub portfolio_file: PathBuf,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    /// Reads `PORTFOLIO_FILE` and `BIND_ADDR`, falling back to the defaults.
    pub fn from_env() -> Result<Self, String> {
        let portfolio_file = std::env::var("PORTFOLIO_FILE")
            .unwrap_or_else(|_| DEFAULT_PORTFOLIO_FILE.to_string());
        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        Self::from_parts(&portfolio_file, &bind_addr)
    }

    pub fn from_parts(portfolio_file: &str, bind_addr: &str) -> Result<Self, String> {
        if portfolio_file.trim().is_empty() {
            return Err("PORTFOLIO_FILE cannot be empty".to_string());
        }
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|e| format!("Invalid BIND_ADDR '{}': {}", bind_addr, e))?;

        Ok(Self {
            portfolio_file: PathBuf::from(portfolio_file),
            bind_addr,
        })
    }
}
