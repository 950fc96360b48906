use std::sync::Arc;
use parking_lot::Mutex;
use crate::services::PortfolioService;

/// Shared by every handler. Each load-mutate-save sequence holds the lock for its
/// whole duration, so writers inside one process never interleave.
#[derive(Clone)]
pub struct AppState {
    pub portfolio: Arc<Mutex<PortfolioService>>,
}

impl AppState {
    pub fn new(service: PortfolioService) -> Self {
        Self {
            portfolio: Arc::new(Mutex::new(service)),
        }
    }
}
