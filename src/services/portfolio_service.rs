use tracing::info;

use crate::errors::AppError;
use crate::models::{AssetRecord, MetricsResponse, PortfolioTable, UpdateOutcome};
use crate::services::metrics_service;
use crate::store::{LoadSource, PortfolioStore};

/// The process-wide handle to a portfolio: the in-memory table plus the file it
/// is loaded from and saved to. Nothing touches the file except `load` and `save`
/// (and `add_and_save`, which is add followed by save).
#[derive(Debug)]
pub struct PortfolioService {
    store: PortfolioStore,
    table: PortfolioTable,
}

impl PortfolioService {
    /// A service with an empty table; the file is not read.
    pub fn new(store: PortfolioStore) -> Self {
        Self {
            store,
            table: PortfolioTable::new(),
        }
    }

    /// A service whose table is read from `store` straight away.
    pub fn open(store: PortfolioStore) -> Result<Self, AppError> {
        let mut service = Self::new(store);
        service.load()?;
        Ok(service)
    }

    pub fn table(&self) -> &PortfolioTable {
        &self.table
    }

    pub fn store(&self) -> &PortfolioStore {
        &self.store
    }

    /// Replaces the in-memory table with the file contents.
    pub fn load(&mut self) -> Result<LoadSource, AppError> {
        let (table, source) = self.store.load_with_source()?;
        self.table = table;
        Ok(source)
    }

    pub fn save(&self) -> Result<(), AppError> {
        self.store.save(&self.table)
    }

    pub fn add_asset(&mut self, record: AssetRecord) {
        info!("Adding asset {}", record.asset);
        self.table.add_asset(record);
    }

    /// Appends and persists. If the write fails the in-memory table is left as it was.
    pub fn add_and_save(&mut self, record: AssetRecord) -> Result<(), AppError> {
        info!("Adding asset {}", record.asset);
        let mut next = self.table.clone();
        next.add_asset(record);
        self.store.save(&next)?;
        self.table = next;
        Ok(())
    }

    pub fn update_price(&mut self, asset: &str, new_price: f64) -> UpdateOutcome {
        let outcome = self.table.update_price(asset, new_price);
        match outcome {
            UpdateOutcome::Updated { rows } => {
                info!("Updated price of {} to {} ({} rows)", asset, new_price, rows)
            }
            UpdateOutcome::NotFound => info!("Price update skipped, {} not in portfolio", asset),
        }
        outcome
    }

    pub fn metrics(&self) -> MetricsResponse {
        MetricsResponse {
            assets: metrics_service::compute_row_metrics(&self.table),
            summary: metrics_service::compute_aggregate(&self.table),
        }
    }
}
