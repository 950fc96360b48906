use chrono::NaiveDateTime;

use super::asset::{now, AssetRecord};

/// Column headers of the persisted table, in file order.
pub const COLUMNS: [&str; 5] = ["Asset", "Purchase Price", "Quantity", "Current Price", "Last Updated"];

// Ordered collection of holdings. Insertion order is preserved and asset names
// are not required to be unique.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortfolioTable {
    records: Vec<AssetRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated { rows: usize },
    NotFound,
}

impl PortfolioTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<AssetRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[AssetRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, asset: &str) -> bool {
        self.records.iter().any(|r| r.asset == asset)
    }

    /// Appends a record. Duplicate names are accepted.
    pub fn add_asset(&mut self, record: AssetRecord) {
        tracing::debug!("Appending asset {} at row {}", record.asset, self.records.len());
        self.records.push(record);
    }

    /// Sets `current_price` on every row named `asset` and stamps it with the current time.
    pub fn update_price(&mut self, asset: &str, new_price: f64) -> UpdateOutcome {
        self.update_price_at(asset, new_price, now())
    }

    pub fn update_price_at(&mut self, asset: &str, new_price: f64, at: NaiveDateTime) -> UpdateOutcome {
        let mut rows = 0;
        for record in self.records.iter_mut().filter(|r| r.asset == asset) {
            record.current_price = new_price;
            record.last_updated = at;
            rows += 1;
        }

        if rows == 0 {
            UpdateOutcome::NotFound
        } else {
            UpdateOutcome::Updated { rows }
        }
    }
}
