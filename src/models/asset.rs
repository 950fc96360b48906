use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Format used for `Last Updated`, both on disk and when rendered.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// A single holding: what was paid per unit, how many units, and the latest known price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    #[serde(rename = "Asset")]
    pub asset: String,
    #[serde(rename = "Purchase Price")]
    pub purchase_price: f64,
    #[serde(rename = "Quantity")]
    pub quantity: f64,
    #[serde(rename = "Current Price")]
    pub current_price: f64,
    #[serde(rename = "Last Updated", with = "timestamp")]
    pub last_updated: NaiveDateTime,
}

impl AssetRecord {
    /// Builds a record stamped with the current local time.
    pub fn new(asset: impl Into<String>, purchase_price: f64, quantity: f64, current_price: f64) -> Self {
        Self::new_at(asset, purchase_price, quantity, current_price, now())
    }

    pub fn new_at(
        asset: impl Into<String>,
        purchase_price: f64,
        quantity: f64,
        current_price: f64,
        last_updated: NaiveDateTime,
    ) -> Self {
        Self {
            asset: asset.into(),
            purchase_price,
            quantity,
            current_price,
            last_updated,
        }
    }

    pub fn cost_basis(&self) -> f64 {
        self.purchase_price * self.quantity
    }

    pub fn current_value(&self) -> f64 {
        self.quantity * self.current_price
    }

    pub fn last_updated_display(&self) -> String {
        self.last_updated.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Current local time truncated to whole seconds, matching what the file can hold.
pub(crate) fn now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Add-asset form as submitted by the browser. Numbers arrive as text and are
/// coerced in [`CreateAsset::into_record`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAsset {
    pub asset_name: String,
    pub purchase_price: String,
    pub quantity: String,
    pub current_price: String,
}

impl CreateAsset {
    pub fn into_record(self) -> Result<AssetRecord, String> {
        let name = self.asset_name.trim();
        if name.is_empty() {
            return Err("Asset name cannot be empty".to_string());
        }
        let purchase_price = parse_number("purchase_price", &self.purchase_price)?;
        let quantity = parse_number("quantity", &self.quantity)?;
        let current_price = parse_number("current_price", &self.current_price)?;

        Ok(AssetRecord::new(name, purchase_price, quantity, current_price))
    }
}

fn parse_number(field: &str, raw: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| format!("Invalid value for {}: '{}' is not a number", field, raw))
}

mod timestamp {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
