pub mod api;
pub mod assets;
pub mod health;
pub mod metrics;
