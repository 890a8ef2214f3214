//! till-server: sales, expenses and ledger bookkeeping for a small restaurant,
//! with business-date resolution and period analytics.

pub mod analytics;
pub mod api;
pub mod business_day;
pub mod config;
pub mod db;
pub mod error;
pub mod state;
pub mod utils;
