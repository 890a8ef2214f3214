//! POS Order Model
//!
//! Every recorded order is bucketed into the sale row of its business date.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::sale::SaleSource;

/// Recorded POS order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct PosOrder {
    pub id: i64,
    pub source: SaleSource,
    pub total_amount: Decimal,
    pub item_count: i32,
    /// Bucket key resolved from `ordered_at`
    pub business_date: NaiveDate,
    /// Unix millis
    pub ordered_at: i64,
    pub note: Option<String>,
}

/// Record order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosOrderCreate {
    pub source: SaleSource,
    pub total_amount: Decimal,
    #[serde(default)]
    pub item_count: Option<i32>,
    /// ISO-8601 timestamp; the current instant when absent
    pub timestamp: Option<String>,
    pub note: Option<String>,
}
