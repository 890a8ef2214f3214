//! Expense Model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Expense record - many rows per day per item are expected and summed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct ExpenseRecord {
    pub id: i64,
    pub business_date: NaiveDate,
    /// Free-text item label ("Chicken", "Gas cylinder", ...)
    pub item: String,
    pub quantity: Option<Decimal>,
    /// Unit of `quantity` ("kg", "pcs", ...)
    pub unit: Option<String>,
    pub amount: Decimal,
    pub notes: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create expense payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseCreate {
    /// Defaults to the current business date
    pub business_date: Option<NaiveDate>,
    pub item: String,
    pub quantity: Option<Decimal>,
    pub unit: Option<String>,
    pub amount: Decimal,
    pub notes: Option<String>,
}

/// Update expense payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseUpdate {
    pub business_date: Option<NaiveDate>,
    pub item: Option<String>,
    pub quantity: Option<Decimal>,
    pub unit: Option<String>,
    pub amount: Option<Decimal>,
    pub notes: Option<String>,
}
