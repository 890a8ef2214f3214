//! Personal Ledger Model (per-person credit/debit book)

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(type_name = "ledger_kind", rename_all = "lowercase"))]
pub enum LedgerKind {
    /// Money received from the person
    Credit,
    /// Money given to the person
    Debit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub id: i64,
    pub person: String,
    pub entry_date: NaiveDate,
    pub kind: LedgerKind,
    pub amount: Decimal,
    pub description: Option<String>,
    pub created_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntryCreate {
    pub person: String,
    /// Defaults to the current business date
    pub entry_date: Option<NaiveDate>,
    pub kind: LedgerKind,
    pub amount: Decimal,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntryUpdate {
    pub person: Option<String>,
    pub entry_date: Option<NaiveDate>,
    pub kind: Option<LedgerKind>,
    pub amount: Option<Decimal>,
    pub description: Option<String>,
}

/// Running balance for one person (credit - debit)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct LedgerBalance {
    pub person: String,
    pub total_credit: Decimal,
    pub total_debit: Decimal,
    pub balance: Decimal,
    pub entry_count: i64,
}
