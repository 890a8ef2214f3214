//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Period errors
/// - 2xxx: Sales errors
/// - 3xxx: Expense errors
/// - 4xxx: Order errors
/// - 5xxx: Ledger errors
/// - 6xxx: Settings errors
/// - 7xxx and above: System errors (defined codes use 9xxx)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Timestamp and date-range errors (1xxx)
    Period,
    /// Sales errors (2xxx)
    Sales,
    /// Expense errors (3xxx)
    Expense,
    /// POS order errors (4xxx)
    Order,
    /// Personal ledger errors (5xxx)
    Ledger,
    /// Settings errors (6xxx)
    Settings,
    /// System errors (7xxx and above, defined codes use 9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Period,
            2000..3000 => Self::Sales,
            3000..4000 => Self::Expense,
            4000..5000 => Self::Order,
            5000..6000 => Self::Ledger,
            6000..7000 => Self::Settings,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Period => "period",
            Self::Sales => "sales",
            Self::Expense => "expense",
            Self::Order => "order",
            Self::Ledger => "ledger",
            Self::Settings => "settings",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
