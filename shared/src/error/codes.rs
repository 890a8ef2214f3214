//! Unified error codes for Till
//!
//! This module defines all error codes used by the server and the dashboard.
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Period errors (timestamps, date ranges)
//! - 2xxx: Sales errors
//! - 3xxx: Expense errors
//! - 4xxx: POS order errors
//! - 5xxx: Personal ledger errors
//! - 6xxx: Settings errors
//! - 7xxx and above: System errors (defined codes use 9xxx)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Period ====================
    /// Timestamp could not be parsed
    InvalidTimestamp = 1001,
    /// Date range is malformed or end precedes start
    InvalidRange = 1002,

    // ==================== 2xxx: Sales ====================
    /// Sale record not found
    SaleNotFound = 2001,
    /// Unknown sales source
    InvalidSaleSource = 2002,
    /// Amount is negative or not finite
    InvalidAmount = 2003,

    // ==================== 3xxx: Expense ====================
    /// Expense record not found
    ExpenseNotFound = 3001,

    // ==================== 4xxx: Order ====================
    /// POS order not found
    OrderNotFound = 4001,

    // ==================== 5xxx: Ledger ====================
    /// Ledger entry not found
    LedgerEntryNotFound = 5001,

    // ==================== 6xxx: Settings ====================
    /// Configuration value is invalid (e.g. profit rate outside [0, 1])
    InvalidConfig = 6001,
    /// Currency code is invalid
    InvalidCurrency = 6002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Period
            ErrorCode::InvalidTimestamp => "Timestamp could not be parsed",
            ErrorCode::InvalidRange => "Invalid date range",

            // Sales
            ErrorCode::SaleNotFound => "Sale record not found",
            ErrorCode::InvalidSaleSource => "Unknown sales source",
            ErrorCode::InvalidAmount => "Invalid amount",

            // Expense
            ErrorCode::ExpenseNotFound => "Expense not found",

            // Order
            ErrorCode::OrderNotFound => "Order not found",

            // Ledger
            ErrorCode::LedgerEntryNotFound => "Ledger entry not found",

            // Settings
            ErrorCode::InvalidConfig => "Invalid configuration value",
            ErrorCode::InvalidCurrency => "Invalid currency code",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Period
            1001 => Ok(ErrorCode::InvalidTimestamp),
            1002 => Ok(ErrorCode::InvalidRange),

            // Sales
            2001 => Ok(ErrorCode::SaleNotFound),
            2002 => Ok(ErrorCode::InvalidSaleSource),
            2003 => Ok(ErrorCode::InvalidAmount),

            // Expense
            3001 => Ok(ErrorCode::ExpenseNotFound),

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),

            // Ledger
            5001 => Ok(ErrorCode::LedgerEntryNotFound),

            // Settings
            6001 => Ok(ErrorCode::InvalidConfig),
            6002 => Ok(ErrorCode::InvalidCurrency),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::ValueOutOfRange.code(), 8);

        assert_eq!(ErrorCode::InvalidTimestamp.code(), 1001);
        assert_eq!(ErrorCode::InvalidRange.code(), 1002);
        assert_eq!(ErrorCode::SaleNotFound.code(), 2001);
        assert_eq!(ErrorCode::ExpenseNotFound.code(), 3001);
        assert_eq!(ErrorCode::OrderNotFound.code(), 4001);
        assert_eq!(ErrorCode::LedgerEntryNotFound.code(), 5001);
        assert_eq!(ErrorCode::InvalidConfig.code(), 6001);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_is_success() {
        assert!(ErrorCode::Success.is_success());
        assert!(!ErrorCode::Unknown.is_success());
        assert!(!ErrorCode::InvalidRange.is_success());
    }

    #[test]
    fn test_try_from_roundtrips_every_code() {
        let codes = [
            ErrorCode::Success,
            ErrorCode::Unknown,
            ErrorCode::ValidationFailed,
            ErrorCode::NotFound,
            ErrorCode::AlreadyExists,
            ErrorCode::InvalidRequest,
            ErrorCode::InvalidFormat,
            ErrorCode::RequiredField,
            ErrorCode::ValueOutOfRange,
            ErrorCode::InvalidTimestamp,
            ErrorCode::InvalidRange,
            ErrorCode::SaleNotFound,
            ErrorCode::InvalidSaleSource,
            ErrorCode::InvalidAmount,
            ErrorCode::ExpenseNotFound,
            ErrorCode::OrderNotFound,
            ErrorCode::LedgerEntryNotFound,
            ErrorCode::InvalidConfig,
            ErrorCode::InvalidCurrency,
            ErrorCode::InternalError,
            ErrorCode::DatabaseError,
            ErrorCode::ConfigError,
        ];
        for code in codes {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(1234), Err(InvalidErrorCode(1234)));
    }

    #[test]
    fn test_serde_as_number() {
        assert_eq!(serde_json::to_string(&ErrorCode::InvalidRange).unwrap(), "1002");
        let code: ErrorCode = serde_json::from_str("6001").unwrap();
        assert_eq!(code, ErrorCode::InvalidConfig);
        assert!(serde_json::from_str::<ErrorCode>("10000").is_err());
    }

    #[test]
    fn test_display_and_message() {
        assert_eq!(format!("{}", ErrorCode::SaleNotFound), "2001");
        assert_eq!(ErrorCode::SaleNotFound.message(), "Sale record not found");
        assert_eq!(
            format!("{}", InvalidErrorCode(999)),
            "invalid error code: 999"
        );
    }
}
