//! Unified error system for Till
//!
//! This module provides:
//! - [`ErrorCode`]: Standardized error codes for all error types
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Rich error type with codes, messages, and details
//! - [`ApiResponse`]: Unified API response format
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Period errors
//! - 2xxx: Sales errors
//! - 3xxx: Expense errors
//! - 4xxx: Order errors
//! - 5xxx: Ledger errors
//! - 6xxx: Settings errors
//! - 7xxx and above: System errors (defined codes use 9xxx)
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::new(ErrorCode::SaleNotFound);
//!
//! let err = AppError::validation("Item must not be empty")
//!     .with_detail("field", "item");
//!
//! let response = ApiResponse::<()>::error(&err);
//! assert_eq!(response.code, Some(2));
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
