//! Shared types for Till
//!
//! Models, the unified error system and small utilities used by the server
//! and (through JSON) by the dashboard.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
