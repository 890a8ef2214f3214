//! Logging and request validation helpers

pub mod logger;
pub mod validation;
