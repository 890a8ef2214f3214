//! Error types for till-server
//!
//! Three layers:
//! - [`CoreError`]: failures of the pure business-day and aggregation logic
//! - [`ServiceError`]: storage-layer failures bridged into [`AppError`]
//! - [`AppError`]: the HTTP-facing error (from `shared`)
//!
//! `ServiceError` exists so handlers can use `?` on sqlx calls without
//! `.map_err(|e| { tracing::error!(...); AppError::new(...) })` boilerplate.

use axum::response::IntoResponse;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Validation failures raised by the business-day resolver and the aggregator.
///
/// All of these are detected before any computation runs and are never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("invalid range: {0}")]
    InvalidRange(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl CoreError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::InvalidTimestamp(_) => ErrorCode::InvalidTimestamp,
            CoreError::InvalidRange(_) => ErrorCode::InvalidRange,
            CoreError::InvalidConfig(_) => ErrorCode::InvalidConfig,
        }
    }
}

impl From<CoreError> for AppError {
    fn from(e: CoreError) -> Self {
        tracing::debug!(error = %e, "Rejected request input");
        AppError::with_message(e.code(), e.to_string())
    }
}

/// Service-layer error, two variants only.
///
/// - `Db`: Database/infrastructure errors (auto-logged, mapped to InternalError)
/// - `App`: Business-rule errors (transparent pass-through to client)
#[derive(Debug)]
pub enum ServiceError {
    /// Database or infrastructure error
    Db(BoxError),
    /// Business-rule error (already an AppError with the correct ErrorCode)
    App(AppError),
}

impl From<sqlx::Error> for ServiceError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &e
            && db_err.is_unique_violation()
        {
            let resource = db_err.constraint().unwrap_or("record").to_string();
            return ServiceError::App(AppError::already_exists(resource));
        }
        ServiceError::Db(e.into())
    }
}

impl From<BoxError> for ServiceError {
    fn from(e: BoxError) -> Self {
        ServiceError::Db(e)
    }
}

impl From<AppError> for ServiceError {
    fn from(e: AppError) -> Self {
        ServiceError::App(e)
    }
}

impl From<CoreError> for ServiceError {
    fn from(e: CoreError) -> Self {
        ServiceError::App(e.into())
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::App(app_err) => app_err,
            ServiceError::Db(db_err) => {
                tracing::error!(error = %db_err, "Service database error");
                AppError::new(ErrorCode::InternalError)
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

/// Convenience type alias for service-layer results
pub type ServiceResult<T> = Result<T, ServiceError>;
