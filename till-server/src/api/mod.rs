//! HTTP routes for till-server

pub mod business_date;
pub mod expenses;
pub mod health;
pub mod ledger;
pub mod orders;
pub mod sales;
pub mod settings;
pub mod summary;

use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, put};
use axum::{Json, Router};
use http::{HeaderValue, Method, StatusCode};
use shared::error::AppError;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::analytics::DateRange;
use crate::state::AppState;

pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Request bodies are small JSON payloads
const MAX_BODY_BYTES: usize = 64 * 1024;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_CONCURRENT_REQUESTS: usize = 256;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_allow_origin);

    let api = Router::new()
        .route("/api/business-date", get(business_date::resolve_business_date))
        // Sales buckets
        .route("/api/sales", get(sales::list_sales).post(sales::create_sale))
        .route(
            "/api/sales/{id}",
            get(sales::get_sale)
                .put(sales::update_sale)
                .delete(sales::delete_sale),
        )
        // Expenses
        .route(
            "/api/expenses",
            get(expenses::list_expenses).post(expenses::create_expense),
        )
        .route(
            "/api/expenses/{id}",
            get(expenses::get_expense)
                .put(expenses::update_expense)
                .delete(expenses::delete_expense),
        )
        // POS orders
        .route("/api/orders", get(orders::list_orders).post(orders::record_order))
        .route(
            "/api/orders/{id}",
            get(orders::get_order).delete(orders::delete_order),
        )
        // Personal ledger
        .route(
            "/api/ledger",
            get(ledger::list_entries).post(ledger::create_entry),
        )
        .route("/api/ledger/balances", get(ledger::balances))
        .route(
            "/api/ledger/{id}",
            put(ledger::update_entry).delete(ledger::delete_entry),
        )
        // Settings and reporting
        .route(
            "/api/settings",
            get(settings::get_settings).put(settings::update_settings),
        )
        .route("/api/summary", get(summary::get_summary));

    Router::new()
        .route("/health", get(health::health_check))
        .merge(api)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            REQUEST_TIMEOUT,
        ))
        .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENT_REQUESTS))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(origin: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any);

    if origin.trim() == "*" {
        return layer.allow_origin(Any);
    }
    match HeaderValue::from_str(origin.trim()) {
        Ok(value) => layer.allow_origin(value),
        Err(_) => {
            tracing::warn!(%origin, "Invalid CORS_ALLOW_ORIGIN, cross-origin requests disabled");
            layer
        }
    }
}

/// Parse `start`/`end` query bounds; both absent means today's business date.
pub(crate) fn range_or_today(
    state: &AppState,
    start: Option<&str>,
    end: Option<&str>,
) -> Result<DateRange, AppError> {
    if start.is_none() && end.is_none() {
        return Ok(DateRange::single(state.resolver.today()));
    }
    Ok(DateRange::parse(start, end)?)
}
