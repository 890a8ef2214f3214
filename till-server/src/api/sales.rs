//! Sale bucket endpoints

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use shared::error::{ApiResponse, AppError, ErrorCode};
use shared::models::{SaleCreate, SaleRecord, SaleSource, SaleUpdate};

use crate::db;
use crate::state::AppState;
use crate::utils::validation::{
    MAX_NOTE_LEN, validate_amount, validate_count, validate_optional_amount,
    validate_optional_text,
};

use super::{ApiResult, range_or_today};

/// GET /api/sales?start=&end=&source=
#[derive(Debug, Deserialize)]
pub struct SalesQuery {
    pub start: Option<String>,
    pub end: Option<String>,
    pub source: Option<String>,
}

pub(crate) fn parse_source(raw: &str) -> Result<SaleSource, AppError> {
    raw.parse::<SaleSource>()
        .map_err(|e| AppError::with_message(ErrorCode::InvalidSaleSource, e.to_string()))
}

fn not_found(id: i64) -> AppError {
    AppError::new(ErrorCode::SaleNotFound).with_detail("id", id)
}

pub async fn list_sales(
    State(state): State<AppState>,
    Query(query): Query<SalesQuery>,
) -> ApiResult<Vec<SaleRecord>> {
    let range = range_or_today(&state, query.start.as_deref(), query.end.as_deref())?;
    let source = query
        .source
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(parse_source)
        .transpose()?;
    let rows = db::sales::list_sales(&state.pool, &range, source).await?;
    Ok(Json(rows))
}

/// POST /api/sales - adds into the (date, source) bucket
pub async fn create_sale(
    State(state): State<AppState>,
    Json(data): Json<SaleCreate>,
) -> ApiResult<SaleRecord> {
    validate_count(data.order_count, "orderCount")?;
    validate_amount(data.gross_amount, "grossAmount")?;
    validate_optional_text(&data.notes, "notes", MAX_NOTE_LEN)?;

    let business_date = data
        .business_date
        .unwrap_or_else(|| state.resolver.today());
    let record = db::sales::upsert_sale(
        &state.pool,
        business_date,
        data.source,
        data.order_count,
        data.gross_amount,
        data.notes.as_deref(),
    )
    .await?;

    tracing::info!(
        %business_date,
        source = %data.source,
        amount = %data.gross_amount,
        "Manual sale entry recorded"
    );
    Ok(Json(record))
}

pub async fn get_sale(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<SaleRecord> {
    db::sales::get_sale(&state.pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(id))
}

pub async fn update_sale(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(data): Json<SaleUpdate>,
) -> ApiResult<SaleRecord> {
    if let Some(count) = data.order_count {
        validate_count(count, "orderCount")?;
    }
    validate_optional_amount(data.gross_amount, "grossAmount")?;
    validate_optional_text(&data.notes, "notes", MAX_NOTE_LEN)?;

    let record = db::sales::update_sale(&state.pool, id, &data)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, "Sale record updated");
    Ok(Json(record))
}

pub async fn delete_sale(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ApiResponse<()>, AppError> {
    if !db::sales::delete_sale(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "Sale record deleted");
    Ok(ApiResponse::ok())
}
