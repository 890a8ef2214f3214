//! POS order endpoints
//!
//! Recording an order resolves its business date through the shared resolver
//! and adds it to that day's sale bucket.

use axum::Json;
use axum::extract::{Path, Query, State};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use shared::error::{AppError, ErrorCode};
use shared::models::{PosOrder, PosOrderCreate, SaleRecord};

use crate::business_day::parse_timestamp;
use crate::db;
use crate::db::orders::NewOrder;
use crate::state::AppState;
use crate::utils::validation::{MAX_NOTE_LEN, validate_amount, validate_count, validate_optional_text};

use super::{ApiResult, range_or_today};

/// GET /api/orders?start=&end=
#[derive(Debug, Deserialize)]
pub struct OrdersQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordedOrder {
    pub order: PosOrder,
    /// The bucket after this order was added
    pub sale: SaleRecord,
}

fn not_found(id: i64) -> AppError {
    AppError::new(ErrorCode::OrderNotFound).with_detail("id", id)
}

pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<OrdersQuery>,
) -> ApiResult<Vec<PosOrder>> {
    let range = range_or_today(&state, query.start.as_deref(), query.end.as_deref())?;
    let rows = db::orders::list_orders(&state.pool, &range).await?;
    Ok(Json(rows))
}

/// POST /api/orders
pub async fn record_order(
    State(state): State<AppState>,
    Json(data): Json<PosOrderCreate>,
) -> ApiResult<RecordedOrder> {
    validate_amount(data.total_amount, "totalAmount")?;
    let item_count = data.item_count.unwrap_or(1);
    validate_count(item_count, "itemCount")?;
    validate_optional_text(&data.note, "note", MAX_NOTE_LEN)?;

    let ordered_at = match data.timestamp.as_deref() {
        Some(raw) => parse_timestamp(raw, state.resolver.timezone())?,
        None => Utc::now(),
    };
    let business_date = state.resolver.resolve_at(ordered_at);

    let new_order = NewOrder {
        source: data.source,
        total_amount: data.total_amount,
        item_count,
        business_date,
        ordered_at: ordered_at.timestamp_millis(),
        note: data.note.as_deref(),
    };
    let (order, sale) = db::orders::record_order(&state.pool, &new_order).await?;

    tracing::info!(
        order_id = order.id,
        source = %order.source,
        %business_date,
        amount = %order.total_amount,
        "POS order recorded"
    );
    Ok(Json(RecordedOrder { order, sale }))
}

pub async fn get_order(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<PosOrder> {
    db::orders::get_order(&state.pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(id))
}

/// DELETE /api/orders/{id} - voids the order and reverses its bucket contribution
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<PosOrder> {
    let order = db::orders::delete_order(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(order_id = id, business_date = %order.business_date, "POS order voided");
    Ok(Json(order))
}
