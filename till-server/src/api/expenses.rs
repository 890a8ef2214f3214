//! Expense endpoints

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use shared::error::{ApiResponse, AppError, ErrorCode};
use shared::models::{ExpenseCreate, ExpenseRecord, ExpenseUpdate};

use crate::db;
use crate::state::AppState;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_UNIT_LEN, validate_amount, validate_optional_amount,
    validate_optional_quantity, validate_optional_text, validate_required_text,
};

use super::{ApiResult, range_or_today};

/// GET /api/expenses?start=&end=
#[derive(Debug, Deserialize)]
pub struct ExpensesQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

fn not_found(id: i64) -> AppError {
    AppError::new(ErrorCode::ExpenseNotFound).with_detail("id", id)
}

pub async fn list_expenses(
    State(state): State<AppState>,
    Query(query): Query<ExpensesQuery>,
) -> ApiResult<Vec<ExpenseRecord>> {
    let range = range_or_today(&state, query.start.as_deref(), query.end.as_deref())?;
    let rows = db::expenses::list_expenses(&state.pool, &range).await?;
    Ok(Json(rows))
}

pub async fn create_expense(
    State(state): State<AppState>,
    Json(data): Json<ExpenseCreate>,
) -> ApiResult<ExpenseRecord> {
    validate_required_text(&data.item, "item", MAX_NAME_LEN)?;
    validate_amount(data.amount, "amount")?;
    validate_optional_quantity(data.quantity, "quantity")?;
    validate_optional_text(&data.unit, "unit", MAX_UNIT_LEN)?;
    validate_optional_text(&data.notes, "notes", MAX_NOTE_LEN)?;

    let business_date = data
        .business_date
        .unwrap_or_else(|| state.resolver.today());
    let record = db::expenses::create_expense(&state.pool, business_date, &data).await?;
    tracing::info!(id = record.id, item = %record.item, %business_date, "Expense recorded");
    Ok(Json(record))
}

pub async fn get_expense(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<ExpenseRecord> {
    db::expenses::get_expense(&state.pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found(id))
}

pub async fn update_expense(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(data): Json<ExpenseUpdate>,
) -> ApiResult<ExpenseRecord> {
    if let Some(item) = &data.item {
        validate_required_text(item, "item", MAX_NAME_LEN)?;
    }
    validate_optional_amount(data.amount, "amount")?;
    validate_optional_quantity(data.quantity, "quantity")?;
    validate_optional_text(&data.unit, "unit", MAX_UNIT_LEN)?;
    validate_optional_text(&data.notes, "notes", MAX_NOTE_LEN)?;

    let record = db::expenses::update_expense(&state.pool, id, &data)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(record))
}

pub async fn delete_expense(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ApiResponse<()>, AppError> {
    if !db::expenses::delete_expense(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "Expense deleted");
    Ok(ApiResponse::ok())
}
