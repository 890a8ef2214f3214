//! Personal ledger endpoints

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use shared::error::{ApiResponse, AppError, ErrorCode};
use shared::models::{LedgerBalance, LedgerEntry, LedgerEntryCreate, LedgerEntryUpdate};

use crate::db;
use crate::state::AppState;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_amount, validate_optional_amount, validate_optional_text,
    validate_required_text,
};

use super::ApiResult;

/// GET /api/ledger?person=
#[derive(Debug, Deserialize)]
pub struct LedgerQuery {
    pub person: Option<String>,
}

fn not_found(id: i64) -> AppError {
    AppError::new(ErrorCode::LedgerEntryNotFound).with_detail("id", id)
}

pub async fn list_entries(
    State(state): State<AppState>,
    Query(query): Query<LedgerQuery>,
) -> ApiResult<Vec<LedgerEntry>> {
    let person = query.person.as_deref().map(str::trim).filter(|p| !p.is_empty());
    let rows = db::ledger::list_ledger_entries(&state.pool, person).await?;
    Ok(Json(rows))
}

pub async fn create_entry(
    State(state): State<AppState>,
    Json(data): Json<LedgerEntryCreate>,
) -> ApiResult<LedgerEntry> {
    validate_required_text(&data.person, "person", MAX_NAME_LEN)?;
    validate_amount(data.amount, "amount")?;
    validate_optional_text(&data.description, "description", MAX_NOTE_LEN)?;

    let entry_date = data.entry_date.unwrap_or_else(|| state.resolver.today());
    let entry = db::ledger::create_ledger_entry(&state.pool, entry_date, &data).await?;
    tracing::info!(id = entry.id, person = %entry.person, kind = ?entry.kind, "Ledger entry created");
    Ok(Json(entry))
}

pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(data): Json<LedgerEntryUpdate>,
) -> ApiResult<LedgerEntry> {
    if let Some(person) = &data.person {
        validate_required_text(person, "person", MAX_NAME_LEN)?;
    }
    validate_optional_amount(data.amount, "amount")?;
    validate_optional_text(&data.description, "description", MAX_NOTE_LEN)?;

    let entry = db::ledger::update_ledger_entry(&state.pool, id, &data)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(entry))
}

pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<ApiResponse<()>, AppError> {
    if !db::ledger::delete_ledger_entry(&state.pool, id).await? {
        return Err(not_found(id));
    }
    tracing::info!(id, "Ledger entry deleted");
    Ok(ApiResponse::ok())
}

/// GET /api/ledger/balances
pub async fn balances(State(state): State<AppState>) -> ApiResult<Vec<LedgerBalance>> {
    let rows = db::ledger::ledger_balances(&state.pool).await?;
    Ok(Json(rows))
}
