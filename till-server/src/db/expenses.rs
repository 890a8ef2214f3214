//! Expense operations

use chrono::NaiveDate;
use shared::models::{ExpenseCreate, ExpenseRecord, ExpenseUpdate};
use sqlx::PgPool;

use crate::analytics::DateRange;
use crate::error::ServiceResult;

pub async fn list_expenses(pool: &PgPool, range: &DateRange) -> ServiceResult<Vec<ExpenseRecord>> {
    let rows: Vec<ExpenseRecord> = sqlx::query_as(
        r#"
        SELECT id, business_date, item, quantity, unit, amount, notes, created_at, updated_at
        FROM expenses
        WHERE business_date BETWEEN $1 AND $2
        ORDER BY business_date, created_at
        "#,
    )
    .bind(range.start)
    .bind(range.end)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn get_expense(pool: &PgPool, id: i64) -> ServiceResult<Option<ExpenseRecord>> {
    let row: Option<ExpenseRecord> = sqlx::query_as(
        r#"
        SELECT id, business_date, item, quantity, unit, amount, notes, created_at, updated_at
        FROM expenses
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Insert an expense dated `business_date` (the payload's date already
/// resolved by the caller).
pub async fn create_expense(
    pool: &PgPool,
    business_date: NaiveDate,
    data: &ExpenseCreate,
) -> ServiceResult<ExpenseRecord> {
    let now = shared::util::now_millis();
    let row: ExpenseRecord = sqlx::query_as(
        r#"
        INSERT INTO expenses (
            id, business_date, item, quantity, unit, amount, notes, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8)
        RETURNING id, business_date, item, quantity, unit, amount, notes, created_at, updated_at
        "#,
    )
    .bind(shared::util::snowflake_id())
    .bind(business_date)
    .bind(data.item.trim())
    .bind(data.quantity)
    .bind(&data.unit)
    .bind(data.amount)
    .bind(&data.notes)
    .bind(now)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn update_expense(
    pool: &PgPool,
    id: i64,
    data: &ExpenseUpdate,
) -> ServiceResult<Option<ExpenseRecord>> {
    let row: Option<ExpenseRecord> = sqlx::query_as(
        r#"
        UPDATE expenses SET
            business_date = COALESCE($1, business_date),
            item = COALESCE($2, item),
            quantity = COALESCE($3, quantity),
            unit = COALESCE($4, unit),
            amount = COALESCE($5, amount),
            notes = COALESCE($6, notes),
            updated_at = $7
        WHERE id = $8
        RETURNING id, business_date, item, quantity, unit, amount, notes, created_at, updated_at
        "#,
    )
    .bind(data.business_date)
    .bind(data.item.as_deref().map(str::trim))
    .bind(data.quantity)
    .bind(&data.unit)
    .bind(data.amount)
    .bind(&data.notes)
    .bind(shared::util::now_millis())
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn delete_expense(pool: &PgPool, id: i64) -> ServiceResult<bool> {
    let result = sqlx::query("DELETE FROM expenses WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
