//! Personal ledger operations

use chrono::NaiveDate;
use shared::models::{LedgerBalance, LedgerEntry, LedgerEntryCreate, LedgerEntryUpdate};
use sqlx::PgPool;

use crate::error::ServiceResult;

pub async fn list_ledger_entries(
    pool: &PgPool,
    person: Option<&str>,
) -> ServiceResult<Vec<LedgerEntry>> {
    let rows: Vec<LedgerEntry> = sqlx::query_as(
        r#"
        SELECT id, person, entry_date, kind, amount, description, created_at
        FROM ledger_entries
        WHERE ($1::TEXT IS NULL OR person = $1)
        ORDER BY entry_date DESC, created_at DESC
        "#,
    )
    .bind(person)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn create_ledger_entry(
    pool: &PgPool,
    entry_date: NaiveDate,
    data: &LedgerEntryCreate,
) -> ServiceResult<LedgerEntry> {
    let row: LedgerEntry = sqlx::query_as(
        r#"
        INSERT INTO ledger_entries (id, person, entry_date, kind, amount, description, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, person, entry_date, kind, amount, description, created_at
        "#,
    )
    .bind(shared::util::snowflake_id())
    .bind(data.person.trim())
    .bind(entry_date)
    .bind(data.kind)
    .bind(data.amount)
    .bind(&data.description)
    .bind(shared::util::now_millis())
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn update_ledger_entry(
    pool: &PgPool,
    id: i64,
    data: &LedgerEntryUpdate,
) -> ServiceResult<Option<LedgerEntry>> {
    let row: Option<LedgerEntry> = sqlx::query_as(
        r#"
        UPDATE ledger_entries SET
            person = COALESCE($1, person),
            entry_date = COALESCE($2, entry_date),
            kind = COALESCE($3, kind),
            amount = COALESCE($4, amount),
            description = COALESCE($5, description)
        WHERE id = $6
        RETURNING id, person, entry_date, kind, amount, description, created_at
        "#,
    )
    .bind(data.person.as_deref().map(str::trim))
    .bind(data.entry_date)
    .bind(data.kind)
    .bind(data.amount)
    .bind(&data.description)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn delete_ledger_entry(pool: &PgPool, id: i64) -> ServiceResult<bool> {
    let result = sqlx::query("DELETE FROM ledger_entries WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Per-person totals; balance is credit minus debit.
pub async fn ledger_balances(pool: &PgPool) -> ServiceResult<Vec<LedgerBalance>> {
    let rows: Vec<LedgerBalance> = sqlx::query_as(
        r#"
        SELECT
            person,
            COALESCE(SUM(amount) FILTER (WHERE kind = 'credit'), 0) AS total_credit,
            COALESCE(SUM(amount) FILTER (WHERE kind = 'debit'), 0) AS total_debit,
            COALESCE(SUM(CASE WHEN kind = 'credit' THEN amount ELSE -amount END), 0) AS balance,
            COUNT(*) AS entry_count
        FROM ledger_entries
        GROUP BY person
        ORDER BY person
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
