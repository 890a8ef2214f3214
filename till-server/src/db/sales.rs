//! Sale bucket operations
//!
//! `sales` holds one row per (business_date, source). Every write that adds
//! revenue goes through [`upsert_bucket`], an atomic insert-or-increment, so
//! concurrent orders for the same bucket never lose an update.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::models::{SaleRecord, SaleSource, SaleUpdate};
use sqlx::{PgExecutor, PgPool};

use crate::analytics::DateRange;
use crate::error::ServiceResult;

pub async fn list_sales(
    pool: &PgPool,
    range: &DateRange,
    source: Option<SaleSource>,
) -> ServiceResult<Vec<SaleRecord>> {
    let rows: Vec<SaleRecord> = sqlx::query_as(
        r#"
        SELECT id, business_date, source, order_count, gross_amount, notes, created_at, updated_at
        FROM sales
        WHERE business_date BETWEEN $1 AND $2
          AND ($3::sale_source IS NULL OR source = $3)
        ORDER BY business_date, source
        "#,
    )
    .bind(range.start)
    .bind(range.end)
    .bind(source)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn get_sale(pool: &PgPool, id: i64) -> ServiceResult<Option<SaleRecord>> {
    let row: Option<SaleRecord> = sqlx::query_as(
        r#"
        SELECT id, business_date, source, order_count, gross_amount, notes, created_at, updated_at
        FROM sales
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Add `orders` and `amount` into the (date, source) bucket, creating it if
/// absent. Runs on any executor so callers can include it in a transaction.
pub async fn upsert_bucket<'e, E>(
    executor: E,
    business_date: NaiveDate,
    source: SaleSource,
    orders: i32,
    amount: Decimal,
    notes: Option<&str>,
) -> ServiceResult<SaleRecord>
where
    E: PgExecutor<'e>,
{
    let now = shared::util::now_millis();
    let row: SaleRecord = sqlx::query_as(
        r#"
        INSERT INTO sales (
            id, business_date, source, order_count, gross_amount, notes, created_at, updated_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
        ON CONFLICT (business_date, source)
        DO UPDATE SET
            order_count = sales.order_count + EXCLUDED.order_count,
            gross_amount = sales.gross_amount + EXCLUDED.gross_amount,
            notes = COALESCE(EXCLUDED.notes, sales.notes),
            updated_at = EXCLUDED.updated_at
        RETURNING id, business_date, source, order_count, gross_amount, notes, created_at, updated_at
        "#,
    )
    .bind(shared::util::snowflake_id())
    .bind(business_date)
    .bind(source)
    .bind(orders)
    .bind(amount)
    .bind(notes)
    .bind(now)
    .fetch_one(executor)
    .await?;
    Ok(row)
}

/// Manual entry: add into the bucket for `business_date`.
pub async fn upsert_sale(
    pool: &PgPool,
    business_date: NaiveDate,
    source: SaleSource,
    orders: i32,
    amount: Decimal,
    notes: Option<&str>,
) -> ServiceResult<SaleRecord> {
    upsert_bucket(pool, business_date, source, orders, amount, notes).await
}

/// Overwrite fields of one bucket (absolute values). `None` if absent.
pub async fn update_sale(
    pool: &PgPool,
    id: i64,
    data: &SaleUpdate,
) -> ServiceResult<Option<SaleRecord>> {
    let row: Option<SaleRecord> = sqlx::query_as(
        r#"
        UPDATE sales SET
            business_date = COALESCE($1, business_date),
            source = COALESCE($2, source),
            order_count = COALESCE($3, order_count),
            gross_amount = COALESCE($4, gross_amount),
            notes = COALESCE($5, notes),
            updated_at = $6
        WHERE id = $7
        RETURNING id, business_date, source, order_count, gross_amount, notes, created_at, updated_at
        "#,
    )
    .bind(data.business_date)
    .bind(data.source)
    .bind(data.order_count)
    .bind(data.gross_amount)
    .bind(&data.notes)
    .bind(shared::util::now_millis())
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Returns `false` when no row had this id.
pub async fn delete_sale(pool: &PgPool, id: i64) -> ServiceResult<bool> {
    let result = sqlx::query("DELETE FROM sales WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
