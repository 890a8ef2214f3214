//! POS order operations
//!
//! Recording or voiding an order touches two tables: the order row and its
//! sale bucket. Both happen in one transaction.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::models::{PosOrder, SaleRecord, SaleSource};
use sqlx::PgPool;

use super::sales::upsert_bucket;
use crate::analytics::DateRange;
use crate::error::ServiceResult;

/// Fields of an order to record; the business date is already resolved.
#[derive(Debug, Clone)]
pub struct NewOrder<'a> {
    pub source: SaleSource,
    pub total_amount: Decimal,
    pub item_count: i32,
    pub business_date: NaiveDate,
    pub ordered_at: i64,
    pub note: Option<&'a str>,
}

/// Insert the order and add it to its (business_date, source) bucket.
pub async fn record_order(
    pool: &PgPool,
    order: &NewOrder<'_>,
) -> ServiceResult<(PosOrder, SaleRecord)> {
    let mut tx = pool.begin().await?;

    let row: PosOrder = sqlx::query_as(
        r#"
        INSERT INTO pos_orders (
            id, source, total_amount, item_count, business_date, ordered_at, note
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, source, total_amount, item_count, business_date, ordered_at, note
        "#,
    )
    .bind(shared::util::snowflake_id())
    .bind(order.source)
    .bind(order.total_amount)
    .bind(order.item_count)
    .bind(order.business_date)
    .bind(order.ordered_at)
    .bind(order.note)
    .fetch_one(&mut *tx)
    .await?;

    let bucket = upsert_bucket(
        &mut *tx,
        order.business_date,
        order.source,
        1,
        order.total_amount,
        None,
    )
    .await?;

    tx.commit().await?;
    Ok((row, bucket))
}

pub async fn list_orders(pool: &PgPool, range: &DateRange) -> ServiceResult<Vec<PosOrder>> {
    let rows: Vec<PosOrder> = sqlx::query_as(
        r#"
        SELECT id, source, total_amount, item_count, business_date, ordered_at, note
        FROM pos_orders
        WHERE business_date BETWEEN $1 AND $2
        ORDER BY ordered_at DESC
        "#,
    )
    .bind(range.start)
    .bind(range.end)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn get_order(pool: &PgPool, id: i64) -> ServiceResult<Option<PosOrder>> {
    let row: Option<PosOrder> = sqlx::query_as(
        r#"
        SELECT id, source, total_amount, item_count, business_date, ordered_at, note
        FROM pos_orders
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Void an order and take its contribution back out of the bucket.
///
/// Bucket figures are floored at zero since the bucket may have been edited
/// by hand after the order was recorded.
pub async fn delete_order(pool: &PgPool, id: i64) -> ServiceResult<Option<PosOrder>> {
    let mut tx = pool.begin().await?;

    let deleted: Option<PosOrder> = sqlx::query_as(
        r#"
        DELETE FROM pos_orders
        WHERE id = $1
        RETURNING id, source, total_amount, item_count, business_date, ordered_at, note
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(order) = deleted else {
        tx.rollback().await?;
        return Ok(None);
    };

    sqlx::query(
        r#"
        UPDATE sales SET
            order_count = GREATEST(order_count - 1, 0),
            gross_amount = GREATEST(gross_amount - $1, 0),
            updated_at = $2
        WHERE business_date = $3 AND source = $4
        "#,
    )
    .bind(order.total_amount)
    .bind(shared::util::now_millis())
    .bind(order.business_date)
    .bind(order.source)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(Some(order))
}
