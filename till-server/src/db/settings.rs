//! Settings key-value store

use std::str::FromStr;

use rust_decimal::Decimal;
use shared::models::settings::{CURRENCY_KEY, FP_PROFIT_RATE_KEY};
use shared::models::{Settings, SettingsUpdate};
use sqlx::PgPool;

use crate::error::ServiceResult;

/// Load settings, falling back to defaults for absent or unreadable keys.
pub async fn load_settings(pool: &PgPool) -> ServiceResult<Settings> {
    let rows: Vec<(String, String)> =
        sqlx::query_as("SELECT key, value FROM settings WHERE key = ANY($1)")
            .bind(&[FP_PROFIT_RATE_KEY, CURRENCY_KEY][..])
            .fetch_all(pool)
            .await?;
    Ok(apply_rows(Settings::default(), rows))
}

fn apply_rows(mut settings: Settings, rows: Vec<(String, String)>) -> Settings {
    for (key, value) in rows {
        match key.as_str() {
            FP_PROFIT_RATE_KEY => match Decimal::from_str(value.trim()) {
                Ok(rate) => settings.fp_profit_rate = rate,
                Err(e) => {
                    tracing::warn!(%value, error = %e, "Unreadable stored profit rate, using default")
                }
            },
            CURRENCY_KEY => settings.currency = value.trim().to_string(),
            _ => {}
        }
    }
    settings
}

/// Write the provided keys and return the resulting settings.
pub async fn save_settings(pool: &PgPool, data: &SettingsUpdate) -> ServiceResult<Settings> {
    let now = shared::util::now_millis();
    let mut pairs: Vec<(&str, String)> = Vec::new();
    if let Some(rate) = data.fp_profit_rate {
        pairs.push((FP_PROFIT_RATE_KEY, rate.normalize().to_string()));
    }
    if let Some(currency) = &data.currency {
        pairs.push((CURRENCY_KEY, currency.trim().to_ascii_uppercase()));
    }

    let mut tx = pool.begin().await?;
    for (key, value) in &pairs {
        sqlx::query(
            r#"
            INSERT INTO settings (key, value, updated_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (key) DO UPDATE SET value = EXCLUDED.value, updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(now)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    load_settings(pool).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rows_override_defaults() {
        let settings = apply_rows(
            Settings::default(),
            vec![
                (FP_PROFIT_RATE_KEY.into(), " 0.65 ".into()),
                (CURRENCY_KEY.into(), "USD".into()),
                ("UNRELATED".into(), "x".into()),
            ],
        );
        assert_eq!(settings.fp_profit_rate, dec!(0.65));
        assert_eq!(settings.currency, "USD");
    }

    #[test]
    fn unreadable_rate_keeps_default() {
        let settings = apply_rows(
            Settings::default(),
            vec![(FP_PROFIT_RATE_KEY.into(), "seventy".into())],
        );
        assert_eq!(settings, Settings::default());
    }
}
