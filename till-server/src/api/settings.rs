//! Runtime settings endpoints (profit rate, currency)

use axum::Json;
use axum::extract::State;
use shared::error::AppError;
use shared::models::{Settings, SettingsUpdate};

use crate::analytics::ProfitRate;
use crate::db;
use crate::state::AppState;
use crate::utils::validation::validate_currency;

use super::ApiResult;

/// Reject out-of-range values before anything is written.
pub(crate) fn validate_update(data: &SettingsUpdate) -> Result<(), AppError> {
    if let Some(rate) = data.fp_profit_rate {
        ProfitRate::new(rate)?;
    }
    if let Some(currency) = &data.currency {
        validate_currency(currency.trim())?;
    }
    Ok(())
}

pub async fn get_settings(State(state): State<AppState>) -> ApiResult<Settings> {
    let settings = db::settings::load_settings(&state.pool).await?;
    Ok(Json(settings))
}

pub async fn update_settings(
    State(state): State<AppState>,
    Json(data): Json<SettingsUpdate>,
) -> ApiResult<Settings> {
    validate_update(&data)?;
    let settings = db::settings::save_settings(&state.pool, &data).await?;
    tracing::info!(
        fp_profit_rate = %settings.fp_profit_rate,
        currency = %settings.currency,
        "Settings updated"
    );
    Ok(Json(settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use shared::error::ErrorCode;

    #[test]
    fn accepts_valid_update() {
        let data = SettingsUpdate {
            fp_profit_rate: Some(dec!(0.75)),
            currency: Some("usd".into()),
        };
        assert!(validate_update(&data).is_ok());
        assert!(validate_update(&SettingsUpdate::default()).is_ok());
    }

    #[test]
    fn rejects_out_of_range_rate() {
        let data = SettingsUpdate {
            fp_profit_rate: Some(dec!(1.2)),
            currency: None,
        };
        assert_eq!(validate_update(&data).unwrap_err().code, ErrorCode::InvalidConfig);
    }

    #[test]
    fn rejects_bad_currency() {
        let data = SettingsUpdate {
            fp_profit_rate: None,
            currency: Some("RUPEES".into()),
        };
        assert_eq!(validate_update(&data).unwrap_err().code, ErrorCode::InvalidCurrency);
    }
}
