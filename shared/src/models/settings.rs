//! Settings Model (key-value store backed)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Settings key for the Foodpanda profit rate
pub const FP_PROFIT_RATE_KEY: &str = "FP_PROFIT_RATE";
/// Settings key for the display currency
pub const CURRENCY_KEY: &str = "CURRENCY";

/// 0.70
pub const DEFAULT_FP_PROFIT_RATE: Decimal = Decimal::from_parts(70, 0, 0, false, 2);
pub const DEFAULT_CURRENCY: &str = "PKR";

/// Runtime settings read per request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Fraction of Foodpanda gross kept after commission
    pub fp_profit_rate: Decimal,
    /// Display-only ISO currency code
    pub currency: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fp_profit_rate: DEFAULT_FP_PROFIT_RATE,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub fp_profit_rate: Option<Decimal>,
    pub currency: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.fp_profit_rate.to_string(), "0.70");
        assert_eq!(settings.currency, "PKR");
    }

    #[test]
    fn test_settings_serialize_profit_rate_as_number() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(json["fpProfitRate"], serde_json::json!(0.7));
        assert_eq!(json["currency"], "PKR");
    }
}
