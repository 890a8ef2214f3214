//! Sale Model (daily sales bucket per source)

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sales channel
///
/// `Spot` is walk-in / counter trade kept at full margin; `Foodpanda` is the
/// delivery platform whose gross is reduced by the configured profit rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(type_name = "sale_source", rename_all = "lowercase"))]
pub enum SaleSource {
    Spot,
    Foodpanda,
}

impl SaleSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spot => "spot",
            Self::Foodpanda => "foodpanda",
        }
    }
}

impl fmt::Display for SaleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown source label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSaleSource(pub String);

impl fmt::Display for UnknownSaleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sales source: {}", self.0)
    }
}

impl std::error::Error for UnknownSaleSource {}

impl FromStr for SaleSource {
    type Err = UnknownSaleSource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spot" => Ok(Self::Spot),
            "foodpanda" => Ok(Self::Foodpanda),
            other => Err(UnknownSaleSource(other.to_string())),
        }
    }
}

/// Sale record - one row per (business_date, source)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    pub id: i64,
    pub business_date: NaiveDate,
    pub source: SaleSource,
    pub order_count: i32,
    pub gross_amount: Decimal,
    pub notes: Option<String>,
    /// Unix millis
    pub created_at: i64,
    /// Unix millis
    pub updated_at: i64,
}

/// Manual sale entry payload
///
/// Added into the existing (date, source) bucket when one exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleCreate {
    /// Defaults to the current business date
    pub business_date: Option<NaiveDate>,
    pub source: SaleSource,
    #[serde(default)]
    pub order_count: i32,
    pub gross_amount: Decimal,
    pub notes: Option<String>,
}

/// Update sale payload (absolute values, not increments)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleUpdate {
    pub business_date: Option<NaiveDate>,
    pub source: Option<SaleSource>,
    pub order_count: Option<i32>,
    pub gross_amount: Option<Decimal>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_parse_and_display() {
        assert_eq!("spot".parse::<SaleSource>(), Ok(SaleSource::Spot));
        assert_eq!(" FoodPanda ".parse::<SaleSource>(), Ok(SaleSource::Foodpanda));
        assert!("uber".parse::<SaleSource>().is_err());
        assert_eq!(SaleSource::Foodpanda.to_string(), "foodpanda");
    }

    #[test]
    fn test_sale_create_deserialize_camel_case() {
        let json = r#"{"source":"foodpanda","orderCount":3,"grossAmount":1250.5}"#;
        let create: SaleCreate = serde_json::from_str(json).unwrap();
        assert_eq!(create.source, SaleSource::Foodpanda);
        assert_eq!(create.order_count, 3);
        assert_eq!(create.gross_amount, Decimal::new(12505, 1));
        assert!(create.business_date.is_none());
    }
}
