//! Input validation helpers
//!
//! Centralized text length constants and validation functions, run by the
//! handlers before any storage call.

use rust_decimal::{Decimal, RoundingStrategy};
use shared::error::{AppError, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Item labels and person names
pub const MAX_NAME_LEN: usize = 200;

/// Notes and descriptions
pub const MAX_NOTE_LEN: usize = 500;

/// Quantity units ("kg", "pcs", ...)
pub const MAX_UNIT_LEN: usize = 32;

// ── Text ────────────────────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(
            AppError::validation(format!("{field} must not be empty")).with_detail("field", field),
        );
    }
    if value.chars().count() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.chars().count()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.chars().count() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.chars().count()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

// ── Numbers ─────────────────────────────────────────────────────────

/// Largest money amount a `NUMERIC(14, 2)` column holds: 999999999999.99
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(276_447_231, 23_283, 0, false, 2);

/// Largest quantity a `NUMERIC(12, 3)` column holds: 999999999.999
pub const MAX_QUANTITY: Decimal = Decimal::from_parts(3_567_587_327, 232, 0, false, 3);

fn check_range(value: Decimal, field: &str, max: Decimal, scale: u32) -> Result<(), AppError> {
    if value < Decimal::ZERO {
        return Err(
            AppError::with_message(ErrorCode::InvalidAmount, format!("{field} must not be negative"))
                .with_detail("field", field),
        );
    }
    // Postgres rounds to the column scale before checking precision
    if value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero) > max {
        return Err(
            AppError::with_message(ErrorCode::InvalidAmount, format!("{field} exceeds {max}"))
                .with_detail("field", field),
        );
    }
    Ok(())
}

/// Money amounts must be non-negative and fit the amount columns.
pub fn validate_amount(value: Decimal, field: &str) -> Result<(), AppError> {
    check_range(value, field, MAX_AMOUNT, 2)
}

pub fn validate_optional_amount(value: Option<Decimal>, field: &str) -> Result<(), AppError> {
    value.map_or(Ok(()), |v| validate_amount(v, field))
}

/// Quantities must be non-negative and fit the quantity column.
pub fn validate_optional_quantity(value: Option<Decimal>, field: &str) -> Result<(), AppError> {
    value.map_or(Ok(()), |v| check_range(v, field, MAX_QUANTITY, 3))
}

/// Counts must not be negative.
pub fn validate_count(value: i32, field: &str) -> Result<(), AppError> {
    if value < 0 {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} must not be negative"),
        )
        .with_detail("field", field));
    }
    Ok(())
}

/// ISO 4217 style: three ASCII letters.
pub fn validate_currency(code: &str) -> Result<(), AppError> {
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(AppError::with_message(
            ErrorCode::InvalidCurrency,
            format!("currency must be a 3-letter code, got '{code}'"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn required_text() {
        assert!(validate_required_text("Chicken", "item", MAX_NAME_LEN).is_ok());
        let err = validate_required_text("   ", "item", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.message, "item must not be empty");
        assert!(validate_required_text(&"x".repeat(201), "item", MAX_NAME_LEN).is_err());
        // Limits count characters, not bytes.
        assert!(validate_required_text(&"é".repeat(200), "item", MAX_NAME_LEN).is_ok());
    }

    #[test]
    fn optional_text() {
        assert!(validate_optional_text(&None, "notes", MAX_NOTE_LEN).is_ok());
        assert!(validate_optional_text(&Some("ok".into()), "notes", MAX_NOTE_LEN).is_ok());
        assert!(validate_optional_text(&Some("x".repeat(33)), "unit", MAX_UNIT_LEN).is_err());
    }

    #[test]
    fn amounts_and_counts() {
        assert!(validate_amount(dec!(0), "amount").is_ok());
        assert!(validate_amount(dec!(-0), "amount").is_ok());
        assert!(validate_amount(dec!(10.5), "amount").is_ok());
        assert_eq!(
            validate_amount(dec!(-0.01), "amount").unwrap_err().code,
            ErrorCode::InvalidAmount
        );
        assert!(validate_optional_amount(None, "amount").is_ok());
        assert!(validate_count(0, "orderCount").is_ok());
        assert_eq!(
            validate_count(-1, "orderCount").unwrap_err().code,
            ErrorCode::ValueOutOfRange
        );
    }

    #[test]
    fn amounts_must_fit_columns() {
        assert_eq!(MAX_AMOUNT, dec!(999999999999.99));
        assert_eq!(MAX_QUANTITY, dec!(999999999.999));
        assert!(validate_amount(dec!(999999999999.99), "amount").is_ok());
        for too_big in [dec!(1000000000000), dec!(999999999999.995), dec!(100000000000000000000)] {
            assert_eq!(
                validate_amount(too_big, "amount").unwrap_err().code,
                ErrorCode::InvalidAmount
            );
        }
        assert!(validate_optional_quantity(Some(dec!(999999999.999)), "quantity").is_ok());
        assert!(validate_optional_quantity(Some(dec!(1000000000)), "quantity").is_err());
        assert!(validate_optional_quantity(Some(dec!(-1)), "quantity").is_err());
        assert!(validate_optional_quantity(None, "quantity").is_ok());
    }

    #[test]
    fn currency() {
        assert!(validate_currency("PKR").is_ok());
        assert!(validate_currency("usd").is_ok());
        for bad in ["", "RS", "EURO", "P1R"] {
            assert_eq!(
                validate_currency(bad).unwrap_err().code,
                ErrorCode::InvalidCurrency
            );
        }
    }
}
