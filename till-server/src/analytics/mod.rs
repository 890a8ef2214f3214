//! Period aggregation
//!
//! Pure computation over rows the storage layer has already fetched: period
//! totals, period-over-period changes, a zero-filled daily series, expenses by
//! item and a per-item expense forecast. Nothing here reads the clock or the
//! database, so identical inputs always give identical output.
//!
//! # Example
//!
//! ```
//! use rust_decimal::Decimal;
//! use till_server::analytics::{DateRange, SummaryInput, summarize};
//!
//! let range = DateRange::parse(Some("2025-01-01"), Some("2025-01-07")).unwrap();
//! let input = SummaryInput::empty(range);
//! let summary = summarize(&input, Decimal::new(70, 2)).unwrap();
//! assert_eq!(summary.daily_series.len(), 7);
//! ```

mod daily;
mod expenses;
mod forecast;
mod period;
pub mod seasonal;
mod totals;

use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use shared::models::{ExpenseRecord, SaleRecord};

use crate::error::CoreError;

pub use daily::{DailyBucket, daily_series};
pub use expenses::{ItemExpense, expenses_by_item};
pub use forecast::{Confidence, ExpenseForecast, Trend, forecast_expenses};
pub use period::{DateRange, HISTORY_WINDOW_DAYS, MAX_RANGE_DAYS};
pub use totals::{PercentChanges, PeriodTotals, percent_change, percent_change_abs};

/// Two decimal places, half away from zero.
pub(crate) fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Fraction of foodpanda gross the business keeps, validated to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProfitRate(Decimal);

impl ProfitRate {
    pub fn new(rate: Decimal) -> Result<Self, CoreError> {
        if rate < Decimal::ZERO || rate > Decimal::ONE {
            return Err(CoreError::InvalidConfig(format!(
                "profit rate must be between 0 and 1, got {rate}"
            )));
        }
        Ok(Self(rate))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// The channel's share, `1 - rate`.
    pub fn commission(&self) -> Decimal {
        Decimal::ONE - self.0
    }
}

/// Rows for one summary request.
#[derive(Debug, Clone)]
pub struct SummaryInput {
    pub range: DateRange,
    pub sales: Vec<SaleRecord>,
    pub expenses: Vec<ExpenseRecord>,
    /// Rows for `range.prior()`
    pub prior_sales: Vec<SaleRecord>,
    pub prior_expenses: Vec<ExpenseRecord>,
    /// Expenses for the [`HISTORY_WINDOW_DAYS`] days before `range.start`
    pub history_expenses: Vec<ExpenseRecord>,
}

impl SummaryInput {
    pub fn empty(range: DateRange) -> Self {
        Self {
            range,
            sales: Vec::new(),
            expenses: Vec::new(),
            prior_sales: Vec::new(),
            prior_expenses: Vec::new(),
            history_expenses: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSummary {
    pub range: DateRange,
    pub prior_range: DateRange,
    pub period_days: i64,
    pub profit_rate: ProfitRate,
    pub current: PeriodTotals,
    pub previous: PeriodTotals,
    pub changes: PercentChanges,
    pub daily_series: Vec<DailyBucket>,
    pub expenses_by_item: BTreeMap<String, ItemExpense>,
    pub forecast: BTreeMap<String, ExpenseForecast>,
}

/// Summarize one period against the one before it.
///
/// Fails with `InvalidConfig` when `profit_rate` is outside `[0, 1]`. Range
/// validation happens when the [`DateRange`] is built.
pub fn summarize(input: &SummaryInput, profit_rate: Decimal) -> Result<PeriodSummary, CoreError> {
    let rate = ProfitRate::new(profit_rate)?;
    let range = input.range;

    let current = PeriodTotals::compute(&input.sales, &input.expenses, rate);
    let previous = PeriodTotals::compute(&input.prior_sales, &input.prior_expenses, rate);
    let changes = PercentChanges::between(&current, &previous);

    let daily_series = daily_series(&range, &input.sales, &input.expenses, rate);
    let by_item = expenses_by_item(&input.expenses);
    let forecast = forecast_expenses(&range, &by_item, &input.history_expenses, changes.gross_sales);

    Ok(PeriodSummary {
        range,
        prior_range: range.prior(),
        period_days: range.days(),
        profit_rate: rate,
        current,
        previous,
        changes,
        daily_series,
        expenses_by_item: by_item,
        forecast,
    })
}
