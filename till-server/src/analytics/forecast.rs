//! Per-item expense forecast for the next period
//!
//! The naive forecast is "spend the same per day as this period", scaled by
//! sales momentum (`demandMultiplier`) and the seasonal table.

use std::collections::BTreeMap;

use chrono::{Datelike, Month};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use shared::models::ExpenseRecord;

use super::expenses::{ItemExpense, item_key};
use super::period::HISTORY_WINDOW_DAYS;
use super::{DateRange, round2, seasonal};

/// Share of sales growth passed through to expected spend.
const DEMAND_SENSITIVITY: Decimal = Decimal::from_parts(3, 0, 0, false, 1);

/// Trend classification threshold, percent.
const TREND_THRESHOLD: Decimal = Decimal::TEN;

/// Sales growth/decline beyond this is reported as a factor, percent.
const GROWTH_FACTOR_THRESHOLD: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    fn classify(data_points: u32, trend_change: Decimal) -> Self {
        let swing = trend_change.abs();
        if data_points >= 7 && swing < Decimal::from(20) {
            Confidence::High
        } else if data_points < 3 || swing > Decimal::from(50) {
            Confidence::Low
        } else {
            Confidence::Medium
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseForecast {
    pub current_total: Decimal,
    pub current_avg_per_day: Decimal,
    pub historical_avg_per_day: Decimal,
    pub trend_change_percent: Decimal,
    pub trend: Trend,
    pub sales_growth_rate: Decimal,
    pub demand_multiplier: Decimal,
    pub seasonal_multiplier: Decimal,
    pub predicted_amount: Decimal,
    pub confidence: Confidence,
    /// Current plus historical entries for the item
    pub data_points: u32,
    pub factors: Vec<String>,
}

/// Forecast every item that has spend in the current period.
///
/// `history` should cover [`HISTORY_WINDOW_DAYS`] days before `range.start`;
/// rows outside that window are ignored. `sales_growth_rate` is the gross
/// sales percent change against the prior period.
pub fn forecast_expenses(
    range: &DateRange,
    by_item: &BTreeMap<String, ItemExpense>,
    history: &[ExpenseRecord],
    sales_growth_rate: Decimal,
) -> BTreeMap<String, ExpenseForecast> {
    let window = range.history(HISTORY_WINDOW_DAYS);
    let mut historical: BTreeMap<String, (Decimal, u32)> = BTreeMap::new();
    for row in history.iter().filter(|r| window.contains(r.business_date)) {
        let slot = historical.entry(item_key(&row.item)).or_default();
        slot.0 += row.amount;
        slot.1 += 1;
    }

    let period_days = Decimal::from(range.days());
    let forecast_month = range.next_day().month();
    let demand_multiplier =
        Decimal::ONE + sales_growth_rate / Decimal::ONE_HUNDRED * DEMAND_SENSITIVITY;

    by_item
        .iter()
        .map(|(item, current)| {
            let (history_total, history_entries) =
                historical.get(item).copied().unwrap_or_default();
            let current_avg = current.total_amount / period_days;
            let historical_avg = if history_entries > 0 {
                history_total / Decimal::from(HISTORY_WINDOW_DAYS)
            } else {
                current_avg
            };

            let trend_change = if historical_avg > Decimal::ZERO {
                round2((current_avg - historical_avg) / historical_avg * Decimal::ONE_HUNDRED)
            } else {
                Decimal::ZERO
            };
            let trend = if trend_change > TREND_THRESHOLD {
                Trend::Up
            } else if trend_change < -TREND_THRESHOLD {
                Trend::Down
            } else {
                Trend::Stable
            };

            let seasonal = seasonal::lookup(item, forecast_month);
            let seasonal_multiplier = seasonal.map_or(Decimal::ONE, |s| s.multiplier);

            let predicted = (current_avg * period_days * demand_multiplier * seasonal_multiplier)
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .max(Decimal::ZERO);

            let data_points = current.entries + history_entries;

            let mut factors = Vec::new();
            if sales_growth_rate > GROWTH_FACTOR_THRESHOLD {
                factors.push(format!(
                    "Sales up {:.1}% vs previous period",
                    sales_growth_rate
                ));
            } else if sales_growth_rate < -GROWTH_FACTOR_THRESHOLD {
                factors.push(format!(
                    "Sales down {:.1}% vs previous period",
                    sales_growth_rate.abs()
                ));
            }
            if trend_change > TREND_THRESHOLD {
                factors.push(format!(
                    "Spending trending up {:.1}% vs 30-day average",
                    trend_change
                ));
            } else if trend_change < -TREND_THRESHOLD {
                factors.push(format!(
                    "Spending trending down {:.1}% vs 30-day average",
                    trend_change.abs()
                ));
            }
            if let Some(adj) = seasonal
                && adj.multiplier != Decimal::ONE
            {
                factors.push(format!(
                    "Seasonal adjustment x{} for {} ({})",
                    adj.multiplier.normalize(),
                    month_name(forecast_month),
                    adj.group
                ));
            }
            if data_points < 5 {
                factors.push(format!("Limited data points ({data_points})"));
            }

            let forecast = ExpenseForecast {
                current_total: current.total_amount,
                current_avg_per_day: round2(current_avg),
                historical_avg_per_day: round2(historical_avg),
                trend_change_percent: trend_change,
                trend,
                sales_growth_rate,
                demand_multiplier: round2(demand_multiplier),
                seasonal_multiplier,
                predicted_amount: predicted,
                confidence: Confidence::classify(data_points, trend_change),
                data_points,
                factors,
            };
            (item.clone(), forecast)
        })
        .collect()
}

fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map_or("unknown month", |m| m.name())
}
