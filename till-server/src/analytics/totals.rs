//! Period totals and period-over-period changes

use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::{ExpenseRecord, SaleRecord, SaleSource};

use super::{ProfitRate, round2};

/// Headline figures for one period.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodTotals {
    /// Pre-commission revenue across every source
    pub gross_sales_total: Decimal,
    pub spot_sales_total: Decimal,
    pub foodpanda_gross_total: Decimal,
    /// Foodpanda gross kept after commission
    pub foodpanda_profit_total: Decimal,
    pub foodpanda_commission: Decimal,
    /// Profit-basis sales: spot + foodpanda profit
    pub total_sales: Decimal,
    pub orders_total: i64,
    pub expenses_total: Decimal,
    pub net_profit: Decimal,
    pub average_order_value: Decimal,
    /// Percent of `total_sales` left after expenses
    pub profit_margin: Decimal,
}

impl PeriodTotals {
    pub fn compute(sales: &[SaleRecord], expenses: &[ExpenseRecord], rate: ProfitRate) -> Self {
        let mut totals = PeriodTotals::default();

        for sale in sales {
            totals.gross_sales_total += sale.gross_amount;
            totals.orders_total += i64::from(sale.order_count);
            match sale.source {
                SaleSource::Spot => totals.spot_sales_total += sale.gross_amount,
                SaleSource::Foodpanda => {
                    totals.foodpanda_gross_total += sale.gross_amount;
                    totals.foodpanda_profit_total += sale.gross_amount * rate.value();
                    totals.foodpanda_commission += sale.gross_amount * rate.commission();
                }
            }
        }

        totals.expenses_total = expenses.iter().map(|e| e.amount).sum();
        totals.total_sales = totals.spot_sales_total + totals.foodpanda_profit_total;
        totals.net_profit = totals.total_sales - totals.expenses_total;

        if totals.orders_total > 0 {
            totals.average_order_value =
                round2(totals.gross_sales_total / Decimal::from(totals.orders_total));
        }
        if totals.total_sales > Decimal::ZERO {
            totals.profit_margin =
                round2(totals.net_profit / totals.total_sales * Decimal::ONE_HUNDRED);
        }

        totals
    }
}

/// Percent change of each headline metric against the prior period.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PercentChanges {
    pub gross_sales: Decimal,
    pub foodpanda_profit: Decimal,
    pub spot_sales: Decimal,
    pub total_sales: Decimal,
    pub orders: Decimal,
    pub expenses: Decimal,
    pub net_profit: Decimal,
}

impl PercentChanges {
    pub fn between(current: &PeriodTotals, prior: &PeriodTotals) -> Self {
        Self {
            gross_sales: percent_change(current.gross_sales_total, prior.gross_sales_total),
            foodpanda_profit: percent_change(
                current.foodpanda_profit_total,
                prior.foodpanda_profit_total,
            ),
            spot_sales: percent_change(current.spot_sales_total, prior.spot_sales_total),
            total_sales: percent_change(current.total_sales, prior.total_sales),
            orders: percent_change(
                Decimal::from(current.orders_total),
                Decimal::from(prior.orders_total),
            ),
            expenses: percent_change(current.expenses_total, prior.expenses_total),
            net_profit: percent_change_abs(current.net_profit, prior.net_profit),
        }
    }
}

/// `(current - prior) / prior * 100`, or 0 when `prior` is zero.
///
/// Divides by the signed prior value; a negative prior flips the sign.
pub fn percent_change(current: Decimal, prior: Decimal) -> Decimal {
    if prior.is_zero() {
        return Decimal::ZERO;
    }
    round2((current - prior) / prior * Decimal::ONE_HUNDRED)
}

/// `(current - prior) / |prior| * 100`, or 0 when `prior` is zero.
///
/// Used for net profit, which may be negative in either period.
pub fn percent_change_abs(current: Decimal, prior: Decimal) -> Decimal {
    if prior.is_zero() {
        return Decimal::ZERO;
    }
    round2((current - prior) / prior.abs() * Decimal::ONE_HUNDRED)
}
