//! Zero-filled daily series

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::{ExpenseRecord, SaleRecord, SaleSource};

use super::{DateRange, ProfitRate};

/// One calendar day of the series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyBucket {
    pub date: NaiveDate,
    /// Gross spot sales
    pub spot_sales: Decimal,
    /// Gross foodpanda sales, before commission
    pub foodpanda_sales: Decimal,
    pub expenses: Decimal,
    pub orders: i64,
    /// `spot + foodpanda * rate - expenses`
    pub net_profit: Decimal,
}

impl DailyBucket {
    fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            spot_sales: Decimal::ZERO,
            foodpanda_sales: Decimal::ZERO,
            expenses: Decimal::ZERO,
            orders: 0,
            net_profit: Decimal::ZERO,
        }
    }
}

/// Build one bucket per day in `range`, ascending. Rows dated outside the
/// range are ignored.
pub fn daily_series(
    range: &DateRange,
    sales: &[SaleRecord],
    expenses: &[ExpenseRecord],
    rate: ProfitRate,
) -> Vec<DailyBucket> {
    let mut buckets: Vec<DailyBucket> = range.iter_days().map(DailyBucket::empty).collect();

    // Buckets are contiguous from range.start, so the offset is the index.
    let slot = |date: NaiveDate| -> Option<usize> {
        if !range.contains(date) {
            return None;
        }
        usize::try_from((date - range.start).num_days()).ok()
    };

    for sale in sales {
        let Some(bucket) = slot(sale.business_date).and_then(|i| buckets.get_mut(i)) else {
            continue;
        };
        match sale.source {
            SaleSource::Spot => bucket.spot_sales += sale.gross_amount,
            SaleSource::Foodpanda => bucket.foodpanda_sales += sale.gross_amount,
        }
        bucket.orders += i64::from(sale.order_count);
    }

    for expense in expenses {
        if let Some(bucket) = slot(expense.business_date).and_then(|i| buckets.get_mut(i)) {
            bucket.expenses += expense.amount;
        }
    }

    for bucket in &mut buckets {
        bucket.net_profit =
            bucket.spot_sales + bucket.foodpanda_sales * rate.value() - bucket.expenses;
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn sale(date: &str, source: SaleSource, gross: Decimal) -> SaleRecord {
        SaleRecord {
            id: 0,
            business_date: day(date),
            source,
            order_count: 1,
            gross_amount: gross,
            notes: None,
            created_at: 0,
            updated_at: 0,
        }
    }

    fn expense(date: &str, amount: Decimal) -> ExpenseRecord {
        ExpenseRecord {
            id: 0,
            business_date: day(date),
            item: "Gas".into(),
            quantity: None,
            unit: None,
            amount,
            notes: None,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn empty_range_is_zero_filled() {
        let range = DateRange::parse(Some("2025-01-01"), Some("2025-01-03")).unwrap();
        let rate = ProfitRate::new(dec!(0.7)).unwrap();
        let series = daily_series(&range, &[], &[], rate);
        assert_eq!(series.len(), 3);
        assert_eq!(series[0].date, day("2025-01-01"));
        assert_eq!(series[2].date, day("2025-01-03"));
        assert!(series.iter().all(|b| b == &DailyBucket::empty(b.date)));
    }

    #[test]
    fn rows_land_in_their_day() {
        let range = DateRange::parse(Some("2025-01-01"), Some("2025-01-02")).unwrap();
        let rate = ProfitRate::new(dec!(0.7)).unwrap();
        let sales = [
            sale("2025-01-01", SaleSource::Spot, dec!(500)),
            sale("2025-01-02", SaleSource::Foodpanda, dec!(1000)),
            sale("2025-01-02", SaleSource::Spot, dec!(200)),
            sale("2025-01-05", SaleSource::Spot, dec!(999)),
        ];
        let expenses = [expense("2025-01-02", dec!(100)), expense("2024-12-31", dec!(7))];

        let series = daily_series(&range, &sales, &expenses, rate);
        assert_eq!(series[0].spot_sales, dec!(500));
        assert_eq!(series[0].net_profit, dec!(500));
        assert_eq!(series[1].spot_sales, dec!(200));
        assert_eq!(series[1].foodpanda_sales, dec!(1000));
        assert_eq!(series[1].expenses, dec!(100));
        assert_eq!(series[1].orders, 2);
        // 200 + 1000 * 0.7 - 100
        assert_eq!(series[1].net_profit, dec!(800));
    }
}
