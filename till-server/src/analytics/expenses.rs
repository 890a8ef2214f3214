//! Expense breakdown by item

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::ExpenseRecord;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemExpense {
    pub total_amount: Decimal,
    /// Sum of quantities where recorded
    pub total_quantity: Decimal,
    pub entries: u32,
    /// Unit of the last entry that carried one
    pub unit: Option<String>,
}

/// Normalized grouping key for an item label.
pub(crate) fn item_key(item: &str) -> String {
    item.trim().to_string()
}

/// Group expenses by item label.
pub fn expenses_by_item(expenses: &[ExpenseRecord]) -> BTreeMap<String, ItemExpense> {
    let mut by_item: BTreeMap<String, ItemExpense> = BTreeMap::new();
    for expense in expenses {
        let entry = by_item.entry(item_key(&expense.item)).or_default();
        entry.total_amount += expense.amount;
        if let Some(quantity) = expense.quantity {
            entry.total_quantity += quantity;
        }
        entry.entries += 1;
        if let Some(unit) = expense.unit.as_deref().map(str::trim)
            && !unit.is_empty()
        {
            entry.unit = Some(unit.to_string());
        }
    }
    by_item
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn expense(item: &str, amount: Decimal, quantity: Option<Decimal>, unit: Option<&str>) -> ExpenseRecord {
        ExpenseRecord {
            id: 0,
            business_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            item: item.into(),
            quantity,
            unit: unit.map(str::to_string),
            amount,
            notes: None,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn groups_and_sums() {
        let rows = [
            expense("Chicken", dec!(300), Some(dec!(2)), Some("kg")),
            expense("Chicken ", dec!(450), Some(dec!(3)), Some("kilo")),
            expense("Chicken", dec!(50), None, None),
            expense("Gas", dec!(1200), None, Some("cylinder")),
        ];
        let grouped = expenses_by_item(&rows);
        assert_eq!(grouped.len(), 2);

        let chicken = &grouped["Chicken"];
        assert_eq!(chicken.total_amount, dec!(800));
        assert_eq!(chicken.total_quantity, dec!(5));
        assert_eq!(chicken.entries, 3);
        assert_eq!(chicken.unit.as_deref(), Some("kilo"));

        assert_eq!(grouped["Gas"].unit.as_deref(), Some("cylinder"));
    }

    #[test]
    fn empty_input_is_empty_map() {
        assert!(expenses_by_item(&[]).is_empty());
    }
}
