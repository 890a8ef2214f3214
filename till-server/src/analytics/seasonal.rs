//! Seasonal demand table
//!
//! Items are matched to a group by whole-word keywords in their label; each
//! group carries a multiplier per calendar month (index 0 = January).

use rust_decimal::Decimal;

/// `hundredths / 100`
const fn x(hundredths: u32) -> Decimal {
    Decimal::from_parts(hundredths, 0, 0, false, 2)
}

struct SeasonalGroup {
    name: &'static str,
    keywords: &'static [&'static str],
    monthly: [Decimal; 12],
}

/// Checked in order; the first matching group wins.
static GROUPS: &[SeasonalGroup] = &[
    SeasonalGroup {
        name: "meat",
        keywords: &[
            "chicken", "mutton", "beef", "meat", "qeema", "keema", "kabab", "tikka",
        ],
        // Ramadan-adjacent months (Mar/Apr) and Eid-ul-Adha season peak.
        monthly: [
            x(100),
            x(100),
            x(140),
            x(130),
            x(110),
            x(120),
            x(120),
            x(110),
            x(100),
            x(100),
            x(100),
            x(100),
        ],
    },
    SeasonalGroup {
        name: "cold",
        keywords: &[
            "ice", "ice cream", "cold drink", "soft drink", "drink", "drinks", "juice", "water",
            "lassi", "coke", "pepsi", "yogurt", "dahi",
        ],
        monthly: [
            x(100),
            x(100),
            x(105),
            x(115),
            x(130),
            x(130),
            x(130),
            x(125),
            x(115),
            x(100),
            x(100),
            x(100),
        ],
    },
    SeasonalGroup {
        name: "warm",
        keywords: &[
            "tea", "chai", "coffee", "soup", "gas", "charcoal", "coal", "firewood",
        ],
        monthly: [
            x(130),
            x(120),
            x(105),
            x(100),
            x(100),
            x(100),
            x(100),
            x(100),
            x(100),
            x(105),
            x(115),
            x(130),
        ],
    },
];

/// A matched seasonal adjustment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonalAdjustment {
    pub group: &'static str,
    pub multiplier: Decimal,
}

/// Lowercase the label and pad its words with spaces so keywords only match
/// on word boundaries ("ice" must not match "rice").
fn normalize(label: &str) -> String {
    let words: Vec<String> = label
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect();
    format!(" {} ", words.join(" "))
}

/// Seasonal adjustment for `item` in `month` (1-12), if any group matches.
pub fn lookup(item: &str, month: u32) -> Option<SeasonalAdjustment> {
    let index = usize::try_from(month.checked_sub(1)?).ok()?;
    let label = normalize(item);
    GROUPS
        .iter()
        .find(|group| {
            group
                .keywords
                .iter()
                .any(|kw| label.contains(&format!(" {kw} ")))
        })
        .and_then(|group| {
            group.monthly.get(index).map(|&multiplier| SeasonalAdjustment {
                group: group.name,
                multiplier,
            })
        })
}
