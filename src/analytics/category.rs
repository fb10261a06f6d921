//! Spending by category
//!
//! Every expense lands in exactly one bucket, so bucket totals always add up
//! to the flat sum of all expense amounts.

use serde::Serialize;
use std::collections::HashMap;

use super::resolve::{BucketKey, CategoryIndex};
use crate::models::{Category, CategoryId, Expense, Money};

/// Colors handed out to buckets that have none of their own
pub const FALLBACK_COLORS: [&str; 10] = [
    "#1C69E3", "#FF6B6B", "#00C49F", "#FFBB28", "#8054AB", "#FF8042", "#6C5CE7", "#F06595",
    "#74C0FC", "#FCC419",
];

/// Total spending for one category bucket
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    /// `None` for the uncategorized bucket
    pub category_id: Option<CategoryId>,
    pub name: String,
    pub color: String,
    pub total: Money,
    pub expense_count: usize,
}

impl CategoryTotal {
    pub fn is_uncategorized(&self) -> bool {
        self.category_id.is_none()
    }
}

/// Sum expense amounts per resolved category, largest total first
///
/// Every category in `categories` appears, even with a zero total. Expenses
/// whose category cannot be resolved are summed under "Uncategorized".
/// Ties keep first-seen order: the category list first, then buckets
/// discovered from expenses.
pub fn category_totals(expenses: &[Expense], categories: &[Category]) -> Vec<CategoryTotal> {
    tally_categories(expenses, categories)
}

pub(crate) fn tally_categories<'a, I>(expenses: I, categories: &'a [Category]) -> Vec<CategoryTotal>
where
    I: IntoIterator<Item = &'a Expense>,
{
    let index = CategoryIndex::new(categories);

    let mut buckets: Vec<(BucketKey, CategoryTotal)> = Vec::with_capacity(categories.len() + 1);
    let mut positions: HashMap<BucketKey, usize> = HashMap::with_capacity(categories.len() + 1);

    for category in categories {
        let key = BucketKey::Category(category.id.clone());
        if positions.contains_key(&key) {
            continue;
        }
        positions.insert(key.clone(), buckets.len());
        buckets.push((
            key,
            CategoryTotal {
                category_id: Some(category.id.clone()),
                name: category.name.clone(),
                color: category.color.clone().unwrap_or_default(),
                total: Money::zero(),
                expense_count: 0,
            },
        ));
    }

    for expense in expenses {
        let resolved = index.resolve(expense.category.as_ref());
        let key = resolved.key();

        let position = match positions.get(&key) {
            Some(&position) => position,
            None => {
                let position = buckets.len();
                positions.insert(key.clone(), position);
                buckets.push((
                    key,
                    CategoryTotal {
                        category_id: resolved.category_id().cloned(),
                        name: resolved.name().to_string(),
                        color: resolved.color().unwrap_or_default().to_string(),
                        total: Money::zero(),
                        expense_count: 0,
                    },
                ));
                position
            }
        };

        let bucket = &mut buckets[position].1;
        bucket.total += expense.amount;
        bucket.expense_count += 1;
    }

    let mut totals: Vec<CategoryTotal> = buckets
        .into_iter()
        .enumerate()
        .map(|(i, (_, mut total))| {
            if total.color.is_empty() {
                total.color = FALLBACK_COLORS[i % FALLBACK_COLORS.len()].to_string();
            }
            total
        })
        .collect();

    // Stable sort keeps first-seen order among equal totals
    totals.sort_by(|a, b| b.total.cmp(&a.total));
    totals
}

/// Name of the category with the most spending, ignoring uncategorized spending
///
/// Returns `None` when no categorized expense has a positive total.
pub(crate) fn top_category(totals: &[CategoryTotal]) -> Option<&CategoryTotal> {
    totals
        .iter()
        .find(|t| !t.is_uncategorized() && t.total.is_positive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::resolve::UNCATEGORIZED;
    use crate::models::EmbeddedCategory;

    fn expense(cents: i64, date: &str) -> Expense {
        Expense::new(Money::from_cents(cents), date)
    }

    fn categories() -> Vec<Category> {
        vec![
            Category::new("Food").with_id("c1").with_color("#FF0000"),
            Category::new("Rent").with_id("c2"),
            Category::new("Fun").with_id("c3"),
        ]
    }

    #[test]
    fn test_uncategorized_without_categories() {
        let expenses = vec![expense(4599, "2025-10-25"), expense(5250, "2025-10-24")];

        let totals = category_totals(&expenses, &[]);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].name, UNCATEGORIZED);
        assert_eq!(totals[0].total.cents(), 9849);
        assert!(totals[0].is_uncategorized());
    }

    #[test]
    fn test_sorted_descending_with_zero_categories_present() {
        let categories = categories();
        let expenses = vec![
            expense(1000, "2025-10-01").in_category("c1"),
            expense(90000, "2025-10-01").in_category("c2"),
            expense(500, "2025-10-02").in_category("c1"),
        ];

        let totals = category_totals(&expenses, &categories);
        let names: Vec<&str> = totals.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Rent", "Food", "Fun"]);
        assert_eq!(totals[1].total.cents(), 1500);
        assert_eq!(totals[1].expense_count, 2);
        assert_eq!(totals[2].total, Money::zero());
    }

    #[test]
    fn test_id_and_embedded_references_share_a_bucket() {
        let categories = categories();
        let expenses = vec![
            expense(1000, "2025-10-01").in_category("c1"),
            expense(2000, "2025-10-01").with_embedded_category(EmbeddedCategory {
                id: Some("c1".into()),
                name: Some("Food".into()),
                color: None,
            }),
        ];

        let totals = category_totals(&expenses, &categories);
        assert_eq!(totals.len(), 3);
        assert_eq!(totals[0].name, "Food");
        assert_eq!(totals[0].total.cents(), 3000);
    }

    #[test]
    fn test_sum_matches_flat_total() {
        let categories = categories();
        let expenses = vec![
            expense(1000, "2025-10-01").in_category("c1"),
            expense(2500, "bad date").in_category("missing"),
            expense(375, "2025-10-01"),
            expense(4200, "2025-09-01").with_embedded_category(EmbeddedCategory {
                id: Some("c7".into()),
                name: Some("Travel".into()),
                color: None,
            }),
        ];

        let totals = category_totals(&expenses, &categories);
        let bucketed: Money = totals.iter().map(|t| t.total).sum();
        let flat: Money = expenses.iter().map(|e| e.amount).sum();
        assert_eq!(bucketed, flat);

        let uncategorized = totals.iter().find(|t| t.is_uncategorized()).unwrap();
        assert_eq!(uncategorized.total.cents(), 2875);
        assert_eq!(uncategorized.expense_count, 2);
    }

    #[test]
    fn test_colors() {
        let categories = categories();
        let totals = category_totals(&[], &categories);
        assert_eq!(totals[0].color, "#FF0000");
        // Rent is the second bucket and has no color of its own
        assert_eq!(totals[1].color, FALLBACK_COLORS[1]);
    }

    #[test]
    fn test_top_category_skips_uncategorized() {
        let categories = categories();
        let expenses = vec![
            expense(9000, "2025-10-01"),
            expense(100, "2025-10-01").in_category("c3"),
        ];

        let totals = category_totals(&expenses, &categories);
        assert_eq!(top_category(&totals).map(|t| t.name.as_str()), Some("Fun"));
        assert!(top_category(&category_totals(&[], &categories)).is_none());
    }

    #[test]
    fn test_idempotent() {
        let categories = categories();
        let expenses = vec![
            expense(1000, "2025-10-01").in_category("c2"),
            expense(1000, "2025-10-02").in_category("c1"),
            expense(250, "2025-10-03").in_category("gone"),
            expense(4200, "2025-10-04").with_embedded_category(EmbeddedCategory {
                id: Some("c7".into()),
                name: Some("Travel".into()),
                color: None,
            }),
        ];

        let first = category_totals(&expenses, &categories);
        let second = category_totals(&expenses, &categories);
        assert_eq!(first, second);
    }

    #[test]
    fn test_huge_amounts_saturate() {
        let categories = categories();
        let huge = Money::from_decimal(9e16);
        let expenses = vec![
            Expense::new(huge, "2025-10-01").in_category("c1"),
            Expense::new(huge, "2025-10-02").in_category("c1"),
        ];

        let totals = category_totals(&expenses, &categories);
        assert_eq!(totals[0].name, "Food");
        assert_eq!(totals[0].total.cents(), i64::MAX);
        assert_eq!(totals[0].expense_count, 2);
    }
}
