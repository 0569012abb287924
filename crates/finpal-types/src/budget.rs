//! Static budget-allocation table
//!
//! Recommended share of monthly income per category, loosely based on the
//! 50/30/20 rule. Consumed by the recommendation engine only; not
//! user-editable.

use crate::Category;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Recommended percentage of monthly income for each canonical category.
pub const BUDGET_ALLOCATION: [(Category, Decimal); 12] = [
    (Category::Housing, dec!(30)),
    (Category::FoodAndDining, dec!(15)),
    (Category::Transportation, dec!(15)),
    (Category::Utilities, dec!(10)),
    (Category::Healthcare, dec!(5)),
    (Category::Insurance, dec!(5)),
    (Category::SavingsAndInvestments, dec!(20)),
    (Category::Entertainment, dec!(5)),
    (Category::Shopping, dec!(5)),
    (Category::Education, dec!(5)),
    (Category::PersonalCare, dec!(3)),
    (Category::Other, dec!(2)),
];

/// Look up the recommended income percentage for a category.
pub fn recommended_percent(category: Category) -> Decimal {
    BUDGET_ALLOCATION
        .iter()
        .find(|(c, _)| *c == category)
        .map(|(_, pct)| *pct)
        .unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_an_allocation() {
        for cat in Category::ALL {
            assert!(
                recommended_percent(cat) > Decimal::ZERO,
                "no allocation for {cat}"
            );
        }
    }

    #[test]
    fn test_known_allocations() {
        assert_eq!(recommended_percent(Category::Housing), dec!(30));
        assert_eq!(recommended_percent(Category::SavingsAndInvestments), dec!(20));
        assert_eq!(recommended_percent(Category::PersonalCare), dec!(3));
    }
}
