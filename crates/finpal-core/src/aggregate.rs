//! Aggregation engine
//!
//! Pure, side-effect-free functions over in-memory expense lists. No I/O.

use finpal_types::{Category, Expense};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use std::collections::BTreeMap;

/// Sum expense amounts per category.
///
/// Categories absent from the input are absent from the output; duplicates
/// accumulate by addition, so the result is independent of input order.
pub fn category_totals(expenses: &[Expense]) -> BTreeMap<Category, Decimal> {
    let mut totals = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.category).or_insert(Decimal::ZERO) += expense.amount;
    }
    totals
}

/// `(part / whole) * 100` rounded to 2 decimal places.
///
/// Returns 0 when `whole` is 0 (including 0/0) instead of raising a
/// division error.
pub fn percentage(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    (part / whole * dec!(100)).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Round to the nearest whole unit, midpoints away from zero.
pub fn round_whole(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    fn expense(category: Category, amount: Decimal) -> Expense {
        Expense {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            amount,
            category,
            date: NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
            description: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_totals_accumulate_per_category() {
        let expenses = vec![
            expense(Category::Housing, dec!(15000)),
            expense(Category::FoodAndDining, dec!(3000)),
            expense(Category::FoodAndDining, dec!(2000)),
        ];
        let totals = category_totals(&expenses);
        assert_eq!(totals[&Category::Housing], dec!(15000));
        assert_eq!(totals[&Category::FoodAndDining], dec!(5000));
        assert_eq!(totals.len(), 2);
    }

    #[test]
    fn test_totals_order_independent() {
        let mut expenses = vec![
            expense(Category::Housing, dec!(100)),
            expense(Category::Shopping, dec!(250)),
            expense(Category::Housing, dec!(50.5)),
            expense(Category::Other, dec!(10)),
        ];
        let forward = category_totals(&expenses);
        expenses.reverse();
        assert_eq!(category_totals(&expenses), forward);
        expenses.swap(0, 2);
        assert_eq!(category_totals(&expenses), forward);
    }

    #[test]
    fn test_totals_empty_input() {
        assert!(category_totals(&[]).is_empty());
    }

    #[test]
    fn test_percentage_rounds_to_two_decimals() {
        assert_eq!(percentage(dec!(1), dec!(3)), dec!(33.33));
        assert_eq!(percentage(dec!(2), dec!(3)), dec!(66.67));
        assert_eq!(percentage(dec!(50), dec!(200)), dec!(25.00));
    }

    #[test]
    fn test_percentage_zero_whole_is_zero() {
        assert_eq!(percentage(dec!(42), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(percentage(Decimal::ZERO, Decimal::ZERO), Decimal::ZERO);
        assert_eq!(percentage(dec!(-7), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_round_whole_midpoint_away_from_zero() {
        assert_eq!(round_whole(dec!(2.5)), dec!(3));
        assert_eq!(round_whole(dec!(-2.5)), dec!(-3));
        assert_eq!(round_whole(dec!(2.4)), dec!(2));
    }
}
