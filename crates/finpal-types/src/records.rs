//! Domain records
//!
//! Flat documents as the storage layer sees them. Every record is owned by
//! exactly one user through `user_id`; there is no cross-user sharing.

use crate::Category;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// A registered user.
///
/// `monthly_income` is the baseline figure used whenever no per-month income
/// records exist for a period. Users are never deleted in the normal flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    /// Unique, stored lowercased.
    pub email: String,
    /// Baseline monthly income, non-negative. Defaults to 0.
    pub monthly_income: Decimal,
    pub created_at: DateTime<Utc>,
}

/// A single expense entry. Created and deleted, never updated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Non-negative.
    pub amount: Decimal,
    pub category: Category,
    pub date: NaiveDate,
    /// At most [`crate::MAX_DESCRIPTION_LEN`] characters.
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields required to create an expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    pub user_id: Uuid,
    pub amount: Decimal,
    pub category: Category,
    pub date: NaiveDate,
    pub description: Option<String>,
}

/// Income for one calendar month.
///
/// `month` is a period key normalized to the 1st of the month, not a
/// timestamp. At most one record exists per (user, month); submitting again
/// for the same month accumulates into `amount` and replaces `source`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount: Decimal,
    pub month: NaiveDate,
    pub source: String,
    pub created_at: DateTime<Utc>,
}

/// Spending status of a category relative to its budget allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionStatus {
    Good,
    Overspending,
}

/// Per-category entry of a recommendation snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySuggestion {
    pub current_spending: f64,
    pub recommended_spending: f64,
    pub potential_savings: f64,
    pub percentage_of_income: f64,
    pub status: SuggestionStatus,
}

/// An immutable recommendation snapshot, persisted for history.
///
/// Monetary totals are whole-unit rounded at generation time; the ratio keeps
/// 2-decimal precision. Never mutated after creation; the latest snapshot is
/// retrieved by descending `generated_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSnapshot {
    pub id: Uuid,
    pub user_id: Uuid,
    pub recommended_savings: Decimal,
    pub total_expenses: Decimal,
    pub expense_to_income_ratio: Decimal,
    pub category_suggestions: BTreeMap<Category, CategorySuggestion>,
    pub generated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestion_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&SuggestionStatus::Overspending).unwrap(),
            "\"overspending\""
        );
        assert_eq!(serde_json::to_string(&SuggestionStatus::Good).unwrap(), "\"good\"");
    }

    #[test]
    fn test_category_suggestion_wire_shape() {
        let suggestion = CategorySuggestion {
            current_spending: 12000.0,
            recommended_spending: 15000.0,
            potential_savings: 0.0,
            percentage_of_income: 24.0,
            status: SuggestionStatus::Good,
        };
        let json = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(json["currentSpending"], 12000.0);
        assert_eq!(json["recommendedSpending"], 15000.0);
        assert_eq!(json["status"], "good");
    }

    #[test]
    fn test_suggestions_map_keys_are_canonical_labels() {
        let mut map = BTreeMap::new();
        map.insert(
            Category::FoodAndDining,
            CategorySuggestion {
                current_spending: 0.0,
                recommended_spending: 0.0,
                potential_savings: 0.0,
                percentage_of_income: 0.0,
                status: SuggestionStatus::Good,
            },
        );
        let json = serde_json::to_value(&map).unwrap();
        assert!(json.get("Food & Dining").is_some());
    }
}
