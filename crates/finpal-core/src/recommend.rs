//! Recommendation service
//!
//! Applies the static budget-allocation table to the current month's
//! spending, producing per-category suggestions and a single
//! recommended-savings figure. Every generated recommendation is persisted
//! as an immutable snapshot.

use crate::aggregate::{category_totals, percentage, round_whole};
use crate::period::{floor_to_month, Period};
use crate::{Error, FinanceStore, Result};
use chrono::{NaiveDate, Utc};
use finpal_types::{
    Category, CategorySuggestion, RecommendationSnapshot, SuggestionStatus, BUDGET_ALLOCATION,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Expense-to-income ratio above which per-category cuts are recommended.
/// Below it, spending is considered under control and the recommendation
/// tops actual savings up to a flat 20%-of-income target instead.
const CATEGORY_CUT_RATIO: Decimal = dec!(80);

/// Target savings share of income for the top-up rule.
const SAVINGS_TARGET: Decimal = dec!(0.20);

/// Recommendation result returned to callers.
///
/// `message` is only set for the zero-income sentinel, in which case nothing
/// was persisted and the suggestion map is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub recommended_savings: f64,
    pub total_expenses: f64,
    pub expense_to_income_ratio: f64,
    pub category_suggestions: BTreeMap<Category, CategorySuggestion>,
    pub generated_at: chrono::DateTime<Utc>,
}

impl From<RecommendationSnapshot> for RecommendationReport {
    fn from(snapshot: RecommendationSnapshot) -> Self {
        Self {
            message: None,
            recommended_savings: snapshot.recommended_savings.to_f64().unwrap_or_default(),
            total_expenses: snapshot.total_expenses.to_f64().unwrap_or_default(),
            expense_to_income_ratio: snapshot
                .expense_to_income_ratio
                .to_f64()
                .unwrap_or_default(),
            category_suggestions: snapshot.category_suggestions,
            generated_at: snapshot.generated_at,
        }
    }
}

/// Generates and persists budget recommendations.
pub struct RecommendationService {
    store: Arc<dyn FinanceStore>,
}

impl RecommendationService {
    pub fn new(store: Arc<dyn FinanceStore>) -> Self {
        Self { store }
    }

    /// Generate a fresh recommendation for the calendar month containing
    /// `today` and persist it as a snapshot.
    ///
    /// When the user's effective monthly income is zero (no income record
    /// for the month and a zero baseline), a sentinel report is returned and
    /// nothing is persisted.
    pub async fn generate(&self, user_id: Uuid, today: NaiveDate) -> Result<RecommendationReport> {
        let user = self
            .store
            .find_user(user_id)
            .await?
            .ok_or(Error::UserNotFound(user_id))?;

        let month_key = floor_to_month(today);
        let monthly_income = match self.store.find_income_for_month(user_id, month_key).await? {
            Some(income) => income.amount,
            None => user.monthly_income,
        };

        if monthly_income.is_zero() {
            debug!(%user_id, "zero income, returning sentinel recommendation");
            return Ok(RecommendationReport {
                message: Some(
                    "Please set your monthly income to get personalized recommendations"
                        .to_string(),
                ),
                recommended_savings: 0.0,
                total_expenses: 0.0,
                expense_to_income_ratio: 0.0,
                category_suggestions: BTreeMap::new(),
                generated_at: Utc::now(),
            });
        }

        let expenses = self
            .store
            .find_expenses(user_id, Some(Period::month_of(today)), None)
            .await?;
        let total_expenses: Decimal = expenses.iter().map(|e| e.amount).sum();
        let totals = category_totals(&expenses);

        let mut suggestions = BTreeMap::new();
        let mut category_savings = Decimal::ZERO;

        for (category, pct) in BUDGET_ALLOCATION {
            let current = totals.get(&category).copied().unwrap_or(Decimal::ZERO);
            let recommended = monthly_income * pct / dec!(100);
            let potential = (current - recommended).max(Decimal::ZERO);
            if potential > Decimal::ZERO {
                category_savings += potential;
            }
            suggestions.insert(
                category,
                CategorySuggestion {
                    current_spending: current.to_f64().unwrap_or_default(),
                    recommended_spending: recommended.to_f64().unwrap_or_default(),
                    potential_savings: potential.to_f64().unwrap_or_default(),
                    percentage_of_income: percentage(current, monthly_income)
                        .to_f64()
                        .unwrap_or_default(),
                    status: if current > recommended {
                        SuggestionStatus::Overspending
                    } else {
                        SuggestionStatus::Good
                    },
                },
            );
        }

        let ratio = percentage(total_expenses, monthly_income);

        // Spending already under control: top actual savings up to the 20%
        // target instead of stacking per-category cuts.
        let recommended_savings = if ratio < CATEGORY_CUT_RATIO {
            let current_savings = monthly_income - total_expenses;
            (monthly_income * SAVINGS_TARGET - current_savings).max(Decimal::ZERO)
        } else {
            category_savings
        };

        let snapshot = RecommendationSnapshot {
            id: Uuid::new_v4(),
            user_id,
            recommended_savings: round_whole(recommended_savings),
            total_expenses: round_whole(total_expenses),
            expense_to_income_ratio: ratio,
            category_suggestions: suggestions,
            generated_at: Utc::now(),
        };

        let saved = self.store.save_recommendation(snapshot).await?;
        Ok(saved.into())
    }

    /// Most recent snapshot for the user, if any has been generated.
    pub async fn latest(&self, user_id: Uuid) -> Result<Option<RecommendationReport>> {
        Ok(self
            .store
            .latest_recommendation(user_id)
            .await?
            .map(RecommendationReport::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryStore;
    use finpal_types::Category;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_zero_income_sentinel_not_persisted() {
        let store = Arc::new(MemoryStore::new());
        let user = store.add_user("Demo", "demo@example.com", dec!(0));

        let service = RecommendationService::new(store.clone());
        let report = service.generate(user.id, date(2026, 3, 15)).await.unwrap();

        assert!(report.message.is_some());
        assert_eq!(report.recommended_savings, 0.0);
        assert!(report.category_suggestions.is_empty());
        assert_eq!(store.recommendation_count(), 0);
        assert!(service.latest(user.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_income_record_overrides_zero_baseline() {
        let store = Arc::new(MemoryStore::new());
        let user = store.add_user("Demo", "demo@example.com", dec!(0));
        store
            .upsert_income(user.id, date(2026, 3, 1), dec!(50000), "Salary")
            .await
            .unwrap();

        let service = RecommendationService::new(store.clone());
        let report = service.generate(user.id, date(2026, 3, 15)).await.unwrap();

        assert!(report.message.is_none());
        assert_eq!(report.category_suggestions.len(), Category::ALL.len());
        assert_eq!(store.recommendation_count(), 1);
    }

    #[tokio::test]
    async fn test_low_ratio_uses_savings_target_rule() {
        let store = Arc::new(MemoryStore::new());
        let user = store.add_user("Demo", "demo@example.com", dec!(100000));
        // 70% ratio: actual savings of 30000 already exceed the 20000 target.
        store.add_expense(user.id, dec!(40000), Category::Housing, date(2026, 3, 3));
        store.add_expense(user.id, dec!(30000), Category::Shopping, date(2026, 3, 4));

        let service = RecommendationService::new(store);
        let report = service.generate(user.id, date(2026, 3, 15)).await.unwrap();

        assert_eq!(report.expense_to_income_ratio, 70.0);
        assert_eq!(report.recommended_savings, 0.0);
    }

    #[tokio::test]
    async fn test_high_ratio_sums_category_savings() {
        let store = Arc::new(MemoryStore::new());
        let user = store.add_user("Demo", "demo@example.com", dec!(100000));
        // Housing over by 10000 (40000 vs 30% = 30000), Shopping over by
        // 45000 (50000 vs 5% = 5000): ratio 90%, savings 55000.
        store.add_expense(user.id, dec!(40000), Category::Housing, date(2026, 3, 3));
        store.add_expense(user.id, dec!(50000), Category::Shopping, date(2026, 3, 4));

        let service = RecommendationService::new(store);
        let report = service.generate(user.id, date(2026, 3, 15)).await.unwrap();

        assert_eq!(report.expense_to_income_ratio, 90.0);
        assert_eq!(report.recommended_savings, 55000.0);

        let housing = &report.category_suggestions[&Category::Housing];
        assert_eq!(housing.status, SuggestionStatus::Overspending);
        assert_eq!(housing.potential_savings, 10000.0);
        assert_eq!(housing.percentage_of_income, 40.0);

        // Untouched categories report zero spending with a good status.
        let utilities = &report.category_suggestions[&Category::Utilities];
        assert_eq!(utilities.current_spending, 0.0);
        assert_eq!(utilities.status, SuggestionStatus::Good);
    }

    #[tokio::test]
    async fn test_expenses_outside_current_month_ignored() {
        let store = Arc::new(MemoryStore::new());
        let user = store.add_user("Demo", "demo@example.com", dec!(100000));
        store.add_expense(user.id, dec!(90000), Category::Shopping, date(2026, 2, 27));

        let service = RecommendationService::new(store);
        let report = service.generate(user.id, date(2026, 3, 15)).await.unwrap();

        assert_eq!(report.total_expenses, 0.0);
        assert_eq!(report.expense_to_income_ratio, 0.0);
    }

    #[tokio::test]
    async fn test_latest_returns_newest_snapshot() {
        let store = Arc::new(MemoryStore::new());
        let user = store.add_user("Demo", "demo@example.com", dec!(100000));
        store.add_expense(user.id, dec!(90000), Category::Shopping, date(2026, 3, 2));

        let service = RecommendationService::new(store.clone());
        service.generate(user.id, date(2026, 3, 15)).await.unwrap();
        let second = service.generate(user.id, date(2026, 3, 16)).await.unwrap();

        let latest = service.latest(user.id).await.unwrap().unwrap();
        assert_eq!(latest.generated_at, second.generated_at);
        assert_eq!(store.recommendation_count(), 2);
    }
}
