//! In-memory [`FinanceStore`] for service tests.

use crate::store::validate_income_amount;
use crate::{Error, FinanceStore, Period, Result};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use finpal_types::{Category, Expense, Income, NewExpense, RecommendationSnapshot, User};
use rust_decimal::Decimal;
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Default)]
struct Inner {
    users: Vec<User>,
    expenses: Vec<Expense>,
    incomes: Vec<Income>,
    recommendations: Vec<RecommendationSnapshot>,
}

/// Vec-backed store. The single mutex stands in for the storage
/// engine's atomicity, so the accumulate-on-conflict income write holds the
/// same guarantee as the SQL upsert.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&self, name: &str, email: &str, monthly_income: Decimal) -> User {
        let user = User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_lowercase(),
            monthly_income,
            created_at: Utc::now(),
        };
        self.inner.lock().unwrap().users.push(user.clone());
        user
    }

    pub fn add_expense(
        &self,
        user_id: Uuid,
        amount: Decimal,
        category: Category,
        date: NaiveDate,
    ) -> Expense {
        let expense = Expense {
            id: Uuid::new_v4(),
            user_id,
            amount,
            category,
            date,
            description: None,
            created_at: Utc::now(),
        };
        self.inner.lock().unwrap().expenses.push(expense.clone());
        expense
    }

    pub fn recommendation_count(&self) -> usize {
        self.inner.lock().unwrap().recommendations.len()
    }
}

#[async_trait]
impl FinanceStore for MemoryStore {
    async fn find_user(&self, id: Uuid) -> Result<Option<User>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let email = email.to_lowercase();
        Ok(self
            .inner
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn upsert_user_by_email(
        &self,
        name: &str,
        email: &str,
        monthly_income: Decimal,
    ) -> Result<User> {
        validate_income_amount(monthly_income)?;
        let email = email.to_lowercase();
        let mut inner = self.inner.lock().unwrap();
        if let Some(user) = inner.users.iter_mut().find(|u| u.email == email) {
            user.name = name.to_string();
            user.monthly_income = monthly_income;
            return Ok(user.clone());
        }
        let user = User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email,
            monthly_income,
            created_at: Utc::now(),
        };
        inner.users.push(user.clone());
        Ok(user)
    }

    async fn set_baseline_income(&self, user_id: Uuid, amount: Decimal) -> Result<()> {
        validate_income_amount(amount)?;
        let mut inner = self.inner.lock().unwrap();
        let user = inner
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(Error::UserNotFound(user_id))?;
        user.monthly_income = amount;
        Ok(())
    }

    async fn create_expense(&self, new: NewExpense) -> Result<Expense> {
        let expense = Expense {
            id: Uuid::new_v4(),
            user_id: new.user_id,
            amount: new.amount,
            category: new.category,
            date: new.date,
            description: new.description,
            created_at: Utc::now(),
        };
        self.inner.lock().unwrap().expenses.push(expense.clone());
        Ok(expense)
    }

    async fn find_expenses(
        &self,
        user_id: Uuid,
        period: Option<Period>,
        category: Option<Category>,
    ) -> Result<Vec<Expense>> {
        let mut expenses: Vec<Expense> = self
            .inner
            .lock()
            .unwrap()
            .expenses
            .iter()
            .filter(|e| e.user_id == user_id)
            .filter(|e| period.map_or(true, |p| p.contains(e.date)))
            .filter(|e| category.map_or(true, |c| e.category == c))
            .cloned()
            .collect();
        expenses.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(expenses)
    }

    async fn delete_expense(&self, expense_id: Uuid) -> Result<bool> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.expenses.len();
        inner.expenses.retain(|e| e.id != expense_id);
        Ok(inner.expenses.len() < before)
    }

    async fn upsert_income(
        &self,
        user_id: Uuid,
        month: NaiveDate,
        increment: Decimal,
        source: &str,
    ) -> Result<Income> {
        validate_income_amount(increment)?;
        let mut inner = self.inner.lock().unwrap();
        if let Some(income) = inner
            .incomes
            .iter_mut()
            .find(|i| i.user_id == user_id && i.month == month)
        {
            income.amount += increment;
            income.source = source.to_string();
            return Ok(income.clone());
        }
        let income = Income {
            id: Uuid::new_v4(),
            user_id,
            amount: increment,
            month,
            source: source.to_string(),
            created_at: Utc::now(),
        };
        inner.incomes.push(income.clone());
        Ok(income)
    }

    async fn find_income(&self, user_id: Uuid, months: Period) -> Result<Vec<Income>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .incomes
            .iter()
            .filter(|i| i.user_id == user_id && months.contains(i.month))
            .cloned()
            .collect())
    }

    async fn find_income_for_month(
        &self,
        user_id: Uuid,
        month: NaiveDate,
    ) -> Result<Option<Income>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .incomes
            .iter()
            .find(|i| i.user_id == user_id && i.month == month)
            .cloned())
    }

    async fn save_recommendation(
        &self,
        snapshot: RecommendationSnapshot,
    ) -> Result<RecommendationSnapshot> {
        self.inner
            .lock()
            .unwrap()
            .recommendations
            .push(snapshot.clone());
        Ok(snapshot)
    }

    async fn latest_recommendation(&self, user_id: Uuid) -> Result<Option<RecommendationSnapshot>> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .recommendations
            .iter()
            .filter(|r| r.user_id == user_id)
            .max_by_key(|r| r.generated_at)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_income_accumulates_and_source_is_replaced() {
        let store = MemoryStore::new();
        let user = store.add_user("Demo", "demo@example.com", dec!(0));
        let month = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();

        store
            .upsert_income(user.id, month, dec!(3000), "Salary")
            .await
            .unwrap();
        let income = store
            .upsert_income(user.id, month, dec!(2000), "Freelance")
            .await
            .unwrap();

        assert_eq!(income.amount, dec!(5000));
        assert_eq!(income.source, "Freelance");

        // Still a single record for the month
        let all = store
            .find_income(user.id, Period::new(month, month))
            .await
            .unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn test_negative_income_amounts_rejected() {
        let store = MemoryStore::new();
        let user = store.add_user("Demo", "demo@example.com", dec!(1000));
        let month = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();

        let err = store
            .upsert_income(user.id, month, dec!(-5000), "Salary")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        let err = store
            .set_baseline_income(user.id, dec!(-1))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        let err = store
            .upsert_user_by_email("Demo", "demo@example.com", dec!(-1))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Validation(_)));

        // Nothing was written and the baseline is untouched.
        assert!(store
            .find_income_for_month(user.id, month)
            .await
            .unwrap()
            .is_none());
        let user = store.find_user(user.id).await.unwrap().unwrap();
        assert_eq!(user.monthly_income, dec!(1000));
    }
}
