//! Abstract storage interface
//!
//! The core never talks to a database directly; it goes through
//! [`FinanceStore`]. The persistence crate implements this trait; tests use
//! an in-memory implementation.

use crate::{Period, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use finpal_types::{
    Category, Expense, Income, NewExpense, RecommendationSnapshot, User, MAX_DESCRIPTION_LEN,
};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Storage operations required by the core services.
///
/// All record lists come back date-descending. `upsert_income` must be
/// atomic: two concurrent submissions for the same (user, month) must both
/// end up in the stored amount, so implementations may not read-then-write
/// from the caller's side. Write paths reject negative monetary amounts
/// with [`crate::Error::Validation`] (see [`validate_income_amount`] and
/// [`validate_new_expense`]).
#[async_trait]
pub trait FinanceStore: Send + Sync {
    async fn find_user(&self, id: Uuid) -> Result<Option<User>>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Create the user if the email is unknown, otherwise update name and
    /// baseline income. Email is matched lowercased.
    async fn upsert_user_by_email(
        &self,
        name: &str,
        email: &str,
        monthly_income: Decimal,
    ) -> Result<User>;

    /// Overwrite the user's baseline monthly income.
    async fn set_baseline_income(&self, user_id: Uuid, amount: Decimal) -> Result<()>;

    async fn create_expense(&self, new: NewExpense) -> Result<Expense>;

    async fn find_expenses(
        &self,
        user_id: Uuid,
        period: Option<Period>,
        category: Option<Category>,
    ) -> Result<Vec<Expense>>;

    /// Returns false if no expense with that id existed.
    async fn delete_expense(&self, expense_id: Uuid) -> Result<bool>;

    /// Accumulate `increment` into the (user, month) income record, creating
    /// it if absent, and replace the source label. `month` must already be
    /// normalized to the 1st.
    async fn upsert_income(
        &self,
        user_id: Uuid,
        month: NaiveDate,
        increment: Decimal,
        source: &str,
    ) -> Result<Income>;

    /// Income records whose month key falls inside `months` (a closed range
    /// of month keys, see [`Period::month_keys`]).
    async fn find_income(&self, user_id: Uuid, months: Period) -> Result<Vec<Income>>;

    async fn find_income_for_month(
        &self,
        user_id: Uuid,
        month: NaiveDate,
    ) -> Result<Option<Income>>;

    async fn save_recommendation(
        &self,
        snapshot: RecommendationSnapshot,
    ) -> Result<RecommendationSnapshot>;

    async fn latest_recommendation(&self, user_id: Uuid) -> Result<Option<RecommendationSnapshot>>;
}

/// Validate a new expense before it reaches storage.
///
/// The category is already a typed [`Category`], so only the numeric and
/// length invariants remain to be checked here.
pub fn validate_new_expense(new: &NewExpense) -> Result<()> {
    if new.amount < Decimal::ZERO {
        return Err(crate::Error::Validation(
            "Amount cannot be negative".to_string(),
        ));
    }
    if let Some(description) = &new.description {
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(crate::Error::Validation(format!(
                "Description cannot exceed {MAX_DESCRIPTION_LEN} characters"
            )));
        }
    }
    Ok(())
}

/// Validate an income amount before it reaches storage.
///
/// Applies to the monthly increment as well as the baseline figure; zero is
/// allowed (it is the "income not set yet" state).
pub fn validate_income_amount(amount: Decimal) -> Result<()> {
    if amount < Decimal::ZERO {
        return Err(crate::Error::Validation(
            "Amount cannot be negative".to_string(),
        ));
    }
    Ok(())
}
