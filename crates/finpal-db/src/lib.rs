//! FinPal Database Layer
//!
//! PostgreSQL persistence for the finance tracker.
//!
//! # Repository Pattern
//!
//! Each aggregate (users, expenses, incomes, recommendations) has its own
//! repository with CRUD and domain-specific queries. [`Database`] wires the
//! repositories to a shared pool and implements the core's
//! [`FinanceStore`] trait, translating row models into domain records.

pub mod config;
pub mod error;
pub mod models;
pub mod repos;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;
use uuid::Uuid;

pub use config::DatabaseConfig;
pub use error::{DbError, DbResult};
pub use models::*;
pub use repos::*;

use finpal_core::{
    validate_income_amount, validate_new_expense, FinanceStore, Period, Result as CoreResult,
};
use finpal_types::{Category, Expense, Income, NewExpense, RecommendationSnapshot, User};

/// Database connection pool
pub struct Database {
    /// PostgreSQL connection pool
    pub pg: PgPool,
}

/// Database health snapshot
#[derive(Debug, Clone, Copy)]
pub struct HealthStatus {
    pub postgres: bool,
    pub healthy: bool,
}

impl Database {
    /// Connect to PostgreSQL
    pub async fn connect(config: &DatabaseConfig) -> DbResult<Self> {
        info!("Connecting to PostgreSQL: {}", config.postgres_url_masked());

        let pg = PgPoolOptions::new()
            .max_connections(config.pg_max_connections)
            .min_connections(config.pg_min_connections)
            .acquire_timeout(std::time::Duration::from_secs(config.pg_acquire_timeout_secs))
            .connect(&config.postgres_url)
            .await
            .map_err(|e| DbError::Connection(format!("PostgreSQL: {}", e)))?;

        info!("Connected to PostgreSQL");

        Ok(Self { pg })
    }

    /// Run database migrations
    pub async fn migrate(&self) -> DbResult<()> {
        info!("Running database migrations...");
        sqlx::migrate!("./migrations")
            .run(&self.pg)
            .await
            .map_err(|e| DbError::Migration(e.to_string()))?;
        info!("Migrations complete");
        Ok(())
    }

    /// Health check
    pub async fn health_check(&self) -> HealthStatus {
        let postgres = sqlx::query("SELECT 1").fetch_one(&self.pg).await.is_ok();
        HealthStatus {
            postgres,
            healthy: postgres,
        }
    }

    /// Create repository instances
    pub fn user_repo(&self) -> UserRepo {
        UserRepo::new(self.pg.clone())
    }

    pub fn expense_repo(&self) -> ExpenseRepo {
        ExpenseRepo::new(self.pg.clone())
    }

    pub fn income_repo(&self) -> IncomeRepo {
        IncomeRepo::new(self.pg.clone())
    }

    pub fn recommendation_repo(&self) -> RecommendationRepo {
        RecommendationRepo::new(self.pg.clone())
    }
}

#[async_trait]
impl FinanceStore for Database {
    async fn find_user(&self, id: Uuid) -> CoreResult<Option<User>> {
        Ok(self.user_repo().find_by_id(id).await?.map(Into::into))
    }

    async fn find_user_by_email(&self, email: &str) -> CoreResult<Option<User>> {
        Ok(self.user_repo().find_by_email(email).await?.map(Into::into))
    }

    async fn upsert_user_by_email(
        &self,
        name: &str,
        email: &str,
        monthly_income: Decimal,
    ) -> CoreResult<User> {
        validate_income_amount(monthly_income)?;
        Ok(self
            .user_repo()
            .upsert_by_email(name, email, monthly_income)
            .await?
            .into())
    }

    async fn set_baseline_income(&self, user_id: Uuid, amount: Decimal) -> CoreResult<()> {
        validate_income_amount(amount)?;
        self.user_repo().set_monthly_income(user_id, amount).await?;
        Ok(())
    }

    async fn create_expense(&self, new: NewExpense) -> CoreResult<Expense> {
        validate_new_expense(&new)?;
        let row = self
            .expense_repo()
            .create(
                new.user_id,
                new.amount,
                new.category.as_str(),
                new.date,
                new.description.as_deref(),
            )
            .await?;
        Ok(Expense::try_from(row)?)
    }

    async fn find_expenses(
        &self,
        user_id: Uuid,
        period: Option<Period>,
        category: Option<Category>,
    ) -> CoreResult<Vec<Expense>> {
        let rows = self
            .expense_repo()
            .find(
                user_id,
                period.map(|p| p.start),
                period.map(|p| p.end),
                category.map(|c| c.as_str()),
            )
            .await?;
        let expenses = rows
            .into_iter()
            .map(Expense::try_from)
            .collect::<DbResult<Vec<_>>>()?;
        Ok(expenses)
    }

    async fn delete_expense(&self, expense_id: Uuid) -> CoreResult<bool> {
        Ok(self.expense_repo().delete(expense_id).await?)
    }

    async fn upsert_income(
        &self,
        user_id: Uuid,
        month: NaiveDate,
        increment: Decimal,
        source: &str,
    ) -> CoreResult<Income> {
        validate_income_amount(increment)?;
        Ok(self
            .income_repo()
            .upsert(user_id, month, increment, source)
            .await?
            .into())
    }

    async fn find_income(&self, user_id: Uuid, months: Period) -> CoreResult<Vec<Income>> {
        let rows = self
            .income_repo()
            .find_in_range(user_id, months.start, months.end)
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_income_for_month(
        &self,
        user_id: Uuid,
        month: NaiveDate,
    ) -> CoreResult<Option<Income>> {
        Ok(self
            .income_repo()
            .find_for_month(user_id, month)
            .await?
            .map(Into::into))
    }

    async fn save_recommendation(
        &self,
        snapshot: RecommendationSnapshot,
    ) -> CoreResult<RecommendationSnapshot> {
        let row = self.recommendation_repo().insert(&snapshot).await?;
        Ok(RecommendationSnapshot::try_from(row)?)
    }

    async fn latest_recommendation(
        &self,
        user_id: Uuid,
    ) -> CoreResult<Option<RecommendationSnapshot>> {
        match self.recommendation_repo().latest(user_id).await? {
            Some(row) => Ok(Some(RecommendationSnapshot::try_from(row)?)),
            None => Ok(None),
        }
    }
}
