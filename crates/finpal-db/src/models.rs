//! Database models - mapped from PostgreSQL tables
//!
//! Row types decode with `FromRow` and convert into the domain records from
//! `finpal-types`. Category labels are stored as canonical text, so a decode
//! failure on the way out means the row predates the allowed set.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

use crate::DbError;
use finpal_types::{Expense, Income, RecommendationSnapshot, User};

#[derive(Debug, Clone, FromRow)]
pub struct DbUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub monthly_income: Decimal,
    pub created_at: DateTime<Utc>,
}

impl From<DbUser> for User {
    fn from(row: DbUser) -> Self {
        User {
            id: row.id,
            name: row.name,
            email: row.email,
            monthly_income: row.monthly_income,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct DbExpense {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount: Decimal,
    pub category: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<DbExpense> for Expense {
    type Error = DbError;

    fn try_from(row: DbExpense) -> Result<Self, Self::Error> {
        let category = row
            .category
            .parse()
            .map_err(|_| DbError::InvalidInput(format!("Unknown category: {}", row.category)))?;
        Ok(Expense {
            id: row.id,
            user_id: row.user_id,
            amount: row.amount,
            category,
            date: row.date,
            description: row.description,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct DbIncome {
    pub id: Uuid,
    pub user_id: Uuid,
    pub amount: Decimal,
    pub month: NaiveDate,
    pub source: String,
    pub created_at: DateTime<Utc>,
}

impl From<DbIncome> for Income {
    fn from(row: DbIncome) -> Self {
        Income {
            id: row.id,
            user_id: row.user_id,
            amount: row.amount,
            month: row.month,
            source: row.source,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct DbRecommendation {
    pub id: Uuid,
    pub user_id: Uuid,
    pub recommended_savings: Decimal,
    pub total_expenses: Decimal,
    pub expense_to_income_ratio: Decimal,
    pub category_suggestions: serde_json::Value,
    pub generated_at: DateTime<Utc>,
}

impl TryFrom<DbRecommendation> for RecommendationSnapshot {
    type Error = DbError;

    fn try_from(row: DbRecommendation) -> Result<Self, Self::Error> {
        Ok(RecommendationSnapshot {
            id: row.id,
            user_id: row.user_id,
            recommended_savings: row.recommended_savings,
            total_expenses: row.total_expenses,
            expense_to_income_ratio: row.expense_to_income_ratio,
            category_suggestions: serde_json::from_value(row.category_suggestions)?,
            generated_at: row.generated_at,
        })
    }
}
