//! Expense repository

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{DbExpense, DbResult};

/// Expense repository. Expenses are created and deleted, never updated.
pub struct ExpenseRepo {
    pool: PgPool,
}

impl ExpenseRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new expense. `category` must already be a canonical label.
    pub async fn create(
        &self,
        user_id: Uuid,
        amount: Decimal,
        category: &str,
        date: NaiveDate,
        description: Option<&str>,
    ) -> DbResult<DbExpense> {
        let expense = sqlx::query_as::<_, DbExpense>(
            r#"
            INSERT INTO expenses (user_id, amount, category, date, description)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, amount, category, date, description, created_at
            "#,
        )
        .bind(user_id)
        .bind(amount)
        .bind(category)
        .bind(date)
        .bind(description)
        .fetch_one(&self.pool)
        .await?;

        Ok(expense)
    }

    /// Find a user's expenses with optional date-range and category filters,
    /// newest first.
    pub async fn find(
        &self,
        user_id: Uuid,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        category: Option<&str>,
    ) -> DbResult<Vec<DbExpense>> {
        let expenses = sqlx::query_as::<_, DbExpense>(
            r#"
            SELECT id, user_id, amount, category, date, description, created_at
            FROM expenses
            WHERE user_id = $1
              AND ($2::date IS NULL OR date >= $2)
              AND ($3::date IS NULL OR date <= $3)
              AND ($4::text IS NULL OR category = $4)
            ORDER BY date DESC, created_at DESC
            "#,
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(expenses)
    }

    /// Delete an expense by id. Returns false if it did not exist.
    pub async fn delete(&self, expense_id: Uuid) -> DbResult<bool> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = $1")
            .bind(expense_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
