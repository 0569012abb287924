//! Income repository
//!
//! One row per (user, month). The accumulate-on-conflict upsert is a single
//! atomic statement, so two concurrent submissions for the same month both
//! land in the stored amount.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{DbIncome, DbResult};

/// Income repository
pub struct IncomeRepo {
    pool: PgPool,
}

impl IncomeRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Add `increment` to the month's income record, creating it if absent,
    /// and replace the source label. `month` must be the 1st of the month.
    pub async fn upsert(
        &self,
        user_id: Uuid,
        month: NaiveDate,
        increment: Decimal,
        source: &str,
    ) -> DbResult<DbIncome> {
        let income = sqlx::query_as::<_, DbIncome>(
            r#"
            INSERT INTO incomes (user_id, amount, month, source)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id, month) DO UPDATE
            SET amount = incomes.amount + EXCLUDED.amount,
                source = EXCLUDED.source
            RETURNING id, user_id, amount, month, source, created_at
            "#,
        )
        .bind(user_id)
        .bind(increment)
        .bind(month)
        .bind(source)
        .fetch_one(&self.pool)
        .await?;

        Ok(income)
    }

    /// Income records with month keys inside `[start, end]` (inclusive).
    pub async fn find_in_range(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DbResult<Vec<DbIncome>> {
        let incomes = sqlx::query_as::<_, DbIncome>(
            r#"
            SELECT id, user_id, amount, month, source, created_at
            FROM incomes
            WHERE user_id = $1 AND month >= $2 AND month <= $3
            ORDER BY month DESC
            "#,
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(incomes)
    }

    /// The single income record for one month, if present.
    pub async fn find_for_month(
        &self,
        user_id: Uuid,
        month: NaiveDate,
    ) -> DbResult<Option<DbIncome>> {
        let income = sqlx::query_as::<_, DbIncome>(
            r#"
            SELECT id, user_id, amount, month, source, created_at
            FROM incomes
            WHERE user_id = $1 AND month = $2
            "#,
        )
        .bind(user_id)
        .bind(month)
        .fetch_optional(&self.pool)
        .await?;

        Ok(income)
    }
}
