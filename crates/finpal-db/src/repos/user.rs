//! User repository

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{DbError, DbResult, DbUser};

/// User repository for profile and baseline income management
pub struct UserRepo {
    pool: PgPool,
}

impl UserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user. Email is stored lowercased.
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        monthly_income: Decimal,
    ) -> DbResult<DbUser> {
        let user = sqlx::query_as::<_, DbUser>(
            r#"
            INSERT INTO users (name, email, monthly_income)
            VALUES ($1, LOWER($2), $3)
            RETURNING id, name, email, monthly_income, created_at
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(monthly_income)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e {
                if db_err.constraint() == Some("users_email_key") {
                    return DbError::Duplicate(format!("Email {} already exists", email));
                }
            }
            DbError::Query(e)
        })?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn find_by_id(&self, id: Uuid) -> DbResult<Option<DbUser>> {
        let user = sqlx::query_as::<_, DbUser>(
            r#"
            SELECT id, name, email, monthly_income, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find user by email (case-insensitive)
    pub async fn find_by_email(&self, email: &str) -> DbResult<Option<DbUser>> {
        let user = sqlx::query_as::<_, DbUser>(
            r#"
            SELECT id, name, email, monthly_income, created_at
            FROM users
            WHERE email = LOWER($1)
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Create the user or, if the email already exists, update name and
    /// baseline income in place.
    pub async fn upsert_by_email(
        &self,
        name: &str,
        email: &str,
        monthly_income: Decimal,
    ) -> DbResult<DbUser> {
        let user = sqlx::query_as::<_, DbUser>(
            r#"
            INSERT INTO users (name, email, monthly_income)
            VALUES ($1, LOWER($2), $3)
            ON CONFLICT (email) DO UPDATE
            SET name = EXCLUDED.name,
                monthly_income = EXCLUDED.monthly_income
            RETURNING id, name, email, monthly_income, created_at
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(monthly_income)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Overwrite the baseline monthly income
    pub async fn set_monthly_income(&self, user_id: Uuid, amount: Decimal) -> DbResult<()> {
        let result = sqlx::query("UPDATE users SET monthly_income = $2 WHERE id = $1")
            .bind(user_id)
            .bind(amount)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound(format!("User not found: {user_id}")));
        }

        Ok(())
    }
}
