//! Recommendation snapshot repository
//!
//! Snapshots are write-once; history is kept and the latest is read by
//! descending generation time.

use sqlx::PgPool;
use uuid::Uuid;

use crate::{DbRecommendation, DbResult};
use finpal_types::RecommendationSnapshot;

/// Recommendation repository
pub struct RecommendationRepo {
    pool: PgPool,
}

impl RecommendationRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a freshly generated snapshot.
    pub async fn insert(&self, snapshot: &RecommendationSnapshot) -> DbResult<DbRecommendation> {
        let suggestions = serde_json::to_value(&snapshot.category_suggestions)?;

        let row = sqlx::query_as::<_, DbRecommendation>(
            r#"
            INSERT INTO recommendations (
                id, user_id, recommended_savings, total_expenses,
                expense_to_income_ratio, category_suggestions, generated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, user_id, recommended_savings, total_expenses,
                      expense_to_income_ratio, category_suggestions, generated_at
            "#,
        )
        .bind(snapshot.id)
        .bind(snapshot.user_id)
        .bind(snapshot.recommended_savings)
        .bind(snapshot.total_expenses)
        .bind(snapshot.expense_to_income_ratio)
        .bind(suggestions)
        .bind(snapshot.generated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    /// Most recent snapshot for a user.
    pub async fn latest(&self, user_id: Uuid) -> DbResult<Option<DbRecommendation>> {
        let row = sqlx::query_as::<_, DbRecommendation>(
            r#"
            SELECT id, user_id, recommended_savings, total_expenses,
                   expense_to_income_ratio, category_suggestions, generated_at
            FROM recommendations
            WHERE user_id = $1
            ORDER BY generated_at DESC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}
