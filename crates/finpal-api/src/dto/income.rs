//! Income DTOs

use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use finpal_types::User;

/// Create-or-accumulate income request.
///
/// With `userId` the existing profile is used (and the baseline income
/// updated when `monthlyIncome` is present). Without it, `name` and `email`
/// create or refresh the profile. When `month` and `year` are set the amount
/// is added to that month's income record.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IncomeUpsertRequest {
    /// Existing user id
    pub user_id: Option<Uuid>,
    /// Display name, for profile creation
    pub name: Option<String>,
    /// Email, for profile creation or lookup
    #[validate(email)]
    pub email: Option<String>,
    /// Income amount
    #[schema(value_type = Option<f64>)]
    pub monthly_income: Option<Decimal>,
    /// Calendar month, 1-12
    #[validate(range(min = 1, max = 12))]
    pub month: Option<u32>,
    /// Calendar year
    pub year: Option<i32>,
    /// Income source label
    pub source: Option<String>,
}

/// Month selector for income lookups
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct IncomeQuery {
    /// Calendar month, 1-12
    pub month: Option<u32>,
    /// Calendar year
    pub year: Option<i32>,
}

/// User profile with the income effective for the requested month
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct IncomeProfile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Month-specific income when a record exists, baseline otherwise
    pub monthly_income: f64,
    pub created_at: DateTime<Utc>,
}

impl IncomeProfile {
    pub fn from_user(user: &User, effective_income: Decimal) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            monthly_income: effective_income.to_f64().unwrap_or_default(),
            created_at: user.created_at,
        }
    }
}
