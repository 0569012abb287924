//! Income handlers
//!
//! Income is tracked per calendar month, one record per user and month.
//! Repeated submissions for the same month accumulate instead of replacing,
//! so salary plus freelance income both count.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use finpal_types::DEFAULT_INCOME_SOURCE;

use crate::dto::{ApiData, IncomeProfile, IncomeQuery, IncomeUpsertRequest};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

fn month_start(year: i32, month: u32) -> ApiResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| ApiError::BadRequest(format!("Invalid month/year: {month}/{year}")))
}

/// Create or update a user's monthly income
///
/// With `userId`, updates the existing profile's baseline income. Without
/// it, creates (or refreshes) the profile keyed by email. When `month` and
/// `year` are given, the amount is added to that month's income record.
#[utoipa::path(
    post,
    path = "/api/income",
    tag = "Income",
    request_body = IncomeUpsertRequest,
    responses(
        (status = 200, description = "Income updated"),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn upsert_income(
    State(state): State<Arc<AppState>>,
    Json(req): Json<IncomeUpsertRequest>,
) -> ApiResult<Json<ApiData<IncomeProfile>>> {
    req.validate()?;

    let user = match req.user_id {
        Some(id) => {
            let mut user = state
                .store
                .find_user(id)
                .await?
                .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;
            if let Some(amount) = req.monthly_income {
                state.store.set_baseline_income(id, amount).await?;
                user.monthly_income = amount;
            }
            user
        }
        None => {
            let name = req
                .name
                .as_deref()
                .ok_or_else(|| ApiError::BadRequest("name is required for new users".to_string()))?;
            let email = req
                .email
                .as_deref()
                .ok_or_else(|| ApiError::BadRequest("email is required for new users".to_string()))?;
            let baseline = req.monthly_income.unwrap_or_default();
            state.store.upsert_user_by_email(name, email, baseline).await?
        }
    };

    // Month-specific submissions accumulate into the income history
    let mut effective = user.monthly_income;
    if let (Some(month), Some(year)) = (req.month, req.year) {
        let amount = req.monthly_income.ok_or_else(|| {
            ApiError::BadRequest("monthlyIncome is required when month and year are set".to_string())
        })?;
        let month = month_start(year, month)?;
        let source = req.source.as_deref().unwrap_or(DEFAULT_INCOME_SOURCE);
        let record = state.store.upsert_income(user.id, month, amount, source).await?;
        effective = record.amount;
    }

    Ok(Json(ApiData::with_message(
        "Income updated successfully",
        IncomeProfile::from_user(&user, effective),
    )))
}

/// Get a user's income, optionally for a specific month
///
/// Returns the month's income record when one exists, otherwise the
/// profile's baseline monthly income.
#[utoipa::path(
    get,
    path = "/api/income/{user_id}",
    tag = "Income",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
        ("month" = Option<u32>, Query, description = "Calendar month, 1-12"),
        ("year" = Option<i32>, Query, description = "Calendar year")
    ),
    responses(
        (status = 200, description = "Income information"),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_income(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<IncomeQuery>,
) -> ApiResult<Json<ApiData<IncomeProfile>>> {
    let user = state
        .store
        .find_user(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let mut effective = user.monthly_income;
    if let (Some(month), Some(year)) = (query.month, query.year) {
        let month = month_start(year, month)?;
        if let Some(record) = state.store.find_income_for_month(user_id, month).await? {
            effective = record.amount;
        }
    }

    Ok(Json(ApiData::ok(IncomeProfile::from_user(&user, effective))))
}
