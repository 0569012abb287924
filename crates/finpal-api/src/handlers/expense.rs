//! Expense handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{Local, NaiveDate};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use finpal_core::Period;
use finpal_types::{Category, NewExpense};

use crate::dto::{ApiData, CreateExpenseRequest, ExpenseListQuery, ExpenseResponse};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Widen an optional date filter to a storage period. Postgres `date`
/// accepts the full 1..9999 year range used as open bounds here.
pub(crate) fn open_period(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Option<Period> {
    if start.is_none() && end.is_none() {
        return None;
    }
    let lo = start.unwrap_or(NaiveDate::from_ymd_opt(1, 1, 1).expect("valid date"));
    let hi = end.unwrap_or(NaiveDate::from_ymd_opt(9999, 12, 31).expect("valid date"));
    Some(Period::new(lo, hi))
}

/// Add a new expense
#[utoipa::path(
    post,
    path = "/api/expenses",
    tag = "Expenses",
    request_body = CreateExpenseRequest,
    responses(
        (status = 201, description = "Expense created"),
        (status = 400, description = "Invalid request", body = crate::error::ErrorResponse),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_expense(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateExpenseRequest>,
) -> ApiResult<(StatusCode, Json<ApiData<ExpenseResponse>>)> {
    req.validate()?;

    state
        .store
        .find_user(req.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let expense = state
        .store
        .create_expense(NewExpense {
            user_id: req.user_id,
            amount: req.amount,
            category: req.category,
            date: req.date.unwrap_or_else(|| Local::now().date_naive()),
            description: req.description,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiData::with_message(
            "Expense added successfully",
            ExpenseResponse::from(expense),
        )),
    ))
}

/// List a user's expenses with optional date-range and category filters
#[utoipa::path(
    get,
    path = "/api/expenses/{user_id}",
    tag = "Expenses",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
        ("startDate" = Option<String>, Query, description = "Inclusive start date (YYYY-MM-DD)"),
        ("endDate" = Option<String>, Query, description = "Inclusive end date (YYYY-MM-DD)"),
        ("category" = Option<String>, Query, description = "Category label")
    ),
    responses(
        (status = 200, description = "Expense list"),
        (status = 400, description = "Unknown category", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_expenses(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<ExpenseListQuery>,
) -> ApiResult<Json<ApiData<Vec<ExpenseResponse>>>> {
    let category = query
        .category
        .as_deref()
        .map(Category::from_str)
        .transpose()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let period = open_period(query.start_date, query.end_date);

    let expenses = state.store.find_expenses(user_id, period, category).await?;
    let responses: Vec<ExpenseResponse> = expenses.into_iter().map(Into::into).collect();

    Ok(Json(ApiData::listed(responses)))
}

/// Delete an expense
#[utoipa::path(
    delete,
    path = "/api/expenses/{expense_id}",
    tag = "Expenses",
    params(("expense_id" = Uuid, Path, description = "Expense id")),
    responses(
        (status = 200, description = "Expense deleted"),
        (status = 404, description = "Expense not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_expense(
    State(state): State<Arc<AppState>>,
    Path(expense_id): Path<Uuid>,
) -> ApiResult<Json<ApiData<()>>> {
    let deleted = state.store.delete_expense(expense_id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Expense not found".to_string()));
    }
    Ok(Json(ApiData::message_only("Expense deleted successfully")))
}
