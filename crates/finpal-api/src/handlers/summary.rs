//! Financial summary handler

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use finpal_core::FinancialSummary;

use crate::dto::ApiData;
use crate::error::ApiResult;
use crate::state::AppState;

/// Date range selector for summaries
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Financial summary for a period
///
/// Defaults to the current calendar month, with a comparison against the
/// month before the period start.
#[utoipa::path(
    get,
    path = "/api/summary/{user_id}",
    tag = "Reports",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
        ("startDate" = Option<String>, Query, description = "Inclusive start date (YYYY-MM-DD)"),
        ("endDate" = Option<String>, Query, description = "Inclusive end date (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Financial summary"),
        (status = 400, description = "Invalid date range", body = crate::error::ErrorResponse),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_summary(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<SummaryQuery>,
) -> ApiResult<Json<ApiData<FinancialSummary>>> {
    let today = Local::now().date_naive();
    let summary = state
        .summaries
        .summary(user_id, query.start_date, query.end_date, today)
        .await?;
    Ok(Json(ApiData::ok(summary)))
}
