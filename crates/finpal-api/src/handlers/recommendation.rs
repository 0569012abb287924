//! Budget recommendation handler

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Local;
use std::sync::Arc;
use uuid::Uuid;

use finpal_core::RecommendationReport;

use crate::dto::ApiData;
use crate::error::ApiResult;
use crate::state::AppState;

/// Generate budget recommendations
///
/// Compares the current month's spending against the budget allocation
/// table and persists a fresh snapshot. With no income configured, returns
/// a prompt to set one instead.
#[utoipa::path(
    get,
    path = "/api/recommendations/{user_id}",
    tag = "Reports",
    params(("user_id" = Uuid, Path, description = "User id")),
    responses(
        (status = 200, description = "Recommendation report"),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_recommendations(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<ApiData<RecommendationReport>>> {
    let today = Local::now().date_naive();
    let report = state.recommendations.generate(user_id, today).await?;
    Ok(Json(ApiData::ok(report)))
}
