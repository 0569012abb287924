//! CSV export handler

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use finpal_core::{floor_to_month, Period};

use crate::csv::build_export_csv;
use crate::error::{ApiError, ApiResult};
use crate::handlers::expense::open_period;
use crate::state::AppState;

/// Which record types to include in the export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExportKind {
    All,
    Expenses,
    Income,
}

impl ExportKind {
    fn parse(value: &str) -> Result<Self, ApiError> {
        match value {
            "all" => Ok(Self::All),
            "expenses" => Ok(Self::Expenses),
            "income" => Ok(Self::Income),
            other => Err(ApiError::BadRequest(format!(
                "Unknown export type: {other} (expected all, expenses or income)"
            ))),
        }
    }
}

/// Export filters
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportQuery {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,
}

fn default_kind() -> String {
    "all".to_string()
}

/// Export a user's financial data as CSV
///
/// One flat table with expenses and monthly income totals, newest first.
#[utoipa::path(
    get,
    path = "/api/export/{user_id}",
    tag = "Reports",
    params(
        ("user_id" = Uuid, Path, description = "User id"),
        ("startDate" = Option<String>, Query, description = "Inclusive start date (YYYY-MM-DD)"),
        ("endDate" = Option<String>, Query, description = "Inclusive end date (YYYY-MM-DD)"),
        ("type" = Option<String>, Query, description = "all, expenses or income")
    ),
    responses(
        (status = 200, description = "CSV document", content_type = "text/csv"),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn export_csv(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<ExportQuery>,
) -> ApiResult<impl IntoResponse> {
    let kind = ExportKind::parse(&query.kind)?;

    state
        .store
        .find_user(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    let expenses = if kind != ExportKind::Income {
        let period = open_period(query.start_date, query.end_date);
        state.store.find_expenses(user_id, period, None).await?
    } else {
        Vec::new()
    };

    let incomes = if kind != ExportKind::Expenses {
        // Income records are keyed by the 1st of the month, so the date
        // bounds are floored to month starts before filtering.
        let months = open_period(
            query.start_date.map(floor_to_month),
            query.end_date.map(floor_to_month),
        )
        .unwrap_or_else(|| {
            Period::new(
                NaiveDate::from_ymd_opt(1, 1, 1).expect("valid date"),
                NaiveDate::from_ymd_opt(9999, 12, 1).expect("valid date"),
            )
        });
        state.store.find_income(user_id, months).await?
    } else {
        Vec::new()
    };

    let csv = build_export_csv(&expenses, &incomes);
    let filename = format!("finance-export-{}.csv", Local::now().date_naive());

    Ok((
        [
            (
                header::CONTENT_TYPE,
                "text/csv; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        csv,
    ))
}
