//! OpenAPI documentation

use utoipa::OpenApi;

use crate::dto;
use crate::error::ErrorResponse;
use crate::handlers;

/// FinPal API documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "FinPal API",
        description = "Personal finance tracker: income, expenses, summaries, budget recommendations and CSV export.",
        version = "0.1.0",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0"
        )
    ),
    paths(
        handlers::health::health_check,
        handlers::income::upsert_income,
        handlers::income::get_income,
        handlers::expense::add_expense,
        handlers::expense::list_expenses,
        handlers::expense::delete_expense,
        handlers::summary::get_summary,
        handlers::recommendation::get_recommendations,
        handlers::export::export_csv,
        handlers::news::get_news,
    ),
    components(schemas(
        ErrorResponse,
        dto::IncomeUpsertRequest,
        dto::IncomeQuery,
        dto::IncomeProfile,
        dto::CreateExpenseRequest,
        dto::ExpenseListQuery,
        dto::ExpenseResponse,
    )),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Income", description = "Monthly income tracking"),
        (name = "Expenses", description = "Expense management"),
        (name = "Reports", description = "Summaries, recommendations and exports"),
        (name = "News", description = "Financial news feed")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_generation() {
        let spec = ApiDoc::openapi();
        assert_eq!(spec.info.title, "FinPal API");
        let json = spec.to_json().unwrap();
        assert!(json.contains("/api/summary/{user_id}"));
    }
}
