//! API routes

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::handlers;
use crate::state::AppState;

/// Create the /api routes
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Income
        .route("/income", post(handlers::income::upsert_income))
        .route("/income/:user_id", get(handlers::income::get_income))
        // Expenses. GET takes a user id, DELETE an expense id.
        .route("/expenses", post(handlers::expense::add_expense))
        .route(
            "/expenses/:id",
            get(handlers::expense::list_expenses).delete(handlers::expense::delete_expense),
        )
        // Reports
        .route("/summary/:user_id", get(handlers::summary::get_summary))
        .route(
            "/recommendations/:user_id",
            get(handlers::recommendation::get_recommendations),
        )
        .route("/export/:user_id", get(handlers::export::export_csv))
        // News
        .route("/news", get(handlers::news::get_news))
}

/// Create Swagger UI routes
pub fn swagger_routes() -> Router<Arc<AppState>> {
    use crate::openapi::ApiDoc;
    use utoipa::OpenApi;
    use utoipa_swagger_ui::SwaggerUi;

    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
