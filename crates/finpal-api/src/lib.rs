//! FinPal REST API
//!
//! HTTP surface for the finance tracker.
//!
//! ```text
//! /api/
//! ├── /income              - Monthly income (create-or-accumulate)
//! ├── /expenses            - Expense CRUD with filters
//! ├── /summary             - Period summaries with month-over-month comparison
//! ├── /recommendations     - Budget recommendations
//! ├── /export              - CSV export
//! └── /news                - Cached financial headlines
//! /health                  - Liveness + database connectivity
//! /docs                    - Swagger UI
//! ```

pub mod csv;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod news;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::Router;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use error::{ApiError, ApiResult};
pub use news::NewsCache;
pub use state::AppState;

/// API configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Enable CORS for browser clients
    pub enable_cors: bool,
    /// Allowed origins for CORS
    pub cors_origins: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            enable_cors: true,
            cors_origins: vec!["*".to_string()],
        }
    }
}

/// Create the main API router with all middleware
pub fn create_router(state: Arc<AppState>, config: ApiConfig) -> Router {
    let mut router = Router::new()
        .nest("/api", routes::api_routes())
        .route("/health", axum::routing::get(handlers::health::health_check))
        .merge(routes::swagger_routes())
        .with_state(state);

    router = router.layer(TraceLayer::new_for_http());

    if config.enable_cors {
        let cors = if config.cors_origins.contains(&"*".to_string()) {
            CorsLayer::permissive()
        } else {
            CorsLayer::new()
                .allow_origin(
                    config
                        .cors_origins
                        .iter()
                        .filter_map(|o| o.parse().ok())
                        .collect::<Vec<_>>(),
                )
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::DELETE,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers(Any)
        };
        router = router.layer(cors);
    }

    router
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_allows_all_origins() {
        let config = ApiConfig::default();
        assert!(config.enable_cors);
        assert_eq!(config.cors_origins, vec!["*".to_string()]);
    }
}
