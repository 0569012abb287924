//! News feed handler

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::news::NewsFeed;
use crate::state::AppState;

/// Financial news headlines
///
/// Served from a short-lived in-process cache. Falls back to a built-in
/// article set when no upstream API key is configured.
#[utoipa::path(
    get,
    path = "/api/news",
    tag = "News",
    responses((status = 200, description = "News articles"))
)]
pub async fn get_news(State(state): State<Arc<AppState>>) -> Json<NewsFeed> {
    Json(state.news.fetch().await)
}
