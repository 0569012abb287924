//! Application state shared across handlers

use std::sync::Arc;

use finpal_core::{FinanceStore, RecommendationService, SummaryService};
use finpal_db::Database;

use crate::news::NewsCache;

/// Shared application state
pub struct AppState {
    /// Database connections (used for health checks)
    pub db: Arc<Database>,
    /// Persistence behind the core trait
    pub store: Arc<dyn FinanceStore>,
    /// Summary computation
    pub summaries: SummaryService,
    /// Recommendation generation
    pub recommendations: RecommendationService,
    /// Cached financial news feed
    pub news: NewsCache,
}

impl AppState {
    /// Create a new application state
    pub fn new(db: Arc<Database>, news: NewsCache) -> Self {
        let store: Arc<dyn FinanceStore> = db.clone();
        Self {
            db,
            store: store.clone(),
            summaries: SummaryService::new(store.clone()),
            recommendations: RecommendationService::new(store),
            news,
        }
    }
}
