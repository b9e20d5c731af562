//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::FromRef,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::models::AppConfig;
use crate::services::{AnalysisService, InMemoryReviewStore};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub analysis: Arc<AnalysisService>,
    pub reviews: Arc<InMemoryReviewStore>,
}

impl FromRef<AppState> for Arc<AnalysisService> {
    fn from_ref(state: &AppState) -> Self {
        state.analysis.clone()
    }
}

impl FromRef<AppState> for Arc<InMemoryReviewStore> {
    fn from_ref(state: &AppState) -> Self {
        state.reviews.clone()
    }
}

/// Create application state from configuration.
pub fn create_app_state(config: AppConfig) -> AppState {
    let analysis = Arc::new(AnalysisService::new(
        config.analysis.clone(),
        config.cache.capacity,
    ));

    AppState {
        config: Arc::new(config),
        analysis,
        reviews: Arc::new(InMemoryReviewStore::new()),
    }
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    type Store = InMemoryReviewStore;

    Router::new()
        // Colour and contrast
        .route("/api/convert", post(api::handle_convert))
        .route("/api/contrast", post(api::handle_contrast))
        // Simulation and analysis
        .route("/api/simulate", post(api::handle_simulate))
        .route("/api/palette/check", post(api::handle_palette_check))
        .route("/api/palette/categories", post(api::handle_category_check))
        .route("/api/fix/contrast", post(api::handle_contrast_fix))
        .route("/api/fix/distinguish", post(api::handle_distinguish_fix))
        .route(
            "/api/cache",
            get(api::handle_cache_status).delete(api::handle_clear_cache),
        )
        // Generators
        .route("/api/harmony", post(api::handle_harmony))
        .route("/api/scale", post(api::handle_scale))
        .route("/api/variations", post(api::handle_variations))
        .route("/api/mix", post(api::handle_mix))
        .route("/api/random", get(api::handle_random))
        // Reports and review state
        .route("/api/report", post(api::handle_report::<Store>))
        .route(
            "/api/palettes/:palette_id/reviews",
            get(api::handle_list_reviews::<Store>).post(api::handle_add_review::<Store>),
        )
        .route(
            "/api/palettes/:palette_id/reviews/:key",
            delete(api::handle_remove_review::<Store>),
        )
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
