use axum::{extract::State, response::Json};
use std::sync::Arc;

use crate::services::{AnalysisService, CacheStatus};

/// Simulation cache occupancy
#[utoipa::path(
    get,
    path = "/api/cache",
    responses(
        (status = 200, description = "Cache size and capacity", body = CacheStatus),
    ),
    tag = "Simulation"
)]
pub async fn handle_cache_status(State(analysis): State<Arc<AnalysisService>>) -> Json<CacheStatus> {
    Json(analysis.cache_status())
}

/// Empty the simulation cache
#[utoipa::path(
    delete,
    path = "/api/cache",
    responses(
        (status = 200, description = "Cache cleared", body = CacheStatus),
    ),
    tag = "Simulation"
)]
pub async fn handle_clear_cache(State(analysis): State<Arc<AnalysisService>>) -> Json<CacheStatus> {
    analysis.clear_cache();
    Json(analysis.cache_status())
}
