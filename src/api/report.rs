use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    Json as JsonExtractor,
};
use colour_engine::{AccessibilityReport, PaletteColour, WarningKey};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use utoipa::ToSchema;

use super::input::{check_colour_count, require_colour};
use crate::error::ApiError;
use crate::models::Review;
use crate::services::{AnalysisService, ReviewStore};

/// Request body for an accessibility report
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReportRequest {
    /// Palette whose stored reviews should be applied
    #[serde(default)]
    pub palette_id: Option<String>,
    pub colours: Vec<PaletteColour>,
    /// Extra reviewed warning keys, merged with stored ones
    #[serde(default)]
    pub reviewed: Vec<String>,
}

/// Ids end up inside `:`-separated warning keys, so they must be unique,
/// non-empty and free of `:`.
fn validate_colours(colours: Vec<PaletteColour>) -> Result<Vec<PaletteColour>, ApiError> {
    let mut seen = HashSet::new();
    colours
        .into_iter()
        .map(|mut colour| {
            if colour.id.is_empty() || colour.id.contains(':') {
                return Err(ApiError::InvalidRequest(format!(
                    "colour id {:?} must be non-empty and must not contain ':'",
                    colour.id
                )));
            }
            if !seen.insert(colour.id.clone()) {
                return Err(ApiError::InvalidRequest(format!(
                    "duplicate colour id {:?}",
                    colour.id
                )));
            }
            colour.hex = require_colour(&colour.hex)?;
            Ok(colour)
        })
        .collect()
}

/// Build an accessibility report for a palette
///
/// Scores role-based contrast and simulated colour-blind safety. Warnings
/// whose keys are reviewed (in the body or stored for `palette_id`) are
/// flagged and do not lower the colour-blind score.
#[utoipa::path(
    post,
    path = "/api/report",
    request_body = ReportRequest,
    responses(
        (status = 200, description = "Accessibility report", body = AccessibilityReport),
        (status = 400, description = "Unparseable colour, invalid colour id or too many colours"),
    ),
    tag = "Report"
)]
pub async fn handle_report<S: ReviewStore>(
    State(analysis): State<Arc<AnalysisService>>,
    State(store): State<Arc<S>>,
    JsonExtractor(request): JsonExtractor<ReportRequest>,
) -> Result<Json<AccessibilityReport>, ApiError> {
    check_colour_count("colours", request.colours.len())?;
    let colours = validate_colours(request.colours)?;

    let mut reviewed: HashSet<String> = request.reviewed.into_iter().collect();
    if let Some(palette_id) = request.palette_id.as_deref() {
        reviewed.extend(store.reviewed_keys(palette_id).await?);
    }

    let palette_id = request.palette_id;
    let report = analysis
        .run_blocking(move |analysis| analysis.report(palette_id.as_deref(), &colours, &reviewed))
        .await?;

    Ok(Json(report))
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewsResponse {
    pub palette_id: String,
    pub reviews: Vec<Review>,
}

/// List reviewed warnings for a palette
#[utoipa::path(
    get,
    path = "/api/palettes/{palette_id}/reviews",
    params(("palette_id" = String, Path, description = "Caller-chosen palette identifier")),
    responses(
        (status = 200, description = "Reviewed warnings, ordered by key", body = ReviewsResponse),
    ),
    tag = "Report"
)]
pub async fn handle_list_reviews<S: ReviewStore>(
    State(store): State<Arc<S>>,
    Path(palette_id): Path<String>,
) -> Result<Json<ReviewsResponse>, ApiError> {
    let reviews = store.list(&palette_id).await?;
    Ok(Json(ReviewsResponse {
        palette_id,
        reviews,
    }))
}

/// Request body for marking a warning as reviewed
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReviewRequest {
    /// Warning key from a report, `{kind}:{first}:{second}:{cvd}`
    pub key: String,
}

/// Mark a warning as reviewed
#[utoipa::path(
    post,
    path = "/api/palettes/{palette_id}/reviews",
    params(("palette_id" = String, Path, description = "Caller-chosen palette identifier")),
    request_body = ReviewRequest,
    responses(
        (status = 200, description = "Warning reviewed", body = Review),
        (status = 400, description = "Malformed warning key"),
    ),
    tag = "Report"
)]
pub async fn handle_add_review<S: ReviewStore>(
    State(store): State<Arc<S>>,
    Path(palette_id): Path<String>,
    JsonExtractor(request): JsonExtractor<ReviewRequest>,
) -> Result<Json<Review>, ApiError> {
    let key: WarningKey = request.key.parse()?;
    Ok(Json(store.mark_reviewed(&palette_id, &key).await?))
}

/// Remove a review
#[utoipa::path(
    delete,
    path = "/api/palettes/{palette_id}/reviews/{key}",
    params(
        ("palette_id" = String, Path, description = "Caller-chosen palette identifier"),
        ("key" = String, Path, description = "Warning key"),
    ),
    responses(
        (status = 204, description = "Review removed"),
        (status = 404, description = "Warning was not reviewed"),
    ),
    tag = "Report"
)]
pub async fn handle_remove_review<S: ReviewStore>(
    State(store): State<Arc<S>>,
    Path((palette_id, key)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    if store.unmark(&palette_id, &key).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}
