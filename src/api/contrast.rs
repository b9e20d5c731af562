use axum::{extract::State, response::Json, Json as JsonExtractor};
use colour_engine::{
    contrast_result, format_contrast_ratio, optimal_text_colour, suggest_contrasting_colour,
    wcag_level, ContrastResult, WcagLevel,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use super::input::{check_ratio, require_colour};
use crate::error::ApiError;
use crate::services::AnalysisService;

/// Request body for a contrast check
#[derive(Debug, Deserialize, ToSchema)]
pub struct ContrastRequest {
    pub foreground: String,
    pub background: String,
    /// Ratio the suggestion should reach (default from config, usually 4.5)
    #[serde(default)]
    pub target_ratio: Option<f64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContrastResponse {
    pub foreground: String,
    pub background: String,
    #[serde(flatten)]
    pub result: ContrastResult,
    /// Ratio as `X.XX:1`
    pub formatted: String,
    pub level_normal: WcagLevel,
    pub level_large: WcagLevel,
    /// Black or white, whichever reads better on the background
    pub optimal_text: String,
    /// Foreground moved toward black or white until it reaches the target
    pub suggested_foreground: String,
    pub target_ratio: f64,
}

/// Check contrast between two colours
///
/// Returns the WCAG 2.1 ratio, pass flags, levels and a suggested
/// foreground that reaches the target ratio.
#[utoipa::path(
    post,
    path = "/api/contrast",
    request_body = ContrastRequest,
    responses(
        (status = 200, description = "Contrast computed", body = ContrastResponse),
        (status = 400, description = "Unparseable colour or target ratio out of range"),
    ),
    tag = "Contrast"
)]
pub async fn handle_contrast(
    State(analysis): State<Arc<AnalysisService>>,
    JsonExtractor(request): JsonExtractor<ContrastRequest>,
) -> Result<Json<ContrastResponse>, ApiError> {
    let foreground = require_colour(&request.foreground)?;
    let background = require_colour(&request.background)?;
    let target_ratio = check_ratio("target_ratio", request.target_ratio)?
        .unwrap_or(analysis.config().target_ratio);

    let result = contrast_result(&foreground, &background);

    tracing::debug!(
        foreground = %foreground,
        background = %background,
        ratio = result.ratio,
        "Contrast checked"
    );

    Ok(Json(ContrastResponse {
        formatted: format_contrast_ratio(result.ratio),
        level_normal: wcag_level(result.ratio, false),
        level_large: wcag_level(result.ratio, true),
        optimal_text: optimal_text_colour(&background).to_string(),
        suggested_foreground: suggest_contrasting_colour(&background, &foreground, target_ratio),
        target_ratio,
        foreground,
        background,
        result,
    }))
}
