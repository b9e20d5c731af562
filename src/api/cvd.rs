use axum::{extract::State, response::Json, Json as JsonExtractor};
use colour_engine::cvd::{CategoryAccessibility, TypeAccessibility};
use colour_engine::{Category, CvdType, LightnessFix, Swatch};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use utoipa::ToSchema;

use super::input::{
    check_colour_count, check_ratio, check_threshold, parse_cvd, require_colour,
    require_colours, require_cvd,
};
use crate::error::ApiError;
use crate::services::AnalysisService;

/// Request body for simulation
#[derive(Debug, Deserialize, ToSchema)]
pub struct SimulateRequest {
    pub colours: Vec<String>,
    /// Restrict to one deficiency; all seven when omitted
    #[serde(default)]
    pub cvd_type: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SimulatedColour {
    /// Canonical input colour
    pub colour: String,
    /// Simulated hex per deficiency type
    #[schema(value_type = Object)]
    pub simulations: BTreeMap<CvdType, String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SimulateResponse {
    pub results: Vec<SimulatedColour>,
}

/// Simulate colour vision deficiencies
#[utoipa::path(
    post,
    path = "/api/simulate",
    request_body = SimulateRequest,
    responses(
        (status = 200, description = "Simulated colours", body = SimulateResponse),
        (status = 400, description = "Unparseable colour, unknown deficiency type or too many colours"),
    ),
    tag = "Simulation"
)]
pub async fn handle_simulate(
    State(analysis): State<Arc<AnalysisService>>,
    JsonExtractor(request): JsonExtractor<SimulateRequest>,
) -> Result<Json<SimulateResponse>, ApiError> {
    check_colour_count("colours", request.colours.len())?;
    let colours = require_colours(&request.colours)?;
    let cvd = parse_cvd(request.cvd_type.as_deref())?;

    let results = analysis
        .run_blocking(move |analysis| {
            colours
                .into_iter()
                .map(|colour| {
                    let simulations = match cvd {
                        Some(cvd) => BTreeMap::from([(cvd, analysis.simulate(&colour, cvd))]),
                        None => analysis.all_simulations(&colour),
                    };
                    SimulatedColour {
                        colour,
                        simulations,
                    }
                })
                .collect::<Vec<_>>()
        })
        .await?;

    Ok(Json(SimulateResponse { results }))
}

/// Request body for a palette distinguishability check
#[derive(Debug, Deserialize, ToSchema)]
pub struct PaletteCheckRequest {
    pub colours: Vec<String>,
    /// Minimum simulated distance (default from config, usually 20)
    #[serde(default)]
    pub threshold: Option<f64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaletteCheckResponse {
    /// True when every common deficiency type is accessible
    pub accessible: bool,
    #[schema(value_type = Object)]
    pub by_type: BTreeMap<CvdType, TypeAccessibility>,
}

/// Check that every pair in a palette stays distinguishable
///
/// Runs protanopia, deuteranopia, tritanopia and achromatopsia.
#[utoipa::path(
    post,
    path = "/api/palette/check",
    request_body = PaletteCheckRequest,
    responses(
        (status = 200, description = "Per-type accessibility", body = PaletteCheckResponse),
        (status = 400, description = "Unparseable colour, invalid threshold or too many colours"),
    ),
    tag = "Simulation"
)]
pub async fn handle_palette_check(
    State(analysis): State<Arc<AnalysisService>>,
    JsonExtractor(request): JsonExtractor<PaletteCheckRequest>,
) -> Result<Json<PaletteCheckResponse>, ApiError> {
    check_colour_count("colours", request.colours.len())?;
    let colours = require_colours(&request.colours)?;
    let threshold = check_threshold("threshold", request.threshold)?;

    let by_type = analysis
        .run_blocking(move |analysis| analysis.palette_check(&colours, threshold))
        .await?;

    Ok(Json(PaletteCheckResponse {
        accessible: by_type.values().all(|check| check.accessible),
        by_type,
    }))
}

/// Request body for a per-category check
#[derive(Debug, Deserialize, ToSchema)]
pub struct CategoryCheckRequest {
    /// Swatches grouped by category name
    #[schema(value_type = Object)]
    pub categories: BTreeMap<Category, Vec<Swatch>>,
    #[serde(default)]
    pub threshold: Option<f64>,
}

/// Check distinguishability within each category
///
/// Colours are only compared with others in the same category.
#[utoipa::path(
    post,
    path = "/api/palette/categories",
    request_body = CategoryCheckRequest,
    responses(
        (status = 200, description = "Per-type and per-category accessibility", body = CategoryAccessibility),
        (status = 400, description = "Unparseable colour, invalid threshold or too many colours"),
    ),
    tag = "Simulation"
)]
pub async fn handle_category_check(
    State(analysis): State<Arc<AnalysisService>>,
    JsonExtractor(request): JsonExtractor<CategoryCheckRequest>,
) -> Result<Json<CategoryAccessibility>, ApiError> {
    let threshold = check_threshold("threshold", request.threshold)?;

    let mut categories = request.categories;
    let swatches: usize = categories.values().map(Vec::len).sum();
    check_colour_count("categories", swatches)?;
    for swatch in categories.values_mut().flatten() {
        swatch.hex = require_colour(&swatch.hex)?;
    }

    let result = analysis
        .run_blocking(move |analysis| analysis.category_check(&categories, threshold))
        .await?;

    Ok(Json(result))
}

/// Request body for a contrast fix
#[derive(Debug, Deserialize, ToSchema)]
pub struct ContrastFixRequest {
    pub text: String,
    pub background: String,
    pub cvd_type: String,
    #[serde(default)]
    pub target_ratio: Option<f64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContrastFixResponse {
    #[serde(flatten)]
    pub fix: LightnessFix,
    /// Simulated contrast before the fix
    pub original_ratio: f64,
    /// Simulated contrast of the suggestion
    pub fixed_ratio: f64,
    /// False when even the fallback lightness misses the target
    pub meets_target: bool,
}

/// Suggest a text colour that keeps contrast under a deficiency
///
/// Adjusts HSL lightness in steps of 5 until the simulated pair reaches the
/// target ratio. Always answers; `meets_target` is false for the fallback.
#[utoipa::path(
    post,
    path = "/api/fix/contrast",
    request_body = ContrastFixRequest,
    responses(
        (status = 200, description = "Suggested text colour", body = ContrastFixResponse),
        (status = 400, description = "Unparseable colour, unknown deficiency or bad ratio"),
    ),
    tag = "Fixes"
)]
pub async fn handle_contrast_fix(
    State(analysis): State<Arc<AnalysisService>>,
    JsonExtractor(request): JsonExtractor<ContrastFixRequest>,
) -> Result<Json<ContrastFixResponse>, ApiError> {
    let text = require_colour(&request.text)?;
    let background = require_colour(&request.background)?;
    let cvd = require_cvd(&request.cvd_type)?;
    let target_ratio = check_ratio("target_ratio", request.target_ratio)?
        .unwrap_or(analysis.config().target_ratio);

    let fix = analysis.contrast_fix(&text, &background, cvd, Some(target_ratio));
    let fixed_ratio = analysis.simulated_ratio(&fix.hex, &background, cvd);

    Ok(Json(ContrastFixResponse {
        original_ratio: analysis.simulated_ratio(&text, &background, cvd),
        meets_target: fixed_ratio >= target_ratio,
        fixed_ratio,
        fix,
    }))
}

/// Request body for a distinguishability fix
#[derive(Debug, Deserialize, ToSchema)]
pub struct DistinguishFixRequest {
    /// Colour to adjust
    pub colour: String,
    /// Colour it must be told apart from
    pub other: String,
    pub cvd_type: String,
    /// Minimum simulated distance (default from config, usually 25)
    #[serde(default)]
    pub threshold: Option<f64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DistinguishFixResponse {
    /// None when no lightness within range separates the pair
    pub fix: Option<LightnessFix>,
    /// Simulated distance before the fix
    pub original_distance: f64,
}

/// Suggest a colour that stays distinguishable under a deficiency
#[utoipa::path(
    post,
    path = "/api/fix/distinguish",
    request_body = DistinguishFixRequest,
    responses(
        (status = 200, description = "Suggested colour, or null fix", body = DistinguishFixResponse),
        (status = 400, description = "Unparseable colour, unknown deficiency or bad threshold"),
    ),
    tag = "Fixes"
)]
pub async fn handle_distinguish_fix(
    State(analysis): State<Arc<AnalysisService>>,
    JsonExtractor(request): JsonExtractor<DistinguishFixRequest>,
) -> Result<Json<DistinguishFixResponse>, ApiError> {
    let colour = require_colour(&request.colour)?;
    let other = require_colour(&request.other)?;
    let cvd = require_cvd(&request.cvd_type)?;
    let threshold = check_threshold("threshold", request.threshold)?;

    let fix = analysis.distinguish_fix(&colour, &other, cvd, threshold);
    if fix.is_none() {
        tracing::debug!(
            colour = %colour,
            other = %other,
            cvd = %cvd,
            "No distinguishable lightness found"
        );
    }

    Ok(Json(DistinguishFixResponse {
        original_distance: analysis.simulated_distance(&colour, &other, cvd),
        fix,
    }))
}
