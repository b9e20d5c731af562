use axum::{extract::Query, response::Json, Json as JsonExtractor};
use colour_engine::{
    generate_custom_scale, generate_harmony, generate_monochromatic, generate_random_palette,
    generate_random_palette_with, generate_scale, generate_shades, generate_tints,
    generate_tones, mix_colours, HarmonyType, ScaleMethod, ScaleStep,
};
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::input::{check_count, require_colour};
use crate::error::ApiError;

const DEFAULT_VARIATION_COUNT: usize = 5;
const DEFAULT_RANDOM_COUNT: usize = 5;

/// Request body for harmony generation
#[derive(Debug, Deserialize, ToSchema)]
pub struct HarmonyRequest {
    pub colour: String,
    /// complementary, analogous, triadic, split-complementary, tetradic,
    /// square or monochromatic
    pub harmony_type: String,
    /// Number of colours for monochromatic harmonies (default 5)
    #[serde(default)]
    pub count: Option<usize>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HarmonyResponse {
    pub harmony_type: HarmonyType,
    /// Base colour first
    pub colours: Vec<String>,
}

/// Generate a colour harmony
#[utoipa::path(
    post,
    path = "/api/harmony",
    request_body = HarmonyRequest,
    responses(
        (status = 200, description = "Harmony colours", body = HarmonyResponse),
        (status = 400, description = "Unparseable colour or unknown harmony type"),
    ),
    tag = "Generators"
)]
pub async fn handle_harmony(
    JsonExtractor(request): JsonExtractor<HarmonyRequest>,
) -> Result<Json<HarmonyResponse>, ApiError> {
    let colour = require_colour(&request.colour)?;
    let harmony_type: HarmonyType = request.harmony_type.parse()?;

    let colours = match (harmony_type, request.count) {
        (HarmonyType::Monochromatic, Some(count)) => {
            generate_monochromatic(&colour, check_count(count)?)
        }
        _ => generate_harmony(&colour, harmony_type),
    };

    Ok(Json(HarmonyResponse {
        harmony_type,
        colours,
    }))
}

/// Request body for tonal scale generation
#[derive(Debug, Deserialize, ToSchema)]
pub struct ScaleRequest {
    pub colour: String,
    /// hsl or oklch (default oklch)
    #[serde(default)]
    pub method: Option<String>,
    /// Custom number of steps; the fixed 50..950 scale when omitted
    #[serde(default)]
    pub steps: Option<usize>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ScaleResponse {
    pub method: ScaleMethod,
    /// Lightest first
    pub steps: Vec<ScaleStep>,
}

/// Generate a tonal scale
#[utoipa::path(
    post,
    path = "/api/scale",
    request_body = ScaleRequest,
    responses(
        (status = 200, description = "Scale steps, lightest first", body = ScaleResponse),
        (status = 400, description = "Unparseable colour, unknown method or bad step count"),
    ),
    tag = "Generators"
)]
pub async fn handle_scale(
    JsonExtractor(request): JsonExtractor<ScaleRequest>,
) -> Result<Json<ScaleResponse>, ApiError> {
    let colour = require_colour(&request.colour)?;
    let method = match request.method.as_deref() {
        Some(method) => method.parse()?,
        None => ScaleMethod::default(),
    };

    let steps = match request.steps {
        Some(0) => {
            return Err(ApiError::InvalidRequest(
                "steps must be at least 1".to_string(),
            ))
        }
        Some(steps) => generate_custom_scale(&colour, check_count(steps)?, method),
        None => generate_scale(&colour, method),
    };

    Ok(Json(ScaleResponse { method, steps }))
}

/// Request body for tints, shades and tones
#[derive(Debug, Deserialize, ToSchema)]
pub struct VariationsRequest {
    pub colour: String,
    /// Colours per variation (default 5)
    #[serde(default)]
    pub count: Option<usize>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VariationsResponse {
    /// Mixed toward white
    pub tints: Vec<String>,
    /// Mixed toward black
    pub shades: Vec<String>,
    /// Desaturated toward grey
    pub tones: Vec<String>,
}

/// Generate tints, shades and tones
#[utoipa::path(
    post,
    path = "/api/variations",
    request_body = VariationsRequest,
    responses(
        (status = 200, description = "Variations", body = VariationsResponse),
        (status = 400, description = "Unparseable colour or count too large"),
    ),
    tag = "Generators"
)]
pub async fn handle_variations(
    JsonExtractor(request): JsonExtractor<VariationsRequest>,
) -> Result<Json<VariationsResponse>, ApiError> {
    let colour = require_colour(&request.colour)?;
    let count = check_count(request.count.unwrap_or(DEFAULT_VARIATION_COUNT))?;

    Ok(Json(VariationsResponse {
        tints: generate_tints(&colour, count),
        shades: generate_shades(&colour, count),
        tones: generate_tones(&colour, count),
    }))
}

/// Request body for mixing two colours
#[derive(Debug, Deserialize, ToSchema)]
pub struct MixRequest {
    pub first: String,
    pub second: String,
    /// Share of `second`, 0..1 (default 0.5)
    #[serde(default)]
    pub ratio: Option<f64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MixResponse {
    pub hex: String,
}

/// Mix two colours in HSL along the shorter hue arc
#[utoipa::path(
    post,
    path = "/api/mix",
    request_body = MixRequest,
    responses(
        (status = 200, description = "Mixed colour", body = MixResponse),
        (status = 400, description = "Unparseable colour or ratio outside 0..1"),
    ),
    tag = "Generators"
)]
pub async fn handle_mix(
    JsonExtractor(request): JsonExtractor<MixRequest>,
) -> Result<Json<MixResponse>, ApiError> {
    let first = require_colour(&request.first)?;
    let second = require_colour(&request.second)?;
    let ratio = request.ratio.unwrap_or(0.5);
    if !(0.0..=1.0).contains(&ratio) {
        return Err(ApiError::InvalidRequest(
            "ratio must be between 0 and 1".to_string(),
        ));
    }

    Ok(Json(MixResponse {
        hex: mix_colours(&first, &second, ratio),
    }))
}

/// Query parameters for random palettes
#[derive(Debug, Deserialize, IntoParams)]
pub struct RandomQuery {
    /// Number of colours (default 5)
    #[serde(default)]
    pub count: Option<usize>,
    /// Seed for a reproducible palette
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RandomResponse {
    pub colours: Vec<String>,
}

/// Generate a random palette
#[utoipa::path(
    get,
    path = "/api/random",
    params(RandomQuery),
    responses(
        (status = 200, description = "Random colours", body = RandomResponse),
        (status = 400, description = "Count too large"),
    ),
    tag = "Generators"
)]
pub async fn handle_random(
    Query(query): Query<RandomQuery>,
) -> Result<Json<RandomResponse>, ApiError> {
    let count = check_count(query.count.unwrap_or(DEFAULT_RANDOM_COUNT))?;

    let colours = match query.seed {
        Some(seed) => generate_random_palette_with(&mut StdRng::seed_from_u64(seed), count),
        None => generate_random_palette(count),
    };

    Ok(Json(RandomResponse { colours }))
}
