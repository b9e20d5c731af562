use axum::{response::Json, Json as JsonExtractor};
use colour_engine::{
    format_cmyk, format_hsl, format_hsv, format_lab, format_oklch, format_rgb, hex_to_cmyk,
    hex_to_hsl, hex_to_hsv, hex_to_lab, hex_to_oklch, hex_to_rgb, relative_luminance, Cmyk, Hsl,
    Hsv, Lab, Oklch, Rgb,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::input::require_colour;
use crate::error::ApiError;

/// Request body for colour conversion
#[derive(Debug, Deserialize, ToSchema)]
pub struct ConvertRequest {
    /// Hex, `rgb()`, `rgba()`, `hsl()` or `hsla()` notation
    pub colour: String,
}

/// CSS-style strings for each representation
#[derive(Debug, Serialize, ToSchema)]
pub struct FormattedColour {
    pub rgb: String,
    pub hsl: String,
    pub hsv: String,
    pub oklch: String,
    pub lab: String,
    pub cmyk: String,
}

/// A colour in every supported representation
#[derive(Debug, Serialize, ToSchema)]
pub struct ConvertResponse {
    /// Canonical `#rrggbb`
    pub hex: String,
    pub rgb: Rgb,
    pub hsl: Hsl,
    pub hsv: Hsv,
    pub oklch: Oklch,
    pub lab: Lab,
    pub cmyk: Cmyk,
    /// WCAG relative luminance, 0..1
    pub luminance: f64,
    pub formatted: FormattedColour,
}

impl ConvertResponse {
    pub fn from_hex(hex: String) -> Self {
        let rgb = hex_to_rgb(&hex);
        let hsl = hex_to_hsl(&hex);
        let hsv = hex_to_hsv(&hex);
        let oklch = hex_to_oklch(&hex);
        let lab = hex_to_lab(&hex);
        let cmyk = hex_to_cmyk(&hex);

        Self {
            formatted: FormattedColour {
                rgb: format_rgb(rgb),
                hsl: format_hsl(hsl),
                hsv: format_hsv(hsv),
                oklch: format_oklch(oklch),
                lab: format_lab(lab),
                cmyk: format_cmyk(cmyk),
            },
            luminance: relative_luminance(rgb),
            hex,
            rgb,
            hsl,
            hsv,
            oklch,
            lab,
            cmyk,
        }
    }
}

/// Convert a colour
///
/// Parses any supported notation and returns every representation.
#[utoipa::path(
    post,
    path = "/api/convert",
    request_body = ConvertRequest,
    responses(
        (status = 200, description = "Colour converted", body = ConvertResponse),
        (status = 400, description = "Unparseable colour"),
    ),
    tag = "Colour"
)]
pub async fn handle_convert(
    JsonExtractor(request): JsonExtractor<ConvertRequest>,
) -> Result<Json<ConvertResponse>, ApiError> {
    let hex = require_colour(&request.colour)?;
    Ok(Json(ConvertResponse::from_hex(hex)))
}
