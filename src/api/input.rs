//! Strict parsing of request values.
//!
//! The engine treats malformed colours as black; requests are rejected
//! instead so a typo never produces a plausible-looking answer.

use colour_engine::{parse_colour, CvdType};

use crate::error::ApiError;

/// Largest `count` accepted by generator endpoints
pub const MAX_COUNT: usize = 50;

/// Largest palette accepted by analysis endpoints. Checks compare every
/// pair, so cost grows with the square of this.
pub const MAX_COLOURS: usize = 100;

/// Parse any supported colour notation into canonical `#rrggbb`.
pub fn require_colour(input: &str) -> Result<String, ApiError> {
    parse_colour(input).ok_or_else(|| ApiError::InvalidColour(input.to_string()))
}

pub fn require_colours(inputs: &[String]) -> Result<Vec<String>, ApiError> {
    inputs.iter().map(|c| require_colour(c)).collect()
}

/// `None` means every deficiency type.
pub fn parse_cvd(input: Option<&str>) -> Result<Option<CvdType>, ApiError> {
    input.map(|s| s.parse().map_err(ApiError::from)).transpose()
}

pub fn require_cvd(input: &str) -> Result<CvdType, ApiError> {
    Ok(input.parse()?)
}

pub fn check_count(count: usize) -> Result<usize, ApiError> {
    if count > MAX_COUNT {
        return Err(ApiError::InvalidRequest(format!(
            "count must be at most {MAX_COUNT}"
        )));
    }
    Ok(count)
}

pub fn check_colour_count(name: &str, len: usize) -> Result<(), ApiError> {
    if len > MAX_COLOURS {
        return Err(ApiError::InvalidRequest(format!(
            "{name} must hold at most {MAX_COLOURS} colours, got {len}"
        )));
    }
    Ok(())
}

pub fn check_ratio(name: &str, ratio: Option<f64>) -> Result<Option<f64>, ApiError> {
    match ratio {
        Some(r) if !(1.0..=21.0).contains(&r) => Err(ApiError::InvalidRequest(format!(
            "{name} must be between 1 and 21"
        ))),
        _ => Ok(ratio),
    }
}

pub fn check_threshold(name: &str, threshold: Option<f64>) -> Result<Option<f64>, ApiError> {
    match threshold {
        Some(t) if !t.is_finite() || t < 0.0 => Err(ApiError::InvalidRequest(format!(
            "{name} must be a non-negative number"
        ))),
        _ => Ok(threshold),
    }
}
