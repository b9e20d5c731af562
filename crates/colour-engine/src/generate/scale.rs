//! Tonal scales (50..950) in HSL and OKLCH.
//!
//! The per-step lightness targets and saturation / chroma multipliers are
//! hand-tuned to approximate Tailwind's palette ramps. Keep them as they
//! are; other tooling compares against these exact outputs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::colour::{hex_to_hsl, hex_to_oklch, hsl_to_hex, oklch_to_hex, Hsl, Oklch, MAX_CHROMA};
use crate::error::ParseError;

/// Named steps of a standard scale.
pub const SCALE_STEPS: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

const HSL_LIGHTNESS: [f64; 11] = [97.0, 94.0, 86.0, 77.0, 66.0, 55.0, 45.0, 36.0, 27.0, 19.0, 11.0];
const HSL_SATURATION: [f64; 11] = [0.3, 0.45, 0.6, 0.75, 0.9, 1.0, 1.0, 0.95, 0.9, 0.85, 0.8];

const OKLCH_LIGHTNESS: [f64; 11] = [
    0.971, 0.936, 0.885, 0.808, 0.704, 0.637, 0.577, 0.505, 0.444, 0.396, 0.258,
];
const OKLCH_CHROMA: [f64; 11] = [0.1, 0.2, 0.4, 0.65, 0.9, 1.0, 0.95, 0.85, 0.7, 0.55, 0.4];

/// Lightness range of custom scales, lightest first.
const CUSTOM_HSL_RANGE: (f64, f64) = (97.0, 11.0);
const CUSTOM_OKLCH_RANGE: (f64, f64) = (0.97, 0.26);

/// Colour space a scale is generated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum ScaleMethod {
    Hsl,
    #[default]
    Oklch,
}

impl fmt::Display for ScaleMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScaleMethod::Hsl => "hsl",
            ScaleMethod::Oklch => "oklch",
        })
    }
}

impl FromStr for ScaleMethod {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hsl" => Ok(ScaleMethod::Hsl),
            "oklch" => Ok(ScaleMethod::Oklch),
            _ => Err(ParseError::UnknownScaleMethod(s.to_string())),
        }
    }
}

/// One entry of a scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ScaleStep {
    /// Step name: 50..950 for standard scales, 1-based index for custom ones
    pub step: u16,
    pub hex: String,
}

fn hsl_step(base: Hsl, lightness: f64, saturation_multiplier: f64) -> String {
    hsl_to_hex(Hsl::new(
        base.h,
        (base.s * saturation_multiplier).min(100.0),
        lightness,
    ))
}

fn oklch_step(base: Oklch, lightness: f64, chroma_multiplier: f64) -> String {
    oklch_to_hex(Oklch::new(
        lightness,
        (base.c * chroma_multiplier).min(MAX_CHROMA),
        base.h,
    ))
}

/// Standard 11-step scale using HSL lightness targets.
pub fn generate_scale_hsl(hex: &str) -> Vec<ScaleStep> {
    let base = hex_to_hsl(hex);
    SCALE_STEPS
        .iter()
        .zip(HSL_LIGHTNESS.iter().zip(HSL_SATURATION.iter()))
        .map(|(&step, (&l, &s))| ScaleStep {
            step,
            hex: hsl_step(base, l, s),
        })
        .collect()
}

/// Standard 11-step scale in OKLCH, chroma capped per step.
///
/// # Example
/// ```
/// use colour_engine::generate_scale_oklch;
/// let scale = generate_scale_oklch("#3b82f6");
/// assert_eq!(scale.len(), 11);
/// assert_eq!(scale[0].step, 50);
/// assert_eq!(scale[10].step, 950);
/// ```
pub fn generate_scale_oklch(hex: &str) -> Vec<ScaleStep> {
    let base = hex_to_oklch(hex);
    SCALE_STEPS
        .iter()
        .zip(OKLCH_LIGHTNESS.iter().zip(OKLCH_CHROMA.iter()))
        .map(|(&step, (&l, &c))| ScaleStep {
            step,
            hex: oklch_step(base, l, c),
        })
        .collect()
}

pub fn generate_scale(hex: &str, method: ScaleMethod) -> Vec<ScaleStep> {
    match method {
        ScaleMethod::Hsl => generate_scale_hsl(hex),
        ScaleMethod::Oklch => generate_scale_oklch(hex),
    }
}

/// Scale with an arbitrary number of steps, lightest first.
///
/// Lightness is interpolated linearly across the range. Saturation (HSL) or
/// chroma (OKLCH) follows `1 - 0.7 * (2t - 1)^2`, peaking at the midpoint.
/// A single step sits at the midpoint; zero steps yields an empty scale.
pub fn generate_custom_scale(hex: &str, steps: usize, method: ScaleMethod) -> Vec<ScaleStep> {
    let position = |i: usize| {
        if steps <= 1 {
            0.5
        } else {
            i as f64 / (steps - 1) as f64
        }
    };
    let multiplier = |t: f64| 1.0 - 0.7 * (2.0 * t - 1.0).powi(2);
    let lerp = |(from, to): (f64, f64), t: f64| from + (to - from) * t;

    let hex_at: Box<dyn Fn(f64) -> String> = match method {
        ScaleMethod::Hsl => {
            let base = hex_to_hsl(hex);
            Box::new(move |t| hsl_step(base, lerp(CUSTOM_HSL_RANGE, t), multiplier(t)))
        }
        ScaleMethod::Oklch => {
            let base = hex_to_oklch(hex);
            Box::new(move |t| oklch_step(base, lerp(CUSTOM_OKLCH_RANGE, t), multiplier(t)))
        }
    };

    (0..steps)
        .map(|i| ScaleStep {
            step: u16::try_from(i + 1).unwrap_or(u16::MAX),
            hex: hex_at(position(i)),
        })
        .collect()
}
