//! Hue-rotation harmonies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::colour::{hex_to_hsl, hsl_to_hex};
use crate::error::ParseError;

/// Monochromatic lightness range, lightest first.
const MONO_LIGHTEST: f64 = 90.0;
const MONO_DARKEST: f64 = 10.0;
const MONO_DEFAULT_COUNT: usize = 5;

/// A colour-wheel relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum HarmonyType {
    Complementary,
    Analogous,
    Triadic,
    Tetradic,
    SplitComplementary,
    Square,
    Monochromatic,
}

impl HarmonyType {
    pub const ALL: [HarmonyType; 7] = [
        HarmonyType::Complementary,
        HarmonyType::Analogous,
        HarmonyType::Triadic,
        HarmonyType::Tetradic,
        HarmonyType::SplitComplementary,
        HarmonyType::Square,
        HarmonyType::Monochromatic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HarmonyType::Complementary => "complementary",
            HarmonyType::Analogous => "analogous",
            HarmonyType::Triadic => "triadic",
            HarmonyType::Tetradic => "tetradic",
            HarmonyType::SplitComplementary => "split-complementary",
            HarmonyType::Square => "square",
            HarmonyType::Monochromatic => "monochromatic",
        }
    }

    /// Hue offsets applied to the base, which is always emitted first.
    /// Monochromatic has none; it varies lightness instead.
    fn rotations(self) -> &'static [f64] {
        match self {
            HarmonyType::Complementary => &[180.0],
            HarmonyType::Analogous => &[-30.0, 30.0],
            HarmonyType::Triadic => &[120.0, 240.0],
            HarmonyType::Tetradic => &[60.0, 180.0, 240.0],
            HarmonyType::SplitComplementary => &[150.0, 210.0],
            HarmonyType::Square => &[90.0, 180.0, 270.0],
            HarmonyType::Monochromatic => &[],
        }
    }
}

impl fmt::Display for HarmonyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HarmonyType {
    type Err = ParseError;

    /// Accepts kebab, snake or run-together forms (`split-complementary`,
    /// `split_complementary`, `splitcomplementary`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        HarmonyType::ALL
            .into_iter()
            .find(|h| h.as_str().replace('-', "") == wanted)
            .ok_or_else(|| ParseError::UnknownHarmony(s.to_string()))
    }
}

/// Generate a harmony from `hex`. The first entry is the base colour.
///
/// # Example
/// ```
/// use colour_engine::{generate_harmony, HarmonyType};
/// assert_eq!(
///     generate_harmony("#ff0000", HarmonyType::Complementary),
///     vec!["#ff0000", "#00ffff"]
/// );
/// ```
pub fn generate_harmony(hex: &str, harmony: HarmonyType) -> Vec<String> {
    if harmony == HarmonyType::Monochromatic {
        return generate_monochromatic(hex, MONO_DEFAULT_COUNT);
    }

    let base = hex_to_hsl(hex);
    std::iter::once(hsl_to_hex(base))
        .chain(
            harmony
                .rotations()
                .iter()
                .map(|&degrees| hsl_to_hex(base.rotate(degrees))),
        )
        .collect()
}

/// `count` colours at the base hue and saturation with lightness spaced
/// evenly from 90 down to 10.
pub fn generate_monochromatic(hex: &str, count: usize) -> Vec<String> {
    let base = hex_to_hsl(hex);
    match count {
        0 => Vec::new(),
        1 => vec![hsl_to_hex(
            base.with_lightness(base.l.clamp(MONO_DARKEST, MONO_LIGHTEST)),
        )],
        _ => {
            let step = (MONO_LIGHTEST - MONO_DARKEST) / (count - 1) as f64;
            (0..count)
                .map(|i| hsl_to_hex(base.with_lightness(MONO_LIGHTEST - step * i as f64)))
                .collect()
        }
    }
}
