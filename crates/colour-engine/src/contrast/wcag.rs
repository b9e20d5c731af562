//! WCAG 2.1 relative luminance, contrast ratio and conformance levels.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::colour::lut::wcag_to_linear;
use crate::colour::{hex_to_rgb, Rgb};

/// Minimum ratio for AA normal text and AAA large text.
pub const AA_NORMAL: f64 = 4.5;
/// Minimum ratio for AAA normal text.
pub const AAA_NORMAL: f64 = 7.0;
/// Minimum ratio for AA large text.
pub const AA_LARGE: f64 = 3.0;
/// Minimum ratio for AAA large text.
pub const AAA_LARGE: f64 = 4.5;

/// Backgrounds brighter than this get black text, darker ones white.
pub const OPTIMAL_TEXT_THRESHOLD: f64 = 0.179;

/// WCAG conformance level for a contrast ratio.
///
/// Variants are declared weakest first, so `Ord` follows conformance:
/// `Fail < AaLarge < Aa < Aaa`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum WcagLevel {
    #[serde(rename = "Fail")]
    Fail,
    #[serde(rename = "AA Large")]
    AaLarge,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

impl WcagLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            WcagLevel::Fail => "Fail",
            WcagLevel::AaLarge => "AA Large",
            WcagLevel::Aa => "AA",
            WcagLevel::Aaa => "AAA",
        }
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contrast between two colours with pass/fail flags for each WCAG
/// criterion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ContrastResult {
    /// Contrast ratio, 1.0..=21.0
    pub ratio: f64,
    pub aa_normal: bool,
    pub aa_large: bool,
    pub aaa_normal: bool,
    pub aaa_large: bool,
}

impl ContrastResult {
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            ratio,
            aa_normal: ratio >= AA_NORMAL,
            aa_large: ratio >= AA_LARGE,
            aaa_normal: ratio >= AAA_NORMAL,
            aaa_large: ratio >= AAA_LARGE,
        }
    }
}

/// WCAG 2.1 relative luminance of an sRGB colour, 0.0..=1.0.
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let l = 0.2126 * wcag_to_linear(rgb.r)
        + 0.7152 * wcag_to_linear(rgb.g)
        + 0.0722 * wcag_to_linear(rgb.b);
    l.clamp(0.0, 1.0)
}

/// Contrast ratio between two relative luminances.
///
/// Symmetric in its arguments; the result is clamped to 1.0..=21.0.
pub fn contrast_ratio(l1: f64, l2: f64) -> f64 {
    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    ((lighter + 0.05) / (darker + 0.05)).clamp(1.0, 21.0)
}

/// Contrast ratio between two RGB colours.
pub fn contrast_ratio_rgb(a: Rgb, b: Rgb) -> f64 {
    contrast_ratio(relative_luminance(a), relative_luminance(b))
}

/// Contrast ratio between two hex colours (malformed hex counts as black).
///
/// # Example
/// ```
/// use colour_engine::contrast_ratio_from_hex;
/// assert_eq!(contrast_ratio_from_hex("#000000", "#ffffff"), 21.0);
/// ```
pub fn contrast_ratio_from_hex(a: &str, b: &str) -> f64 {
    contrast_ratio_rgb(hex_to_rgb(a), hex_to_rgb(b))
}

/// Full WCAG breakdown for a colour pair.
pub fn contrast_result(a: &str, b: &str) -> ContrastResult {
    ContrastResult::from_ratio(contrast_ratio_from_hex(a, b))
}

/// Classify a ratio. Thresholds are 7 / 4.5 / 3 for normal text and
/// 4.5 / 3 for large text.
pub fn wcag_level(ratio: f64, is_large_text: bool) -> WcagLevel {
    if is_large_text {
        if ratio >= AAA_LARGE {
            WcagLevel::Aaa
        } else if ratio >= AA_LARGE {
            WcagLevel::Aa
        } else {
            WcagLevel::Fail
        }
    } else if ratio >= AAA_NORMAL {
        WcagLevel::Aaa
    } else if ratio >= AA_NORMAL {
        WcagLevel::Aa
    } else if ratio >= AA_LARGE {
        WcagLevel::AaLarge
    } else {
        WcagLevel::Fail
    }
}

/// Black or white, whichever reads better on `background`.
pub fn optimal_text_colour(background: &str) -> &'static str {
    if relative_luminance(hex_to_rgb(background)) > OPTIMAL_TEXT_THRESHOLD {
        "#000000"
    } else {
        "#ffffff"
    }
}

/// Render a ratio as `X.XX:1`.
pub fn format_contrast_ratio(ratio: f64) -> String {
    format!("{ratio:.2}:1")
}
