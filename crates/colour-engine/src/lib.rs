#![allow(clippy::excessive_precision)]

//! colour-engine: colour science and accessibility analysis for palettes
//!
//! This library converts between colour representations, computes WCAG
//! contrast, simulates colour vision deficiencies (CVD), generates
//! harmonies and tonal scales, and scores whole palettes for accessibility.
//!
//! # Quick Start
//!
//! ```
//! use colour_engine::{
//!     contrast_ratio_from_hex, generate_harmony, simulate_colourblindness, CvdType,
//!     HarmonyType,
//! };
//!
//! assert_eq!(contrast_ratio_from_hex("#000000", "#ffffff"), 21.0);
//! assert_eq!(
//!     generate_harmony("#ff0000", HarmonyType::Complementary),
//!     vec!["#ff0000", "#00ffff"]
//! );
//! assert_eq!(simulate_colourblindness("#ff0000", CvdType::Achromatopsia), "#4c4c4c");
//! ```
//!
//! # Invalid Input
//!
//! The hex-based functions are total. A string that is not a 3- or 6-digit
//! hex colour is treated as black, so half-typed input in an editor never
//! fails. Callers that must tell the two apart check [`is_valid_hex`] or
//! parse with `str::parse::<Rgb>()`, which returns a [`ParseError`].
//!
//! # Colour Spaces
//!
//! - [`Rgb`]: 8-bit sRGB, the hub every other type converts through
//! - [`LinearRgb`]: linear light, decoded via compile-time lookup tables
//! - [`Hsl`] / [`Hsv`]: cylindrical sRGB, used by harmonies and fixes
//! - [`Oklab`] / [`Oklch`]: perceptually uniform, used by tonal scales
//! - [`Lab`] / [`Cmyk`]: CIE L*a*b* (D65) and naive CMYK for display
//!
//! Two gamma tables are generated by `build.rs`. OKLab and Lab use the IEC
//! 61966-2-1 knee (0.04045); relative luminance uses the WCAG 2.1 knee
//! (0.03928). For 8-bit input the two agree on every channel value.
//!
//! # Simulation Cache
//!
//! CVD simulation goes through a [`Simulator`], which memoises results in a
//! [`SimulationCache`] (by default an LRU of 500 entries) behind a mutex.
//! The free functions such as [`simulate_colourblindness`] share one
//! process-wide simulator. Construct your own when you need an isolated or
//! differently sized cache.

pub mod colour;
pub mod contrast;
pub mod cvd;
pub mod error;
pub mod generate;
pub mod report;


pub use colour::{
    cmyk_to_hex, cmyk_to_rgb, format_cmyk, format_hsl, format_hsv, format_lab, format_oklch,
    format_rgb, hex_to_cmyk, hex_to_hsl, hex_to_hsv, hex_to_lab, hex_to_oklch, hex_to_rgb,
    hsl_to_hex, hsl_to_rgb, hsv_to_hex, is_valid_hex, lab_to_hex, lab_to_rgb, normalise_hex,
    oklch_to_hex, oklch_to_rgb, parse_colour, rgb_to_hex, rgb_to_hsl, Cmyk, Hsl, Hsv, Lab,
    LinearRgb, Oklab, Oklch, Rgb, MAX_CHROMA,
};
pub use contrast::{
    contrast_ratio, contrast_ratio_from_hex, contrast_result, format_contrast_ratio,
    optimal_text_colour, relative_luminance, suggest_contrasting_colour, wcag_level,
    ContrastResult, WcagLevel,
};
pub use cvd::{
    all_simulations, are_colours_distinguishable, check_category_accessibility,
    check_palette_accessibility, clear_simulation_cache, simulate_colourblindness,
    simulate_colourblindness_batch, simulation_cache_size, suggest_contrast_fix,
    suggest_distinguishable_fix, Category, CvdType, LightnessFix, LruCache, SimulationCache,
    Simulator, Swatch,
};
pub use error::ParseError;
pub use generate::{
    generate_custom_scale, generate_harmony, generate_monochromatic, generate_random_colour,
    generate_random_colour_with, generate_random_palette, generate_random_palette_with,
    generate_scale, generate_scale_hsl, generate_scale_oklch, generate_shades, generate_tints,
    generate_tones, mix_colours, HarmonyType, ScaleMethod, ScaleStep,
};
pub use report::{
    accessibility_report, AccessibilityReport, PaletteColour, ReportOptions, Role, WarningKey,
};
