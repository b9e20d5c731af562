//! Linear RGB colour type
//!
//! Linear RGB is the space where light addition is physically accurate.
//! It is the bridge between 8-bit sRGB and the OKLab / CIE Lab spaces.

use super::lut::{linear_to_srgb, srgb_to_linear};
use super::rgb::Rgb;

/// A colour in linear RGB colour space.
///
/// Values are typically in the range 0.0..=1.0, but may exceed this range
/// for out-of-gamut intermediates (e.g. OKLCH colours with high chroma).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl LinearRgb {
    #[inline]
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for LinearRgb {
    fn from(rgb: Rgb) -> Self {
        Self {
            r: srgb_to_linear(rgb.r),
            g: srgb_to_linear(rgb.g),
            b: srgb_to_linear(rgb.b),
        }
    }
}

impl From<LinearRgb> for Rgb {
    /// Gamma-encode and quantise. Out-of-range channels are clamped.
    fn from(linear: LinearRgb) -> Self {
        Rgb::from_unit(
            linear_to_srgb(linear.r),
            linear_to_srgb(linear.g),
            linear_to_srgb(linear.b),
        )
    }
}
