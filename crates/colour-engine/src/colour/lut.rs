//! Gamma lookup table access functions
//!
//! Every input the engine sees is an 8-bit channel, so the decode direction
//! is an exact table lookup into tables generated at compile time by
//! build.rs. The encode direction takes arbitrary linear values and uses the
//! closed-form IEC 61966-2-1 curve.

// Include the generated LUT from build.rs
include!(concat!(env!("OUT_DIR"), "/gamma_lut.rs"));

/// Decode an 8-bit sRGB channel to linear light (IEC 61966-2-1).
#[inline]
pub fn srgb_to_linear(channel: u8) -> f64 {
    SRGB_TO_LINEAR[channel as usize]
}

/// Decode an 8-bit sRGB channel to linear light using the WCAG 2.1
/// relative-luminance threshold (0.03928).
#[inline]
pub fn wcag_to_linear(channel: u8) -> f64 {
    WCAG_TO_LINEAR[channel as usize]
}

/// Encode a linear light value (0.0..=1.0) to gamma-corrected sRGB (0.0..=1.0).
///
/// Inputs outside the unit range are clamped first.
#[inline]
pub fn linear_to_srgb(linear: f64) -> f64 {
    let linear = if linear.is_nan() {
        0.0
    } else {
        linear.clamp(0.0, 1.0)
    };
    if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}
