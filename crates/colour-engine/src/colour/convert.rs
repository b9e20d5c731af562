//! Lenient hex-in / hex-out conversion functions
//!
//! These are the total counterparts to the typed `From` impls. Any string
//! that does not parse as hex is treated as black, so partially typed input
//! never fails. Use [`is_valid_hex`](super::is_valid_hex) or `str::parse`
//! when a malformed value must be told apart from a real `#000000`.

use super::hsl::{Hsl, Hsv};
use super::lab::{Cmyk, Lab};
use super::oklab::Oklch;
use super::rgb::Rgb;

/// Parse hex to RGB, degrading to black on malformed input.
///
/// # Example
/// ```
/// use colour_engine::{hex_to_rgb, Rgb};
/// assert_eq!(hex_to_rgb("#3b82f6"), Rgb::new(59, 130, 246));
/// assert_eq!(hex_to_rgb("not a colour"), Rgb::BLACK);
/// ```
pub fn hex_to_rgb(hex: &str) -> Rgb {
    hex.parse().unwrap_or(Rgb::BLACK)
}

pub fn rgb_to_hex(rgb: Rgb) -> String {
    rgb.to_hex()
}

pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    Hsl::from(rgb)
}

pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    Rgb::from(hsl)
}

pub fn hex_to_hsl(hex: &str) -> Hsl {
    Hsl::from(hex_to_rgb(hex))
}

pub fn hsl_to_hex(hsl: Hsl) -> String {
    Rgb::from(hsl).to_hex()
}

pub fn hex_to_hsv(hex: &str) -> Hsv {
    Hsv::from(hex_to_rgb(hex))
}

pub fn hsv_to_hex(hsv: Hsv) -> String {
    Rgb::from(hsv).to_hex()
}

pub fn hex_to_oklch(hex: &str) -> Oklch {
    Oklch::from(hex_to_rgb(hex))
}

/// Chroma above [`MAX_CHROMA`](super::MAX_CHROMA) is capped before conversion.
pub fn oklch_to_rgb(oklch: Oklch) -> Rgb {
    Rgb::from(oklch)
}

pub fn oklch_to_hex(oklch: Oklch) -> String {
    Rgb::from(oklch).to_hex()
}

pub fn hex_to_lab(hex: &str) -> Lab {
    Lab::from(hex_to_rgb(hex))
}

pub fn lab_to_rgb(lab: Lab) -> Rgb {
    Rgb::from(lab)
}

pub fn lab_to_hex(lab: Lab) -> String {
    Rgb::from(lab).to_hex()
}

pub fn hex_to_cmyk(hex: &str) -> Cmyk {
    Cmyk::from(hex_to_rgb(hex))
}

pub fn cmyk_to_rgb(cmyk: Cmyk) -> Rgb {
    Rgb::from(cmyk)
}

pub fn cmyk_to_hex(cmyk: Cmyk) -> String {
    Rgb::from(cmyk).to_hex()
}
