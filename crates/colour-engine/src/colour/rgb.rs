//! 8-bit sRGB colour type
//!
//! [`Rgb`] is the engine's canonical in-memory colour. Every other
//! representation converts to and from it, and its `Display` form is the
//! canonical external hex string (`#rrggbb`, lower-case).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A colour in 8-bit sRGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an Rgb colour from float channels in the 0.0..=255.0 range.
    ///
    /// Rounds and clamps each channel, so out-of-gamut intermediates never
    /// escape as wrapped or negative values. NaN maps to 0.
    ///
    /// # Example
    /// ```
    /// use colour_engine::Rgb;
    /// assert_eq!(Rgb::from_f64(300.0, -4.0, 127.6), Rgb::new(255, 0, 128));
    /// ```
    #[inline]
    pub fn from_f64(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: channel(r),
            g: channel(g),
            b: channel(b),
        }
    }

    /// Create an Rgb colour from unit-range float channels (0.0..=1.0).
    #[inline]
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self::from_f64(r * 255.0, g * 255.0, b * 255.0)
    }

    /// Channels scaled to 0.0..=1.0 (no gamma decode).
    #[inline]
    pub fn to_unit(self) -> [f64; 3] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        ]
    }

    /// Canonical `#rrggbb` form.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Euclidean distance between two colours in 8-bit RGB space.
    pub fn distance(self, other: Rgb) -> f64 {
        let dr = self.r as f64 - other.r as f64;
        let dg = self.g as f64 - other.g as f64;
        let db = self.b as f64 - other.b as f64;
        (dr * dr + dg * dg + db * db).sqrt()
    }

    /// Per-channel linear interpolation towards `other`.
    ///
    /// `t` is clamped to 0.0..=1.0.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| a as f64 + (b as f64 - a as f64) * t;
        Rgb::from_f64(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }
}

#[inline]
fn channel(v: f64) -> u8 {
    // `as` saturates and maps NaN to 0
    v.round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        [rgb.r, rgb.g, rgb.b]
    }
}

impl FromStr for Rgb {
    type Err = ParseError;

    /// Parse an sRGB colour from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` / `RRGGBB` - standard 6-digit hex
    /// - `#RGB` / `RGB` - shorthand 3-digit hex (expands to RRGGBB)
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use colour_engine::Rgb;
    ///
    /// let red: Rgb = "#F00".parse().unwrap();
    /// assert_eq!(red, Rgb::new(255, 0, 0));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseError::InvalidHex(s.to_string()));
        }
        let invalid = |_| ParseError::InvalidHex(s.to_string());

        match digits.len() {
            3 => {
                // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
                let r = u8::from_str_radix(&digits[0..1], 16).map_err(invalid)? * 17;
                let g = u8::from_str_radix(&digits[1..2], 16).map_err(invalid)? * 17;
                let b = u8::from_str_radix(&digits[2..3], 16).map_err(invalid)? * 17;
                Ok(Self::new(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&digits[0..2], 16).map_err(invalid)?;
                let g = u8::from_str_radix(&digits[2..4], 16).map_err(invalid)?;
                let b = u8::from_str_radix(&digits[4..6], 16).map_err(invalid)?;
                Ok(Self::new(r, g, b))
            }
            _ => Err(ParseError::InvalidLength),
        }
    }
}
