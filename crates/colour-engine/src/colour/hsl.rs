//! HSL and HSV cylindrical colour types
//!
//! Hue is in degrees, normalised to 0.0..360.0. Saturation, lightness and
//! value are percentages in 0.0..=100.0. Components are kept as floats so
//! that chains of conversions don't accumulate integer rounding; callers
//! that want whole numbers round at formatting time.

use serde::{Deserialize, Serialize};

use super::rgb::Rgb;

/// A colour in HSL (hue, saturation, lightness).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Hsl {
    /// Hue in degrees, 0.0..360.0
    pub h: f64,
    /// Saturation percentage, 0.0..=100.0
    pub s: f64,
    /// Lightness percentage, 0.0..=100.0
    pub l: f64,
}

/// A colour in HSV (hue, saturation, value).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Hsv {
    /// Hue in degrees, 0.0..360.0
    pub h: f64,
    /// Saturation percentage, 0.0..=100.0
    pub s: f64,
    /// Value percentage, 0.0..=100.0
    pub v: f64,
}

/// Wrap any hue angle into 0.0..360.0.
#[inline]
pub fn wrap_hue(h: f64) -> f64 {
    if !h.is_finite() {
        return 0.0;
    }
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can return 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[inline]
fn percent(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 100.0)
    }
}

impl Hsl {
    /// Create a new HSL colour, wrapping hue and clamping percentages.
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: wrap_hue(h),
            s: percent(s),
            l: percent(l),
        }
    }

    /// Same hue and saturation, different lightness (clamped).
    pub fn with_lightness(self, l: f64) -> Self {
        Self::new(self.h, self.s, l)
    }

    /// Same saturation and lightness, hue rotated by `degrees`.
    pub fn rotate(self, degrees: f64) -> Self {
        Self::new(self.h + degrees, self.s, self.l)
    }
}

impl Hsv {
    /// Create a new HSV colour, wrapping hue and clamping percentages.
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self {
            h: wrap_hue(h),
            s: percent(s),
            v: percent(v),
        }
    }
}

/// Hue in degrees from normalised channels and their max/delta.
fn hue_of(r: f64, g: f64, b: f64, max: f64, delta: f64) -> f64 {
    if delta == 0.0 {
        return 0.0;
    }
    let sector = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    wrap_hue(sector * 60.0)
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        let [r, g, b] = rgb.to_unit();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let l = (max + min) / 2.0;

        let s = if delta == 0.0 {
            0.0
        } else if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        Hsl {
            h: hue_of(r, g, b, max, delta),
            s: s * 100.0,
            l: l * 100.0,
        }
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        let h = wrap_hue(hsl.h) / 360.0;
        let s = percent(hsl.s) / 100.0;
        let l = percent(hsl.l) / 100.0;

        if s == 0.0 {
            return Rgb::from_unit(l, l, l);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Rgb::from_unit(
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

impl From<Rgb> for Hsv {
    fn from(rgb: Rgb) -> Self {
        let [r, g, b] = rgb.to_unit();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let s = if max == 0.0 { 0.0 } else { delta / max };

        Hsv {
            h: hue_of(r, g, b, max, delta),
            s: s * 100.0,
            v: max * 100.0,
        }
    }
}

impl From<Hsv> for Rgb {
    fn from(hsv: Hsv) -> Self {
        let h = wrap_hue(hsv.h) / 60.0;
        let s = percent(hsv.s) / 100.0;
        let v = percent(hsv.v) / 100.0;

        let c = v * s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = v - c;

        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        Rgb::from_unit(r + m, g + m, b + m)
    }
}
