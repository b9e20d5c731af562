//! CIE L*a*b* (D65) and device-free CMYK
//!
//! Lab goes through CIE XYZ with the sRGB primaries and the D65 reference
//! white. CMYK is the naive subtractive form with no ink profile; it exists
//! for display and export, not for print accuracy.

use serde::{Deserialize, Serialize};

use super::linear_rgb::LinearRgb;
use super::rgb::Rgb;

/// D65 reference white in XYZ (Y normalised to 1.0)
const WHITE_X: f64 = 0.95047;
const WHITE_Y: f64 = 1.0;
const WHITE_Z: f64 = 1.08883;

/// CIE constants (exact rational forms)
const EPSILON: f64 = 216.0 / 24389.0;
const KAPPA: f64 = 24389.0 / 27.0;

/// A colour in CIE L*a*b*.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Lab {
    /// Lightness, 0.0..=100.0
    pub l: f64,
    /// Green-red axis, unbounded (typically ±128)
    pub a: f64,
    /// Blue-yellow axis, unbounded (typically ±128)
    pub b: f64,
}

/// A colour in CMYK, each component a percentage 0.0..=100.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

impl Lab {
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }
}

impl Cmyk {
    /// Create a CMYK colour, clamping every component to 0.0..=100.0.
    pub fn new(c: f64, m: f64, y: f64, k: f64) -> Self {
        let pct = |v: f64| if v.is_nan() { 0.0 } else { v.clamp(0.0, 100.0) };
        Self {
            c: pct(c),
            m: pct(m),
            y: pct(y),
            k: pct(k),
        }
    }
}

fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

fn lab_f_inv(f: f64) -> f64 {
    let cubed = f * f * f;
    if cubed > EPSILON {
        cubed
    } else {
        (116.0 * f - 16.0) / KAPPA
    }
}

impl From<Rgb> for Lab {
    fn from(rgb: Rgb) -> Self {
        let lin = LinearRgb::from(rgb);

        let x = 0.4124564 * lin.r + 0.3575761 * lin.g + 0.1804375 * lin.b;
        let y = 0.2126729 * lin.r + 0.7151522 * lin.g + 0.0721750 * lin.b;
        let z = 0.0193339 * lin.r + 0.1191920 * lin.g + 0.9503041 * lin.b;

        let fx = lab_f(x / WHITE_X);
        let fy = lab_f(y / WHITE_Y);
        let fz = lab_f(z / WHITE_Z);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl From<Lab> for Rgb {
    /// Out-of-gamut Lab values are clamped channel-wise.
    fn from(lab: Lab) -> Self {
        let fy = (lab.l + 16.0) / 116.0;
        let fx = fy + lab.a / 500.0;
        let fz = fy - lab.b / 200.0;

        let x = lab_f_inv(fx) * WHITE_X;
        let y = if lab.l > KAPPA * EPSILON {
            fy * fy * fy
        } else {
            lab.l / KAPPA
        } * WHITE_Y;
        let z = lab_f_inv(fz) * WHITE_Z;

        Rgb::from(LinearRgb {
            r: 3.2404542 * x - 1.5371385 * y - 0.4985314 * z,
            g: -0.9692660 * x + 1.8760108 * y + 0.0415560 * z,
            b: 0.0556434 * x - 0.2040259 * y + 1.0572252 * z,
        })
    }
}

impl From<Rgb> for Cmyk {
    fn from(rgb: Rgb) -> Self {
        let [r, g, b] = rgb.to_unit();
        let k = 1.0 - r.max(g).max(b);
        if k >= 1.0 {
            return Cmyk::new(0.0, 0.0, 0.0, 100.0);
        }
        let ink = |ch: f64| (1.0 - ch - k) / (1.0 - k) * 100.0;
        Cmyk::new(ink(r), ink(g), ink(b), k * 100.0)
    }
}

impl From<Cmyk> for Rgb {
    fn from(cmyk: Cmyk) -> Self {
        let cmyk = Cmyk::new(cmyk.c, cmyk.m, cmyk.y, cmyk.k);
        let k = 1.0 - cmyk.k / 100.0;
        Rgb::from_f64(
            255.0 * (1.0 - cmyk.c / 100.0) * k,
            255.0 * (1.0 - cmyk.m / 100.0) * k,
            255.0 * (1.0 - cmyk.y / 100.0) * k,
        )
    }
}
