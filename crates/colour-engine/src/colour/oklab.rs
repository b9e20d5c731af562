//! OKLab perceptual colour space and its polar form, OKLCH
//!
//! OKLab makes equal numerical steps look like equal perceived steps, which
//! is what the tonal scale generator relies on. OKLCH is the cylindrical
//! form: lightness, chroma (colourfulness) and hue in degrees.
//!
//! # References
//!
//! Björn Ottosson, "A perceptual color space for image processing"
//! <https://bottosson.github.io/posts/oklab/>

use serde::{Deserialize, Serialize};

use super::hsl::wrap_hue;
use super::linear_rgb::LinearRgb;
use super::rgb::Rgb;

/// Upper bound applied to chroma when converting OKLCH back to RGB.
///
/// No sRGB colour exceeds ~0.32; anything above 0.4 is a runaway input.
pub const MAX_CHROMA: f64 = 0.4;

/// Chroma below this is treated as achromatic and reported with hue 0.
const ACHROMATIC_CHROMA: f64 = 1e-6;

/// A colour in OKLab.
///
/// Values are not clamped. Out-of-gamut colours may have components
/// outside typical ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklab {
    /// Lightness: 0.0 (black) to 1.0 (white) for in-gamut colours
    pub l: f64,
    /// Green-red axis: typically -0.4 to 0.4
    pub a: f64,
    /// Blue-yellow axis: typically -0.4 to 0.4
    pub b: f64,
}

/// A colour in OKLCH.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Oklch {
    /// Perceptual lightness, 0.0..=1.0
    pub l: f64,
    /// Chroma, 0.0..~0.4
    pub c: f64,
    /// Hue in degrees, 0.0..360.0
    pub h: f64,
}

impl Oklab {
    #[inline]
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }
}

impl Oklch {
    /// Create a new OKLCH colour. Hue is wrapped, lightness and chroma are
    /// clamped to their valid ranges (chroma to 0.0..=[`MAX_CHROMA`]).
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self {
            l: if l.is_nan() { 0.0 } else { l.clamp(0.0, 1.0) },
            c: if c.is_nan() { 0.0 } else { c.clamp(0.0, MAX_CHROMA) },
            h: wrap_hue(h),
        }
    }

    /// Scale chroma by a factor, keeping lightness and hue.
    ///
    /// The result is capped at [`MAX_CHROMA`] and never negative.
    #[inline]
    pub fn scale_chroma(self, factor: f64) -> Self {
        Self::new(self.l, self.c * factor, self.h)
    }
}

impl From<LinearRgb> for Oklab {
    /// Uses the updated 2021-01-25 matrices from Björn Ottosson.
    fn from(rgb: LinearRgb) -> Self {
        // Step 1: Linear sRGB to LMS (M1 matrix)
        let l = 0.4122214708 * rgb.r + 0.5363325363 * rgb.g + 0.0514459929 * rgb.b;
        let m = 0.2119034982 * rgb.r + 0.6806995451 * rgb.g + 0.1073969566 * rgb.b;
        let s = 0.0883024619 * rgb.r + 0.2817188376 * rgb.g + 0.6299787005 * rgb.b;

        // Step 2: Cube root (nonlinearity)
        let l_ = l.cbrt();
        let m_ = m.cbrt();
        let s_ = s.cbrt();

        // Step 3: LMS to Lab (M2 matrix)
        Oklab {
            l: 0.2104542553 * l_ + 0.7936177850 * m_ - 0.0040720468 * s_,
            a: 1.9779984951 * l_ - 2.4285922050 * m_ + 0.4505937099 * s_,
            b: 0.0259040371 * l_ + 0.7827717662 * m_ - 0.8086757660 * s_,
        }
    }
}

impl From<Oklab> for LinearRgb {
    /// The result is not clamped; out-of-gamut input yields channels
    /// outside 0.0..=1.0.
    fn from(lab: Oklab) -> Self {
        // Step 1: Lab to LMS (inverse M2)
        let l_ = lab.l + 0.3963377774 * lab.a + 0.2158037573 * lab.b;
        let m_ = lab.l - 0.1055613458 * lab.a - 0.0638541728 * lab.b;
        let s_ = lab.l - 0.0894841775 * lab.a - 1.2914855480 * lab.b;

        // Step 2: Cube (reverse nonlinearity)
        let l = l_ * l_ * l_;
        let m = m_ * m_ * m_;
        let s = s_ * s_ * s_;

        // Step 3: LMS to linear sRGB (inverse M1)
        LinearRgb {
            r: 4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
            g: -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
            b: -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s,
        }
    }
}

impl From<Oklab> for Oklch {
    fn from(lab: Oklab) -> Self {
        let c = (lab.a * lab.a + lab.b * lab.b).sqrt();
        let h = if c < ACHROMATIC_CHROMA {
            0.0
        } else {
            wrap_hue(lab.b.atan2(lab.a).to_degrees())
        };
        Self { l: lab.l, c, h }
    }
}

impl From<Oklch> for Oklab {
    fn from(lch: Oklch) -> Self {
        let h = lch.h.to_radians();
        Self::new(lch.l, lch.c * h.cos(), lch.c * h.sin())
    }
}

impl From<Rgb> for Oklab {
    fn from(rgb: Rgb) -> Self {
        Oklab::from(LinearRgb::from(rgb))
    }
}

impl From<Rgb> for Oklch {
    fn from(rgb: Rgb) -> Self {
        Oklch::from(Oklab::from(rgb))
    }
}

impl From<Oklch> for Rgb {
    /// Chroma is capped at [`MAX_CHROMA`] and the linear result clamped,
    /// so any OKLCH input lands on a valid sRGB colour.
    fn from(lch: Oklch) -> Self {
        let capped = Oklch::new(lch.l, lch.c, lch.h);
        Rgb::from(LinearRgb::from(Oklab::from(capped)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tolerance for palette crate comparison (f64 single transform)
    const PALETTE_TOLERANCE: f64 = 1e-6;

    #[test]
    fn test_oklab_matches_palette_crate() {
        use palette::{IntoColor, LinSrgb, Oklab as PaletteOklab};

        let test_colours = [
            (1.0, 0.0, 0.0),
            (0.0, 1.0, 0.0),
            (0.0, 0.0, 1.0),
            (0.5, 0.5, 0.5),
            (1.0, 1.0, 1.0),
            (0.2, 0.7, 0.4),
        ];

        for (r, g, b) in test_colours {
            let ours = Oklab::from(LinearRgb::new(r, g, b));
            let theirs: PaletteOklab<f64> = LinSrgb::new(r, g, b).into_color();

            assert!(
                (ours.l - theirs.l).abs() < PALETTE_TOLERANCE
                    && (ours.a - theirs.a).abs() < PALETTE_TOLERANCE
                    && (ours.b - theirs.b).abs() < PALETTE_TOLERANCE,
                "mismatch for ({r}, {g}, {b}): ours={ours:?}, palette=({}, {}, {})",
                theirs.l,
                theirs.a,
                theirs.b
            );
        }
    }

    #[test]
    fn test_known_oklch_values() {
        let red = Oklch::from(Rgb::new(255, 0, 0));
        assert!((red.l - 0.628).abs() < 0.001, "red L {}", red.l);
        assert!((red.c - 0.2577).abs() < 0.001, "red C {}", red.c);
        assert!((red.h - 29.23).abs() < 0.05, "red h {}", red.h);

        let white = Oklch::from(Rgb::WHITE);
        assert!((white.l - 1.0).abs() < 1e-6);
        assert_eq!(white.h, 0.0);
    }

    #[test]
    fn test_rgb_oklch_round_trip_within_one() {
        for r in (0..=255u16).step_by(17) {
            for g in (0..=255u16).step_by(51) {
                for b in (0..=255u16).step_by(51) {
                    let rgb = Rgb::new(r as u8, g as u8, b as u8);
                    let back = Rgb::from(Oklch::from(rgb));
                    assert!(
                        rgb.r.abs_diff(back.r) <= 1
                            && rgb.g.abs_diff(back.g) <= 1
                            && rgb.b.abs_diff(back.b) <= 1,
                        "{rgb} -> {back}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_achromatic_has_zero_hue() {
        let grey = Oklch::from(Rgb::new(128, 128, 128));
        assert!(grey.c < 1e-4);
        assert_eq!(grey.h, 0.0);
        assert!(!grey.l.is_nan());
    }

    #[test]
    fn test_runaway_chroma_is_capped() {
        let wild = Oklch::new(0.6, 5.0, 140.0);
        assert_eq!(wild.c, MAX_CHROMA);
        // Still converts to a valid colour rather than garbage
        let rgb = Rgb::from(Oklch { l: 0.6, c: 5.0, h: 140.0 });
        assert_eq!(rgb, Rgb::from(wild));
    }

    #[test]
    fn test_scale_chroma() {
        let base = Oklch::new(0.5, 0.1, 200.0);
        let doubled = base.scale_chroma(2.0);
        assert!((doubled.c - 0.2).abs() < 1e-12);
        assert_eq!(doubled.l, base.l);
        assert_eq!(doubled.h, base.h);
        assert_eq!(base.scale_chroma(-1.0).c, 0.0);
        assert_eq!(base.scale_chroma(100.0).c, MAX_CHROMA);
    }
}
