//! Lightness-only fix suggestions.
//!
//! Both searches hold hue and saturation fixed and step HSL lightness
//! outward from the original value in increments of 5, trying the
//! preferred direction before the opposite one at each magnitude.

use serde::{Deserialize, Serialize};

use crate::colour::{hex_to_hsl, hex_to_rgb, hsl_to_hex, Hsl};
use crate::contrast::{contrast_ratio_rgb, relative_luminance, AA_NORMAL};

use super::cache::SimulationCache;
use super::simulator::{default_simulator, Simulator};
use super::types::CvdType;

const LIGHTNESS_STEP: f64 = 5.0;
const CONTRAST_ATTEMPTS: u32 = 20;
const DISTINGUISH_ATTEMPTS: u32 = 18;

/// Default minimum simulated distance when suggesting distinguishability fixes.
pub const DEFAULT_FIX_THRESHOLD: f64 = 25.0;
/// Default target ratio for contrast fixes.
pub const DEFAULT_TARGET_RATIO: f64 = AA_NORMAL;

/// A suggested replacement colour and the HSL lightness it was set to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LightnessFix {
    pub hex: String,
    pub adjusted_lightness: f64,
}

impl LightnessFix {
    fn at(hsl: Hsl, lightness: f64) -> Self {
        Self {
            hex: hsl_to_hex(hsl.with_lightness(lightness)),
            adjusted_lightness: lightness,
        }
    }
}

/// Candidate lightness values, nearest first, preferred direction first.
fn lightness_candidates(original: f64, prefer_up: bool, attempts: u32) -> impl Iterator<Item = f64> {
    let first = if prefer_up { 1.0 } else { -1.0 };
    (1..=attempts)
        .flat_map(move |i| {
            let offset = LIGHTNESS_STEP * i as f64;
            [original + first * offset, original - first * offset]
        })
        .filter(|l| (0.0..=100.0).contains(l))
}

impl<C: SimulationCache> Simulator<C> {
    /// Adjust the lightness of `text` until it reaches `target_ratio`
    /// against `background` as seen with `cvd`.
    ///
    /// Always returns a suggestion. Text that already passes comes back at
    /// its original lightness. When no candidate passes the result falls
    /// back to lightness 95 (text lighter than the background) or 10, which
    /// is best effort and may still fail.
    pub fn suggest_contrast_fix(
        &self,
        text: &str,
        background: &str,
        cvd: CvdType,
        target_ratio: f64,
    ) -> LightnessFix {
        let hsl = hex_to_hsl(text);
        let sim_bg = self.simulate_rgb(background, cvd);
        let passes = |hex: &str| contrast_ratio_rgb(self.simulate_rgb(hex, cvd), sim_bg) >= target_ratio;

        if passes(text) {
            return LightnessFix::at(hsl, hsl.l);
        }

        let lighter = relative_luminance(hex_to_rgb(text)) > relative_luminance(hex_to_rgb(background));

        for l in lightness_candidates(hsl.l, lighter, CONTRAST_ATTEMPTS) {
            let candidate = LightnessFix::at(hsl, l);
            if passes(&candidate.hex) {
                return candidate;
            }
        }

        let fallback = if lighter { 95.0 } else { 10.0 };
        tracing::debug!(
            text,
            background,
            cvd = %cvd,
            fallback,
            "No lightness reaches target contrast, using fallback"
        );
        LightnessFix::at(hsl, fallback)
    }

    /// Adjust the lightness of `colour` until it is at least `threshold`
    /// away from `other` as seen with `cvd`.
    ///
    /// Returns `None` when no candidate within range works. A colour that is
    /// already distinguishable comes back at its original lightness.
    pub fn suggest_distinguishable_fix(
        &self,
        colour: &str,
        other: &str,
        cvd: CvdType,
        threshold: f64,
    ) -> Option<LightnessFix> {
        let hsl = hex_to_hsl(colour);

        if self.distinguishable(colour, other, cvd, threshold) {
            return Some(LightnessFix::at(hsl, hsl.l));
        }

        let lighter = relative_luminance(hex_to_rgb(colour)) > relative_luminance(hex_to_rgb(other));

        lightness_candidates(hsl.l, lighter, DISTINGUISH_ATTEMPTS)
            .map(|l| LightnessFix::at(hsl, l))
            .find(|candidate| self.distinguishable(&candidate.hex, other, cvd, threshold))
    }
}

pub fn suggest_contrast_fix(
    text: &str,
    background: &str,
    cvd: CvdType,
    target_ratio: f64,
) -> LightnessFix {
    default_simulator().suggest_contrast_fix(text, background, cvd, target_ratio)
}

pub fn suggest_distinguishable_fix(
    colour: &str,
    other: &str,
    cvd: CvdType,
    threshold: f64,
) -> Option<LightnessFix> {
    default_simulator().suggest_distinguishable_fix(colour, other, cvd, threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sim() -> Simulator {
        Simulator::with_capacity(256)
    }

    #[test]
    fn test_candidates_alternate_and_stay_in_range() {
        let up: Vec<f64> = lightness_candidates(50.0, true, 3).collect();
        assert_eq!(up, vec![55.0, 45.0, 60.0, 40.0, 65.0, 35.0]);

        let down: Vec<f64> = lightness_candidates(90.0, false, 3).collect();
        assert_eq!(down, vec![85.0, 95.0, 80.0, 100.0, 75.0]);
    }

    #[test]
    fn test_passing_text_keeps_lightness() {
        let fix = sim().suggest_contrast_fix("#000000", "#ffffff", CvdType::Protanopia, 4.5);
        assert_eq!(fix.hex, "#000000");
        assert_eq!(fix.adjusted_lightness, 0.0);
    }

    #[test]
    fn test_contrast_fix_reaches_target() {
        let sim = sim();
        let cvd = CvdType::Deuteranopia;
        let fix = sim.suggest_contrast_fix("#9acd32", "#ffffff", cvd, 4.5);

        let ratio = contrast_ratio_rgb(sim.simulate_rgb(&fix.hex, cvd), sim.simulate_rgb("#ffffff", cvd));
        assert!(ratio >= 4.5, "{} gives {ratio}", fix.hex);
        // Darker text on a white background; 45, 55 and 40 all fall short
        assert_eq!(fix.adjusted_lightness, 35.0);
        // Hue is preserved
        assert!((hex_to_hsl(&fix.hex).h - hex_to_hsl("#9acd32").h).abs() < 2.0);
    }

    #[test]
    fn test_unreachable_contrast_falls_back() {
        // No text colour reaches 21:1 against mid grey
        let fix = sim().suggest_contrast_fix("#777777", "#808080", CvdType::Achromatopsia, 21.0);
        assert_eq!(fix.adjusted_lightness, 10.0);
    }

    #[test]
    fn test_distinguishable_fix_found() {
        let sim = sim();
        let cvd = CvdType::Deuteranopia;
        let fix = sim
            .suggest_distinguishable_fix("#c86464", "#8cc839", cvd, 25.0)
            .expect("a lightness change separates the pair");
        assert!(sim.distinguishable(&fix.hex, "#8cc839", cvd, 25.0));
        assert_ne!(fix.hex, "#c86464");
    }

    #[test]
    fn test_distinguishable_fix_none_when_impossible() {
        // Nothing can be 1000 apart in 8-bit RGB
        let fix = sim().suggest_distinguishable_fix("#808080", "#7f7f7f", CvdType::Tritanopia, 1000.0);
        assert_eq!(fix, None);
    }

    #[test]
    fn test_already_distinguishable_returns_original() {
        let fix = sim()
            .suggest_distinguishable_fix("#000000", "#ffffff", CvdType::Protanopia, 25.0)
            .unwrap();
        assert_eq!(fix.hex, "#000000");
    }
}
