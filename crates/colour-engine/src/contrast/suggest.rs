//! Contrasting-colour suggestion by binary search over a black/white blend.

use crate::colour::{hex_to_rgb, Rgb};

use super::wcag::{contrast_ratio, relative_luminance, OPTIMAL_TEXT_THRESHOLD};

const SEARCH_ITERATIONS: usize = 20;

/// Suggest a variant of `foreground` that reaches `target_ratio` against
/// `background`.
///
/// The foreground is blended towards black on light backgrounds and towards
/// white on dark ones. Luminance is monotonic in the blend factor, so a
/// binary search over it finds the smallest blend that passes. If the
/// target is unreachable the highest-contrast blend seen is returned. A
/// foreground that already passes is returned unchanged.
///
/// # Example
/// ```
/// use colour_engine::{contrast_ratio_from_hex, suggest_contrasting_colour};
///
/// let fixed = suggest_contrasting_colour("#ffffff", "#aaaaaa", 4.5);
/// assert!(contrast_ratio_from_hex(&fixed, "#ffffff") >= 4.5);
/// ```
pub fn suggest_contrasting_colour(background: &str, foreground: &str, target_ratio: f64) -> String {
    let bg = hex_to_rgb(background);
    let fg = hex_to_rgb(foreground);
    let bg_lum = relative_luminance(bg);

    let ratio_of = |c: Rgb| contrast_ratio(relative_luminance(c), bg_lum);

    if ratio_of(fg) >= target_ratio {
        return fg.to_hex();
    }

    let anchor = if bg_lum > OPTIMAL_TEXT_THRESHOLD {
        Rgb::BLACK
    } else {
        Rgb::WHITE
    };

    let mut best = fg;
    let mut best_ratio = ratio_of(fg);
    let mut found: Option<Rgb> = None;
    let (mut low, mut high) = (0.0_f64, 1.0_f64);

    for _ in 0..SEARCH_ITERATIONS {
        let mid = (low + high) / 2.0;
        let candidate = fg.lerp(anchor, mid);
        let ratio = ratio_of(candidate);

        if ratio > best_ratio {
            best = candidate;
            best_ratio = ratio;
        }

        if ratio >= target_ratio {
            found = Some(candidate);
            high = mid;
        } else {
            low = mid;
        }
    }

    if found.is_none() {
        // The search never tested the endpoint itself
        let end = ratio_of(anchor);
        if end >= target_ratio || end > best_ratio {
            best = anchor;
        }
    }

    found.unwrap_or(best).to_hex()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contrast::contrast_ratio_from_hex;

    #[test]
    fn test_already_passing_is_unchanged() {
        assert_eq!(suggest_contrasting_colour("#ffffff", "#000000", 4.5), "#000000");
        assert_eq!(suggest_contrasting_colour("#000", "#FFF", 4.5), "#ffffff");
    }

    #[test]
    fn test_light_background_darkens_foreground() {
        let fixed = suggest_contrasting_colour("#ffffff", "#a0c4ff", 4.5);
        let ratio = contrast_ratio_from_hex(&fixed, "#ffffff");
        assert!(ratio >= 4.5, "{fixed} only reaches {ratio}");
        // Minimal blend: it should not overshoot to near-black
        assert!(ratio < 6.0, "{fixed} overshoots at {ratio}");
    }

    #[test]
    fn test_dark_background_lightens_foreground() {
        let fixed = suggest_contrasting_colour("#111827", "#374151", 4.5);
        let ratio = contrast_ratio_from_hex(&fixed, "#111827");
        assert!(ratio >= 4.5, "{fixed} only reaches {ratio}");
        assert!(relative_luminance(hex_to_rgb(&fixed)) > relative_luminance(hex_to_rgb("#374151")));
    }

    #[test]
    fn test_unreachable_target_returns_best_effort() {
        // Nothing reaches 25:1; the result is the extreme
        let fixed = suggest_contrasting_colour("#ffffff", "#888888", 25.0);
        assert_eq!(fixed, "#000000");
    }
}
