//! Hex validation and normalisation, loose parsing, and display formatting.

use std::sync::OnceLock;

use regex::Regex;

use super::hsl::{Hsl, Hsv};
use super::lab::{Cmyk, Lab};
use super::oklab::Oklch;
use super::rgb::Rgb;

/// Returns true if `hex` is a 3- or 6-digit hex colour, with or without a
/// leading `#`. Case-insensitive; surrounding whitespace is not accepted.
///
/// # Example
/// ```
/// use colour_engine::is_valid_hex;
/// assert!(is_valid_hex("#3B82F6"));
/// assert!(is_valid_hex("fff"));
/// assert!(!is_valid_hex("#ffff"));
/// ```
pub fn is_valid_hex(hex: &str) -> bool {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    matches!(digits.len(), 3 | 6) && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Canonicalise a hex string: strip an optional `#`, lower-case, expand the
/// 3-digit form, and re-add the `#`.
///
/// This is a pure string transform and does not validate; pass it strings
/// already known to be valid (see [`is_valid_hex`]). It is idempotent.
///
/// # Example
/// ```
/// use colour_engine::normalise_hex;
/// assert_eq!(normalise_hex("#ABC"), "#aabbcc");
/// assert_eq!(normalise_hex("FF8800"), "#ff8800");
/// ```
pub fn normalise_hex(hex: &str) -> String {
    let digits = hex.trim().trim_start_matches('#').to_ascii_lowercase();
    if digits.chars().count() == 3 {
        let mut expanded = String::with_capacity(7);
        expanded.push('#');
        for c in digits.chars() {
            expanded.push(c);
            expanded.push(c);
        }
        expanded
    } else {
        format!("#{digits}")
    }
}

fn rgb_function() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)^rgba?\(\s*(-?\d+(?:\.\d+)?)\s*[,\s]\s*(-?\d+(?:\.\d+)?)\s*[,\s]\s*(-?\d+(?:\.\d+)?)\s*(?:[,/]\s*[\d.]+%?\s*)?\)$",
        )
        .expect("rgb() pattern is valid")
    })
}

fn hsl_function() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?i)^hsla?\(\s*(-?\d+(?:\.\d+)?)(?:deg)?\s*[,\s]\s*(-?\d+(?:\.\d+)?)%?\s*[,\s]\s*(-?\d+(?:\.\d+)?)%?\s*(?:[,/]\s*[\d.]+%?\s*)?\)$",
        )
        .expect("hsl() pattern is valid")
    })
}

/// Parse a loosely formatted colour into canonical `#rrggbb`.
///
/// Accepts hex (`#rgb`, `#rrggbb`, with or without `#`), `rgb(r, g, b)`,
/// `rgba(r, g, b, a)`, `hsl(h, s%, l%)` and `hsla(...)`. Commas or spaces
/// separate components; alpha is accepted and ignored. Out-of-range
/// components are clamped. Returns `None` when nothing matches.
///
/// # Example
/// ```
/// use colour_engine::parse_colour;
/// assert_eq!(parse_colour("rgb(255, 128, 0)").as_deref(), Some("#ff8000"));
/// assert_eq!(parse_colour("hsl(120, 100%, 50%)").as_deref(), Some("#00ff00"));
/// assert_eq!(parse_colour("nope"), None);
/// ```
pub fn parse_colour(input: &str) -> Option<String> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }
    if is_valid_hex(s) {
        return Some(normalise_hex(s));
    }

    if let Some(caps) = rgb_function().captures(s) {
        let component = |i: usize| caps[i].parse::<f64>().ok();
        let (r, g, b) = (component(1)?, component(2)?, component(3)?);
        return Some(Rgb::from_f64(r, g, b).to_hex());
    }

    if let Some(caps) = hsl_function().captures(s) {
        let component = |i: usize| caps[i].parse::<f64>().ok();
        let (h, sat, l) = (component(1)?, component(2)?, component(3)?);
        return Some(Rgb::from(Hsl::new(h, sat, l)).to_hex());
    }

    None
}

/// `rgb(r, g, b)`
pub fn format_rgb(rgb: Rgb) -> String {
    format!("rgb({}, {}, {})", rgb.r, rgb.g, rgb.b)
}

/// `hsl(h, s%, l%)` with whole-number components
pub fn format_hsl(hsl: Hsl) -> String {
    format!(
        "hsl({}, {}%, {}%)",
        whole_hue(hsl.h),
        hsl.s.round(),
        hsl.l.round()
    )
}

/// `hsv(h, s%, v%)` with whole-number components
pub fn format_hsv(hsv: Hsv) -> String {
    format!(
        "hsv({}, {}%, {}%)",
        whole_hue(hsv.h),
        hsv.s.round(),
        hsv.v.round()
    )
}

/// CSS Color 4 form: `oklch(62.8% 0.258 29.2)`
pub fn format_oklch(oklch: Oklch) -> String {
    format!(
        "oklch({:.1}% {:.3} {:.1})",
        oklch.l * 100.0,
        oklch.c,
        oklch.h
    )
}

/// CSS Color 4 form: `lab(53.24% 80.09 67.20)`
pub fn format_lab(lab: Lab) -> String {
    format!("lab({:.2}% {:.2} {:.2})", lab.l, lab.a, lab.b)
}

/// `cmyk(c%, m%, y%, k%)` with whole-number components
pub fn format_cmyk(cmyk: Cmyk) -> String {
    format!(
        "cmyk({}%, {}%, {}%, {}%)",
        cmyk.c.round(),
        cmyk.m.round(),
        cmyk.y.round(),
        cmyk.k.round()
    )
}

/// Rounded hue that never prints as 360.
fn whole_hue(h: f64) -> f64 {
    let rounded = h.round();
    if rounded >= 360.0 {
        0.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_hex() {
        for valid in ["#000", "#FFF", "abc", "#a1b2c3", "A1B2C3"] {
            assert!(is_valid_hex(valid), "{valid} should be valid");
        }
        for invalid in ["", "#", "#ff", "#ffff", "#fffffff", "#ggg", " #fff", "#12345z"] {
            assert!(!is_valid_hex(invalid), "{invalid} should be invalid");
        }
    }

    #[test]
    fn test_normalise_hex() {
        assert_eq!(normalise_hex("#FFF"), "#ffffff");
        assert_eq!(normalise_hex("abc"), "#aabbcc");
        assert_eq!(normalise_hex("#3B82F6"), "#3b82f6");
        assert_eq!(normalise_hex("3b82f6"), "#3b82f6");
    }

    #[test]
    fn test_normalise_hex_idempotent() {
        for h in ["#ABC", "abc", "#3B82F6", "ffffff", "#000"] {
            let once = normalise_hex(h);
            assert_eq!(normalise_hex(&once), once);
        }
    }

    #[test]
    fn test_parse_colour_hex_forms() {
        assert_eq!(parse_colour("#F00").as_deref(), Some("#ff0000"));
        assert_eq!(parse_colour("  00ff00 ").as_deref(), Some("#00ff00"));
    }

    #[test]
    fn test_parse_colour_rgb_forms() {
        assert_eq!(parse_colour("rgb(255,0,0)").as_deref(), Some("#ff0000"));
        assert_eq!(parse_colour("RGB( 0 , 128 , 255 )").as_deref(), Some("#0080ff"));
        assert_eq!(parse_colour("rgba(10, 20, 30, 0.5)").as_deref(), Some("#0a141e"));
        assert_eq!(parse_colour("rgb(10 20 30 / 50%)").as_deref(), Some("#0a141e"));
        // Clamped rather than rejected
        assert_eq!(parse_colour("rgb(300, -5, 0)").as_deref(), Some("#ff0000"));
    }

    #[test]
    fn test_parse_colour_hsl_forms() {
        assert_eq!(parse_colour("hsl(0, 100%, 50%)").as_deref(), Some("#ff0000"));
        assert_eq!(parse_colour("hsl(240deg 100% 50%)").as_deref(), Some("#0000ff"));
        assert_eq!(parse_colour("hsla(0, 0%, 100%, 1)").as_deref(), Some("#ffffff"));
    }

    #[test]
    fn test_parse_colour_rejects_garbage() {
        for bad in ["", "red", "rgb(1,2)", "hsl(a, b, c)", "#12", "rgb(1,2,3"] {
            assert_eq!(parse_colour(bad), None, "{bad:?} should not parse");
        }
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_rgb(Rgb::new(255, 0, 0)), "rgb(255, 0, 0)");
        assert_eq!(format_hsl(Hsl::new(359.7, 100.0, 50.0)), "hsl(0, 100%, 50%)");
        assert_eq!(format_hsv(Hsv::new(120.2, 50.4, 75.0)), "hsv(120, 50%, 75%)");
        assert_eq!(
            format_oklch(Oklch {
                l: 0.62796,
                c: 0.25768,
                h: 29.23
            }),
            "oklch(62.8% 0.258 29.2)"
        );
        assert_eq!(
            format_lab(Lab::new(53.2408, 80.0925, 67.2032)),
            "lab(53.24% 80.09 67.20)"
        );
        assert_eq!(
            format_cmyk(Cmyk::new(0.0, 100.0, 49.6, 0.0)),
            "cmyk(0%, 100%, 50%, 0%)"
        );
    }
}
