//! Tints, shades, tones and HSL mixing.

use crate::colour::{hex_to_hsl, hsl_to_hex, Hsl};

/// Even steps from `from` towards `to`, starting at `from`.
fn steps_towards(from: f64, to: f64, count: usize) -> impl Iterator<Item = f64> {
    (0..count).map(move |i| from + (to - from) * i as f64 / count as f64)
}

/// `count` colours moving lightness from the base towards white.
pub fn generate_tints(hex: &str, count: usize) -> Vec<String> {
    let base = hex_to_hsl(hex);
    steps_towards(base.l, 100.0, count)
        .map(|l| hsl_to_hex(base.with_lightness(l)))
        .collect()
}

/// `count` colours moving lightness from the base towards black.
pub fn generate_shades(hex: &str, count: usize) -> Vec<String> {
    let base = hex_to_hsl(hex);
    steps_towards(base.l, 0.0, count)
        .map(|l| hsl_to_hex(base.with_lightness(l)))
        .collect()
}

/// `count` colours moving saturation from the base towards grey.
pub fn generate_tones(hex: &str, count: usize) -> Vec<String> {
    let base = hex_to_hsl(hex);
    steps_towards(base.s, 0.0, count)
        .map(|s| hsl_to_hex(Hsl::new(base.h, s, base.l)))
        .collect()
}

/// Interpolate two colours in HSL. `ratio` 0.0 gives `a`, 1.0 gives `b`.
///
/// Hue travels the shorter way around the wheel.
///
/// # Example
/// ```
/// use colour_engine::mix_colours;
/// // 350 and 10 degrees meet at 0, not 180
/// let mid = mix_colours("#ff002b", "#ff2b00", 0.5);
/// assert_eq!(mid, "#ff0000");
/// ```
pub fn mix_colours(a: &str, b: &str, ratio: f64) -> String {
    let t = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
    let from = hex_to_hsl(a);
    let to = hex_to_hsl(b);

    let direct = to.h - from.h;
    let wrapped = if direct > 0.0 { direct - 360.0 } else { direct + 360.0 };
    let dh = if direct.abs() <= wrapped.abs() { direct } else { wrapped };

    hsl_to_hex(Hsl::new(
        from.h + dh * t,
        from.s + (to.s - from.s) * t,
        from.l + (to.l - from.l) * t,
    ))
}
