//! Palette generators: harmonies, tonal scales, variations and random
//! colours. All operate on hex strings and return canonical `#rrggbb`.

mod harmony;
mod random;
mod scale;
mod variation;

pub use harmony::{generate_harmony, generate_monochromatic, HarmonyType};
pub use random::{
    generate_random_colour, generate_random_colour_with, generate_random_palette,
    generate_random_palette_with,
};
pub use scale::{
    generate_custom_scale, generate_scale, generate_scale_hsl, generate_scale_oklch, ScaleMethod,
    ScaleStep, SCALE_STEPS,
};
pub use variation::{generate_shades, generate_tints, generate_tones, mix_colours};
