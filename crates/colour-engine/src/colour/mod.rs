//! Colour types and conversion utilities
//!
//! [`Rgb`] is the hub: every other representation converts to and from it
//! through `From` impls. The lenient `hex_to_*` / `*_to_hex` functions wrap
//! those impls for callers that work with hex strings directly.
//!
//! # Example
//!
//! ```
//! use colour_engine::{Hsl, Oklch, Rgb};
//!
//! let rgb: Rgb = "#3b82f6".parse().unwrap();
//! let hsl = Hsl::from(rgb);
//! let lch = Oklch::from(rgb);
//!
//! assert_eq!(Rgb::from(hsl), rgb);
//! assert!(lch.c > 0.1);
//! ```

mod convert;
mod hex;
mod hsl;
mod lab;
mod linear_rgb;
pub(crate) mod lut;
mod oklab;
mod rgb;

pub use convert::{
    cmyk_to_hex, cmyk_to_rgb, hex_to_cmyk, hex_to_hsl, hex_to_hsv, hex_to_lab, hex_to_oklch,
    hex_to_rgb, hsl_to_hex, hsl_to_rgb, hsv_to_hex, lab_to_hex, lab_to_rgb, oklch_to_hex,
    oklch_to_rgb, rgb_to_hex, rgb_to_hsl,
};
pub use hex::{
    format_cmyk, format_hsl, format_hsv, format_lab, format_oklch, format_rgb, is_valid_hex,
    normalise_hex, parse_colour,
};
pub use hsl::{wrap_hue, Hsl, Hsv};
pub use lab::{Cmyk, Lab};
pub use linear_rgb::LinearRgb;
pub use oklab::{Oklab, Oklch, MAX_CHROMA};
pub use rgb::Rgb;
