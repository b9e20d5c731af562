//! WCAG contrast engine
//!
//! Relative luminance uses the WCAG 2.1 channel decode (0.03928 knee) and
//! the Rec. 709 weights. Everything here is a pure function of its inputs.

mod suggest;
mod wcag;

pub use suggest::suggest_contrasting_colour;
pub use wcag::{
    contrast_ratio, contrast_ratio_from_hex, contrast_ratio_rgb, contrast_result,
    format_contrast_ratio, optimal_text_colour, relative_luminance, wcag_level, ContrastResult,
    WcagLevel, AAA_LARGE, AAA_NORMAL, AA_LARGE, AA_NORMAL, OPTIMAL_TEXT_THRESHOLD,
};
