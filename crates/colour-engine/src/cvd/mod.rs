//! Colour vision deficiency simulation and analysis
//!
//! Each [`CvdType`] maps to a fixed 3x3 matrix applied to unit-scaled sRGB
//! channels. Simulation results are memoised per [`Simulator`] in a
//! [`SimulationCache`]; the free functions in this module share one
//! process-wide simulator with an LRU cache of 500 entries.
//!
//! # Example
//!
//! ```
//! use colour_engine::{simulate_colourblindness, CvdType};
//!
//! let grey = simulate_colourblindness("#ff0000", CvdType::Achromatopsia);
//! assert_eq!(grey, "#4c4c4c");
//! ```

mod analysis;
mod cache;
mod fix;
mod simulator;
mod types;

pub use analysis::{
    are_colours_distinguishable, check_category_accessibility, check_palette_accessibility,
    CategoryAccessibility, CategoryPair, CategoryTypeAccessibility, ProblematicPair, Swatch,
    TypeAccessibility, DEFAULT_DISTINGUISH_THRESHOLD,
};
pub use cache::{LruCache, SimulationCache, DEFAULT_CAPACITY};
pub use fix::{
    suggest_contrast_fix, suggest_distinguishable_fix, LightnessFix, DEFAULT_FIX_THRESHOLD,
    DEFAULT_TARGET_RATIO,
};
pub use simulator::{
    all_simulations, clear_simulation_cache, default_simulator, simulate_colourblindness,
    simulate_colourblindness_batch, simulation_cache_size, Simulator,
};
pub use types::{Category, CvdType};
