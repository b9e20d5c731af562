//! Pairwise distinguishability under simulation.
//!
//! Distances are Euclidean in simulated 8-bit RGB, not a perceptual space.
//! Palette and category checks only run the [`CvdType::COMMON`] types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::colour::{normalise_hex, Rgb};

use super::cache::SimulationCache;
use super::simulator::{default_simulator, Simulator};
use super::types::{Category, CvdType};

/// Default distance below which two simulated colours are confusable.
pub const DEFAULT_DISTINGUISH_THRESHOLD: f64 = 20.0;

/// A pair of colours that are too close under some simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ProblematicPair {
    pub first: String,
    pub second: String,
    /// Distance between the simulated colours
    pub distance: f64,
}

/// Outcome of a palette check for one deficiency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct TypeAccessibility {
    /// True when no pair is problematic
    pub accessible: bool,
    pub problematic_pairs: Vec<ProblematicPair>,
}

/// A colour in a named category. `id` identifies it to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Swatch {
    pub id: String,
    pub hex: String,
}

impl Swatch {
    pub fn new(id: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            hex: hex.into(),
        }
    }
}

/// A confusable pair found inside a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CategoryPair {
    pub category: Category,
    pub first: Swatch,
    pub second: Swatch,
    pub distance: f64,
}

/// Per-type result with pairs tagged by category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CategoryTypeAccessibility {
    pub accessible: bool,
    pub problematic_pairs: Vec<CategoryPair>,
}

/// Category check results in two views over the same pairs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CategoryAccessibility {
    /// Flattened across categories
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub by_type: BTreeMap<CvdType, CategoryTypeAccessibility>,
    /// Each category's own breakdown
    #[cfg_attr(feature = "openapi", schema(value_type = Object))]
    pub by_category: BTreeMap<Category, BTreeMap<CvdType, CategoryTypeAccessibility>>,
}

impl<C: SimulationCache> Simulator<C> {
    /// Distance between two colours after simulating both.
    pub fn simulated_distance(&self, a: &str, b: &str, cvd: CvdType) -> f64 {
        self.simulate_rgb(a, cvd).distance(self.simulate_rgb(b, cvd))
    }

    /// True when the simulated colours are at least `threshold` apart.
    pub fn distinguishable(&self, a: &str, b: &str, cvd: CvdType, threshold: f64) -> bool {
        self.simulated_distance(a, b, cvd) >= threshold
    }

    /// Confusable pairs among `colours` (every unordered pair, list order).
    /// Pairs of the same colour are not compared.
    ///
    /// Each colour is simulated once, so the pair loop only measures
    /// distances.
    fn confusable_pairs<'a, T>(
        &self,
        colours: &'a [T],
        hex_of: impl Fn(&T) -> &str,
        cvd: CvdType,
        threshold: f64,
    ) -> Vec<(&'a T, &'a T, f64)> {
        let prepared: Vec<(String, Rgb)> = colours
            .iter()
            .map(|c| (normalise_hex(hex_of(c)), self.simulate_rgb(hex_of(c), cvd)))
            .collect();

        let mut pairs = Vec::new();
        for (i, (hex_a, sim_a)) in prepared.iter().enumerate() {
            for (j, (hex_b, sim_b)) in prepared.iter().enumerate().skip(i + 1) {
                if hex_a == hex_b {
                    continue;
                }
                let distance = sim_a.distance(*sim_b);
                if distance < threshold {
                    pairs.push((&colours[i], &colours[j], distance));
                }
            }
        }
        pairs
    }

    /// Check every pair in a palette under the common deficiencies.
    pub fn palette_accessibility<S: AsRef<str>>(
        &self,
        colours: &[S],
        threshold: f64,
    ) -> BTreeMap<CvdType, TypeAccessibility> {
        CvdType::COMMON
            .into_iter()
            .map(|cvd| {
                let problematic_pairs: Vec<ProblematicPair> = self
                    .confusable_pairs(colours, |s| s.as_ref(), cvd, threshold)
                    .into_iter()
                    .map(|(a, b, distance)| ProblematicPair {
                        first: a.as_ref().to_string(),
                        second: b.as_ref().to_string(),
                        distance,
                    })
                    .collect();
                let report = TypeAccessibility {
                    accessible: problematic_pairs.is_empty(),
                    problematic_pairs,
                };
                (cvd, report)
            })
            .collect()
    }

    /// Check pairs within each category; colours are never compared across
    /// categories.
    pub fn category_accessibility(
        &self,
        categories: &BTreeMap<Category, Vec<Swatch>>,
        threshold: f64,
    ) -> CategoryAccessibility {
        let mut result = CategoryAccessibility::default();

        for cvd in CvdType::COMMON {
            result.by_type.insert(
                cvd,
                CategoryTypeAccessibility {
                    accessible: true,
                    problematic_pairs: Vec::new(),
                },
            );
        }

        for (category, swatches) in categories {
            let mut per_type = BTreeMap::new();
            for cvd in CvdType::COMMON {
                let pairs: Vec<CategoryPair> = self
                    .confusable_pairs(swatches, |s| s.hex.as_str(), cvd, threshold)
                    .into_iter()
                    .map(|(a, b, distance)| CategoryPair {
                        category: category.clone(),
                        first: a.clone(),
                        second: b.clone(),
                        distance,
                    })
                    .collect();

                if let Some(flat) = result.by_type.get_mut(&cvd) {
                    flat.problematic_pairs.extend(pairs.iter().cloned());
                    flat.accessible = flat.problematic_pairs.is_empty();
                }
                per_type.insert(
                    cvd,
                    CategoryTypeAccessibility {
                        accessible: pairs.is_empty(),
                        problematic_pairs: pairs,
                    },
                );
            }
            result.by_category.insert(category.clone(), per_type);
        }

        result
    }
}

/// [`Simulator::distinguishable`] on the shared simulator.
///
/// # Example
/// ```
/// use colour_engine::{are_colours_distinguishable, CvdType};
/// assert!(are_colours_distinguishable("#000000", "#ffffff", CvdType::Deuteranopia, 20.0));
/// ```
pub fn are_colours_distinguishable(a: &str, b: &str, cvd: CvdType, threshold: f64) -> bool {
    default_simulator().distinguishable(a, b, cvd, threshold)
}

pub fn check_palette_accessibility<S: AsRef<str>>(
    colours: &[S],
    threshold: f64,
) -> BTreeMap<CvdType, TypeAccessibility> {
    default_simulator().palette_accessibility(colours, threshold)
}

pub fn check_category_accessibility(
    categories: &BTreeMap<Category, Vec<Swatch>>,
    threshold: f64,
) -> CategoryAccessibility {
    default_simulator().category_accessibility(categories, threshold)
}
