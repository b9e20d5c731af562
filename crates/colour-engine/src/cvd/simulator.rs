//! Cached CVD simulation.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use crate::colour::{hex_to_rgb, Rgb};

use super::cache::{LruCache, SimulationCache};
use super::types::CvdType;

/// Simulates colour vision deficiencies, memoising results in `C`.
///
/// The cache sits behind a mutex so lookup, promotion and insertion happen
/// in one critical section. A `Simulator` can be shared between threads by
/// reference or `Arc`.
///
/// # Example
/// ```
/// use colour_engine::{CvdType, LruCache, Simulator};
///
/// let sim = Simulator::new(LruCache::new(16));
/// assert_eq!(sim.simulate("#FF0000", CvdType::Achromatopsia), "#4c4c4c");
/// assert_eq!(sim.cache_size(), 1);
/// ```
pub struct Simulator<C = LruCache> {
    cache: Mutex<C>,
}

impl Simulator<LruCache> {
    /// Simulator backed by an LRU cache of the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::new(LruCache::new(capacity))
    }
}

impl Default for Simulator<LruCache> {
    fn default() -> Self {
        Self::new(LruCache::default())
    }
}

impl<C: SimulationCache> Simulator<C> {
    pub fn new(cache: C) -> Self {
        Self {
            cache: Mutex::new(cache),
        }
    }

    fn lock(&self) -> MutexGuard<'_, C> {
        // Entries are pure values, so a poisoned cache is still consistent
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Simulate `hex` under `cvd`, returning `#rrggbb`.
    ///
    /// Malformed hex is simulated as black.
    pub fn simulate(&self, hex: &str, cvd: CvdType) -> String {
        let key = format!("{}:{}", hex.to_ascii_lowercase(), cvd);

        let mut cache = self.lock();
        if let Some(hit) = cache.get(&key) {
            return hit;
        }
        let simulated = cvd.apply(hex_to_rgb(hex)).to_hex();
        cache.set(key, simulated.clone());
        simulated
    }

    /// [`simulate`](Self::simulate) returning the parsed colour.
    pub fn simulate_rgb(&self, hex: &str, cvd: CvdType) -> Rgb {
        hex_to_rgb(&self.simulate(hex, cvd))
    }

    pub fn simulate_batch<S: AsRef<str>>(&self, hexes: &[S], cvd: CvdType) -> Vec<String> {
        hexes
            .iter()
            .map(|hex| self.simulate(hex.as_ref(), cvd))
            .collect()
    }

    /// Simulations of one colour under every deficiency.
    pub fn all_simulations(&self, hex: &str) -> BTreeMap<CvdType, String> {
        CvdType::ALL
            .into_iter()
            .map(|cvd| (cvd, self.simulate(hex, cvd)))
            .collect()
    }

    pub fn clear_cache(&self) {
        self.lock().clear();
    }

    pub fn cache_size(&self) -> usize {
        self.lock().len()
    }

    pub fn cache_capacity(&self) -> usize {
        self.lock().capacity()
    }
}

/// Process-wide simulator backing the free functions
static DEFAULT_SIMULATOR: OnceLock<Simulator> = OnceLock::new();

/// The shared default simulator (LRU, capacity 500).
pub fn default_simulator() -> &'static Simulator {
    DEFAULT_SIMULATOR.get_or_init(Simulator::default)
}

/// Simulate `hex` under `cvd` using the shared cache.
pub fn simulate_colourblindness(hex: &str, cvd: CvdType) -> String {
    default_simulator().simulate(hex, cvd)
}

pub fn simulate_colourblindness_batch<S: AsRef<str>>(hexes: &[S], cvd: CvdType) -> Vec<String> {
    default_simulator().simulate_batch(hexes, cvd)
}

pub fn all_simulations(hex: &str) -> BTreeMap<CvdType, String> {
    default_simulator().all_simulations(hex)
}

pub fn clear_simulation_cache() {
    default_simulator().clear_cache();
}

pub fn simulation_cache_size() -> usize {
    default_simulator().cache_size()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cached_and_uncached_agree() {
        let sim = Simulator::with_capacity(8);
        for cvd in CvdType::ALL {
            let first = sim.simulate("#3B82F6", cvd);
            let second = sim.simulate("#3b82f6", cvd);
            assert_eq!(first, second);
            assert_eq!(first, cvd.apply(Rgb::new(0x3b, 0x82, 0xf6)).to_hex());
        }
    }

    #[test]
    fn test_cache_key_is_case_insensitive() {
        let sim = Simulator::with_capacity(8);
        sim.simulate("#ABCDEF", CvdType::Protanopia);
        sim.simulate("#abcdef", CvdType::Protanopia);
        assert_eq!(sim.cache_size(), 1);
        sim.simulate("#abcdef", CvdType::Tritanopia);
        assert_eq!(sim.cache_size(), 2);
    }

    #[test]
    fn test_cache_size_bounded() {
        let sim = Simulator::with_capacity(5);
        for v in 0..=50u8 {
            sim.simulate(&Rgb::new(v, v, 0).to_hex(), CvdType::Deuteranopia);
            assert!(sim.cache_size() <= 5);
        }
        assert_eq!(sim.cache_capacity(), 5);
        sim.clear_cache();
        assert_eq!(sim.cache_size(), 0);
    }

    #[test]
    fn test_malformed_input_simulates_black() {
        let sim = Simulator::with_capacity(4);
        assert_eq!(sim.simulate("garbage", CvdType::Protanopia), "#000000");
    }

    #[test]
    fn test_batch_and_all_simulations() {
        let sim = Simulator::with_capacity(64);
        let out = sim.simulate_batch(&["#ffffff", "#000000"], CvdType::Tritanopia);
        assert_eq!(out, vec!["#ffffff", "#000000"]);

        let all = sim.all_simulations("#ff0000");
        assert_eq!(all.len(), 7);
        assert_eq!(all[&CvdType::Achromatopsia], "#4c4c4c");
    }

    #[test]
    fn test_shared_across_threads() {
        let sim = std::sync::Arc::new(Simulator::with_capacity(32));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let sim = sim.clone();
                std::thread::spawn(move || {
                    for v in 0..20u8 {
                        sim.simulate(&Rgb::new(v, i, 0).to_hex(), CvdType::Protanomaly);
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert!(sim.cache_size() <= 32);
    }
}
