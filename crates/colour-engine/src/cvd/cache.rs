//! Bounded LRU cache for simulation results.
//!
//! Simulated colours are pure functions of `(hex, type)`, so entries never
//! go stale; the only policy is capacity. The least-recently-touched entry
//! is evicted first, and a read counts as a touch.

use std::collections::{BTreeMap, HashMap};

/// Default maximum number of cached simulations
pub const DEFAULT_CAPACITY: usize = 500;

/// Storage used by [`Simulator`](super::Simulator).
///
/// Methods take `&mut self` because a read may reorder entries. Callers
/// that share a cache across threads wrap it in a lock.
pub trait SimulationCache {
    fn get(&mut self, key: &str) -> Option<String>;
    fn set(&mut self, key: String, value: String);
    fn clear(&mut self);
    fn len(&self) -> usize;
    fn capacity(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

struct Entry {
    value: String,
    tick: u64,
}

/// Least-recently-used cache with O(log n) get, set and evict.
///
/// Each entry carries the tick at which it was last touched; `order` maps
/// ticks back to keys so the oldest entry is always the first in the tree.
pub struct LruCache {
    entries: HashMap<String, Entry>,
    order: BTreeMap<u64, String>,
    next_tick: u64,
    capacity: usize,
}

impl LruCache {
    /// A capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: BTreeMap::new(),
            next_tick: 0,
            capacity: capacity.max(1),
        }
    }

    fn tick(&mut self) -> u64 {
        let tick = self.next_tick;
        self.next_tick += 1;
        tick
    }

    fn evict_oldest(&mut self) {
        if let Some((_, key)) = self.order.pop_first() {
            self.entries.remove(&key);
            tracing::debug!(
                key = %key,
                cache_size = self.entries.len(),
                "Simulation cache: evicted least recently used entry"
            );
        }
    }
}

impl Default for LruCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl SimulationCache for LruCache {
    fn get(&mut self, key: &str) -> Option<String> {
        let tick = self.tick();
        let entry = self.entries.get_mut(key)?;

        // Move to the most-recently-used end
        self.order.remove(&entry.tick);
        entry.tick = tick;
        self.order.insert(tick, key.to_string());

        Some(entry.value.clone())
    }

    fn set(&mut self, key: String, value: String) {
        let tick = self.tick();

        if let Some(entry) = self.entries.get_mut(&key) {
            self.order.remove(&entry.tick);
            entry.tick = tick;
            entry.value = value;
            self.order.insert(tick, key);
            return;
        }

        while self.entries.len() >= self.capacity {
            self.evict_oldest();
        }

        self.order.insert(tick, key.clone());
        self.entries.insert(key, Entry { value, tick });
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
