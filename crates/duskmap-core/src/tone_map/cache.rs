//! Two-level memoization cache for modified colors

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use super::ToneMap;

/// Snapshot of cache usage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Formatted colors keyed by tone curve, then by color/filter key
///
/// Entries never expire; the key space is bounded by the colors on a page
/// times the filter states in use. Call [`ModificationCache::clear`] when the
/// working set changes wholesale. Lookups take `&self` so readers can share
/// the cache; only [`ModificationCache::store`] and `clear` need `&mut`.
#[derive(Debug, Default)]
pub struct ModificationCache {
    entries: HashMap<ToneMap, HashMap<String, String>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ModificationCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn get(&self, tone_map: ToneMap, key: &str) -> Option<String> {
        self.entries
            .get(&tone_map)
            .and_then(|per_curve| per_curve.get(key))
            .cloned()
    }

    /// Look up a formatted color, counting the hit or miss
    pub fn lookup(&self, tone_map: ToneMap, key: &str) -> Option<String> {
        let found = self.get(tone_map, key);
        if found.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
        found
    }

    /// Look up a formatted color, counting only a hit
    ///
    /// For a first read-locked check; the miss is counted by the retry through [`ModificationCache::lookup`].
    pub fn lookup_hit(&self, tone_map: ToneMap, key: &str) -> Option<String> {
        let found = self.get(tone_map, key);
        if found.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        }
        found
    }

    /// Only the modification pipeline writes entries
    pub(crate) fn store(&mut self, tone_map: ToneMap, key: String, value: String) {
        self.entries.entry(tone_map).or_default().insert(key, value);
    }

    /// Drop every entry for every curve and reset the counters
    pub fn clear(&mut self) {
        self.entries.clear();
        *self.hits.get_mut() = 0;
        *self.misses.get_mut() = 0;
    }

    /// Total number of cached colors across all curves
    pub fn len(&self) -> usize {
        self.entries.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of cached colors for one curve
    pub fn len_for(&self, tone_map: ToneMap) -> usize {
        self.entries.get(&tone_map).map_or(0, HashMap::len)
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.len(),
        }
    }
}
