//! Cache Metrics System
//!
//! Provides counters for cache activity, reported through the [`CacheMetrics`]
//! trait as a `BTreeMap<String, f64>`. BTreeMap keeps the keys in a
//! deterministic order so reports can be compared across runs.
//!
//! Counters are plain `u64`s updated on `&mut self` paths. The caches are
//! single-threaded, so no atomics are needed.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

pub mod lru;

pub use lru::LruCacheMetrics;

/// Common metrics tracked by every cache
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CoreCacheMetrics {
    /// Total number of lookups (`get`/`get_mut`) made to the cache
    pub requests: u64,

    /// Number of lookups that found their key
    pub cache_hits: u64,

    /// Number of new entries written to the cache
    pub insertions: u64,

    /// Number of writes that replaced the value of an existing key
    pub updates: u64,

    /// Number of entries evicted to stay within capacity
    pub evictions: u64,
}

impl CoreCacheMetrics {
    /// Creates a zeroed set of counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a lookup that found its key
    pub fn record_hit(&mut self) {
        self.requests += 1;
        self.cache_hits += 1;
    }

    /// Records a lookup that missed.
    ///
    /// Misses are derived as `requests - cache_hits`.
    pub fn record_miss(&mut self) {
        self.requests += 1;
    }

    /// Records a new entry
    pub fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    /// Records a value replacement for an existing key
    pub fn record_update(&mut self) {
        self.updates += 1;
    }

    /// Records an eviction
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Number of lookups that missed
    pub fn cache_misses(&self) -> u64 {
        self.requests - self.cache_hits
    }

    /// Fraction of lookups that hit, between 0.0 and 1.0
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Fraction of lookups that missed, between 0.0 and 1.0
    pub fn miss_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_misses() as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Convert core metrics to BTreeMap for reporting
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        // Basic counters
        metrics.insert("cache_hits".to_string(), self.cache_hits as f64);
        metrics.insert("cache_misses".to_string(), self.cache_misses() as f64);
        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("insertions".to_string(), self.insertions as f64);
        metrics.insert("requests".to_string(), self.requests as f64);
        metrics.insert("updates".to_string(), self.updates as f64);

        // Rates (0.0 to 1.0)
        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());

        let writes = self.insertions + self.updates;
        if writes > 0 {
            metrics.insert(
                "eviction_rate".to_string(),
                self.evictions as f64 / writes as f64,
            );
        }

        metrics
    }
}

/// Uniform metrics reporting for cache implementations
///
/// Keys of the returned map are sorted, so two caches that saw the same
/// workload produce identical reports.
pub trait CacheMetrics {
    /// Returns all metrics as key-value pairs in deterministic order
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Algorithm name for identification (e.g. "LRU")
    fn algorithm_name(&self) -> &'static str;
}
