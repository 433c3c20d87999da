//! Registry metrics.
//!
//! Counters for cache hits, misses, and loader outcomes. Each
//! `LanguageRegistry` owns its own set, so the counts double as a probe for
//! how often the loader was actually invoked.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Lookup and load counters for one registry.
#[derive(Debug, Default)]
pub struct RegistryMetrics {
    /// Number of lookups answered from the cache
    cache_hits: AtomicUsize,

    /// Number of lookups that had to consult the loader
    cache_misses: AtomicUsize,

    /// Number of loader calls that produced a module
    loads: AtomicUsize,

    /// Number of loader calls that failed
    load_failures: AtomicUsize,
}

impl RegistryMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cache hit.
    pub fn record_cache_hit(&self) {
        self.cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a cache miss.
    pub fn record_cache_miss(&self) {
        self.cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a successful load.
    pub fn record_load(&self) {
        self.loads.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed load.
    pub fn record_load_failure(&self) {
        self.load_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn cache_hits(&self) -> usize {
        self.cache_hits.load(Ordering::Relaxed)
    }

    pub fn cache_misses(&self) -> usize {
        self.cache_misses.load(Ordering::Relaxed)
    }

    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::Relaxed)
    }

    pub fn load_failures(&self) -> usize {
        self.load_failures.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.cache_hits();
        let misses = self.cache_misses();
        let total_lookups = hits + misses;
        let cache_hit_rate = if total_lookups > 0 {
            (hits as f64 / total_lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            cache_hits: hits,
            cache_misses: misses,
            cache_hit_rate,
            loads: self.loads(),
            load_failures: self.load_failures(),
        }
    }
}

/// Snapshot of registry statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Number of cache hits
    pub cache_hits: usize,

    /// Number of cache misses
    pub cache_misses: usize,

    /// Cache hit rate as a percentage (0-100)
    pub cache_hit_rate: f64,

    /// Number of successful loads
    pub loads: usize,

    /// Number of failed loads
    pub load_failures: usize,
}
