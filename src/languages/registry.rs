//! Language registry: lazily loads language modules and caches them.
//!
//! A registry is constructed explicitly and owned by whatever context needs
//! language lookup (a parser session, an application), then shared by
//! reference. Each code is loaded at most once into the cache; failed loads
//! are not remembered, so a later request tries again.

use crate::languages::{BuiltinLoader, LanguageLoader, LanguageModule, LoadError, RegistryMetrics};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, warn};

/// Cache of loaded language modules in front of a `LanguageLoader`.
pub struct LanguageRegistry<L = BuiltinLoader> {
    loader: L,
    cache: RwLock<HashMap<String, Arc<LanguageModule>>>,
    metrics: RegistryMetrics,
}

impl LanguageRegistry<BuiltinLoader> {
    /// Registry over the built-in language units only.
    pub fn builtin() -> Self {
        Self::new(BuiltinLoader)
    }
}

impl Default for LanguageRegistry<BuiltinLoader> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<L: LanguageLoader> LanguageRegistry<L> {
    /// Create an empty registry in front of `loader`.
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            cache: RwLock::new(HashMap::new()),
            metrics: RegistryMetrics::new(),
        }
    }

    /// Get the language module for a code, loading it on first request.
    ///
    /// # Arguments
    /// * `code` - The language code (e.g., "en", "fr"); not validated
    ///
    /// # Returns
    /// * `Some(module)` - the cached module, or the freshly loaded one
    /// * `None` - the unit does not exist or failed to load
    pub fn get_language(&self, code: &str) -> Option<Arc<LanguageModule>> {
        match self.try_get_language(code) {
            Ok(module) => Some(module),
            Err(e) if e.is_not_found() => {
                debug!("Language '{}' not found", code);
                None
            }
            Err(e) => {
                warn!("Language '{}' failed to load: {:?}", code, e);
                None
            }
        }
    }

    /// Like `get_language`, but reports why a load failed.
    ///
    /// Failures are never cached; the next call for the same code consults
    /// the loader again.
    pub fn try_get_language(&self, code: &str) -> Result<Arc<LanguageModule>, LoadError> {
        if let Some(module) = self.cached(code) {
            self.metrics.record_cache_hit();
            return Ok(module);
        }
        self.metrics.record_cache_miss();

        // Load without holding the lock; a concurrent loader for the same
        // code may finish first, in which case its module wins below.
        let module = match self.loader.load(code) {
            Ok(module) => module,
            Err(e) => {
                self.metrics.record_load_failure();
                return Err(e);
            }
        };
        self.metrics.record_load();

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        let module = cache
            .entry(code.to_string())
            .or_insert_with(|| Arc::new(module))
            .clone();
        debug!("Cached language '{}'", code);
        Ok(module)
    }

    fn cached(&self, code: &str) -> Option<Arc<LanguageModule>> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(code)
            .cloned()
    }

    /// Check whether a code is already in the cache.
    pub fn is_cached(&self, code: &str) -> bool {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(code)
    }

    /// Codes currently in the cache, sorted.
    pub fn cached_codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        codes.sort();
        codes
    }

    /// Number of cached modules.
    pub fn len(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Codes the loader can offer, sorted and de-duplicated. Nothing is
    /// loaded.
    pub fn available(&self) -> Vec<String> {
        let mut codes = self.loader.available();
        codes.sort();
        codes.dedup();
        codes
    }

    pub fn metrics(&self) -> &RegistryMetrics {
        &self.metrics
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }
}

impl<L> std::fmt::Debug for LanguageRegistry<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cached = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        f.debug_struct("LanguageRegistry")
            .field("cached", &cached)
            .field("metrics", &self.metrics)
            .finish()
    }
}
