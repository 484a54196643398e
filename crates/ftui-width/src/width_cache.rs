#![forbid(unsafe_code)]

//! LRU cache of string widths.
//!
//! Width measurement walks every grapheme cluster, so renderers that
//! measure the same labels every frame benefit from caching. Entries are
//! keyed by a hash of the text *and* the ambiguous-width setting in effect,
//! so changing the setting never serves a stale width.
//!
//! # Example
//! ```
//! use ftui_width::{WidthCache, WidthConfig};
//!
//! let mut cache = WidthCache::with_config(1000, WidthConfig::new());
//!
//! assert_eq!(cache.get_or_compute("Hello, world!"), 13);
//! assert_eq!(cache.get_or_compute("Hello, world!"), 13);
//!
//! let stats = cache.stats();
//! assert_eq!(stats.hits, 1);
//! assert_eq!(stats.misses, 1);
//! ```

use lru::LruCache;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;

use crate::config::WidthConfig;

/// Default cache capacity.
pub const DEFAULT_CACHE_CAPACITY: usize = 4096;

/// Statistics about cache performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: u64,
    /// Number of cache misses.
    pub misses: u64,
    /// Current number of entries.
    pub size: usize,
    /// Maximum capacity.
    pub capacity: usize,
}

impl CacheStats {
    /// Calculate hit rate (0.0 to 1.0).
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache for string width measurements.
///
/// Keys are 64-bit FxHash values of `(text, ambiguous width)` rather than
/// the strings themselves. A collision would return another string's width;
/// at 64 bits that is negligible for UI label sets.
///
/// A cache built with [`WidthCache::new`] follows the process-wide
/// configuration at each call; one built with [`WidthCache::with_config`]
/// always measures with the given configuration.
///
/// `WidthCache` is not thread-safe. Wrap it in a mutex or use one per thread.
#[derive(Debug)]
pub struct WidthCache {
    cache: LruCache<u64, usize>,
    config: Option<WidthConfig>,
    hits: u64,
    misses: u64,
}

impl WidthCache {
    /// Create a cache that follows the process-wide configuration.
    ///
    /// If capacity is zero, defaults to 1.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::build(capacity, None)
    }

    /// Create a cache that always measures with `config`.
    #[must_use]
    pub fn with_config(capacity: usize, config: WidthConfig) -> Self {
        Self::build(capacity, Some(config))
    }

    /// Create a cache with the default capacity (4096 entries).
    #[must_use]
    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }

    fn build(capacity: usize, config: Option<WidthConfig>) -> Self {
        let capacity = NonZeroUsize::new(capacity.max(1)).expect("capacity must be > 0");
        Self {
            cache: LruCache::new(capacity),
            config,
            hits: 0,
            misses: 0,
        }
    }

    /// Configuration the next lookup will use.
    #[must_use]
    pub fn config(&self) -> WidthConfig {
        self.config.unwrap_or_else(WidthConfig::current)
    }

    /// Get the cached width or compute and cache it.
    #[inline]
    pub fn get_or_compute(&mut self, text: &str) -> usize {
        let config = self.config();
        self.get_or_compute_with(text, |t| config.string_width(t))
    }

    /// Get the cached width or compute it with a custom function.
    ///
    /// The result is stored under the current configuration's key.
    pub fn get_or_compute_with<F>(&mut self, text: &str, compute: F) -> usize
    where
        F: FnOnce(&str) -> usize,
    {
        let key = cache_key(text, self.config());

        if let Some(&width) = self.cache.get(&key) {
            self.hits += 1;
            return width;
        }

        self.misses += 1;
        let width = compute(text);
        self.cache.put(key, width);
        width
    }

    /// Check whether `text` is cached under the current configuration.
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.cache.contains(&cache_key(text, self.config()))
    }

    /// Get the cached width without computing. Updates LRU order.
    #[must_use]
    pub fn get(&mut self, text: &str) -> Option<usize> {
        let key = cache_key(text, self.config());
        self.cache.get(&key).copied()
    }

    /// Peek at the cached width without updating LRU order.
    #[must_use]
    pub fn peek(&self, text: &str) -> Option<usize> {
        self.cache.peek(&cache_key(text, self.config())).copied()
    }

    /// Measure and store `text` without touching hit/miss statistics.
    pub fn preload(&mut self, text: &str) {
        let config = self.config();
        let key = cache_key(text, config);
        if !self.cache.contains(&key) {
            self.cache.put(key, config.string_width(text));
        }
    }

    /// Preload several strings.
    pub fn preload_many<'a>(&mut self, texts: impl IntoIterator<Item = &'a str>) {
        for text in texts {
            self.preload(text);
        }
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        crate::trace!(entries = self.cache.len(), "width cache cleared");
        self.cache.clear();
    }

    /// Reset statistics.
    pub fn reset_stats(&mut self) {
        self.hits = 0;
        self.misses = 0;
    }

    /// Get cache statistics.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.cache.len(),
            capacity: self.cache.cap().get(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }

    /// Resize the cache, evicting least recently used entries if needed.
    pub fn resize(&mut self, new_capacity: usize) {
        let new_capacity = NonZeroUsize::new(new_capacity.max(1)).expect("capacity must be > 0");
        self.cache.resize(new_capacity);
    }
}

impl Default for WidthCache {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

#[inline]
fn cache_key(text: &str, config: WidthConfig) -> u64 {
    let mut hasher = FxHasher::default();
    text.hash(&mut hasher);
    config.ambiguous.hash(&mut hasher);
    hasher.finish()
}

#[cfg(feature = "thread_local_cache")]
thread_local! {
    static THREAD_CACHE: std::cell::RefCell<WidthCache> =
        std::cell::RefCell::new(WidthCache::with_default_capacity());
}

/// Width of `text` via this thread's cache.
#[cfg(feature = "thread_local_cache")]
pub fn cached_width(text: &str) -> usize {
    THREAD_CACHE.with(|cache| cache.borrow_mut().get_or_compute(text))
}

/// Clear this thread's cache.
#[cfg(feature = "thread_local_cache")]
pub fn clear_thread_cache() {
    THREAD_CACHE.with(|cache| cache.borrow_mut().clear());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AmbiguousWidth;

    fn cache(capacity: usize) -> WidthCache {
        WidthCache::with_config(capacity, WidthConfig::new())
    }

    #[test]
    fn new_cache_is_empty() {
        let cache = cache(100);
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.capacity(), 100);
    }

    #[test]
    fn default_capacity() {
        let cache = WidthCache::default();
        assert!(cache.is_empty());
        assert_eq!(cache.capacity(), DEFAULT_CACHE_CAPACITY);
    }

    #[test]
    fn minimum_capacity_is_one() {
        assert_eq!(cache(0).capacity(), 1);
    }

    #[test]
    fn get_or_compute_caches_value() {
        let mut cache = cache(100);

        assert_eq!(cache.get_or_compute("hello"), 5);
        assert_eq!(cache.get_or_compute("hello"), 5);
        assert_eq!(cache.len(), 1);

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }

    #[test]
    fn unicode_strings() {
        let mut cache = cache(100);
        assert_eq!(cache.get_or_compute("caf\u{e9}"), 4);
        assert_eq!(cache.get_or_compute("\u{65E5}\u{672C}\u{8A9E}"), 6);
        assert_eq!(cache.get_or_compute("\u{1F389}"), 2);
        assert_eq!(cache.get_or_compute("e\u{0301}"), 1);
        assert_eq!(cache.len(), 4);
    }

    #[test]
    fn lru_eviction() {
        let mut cache = cache(2);

        cache.get_or_compute("a");
        cache.get_or_compute("b");
        cache.get_or_compute("c");

        assert!(!cache.contains("a"));
        assert!(cache.contains("b"));
        assert!(cache.contains("c"));
    }

    #[test]
    fn lru_refresh_on_access() {
        let mut cache = cache(2);

        cache.get_or_compute("a");
        cache.get_or_compute("b");
        cache.get_or_compute("a");
        cache.get_or_compute("c");

        assert!(cache.contains("a"));
        assert!(!cache.contains("b"));
    }

    #[test]
    fn peek_does_not_update_lru() {
        let mut cache = cache(2);

        cache.get_or_compute("a");
        cache.get_or_compute("b");
        let _ = cache.peek("a");
        cache.get_or_compute("c");

        assert!(!cache.contains("a"));
    }

    #[test]
    fn get_returns_cached_value() {
        let mut cache = cache(100);
        assert!(cache.get("hello").is_none());
        cache.get_or_compute("hello");
        assert_eq!(cache.get("hello"), Some(5));
    }

    #[test]
    fn preload_does_not_count() {
        let mut cache = cache(100);
        cache.preload_many(["hello", "\u{4E2D}"]);
        assert_eq!(cache.peek("\u{4E2D}"), Some(2));

        let stats = cache.stats();
        assert_eq!(stats.hits, 0);
        assert_eq!(stats.misses, 0);
        assert_eq!(stats.size, 2);
    }

    #[test]
    fn clear_and_reset() {
        let mut cache = cache(100);
        cache.get_or_compute("hello");
        cache.get_or_compute("hello");
        cache.clear();
        cache.reset_stats();

        assert!(cache.is_empty());
        assert_eq!(cache.stats(), CacheStats {
            hits: 0,
            misses: 0,
            size: 0,
            capacity: 100,
        });
    }

    #[test]
    fn custom_compute_called_once() {
        let mut cache = cache(100);
        let mut calls = 0;
        for _ in 0..3 {
            cache.get_or_compute_with("x", |_| {
                calls += 1;
                42
            });
        }
        assert_eq!(calls, 1);
        assert_eq!(cache.peek("x"), Some(42));
    }

    #[test]
    fn configs_do_not_share_entries() {
        let narrow_key = cache_key("\u{00A1}", WidthConfig::new());
        let wide_key = cache_key(
            "\u{00A1}",
            WidthConfig::with_ambiguous(AmbiguousWidth::Wide),
        );
        assert_ne!(narrow_key, wide_key);

        let mut wide = WidthCache::with_config(10, WidthConfig::with_ambiguous(AmbiguousWidth::Wide));
        assert_eq!(wide.get_or_compute("\u{00A1}"), 2);
        assert_eq!(cache(10).get_or_compute("\u{00A1}"), 1);
    }

    #[test]
    fn resize_smaller_evicts() {
        let mut cache = cache(100);
        for i in 0..50 {
            cache.get_or_compute(&format!("text{i}"));
        }
        cache.resize(10);
        assert!(cache.len() <= 10);
        assert_eq!(cache.capacity(), 10);
        cache.resize(0);
        assert_eq!(cache.capacity(), 1);
    }

    #[test]
    fn hit_rate() {
        let stats = CacheStats {
            hits: 75,
            misses: 25,
            size: 100,
            capacity: 1000,
        };
        assert!((stats.hit_rate() - 0.75).abs() < 0.001);
        assert_eq!(CacheStats::default().hit_rate(), 0.0);
    }

    #[cfg(feature = "tracing")]
    #[tracing_test::traced_test]
    #[test]
    fn clear_is_traced() {
        let mut cache = cache(4);
        cache.get_or_compute("a");
        cache.clear();
        assert!(logs_contain("width cache cleared"));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn cached_width_matches_direct(s in "\\PC{0,40}") {
            let config = WidthConfig::new();
            let mut cache = WidthCache::with_config(100, config);
            prop_assert_eq!(cache.get_or_compute(&s), config.string_width(&s));
        }

        #[test]
        fn second_access_is_hit(s in "[a-zA-Z0-9]{1,20}") {
            let mut cache = WidthCache::with_config(100, WidthConfig::new());

            cache.get_or_compute(&s);
            let before = cache.stats();
            cache.get_or_compute(&s);
            let after = cache.stats();

            prop_assert_eq!(after.hits, before.hits + 1);
            prop_assert_eq!(after.misses, before.misses);
        }

        #[test]
        fn lru_never_exceeds_capacity(
            strings in prop::collection::vec("[a-z]{1,5}", 10..100),
            capacity in 5usize..20
        ) {
            let mut cache = WidthCache::with_config(capacity, WidthConfig::new());
            for s in &strings {
                cache.get_or_compute(s);
                prop_assert!(cache.len() <= capacity);
            }
        }
    }
}
