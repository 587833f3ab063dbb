// SPDX-License-Identifier: MPL-2.0
//! Decoded-image cache for remote and file sources.
//!
//! Each source location is fetched and decoded at most once while it stays
//! cached, so several widgets showing the same URL (or a widget rebuilt with
//! the same sources) skip the network round-trip.
//!
//! # Design
//!
//! - **LRU eviction**: Least recently used images are evicted first
//! - **Memory-bounded**: Total decoded size limited by a byte budget
//! - **Location-keyed**: Images indexed by the source string as given
//! - **Shared**: Wrapped in [`SharedImageCache`] so loader tasks can use it

use super::source::LoadedImage;
use crate::config::{DEFAULT_IMAGE_CACHE_BYTES, DEFAULT_IMAGE_CACHE_ENTRIES};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

/// Cache handle shared between the widget and its loader tasks.
pub type SharedImageCache = Arc<Mutex<ImageCache>>;

/// Limits for the image cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum decoded size in bytes.
    pub max_bytes: usize,

    /// Maximum number of images.
    pub max_images: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_IMAGE_CACHE_BYTES,
            max_images: DEFAULT_IMAGE_CACHE_ENTRIES,
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    image: LoadedImage,
    size_bytes: usize,
}

/// Statistics about cache performance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub image_count: usize,
    pub total_bytes: usize,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub insertions: u64,
}

impl CacheStats {
    /// Returns the cache hit rate as a percentage (0.0 - 100.0).
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

/// LRU cache of decoded images keyed by source location.
pub struct ImageCache {
    cache: LruCache<String, CacheEntry>,
    config: CacheConfig,
    current_bytes: usize,
    stats: CacheStats,
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("config", &self.config)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl Default for ImageCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}

impl ImageCache {
    #[must_use]
    pub fn new(config: CacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_images).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
            config,
            current_bytes: 0,
            stats: CacheStats::default(),
        }
    }

    /// Creates a cache ready to be handed to several widgets.
    #[must_use]
    pub fn shared(config: CacheConfig) -> SharedImageCache {
        Arc::new(Mutex::new(Self::new(config)))
    }

    /// Inserts an image under `location`.
    ///
    /// Returns `false` if the image is larger than half the byte budget and
    /// was not cached.
    pub fn insert(&mut self, location: impl Into<String>, image: LoadedImage) -> bool {
        let size_bytes = image.byte_size();
        if size_bytes > self.config.max_bytes / 2 {
            return false;
        }

        let location = location.into();
        if let Some(existing) = self.cache.pop(&location) {
            self.current_bytes = self.current_bytes.saturating_sub(existing.size_bytes);
        }

        while self.current_bytes + size_bytes > self.config.max_bytes && !self.cache.is_empty() {
            if let Some((_, evicted)) = self.cache.pop_lru() {
                self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes);
                self.stats.evictions += 1;
            }
        }

        // The entry-count bound evicts silently inside `push`.
        if let Some((evicted_key, evicted)) =
            self.cache.push(location.clone(), CacheEntry { image, size_bytes })
        {
            if evicted_key != location {
                self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes);
                self.stats.evictions += 1;
            }
        }

        self.current_bytes += size_bytes;
        self.stats.insertions += 1;
        self.stats.image_count = self.cache.len();
        self.stats.total_bytes = self.current_bytes;
        true
    }

    /// Gets the image cached under `location`, updating LRU order.
    pub fn get(&mut self, location: &str) -> Option<LoadedImage> {
        if let Some(entry) = self.cache.get(location) {
            self.stats.hits += 1;
            Some(entry.image.clone())
        } else {
            self.stats.misses += 1;
            None
        }
    }

    #[must_use]
    pub fn contains(&self, location: &str) -> bool {
        self.cache.contains(location)
    }

    pub fn clear(&mut self) {
        self.cache.clear();
        self.current_bytes = 0;
        self.stats.image_count = 0;
        self.stats.total_bytes = 0;
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Returns the current memory usage in bytes.
    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.current_bytes
    }
}
