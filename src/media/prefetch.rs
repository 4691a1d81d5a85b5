// SPDX-License-Identifier: MPL-2.0
//! Decoded image cache shared by the thumbnail strips and the lightbox.
//!
//! # Design
//!
//! - **LRU eviction**: least recently used images are evicted first
//! - **Bounded**: limited both by image count and by decoded bytes
//! - **Reference-keyed**: images are indexed by their path under the assets root
//!
//! Every completed load is inserted here, so a rotation back to a previous
//! window or a lightbox step onto a prefetched image settles without
//! touching the disk again.

use crate::gallery::ImageRef;
use crate::media::ImageData;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Default decoded byte budget (256 MB).
pub const DEFAULT_CACHE_BYTES: usize = 256 * 1024 * 1024;

/// Fallback capacity when a zero count is configured.
const FALLBACK_MAX_IMAGES: NonZeroUsize = match NonZeroUsize::new(8) {
    Some(capacity) => capacity,
    None => unreachable!(),
};

/// Configuration for the image cache.
#[derive(Debug, Clone, Copy)]
pub struct CacheConfig {
    /// Maximum decoded bytes.
    pub max_bytes: usize,

    /// Maximum number of images.
    pub max_images: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_bytes: DEFAULT_CACHE_BYTES,
            max_images: crate::app::config::DEFAULT_MAX_CACHED_IMAGES,
        }
    }
}

/// Statistics about cache performance.
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub insertions: u64,
}

impl CacheStats {
    /// Returns the hit rate as a percentage (0.0 - 100.0).
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

/// LRU cache of decoded gallery images.
pub struct ImageCache {
    cache: LruCache<ImageRef, ImageData>,
    config: CacheConfig,
    current_bytes: usize,
    stats: CacheStats,
}

impl ImageCache {
    #[must_use]
    pub fn new(config: CacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_images).unwrap_or(FALLBACK_MAX_IMAGES);
        Self {
            cache: LruCache::new(capacity),
            config,
            current_bytes: 0,
            stats: CacheStats::default(),
        }
    }

    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(CacheConfig::default())
    }

    /// Inserts a decoded image.
    ///
    /// Returns `false` if the image alone exceeds half the byte budget.
    pub fn insert(&mut self, image: ImageRef, data: ImageData) -> bool {
        let size = data.size_bytes();
        if size > self.config.max_bytes / 2 {
            return false;
        }

        if let Some(existing) = self.cache.pop(&image) {
            self.current_bytes = self.current_bytes.saturating_sub(existing.size_bytes());
        }

        while self.current_bytes + size > self.config.max_bytes {
            let Some((_, evicted)) = self.cache.pop_lru() else {
                break;
            };
            self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes());
            self.stats.evictions += 1;
        }

        if let Some((_, evicted)) = self.cache.push(image, data) {
            // push returns the displaced LRU entry when the count limit is hit
            self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes());
            self.stats.evictions += 1;
        }
        self.current_bytes += size;
        self.stats.insertions += 1;
        true
    }

    /// Looks up an image, refreshing its LRU position.
    pub fn get(&mut self, image: &ImageRef) -> Option<ImageData> {
        if let Some(data) = self.cache.get(image) {
            self.stats.hits += 1;
            Some(data.clone())
        } else {
            self.stats.misses += 1;
            None
        }
    }

    /// Checks for an image without touching LRU order or statistics.
    #[must_use]
    pub fn contains(&self, image: &ImageRef) -> bool {
        self.cache.contains(image)
    }

    /// Filters `images` down to those not cached yet.
    #[must_use]
    pub fn missing<'a>(&self, images: impl IntoIterator<Item = &'a ImageRef>) -> Vec<ImageRef> {
        images
            .into_iter()
            .filter(|image| !self.cache.contains(*image))
            .cloned()
            .collect()
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

    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.current_bytes
    }
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("image_count", &self.cache.len())
            .field("memory_usage", &self.current_bytes)
            .field("max_bytes", &self.config.max_bytes)
            .field("max_images", &self.config.max_images)
            .field("stats", &self.stats)
            .finish()
    }
}
