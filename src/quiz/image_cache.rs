// SPDX-License-Identifier: MPL-2.0
//! Card image cache for smoother swiping.
//!
//! Cards may carry an article image used as their background. Fetching it on
//! first display would flash a bare card for a network round trip, so the
//! feed prefetches images for the current card and the next few cards and
//! parks the decoded handles here.
//!
//! The cache is URL-keyed and LRU-evicted with a fixed entry cap; card
//! images are phone-screen sized, so an entry count bound is enough without
//! byte accounting.

use iced::widget::image;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Default number of card images kept around.
pub const DEFAULT_CACHE_ENTRIES: usize = 24;

/// How many cards ahead of the cursor to prefetch images for.
pub const PREFETCH_AHEAD: usize = 2;

/// LRU cache of downloaded card images, keyed by URL.
pub struct ImageCache {
    cache: LruCache<String, image::Handle>,
    in_flight: Vec<String>,
}

impl ImageCache {
    /// Creates a cache bounded to `capacity` images.
    ///
    /// # Panics
    ///
    /// Panics if `DEFAULT_CACHE_ENTRIES` is zero, which would indicate a
    /// build configuration error.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(
            NonZeroUsize::new(DEFAULT_CACHE_ENTRIES).expect("DEFAULT_CACHE_ENTRIES must be non-zero"),
        );
        Self {
            cache: LruCache::new(capacity),
            in_flight: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_CACHE_ENTRIES)
    }

    /// Looks up a handle by URL, updating LRU order.
    pub fn get(&mut self, url: &str) -> Option<image::Handle> {
        self.cache.get(url).cloned()
    }

    /// Looks up a handle without touching LRU order; used from views.
    #[must_use]
    pub fn peek(&self, url: &str) -> Option<image::Handle> {
        self.cache.peek(url).cloned()
    }

    /// Stores downloaded image bytes under their URL and releases the
    /// in-flight claim taken by [`claim`](Self::claim).
    pub fn insert(&mut self, url: String, bytes: Vec<u8>) {
        self.release(&url);
        self.cache.put(url, image::Handle::from_bytes(bytes));
    }

    /// Records that a download for `url` failed, releasing its claim so a
    /// later prefetch pass may retry.
    pub fn mark_failed(&mut self, url: &str) {
        self.release(url);
    }

    /// Claims `url` for download. Returns `false` when the image is already
    /// cached or a download for it is already running, so each URL is fetched
    /// at most once at a time.
    pub fn claim(&mut self, url: &str) -> bool {
        if self.cache.contains(url) || self.in_flight.iter().any(|u| u == url) {
            return false;
        }
        self.in_flight.push(url.to_string());
        true
    }

    fn release(&mut self, url: &str) {
        self.in_flight.retain(|u| u != url);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("cached", &self.cache.len())
            .field("in_flight", &self.in_flight.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bytes() -> Vec<u8> {
        vec![0u8; 16]
    }

    #[test]
    fn new_cache_is_empty() {
        let cache = ImageCache::with_defaults();
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn insert_and_get() {
        let mut cache = ImageCache::with_defaults();
        cache.insert("https://example.com/a.jpg".to_string(), bytes());
        assert!(cache.get("https://example.com/a.jpg").is_some());
        assert!(cache.get("https://example.com/b.jpg").is_none());
    }

    #[test]
    fn claim_is_exclusive_until_resolved() {
        let mut cache = ImageCache::with_defaults();
        assert!(cache.claim("https://example.com/a.jpg"));
        // Second claim while the download runs: denied.
        assert!(!cache.claim("https://example.com/a.jpg"));

        cache.insert("https://example.com/a.jpg".to_string(), bytes());
        // Cached now, so still no re-download.
        assert!(!cache.claim("https://example.com/a.jpg"));
    }

    #[test]
    fn failed_download_can_be_retried() {
        let mut cache = ImageCache::with_defaults();
        assert!(cache.claim("https://example.com/a.jpg"));
        cache.mark_failed("https://example.com/a.jpg");
        assert!(cache.claim("https://example.com/a.jpg"));
    }

    #[test]
    fn lru_evicts_oldest_entry() {
        let mut cache = ImageCache::new(2);
        cache.insert("a".to_string(), bytes());
        cache.insert("b".to_string(), bytes());
        // Touch "a" so "b" becomes the eviction candidate.
        let _ = cache.get("a");
        cache.insert("c".to_string(), bytes());

        assert!(cache.get("a").is_some());
        assert!(cache.get("b").is_none());
        assert!(cache.get("c").is_some());
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn zero_capacity_falls_back_to_default() {
        let cache = ImageCache::new(0);
        assert!(cache.is_empty());
    }
}
