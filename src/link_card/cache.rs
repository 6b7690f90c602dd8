//! Per-build cache of resolved judge problems.

use parking_lot::Mutex;
use std::collections::HashMap;

use super::metadata::PageMetadata;

/// In-memory map from problem id to resolved metadata.
///
/// Lives for one build. Entries are never evicted or replaced: the first
/// value stored for an id wins, so a racing duplicate lookup is harmless.
#[derive(Debug, Default)]
pub struct ProblemCache {
    entries: Mutex<HashMap<String, PageMetadata>>,
}

impl ProblemCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the cached metadata for `id`.
    pub fn get(&self, id: &str) -> Option<PageMetadata> {
        self.entries.lock().get(id).cloned()
    }

    /// Stores metadata unless `id` is already present.
    ///
    /// Returns the value held by the cache afterwards, which is the earlier
    /// entry when one existed.
    pub fn insert(&self, id: &str, metadata: PageMetadata) -> PageMetadata {
        self.entries
            .lock()
            .entry(id.to_string())
            .or_insert(metadata)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(title: &str) -> PageMetadata {
        PageMetadata {
            title: title.to_string(),
            description: " ".to_string(),
            image_url: String::new(),
            domain: "www.acmicpc.net".to_string(),
        }
    }

    #[test]
    fn test_cache_starts_empty() {
        let cache = ProblemCache::new();

        assert!(cache.is_empty());
        assert_eq!(cache.get("1000"), None);
    }

    #[test]
    fn test_cache_first_insert_wins() {
        // Arrange
        let cache = ProblemCache::new();

        // Act
        let first = cache.insert("1000", metadata("1000번: A+B"));
        let second = cache.insert("1000", metadata("1000번: other"));

        // Assert
        assert_eq!(first.title, "1000번: A+B");
        assert_eq!(second.title, "1000번: A+B", "Later inserts must not replace");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_keys_are_independent() {
        // Arrange
        let cache = ProblemCache::new();

        // Act
        cache.insert("1000", metadata("a"));
        cache.insert("1001", metadata("b"));

        // Assert
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("1001").map(|m| m.title), Some("b".to_string()));
    }
}
