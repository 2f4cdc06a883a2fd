//! In-memory font cache keyed by case-insensitive family name.
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use super::FontBytes;

/// Downloaded font bytes keyed by lower-cased family name.
///
/// Entries live as long as the cache and are never evicted.  The cache is
/// constructed once by the caller and shared (typically behind an `Arc`) with
/// every [`FontProvider`](super::FontProvider) that should see the same
/// downloads.  Concurrent misses on the same family may both download; the
/// later insert replaces an equivalent buffer.
#[derive(Debug, Default)]
pub struct FontCache {
    entries: RwLock<HashMap<String, FontBytes>>,
}

impl FontCache {
    /// Create an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalise a family name into its cache key.
    #[must_use]
    pub fn key(family: &str) -> String {
        family.to_lowercase()
    }

    /// Return the cached bytes for `family`, if any.
    #[must_use]
    pub fn get(&self, family: &str) -> Option<FontBytes> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&Self::key(family))
            .cloned()
    }

    /// Store `bytes` for `family`, replacing any previous entry.
    pub fn insert(&self, family: &str, bytes: FontBytes) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(Self::key(family), bytes);
    }

    /// Number of cached families.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if nothing has been cached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
