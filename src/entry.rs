//! Cache Entry Type
//!
//! Every node of the LRU ordering list owns exactly one `CacheEntry<K, V>`.
//! The hash index of the cache only stores node ids, so the entry is the
//! single owner of both the key and the value.
//!
//! # Usage Examples
//!
//! ```
//! use lru_heap::entry::CacheEntry;
//!
//! let entry = CacheEntry::new("AAPL", 114.63);
//! assert_eq!(entry.key, "AAPL");
//! assert_eq!(entry.into_pair(), ("AAPL", 114.63));
//! ```

use core::fmt;

/// A key-value pair held by the cache.
///
/// # Examples
///
/// ```
/// use lru_heap::entry::CacheEntry;
///
/// let mut entry = CacheEntry::new("user:123", 1);
/// entry.value += 1;
/// assert_eq!(entry.value, 2);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct CacheEntry<K, V> {
    /// The cached key
    pub key: K,

    /// The cached value
    pub value: V,
}

impl<K, V> CacheEntry<K, V> {
    /// Creates a new cache entry.
    #[inline]
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Splits the entry into its key and value.
    #[inline]
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for CacheEntry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheEntry")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for CacheEntry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Key: {} Value: {}", self.key, self.value)
    }
}
