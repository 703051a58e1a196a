//! Least Recently Used (LRU) Cache Implementation
//!
//! This module provides an LRU cache with O(1) operations for lookup, insertion,
//! update and eviction. It combines a hash index (key → list node id) with a
//! recency-ordered doubly linked list whose nodes own the entries.
//!
//! # Algorithm
//!
//! The list keeps entries in order of recency of use. Every successful `get`
//! and every `put` moves the touched entry to the head. When a new key arrives
//! while the cache is full, the entry at the tail (the least recently used one)
//! is evicted from both the list and the hash index before the new entry is
//! added at the head.
//!
//! ```text
//!   map: HashMap<K, NodeId>
//!            │
//!            ▼
//!   head ─▶ [MRU] ⇄ [ .. ] ⇄ [ .. ] ⇄ [LRU] ◀─ tail   (next eviction)
//! ```
//!
//! # Performance Characteristics
//!
//! - **Time Complexity**:
//!   - Get: O(1)
//!   - Put: O(1)
//!   - Eviction: O(1)
//!
//! - **Space Complexity**:
//!   - O(n) where n is the capacity of the cache
//!   - Nodes live in a dense arena, so there is one allocation for all
//!     entries rather than one per entry
//!
//! # Thread Safety
//!
//! This implementation is not thread-safe. For concurrent access, wrap the
//! cache with a synchronization primitive such as `Mutex`.

extern crate alloc;

use crate::config::LruCacheConfig;
use crate::entry::CacheEntry;
use crate::error::Result;
use crate::list::{self, List, NodeId};
use crate::metrics::{CacheMetrics, LruCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::num::NonZeroUsize;
use tracing::{debug, trace};

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Upper bound on the number of slots reserved up front. Larger caches grow
/// their storage on demand.
const MAX_PREALLOCATED: usize = 1 << 16;

/// An implementation of a Least Recently Used (LRU) cache.
///
/// The cache has a fixed capacity and supports O(1) operations for
/// inserting, retrieving, and updating entries. When the cache reaches capacity,
/// the least recently used entry will be evicted to make room for new entries.
///
/// Cloning a cache produces an independent copy: later operations on one do
/// not affect the other.
///
/// # Examples
///
/// ```
/// use lru_heap::LruCache;
/// use core::num::NonZeroUsize;
///
/// let mut cache = LruCache::new(NonZeroUsize::new(2).unwrap());
///
/// // Add items to the cache
/// cache.put("apple", 1);
/// cache.put("banana", 2);
///
/// // Accessing items updates their recency
/// assert_eq!(cache.get(&"apple"), Some(&1));
///
/// // Adding beyond capacity evicts the least recently used item
/// cache.put("cherry", 3);
/// assert_eq!(cache.get(&"banana"), None);
/// assert_eq!(cache.get(&"apple"), Some(&1));
/// assert_eq!(cache.get(&"cherry"), Some(&3));
/// ```
#[derive(Clone)]
pub struct LruCache<K, V, S = DefaultHashBuilder> {
    config: LruCacheConfig,
    list: List<CacheEntry<K, V>>,
    map: HashMap<K, NodeId, S>,
    metrics: LruCacheMetrics,
}

impl<K, V, S> LruCache<K, V, S> {
    /// Returns the maximum number of key-value pairs the cache can hold.
    #[inline]
    pub fn cap(&self) -> NonZeroUsize {
        self.config.capacity()
    }

    /// Returns the current number of key-value pairs in the cache.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the cache contains no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the entry that would be evicted next, without promoting it.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        let node = self.list.back()?;
        self.list.get(node).map(|entry| (&entry.key, &entry.value))
    }

    /// Iterates over the entries from most to least recently used.
    ///
    /// Iteration does not change the recency order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.list.iter(),
        }
    }

    /// Returns the activity counters of this cache.
    pub fn lru_metrics(&self) -> &LruCacheMetrics {
        &self.metrics
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LruCache<K, V, S> {
    /// Creates a cache from a configuration.
    ///
    /// Uses `hash_builder` when given, otherwise `S::default()`.
    pub fn init(config: LruCacheConfig, hash_builder: Option<S>) -> Self
    where
        S: Default,
    {
        Self::with_config_and_hasher(config, hash_builder.unwrap_or_default())
    }

    /// Creates a new LRU cache with the specified capacity and hash builder.
    pub fn with_hasher(cap: NonZeroUsize, hash_builder: S) -> Self {
        Self::with_config_and_hasher(LruCacheConfig::from(cap), hash_builder)
    }

    fn with_config_and_hasher(config: LruCacheConfig, hash_builder: S) -> Self {
        let cap = config.capacity();
        debug!(capacity = cap.get(), "creating LRU cache");
        LruCache {
            config,
            list: List::new(cap),
            map: HashMap::with_capacity_and_hasher(cap.get().min(MAX_PREALLOCATED), hash_builder),
            metrics: LruCacheMetrics::new(),
        }
    }

    /// Returns a reference to the value of the key and marks the entry as the
    /// most recently used.
    ///
    /// A missing key is a normal outcome and yields `None`.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.map.get(key).copied() {
            Some(node) => {
                self.list.move_to_front(node);
                self.metrics.core.record_hit();
                self.list.get(node).map(|entry| &entry.value)
            }
            None => {
                self.metrics.core.record_miss();
                None
            }
        }
    }

    /// Returns a mutable reference to the value of the key and marks the entry
    /// as the most recently used.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        match self.map.get(key).copied() {
            Some(node) => {
                self.list.move_to_front(node);
                self.metrics.core.record_hit();
                self.list.get_mut(node).map(|entry| &mut entry.value)
            }
            None => {
                self.metrics.core.record_miss();
                None
            }
        }
    }

    /// Returns a reference to the value of the key without changing recency.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let node = *self.map.get(key)?;
        self.list.get(node).map(|entry| &entry.value)
    }

    /// Returns `true` if the key is cached. Does not change recency.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    /// Removes the least recently used entry from both the index and the list.
    fn evict(&mut self) -> Option<(K, V)> {
        let entry = self.list.remove_last()?;
        self.map.remove(&entry.key);
        self.metrics.core.record_eviction();
        trace!(
            len = self.list.len(),
            capacity = self.cap().get(),
            "evicted least recently used entry"
        );
        Some(entry.into_pair())
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LruCache<K, V, S> {
    /// Inserts a key-value pair and marks it as the most recently used.
    ///
    /// If the key is already cached its value is replaced in place and the
    /// length is unchanged. If the key is new and the cache is full, the least
    /// recently used entry is evicted first and returned.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&node) = self.map.get(&key) {
            self.list.move_to_front(node);
            if let Some(entry) = self.list.get_mut(node) {
                entry.value = value;
            }
            self.metrics.core.record_update();
            return None;
        }

        let evicted = if self.list.is_full() {
            self.evict()
        } else {
            None
        };

        if let Some(node) = self.list.add(CacheEntry::new(key.clone(), value)) {
            self.map.insert(key, node);
            self.metrics.core.record_insertion();
        }

        evicted
    }
}

impl<K: Hash + Eq, V> LruCache<K, V> {
    /// Creates a new LRU cache that holds at most `cap` entries.
    pub fn new(cap: NonZeroUsize) -> LruCache<K, V, DefaultHashBuilder> {
        LruCache::with_hasher(cap, DefaultHashBuilder::default())
    }

    /// Creates a new LRU cache from a raw capacity.
    ///
    /// Fails with [`ConfigError::ZeroCapacity`](crate::error::ConfigError::ZeroCapacity)
    /// when `capacity` is zero.
    ///
    /// ```
    /// use lru_heap::LruCache;
    ///
    /// assert!(LruCache::<&str, i32>::try_new(0).is_err());
    /// let cache = LruCache::<&str, i32>::try_new(4).unwrap();
    /// assert_eq!(cache.cap().get(), 4);
    /// ```
    pub fn try_new(capacity: usize) -> Result<LruCache<K, V, DefaultHashBuilder>> {
        let config = LruCacheConfig::new(capacity)?;
        Ok(LruCache::init(config, None))
    }
}

impl<K, V, S> CacheMetrics for LruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics.metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        self.metrics.algorithm_name()
    }
}

impl<K, V, S> fmt::Debug for LruCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.config.capacity())
            .field("len", &self.list.len())
            .finish()
    }
}

/// Lists the entries from most to least recently used, one per line.
///
/// ```
/// use lru_heap::LruCache;
///
/// let mut cache = LruCache::try_new(2).unwrap();
/// cache.put("AAPL", 114.63);
/// cache.put("GOOG", 533.75);
/// assert_eq!(
///     cache.to_string(),
///     "LRU Cache(2)\nKey: GOOG Value: 533.75\nKey: AAPL Value: 114.63\n"
/// );
/// ```
impl<K: fmt::Display, V: fmt::Display, S> fmt::Display for LruCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "LRU Cache({})", self.len())?;
        for entry in self.list.iter() {
            writeln!(f, "{}", entry)?;
        }
        Ok(())
    }
}

/// Iterator over the entries of an [`LruCache`], most recently used first.
pub struct Iter<'a, K, V> {
    inner: list::Iter<'a, CacheEntry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.inner.len())
            .finish()
    }
}

impl<'a, K, V, S> IntoIterator for &'a LruCache<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}
