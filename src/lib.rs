#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## Quick Reference
//!
//! | Type | Description | Ordering |
//! |------|-------------|----------|
//! | [`LruCache`] | Bounded key-value store, evicts the least recently used entry | Recency |
//! | [`Heap`] | Array-backed binary heap | Caller-supplied predicate |
//! | [`PriorityQueue`] | Queue vocabulary over [`Heap`] | Caller-supplied predicate |
//!
//! ## Performance Characteristics
//!
//! | Structure | Lookup | Insert | Remove front | Remove arbitrary |
//! |-----------|--------|--------|--------------|------------------|
//! | LRU       | O(1)   | O(1)   | O(1) (eviction) | n/a |
//! | Heap / PQ | O(1) peek, O(n) `index_of` | O(log n) | O(log n) | O(log n) |
//!
//! ## Code Examples
//!
//! ### LRU (Least Recently Used)
//!
//! Reads and writes both promote an entry. When full, a new key evicts the
//! entry that has gone unused the longest.
//!
//! ```rust
//! use lru_heap::LruCache;
//! use lru_heap::config::LruCacheConfig;
//! use core::num::NonZeroUsize;
//!
//! let config = LruCacheConfig {
//!     capacity: NonZeroUsize::new(2).unwrap(),
//! };
//! let mut cache: LruCache<&str, i32> = LruCache::init(config, None);
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.get(&"a");      // "a" becomes most recently used
//! cache.put("c", 3);    // "b" evicted (least recently used)
//! assert!(cache.get(&"b").is_none());
//! ```
//!
//! A zero capacity is rejected up front:
//!
//! ```rust
//! use lru_heap::{ConfigError, LruCache};
//!
//! let result = LruCache::<u32, u32>::try_new(0);
//! assert_eq!(result.unwrap_err(), ConfigError::ZeroCapacity);
//! ```
//!
//! ### Priority Queue
//!
//! The predicate decides the direction: `<` dequeues smallest first, `>`
//! largest first.
//!
//! ```rust
//! use lru_heap::PriorityQueue;
//!
//! let mut queue = PriorityQueue::from_vec(vec![5, 10, 0, 3], |a: &i32, b: &i32| a < b);
//! assert_eq!(queue.index_of(&10), Some(3));
//!
//! let index = queue.index_of(&10).unwrap();
//! queue.change_priority(index, -1);
//! assert_eq!(queue.dequeue(), Some(-1));
//! assert_eq!(queue.dequeue(), Some(0));
//! ```
//!
//! ## Thread Safety
//!
//! None of the structures lock internally. Share them across threads by
//! wrapping them in a mutex:
//!
//! ```rust,ignore
//! use lru_heap::LruCache;
//! use std::sync::{Arc, Mutex};
//!
//! let cache = Arc::new(Mutex::new(LruCache::try_new(1_000)?));
//! let handle = Arc::clone(&cache);
//! std::thread::spawn(move || {
//!     handle.lock().unwrap().put("key".to_string(), 42);
//! });
//! ```
//!
//! ## Modules
//!
//! - [`lru`]: Least Recently Used cache implementation
//! - [`heap`]: Binary heap over a caller-supplied ordering predicate
//! - [`priority_queue`]: Priority queue built on [`heap`]
//! - [`config`]: Configuration structures
//! - [`error`]: Configuration errors
//! - [`metrics`]: Metrics collection for cache performance monitoring

#![no_std]

extern crate alloc;

#[cfg(test)]
#[macro_use]
extern crate std;

#[cfg(all(not(test), any(feature = "std", not(feature = "hashbrown"))))]
extern crate std;

/// Cache entry type.
///
/// `CacheEntry<K, V>` is the key/value record owned by one node of the
/// recency list.
pub mod entry;

/// Doubly linked list stored in an arena.
///
/// Nodes live in a `Vec` and link to each other by index, so the cache can
/// splice and unlink entries in O(1) without raw pointers.
///
/// **Note**: This module is internal infrastructure and should not be used
/// directly by library consumers.
pub(crate) mod list;

/// Cache configuration structures.
pub mod config;

/// Error types returned when a structure is configured with invalid
/// parameters.
pub mod error;

/// Least Recently Used (LRU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least recently used items when
/// the capacity is reached.
pub mod lru;

/// Binary heap implementation.
///
/// An array-backed complete binary tree kept in order by an injected
/// predicate, so max-heaps, min-heaps and custom orders share one type.
pub mod heap;

/// Priority queue implementation.
pub mod priority_queue;

/// Cache metrics system.
///
/// Provides a metrics collection and reporting interface. Each cache tracks
/// its own counters and reports them through a common trait.
pub mod metrics;

pub use heap::Heap;
pub use lru::LruCache;
pub use priority_queue::PriorityQueue;

pub use config::LruCacheConfig;
pub use entry::CacheEntry;
pub use error::ConfigError;
