//! Cache Configuration Module
//!
//! This module provides configuration structures for the cache implementations.
//! Configuration structs have public fields for simple instantiation:
//!
//! - **Simple**: Just create the struct with all fields set
//! - **Type safety**: `capacity` is a `NonZeroUsize`, so an empty cache cannot be configured
//! - **Validation**: `new` accepts a plain `usize` and rejects zero with a [`ConfigError`]
//!
//! The heap and priority queue take no configuration beyond their ordering
//! predicate, which is passed straight to their constructors.
//!
//! | Config | Structure | Description |
//! |--------|-----------|-------------|
//! | `LruCacheConfig` | [`LruCache`](crate::LruCache) | Least Recently Used |
//!
//! # Examples
//!
//! ```
//! use lru_heap::config::LruCacheConfig;
//! use lru_heap::LruCache;
//! use core::num::NonZeroUsize;
//!
//! // Create config with all fields
//! let config = LruCacheConfig {
//!     capacity: NonZeroUsize::new(1000).unwrap(),
//! };
//!
//! // Create cache from config
//! let cache: LruCache<String, i32> = LruCache::init(config, None);
//! ```
//!
//! [`ConfigError`]: crate::error::ConfigError

pub mod lru;

pub use lru::LruCacheConfig;
