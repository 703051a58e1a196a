//! Error types for lru-heap
//!
//! Lookups never fail: a cache miss, an empty heap or an out-of-range index
//! is reported as `None`. The only error is an invalid configuration, which
//! is rejected when the structure is built.

use core::fmt;

/// Result type alias for fallible constructors
pub type Result<T> = core::result::Result<T, ConfigError>;

/// Errors raised while validating a configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Capacity must be at least one entry
    ZeroCapacity,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroCapacity => write!(f, "Invalid capacity: must be at least 1"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
