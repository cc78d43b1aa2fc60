//! Error types for the cache
//!
//! Provides unified error handling using thiserror.
//!
//! Absent or expired keys are normal outcomes and are reported through
//! `Option` return values, never as errors. The only error category is
//! invalid arguments, which in practice means invalid construction
//! parameters (zero capacity, zero shard count): null keys and negative
//! TTLs are unrepresentable in the type system.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CacheError {
    /// A construction or call parameter was invalid
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
