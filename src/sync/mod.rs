//! Concurrency Module
//!
//! Thread-safe wrappers over [`BoundedCache`](crate::cache::BoundedCache).
//!
//! Two designs are provided:
//! - [`SharedCache`]: a single exclusive lock serializing all operations,
//!   giving a total order across callers
//! - [`ShardedCache`]: the key space split over independent locked shards
//!   to reduce contention, with ordering guaranteed per shard only

mod shared;
mod sharded;

pub use shared::SharedCache;
pub use sharded::ShardedCache;
