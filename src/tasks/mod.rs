//! Background Tasks Module
//!
//! Contains optional background tasks that run alongside a shared cache.
//!
//! # Tasks
//! - TTL Sweep: removes expired cache entries at a configured interval

mod sweep;

pub use sweep::spawn_sweep_task;
