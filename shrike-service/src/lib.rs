//! Shrike Service - hosting-side pieces for the triage engine
//!
//! Everything a process embedding the engine needs that the engine itself
//! must not own:
//! - Sliding-window admission control per caller identifier
//! - Batch-input parsing and bulk scoring
//! - Process-wide request statistics
//!
//! The engine in `shrike-core` stays pure; nothing here feeds back into it.

pub mod limiter;
pub mod stats;
pub mod batch;
pub mod service;

pub use limiter::*;
pub use stats::*;
pub use batch::*;
pub use service::*;

/// Default requests-per-minute admission threshold
pub const DEFAULT_REQUESTS_PER_MINUTE: u32 = 60;

/// Maximum messages accepted in one batch
pub const MAX_BATCH_MESSAGES: usize = 100;
