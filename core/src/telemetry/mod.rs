//! telemetry/mod.rs
//! Counters, stage timers and immutable snapshots for block streams.
//!
//! Notes:
//! - Counters are plain values threaded through the stream codec; no locks, no atomics.
//! - Snapshots are immutable and serializable so the CLI can emit them as JSON.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
