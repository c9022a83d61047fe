//! telemetry/mod.rs
//! Counters, stage timers and immutable snapshots for stream runs.
//!
//! Counters are mutated while a stream is drained; a snapshot is taken once
//! at the end and never changes afterwards.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
