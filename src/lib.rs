//! `kujibiki`: weighted sampling without replacement.
//!
//! A [`WeightedPool`] draws items one at a time, each with probability
//! proportional to its weight among the items not yet drawn, until none are
//! left. Draws are O(log n); drawn slots are tombstoned and periodically
//! compacted away, so a full drain stays cheap.
//!
//! Exposed modules:
//! - `pool`: the [`WeightedPool`] itself, its draw/rebuild logic and [`Drain`].
//! - `ranges`: cumulative weight ranges with binary-search lookup.
//! - `error`: [`PoolError`].

#![forbid(unsafe_code)]

pub mod error;
pub mod pool;
pub mod ranges;

pub use error::PoolError;
pub use pool::{Drain, WeightedPool, DEFAULT_REBUILD_THRESHOLD};
pub use ranges::CumulativeRanges;
