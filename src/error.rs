//! Errors for pool construction and drawing.

use thiserror::Error;

/// Errors returned by [`WeightedPool`](crate::WeightedPool).
///
/// All construction variants are detected before any state is built; `Exhausted`
/// is the only error a live pool can return.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PoolError {
    /// No items were supplied.
    #[error("pool needs at least one item")]
    EmptyInput,
    /// Items and weights have different lengths.
    #[error("got {items} items but {weights} weights")]
    LengthMismatch { items: usize, weights: usize },
    /// Rebuild threshold must be at least 1.
    #[error("rebuild threshold must be >= 1 (got {0})")]
    InvalidThreshold(usize),
    /// A slot passed to `from_slots` was already empty.
    #[error("slot {index} is empty; every slot must hold an item")]
    SentinelItem { index: usize },
    /// Weight is NaN or infinite.
    #[error("weight {index} must be finite (got {weight})")]
    NonFiniteWeight { index: usize, weight: f64 },
    /// Weight is zero or negative.
    #[error("weight {index} must be > 0 (got {weight})")]
    NonPositiveWeight { index: usize, weight: f64 },
    /// Weights are individually finite but their sum is not.
    #[error("sum of weights overflows (got {0})")]
    NonFiniteTotal(f64),
    /// Every item has already been drawn.
    #[error("pool is exhausted")]
    Exhausted,
}
