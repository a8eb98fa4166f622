//! Weighted sampling without replacement.
//!
//! A [`WeightedPool`] holds a fixed set of items, each with a positive weight,
//! and hands them out one at a time. Each draw picks a remaining item with
//! probability proportional to its weight; a drawn item never comes back.
//!
//! Draws are resolved by binary search over cumulative weight ranges
//! ([`CumulativeRanges`]). A drawn slot is left in place as a tombstone, and a
//! draw that lands on a tombstone is simply retried. Once
//! `rebuild_threshold` such misses have piled up, the live items are
//! compacted into a fresh generation (new slots, new ranges), after which the
//! next draw cannot miss. Each draw is O(log n) and the number of rebuilds
//! over a full drain stays small (roughly sqrt(n) for flat weights), so
//! draining the pool costs far less than rescanning on every draw.
//!
//! Notes:
//! - Every sampling entrypoint has a `*_with_rng` form for deterministic
//!   testing/benchmarking; the plain forms use `rand::rng()`.
//! - The miss counter is not reset by successful draws, only by rebuilds.

use std::iter::FusedIterator;

use rand::prelude::*;

use crate::error::PoolError;
use crate::ranges::CumulativeRanges;

/// Misses tolerated before a rebuild when no threshold is given.
pub const DEFAULT_REBUILD_THRESHOLD: usize = 2;

/// A pool of weighted items, drawn without replacement.
///
/// Construction takes the item and weight vectors by value, so the caller
/// cannot mutate them afterwards.
#[derive(Debug, Clone)]
pub struct WeightedPool<T> {
    // `None` marks a slot whose item was already drawn.
    slots: Vec<Option<T>>,
    weights: Vec<f64>,
    ranges: CumulativeRanges,
    remaining: usize,
    failed_attempts: usize,
    rebuilds: usize,
    rebuild_threshold: usize,
}

impl<T> WeightedPool<T> {
    /// Create a pool with the default rebuild threshold.
    ///
    /// ```
    /// use kujibiki::WeightedPool;
    ///
    /// let mut pool = WeightedPool::new(vec!["a", "b"], vec![5.0, 12.0]).unwrap();
    /// let first = pool.sample().unwrap();
    /// assert!(first == "a" || first == "b");
    /// assert_eq!(pool.remaining(), 1);
    /// ```
    pub fn new(items: Vec<T>, weights: Vec<f64>) -> Result<Self, PoolError> {
        Self::with_rebuild_threshold(items, weights, DEFAULT_REBUILD_THRESHOLD)
    }

    /// Create a pool that rebuilds after `rebuild_threshold` missed draws.
    ///
    /// Smaller thresholds rebuild more eagerly (fewer wasted draws, more O(n)
    /// compactions); larger ones tolerate more misses between rebuilds.
    pub fn with_rebuild_threshold(
        items: Vec<T>,
        weights: Vec<f64>,
        rebuild_threshold: usize,
    ) -> Result<Self, PoolError> {
        check_shape(items.len(), weights.len(), rebuild_threshold)?;
        check_weights(&weights)?;
        let slots = items.into_iter().map(Some).collect();
        Ok(Self::from_validated(slots, weights, rebuild_threshold))
    }

    /// Create a pool from pre-built slots.
    ///
    /// Every slot must hold an item: an empty slot is what the pool uses for
    /// drawn items, so it is rejected with [`PoolError::SentinelItem`].
    pub fn from_slots(
        slots: Vec<Option<T>>,
        weights: Vec<f64>,
        rebuild_threshold: usize,
    ) -> Result<Self, PoolError> {
        check_shape(slots.len(), weights.len(), rebuild_threshold)?;
        if let Some(index) = slots.iter().position(Option::is_none) {
            return Err(PoolError::SentinelItem { index });
        }
        check_weights(&weights)?;
        Ok(Self::from_validated(slots, weights, rebuild_threshold))
    }

    fn from_validated(slots: Vec<Option<T>>, weights: Vec<f64>, rebuild_threshold: usize) -> Self {
        let mut pool = Self {
            remaining: slots.len(),
            slots: Vec::new(),
            weights: Vec::new(),
            ranges: CumulativeRanges::from_weights(&[]),
            failed_attempts: 0,
            rebuilds: 0,
            rebuild_threshold,
        };
        pool.install_generation(slots, weights);
        pool
    }

    /// Replace the current generation wholesale.
    ///
    /// Also used for the initial build, which therefore counts as a rebuild.
    fn install_generation(&mut self, slots: Vec<Option<T>>, weights: Vec<f64>) {
        debug_assert_eq!(slots.len(), weights.len());
        self.ranges = CumulativeRanges::from_weights(&weights);
        self.slots = slots;
        self.weights = weights;
        self.failed_attempts = 0;
        self.rebuilds += 1;
    }

    /// Compact the live slots (in order) into a new generation. O(n).
    fn rebuild(&mut self) {
        let mut slots = Vec::with_capacity(self.remaining);
        let mut weights = Vec::with_capacity(self.remaining);
        for (slot, &w) in std::mem::take(&mut self.slots).into_iter().zip(&self.weights) {
            if slot.is_some() {
                slots.push(slot);
                weights.push(w);
            }
        }
        self.install_generation(slots, weights);
    }

    /// One draw against the current generation; `None` means it hit a tombstone.
    fn try_draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<T> {
        let point = rng.random::<f64>() * self.ranges.total();
        let idx = self.ranges.find_range_index(point);
        let item = self.slots[idx].take()?;
        self.remaining -= 1;
        Some(item)
    }

    /// Draw one item.
    ///
    /// Returns [`PoolError::Exhausted`] once every item has been drawn.
    #[inline]
    pub fn sample(&mut self) -> Result<T, PoolError> {
        let mut rng = rand::rng();
        self.sample_with_rng(&mut rng)
    }

    /// Draw one item, using a caller-supplied RNG.
    pub fn sample_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<T, PoolError> {
        if self.remaining == 0 {
            return Err(PoolError::Exhausted);
        }

        loop {
            if let Some(item) = self.try_draw(rng) {
                return Ok(item);
            }

            self.failed_attempts += 1;
            if self.failed_attempts >= self.rebuild_threshold {
                self.rebuild();
                // A fresh generation holds only live slots.
                return match self.try_draw(rng) {
                    Some(item) => Ok(item),
                    None => unreachable!("draw after rebuild hit an empty slot"),
                };
            }
        }
    }

    /// Iterate over draws until the pool is exhausted.
    ///
    /// Dropping the iterator early leaves the undrawn items in the pool.
    pub fn drain_with_rng<'a, R: Rng + ?Sized>(&'a mut self, rng: &'a mut R) -> Drain<'a, T, R> {
        Drain { pool: self, rng }
    }

    /// Draw every remaining item, in draw order.
    pub fn into_weighted_order(self) -> Vec<T> {
        let mut rng = rand::rng();
        self.into_weighted_order_with_rng(&mut rng)
    }

    /// Draw every remaining item using a caller-supplied RNG.
    pub fn into_weighted_order_with_rng<R: Rng + ?Sized>(mut self, rng: &mut R) -> Vec<T> {
        let mut out = Vec::with_capacity(self.remaining);
        out.extend(self.drain_with_rng(rng));
        out
    }

    /// True once every item has been drawn.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining == 0
    }

    /// Number of items not yet drawn.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Number of generations built so far, including the initial one.
    #[inline]
    pub fn rebuild_count(&self) -> usize {
        self.rebuilds
    }

    #[inline]
    pub fn rebuild_threshold(&self) -> usize {
        self.rebuild_threshold
    }

    /// Misses since the last rebuild.
    #[inline]
    pub fn failed_attempts(&self) -> usize {
        self.failed_attempts
    }

    /// Total weight of the current generation, drawn slots included.
    #[inline]
    pub fn total_weight(&self) -> f64 {
        self.ranges.total()
    }

    /// Slots in the current generation, drawn slots included.
    #[inline]
    pub fn generation_len(&self) -> usize {
        self.slots.len()
    }
}

fn check_shape(items: usize, weights: usize, rebuild_threshold: usize) -> Result<(), PoolError> {
    if items == 0 {
        return Err(PoolError::EmptyInput);
    }
    if items != weights {
        return Err(PoolError::LengthMismatch { items, weights });
    }
    if rebuild_threshold == 0 {
        return Err(PoolError::InvalidThreshold(rebuild_threshold));
    }
    Ok(())
}

fn check_weights(weights: &[f64]) -> Result<(), PoolError> {
    let mut total = 0.0;
    for (index, &weight) in weights.iter().enumerate() {
        if !weight.is_finite() {
            return Err(PoolError::NonFiniteWeight { index, weight });
        }
        if weight <= 0.0 {
            return Err(PoolError::NonPositiveWeight { index, weight });
        }
        total += weight;
    }
    if !total.is_finite() {
        return Err(PoolError::NonFiniteTotal(total));
    }
    Ok(())
}

/// Iterator returned by [`WeightedPool::drain_with_rng`].
pub struct Drain<'a, T, R: ?Sized> {
    pool: &'a mut WeightedPool<T>,
    rng: &'a mut R,
}

impl<T, R: Rng + ?Sized> Iterator for Drain<'_, T, R> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.pool.sample_with_rng(&mut *self.rng).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.pool.remaining, Some(self.pool.remaining))
    }
}

impl<T, R: Rng + ?Sized> ExactSizeIterator for Drain<'_, T, R> {}

impl<T, R: Rng + ?Sized> FusedIterator for Drain<'_, T, R> {}
