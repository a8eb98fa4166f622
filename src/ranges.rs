//! Cumulative weight ranges.
//!
//! Slot `i` owns the half-open interval `[bounds[i-1], bounds[i])` of the
//! total range `[0, total)`, with `bounds[-1] = 0`. Drawing a uniform point in
//! `[0, total)` and locating its owner picks slot `i` with probability
//! `w_i / total`.

/// Ascending exclusive upper bounds of each slot's weight range.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeRanges {
    bounds: Vec<f64>,
}

impl CumulativeRanges {
    /// Build the bounds by running sum over `weights`.
    ///
    /// Weights are expected to be positive and finite; the pool validates them
    /// before they get here.
    pub fn from_weights(weights: &[f64]) -> Self {
        let mut bounds = Vec::with_capacity(weights.len());
        let mut total = 0.0;
        for &w in weights {
            total += w;
            bounds.push(total);
        }
        Self { bounds }
    }

    /// End of the total range (sum of all weights).
    #[inline]
    pub fn total(&self) -> f64 {
        self.bounds.last().copied().unwrap_or(0.0)
    }

    /// Number of ranges.
    #[inline]
    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// The raw upper bounds.
    pub fn bounds(&self) -> &[f64] {
        &self.bounds
    }

    /// Index of the range containing `point`: the leftmost `i` with
    /// `point < bounds[i]`.
    ///
    /// Points at or past the end (which `u * total` can round to) clamp to the
    /// last range, so the result is always a valid index for a non-empty set.
    #[inline]
    pub fn find_range_index(&self, point: f64) -> usize {
        let idx = self.bounds.partition_point(|&b| b <= point);
        idx.min(self.bounds.len().saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_running_sums() {
        let r = CumulativeRanges::from_weights(&[5.0, 12.0, 3.0]);
        assert_eq!(r.bounds(), &[5.0, 17.0, 20.0]);
        assert_eq!(r.total(), 20.0);
        assert_eq!(r.len(), 3);
    }

    #[test]
    fn lookup_respects_half_open_ranges() {
        let r = CumulativeRanges::from_weights(&[5.0, 12.0, 3.0]);
        assert_eq!(r.find_range_index(0.0), 0);
        assert_eq!(r.find_range_index(4.999), 0);
        assert_eq!(r.find_range_index(5.0), 1);
        assert_eq!(r.find_range_index(16.5), 1);
        assert_eq!(r.find_range_index(17.0), 2);
        assert_eq!(r.find_range_index(19.999), 2);
    }

    #[test]
    fn lookup_clamps_at_range_end() {
        let r = CumulativeRanges::from_weights(&[1.0, 1.0]);
        assert_eq!(r.find_range_index(2.0), 1);
        assert_eq!(r.find_range_index(1e9), 1);
    }

    #[test]
    fn absorbed_weight_gets_no_range() {
        // 1e-20 vanishes next to 1e8, so slot 1 has zero width.
        let r = CumulativeRanges::from_weights(&[1e8, 1e-20, 1.0]);
        assert_eq!(r.bounds()[0], r.bounds()[1]);
        assert_eq!(r.find_range_index(1e8), 2);
        assert_eq!(r.find_range_index(1e8 - 1.0), 0);
    }

    #[test]
    fn lookup_matches_linear_scan() {
        let weights: Vec<f64> = (1..=50).map(|i| (i % 7 + 1) as f64 * 0.25).collect();
        let r = CumulativeRanges::from_weights(&weights);
        let total = r.total();
        for step in 0..1000 {
            let point = total * step as f64 / 1000.0;
            let expected = r
                .bounds()
                .iter()
                .position(|&b| point < b)
                .expect("point inside total range");
            assert_eq!(r.find_range_index(point), expected, "point={point}");
        }
    }

    #[test]
    fn empty_ranges() {
        let r = CumulativeRanges::from_weights(&[]);
        assert!(r.is_empty());
        assert_eq!(r.total(), 0.0);
    }
}
