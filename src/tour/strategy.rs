//! Neighbor-move selection policies.

use crate::error::{Result, TspError};
use rand::Rng;

/// Policy for choosing which tour range `[start, end]` to reverse next.
///
/// Positions `0` and `len - 1` of a closed tour hold the duplicated start
/// node and are never selected, so both variants draw from the interior
/// positions `1..=len - 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveStrategy {
    /// Two distinct interior positions drawn uniformly at random.
    #[default]
    BothRandom,

    /// One random interior position paired with its predecessor (or its
    /// successor when it is the first interior position). Reverses two
    /// adjacent nodes, a much more local perturbation.
    RandomNeighborPair,
}

impl MoveStrategy {
    /// Selects a range to reverse in a closed tour of `tour_len` positions.
    ///
    /// Returns `(start, end)` with `1 <= start < end <= tour_len - 2`.
    ///
    /// # Errors
    ///
    /// [`TspError::DegenerateMoveSpace`] when the tour has fewer than two
    /// interior positions.
    pub fn select<R: Rng>(&self, tour_len: usize, rng: &mut R) -> Result<(usize, usize)> {
        let interior = tour_len.saturating_sub(2);
        if interior < 2 {
            return Err(TspError::DegenerateMoveSpace { interior });
        }
        Ok(self.pick(interior, rng))
    }

    /// Selection without the size check. `interior` must be at least 2.
    #[inline]
    pub(crate) fn pick<R: Rng>(&self, interior: usize, rng: &mut R) -> (usize, usize) {
        debug_assert!(interior >= 2);
        match self {
            MoveStrategy::BothRandom => {
                let first = rng.random_range(1..=interior);
                // Draw from the remaining interior - 1 positions, skipping `first`.
                let mut second = rng.random_range(1..interior);
                if second >= first {
                    second += 1;
                }
                (first.min(second), first.max(second))
            }
            MoveStrategy::RandomNeighborPair => {
                let r = rng.random_range(1..=interior);
                if r == 1 {
                    (1, 2)
                } else {
                    (r - 1, r)
                }
            }
        }
    }
}
