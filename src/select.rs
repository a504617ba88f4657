//! Position of the k-th set bit via binary search over rank.
//!
//! A deliberate space/time trade: O(log n) rank probes per query instead of
//! O(1), in exchange for zero bits of storage beyond the rank directory it
//! borrows.

use std::path::Path;

use crate::error::{Error, Result};
use crate::rank::RankIndex;

/// Select support over a borrowed [`RankIndex`].
pub struct SelectIndex<'a> {
    rank: &'a RankIndex,
}

impl<'a> SelectIndex<'a> {
    /// Wrap a rank directory. The wrapper stores nothing of its own.
    pub fn new(rank: &'a RankIndex) -> Self {
        Self { rank }
    }

    /// Return the 1-based position of the `k`-th set bit.
    ///
    /// `k` must lie in `[1, ones]`; anything else is reported as
    /// [`Error::OutOfRange`].
    ///
    /// Each probe narrows three ways: a rank above `k` moves the upper bound
    /// down; a rank equal to `k` is the answer only when the probed bit is
    /// itself set (otherwise the k-th one lies earlier); a rank below `k`
    /// moves the lower bound past the probe. When the bounds collapse, the
    /// meeting point is the answer.
    pub fn select(&self, k: usize) -> Result<usize> {
        if k < 1 || k > self.rank.ones() {
            return Err(Error::OutOfRange(k));
        }
        let mut start = 1usize;
        let mut end = self.rank.len();
        while start < end {
            let mid = start + (end - start) / 2;
            let r = self.rank.rank(mid)?;
            if r > k {
                end = mid;
            } else if r == k {
                if self.rank.sequence().get(mid - 1) {
                    return Ok(mid);
                }
                end = mid;
            } else {
                start = mid + 1;
            }
        }
        Ok(start)
    }

    /// Auxiliary space in bits — all of it the rank directory's.
    pub fn overhead(&self) -> usize {
        self.rank.overhead()
    }

    /// Persist the underlying rank directory.
    ///
    /// There is no matching `load`: deserialize a [`RankIndex`] with
    /// [`RankIndex::load`] and wrap it.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.rank.save(path)
    }
}
