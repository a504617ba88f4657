//! Sparse array: a presence bitmap plus densely stored values.
//!
//! Slots are addressed by position in `[0, capacity)`, but only occupied
//! slots cost a stored value. Positional lookups go through a rank directory
//! over the presence bitmap: the value in the slot at `position` is the
//! `rank(position + 1)`-th stored value.
//!
//! The directory is built on demand with [`SparseArray::rebuild_index`] and
//! checked by generation stamp on every indexed query, so querying after an
//! append without a rebuild is an error rather than a wrong answer.

use std::path::Path;

use crate::bitseq::BitSequence;
use crate::error::{Error, Result};
use crate::rank::RankIndex;

/// A fixed-capacity array that stores only its occupied slots.
pub struct SparseArray {
    presence: BitSequence,
    values: Vec<String>,
    index: Option<RankIndex>,
}

impl std::fmt::Debug for SparseArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SparseArray")
            .field("capacity", &self.presence.len())
            .field("values", &self.values.len())
            .finish()
    }
}

impl SparseArray {
    /// Create an empty array with `capacity` addressable slots.
    pub fn create(capacity: usize) -> Self {
        Self {
            presence: BitSequence::new(capacity),
            values: Vec::new(),
            index: None,
        }
    }

    /// Store `value` in the slot at `position`.
    ///
    /// Returns false (and stores nothing) when `position` is at or past the
    /// capacity, so a dropped append is observable to the caller. Positions
    /// must arrive in increasing order; out-of-order appends break the
    /// correspondence between insertion order and bit order.
    ///
    /// Any previously built index is stale after a successful append and
    /// must be rebuilt before the next positional query.
    pub fn append(&mut self, value: impl Into<String>, position: usize) -> bool {
        if self.presence.set(position, true).is_err() {
            return false;
        }
        self.values.push(value.into());
        true
    }

    /// (Re)build the rank directory over the current presence bitmap.
    ///
    /// Must be called after a batch of appends and before any
    /// [`get_at_index`](SparseArray::get_at_index) or
    /// [`count_up_to`](SparseArray::count_up_to) call. Rebuilding with no
    /// intervening mutation is idempotent.
    pub fn rebuild_index(&mut self) -> Result<()> {
        self.index = Some(RankIndex::new(self.presence.clone())?);
        Ok(())
    }

    /// Return the `r`-th stored value (0-based insertion order), or `None`
    /// past the end. O(1), needs no index.
    pub fn get_at_rank(&self, r: usize) -> Option<&str> {
        self.values.get(r).map(String::as_str)
    }

    /// Return the value in the slot at `position`, or `None` when the slot
    /// is empty. O(1) given a fresh index.
    pub fn get_at_index(&self, position: usize) -> Result<Option<&str>> {
        if position >= self.presence.len() {
            return Err(Error::OutOfRange(position));
        }
        let index = self.fresh_index()?;
        if !self.presence.get(position) {
            return Ok(None);
        }
        let rank = index.rank(position + 1)?;
        Ok(self.values.get(rank - 1).map(String::as_str))
    }

    /// Return the number of occupied slots at or before `position`.
    /// O(1) given a fresh index.
    pub fn count_up_to(&self, position: usize) -> Result<usize> {
        if position >= self.presence.len() {
            return Err(Error::OutOfRange(position));
        }
        self.fresh_index()?.rank(position + 1)
    }

    /// Return the slot capacity. Always the logical capacity the array was
    /// created with; index construction never changes it.
    pub fn size(&self) -> usize {
        self.presence.len()
    }

    /// Return the number of stored values.
    pub fn num_values(&self) -> usize {
        self.values.len()
    }

    fn fresh_index(&self) -> Result<&RankIndex> {
        match &self.index {
            Some(index) if index.generation() == self.presence.generation() => Ok(index),
            _ => Err(Error::StaleIndex),
        }
    }

    /// Serialize this array to its persisted form.
    ///
    /// Format: the value count as a decimal text line, one value per line,
    /// then the presence [`BitSequence`] bytes. Values must not contain
    /// newlines; offenders are rejected here rather than corrupting the
    /// line framing.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        out.extend_from_slice(self.values.len().to_string().as_bytes());
        out.push(b'\n');
        for value in &self.values {
            if value.contains('\n') {
                return Err(Error::InvalidEncoding(
                    "values must not contain newlines".to_string(),
                ));
            }
            out.extend_from_slice(value.as_bytes());
            out.push(b'\n');
        }
        out.extend_from_slice(&self.presence.to_bytes());
        Ok(out)
    }

    /// Deserialize a `SparseArray` from `to_bytes()` output.
    ///
    /// Values are reconstructed first, then the presence bitmap. The loaded
    /// array carries no index; call
    /// [`rebuild_index`](SparseArray::rebuild_index) before positional
    /// queries.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (count_line, mut off) = read_line(bytes, 0)?;
        let count: usize = count_line
            .parse()
            .map_err(|_| Error::InvalidEncoding("bad value count line".to_string()))?;
        // Each value line costs at least one byte (its newline).
        if count > bytes.len() {
            return Err(Error::InvalidEncoding(format!(
                "value count ({count}) too large for input ({} bytes)",
                bytes.len()
            )));
        }

        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            let (line, next) = read_line(bytes, off)?;
            values.push(line.to_string());
            off = next;
        }

        let presence = BitSequence::from_bytes(&bytes[off..])?;
        Ok(Self {
            presence,
            values,
            index: None,
        })
    }

    /// Write `to_bytes()` output to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_bytes()?)?;
        Ok(())
    }

    /// Read an array saved with [`save`](SparseArray::save).
    ///
    /// Returns a fresh value, so a failed load cannot disturb any existing
    /// structure.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_bytes(&std::fs::read(path)?)
    }
}

fn read_line(bytes: &[u8], off: usize) -> Result<(&str, usize)> {
    let rest = &bytes[off..];
    let end = rest
        .iter()
        .position(|&b| b == b'\n')
        .ok_or_else(|| Error::InvalidEncoding("unterminated value line".to_string()))?;
    let line = std::str::from_utf8(&rest[..end])
        .map_err(|_| Error::InvalidEncoding("value line is not utf-8".to_string()))?;
    Ok((line, off + end + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SparseArray {
        let mut array = SparseArray::create(10);
        assert!(array.append("foo", 1));
        assert!(array.append("bar", 5));
        assert!(array.append("baz", 9));
        array.rebuild_index().unwrap();
        array
    }

    #[test]
    fn test_scenario_queries() {
        let array = sample();
        assert_eq!(array.get_at_rank(1), Some("bar"));
        assert_eq!(array.get_at_rank(4), None);
        assert_eq!(array.get_at_index(9).unwrap(), Some("baz"));
        assert_eq!(array.get_at_index(6).unwrap(), None);
        assert_eq!(array.count_up_to(0).unwrap(), 0);
        assert_eq!(array.count_up_to(4).unwrap(), 1);
        assert_eq!(array.count_up_to(5).unwrap(), 2);
        assert_eq!(array.size(), 10);
        assert_eq!(array.num_values(), 3);
    }

    #[test]
    fn test_out_of_range_append_is_observable() {
        let mut array = SparseArray::create(10);
        assert!(!array.append("nope", 10));
        assert_eq!(array.num_values(), 0);
    }

    #[test]
    fn test_out_of_range_queries() {
        let array = sample();
        assert!(matches!(array.get_at_index(10), Err(Error::OutOfRange(10))));
        assert!(matches!(array.count_up_to(10), Err(Error::OutOfRange(10))));
    }

    #[test]
    fn test_query_without_index_is_stale() {
        let mut array = SparseArray::create(10);
        array.append("foo", 1);
        assert!(matches!(array.get_at_index(1), Err(Error::StaleIndex)));
    }

    #[test]
    fn test_append_invalidates_index() {
        let mut array = sample();
        assert!(array.append("qux", 7));
        assert!(matches!(array.get_at_index(1), Err(Error::StaleIndex)));
        assert!(matches!(array.count_up_to(4), Err(Error::StaleIndex)));
        // get_at_rank reads insertion order directly and stays valid.
        assert_eq!(array.get_at_rank(3), Some("qux"));
        array.rebuild_index().unwrap();
        assert_eq!(array.get_at_index(7).unwrap(), Some("qux"));
    }

    #[test]
    fn test_rebuild_is_idempotent() {
        let mut array = sample();
        let before: Vec<_> = (0..10).map(|i| array.count_up_to(i).unwrap()).collect();
        array.rebuild_index().unwrap();
        let after: Vec<_> = (0..10).map(|i| array.count_up_to(i).unwrap()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_size_reports_logical_capacity() {
        let array = sample();
        // Index construction pads only internally; capacity stays 10.
        assert_eq!(array.size(), 10);
    }

    #[test]
    fn test_roundtrip() {
        let array = sample();
        let bytes = array.to_bytes().unwrap();
        let mut restored = SparseArray::from_bytes(&bytes).unwrap();
        assert_eq!(restored.size(), 10);
        assert_eq!(restored.num_values(), 3);
        // The loaded array has no index until rebuilt.
        assert!(matches!(restored.get_at_index(9), Err(Error::StaleIndex)));
        restored.rebuild_index().unwrap();
        for position in 0..10 {
            assert_eq!(
                restored.get_at_index(position).unwrap(),
                array.get_at_index(position).unwrap()
            );
        }
    }

    #[test]
    fn test_rejects_newline_in_value() {
        let mut array = SparseArray::create(4);
        array.append("two\nlines", 0);
        assert!(array.to_bytes().is_err());
    }

    #[test]
    fn test_rejects_corrupt_input() {
        assert!(SparseArray::from_bytes(b"not a number\n").is_err());
        assert!(SparseArray::from_bytes(b"3\nonly-one\n").is_err());

        let bytes = sample().to_bytes().unwrap();
        assert!(SparseArray::from_bytes(&bytes[..bytes.len() - 3]).is_err());
    }
}
