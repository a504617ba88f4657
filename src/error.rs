//! Error types for rank/select indexing.

use thiserror::Error;

/// Error variants for rank/select and sparse array operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A rank position, select rank, or slot index outside the valid domain.
    #[error("position out of range: {0}")]
    OutOfRange(usize),

    /// A query consulted an index built before the latest mutation of the
    /// underlying sequence.
    #[error("stale index: sequence was modified after the index was built")]
    StaleIndex,

    /// A rank index was requested over a sequence of zero bits.
    #[error("cannot index an empty sequence")]
    EmptySequence,

    /// The sequence is longer than the 32-bit superblock counters can count.
    #[error("sequence of {0} bits exceeds the u32 counter bound")]
    SequenceTooLong(usize),

    /// Persisted bytes are truncated or internally inconsistent.
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    /// An I/O error occurred during save or load.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for rank/select operations.
pub type Result<T> = std::result::Result<T, Error>;
