//! # Rank/Select Indexing and Sparse Arrays
//!
//! *Constant-time bit counting with sub-linear auxiliary space.*
//!
//! ## Intuition First
//!
//! Think of a highway with mile markers. To know how far you have driven,
//! you do not count every stripe of paint behind you: you read the last
//! mile marker and add the few stripes since. Rank indexing plants
//! "markers" (precomputed running totals) along a bit sequence so that
//! counting the set bits before any position costs one marker read plus one
//! small popcount, never a scan.
//!
//! ## The Problem
//!
//! Given a fixed sequence of $n$ bits, answer:
//! - `rank(i)`: how many set bits lie among the first $i$ bits?
//! - `select(k)`: at which position does the $k$-th set bit live?
//!
//! A per-bit table of running totals answers rank in $O(1)$ but costs
//! $O(n \log n)$ bits — more than the data itself. A bare scan costs
//! nothing extra but answers in $O(n)$. The interesting region is in
//! between.
//!
//! ## Historical Context
//!
//! ```text
//! 1989  Jacobson    Rank/select directories in o(n) extra bits (PhD thesis)
//! 1996  Munro-Raman Constant-time rank and select on the RAM model
//! 2007  Okanohara   Practical sparse/dense dictionary engineering
//! ```
//!
//! Jacobson's two-level scheme is the one implemented here: absolute
//! counters every $\lfloor\log_2 n\rfloor^2$ bits, small relative counters
//! every $\lfloor\log_2 n\rfloor$ bits, and a machine popcount for the
//! remainder.
//!
//! ## Complexity Analysis
//!
//! - **Rank**: $O(1)$ — one u32 read, one u16 read, one popcount.
//! - **Select**: $O(\log n)$ — binary search over rank; zero extra space.
//! - **Space**: $32 n/\log^2 n + 16 n/\log n$ auxiliary bits, which is
//!   $o(n)$.
//!
//! ## What Could Go Wrong
//!
//! 1. **Mutation after indexing**: the directory caches counts. Structures
//!    here either own their sequence outright ([`RankIndex`]) or stamp it
//!    with a generation counter and refuse stale queries ([`SparseArray`]).
//! 2. **Counter overflow**: fixed-width counters bound the sequence length;
//!    construction enforces the u32 bound instead of wrapping silently.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - **[`BitSequence`]**: packed fixed-length bit storage with windowed
//!   integer reads.
//! - **[`RankIndex`]**: the two-level rank directory.
//! - **[`SelectIndex`]**: select by binary search over a borrowed rank
//!   directory.
//! - **[`SparseArray`]**: a presence bitmap plus dense values, addressed
//!   through rank.
//!
//! ## References
//!
//! - Jacobson, G. (1989). "Succinct Static Data Structures."
//! - Munro, J. I., & Raman, V. (1996). "Selection and counting on the fly."
//! - Okanohara, D., & Sadakane, K. (2007). "Practical Entropy-Compressed
//!   Rank/Select Dictionary."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bitseq;
pub mod error;
pub mod rank;
pub mod select;
pub mod sparse;

pub use bitseq::BitSequence;
pub use error::Error;
pub use rank::RankIndex;
pub use select::SelectIndex;
pub use sparse::SparseArray;
