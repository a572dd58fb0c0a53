//! Error conditions shared by [`PriorityQueue`](crate::PriorityQueue) and
//! [`DisjointSet`](crate::DisjointSet).
//!
//! Both structures fail at the point of misuse. Nothing here is recovered
//! locally: an empty pop is never turned into a default value and an
//! out-of-range index is never clamped or used to grow the universe.

use std::fmt;

// ---------------------------------------------------------------------------
// StructureError
// ---------------------------------------------------------------------------

/// All error conditions produced by the data structures in this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// `pop`, `peek` or `replace_top` was called on a queue with no elements.
    EmptyStructure,

    /// An element index lies outside the universe `0..len` of a
    /// [`DisjointSet`](crate::DisjointSet).
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// The universe size the structure was constructed with.
        len: usize,
    },

    /// A structure could not be built from the supplied parameters or
    /// snapshot (negative size, inconsistent parent arrays, and so on).
    InvalidConstruction {
        /// Human-readable description of what was wrong.
        detail: String,
    },
}

impl StructureError {
    pub(crate) fn invalid(detail: impl Into<String>) -> Self {
        Self::InvalidConstruction {
            detail: detail.into(),
        }
    }
}

impl fmt::Display for StructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyStructure => f.write_str("structure is empty"),
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} is out of range for universe of size {len}")
            }
            Self::InvalidConstruction { detail } => {
                write!(f, "invalid construction: {detail}")
            }
        }
    }
}

impl std::error::Error for StructureError {}
