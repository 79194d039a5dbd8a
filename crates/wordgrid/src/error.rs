//! Error types for grid construction.

use std::fmt;

/// Errors arising from constructing a [`CharGrid`](crate::CharGrid).
///
/// All of these are fail-fast precondition violations: a malformed
/// board is rejected at construction and there is no recovery path.
/// Searches over a well-formed grid never error.
#[derive(Debug, Clone)]
pub enum GridError {
    /// Attempted to construct a grid with zero rows or zero columns.
    Empty,
    /// A row's length differs from the first row's.
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Length of the offending row.
        len: usize,
        /// Expected length (the length of row 0).
        expected: usize,
    },
    /// A dimension does not fit the `i32` coordinate domain.
    DimensionTooLarge {
        /// Which dimension overflowed.
        name: &'static str,
        /// The offending value.
        value: usize,
        /// Maximum supported value.
        max: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid must have at least one row and one column"),
            Self::RaggedRow { row, len, expected } => {
                write!(f, "row {row} has length {len}, expected {expected}")
            }
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum dimension {max}")
            }
        }
    }
}

impl std::error::Error for GridError {}
