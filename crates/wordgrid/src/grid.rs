//! Immutable 2-D character grid storage.

use crate::error::GridError;
use crate::pos::Pos;
use std::fmt;

/// An immutable R×C character matrix.
///
/// Cells are stored flat in row-major order and addressed by [`Pos`],
/// with `0 <= row < rows` and `0 <= col < cols`. A grid always has at
/// least one row and one column; construction rejects anything else.
/// The grid is never mutated after construction.
///
/// # Examples
///
/// ```
/// use wordgrid::{CharGrid, Pos};
///
/// let grid = CharGrid::from_lines(&["AB", "CD"]).unwrap();
/// assert_eq!(grid.cell_count(), 4);
/// assert_eq!(grid.get(Pos::new(1, 0)), Some('C'));
/// assert_eq!(grid.get(Pos::new(2, 0)), None);
/// ```
#[derive(Debug, Clone)]
pub struct CharGrid {
    rows: u32,
    cols: u32,
    cells: Vec<char>,
}

impl CharGrid {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a grid from a matrix of characters.
    ///
    /// Every row must have the same non-zero length. Returns
    /// [`GridError::Empty`] for a grid with no rows or no columns,
    /// [`GridError::RaggedRow`] for rows of unequal length, and
    /// [`GridError::DimensionTooLarge`] if either dimension exceeds
    /// [`CharGrid::MAX_DIM`].
    pub fn new(rows: Vec<Vec<char>>) -> Result<Self, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };
        let cols = first.len();
        if cols == 0 {
            return Err(GridError::Empty);
        }
        if rows.len() > Self::MAX_DIM as usize {
            return Err(GridError::DimensionTooLarge {
                name: "rows",
                value: rows.len(),
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM as usize {
            return Err(GridError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row, line) in rows.iter().enumerate() {
            if line.len() != cols {
                return Err(GridError::RaggedRow {
                    row,
                    len: line.len(),
                    expected: cols,
                });
            }
            cells.extend_from_slice(line);
        }
        Ok(Self {
            rows: rows.len() as u32,
            cols: cols as u32,
            cells,
        })
    }

    /// Create a grid from string rows, one string per grid row.
    ///
    /// Each string contributes one character per cell, so all strings
    /// must have the same non-zero number of characters.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Result<Self, GridError> {
        Self::new(lines.iter().map(|l| l.as_ref().chars().collect()).collect())
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// The character stored at `pos`, or `None` if `pos` is out of
    /// bounds on either axis in either direction.
    pub fn get(&self, pos: Pos) -> Option<char> {
        if pos.row < 0 || pos.row >= self.rows as i32 || pos.col < 0 || pos.col >= self.cols as i32
        {
            return None;
        }
        Some(self.cells[(pos.row as usize) * (self.cols as usize) + pos.col as usize])
    }

    /// Row-major iterator over every cell position:
    /// `(0,0), (0,1), ..., (rows-1, cols-1)`.
    ///
    /// This is the canonical scan order of the top-level word query.
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let rows = self.rows as i32;
        let cols = self.cols as i32;
        (0..rows).flat_map(move |row| (0..cols).map(move |col| Pos::new(row, col)))
    }
}

impl fmt::Display for CharGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows as i32 {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.cols as i32 {
                if col > 0 {
                    write!(f, " ")?;
                }
                let idx = (row as usize) * (self.cols as usize) + col as usize;
                write!(f, "{}", self.cells[idx])?;
            }
        }
        Ok(())
    }
}
