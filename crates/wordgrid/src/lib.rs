//! Word tracing over 2-D character grids.
//!
//! This crate answers one question: can a word be traced as a path of
//! orthogonally adjacent cells in a character grid, using no cell more
//! than once? [`CharGrid`] holds the immutable board and
//! [`WordSearcher`] runs the depth-first trace.
//!
//! Two query variants are exposed. [`WordSearcher::contains`] is a
//! greedy first-match descent: at each step it commits to the first
//! neighbour carrying the wanted character and never revisits that
//! choice, so it can miss words a full search would find (and its
//! row-major cell scan never checks the start cell's own character).
//! [`WordSearcher::contains_exhaustive`] backtracks through every
//! matching branch and answers true word existence.
//!
//! # Quick start
//!
//! ```
//! use wordgrid::{CharGrid, WordSearcher};
//!
//! let grid = CharGrid::from_lines(&["ABCE", "SFCS", "ADEE"]).unwrap();
//! let searcher = WordSearcher::new(grid);
//! assert!(searcher.contains("SEE"));
//! assert!(searcher.contains_exhaustive("SEE"));
//! assert!(!searcher.contains_exhaustive("ABCB"));
//! ```
//!
//! The two variants disagree exactly where the greedy commit loses:
//!
//! ```
//! use wordgrid::{CharGrid, WordSearcher};
//!
//! // "ABC" runs A(0,1) -> B(0,0) -> C(1,0), but the greedy trace
//! // has already consumed B(0,0) by the time it reaches the A.
//! let searcher = WordSearcher::new(CharGrid::from_lines(&["BAB", "CXX"]).unwrap());
//! assert!(!searcher.contains("ABC"));
//! assert!(searcher.contains_exhaustive("ABC"));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod pos;
pub mod search;

pub use error::GridError;
pub use grid::CharGrid;
pub use pos::Pos;
pub use search::WordSearcher;
