//! Greedy and exhaustive word tracing over a character grid.

use crate::grid::CharGrid;
use crate::pos::Pos;
use smallvec::SmallVec;
use std::collections::HashSet;

/// Neighbour offsets in scan order: left, right, up, down.
const OFFSETS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Depth-first word search over a [`CharGrid`].
///
/// A word is *traced* by stepping between orthogonally adjacent cells,
/// consuming one character per step and never revisiting a cell within
/// one path. Two query variants are exposed:
///
/// - [`contains`](Self::contains) runs a greedy first-match descent:
///   at each step it commits to the first neighbour (in left, right,
///   up, down order) carrying the wanted character and never retries
///   siblings on failure, so it can miss words whose only valid
///   continuation is a later neighbour. Its cell scan also never
///   compares the start cell against the word's first character.
/// - [`contains_exhaustive`](Self::contains_exhaustive) backtracks
///   through every matching branch and answers true word existence.
///
/// # Examples
///
/// ```
/// use wordgrid::{CharGrid, WordSearcher};
///
/// let grid = CharGrid::from_lines(&["ABCE", "SFCS", "ADEE"]).unwrap();
/// let searcher = WordSearcher::new(grid);
/// assert!(searcher.contains("SEE"));
/// assert!(searcher.contains_exhaustive("SEE"));
/// assert!(!searcher.contains("ABCB"));
/// ```
#[derive(Debug, Clone)]
pub struct WordSearcher {
    grid: CharGrid,
}

impl WordSearcher {
    /// Create a searcher over the given grid.
    pub fn new(grid: CharGrid) -> Self {
        Self { grid }
    }

    /// The grid being searched.
    pub fn grid(&self) -> &CharGrid {
        &self.grid
    }

    /// The in-bounds orthogonal neighbours of `pos`, each paired with
    /// its stored character, in fixed order: left, right, up, down.
    ///
    /// Out-of-bounds directions are omitted (no wraparound), so corner
    /// cells have 2 entries and edge cells 3. The order decides which
    /// neighbour a greedy trace commits to when several carry the same
    /// character. For a `pos` outside the grid, only candidates that
    /// land in bounds are returned.
    pub fn neighbours(&self, pos: Pos) -> SmallVec<[(Pos, char); 4]> {
        let mut result = SmallVec::new();
        for (dr, dc) in OFFSETS {
            let next = Pos::new(pos.row + dr, pos.col + dc);
            if let Some(ch) = self.grid.get(next) {
                result.push((next, ch));
            }
        }
        result
    }

    /// Greedy depth-first descent matching `remaining` from `current`.
    ///
    /// `current` is the cell just arrived at; its character is assumed
    /// to have been accepted by the caller and is not re-checked here.
    /// If `remaining` is empty the whole word has been matched and the
    /// call returns `true` without touching `visited`. Otherwise
    /// `current` is marked visited, the neighbours are scanned in
    /// left, right, up, down order, and the descent **commits to the
    /// first** unvisited neighbour whose character equals
    /// `remaining[0]`: that branch's result is returned directly and
    /// sibling neighbours are never retried. No matching neighbour
    /// means `false`.
    ///
    /// `visited` accumulates every cell the descent marks and is not
    /// rolled back on failure, so a caller reusing one set across
    /// several starts will see earlier attempts constrain later ones.
    /// The first-match commit makes this trace incomplete: it can
    /// return `false` for a word that
    /// [`Self::contains_exhaustive`] finds.
    pub fn trace_first_match(
        &self,
        remaining: &[char],
        current: Pos,
        visited: &mut HashSet<Pos>,
    ) -> bool {
        let Some((&target, rest)) = remaining.split_first() else {
            return true;
        };
        visited.insert(current);
        for (next, ch) in self.neighbours(current) {
            if !visited.contains(&next) && ch == target {
                return self.trace_first_match(rest, next, visited);
            }
        }
        false
    }

    /// Whether the greedy trace finds `word` anywhere in the grid.
    ///
    /// An empty word is vacuously present. Otherwise the first
    /// character is stripped and [`Self::trace_first_match`] is
    /// invoked for every cell in row-major order, stopping at the
    /// first success. One visited set is shared across all start
    /// attempts of a single call; each call constructs its own set, so
    /// repeated calls are independent.
    ///
    /// Two quirks follow from this scheme:
    ///
    /// - the start cell's own character is never compared against
    ///   `word`'s first character, so any one-character word is
    ///   reported present in any grid;
    /// - a failed start attempt leaves its path marked, which can mask
    ///   an overlapping later attempt.
    ///
    /// Use [`contains_exhaustive`](Self::contains_exhaustive) for true
    /// existence semantics.
    pub fn contains(&self, word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();
        let Some((_, remaining)) = chars.split_first() else {
            return true;
        };
        let mut visited = HashSet::new();
        for start in self.grid.positions() {
            if self.trace_first_match(remaining, start, &mut visited) {
                return true;
            }
        }
        false
    }

    /// Whether `word` can be traced through the grid, trying every
    /// matching branch.
    ///
    /// An empty word is vacuously present. Otherwise every cell whose
    /// character equals `word`'s first character is tried as a start,
    /// in row-major order, with full backtracking over the rest of the
    /// word: each matching neighbour is explored in turn and unmarked
    /// again when its branch fails. Returns `true` iff some simple
    /// path of orthogonal steps spells the whole word.
    pub fn contains_exhaustive(&self, word: &str) -> bool {
        let chars: Vec<char> = word.chars().collect();
        let Some((&first, rest)) = chars.split_first() else {
            return true;
        };
        let mut visited = HashSet::new();
        for start in self.grid.positions() {
            if self.grid.get(start) == Some(first) {
                visited.insert(start);
                if self.trace_all_matches(rest, start, &mut visited) {
                    return true;
                }
                visited.remove(&start);
            }
        }
        false
    }

    /// Backtracking descent: try every unvisited matching neighbour,
    /// unmarking on failure.
    fn trace_all_matches(
        &self,
        remaining: &[char],
        current: Pos,
        visited: &mut HashSet<Pos>,
    ) -> bool {
        let Some((&target, rest)) = remaining.split_first() else {
            return true;
        };
        for (next, ch) in self.neighbours(current) {
            if ch == target && !visited.contains(&next) {
                visited.insert(next);
                if self.trace_all_matches(rest, next, visited) {
                    return true;
                }
                visited.remove(&next);
            }
        }
        false
    }
}
