//! The grid search engine: finds every occurrence of every word in a grid.
//!
//! # Algorithm
//!
//! For each word, every cell holding the word's first letter is tried as an
//! anchor, and from each anchor every direction not in the exclusion set is
//! walked one cell at a time (see [`Grid::step`] for what "one cell" means
//! under wrapping). A walk fails on the first mismatching cell. It succeeds
//! once every letter has matched, even if the last letter sits on the edge of
//! the grid and no further step is possible.
//!
//! # Ordering
//!
//! Results come out word by word (in word-list order), then by anchor index
//! ascending, then in [`Direction::ALL`] order. Use [`sort_by_word`] for display
//! and [`first_per_word`] to keep a single occurrence of each word.
//!
//! # Examples
//!
//! ```
//! use word_finder::direction::{Direction, DirectionSet};
//! use word_finder::finder::{FindResult, WordFinder};
//! use word_finder::grid::Grid;
//!
//! let finder = WordFinder::from_text("at\nta", 2)?;
//! let grid = Grid::from_text("xatx", None)?;
//! let results = finder.search(&grid, false, &DirectionSet::new());
//!
//! assert_eq!(results, vec![
//!     FindResult::new(1, Direction::Right, "at"),
//!     FindResult::new(2, Direction::Left, "ta"),
//! ]);
//! # Ok::<(), word_finder::errors::FinderError>(())
//! ```

use crate::direction::{Direction, DirectionSet};
use crate::errors::FinderError;
use crate::grid::Grid;
use crate::word_list::WordList;
use instant::Instant;
use log::debug;
use std::collections::HashSet;

/// One occurrence of a word in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FindResult {
    /// Linear index of the word's first letter.
    pub position: usize,
    pub direction: Direction,
    pub word: String,
}

impl FindResult {
    #[must_use]
    pub fn new(position: usize, direction: Direction, word: impl Into<String>) -> Self {
        Self { position, direction, word: word.into() }
    }

    /// Every cell index the word occupies, in reading order.
    ///
    /// `wrap` must be the value the result was found with.
    #[must_use]
    pub fn cells(&self, grid: &Grid, wrap: bool) -> Vec<usize> {
        walk_cells(grid, self.position, self.direction, wrap, self.word.chars().count())
    }
}

/// Holds the normalized words and searches grids for them.
///
/// Immutable after construction, so one finder can serve any number of
/// searches.
#[derive(Debug, Clone)]
pub struct WordFinder {
    words: WordList,
    // cached per word to avoid re-collecting chars on every anchor
    chars: Vec<Vec<char>>,
}

impl WordFinder {
    #[must_use]
    pub fn new(words: WordList) -> Self {
        let chars = words.iter().map(|w| w.chars().collect()).collect();
        Self { words, chars }
    }

    /// Normalize raw word-list text and build a finder from it.
    ///
    /// # Errors
    ///
    /// `EmptyInput` as for [`WordList::parse_from_str`].
    pub fn from_text(raw: &str, min_letter: usize) -> Result<Self, FinderError> {
        Ok(Self::new(WordList::parse_from_str(raw, min_letter)?))
    }

    #[must_use]
    pub fn words(&self) -> &WordList {
        &self.words
    }

    /// Find every occurrence of every word in `grid`.
    ///
    /// Directions in `exclude` are never tried. With `wrap`, Left and Right
    /// continue across row ends by linear index; other directions never wrap.
    #[must_use]
    pub fn search(&self, grid: &Grid, wrap: bool, exclude: &DirectionSet) -> Vec<FindResult> {
        let started = Instant::now();
        let directions: Vec<Direction> = Direction::ALL.into_iter().filter(|d| !exclude.contains(*d)).collect();
        let mut results = Vec::new();

        for (word, chars) in self.words.iter().zip(&self.chars) {
            let Some(&first) = chars.first() else {
                continue;
            };
            for (anchor, _) in grid.cells().iter().enumerate().filter(|(_, c)| **c == first) {
                for &direction in &directions {
                    if matches_at(grid, anchor, direction, wrap, chars) {
                        results.push(FindResult::new(anchor, direction, word.as_str()));
                    }
                }
            }
        }

        debug!(
            "searched {}x{} grid for {} word(s) (wrap={wrap}, excluded={}): {} result(s) in {:.3}s",
            grid.width(),
            grid.height(),
            self.words.len(),
            exclude.len(),
            results.len(),
            started.elapsed().as_secs_f64()
        );

        results
    }
}

/// Walk from `anchor` in `direction`, comparing cells against `word`.
///
/// `matched` counts letters already matched. When the next step would leave
/// the grid the walk succeeds only if the whole word has been matched.
fn matches_at(grid: &Grid, anchor: usize, direction: Direction, wrap: bool, word: &[char]) -> bool {
    let cells = grid.cells();
    let mut index = anchor;
    let mut matched = 0;
    loop {
        if matched >= word.len() {
            return true;
        }
        if cells[index] != word[matched] {
            return false;
        }
        matched += 1;
        match grid.step(index, direction, wrap) {
            Some(next) => index = next,
            None => return matched >= word.len(),
        }
    }
}

/// The `count` cells visited from `start` in `direction`, stopping early if
/// the walk would leave the grid.
pub(crate) fn walk_cells(grid: &Grid, start: usize, direction: Direction, wrap: bool, count: usize) -> Vec<usize> {
    let mut cells = Vec::with_capacity(count);
    let mut index = Some(start);
    while let Some(i) = index {
        if cells.len() == count {
            break;
        }
        cells.push(i);
        index = grid.step(i, direction, wrap);
    }
    cells
}

/// Stable sort by word, keeping engine order among equal words.
pub fn sort_by_word(results: &mut [FindResult]) {
    results.sort_by(|a, b| a.word.cmp(&b.word));
}

/// Sort by word and keep only the first result for each distinct word.
///
/// "First" means first in engine order, not the top-left-most occurrence.
#[must_use]
pub fn first_per_word(mut results: Vec<FindResult>) -> Vec<FindResult> {
    sort_by_word(&mut results);
    let mut seen = HashSet::new();
    results.retain(|r| seen.insert(r.word.clone()));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finder(words: &[&str]) -> WordFinder {
        WordFinder::new(WordList::from_words(words.iter().copied()).unwrap())
    }

    fn grid(text: &str, width: i64, height: i64) -> Grid {
        Grid::new(text.chars().collect(), width, height).unwrap()
    }

    fn none() -> DirectionSet {
        DirectionSet::new()
    }

    #[test]
    fn test_single_row_right() {
        let results = finder(&["at"]).search(&grid("xatx", 4, 1), false, &none());
        assert_eq!(results, vec![FindResult::new(1, Direction::Right, "at")]);
    }

    #[test]
    fn test_no_contiguous_match() {
        let results = finder(&["cdg"]).search(&grid("abcdefghi", 3, 3), false, &none());
        assert!(results.is_empty());
    }

    #[test]
    fn test_every_direction_from_center() {
        // each word starts at the center 'e' and runs to an edge cell
        let g = grid("abcdefghi", 3, 3);
        let cases = [
            ("ef", Direction::Right),
            ("ed", Direction::Left),
            ("eb", Direction::Up),
            ("eh", Direction::Down),
            ("eg", Direction::DownLeft),
            ("ei", Direction::DownRight),
            ("ea", Direction::UpLeft),
            ("ec", Direction::UpRight),
        ];
        for (word, direction) in cases {
            let results = finder(&[word]).search(&g, false, &none());
            assert_eq!(results, vec![FindResult::new(4, direction, word)], "word {word}");
        }
    }

    #[test]
    fn test_word_ending_on_edge_succeeds() {
        // "ghi" ends exactly on the bottom-right corner
        let results = finder(&["ghi", "aei"]).search(&grid("abcdefghi", 3, 3), false, &none());
        assert_eq!(
            results,
            vec![FindResult::new(6, Direction::Right, "ghi"), FindResult::new(0, Direction::DownRight, "aei")]
        );
    }

    #[test]
    fn test_word_running_off_edge_fails() {
        let results = finder(&["hij", "ghia"]).search(&grid("abcdefghi", 3, 3), false, &none());
        assert!(results.is_empty());
    }

    #[test]
    fn test_wrap_continues_into_next_row() {
        let g = grid("abcdefghi", 3, 3);
        assert_eq!(finder(&["cde"]).search(&g, true, &none()), vec![FindResult::new(2, Direction::Right, "cde")]);
        assert_eq!(finder(&["dcb"]).search(&g, true, &none()), vec![FindResult::new(3, Direction::Left, "dcb")]);
        assert!(finder(&["cde", "dcb"]).search(&g, false, &none()).is_empty());
    }

    #[test]
    fn test_wrap_from_last_cell_to_first() {
        let g = grid("cat", 3, 1);
        assert_eq!(finder(&["tc"]).search(&g, true, &none()), vec![FindResult::new(2, Direction::Right, "tc")]);
        assert!(finder(&["tc"]).search(&g, false, &none()).is_empty());
    }

    #[test]
    fn test_wrap_does_not_affect_vertical_or_diagonal() {
        let g = grid("abcdefghi", 3, 3);
        // "ga" would need Down to wrap from the bottom row back to the top
        assert!(finder(&["ga"]).search(&g, true, &none()).is_empty());
        assert_eq!(finder(&["ad"]).search(&g, true, &none()), vec![FindResult::new(0, Direction::Down, "ad")]);
    }

    #[test]
    fn test_exclusion_skips_direction() {
        let excluded: DirectionSet = [Direction::Right].into_iter().collect();
        let results = finder(&["at"]).search(&grid("xatx", 4, 1), false, &excluded);
        assert!(results.is_empty());
    }

    #[test]
    fn test_same_anchor_many_directions() {
        // single-letter words match in every direction from the same anchor
        let results = finder(&["e"]).search(&grid("abcdefghi", 3, 3), false, &none());
        assert_eq!(results.len(), 8);
        assert!(results.iter().all(|r| r.position == 4));
        let directions: Vec<_> = results.iter().map(|r| r.direction).collect();
        assert_eq!(directions, Direction::ALL.to_vec());
    }

    #[test]
    fn test_emission_order_word_then_anchor_then_direction() {
        let results = finder(&["ba", "ab"]).search(&grid("abab", 4, 1), false, &none());
        assert_eq!(
            results,
            vec![
                FindResult::new(1, Direction::Right, "ba"),
                FindResult::new(1, Direction::Left, "ba"),
                FindResult::new(3, Direction::Left, "ba"),
                FindResult::new(0, Direction::Right, "ab"),
                FindResult::new(2, Direction::Right, "ab"),
                FindResult::new(2, Direction::Left, "ab"),
            ]
        );
    }

    #[test]
    fn test_first_per_word() {
        let results = finder(&["ba", "ab"]).search(&grid("abab", 4, 1), false, &none());
        assert_eq!(
            first_per_word(results),
            vec![FindResult::new(0, Direction::Right, "ab"), FindResult::new(1, Direction::Right, "ba")]
        );
    }

    #[test]
    fn test_result_cells() {
        let g = grid("abcdefghi", 3, 3);
        assert_eq!(FindResult::new(2, Direction::Right, "cde").cells(&g, true), vec![2, 3, 4]);
        assert_eq!(FindResult::new(8, Direction::UpLeft, "iea").cells(&g, false), vec![8, 4, 0]);
    }

    #[test]
    fn test_from_text_empty() {
        assert!(matches!(WordFinder::from_text("", 2), Err(FinderError::EmptyInput)));
    }
}
