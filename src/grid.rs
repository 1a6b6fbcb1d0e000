//! `grid`: the rectangular letter grid a search runs over.
//!
//! A [`Grid`] is a flat, row-major `Vec<char>` plus its width and height. The
//! constructor is the only place dimensions are validated; once a `Grid`
//! exists, `cells.len() == width * height` with both dimensions positive, so
//! the search and heat-map code never re-check it.
//!
//! [`Grid::step`] is the single definition of "the next cell" in a direction,
//! shared by the search walk and heat-map aggregation so the two can never
//! disagree about wrapping.

use crate::coords::{in_bounds, index_to_pos, pos_to_index};
use crate::direction::Direction;
use crate::errors::FinderError;
use crate::word_list::lowercase_letter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<char>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Build a grid from its cells and signed dimensions.
    ///
    /// Dimensions are signed so that user input such as `0x3` or `-2x2` is
    /// reported as `InvalidDimensions` rather than failing to parse.
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` if either dimension is not positive or if
    /// `width * height != cells.len()`.
    pub fn new(cells: Vec<char>, width: i64, height: i64) -> Result<Grid, FinderError> {
        let invalid = || FinderError::InvalidDimensions { width, height, len: cells.len() };
        if width <= 0 || height <= 0 {
            return Err(invalid());
        }
        let (w, h) = (
            usize::try_from(width).map_err(|_| invalid())?,
            usize::try_from(height).map_err(|_| invalid())?,
        );
        if w.checked_mul(h) != Some(cells.len()) {
            return Err(invalid());
        }
        Ok(Grid { cells, width: w, height: h })
    }

    /// Build a grid from user-typed characters: whitespace is dropped and
    /// letters are lowercased. With no size the grid is a single row.
    ///
    /// Each typed letter fills exactly one cell, even when its lowercase form
    /// is longer (`'İ'` becomes `'i'`).
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` as for [`Grid::new`] (an empty single row included).
    pub fn from_text(text: &str, size: Option<(i64, i64)>) -> Result<Grid, FinderError> {
        let cells: Vec<char> = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(lowercase_letter)
            .collect();
        let (width, height) = size.unwrap_or((cells.len() as i64, 1));
        Grid::new(cells, width, height)
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<char> {
        self.cells.get(index).copied()
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks(self.width)
    }

    /// The index one cell away from `index` in `direction`, or `None` if the
    /// step leaves the grid.
    ///
    /// - Up/Down and the diagonals move by coordinates and never wrap.
    /// - Left/Right without `wrap` stop at the row edge.
    /// - Left/Right with `wrap` move by linear index modulo the grid length, so
    ///   the end of one row continues at the start of the next, and the last
    ///   cell continues at cell 0.
    #[must_use]
    pub fn step(&self, index: usize, direction: Direction, wrap: bool) -> Option<usize> {
        let len = self.cells.len();
        if direction.is_horizontal() {
            let (dx, _) = direction.delta();
            if wrap {
                return Some((index as isize + dx).rem_euclid(len as isize) as usize);
            }
            let next = index.checked_add_signed(dx).filter(|n| *n < len)?;
            // row crossing counts as leaving the grid
            return (next / self.width == index / self.width).then_some(next);
        }

        let (x, y) = index_to_pos(self.width, index);
        let (dx, dy) = direction.delta();
        let (nx, ny) = (x + dx, y + dy);
        in_bounds(nx, ny, self.width, self.height).then(|| pos_to_index(self.width, nx, ny))
    }

    /// 1-based `(row, column)` of a linear index, for display.
    #[must_use]
    pub fn row_col(&self, index: usize) -> (usize, usize) {
        (index / self.width + 1, index % self.width + 1)
    }
}

/// Parse a `WIDTHxHEIGHT` size argument such as `4x3`.
///
/// Only the format is checked here; zero or negative values parse and are
/// rejected later by [`Grid::new`].
///
/// # Errors
///
/// `InvalidSize` if the text is not two integers separated by `x`.
pub fn parse_size(input: &str) -> Result<(i64, i64), FinderError> {
    let invalid = || FinderError::InvalidSize { input: input.to_string() };
    let (w, h) = input.trim().split_once(|c: char| c == 'x' || c == 'X').ok_or_else(invalid)?;
    let width = w.trim().parse::<i64>().map_err(|_| invalid())?;
    let height = h.trim().parse::<i64>().map_err(|_| invalid())?;
    Ok((width, height))
}
