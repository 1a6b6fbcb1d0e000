//! Per-cell overlap counts derived from search results.

use crate::finder::{walk_cells, FindResult};
use crate::grid::Grid;

/// How much of each match is counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeatMode {
    /// Every letter of every match.
    #[default]
    Full,
    /// Only the first letter of each match.
    Minimal,
}

/// Bucketed heat, as shown in the color legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HeatLevel {
    None,
    One,
    Two,
    Three,
    Four,
    Five,
    SixPlus,
}

impl HeatLevel {
    #[must_use]
    pub fn from_count(count: u32) -> Self {
        match count {
            0 => HeatLevel::None,
            1 => HeatLevel::One,
            2 => HeatLevel::Two,
            3 => HeatLevel::Three,
            4 => HeatLevel::Four,
            5 => HeatLevel::Five,
            _ => HeatLevel::SixPlus,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatMap {
    counts: Vec<u32>,
    width: usize,
}

impl HeatMap {
    /// Count, for every cell, how many results cover it.
    ///
    /// `wrap` must match the search that produced `results`, since Left/Right
    /// results found with wrapping continue into the next row.
    #[must_use]
    pub fn build(grid: &Grid, results: &[FindResult], wrap: bool, mode: HeatMode) -> Self {
        let mut counts = vec![0u32; grid.len()];
        for result in results {
            let len = match mode {
                HeatMode::Full => result.word.chars().count(),
                HeatMode::Minimal => 1,
            };
            for index in walk_cells(grid, result.position, result.direction, wrap, len) {
                counts[index] += 1;
            }
        }
        HeatMap { counts, width: grid.width() }
    }

    #[must_use]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    #[must_use]
    pub fn count(&self, index: usize) -> u32 {
        self.counts.get(index).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn level(&self, index: usize) -> HeatLevel {
        HeatLevel::from_count(self.count(index))
    }

    #[must_use]
    pub fn max(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u32]> {
        self.counts.chunks(self.width)
    }
}
