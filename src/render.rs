//! Terminal presentation: the colored heat map, its legend, and the word table.
//!
//! Everything writes to a generic `Write` so the CLI can pass stdout and tests
//! can pass a `Vec<u8>`.

use crate::finder::FindResult;
use crate::grid::Grid;
use crate::heatmap::{HeatLevel, HeatMap};
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io::{self, Write};

/// Legend rows: color, color name, level label.
const LEGEND: [(Color, &str, &str); 6] = [
    (Color::Cyan, "Aqua", "1"),
    (Color::Blue, "Blue", "2"),
    (Color::Green, "Green", "3"),
    (Color::Yellow, "Yellow", "4"),
    (Color::Red, "Red", "5"),
    (Color::Magenta, "Purple", "6+"),
];

const SINGLE_COLOR: Color = Color::Cyan;

/// Color for a heat level, or `None` to leave the cell uncolored.
#[must_use]
pub fn heat_color(level: HeatLevel, single_color: bool) -> Option<Color> {
    if level == HeatLevel::None {
        return None;
    }
    if single_color {
        return Some(SINGLE_COLOR);
    }
    Some(match level {
        HeatLevel::None | HeatLevel::One => Color::Cyan,
        HeatLevel::Two => Color::Blue,
        HeatLevel::Three => Color::Green,
        HeatLevel::Four => Color::Yellow,
        HeatLevel::Five => Color::Red,
        HeatLevel::SixPlus => Color::Magenta,
    })
}

/// Print the grid one row per line, each letter colored by its heat.
pub fn write_heatmap<W: Write>(out: &mut W, grid: &Grid, heat: &HeatMap, single_color: bool) -> io::Result<()> {
    for (row_idx, row) in grid.rows().enumerate() {
        for (col_idx, c) in row.iter().enumerate() {
            let index = row_idx * grid.width() + col_idx;
            match heat_color(heat.level(index), single_color) {
                Some(color) => queue!(out, SetForegroundColor(color), Print(c), ResetColor)?,
                None => queue!(out, Print(c))?,
            }
        }
        queue!(out, Print("\n"))?;
    }
    out.flush()
}

/// Print the color legend. In single-color mode there is nothing to explain.
pub fn write_legend<W: Write>(out: &mut W, single_color: bool) -> io::Result<()> {
    if single_color {
        return Ok(());
    }
    queue!(out, SetForegroundColor(Color::Yellow), Print("COLORS\n"), ResetColor)?;
    queue!(out, Print(format!("{:<8} | {:>5}\n", "Color", "Level")))?;
    queue!(out, Print(format!("{:-<8}-+-{:-<5}\n", "", "")))?;
    for (color, name, level) in LEGEND {
        queue!(
            out,
            SetForegroundColor(color),
            Print(format!("{name:<8}")),
            ResetColor,
            Print(format!(" | {level:>5}\n"))
        )?;
    }
    out.flush()
}

/// Table lines (header, rule, one row per result) without any color codes.
///
/// Positions are 1-based `row:column`.
#[must_use]
pub fn word_table_lines(grid: &Grid, results: &[FindResult]) -> Vec<String> {
    let positions: Vec<String> = results
        .iter()
        .map(|r| {
            let (row, col) = grid.row_col(r.position);
            format!("{row}:{col}")
        })
        .collect();
    let word_w = results.iter().map(|r| r.word.chars().count()).chain([4]).max().unwrap_or(4);
    let pos_w = positions.iter().map(String::len).chain([8]).max().unwrap_or(8);

    let mut lines = Vec::with_capacity(results.len() + 2);
    lines.push(format!("{:<word_w$} | {:<pos_w$} | {}", "Word", "Position", "Direction"));
    lines.push(format!("{:-<word_w$}-+-{:-<pos_w$}-+-{:-<9}", "", "", ""));
    for (r, pos) in results.iter().zip(&positions) {
        lines.push(format!("{:<word_w$} | {pos:<pos_w$} | {}", r.word, r.direction));
    }
    lines
}

pub fn write_word_table<W: Write>(out: &mut W, grid: &Grid, results: &[FindResult]) -> io::Result<()> {
    queue!(out, SetForegroundColor(Color::Yellow), Print("WORDS\n"), ResetColor)?;
    for line in word_table_lines(grid, results) {
        queue!(out, Print(line), Print("\n"))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;
    use crate::heatmap::HeatMode;

    fn grid() -> Grid {
        Grid::new("abcdefghi".chars().collect(), 3, 3).unwrap()
    }

    #[test]
    fn test_heat_color() {
        assert_eq!(heat_color(HeatLevel::None, false), None);
        assert_eq!(heat_color(HeatLevel::None, true), None);
        assert_eq!(heat_color(HeatLevel::One, false), Some(Color::Cyan));
        assert_eq!(heat_color(HeatLevel::Five, false), Some(Color::Red));
        assert_eq!(heat_color(HeatLevel::SixPlus, false), Some(Color::Magenta));
        assert_eq!(heat_color(HeatLevel::SixPlus, true), Some(SINGLE_COLOR));
    }

    #[test]
    fn test_word_table_lines() {
        let results = vec![
            FindResult::new(0, Direction::Right, "abc"),
            FindResult::new(5, Direction::DownLeft, "fh"),
        ];
        let lines = word_table_lines(&grid(), &results);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Word | Position | Direction");
        assert_eq!(lines[1], "-----+----------+----------");
        assert_eq!(lines[2], "abc  | 1:1      | Right");
        assert_eq!(lines[3], "fh   | 2:3      | DownLeft");
    }

    #[test]
    fn test_write_heatmap_keeps_letters_in_rows() {
        let g = grid();
        let results = vec![FindResult::new(0, Direction::Right, "abc")];
        let heat = HeatMap::build(&g, &results, false, HeatMode::Full);
        let mut out = Vec::new();
        write_heatmap(&mut out, &g, &heat, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 3);
        assert!(text.ends_with("ghi\n"), "uncolored row should print plainly: {text:?}");
        assert!(text.contains("\u{1b}["), "hit cells should carry color codes");
    }

    #[test]
    fn test_write_legend() {
        let mut out = Vec::new();
        write_legend(&mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        for name in ["COLORS", "Aqua", "Blue", "Green", "Yellow", "Red", "Purple", "6+"] {
            assert!(text.contains(name), "legend should mention {name}");
        }

        let mut out = Vec::new();
        write_legend(&mut out, true).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_word_table() {
        let mut out = Vec::new();
        write_word_table(&mut out, &grid(), &[FindResult::new(4, Direction::Up, "eb")]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("WORDS"));
        assert!(text.contains("eb   | 2:2      | Up"));
    }
}
