//! `bench_local.rs`: quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing of grid searches on *your* machine.
//! - Loads the word list once, then runs each case several times and reports the median.
//! - Grids are filled by writing the word list end to end, so every case has matches.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release -- words.txt`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- words.txt -r 5`
//! - See all flags:                  `cargo run --bin bench_local -- --help`
//!
//! NOTES
//! -----
//! - This is *not* Criterion. It's quick and convenient, not statistically rigorous.
//! - One warm-up run per case is done (not included in timing).
//! - We report the *median* over repeats (more robust than mean for small _N_).

use clap::Parser;
use std::hint::black_box;
use std::time::Instant;
use word_finder::direction::{Direction, DirectionSet};
use word_finder::finder::WordFinder;
use word_finder::grid::Grid;
use word_finder::word_list::WordList;

/// Simple local benchmark runner: load the word list once, time several grid sizes.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the word list file (one word per line)
    #[arg(default_value = "words.txt")]
    word_list: String,

    /// Minimum number of letters per word
    #[arg(short = 'm', long, default_value_t = 2)]
    min_letter: usize,

    /// Number of repeats per case (use >1 to reduce noise; median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 1)]
    num_repeats: usize,
}

/// A benchmark case: grid dimensions, wrap flag, and excluded directions.
#[derive(Clone)]
struct Case {
    width: usize,
    height: usize,
    wrap: bool,
    exclude: &'static [Direction],
}

impl Case {
    fn name(&self) -> String {
        let mut name = format!("{}x{}", self.width, self.height);
        if self.wrap {
            name.push_str(" wrap");
        }
        if !self.exclude.is_empty() {
            name.push_str(&format!(" -{}", self.exclude.len()));
        }
        name
    }
}

/// Edit/add new cases here.
fn get_cases() -> Vec<Case> {
    vec![
        Case { width: 10, height: 10, wrap: false, exclude: &[] },
        Case { width: 10, height: 10, wrap: true, exclude: &[] },
        Case { width: 50, height: 50, wrap: false, exclude: &[] },
        Case { width: 50, height: 50, wrap: true, exclude: &[] },
        Case {
            width: 50,
            height: 50,
            wrap: false,
            exclude: &[Direction::Left, Direction::Up, Direction::UpLeft, Direction::UpRight],
        },
        Case { width: 200, height: 200, wrap: false, exclude: &[] },
    ]
}

/// Fill `len` cells by writing the words end to end, cycling as needed.
fn fill_cells(words: &WordList, len: usize) -> Vec<char> {
    words.iter().flat_map(|w| w.chars()).cycle().take(len).collect()
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(|a, b| a.total_cmp(b));
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

const MAX_NAME_LEN: usize = 20;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load the word list once. This I/O is *not* included in per-case timing.
    eprintln!("Loading word list from: {}", cli.word_list);
    let t_load = Instant::now();
    let words = WordList::load_from_path(&cli.word_list, cli.min_letter)?;
    eprintln!("Loaded {} words in {:.3}s", words.len(), t_load.elapsed().as_secs_f64());

    let cases = get_cases();
    let finder = WordFinder::new(words);
    let mut summary: Vec<(String, f64, usize)> = Vec::with_capacity(cases.len());

    for (idx, case) in cases.iter().enumerate() {
        let name = case.name();
        eprintln!("\n[{:02}] {}", idx + 1, name);

        let cells = fill_cells(finder.words(), case.width * case.height);
        let grid = Grid::new(cells, case.width as i64, case.height as i64)?;
        let exclude: DirectionSet = case.exclude.iter().copied().collect();

        let _warmup = finder.search(&grid, case.wrap, &exclude);

        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last_count = 0;
        for rep in 0..cli.num_repeats {
            let t_search = Instant::now();
            let results = finder.search(black_box(&grid), case.wrap, &exclude);
            let secs = t_search.elapsed().as_secs_f64();

            last_count = black_box(results.len());
            times.push(secs);
            eprintln!("  run {:>2}/{:>2}: {:.3}s ({} results)", rep + 1, cli.num_repeats, secs, last_count);
        }

        let med = median(times);
        eprintln!(
            "  → median {:.3}s over {} run(s); last run produced {} {}",
            med,
            cli.num_repeats,
            last_count,
            pluralizer(last_count, "result".into(), None)
        );
        summary.push((name, med, last_count));
    }

    eprintln!("\n==== Summary ====");
    eprintln!("{:<MAX_NAME_LEN$} | {:>10} | {:>9}", "case", "median (s)", "# results");
    eprintln!("{:-<MAX_NAME_LEN$}-+-{:-<10}-+-{:-<9}", "", "", "");
    for (name, med, count) in &summary {
        eprintln!("{name:<MAX_NAME_LEN$} | {med:>10.3} | {count:>9}");
    }

    Ok(())
}

fn pluralizer(count: usize, singular: String, plural: Option<String>) -> String {
    if count == 1 {
        singular
    } else {
        plural.unwrap_or_else(|| singular + "s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralizer() {
        assert_eq!(pluralizer(0, "result".into(), None), "results");
        assert_eq!(pluralizer(1, "result".into(), None), "result");
        assert_eq!(pluralizer(2, "matrix".into(), Some("matrices".into())), "matrices");
        assert_eq!(pluralizer(1, "matrix".into(), Some("matrices".into())), "matrix");
    }

    #[test]
    fn test_median() {
        assert_eq!(median(vec![]), 0.0);
        assert_eq!(median(vec![3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(vec![4.0, 1.0, 2.0, 3.0]), 2.5);
    }

    #[test]
    fn test_fill_cells_cycles_words() {
        let words = WordList::from_words(["cat", "at"]).unwrap();
        assert_eq!(fill_cells(&words, 7).into_iter().collect::<String>(), "catatca");
    }

    #[test]
    fn test_case_names() {
        let case = Case { width: 5, height: 4, wrap: true, exclude: &[Direction::Up] };
        assert_eq!(case.name(), "5x4 wrap -1");
    }
}
