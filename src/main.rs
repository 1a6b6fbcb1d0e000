use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use word_finder::direction::DirectionSet;
use word_finder::errors::FinderError;
use word_finder::finder::{self, WordFinder};
use word_finder::grid::{self, Grid};
use word_finder::heatmap::{HeatMap, HeatMode};
use word_finder::render;
use word_finder::word_list::WordList;

/// Word-search solver: finds every word from a word list in a grid of letters
#[derive(Parser, Debug)]
#[command(author, version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"), about, long_about = None)]
struct Cli {
    /// The grid letters, row by row (whitespace is ignored). Prompted for if omitted
    characters: Option<String>,

    /// Grid size as WIDTHxHEIGHT (default: a single row of all the letters)
    size: Option<String>,

    /// Path to the word list file (one word per line)
    #[arg(default_value = "words.txt")]
    word_list_path: String,

    /// Print extra information (word count, size, result count)
    #[arg(short = 'V', long)]
    verbose: bool,

    /// Minimum number of letters a word needs to be searched for
    #[arg(short = 'm', long, default_value_t = 2)]
    min_letter: usize,

    /// Only highlight the first letter of each match
    #[arg(short = 'M', long)]
    minimal: bool,

    /// Highlight every match in the same color
    #[arg(short = 's', long)]
    single_color: bool,

    /// Let Left/Right matches continue from the end of one row into the next
    #[arg(short = 'w', long)]
    wrap: bool,

    /// Directions to skip (e.g. "up,upleft"); may be repeated
    #[arg(short = 'x', long = "exclude", value_name = "DIRECTIONS")]
    exclude: Vec<String>,

    /// Report only the first match of each word
    #[arg(short = '1', long)]
    first: bool,
}

/// Entry point of the word-finder CLI.
///
/// Delegates to [`try_main`], printing any error with its code and help text
/// before exiting with a failure status.
fn main() -> ExitCode {
    let cli = Cli::parse();

    word_finder::log::init_logger(cli.verbose);

    if let Err(e) = try_main(&cli) {
        eprintln!("Error: {}", e.display_detailed());
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic.
///
/// Steps:
/// 1. Validate the exclusion list and the size argument.
/// 2. Load the word list.
/// 3. Read the grid letters (from the arguments or stdin) and build the grid.
/// 4. Search, then print the heat map, the legend, and the word table.
fn try_main(cli: &Cli) -> Result<(), FinderError> {
    // Argument problems are reported before any file is touched
    let exclude = DirectionSet::parse_tokens(&cli.exclude)?;
    let size = cli.size.as_deref().map(grid::parse_size).transpose()?;

    let t_load = Instant::now();
    let words = WordList::load_from_path(&cli.word_list_path, cli.min_letter)?;
    if cli.verbose {
        eprintln!(
            "Parsed {} word(s) from {} in {:.3}s",
            words.len(),
            cli.word_list_path,
            t_load.elapsed().as_secs_f64()
        );
    }
    let engine = WordFinder::new(words);

    let characters = match &cli.characters {
        Some(c) => c.clone(),
        None => prompt_characters()?,
    };
    let grid = Grid::from_text(&characters, size)?;
    if cli.verbose {
        eprintln!("Size: {} wide x {} high", grid.width(), grid.height());
        eprintln!("Characters: {}", grid.cells().iter().collect::<String>());
    }

    let mut results = engine.search(&grid, cli.wrap, &exclude);
    if cli.first {
        results = finder::first_per_word(results);
    } else {
        finder::sort_by_word(&mut results);
    }

    let mut stdout = io::stdout().lock();
    if results.is_empty() {
        writeln!(stdout, "No word(s) found")?;
        return Ok(());
    }
    if cli.verbose {
        eprintln!("{} Result(s)", results.len());
    }

    let mode = if cli.minimal { HeatMode::Minimal } else { HeatMode::Full };
    let heat = HeatMap::build(&grid, &results, cli.wrap, mode);

    render::write_heatmap(&mut stdout, &grid, &heat, cli.single_color)?;
    writeln!(stdout)?;
    render::write_legend(&mut stdout, cli.single_color)?;
    writeln!(stdout)?;
    render::write_word_table(&mut stdout, &grid, &results)?;

    Ok(())
}

/// Ask for the grid letters on stdin.
fn prompt_characters() -> Result<String, FinderError> {
    print!("Characters: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
