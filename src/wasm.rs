use crate::direction::DirectionSet;
use crate::errors::FinderError;
use crate::finder::{self, WordFinder};
use crate::grid::Grid;
use crate::heatmap::{HeatMap, HeatMode};
use crate::log::init_logger;
use crate::word_list::{lowercase_letter, WordList};
use wasm_bindgen::prelude::*;

use serde_wasm_bindgen::to_value;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "E001", "WASM002")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<FinderError> for WasmError {
    fn from(e: FinderError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            details: e.details().to_string(),
            help: e.help(),
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {}", help));
        }

        js_sys::Error::new(&msg).into()
    }
}

fn serialization_error(what: &str, e: serde_wasm_bindgen::Error) -> JsValue {
    WasmError {
        code: "WASM002".to_string(),
        message: format!("serialization failed: {e}"),
        description: format!("Failed to serialize {what}"),
        details: format!("The {what} could not be converted to JavaScript format."),
        help: Some("This is an internal error. Please report this issue.".to_string()),
    }
    .into()
}

fn string_array(value: JsValue, param: &str) -> Result<Vec<String>, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| {
        WasmError {
            code: "WASM001".to_string(),
            message: format!("{param} must be string[]: {e}"),
            description: "Invalid argument format".to_string(),
            details: format!("The {param} parameter must be a JavaScript array of strings."),
            help: Some("Ensure you're passing a valid string array, e.g., ['cat', 'dog', 'fish']".to_string()),
        }
        .into()
    })
}

/// Initialize panic reporting and logging.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized");
}

#[derive(serde::Serialize)]
struct WasmFindResult {
    word: String,
    /// 0-based linear index of the first letter
    position: usize,
    /// 1-based
    row: usize,
    /// 1-based
    column: usize,
    direction: String,
}

#[derive(serde::Serialize)]
struct WasmSearchResult {
    results: Vec<WasmFindResult>,
    heatmap: Vec<u32>,
}

/// JS entry: search a grid for the given (already normalized) words.
///
/// `words` and `exclude` are `string[]`. Results are sorted by word; with
/// `first_only` just the first match of each word is kept.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn search_grid_wasm(
    characters: &str,
    width: i32,
    height: i32,
    words: JsValue,
    wrap: bool,
    exclude: JsValue,
    first_only: bool,
    minimal: bool,
) -> Result<JsValue, JsValue> {
    let words = string_array(words, "words")?;
    let exclude = string_array(exclude, "exclude")?;

    let exclude = DirectionSet::parse_tokens(&exclude).map_err(WasmError::from)?;
    let grid = Grid::from_text(characters, Some((i64::from(width), i64::from(height)))).map_err(WasmError::from)?;
    let word_list = WordList::from_words(words.iter().map(|w| w.trim().chars().map(lowercase_letter).collect::<String>())).map_err(WasmError::from)?;
    let engine = WordFinder::new(word_list);

    let mut results = engine.search(&grid, wrap, &exclude);
    if first_only {
        results = finder::first_per_word(results);
    } else {
        finder::sort_by_word(&mut results);
    }

    let mode = if minimal { HeatMode::Minimal } else { HeatMode::Full };
    let heat = HeatMap::build(&grid, &results, wrap, mode);

    let wasm_result = WasmSearchResult {
        results: results
            .into_iter()
            .map(|r| {
                let (row, column) = grid.row_col(r.position);
                WasmFindResult {
                    position: r.position,
                    row,
                    column,
                    direction: r.direction.to_string(),
                    word: r.word,
                }
            })
            .collect(),
        heatmap: heat.counts().to_vec(),
    };

    to_value(&wasm_result).map_err(|e| serialization_error("search result", e))
}

/// Parse newline-separated word-list text and return the normalized words
/// as a `string[]`.
///
/// # Errors
/// Returns a `JsValue` error if no usable word remains.
#[wasm_bindgen]
pub fn parse_word_list(text: &str, min_letter: usize) -> Result<JsValue, JsValue> {
    let word_list = WordList::parse_from_str(text, min_letter).map_err(WasmError::from)?;
    to_value(word_list.words()).map_err(|e| serialization_error("word list", e))
}

/// Generate a debug report users can paste into an issue.
#[wasm_bindgen]
pub fn get_debug_info(characters: &str, size: &str, error_message: &str, word_count: usize) -> String {
    use std::fmt::Write;
    let mut report = String::new();

    // NB: writing to a String never fails
    let _ = writeln!(&mut report, "=== WORD FINDER DEBUG REPORT ===");
    let _ = writeln!(&mut report, "Version: {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(&mut report, "Generated: {}", js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_else(|| "unknown".to_string()));
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Error");
    let _ = writeln!(&mut report, "{}", error_message);
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Input");
    let _ = writeln!(&mut report, "Characters: {}", characters);
    let _ = writeln!(&mut report, "Size: {}", size);
    let _ = writeln!(&mut report, "Word List Size: {}", word_count);
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Environment");
    if let Some(window) = web_sys::window() {
        if let Ok(user_agent) = window.navigator().user_agent() {
            let _ = writeln!(&mut report, "User Agent: {}", user_agent);
        }
        let _ = writeln!(&mut report, "Location: {}", window.location().href().unwrap_or_else(|_| "unknown".to_string()));
    }
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "=== END DEBUG REPORT ===");

    report
}
