//! Error types for word-list loading, grid validation, and argument parsing.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (E001-E006) for documentation lookup:
//!
//! - E001: `EmptyInput` (Word list is empty or has no usable words)
//! - E002: `InvalidDimensions` (Grid size does not fit the characters)
//! - E003: `InvalidDirectionToken` (Unknown direction name)
//! - E004: `InvalidSize` (Size argument is not `WIDTHxHEIGHT`)
//! - E005: `WordListIo` (Word list file could not be read)
//! - E006: `Io` (Other I/O failure)
//!
//! # Examples
//!
//! ```
//! use word_finder::errors::FinderError;
//! use word_finder::word_list::WordList;
//!
//! match WordList::parse_from_str("", 2) {
//!     Err(e) => {
//!         assert_eq!(e.code(), "E001");
//!         println!("{}", e.display_detailed());
//!     }
//!     Ok(_) => unreachable!(),
//! }
//! ```

use std::io;
use std::path::PathBuf;

use crate::direction::Direction;

/// Everything that can go wrong before or around a search.
///
/// None of these are retriable; they are deterministic functions of the input.
#[derive(Debug, thiserror::Error)]
pub enum FinderError {
    #[error("The word list contains no usable words")]
    EmptyInput,

    #[error("Invalid grid dimensions: {width}x{height} does not fit {len} character(s)")]
    InvalidDimensions { width: i64, height: i64, len: usize },

    #[error("Invalid direction '{token}'")]
    InvalidDirectionToken { token: String },

    #[error("Invalid size format: \"{input}\"")]
    InvalidSize { input: String },

    #[error("failed to read word list from '{}': {source}", path.display())]
    WordListIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl FinderError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            FinderError::EmptyInput => "E001",
            FinderError::InvalidDimensions { .. } => "E002",
            FinderError::InvalidDirectionToken { .. } => "E003",
            FinderError::InvalidSize { .. } => "E004",
            FinderError::WordListIo { .. } => "E005",
            FinderError::Io(_) => "E006",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            FinderError::EmptyInput => "Word list is empty or has no usable words",
            FinderError::InvalidDimensions { .. } => "Grid size does not fit the characters",
            FinderError::InvalidDirectionToken { .. } => "Unknown direction name",
            FinderError::InvalidSize { .. } => "Size argument is not WIDTHxHEIGHT",
            FinderError::WordListIo { .. } => "Word list file could not be read",
            FinderError::Io(_) => "Other I/O failure",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            FinderError::EmptyInput => "The word list file was empty, or every line was blank or shorter than the minimum letter count. No search is attempted.",
            FinderError::InvalidDimensions { .. } => "Width and height must both be at least 1, and width times height must equal the number of grid characters (whitespace is not counted).",
            FinderError::InvalidDirectionToken { .. } => "A direction passed to --exclude is not one of the eight compass directions.",
            FinderError::InvalidSize { .. } => "The size argument must be two positive integers separated by 'x', width first.",
            FinderError::WordListIo { .. } => "The word list path does not exist or could not be read as UTF-8 text.",
            FinderError::Io(_) => "Reading the characters from the terminal or writing the output failed.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<String> {
        match self {
            FinderError::EmptyInput => Some("Put one word per line in the word list, or lower --min-letter".to_string()),
            FinderError::InvalidDimensions { len, .. } => Some(format!("The grid has {len} character(s); choose WIDTHxHEIGHT so that WIDTH * HEIGHT = {len}")),
            FinderError::InvalidDirectionToken { .. } => Some(format!("Valid directions: {}", Direction::valid_names())),
            FinderError::InvalidSize { .. } => Some("Example: '4x3' for a grid 4 letters wide and 3 rows tall".to_string()),
            FinderError::WordListIo { .. } => Some("Check the word list path (default: words.txt)".to_string()),
            FinderError::Io(_) => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help().as_deref())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_variants() -> Vec<FinderError> {
        vec![
            FinderError::EmptyInput,
            FinderError::InvalidDimensions { width: 3, height: 3, len: 8 },
            FinderError::InvalidDirectionToken { token: "sideways".to_string() },
            FinderError::InvalidSize { input: "3by3".to_string() },
            FinderError::WordListIo {
                path: PathBuf::from("missing.txt"),
                source: io::Error::new(io::ErrorKind::NotFound, "not found"),
            },
            FinderError::Io(io::Error::new(io::ErrorKind::BrokenPipe, "pipe")),
        ]
    }

    #[test]
    fn test_error_codes_and_help() {
        let err = FinderError::EmptyInput;
        assert_eq!(err.code(), "E001");
        assert!(err.help().is_some());
        let detailed = err.display_detailed();
        assert!(detailed.contains("E001"));
        assert!(detailed.contains("min-letter"));
    }

    #[test]
    fn test_all_error_codes_are_unique() {
        let mut codes = std::collections::HashSet::new();
        for err in all_variants() {
            let code = err.code();
            assert!(code.starts_with("E0"), "Error code '{}' should start with 'E0'", code);
            assert_eq!(code.len(), 4, "Error code '{}' should be 4 characters (E0XX)", code);
            assert!(codes.insert(code), "Duplicate error code found: {}", code);
        }
        assert_eq!(codes.len(), 6);
    }

    #[test]
    fn test_invalid_direction_help_lists_every_direction() {
        let err = FinderError::InvalidDirectionToken { token: "sideways".to_string() };
        let detailed = err.display_detailed();
        assert!(detailed.contains("sideways"));
        for d in Direction::ALL {
            assert!(detailed.contains(d.name()), "help should mention {}", d.name());
        }
    }

    #[test]
    fn test_invalid_dimensions_message_has_values() {
        let err = FinderError::InvalidDimensions { width: 3, height: 3, len: 8 };
        let detailed = err.display_detailed();
        assert!(detailed.contains("3x3"));
        assert!(detailed.contains("8 character"));
        assert!(detailed.contains("E002"));
    }

    #[test]
    fn test_word_list_io_keeps_source() {
        use std::error::Error;
        let err = FinderError::WordListIo {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("missing.txt"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_display_detailed_without_help() {
        let err = FinderError::Io(io::Error::new(io::ErrorKind::BrokenPipe, "pipe"));
        assert_eq!(err.display_detailed(), format!("{} (E006)", err));
    }
}
