//! Generate error code documentation from the source of truth (the error enum).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from the `FinderError` implementation via its `code()`,
//! `description()`, `details()`, and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::io;
use std::path::PathBuf;

use word_finder::errors::FinderError;

/// One representative of every `FinderError` variant, in code order
fn all_error_variants() -> Vec<FinderError> {
    vec![
        FinderError::EmptyInput,
        FinderError::InvalidDimensions { width: 4, height: 3, len: 10 },
        FinderError::InvalidDirectionToken { token: "sideways".to_string() },
        FinderError::InvalidSize { input: "4by3".to_string() },
        FinderError::WordListIo {
            path: PathBuf::from("words.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        },
        FinderError::Io(io::Error::new(io::ErrorKind::BrokenPipe, "Broken pipe")),
    ]
}

fn main() {
    println!("# Error Codes\n");
    println!("This file is generated by `cargo run --bin generate_error_docs`; do not edit it by hand.\n");

    for error in all_error_variants() {
        println!("### {}: {}\n", error.code(), error.description());
        println!("**Details:** {}\n", error.details());

        if let Some(help_text) = error.help() {
            println!("**How to fix:**");
            println!("```");
            println!("{}", help_text);
            println!("```\n");
        }

        println!("**Example error message:**");
        println!("```");
        println!("{}", error);
        println!("```\n");

        println!("**Detailed format:**");
        println!("```");
        println!("{}", error.display_detailed());
        println!("```\n");

        println!("---\n");
    }
}
