//! `word_list`: load and normalize the candidate words for a search
//!
//! This module turns raw word-list text (one word per line) into a [`WordList`]:
//! the immutable, deduplicated set of lowercase words the finder looks for.
//!
//! The parsing logic:
//! - The input is split on both `\n` and `\r`, so Unix, Windows, and old Mac
//!   line endings all work.
//! - Every line is trimmed and lowercased.
//! - Blank (empty or whitespace-only) lines are skipped.
//! - Lines shorter than `min_letter` characters are skipped.
//! - Duplicates are removed, keeping the first occurrence, so iteration order
//!   follows the source file.
//!
//! Like the rest of the library this is WASM-friendly: `parse_from_str` never
//! touches the filesystem, and `load_from_path` only exists on native builds.

use crate::errors::FinderError;
use log::debug;
use std::collections::HashSet;

/// A processed, ready-to-search word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Parse and normalize a raw word list held in memory.
    ///
    /// # Arguments
    /// * `contents`   - raw text, one word per line.
    /// * `min_letter` - words with fewer characters than this are dropped.
    ///
    /// # Errors
    ///
    /// `EmptyInput` if `contents` is empty, or if no line survives normalization.
    pub fn parse_from_str(contents: &str, min_letter: usize) -> Result<WordList, FinderError> {
        if contents.is_empty() {
            return Err(FinderError::EmptyInput);
        }

        let mut seen = HashSet::new();
        let mut words = Vec::new();
        let (mut blank, mut short, mut duplicate) = (0usize, 0usize, 0usize);

        for line in contents.split(&['\n', '\r'][..]) {
            let line = line.trim();
            if line.is_empty() {
                blank += 1;
                continue;
            }
            let word: String = line.chars().map(lowercase_letter).collect();
            if word.chars().count() < min_letter {
                short += 1;
                continue;
            }
            if seen.insert(word.clone()) {
                words.push(word);
            } else {
                duplicate += 1;
            }
        }

        debug!(
            "word list: kept {} word(s); skipped {blank} blank, {short} shorter than {min_letter}, {duplicate} duplicate",
            words.len()
        );

        if words.is_empty() {
            return Err(FinderError::EmptyInput);
        }
        Ok(WordList { words })
    }

    /// Wrap words that are already normalized (lowercase, unique).
    ///
    /// Duplicates and empty strings are still dropped so the finder's
    /// invariants hold.
    ///
    /// # Errors
    ///
    /// `EmptyInput` if nothing usable remains.
    pub fn from_words<I, S>(words: I) -> Result<WordList, FinderError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let words: Vec<String> = words
            .into_iter()
            .map(Into::into)
            .filter(|w| !w.is_empty() && seen.insert(w.clone()))
            .collect();
        if words.is_empty() {
            return Err(FinderError::EmptyInput);
        }
        Ok(WordList { words })
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// `WordListIo` if the file cannot be read, otherwise as [`WordList::parse_from_str`].
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P, min_letter: usize) -> Result<WordList, FinderError> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|source| FinderError::WordListIo {
            path: path_ref.to_path_buf(),
            source,
        })?;
        Self::parse_from_str(&data, min_letter)
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

/// Lowercase one letter without ever expanding it into several characters,
/// so words and grid cells fold the same way.
pub(crate) fn lowercase_letter(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let word_list = WordList::parse_from_str("cat\ndog\nbird", 2).unwrap();
        assert_eq!(word_list.words(), ["cat", "dog", "bird"]);
    }

    #[test]
    fn test_parse_filters_short_words() {
        let word_list = WordList::parse_from_str("a\nab\nabc\nabcd", 3).unwrap();
        assert_eq!(word_list.words(), ["abc", "abcd"]);
    }

    #[test]
    fn test_parse_min_letter_counts_chars_not_bytes() {
        let word_list = WordList::parse_from_str("éé\nab", 2).unwrap();
        assert_eq!(word_list.words(), ["éé", "ab"]);
    }

    #[test]
    fn test_parse_deduplicates_keeping_first() {
        let word_list = WordList::parse_from_str("dog\ncat\nDOG\ncat", 2).unwrap();
        assert_eq!(word_list.words(), ["dog", "cat"]);
    }

    #[test]
    fn test_parse_normalizes_to_lowercase() {
        let word_list = WordList::parse_from_str("CAT\nDog\nbIrD", 2).unwrap();
        assert_eq!(word_list.words(), ["cat", "dog", "bird"]);
    }

    #[test]
    fn test_parse_handles_every_line_ending() {
        let word_list = WordList::parse_from_str("cat\r\ndog\rbird\n\n", 2).unwrap();
        assert_eq!(word_list.words(), ["cat", "dog", "bird"]);
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let word_list = WordList::parse_from_str("cat\n   \n\t\ndog", 1).unwrap();
        assert_eq!(word_list.words(), ["cat", "dog"]);
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        let word_list = WordList::parse_from_str("cat 
	dog
 cat", 2).unwrap();
        assert_eq!(word_list.words(), ["cat", "dog"]);
    }

    #[test]
    fn test_parse_folds_letters_one_to_one() {
        let word_list = WordList::parse_from_str("İz", 2).unwrap();
        assert_eq!(word_list.words(), ["iz"]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(WordList::parse_from_str("", 2), Err(FinderError::EmptyInput)));
    }

    #[test]
    fn test_parse_nothing_usable() {
        assert!(matches!(WordList::parse_from_str("\n\n  \na\n", 2), Err(FinderError::EmptyInput)));
    }

    #[test]
    fn test_from_words_drops_duplicates_and_empties() {
        let word_list = WordList::from_words(["at", "", "at", "to"]).unwrap();
        assert_eq!(word_list.words(), ["at", "to"]);
        assert!(matches!(WordList::from_words(Vec::<String>::new()), Err(FinderError::EmptyInput)));
    }

    #[test]
    #[cfg(not(target_arch = "wasm32"))]
    fn test_load_missing_file() {
        let err = WordList::load_from_path("definitely/not/here.txt", 2).unwrap_err();
        assert_eq!(err.code(), "E005");
    }
}
