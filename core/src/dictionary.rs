// SPDX-License-Identifier: MIT OR Apache-2.0

//! Word lists used to validate the tray

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A set of valid words, queried by exact membership
pub trait Lexicon: Send + Sync {
    /// Check whether `word` is a member. Callers pass lowercase words.
    fn contains(&self, word: &str) -> bool;
}

impl Lexicon for HashSet<String> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

/// Errors that can occur while loading a word list
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The word list file could not be read
    #[error("Failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Immutable list of lowercase words
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// Build a word list from any sequence of words
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Parse a newline separated word list. Blank lines and lines starting
    /// with `#` are skipped.
    pub fn parse(text: &str) -> Self {
        Self::from_words(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        )
    }

    /// Load a word list file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let list = Self::parse(&text);
        tracing::info!(path = %path.display(), words = list.len(), "Loaded word list");
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Lexicon for WordList {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let list = WordList::parse("# letterpress words\ncat\n\n  Dog \nBIRD\n");
        assert_eq!(list.len(), 3);
        assert!(list.contains("cat"));
        assert!(list.contains("dog"));
        assert!(list.contains("bird"));
        assert!(!list.contains(""));
        assert!(!list.contains("# letterpress words"));
    }

    #[test]
    fn test_membership_is_exact() {
        let list = WordList::from_words(["cat"]);
        assert!(list.contains("cat"));
        assert!(!list.contains("cats"));
        assert!(!list.contains("ca"));
        assert!(!list.contains("CAT"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = WordList::load("/nonexistent/letterpress/words.txt").unwrap_err();
        assert!(matches!(err, DictionaryError::Io { .. }));
        assert!(err.to_string().contains("words.txt"));
    }

    #[test]
    fn test_hash_set_lexicon() {
        let set: HashSet<String> = ["tea".to_string()].into_iter().collect();
        assert!(Lexicon::contains(&set, "tea"));
        assert!(!Lexicon::contains(&set, "eat"));
    }
}
