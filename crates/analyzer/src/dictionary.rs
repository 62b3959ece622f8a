// Rust guideline compliant 2026-10-12

//! Word list backing the spelling detector.
//!
//! The list is loaded once at construction and only read afterwards. A file
//! holds one word per line; blank lines and lines starting with `#` are skipped.

use std::collections::HashSet;
use std::path::Path;

use crate::AnalyzerError;

/// English word list bundled with the crate.
const STANDARD_WORDS: &str = include_str!("../data/en_words.txt");

/// Set of known lower-case words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// The bundled English word list.
    #[must_use]
    pub fn standard() -> Self {
        Self::parse(STANDARD_WORDS)
    }

    /// Load a word list from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::DictionaryUnavailable`] when the file cannot be
    /// read, or [`AnalyzerError::DictionaryEmpty`] when it holds no word.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AnalyzerError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| {
            AnalyzerError::DictionaryUnavailable { path: path.to_path_buf(), source }
        })?;
        let list = Self::parse(&text);
        if list.is_empty() {
            return Err(AnalyzerError::DictionaryEmpty { path: path.to_path_buf() });
        }
        tracing::info!(path = %path.display(), words = list.len(), "dictionary.loaded");
        Ok(list)
    }

    /// Build a word list from an in-memory collection.
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    fn parse(text: &str) -> Self {
        Self::from_words(text.lines().filter(|line| !line.trim_start().starts_with('#')))
    }

    /// `true` if `word` (compared lower-case) is known.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.words.contains(&word.to_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    /// Number of known words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// `true` when no word is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for WordList {
    fn default() -> Self {
        Self::standard()
    }
}
