// Rust guideline compliant 2026-10-12

//! Analyzer configuration and its builder.

use std::path::PathBuf;

use crate::AnalyzerError;
use crate::detectors::MIN_SPELLING_TOKENS;
use crate::dictionary::WordList;
use crate::lexicon::Lexicon;

// ---------------------------------------------------------------------------
// AnalyzerConfig + builder
// ---------------------------------------------------------------------------

/// Read-only resources shared by every analysis.
///
/// Construct via [`AnalyzerConfig::builder`] or [`AnalyzerConfig::standard`].
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Phrase sets for the text detectors.
    pub lexicon: Lexicon,
    /// Known words for the spelling detector.
    pub dictionary: WordList,
    /// Upper bound on tokens examined for spelling. `None` examines all.
    pub spelling_token_cap: Option<usize>,
}

/// Where the builder takes its word list from.
#[derive(Debug)]
enum DictionarySource {
    Standard,
    Loaded(WordList),
    File(PathBuf),
}

/// Builder for [`AnalyzerConfig`].
///
/// Obtain via [`AnalyzerConfig::builder`]; finalize with [`build`](Self::build).
#[derive(Debug)]
pub struct AnalyzerConfigBuilder {
    lexicon: Lexicon,
    dictionary: DictionarySource,
    spelling_token_cap: Option<usize>,
}

impl AnalyzerConfig {
    /// Create a builder.
    ///
    /// Defaults: the built-in lexicon, the bundled word list, no token cap.
    #[must_use]
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder {
            lexicon: Lexicon::standard(),
            dictionary: DictionarySource::Standard,
            spelling_token_cap: None,
        }
    }

    /// Built-in lexicon and bundled word list.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            lexicon: Lexicon::standard(),
            dictionary: WordList::standard(),
            spelling_token_cap: None,
        }
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::standard()
    }
}

impl AnalyzerConfigBuilder {
    /// Replace the phrase sets.
    #[must_use]
    pub fn lexicon(mut self, lexicon: Lexicon) -> Self {
        self.lexicon = lexicon;
        self
    }

    /// Use an in-memory word list.
    #[must_use]
    pub fn dictionary(mut self, dictionary: WordList) -> Self {
        self.dictionary = DictionarySource::Loaded(dictionary);
        self
    }

    /// Load the word list from a file during [`build`](Self::build).
    #[must_use]
    pub fn dictionary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dictionary = DictionarySource::File(path.into());
        self
    }

    /// Examine at most `cap` tokens in the spelling detector.
    #[must_use]
    pub fn spelling_token_cap(mut self, cap: usize) -> Self {
        self.spelling_token_cap = Some(cap);
        self
    }

    /// Validate and build the configuration. A dictionary file is read here.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::InvalidConfig`] when the token cap is below the
    /// spelling floor, and the dictionary errors of [`WordList::from_path`].
    #[must_use = "the Result must be checked; use ? or unwrap"]
    pub fn build(self) -> Result<AnalyzerConfig, AnalyzerError> {
        if let Some(cap) = self.spelling_token_cap
            && cap < MIN_SPELLING_TOKENS
        {
            return Err(AnalyzerError::InvalidConfig {
                reason: format!("spelling_token_cap must be >= {MIN_SPELLING_TOKENS}, got {cap}"),
            });
        }
        let dictionary = match self.dictionary {
            DictionarySource::Standard => WordList::standard(),
            DictionarySource::Loaded(list) => list,
            DictionarySource::File(path) => WordList::from_path(path)?,
        };
        Ok(AnalyzerConfig {
            lexicon: self.lexicon,
            dictionary,
            spelling_token_cap: self.spelling_token_cap,
        })
    }
}
