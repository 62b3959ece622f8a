// Rust guideline compliant 2026-10-12

//! Heuristic fraud-likelihood scoring for job postings.
//!
//! [`ScamAnalyzer`] runs nine independent detectors over a
//! [`domain::JobRecord`], sums the weights of those that fire, and explains
//! each contribution with a fixed reason string. It implements the
//! `domain::Scorer` port. Configuration via [`AnalyzerConfig::builder`].

use std::path::PathBuf;

pub mod config;
pub mod detectors;
pub mod dictionary;
pub mod engine;
pub mod lexicon;
pub mod signals;
pub mod text;

pub use config::{AnalyzerConfig, AnalyzerConfigBuilder};
pub use dictionary::WordList;
pub use engine::{Analysis, ScamAnalyzer, WARN_SCORE};
pub use lexicon::{Category, Lexicon, LexiconBuilder, PhraseSet};
pub use signals::{Detection, SignalKind};

// ---------------------------------------------------------------------------
// AnalyzerError
// ---------------------------------------------------------------------------

/// Errors raised while building an analyzer. Scoring itself cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    /// The word list file could not be read.
    #[error("dictionary unavailable at {}: {source}", path.display())]
    DictionaryUnavailable {
        /// Path that was tried.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The word list file holds no word.
    #[error("dictionary at {} contains no words", path.display())]
    DictionaryEmpty {
        /// Path that was read.
        path: PathBuf,
    },
    /// The supplied configuration is invalid.
    #[error("invalid analyzer configuration: {reason}")]
    InvalidConfig {
        /// Human-readable description of the problem.
        reason: String,
    },
}
