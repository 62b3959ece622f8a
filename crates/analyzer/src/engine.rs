// Rust guideline compliant 2026-10-12

//! Scoring engine: runs the nine detectors and folds their outcomes.
//!
//! [`ScamAnalyzer`] holds only read-only resources, so one instance can be
//! shared by reference across threads and analyses never influence each other.

use domain::{Assessment, JobRecord, ScoredJob, Scorer, ScoringError};

use crate::config::AnalyzerConfig;
use crate::detectors;
use crate::lexicon::Lexicon;
use crate::signals::{Detection, SignalKind};
use crate::text::{analysis_text, raw_text};

/// Scores strictly above this are logged at warn level.
pub const WARN_SCORE: u32 = 5;

/// `true` when `score` is logged as `analyzer.score.high`.
const fn is_high_score(score: u32) -> bool {
    score > WARN_SCORE
}

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

/// Outcome of every detector for one record, in [`SignalKind::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    detections: Vec<Detection>,
}

impl Analysis {
    /// All detections, triggered or not.
    #[must_use]
    pub fn detections(&self) -> &[Detection] {
        &self.detections
    }

    /// Raw outcome of `kind`.
    #[must_use]
    pub fn outcome(&self, kind: SignalKind) -> u32 {
        self.detections
            .iter()
            .find(|d| d.kind == kind)
            .map_or(0, |d| d.outcome)
    }

    /// `true` if `kind` fired.
    #[must_use]
    pub fn triggered(&self, kind: SignalKind) -> bool {
        self.outcome(kind) > 0
    }

    /// Sum of the weights of the triggered signals.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.detections.iter().map(Detection::contribution).sum()
    }

    /// One reason per triggered signal, in detector order.
    #[must_use]
    pub fn reasons(&self) -> Vec<String> {
        self.detections.iter().filter_map(Detection::reason).collect()
    }

    /// Collapse into the score/reasons pair attached to a record.
    #[must_use]
    pub fn to_assessment(&self) -> Assessment {
        Assessment {
            scam_score: self.score(),
            scam_reasons: self.reasons(),
        }
    }
}

// ---------------------------------------------------------------------------
// ScamAnalyzer
// ---------------------------------------------------------------------------

/// Heuristic fraud scorer for job postings.
#[derive(Debug, Clone, Default)]
pub struct ScamAnalyzer {
    config: AnalyzerConfig,
}

impl ScamAnalyzer {
    /// Create an analyzer over `config`.
    #[must_use]
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    /// Analyzer with the built-in lexicon and bundled word list.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(AnalyzerConfig::standard())
    }

    /// Phrase sets in use.
    #[must_use]
    pub fn lexicon(&self) -> &Lexicon {
        &self.config.lexicon
    }

    /// Run every detector against `job`.
    #[must_use]
    pub fn analyze(&self, job: &JobRecord) -> Analysis {
        let text = analysis_text(job);
        let lexicon = &self.config.lexicon;
        let detections = SignalKind::ALL
            .iter()
            .map(|&kind| {
                let outcome = match kind {
                    SignalKind::VagueDescription => detectors::vague_description(&text, lexicon),
                    SignalKind::SpellingErrors => detectors::spelling_errors(
                        &text,
                        &self.config.dictionary,
                        self.config.spelling_token_cap,
                    ),
                    SignalKind::UnprofessionalTone => {
                        detectors::unprofessional_tone(&raw_text(job))
                    }
                    SignalKind::UnrealisticSalary => {
                        detectors::unrealistic_salary(job.title(), job.salary(), lexicon)
                    }
                    SignalKind::UpfrontPayment => detectors::upfront_payment(&text, lexicon),
                    SignalKind::GenericEmail => detectors::generic_email(&text, lexicon),
                    SignalKind::Urgency => detectors::urgency(&text, lexicon),
                    SignalKind::SensitiveInfo => detectors::sensitive_info(&text, lexicon),
                    SignalKind::MessagingApp => detectors::messaging_app(&text, lexicon),
                };
                Detection { kind, outcome }
            })
            .collect();
        Analysis { detections }
    }

    /// Score `job` and log high scores.
    #[must_use]
    pub fn assess(&self, job: &JobRecord) -> Assessment {
        let assessment = self.analyze(job).to_assessment();
        if is_high_score(assessment.scam_score) {
            tracing::warn!(
                title = job.title(),
                score = assessment.scam_score,
                reasons = ?assessment.scam_reasons,
                "analyzer.score.high"
            );
        } else {
            tracing::debug!(title = job.title(), score = assessment.scam_score, "analyzer.scored");
        }
        assessment
    }

    /// Score `job` and return it with the assessment attached.
    #[must_use]
    pub fn analyze_job(&self, job: JobRecord) -> ScoredJob {
        let assessment = self.assess(&job);
        ScoredJob::new(job, assessment)
    }
}

impl Scorer for ScamAnalyzer {
    /// Never fails: every record, however sparse, yields an assessment.
    fn score(&self, job: &JobRecord) -> Result<Assessment, ScoringError> {
        Ok(self.assess(job))
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
