// Rust guideline compliant 2026-10-12

//! Shared domain types for the job-screening pipeline.
//!
//! Defines `JobRecord`, `Assessment`, `ScoredJob`, `StoredJob`, the error enums,
//! and the hexagonal port traits: `JobSink`, `JobSource`, `Scorer`, `Storage`,
//! and `Alarm`. All pipeline components depend on this crate.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Score at or above which [`StorageStats::high_score`] counts a record.
pub const HIGH_SCORE: u32 = 10;

/// Number of entries reported in [`StorageStats::top_reasons`].
pub const TOP_REASONS: usize = 5;

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A single job posting as produced by an acquisition collaborator.
///
/// Every field is optional. Accessors return `""` for absent fields, so callers
/// never have to distinguish "missing" from "empty".
///
/// Deserialization is lenient: numbers and booleans are rendered to text, and
/// objects or arrays collapse to `None` instead of failing the whole record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    /// Posting title, e.g. `"Data Entry Clerk"`.
    #[serde(default, deserialize_with = "lenient_text")]
    pub job_title: Option<String>,
    /// Free-text body of the posting.
    #[serde(default, deserialize_with = "lenient_text")]
    pub job_description: Option<String>,
    /// Advertised employer.
    #[serde(default, deserialize_with = "lenient_text")]
    pub company_name: Option<String>,
    /// Salary text as scraped, e.g. `"$120,000 - $150,000"`.
    #[serde(default, deserialize_with = "lenient_text")]
    pub salary_range: Option<String>,
    /// Location text, e.g. `"Remote"`.
    #[serde(default, deserialize_with = "lenient_text")]
    pub location: Option<String>,
    /// Relative or absolute posting date as scraped.
    #[serde(default, deserialize_with = "lenient_text")]
    pub post_date: Option<String>,
    /// Link to the posting on its source platform.
    #[serde(default, deserialize_with = "lenient_text")]
    pub original_url: Option<String>,
    /// Platform name, e.g. `"Indeed"`.
    #[serde(default, deserialize_with = "lenient_text")]
    pub source_platform: Option<String>,
}

impl JobRecord {
    /// Create a record with only a title and a description.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            job_title: Some(title.into()),
            job_description: Some(description.into()),
            ..Self::default()
        }
    }

    /// Set the company name.
    #[must_use]
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company_name = Some(company.into());
        self
    }

    /// Set the salary text.
    #[must_use]
    pub fn with_salary_range(mut self, salary: impl Into<String>) -> Self {
        self.salary_range = Some(salary.into());
        self
    }

    /// Title, or `""` when absent.
    #[must_use]
    pub fn title(&self) -> &str {
        self.job_title.as_deref().unwrap_or_default()
    }

    /// Description, or `""` when absent.
    #[must_use]
    pub fn description(&self) -> &str {
        self.job_description.as_deref().unwrap_or_default()
    }

    /// Company name, or `""` when absent.
    #[must_use]
    pub fn company(&self) -> &str {
        self.company_name.as_deref().unwrap_or_default()
    }

    /// Salary text, or `""` when absent.
    #[must_use]
    pub fn salary(&self) -> &str {
        self.salary_range.as_deref().unwrap_or_default()
    }

    /// Location, or `""` when absent.
    #[must_use]
    pub fn location(&self) -> &str {
        self.location.as_deref().unwrap_or_default()
    }

    /// Posting date, or `""` when absent.
    #[must_use]
    pub fn post_date(&self) -> &str {
        self.post_date.as_deref().unwrap_or_default()
    }

    /// Source URL, or `""` when absent.
    #[must_use]
    pub fn url(&self) -> &str {
        self.original_url.as_deref().unwrap_or_default()
    }

    /// Source platform, or `""` when absent.
    #[must_use]
    pub fn platform(&self) -> &str {
        self.source_platform.as_deref().unwrap_or_default()
    }
}

/// Accepted JSON shapes for a text field.
#[derive(Deserialize)]
#[serde(untagged)]
enum LenientText {
    Text(String),
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    Flag(bool),
    Other(serde::de::IgnoredAny),
}

/// Deserialize a text field without ever rejecting the enclosing record.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LenientText>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        LenientText::Text(s) => Some(s),
        LenientText::Signed(n) => Some(n.to_string()),
        LenientText::Unsigned(n) => Some(n.to_string()),
        LenientText::Float(x) => Some(x.to_string()),
        LenientText::Flag(b) => Some(b.to_string()),
        LenientText::Other(_) => None,
    }))
}

/// Scam score and explanations attached to a record by a [`Scorer`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assessment {
    /// Sum of the weights of every triggered signal.
    pub scam_score: u32,
    /// One reason per triggered signal, in detector order.
    pub scam_reasons: Vec<String>,
}

impl Assessment {
    /// `true` when the score reaches `threshold` (inclusive).
    #[must_use]
    pub fn is_flagged(&self, threshold: u32) -> bool {
        self.scam_score >= threshold
    }
}

/// A record together with its assessment.
///
/// Serializes flat: the input fields followed by `scam_score` and `scam_reasons`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredJob {
    /// Original record (composition).
    #[serde(flatten)]
    pub record: JobRecord,
    /// Score and reasons.
    #[serde(flatten)]
    pub assessment: Assessment,
}

impl ScoredJob {
    /// Attach `assessment` to `record`.
    #[must_use]
    pub fn new(record: JobRecord, assessment: Assessment) -> Self {
        Self { record, assessment }
    }

    /// Shorthand for `self.assessment.scam_score`.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.assessment.scam_score
    }

    /// Shorthand for `self.assessment.scam_reasons`.
    #[must_use]
    pub fn reasons(&self) -> &[String] {
        &self.assessment.scam_reasons
    }

    /// See [`Assessment::is_flagged`].
    #[must_use]
    pub fn is_flagged(&self, threshold: u32) -> bool {
        self.assessment.is_flagged(threshold)
    }
}

/// A scored record persisted by a [`Storage`] adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredJob {
    /// Opaque identifier assigned by storage.
    pub id: uuid::Uuid,
    /// Insertion time.
    pub date_scraped: chrono::DateTime<chrono::Utc>,
    /// The persisted record.
    #[serde(flatten)]
    pub job: ScoredJob,
}

// ---------------------------------------------------------------------------
// Storage queries
// ---------------------------------------------------------------------------

/// Filter for [`Storage::query`].
///
/// Defaults match the misdeeds listing: `min_score = 5`, `limit = 100`, no search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobQuery {
    /// Inclusive lower bound on `scam_score`.
    pub min_score: u32,
    /// Maximum number of rows returned.
    pub limit: usize,
    /// Case-insensitive substring matched against title, company, and description.
    pub search: Option<String>,
}

impl Default for JobQuery {
    fn default() -> Self {
        Self { min_score: 5, limit: 100, search: None }
    }
}

impl JobQuery {
    /// Override the minimum score.
    #[must_use]
    pub fn min_score(mut self, min_score: u32) -> Self {
        self.min_score = min_score;
        self
    }

    /// Override the row limit.
    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Restrict to records mentioning `text`.
    #[must_use]
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    /// `true` when `job` passes the score bound and the optional search.
    #[must_use]
    pub fn matches(&self, job: &ScoredJob) -> bool {
        if job.score() < self.min_score {
            return false;
        }
        let Some(needle) = self.search.as_deref() else {
            return true;
        };
        let needle = needle.to_lowercase();
        let record = &job.record;
        [record.title(), record.company(), record.description()]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Aggregate figures over everything a [`Storage`] holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StorageStats {
    /// Number of stored records.
    pub total: usize,
    /// Records scoring at least [`HIGH_SCORE`].
    pub high_score: usize,
    /// Up to [`TOP_REASONS`] `(reason, count)` pairs, most frequent first.
    pub top_reasons: Vec<(String, usize)>,
}

impl StorageStats {
    /// Tally statistics from `(score, reasons)` pairs.
    ///
    /// Ties in `top_reasons` are broken alphabetically so output is stable.
    #[must_use]
    pub fn tally<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (u32, &'a [String])>,
    {
        let mut stats = Self::default();
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for (score, reasons) in rows {
            stats.total += 1;
            if score >= HIGH_SCORE {
                stats.high_score += 1;
            }
            for reason in reasons {
                *counts.entry(reason.as_str()).or_default() += 1;
            }
        }
        let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        stats.top_reasons = ranked
            .into_iter()
            .take(TOP_REASONS)
            .map(|(reason, count)| (reason.to_owned(), count))
            .collect();
        stats
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that a job queue implementation may return.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BufferError {
    /// Queue has been closed; no further writes are accepted.
    #[error("buffer closed")]
    Closed,
}

/// Errors from the Scorer hexagonal port.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScoringError {
    /// The record could not be scored.
    #[error("scoring failed: {reason}")]
    Failed {
        /// Human-readable description.
        reason: String,
    },
}

/// Errors from the Storage hexagonal port.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    /// Backend could not be reached or rejected the operation.
    #[error("storage unavailable")]
    Unavailable,
    /// Storage is full.
    #[error("storage capacity exceeded (capacity: {capacity})")]
    CapacityExceeded { capacity: usize },
}

/// Errors from the Alarm hexagonal port.
#[derive(Debug, thiserror::Error)]
pub enum AlarmError {
    /// Alarm could not be delivered.
    #[error("delivery failed: {reason}")]
    DeliveryFailed {
        /// Human-readable description.
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// Ports
// ---------------------------------------------------------------------------

/// Hexagonal port: the write side of the acquisition queue.
///
/// The generator depends exclusively on this trait -- never on a concrete adapter.
#[expect(
    async_fn_in_trait,
    reason = "no dyn dispatch needed; internal workspace only"
)]
pub trait JobSink {
    /// Write a batch of raw records into the queue.
    ///
    /// # Errors
    ///
    /// Returns `BufferError::Closed` when the queue has been shut down.
    async fn write_batch(&self, batch: Vec<JobRecord>) -> Result<(), BufferError>;
}

/// Hexagonal port: the read side of the acquisition queue.
///
/// Implementations signal exhaustion via `BufferError::Closed`.
#[expect(
    async_fn_in_trait,
    reason = "no dyn dispatch needed; internal workspace only"
)]
pub trait JobSource {
    /// Read up to `max` records from the queue.
    ///
    /// Returns between 1 and `max` records when data is available.
    ///
    /// # Errors
    ///
    /// Returns `BufferError::Closed` when the queue is closed and drained.
    async fn read_batch(&self, max: usize) -> Result<Vec<JobRecord>, BufferError>;
}

/// Hexagonal port: per-record scam scoring.
///
/// Scoring is synchronous and must not mutate shared state, so one scorer can
/// serve many concurrent callers.
pub trait Scorer {
    /// Score a single record.
    ///
    /// # Errors
    ///
    /// Returns `ScoringError::Failed` if this record cannot be scored. Callers
    /// are expected to skip the record and continue with the rest of the batch.
    fn score(&self, job: &JobRecord) -> Result<Assessment, ScoringError>;

    /// Name of this scorer (e.g. `"heuristic"`).
    fn name(&self) -> &str;
}

/// Hexagonal port: persistence and querying of scored records.
#[expect(
    async_fn_in_trait,
    reason = "no dyn dispatch needed; internal workspace only"
)]
pub trait Storage {
    /// Persist `batch`, returning the identifier assigned to each record in order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::CapacityExceeded` when the batch does not fit, or
    /// `StorageError::Unavailable` when the backend fails.
    async fn write_batch(&self, batch: Vec<ScoredJob>) -> Result<Vec<uuid::Uuid>, StorageError>;

    /// Return records matching `query`, highest score first, newest first on ties.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` when the backend fails.
    async fn query(&self, query: &JobQuery) -> Result<Vec<StoredJob>, StorageError>;

    /// Summarize everything stored so far.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` when the backend fails.
    async fn stats(&self) -> Result<StorageStats, StorageError>;
}

/// Hexagonal port: per-record alert delivery for flagged postings.
///
/// The screener calls `trigger` once per flagged record per batch (best-effort).
#[expect(
    async_fn_in_trait,
    reason = "no dyn dispatch needed; internal workspace only"
)]
pub trait Alarm {
    /// Trigger an alert for the given flagged record.
    ///
    /// # Errors
    ///
    /// Returns `AlarmError::DeliveryFailed` when the alert cannot be delivered.
    async fn trigger(&self, job: &ScoredJob) -> Result<(), AlarmError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn scored(title: &str, score: u32, reasons: &[&str]) -> ScoredJob {
        ScoredJob::new(
            JobRecord::new(title, "description").with_company("Acme"),
            Assessment {
                scam_score: score,
                scam_reasons: reasons.iter().map(|r| (*r).to_owned()).collect(),
            },
        )
    }

    // ------------------------------------------------------------------
    // JobRecord
    // ------------------------------------------------------------------

    #[test]
    fn absent_fields_read_as_empty() {
        let record = JobRecord::default();
        assert_eq!(record.title(), "");
        assert_eq!(record.description(), "");
        assert_eq!(record.company(), "");
        assert_eq!(record.salary(), "");
        assert_eq!(record.location(), "");
        assert_eq!(record.post_date(), "");
        assert_eq!(record.url(), "");
        assert_eq!(record.platform(), "");
    }

    #[test]
    fn builder_helpers_set_fields() {
        let record = JobRecord::new("Title", "Body")
            .with_company("Acme")
            .with_salary_range("$1");
        assert_eq!(record.title(), "Title");
        assert_eq!(record.description(), "Body");
        assert_eq!(record.company(), "Acme");
        assert_eq!(record.salary(), "$1");
    }

    #[test]
    fn deserialize_tolerates_missing_and_null_fields() {
        let record: JobRecord =
            serde_json::from_str(r#"{"job_title": "Clerk", "company_name": null}"#).unwrap();
        assert_eq!(record.title(), "Clerk");
        assert_eq!(record.company_name, None);
        assert_eq!(record.description(), "");
    }

    #[test]
    fn deserialize_renders_numbers_as_text() {
        let record: JobRecord =
            serde_json::from_str(r#"{"salary_range": 120000, "post_date": 1.5}"#).unwrap();
        assert_eq!(record.salary(), "120000");
        assert_eq!(record.post_date(), "1.5");
    }

    #[test]
    fn deserialize_drops_structured_values() {
        let record: JobRecord =
            serde_json::from_str(r#"{"location": {"city": "Paris"}, "job_title": ["a"]}"#)
                .unwrap();
        assert_eq!(record.location, None);
        assert_eq!(record.job_title, None);
    }

    // ------------------------------------------------------------------
    // Assessment / ScoredJob
    // ------------------------------------------------------------------

    #[test]
    fn flagged_threshold_is_inclusive() {
        let assessment = Assessment { scam_score: 5, scam_reasons: vec![] };
        assert!(assessment.is_flagged(5));
        assert!(!assessment.is_flagged(6));
    }

    #[test]
    fn scored_job_serializes_flat() {
        let job = scored("Clerk", 12, &["Requests upfront payment or fees"]);
        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["job_title"], "Clerk");
        assert_eq!(value["company_name"], "Acme");
        assert_eq!(value["scam_score"], 12);
        assert_eq!(value["scam_reasons"][0], "Requests upfront payment or fees");
        assert!(value.get("record").is_none(), "record must be flattened");
    }

    // ------------------------------------------------------------------
    // JobQuery
    // ------------------------------------------------------------------

    #[test]
    fn query_defaults() {
        let query = JobQuery::default();
        assert_eq!(query.min_score, 5);
        assert_eq!(query.limit, 100);
        assert!(query.search.is_none());
    }

    #[test]
    fn query_filters_by_score() {
        let query = JobQuery::default().min_score(10);
        assert!(query.matches(&scored("a", 10, &[])));
        assert!(!query.matches(&scored("a", 9, &[])));
    }

    #[test]
    fn query_search_is_case_insensitive_over_title_company_description() {
        let job = scored("Data Entry Clerk", 20, &[]);
        assert!(JobQuery::default().search("data entry").matches(&job));
        assert!(JobQuery::default().search("ACME").matches(&job));
        assert!(JobQuery::default().search("DESCRIPTION").matches(&job));
        assert!(!JobQuery::default().search("plumber").matches(&job));
    }

    // ------------------------------------------------------------------
    // StorageStats
    // ------------------------------------------------------------------

    #[test]
    fn tally_counts_and_ranks_reasons() {
        let jobs = [
            scored("a", 15, &["pay", "urgent"]),
            scored("b", 7, &["pay"]),
            scored("c", 10, &["pay", "messaging"]),
        ];
        let stats = StorageStats::tally(jobs.iter().map(|j| (j.score(), j.reasons())));
        assert_eq!(stats.total, 3);
        assert_eq!(stats.high_score, 2);
        assert_eq!(stats.top_reasons[0], ("pay".to_owned(), 3));
        // Ties broken alphabetically.
        assert_eq!(stats.top_reasons[1], ("messaging".to_owned(), 1));
        assert_eq!(stats.top_reasons[2], ("urgent".to_owned(), 1));
    }

    #[test]
    fn tally_keeps_at_most_five_reasons() {
        let reasons = ["a", "b", "c", "d", "e", "f", "g"];
        let job = scored("x", 1, &reasons);
        let stats = StorageStats::tally([(job.score(), job.reasons())]);
        assert_eq!(stats.top_reasons.len(), TOP_REASONS);
    }

    // ------------------------------------------------------------------
    // Errors
    // ------------------------------------------------------------------

    #[test]
    fn error_messages() {
        assert_eq!(BufferError::Closed.to_string(), "buffer closed");
        let e = ScoringError::Failed { reason: "oops".to_owned() };
        assert_eq!(e.to_string(), "scoring failed: oops");
        assert_eq!(StorageError::Unavailable.to_string(), "storage unavailable");
        let e = AlarmError::DeliveryFailed { reason: "timeout".to_owned() };
        assert_eq!(e.to_string(), "delivery failed: timeout");
    }

    // ------------------------------------------------------------------
    // Ports -- compile checks with minimal implementations
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn port_traits_compile_with_minimal_impl() {
        struct AllPorts {
            queue: RefCell<Vec<JobRecord>>,
        }

        impl JobSink for AllPorts {
            async fn write_batch(&self, batch: Vec<JobRecord>) -> Result<(), BufferError> {
                self.queue.borrow_mut().extend(batch);
                Ok(())
            }
        }

        impl JobSource for AllPorts {
            async fn read_batch(&self, max: usize) -> Result<Vec<JobRecord>, BufferError> {
                let mut queue = self.queue.borrow_mut();
                if queue.is_empty() {
                    return Err(BufferError::Closed);
                }
                let n = max.min(queue.len());
                Ok(queue.drain(..n).collect())
            }
        }

        impl Scorer for AllPorts {
            fn score(&self, _job: &JobRecord) -> Result<Assessment, ScoringError> {
                Ok(Assessment::default())
            }

            fn name(&self) -> &str {
                "minimal"
            }
        }

        impl Alarm for AllPorts {
            async fn trigger(&self, _job: &ScoredJob) -> Result<(), AlarmError> {
                Ok(())
            }
        }

        let ports = AllPorts { queue: RefCell::new(vec![]) };
        JobSink::write_batch(&ports, vec![JobRecord::default()]).await.unwrap();
        let read = ports.read_batch(10).await.unwrap();
        assert_eq!(read.len(), 1);
        assert_eq!(ports.read_batch(1).await, Err(BufferError::Closed));
        let assessment = ports.score(&read[0]).unwrap();
        assert_eq!(assessment.scam_score, 0);
        assert_eq!(ports.name(), "minimal");
        ports.trigger(&ScoredJob::new(read[0].clone(), assessment)).await.unwrap();
    }
}
