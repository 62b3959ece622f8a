// Rust guideline compliant 2026-10-12

//! Screener component -- reads job-posting batches from a `JobSource`, scores
//! each record, raises alarms for flagged postings, and stores the flagged
//! subset.
//!
//! Entry points: [`Screener::screen_batch`], [`Screener::screen_once`],
//! [`Screener::run`]. Configuration via [`ScreenerConfig::builder`].

use domain::{
    Alarm, AlarmError, BufferError, JobRecord, JobSource, ScoredJob, Scorer, Storage, StorageError,
};
use std::time::Duration;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// ScreenerError
// ---------------------------------------------------------------------------

/// Errors that can occur while screening.
#[derive(Debug, thiserror::Error)]
pub enum ScreenerError {
    /// The supplied configuration is invalid.
    #[error("invalid screener configuration: {reason}")]
    InvalidConfig {
        /// Human-readable description of the problem.
        reason: String,
    },
    /// A queue read failed.
    #[error("queue read error: {0}")]
    Read(BufferError),
    /// A storage write failed.
    #[error("storage write error: {0}")]
    Store(StorageError),
}

// ---------------------------------------------------------------------------
// ScreenerConfig + builder
// ---------------------------------------------------------------------------

/// Score at or above which a record is flagged unless configured otherwise.
pub const DEFAULT_THRESHOLD: u32 = 5;

/// Runtime configuration for a [`Screener`].
///
/// Construct via [`ScreenerConfig::builder`].
#[derive(Debug)]
pub struct ScreenerConfig {
    /// Maximum number of records read per batch.
    pub max_batch: usize,
    /// Inclusive score at which a record is flagged.
    pub threshold: u32,
    /// Delay between successive batches.
    pub poll_interval: Duration,
    /// Optional upper bound on the number of iterations. `None` means infinite.
    pub iterations: Option<u64>,
}

/// Builder for [`ScreenerConfig`].
///
/// Obtain via [`ScreenerConfig::builder`]; finalize with [`build`](Self::build).
#[derive(Debug)]
pub struct ScreenerConfigBuilder {
    max_batch: usize,
    threshold: u32,
    poll_interval: Duration,
    iterations: Option<u64>,
}

impl ScreenerConfig {
    /// Create a builder. `max_batch` is the only required parameter.
    ///
    /// Default values: `threshold = 5`, `poll_interval = 100 ms`, `iterations = None`.
    #[must_use]
    pub fn builder(max_batch: usize) -> ScreenerConfigBuilder {
        ScreenerConfigBuilder {
            max_batch,
            threshold: DEFAULT_THRESHOLD,
            poll_interval: Duration::from_millis(100),
            iterations: None,
        }
    }
}

impl ScreenerConfigBuilder {
    /// Override the flagging threshold.
    #[must_use]
    pub fn threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Override the inter-batch delay.
    #[must_use]
    pub fn poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Set a finite iteration count. Without this the screener runs until the
    /// queue signals `Closed`.
    #[must_use]
    pub fn iterations(mut self, n: u64) -> Self {
        self.iterations = Some(n);
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenerError::InvalidConfig`] when `max_batch` is zero.
    #[must_use = "the Result must be checked; use ? or unwrap"]
    pub fn build(self) -> Result<ScreenerConfig, ScreenerError> {
        if self.max_batch == 0 {
            return Err(ScreenerError::InvalidConfig {
                reason: "max_batch must be >= 1".to_owned(),
            });
        }
        Ok(ScreenerConfig {
            max_batch: self.max_batch,
            threshold: self.threshold,
            poll_interval: self.poll_interval,
            iterations: self.iterations,
        })
    }
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

/// Result of scoring one batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreeningReport {
    /// Records scoring at or above the threshold, in input order.
    pub flagged: Vec<ScoredJob>,
    /// Records scoring below the threshold, in input order.
    pub clear: Vec<ScoredJob>,
    /// Records the scorer rejected.
    pub failed: usize,
}

impl ScreeningReport {
    /// Number of records examined, including failures.
    #[must_use]
    pub fn analyzed(&self) -> usize {
        self.flagged.len() + self.clear.len() + self.failed
    }
}

/// Result of one [`Screener::screen_once`] call.
#[derive(Debug)]
pub struct BatchOutcome {
    /// How the batch was classified.
    pub report: ScreeningReport,
    /// Storage identifiers of the flagged records, in order.
    pub stored: Vec<Uuid>,
    /// Alarms that could not be delivered.
    pub alarm_errors: Vec<AlarmError>,
}

/// Counters aggregated over a [`Screener::run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScreeningTotals {
    /// Batches processed.
    pub batches: u64,
    /// Records examined.
    pub analyzed: usize,
    /// Records at or above the threshold.
    pub flagged: usize,
    /// Records below the threshold.
    pub clear: usize,
    /// Records the scorer rejected.
    pub failed: usize,
    /// Records written to storage.
    pub stored: usize,
}

impl ScreeningTotals {
    fn record(&mut self, outcome: &BatchOutcome) {
        self.batches += 1;
        self.analyzed += outcome.report.analyzed();
        self.flagged += outcome.report.flagged.len();
        self.clear += outcome.report.clear.len();
        self.failed += outcome.report.failed;
        self.stored += outcome.stored.len();
    }
}

// ---------------------------------------------------------------------------
// Screener
// ---------------------------------------------------------------------------

/// Drives scoring over batches read from a [`JobSource`].
///
/// Generic over the four hexagonal ports for zero-cost static dispatch.
/// Holds no concrete adapter references -- dependencies are injected per call.
#[derive(Debug)]
pub struct Screener {
    config: ScreenerConfig,
}

impl Screener {
    /// Create a new screener from `config`.
    #[must_use]
    pub fn new(config: ScreenerConfig) -> Self {
        Self { config }
    }

    /// Flagging threshold in use.
    #[must_use]
    pub fn threshold(&self) -> u32 {
        self.config.threshold
    }

    /// Score every record of `records` independently and partition the results.
    ///
    /// A record the scorer rejects is logged, counted in
    /// [`ScreeningReport::failed`], and skipped; the rest are still scored.
    pub fn screen_batch<S: Scorer>(&self, scorer: &S, records: Vec<JobRecord>) -> ScreeningReport {
        let mut report = ScreeningReport::default();
        for record in records {
            match scorer.score(&record) {
                Ok(assessment) => {
                    let scored = ScoredJob::new(record, assessment);
                    if scored.is_flagged(self.config.threshold) {
                        report.flagged.push(scored);
                    } else {
                        report.clear.push(scored);
                    }
                }
                Err(e) => {
                    tracing::error!(
                        scorer = scorer.name(),
                        title = record.title(),
                        error = %e,
                        "screener.record.failed"
                    );
                    report.failed += 1;
                }
            }
        }
        report
    }

    /// Read one batch, screen it, trigger best-effort alarms for flagged
    /// records, and write the flagged subset to storage.
    ///
    /// Alarm failures are collected in the outcome; hard errors propagate as `Err`.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenerError::Read`] on queue failure (including `Closed`),
    /// or [`ScreenerError::Store`] on storage failure.
    pub async fn screen_once<Q, S, A, D>(
        &self,
        source: &Q,
        scorer: &S,
        alarm: &A,
        storage: &D,
    ) -> Result<BatchOutcome, ScreenerError>
    where
        Q: JobSource,
        S: Scorer,
        A: Alarm,
        D: Storage,
    {
        let batch = source
            .read_batch(self.config.max_batch)
            .await
            .map_err(ScreenerError::Read)?;
        tracing::debug!(size = batch.len(), "screener.batch.read");

        let report = self.screen_batch(scorer, batch);

        let mut alarm_errors = vec![];
        for job in &report.flagged {
            if let Err(e) = alarm.trigger(job).await {
                alarm_errors.push(e);
            }
        }

        let stored = if report.flagged.is_empty() {
            vec![]
        } else {
            storage
                .write_batch(report.flagged.clone())
                .await
                .map_err(ScreenerError::Store)?
        };

        tracing::info!(
            analyzed = report.analyzed(),
            flagged = report.flagged.len(),
            clear = report.clear.len(),
            failed = report.failed,
            stored = stored.len(),
            "screener.batch.screened"
        );
        Ok(BatchOutcome { report, stored, alarm_errors })
    }

    /// Run the screening loop until stopped.
    ///
    /// Calls [`screen_once`](Self::screen_once) repeatedly, sleeping
    /// `config.poll_interval` between iterations. Stops cleanly when:
    /// - the queue signals [`BufferError::Closed`], or
    /// - `config.iterations` batches have been processed.
    ///
    /// Alarm failures are logged as warnings but do not abort the loop.
    ///
    /// # Errors
    ///
    /// Returns [`ScreenerError`] for any hard error other than queue `Closed`.
    pub async fn run<Q, S, A, D>(
        &self,
        source: &Q,
        scorer: &S,
        alarm: &A,
        storage: &D,
    ) -> Result<ScreeningTotals, ScreenerError>
    where
        Q: JobSource,
        S: Scorer,
        A: Alarm,
        D: Storage,
    {
        let mut totals = ScreeningTotals::default();
        loop {
            match self.screen_once(source, scorer, alarm, storage).await {
                Ok(outcome) => {
                    for e in &outcome.alarm_errors {
                        tracing::warn!(error = %e, "screener.alarm.failed");
                    }
                    totals.record(&outcome);
                }
                Err(ScreenerError::Read(BufferError::Closed)) => {
                    tracing::info!(batches = totals.batches, "screener.run.stopped: queue closed");
                    return Ok(totals);
                }
                Err(e) => return Err(e),
            }

            if let Some(max) = self.config.iterations
                && totals.batches >= max
            {
                tracing::info!("screener.run.stopped: iteration limit reached");
                return Ok(totals);
            }

            tokio::time::sleep(self.config.poll_interval).await;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::{Screener, ScreenerConfig, ScreenerError, ScreeningTotals};
    use analyzer::ScamAnalyzer;
    use domain::{
        Alarm, AlarmError, Assessment, BufferError, JobQuery, JobRecord, JobSource, ScoredJob,
        Scorer, ScoringError, Storage, StorageError, StorageStats, StoredJob,
    };
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use std::time::Duration;

    // ------------------------------------------------------------------
    // Test helpers
    // ------------------------------------------------------------------

    fn record(title: &str) -> JobRecord {
        JobRecord::new(title, "description")
    }

    fn records(titles: &[&str]) -> Vec<JobRecord> {
        titles.iter().map(|t| record(t)).collect()
    }

    fn make_screener(max_batch: usize) -> Screener {
        Screener::new(
            ScreenerConfig::builder(max_batch)
                .poll_interval(Duration::ZERO)
                .build()
                .unwrap(),
        )
    }

    // ------------------------------------------------------------------
    // Mock adapters
    // ------------------------------------------------------------------

    struct MockSource {
        records: RefCell<VecDeque<JobRecord>>,
    }

    impl MockSource {
        fn new(records: Vec<JobRecord>) -> Self {
            Self { records: RefCell::new(VecDeque::from(records)) }
        }
    }

    impl JobSource for MockSource {
        async fn read_batch(&self, max: usize) -> Result<Vec<JobRecord>, BufferError> {
            let mut queue = self.records.borrow_mut();
            if queue.is_empty() {
                return Err(BufferError::Closed);
            }
            let count = max.min(queue.len());
            Ok(queue.drain(..count).collect())
        }
    }

    /// Scores a record by its title: `"scam"` scores 10, `"edge"` scores
    /// exactly 5, `"broken"` fails, anything else scores 0.
    struct MockScorer {
        calls: Cell<u32>,
    }

    impl MockScorer {
        fn new() -> Self {
            Self { calls: Cell::new(0) }
        }
    }

    impl Scorer for MockScorer {
        fn score(&self, job: &JobRecord) -> Result<Assessment, ScoringError> {
            self.calls.set(self.calls.get() + 1);
            let scam_score = match job.title() {
                "broken" => {
                    return Err(ScoringError::Failed { reason: "mock failure".to_owned() });
                }
                "scam" => 10,
                "edge" => 5,
                _ => 0,
            };
            Ok(Assessment { scam_score, scam_reasons: vec![] })
        }

        fn name(&self) -> &str {
            "mock"
        }
    }

    struct MockAlarm {
        call_count: Cell<u32>,
        always_fail: bool,
    }

    impl MockAlarm {
        fn new() -> Self {
            Self { call_count: Cell::new(0), always_fail: false }
        }

        fn always_failing() -> Self {
            Self { call_count: Cell::new(0), always_fail: true }
        }
    }

    impl Alarm for MockAlarm {
        async fn trigger(&self, job: &ScoredJob) -> Result<(), AlarmError> {
            self.call_count.set(self.call_count.get() + 1);
            if self.always_fail {
                return Err(AlarmError::DeliveryFailed {
                    reason: format!("mock fail for {}", job.record.title()),
                });
            }
            Ok(())
        }
    }

    struct MockStorage {
        captured: RefCell<Vec<ScoredJob>>,
        write_calls: Cell<u32>,
        fail: bool,
    }

    impl MockStorage {
        fn new() -> Self {
            Self { captured: RefCell::new(vec![]), write_calls: Cell::new(0), fail: false }
        }

        fn failing() -> Self {
            Self { fail: true, ..Self::new() }
        }
    }

    impl Storage for MockStorage {
        async fn write_batch(
            &self,
            batch: Vec<ScoredJob>,
        ) -> Result<Vec<uuid::Uuid>, StorageError> {
            self.write_calls.set(self.write_calls.get() + 1);
            if self.fail {
                return Err(StorageError::Unavailable);
            }
            let ids = batch.iter().map(|_| uuid::Uuid::new_v4()).collect();
            self.captured.borrow_mut().extend(batch);
            Ok(ids)
        }

        async fn query(&self, _query: &JobQuery) -> Result<Vec<StoredJob>, StorageError> {
            Ok(vec![])
        }

        async fn stats(&self) -> Result<StorageStats, StorageError> {
            Ok(StorageStats::default())
        }
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    #[test]
    fn config_rejects_zero_max_batch() {
        let result = ScreenerConfig::builder(0).build();
        assert!(matches!(result, Err(ScreenerError::InvalidConfig { .. })));
    }

    #[test]
    fn builder_defaults() {
        let config = ScreenerConfig::builder(10).build().unwrap();
        assert_eq!(config.threshold, 5);
        assert_eq!(config.poll_interval, Duration::from_millis(100));
        assert!(config.iterations.is_none());
    }

    #[test]
    fn builder_overrides() {
        let config = ScreenerConfig::builder(10).threshold(8).iterations(3).build().unwrap();
        assert_eq!(config.threshold, 8);
        assert_eq!(config.iterations, Some(3));
    }

    // ------------------------------------------------------------------
    // screen_batch
    // ------------------------------------------------------------------

    #[test]
    fn partitions_at_inclusive_threshold() {
        let screener = make_screener(10);
        let report = screener.screen_batch(&MockScorer::new(), records(&["scam", "edge", "ok"]));
        let flagged: Vec<&str> = report.flagged.iter().map(|j| j.record.title()).collect();
        let clear: Vec<&str> = report.clear.iter().map(|j| j.record.title()).collect();
        assert_eq!(flagged, vec!["scam", "edge"]);
        assert_eq!(clear, vec!["ok"]);
        assert_eq!(report.failed, 0);
        assert_eq!(report.analyzed(), 3);
    }

    #[test]
    fn higher_threshold_clears_edge_case() {
        let screener = Screener::new(ScreenerConfig::builder(10).threshold(6).build().unwrap());
        let report = screener.screen_batch(&MockScorer::new(), records(&["scam", "edge"]));
        assert_eq!(report.flagged.len(), 1);
        assert_eq!(report.clear.len(), 1);
    }

    #[test]
    fn scoring_failure_skips_only_that_record() {
        let screener = make_screener(10);
        let scorer = MockScorer::new();
        let report = screener.screen_batch(&scorer, records(&["scam", "broken", "ok", "scam"]));
        assert_eq!(scorer.calls.get(), 4, "every record must be attempted");
        assert_eq!(report.failed, 1);
        assert_eq!(report.flagged.len(), 2);
        assert_eq!(report.clear.len(), 1);
    }

    #[test]
    fn empty_batch_yields_empty_report() {
        let report = make_screener(10).screen_batch(&MockScorer::new(), vec![]);
        assert_eq!(report.analyzed(), 0);
    }

    #[test]
    fn heuristic_scorer_separates_scam_from_legitimate() {
        let scam = JobRecord::new(
            "Work From Home - No Experience!",
            "Just pay $99 registration fee. Contact us on WhatsApp. Send your bank account details.",
        );
        let legit = JobRecord::new(
            "Software Engineer",
            "We are looking for a skilled software engineer with experience in Python, \
             JavaScript, and AWS.",
        );
        let report = make_screener(10).screen_batch(&ScamAnalyzer::standard(), vec![scam, legit]);
        assert_eq!(report.flagged.len(), 1);
        assert_eq!(report.flagged[0].record.title(), "Work From Home - No Experience!");
        assert_eq!(report.clear.len(), 1);
        assert_eq!(report.clear[0].score(), 0);
    }

    // ------------------------------------------------------------------
    // screen_once
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn reads_at_most_max_batch() {
        let screener = make_screener(3);
        let source = MockSource::new(records(&["ok"; 10]));
        let outcome = screener
            .screen_once(&source, &MockScorer::new(), &MockAlarm::new(), &MockStorage::new())
            .await
            .unwrap();
        assert_eq!(outcome.report.analyzed(), 3);
        assert_eq!(source.records.borrow().len(), 7);
    }

    #[tokio::test]
    async fn only_flagged_records_are_stored() {
        let screener = make_screener(10);
        let source = MockSource::new(records(&["scam", "ok", "edge", "ok"]));
        let storage = MockStorage::new();

        let outcome = screener
            .screen_once(&source, &MockScorer::new(), &MockAlarm::new(), &storage)
            .await
            .unwrap();

        assert_eq!(outcome.stored.len(), 2);
        let titles: Vec<String> =
            storage.captured.borrow().iter().map(|j| j.record.title().to_owned()).collect();
        assert_eq!(titles, vec!["scam", "edge"]);
    }

    #[tokio::test]
    async fn storage_not_called_when_nothing_flagged() {
        let screener = make_screener(10);
        let source = MockSource::new(records(&["ok", "ok"]));
        let storage = MockStorage::new();

        let outcome = screener
            .screen_once(&source, &MockScorer::new(), &MockAlarm::new(), &storage)
            .await
            .unwrap();

        assert!(outcome.stored.is_empty());
        assert_eq!(storage.write_calls.get(), 0);
    }

    #[tokio::test]
    async fn exactly_n_alarms_for_n_flagged() {
        let screener = make_screener(10);
        let source = MockSource::new(records(&["scam", "ok", "scam", "edge"]));
        let alarm = MockAlarm::new();

        screener
            .screen_once(&source, &MockScorer::new(), &alarm, &MockStorage::new())
            .await
            .unwrap();

        assert_eq!(alarm.call_count.get(), 3);
    }

    #[tokio::test]
    async fn alarm_failures_collected_and_storage_still_written() {
        let screener = make_screener(10);
        let source = MockSource::new(records(&["scam", "scam", "ok"]));
        let alarm = MockAlarm::always_failing();
        let storage = MockStorage::new();

        let outcome = screener
            .screen_once(&source, &MockScorer::new(), &alarm, &storage)
            .await
            .unwrap();

        assert_eq!(alarm.call_count.get(), 2, "all alarms must be attempted");
        assert_eq!(outcome.alarm_errors.len(), 2);
        assert_eq!(storage.captured.borrow().len(), 2, "storage write must proceed");
    }

    #[tokio::test]
    async fn closed_source_maps_to_read_error() {
        let screener = make_screener(10);
        let result = screener
            .screen_once(
                &MockSource::new(vec![]),
                &MockScorer::new(),
                &MockAlarm::new(),
                &MockStorage::new(),
            )
            .await;
        assert!(
            matches!(result, Err(ScreenerError::Read(BufferError::Closed))),
            "Closed must map to ScreenerError::Read: {result:?}"
        );
    }

    #[tokio::test]
    async fn storage_failure_maps_to_store_error() {
        let screener = make_screener(10);
        let result = screener
            .screen_once(
                &MockSource::new(records(&["scam"])),
                &MockScorer::new(),
                &MockAlarm::new(),
                &MockStorage::failing(),
            )
            .await;
        assert!(
            matches!(result, Err(ScreenerError::Store(StorageError::Unavailable))),
            "storage failure must map to ScreenerError::Store: {result:?}"
        );
    }

    // ------------------------------------------------------------------
    // run loop
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn run_drains_source_and_aggregates_totals() {
        let screener = make_screener(2);
        let source = MockSource::new(records(&["scam", "ok", "broken", "edge", "ok"]));
        let storage = MockStorage::new();

        let totals = screener
            .run(&source, &MockScorer::new(), &MockAlarm::always_failing(), &storage)
            .await
            .unwrap();

        assert_eq!(
            totals,
            ScreeningTotals {
                batches: 3,
                analyzed: 5,
                flagged: 2,
                clear: 2,
                failed: 1,
                stored: 2,
            }
        );
        assert_eq!(storage.captured.borrow().len(), 2);
    }

    #[tokio::test]
    async fn run_stops_after_iteration_limit() {
        let screener = Screener::new(
            ScreenerConfig::builder(1)
                .iterations(2)
                .poll_interval(Duration::ZERO)
                .build()
                .unwrap(),
        );
        let source = MockSource::new(records(&["ok"; 5]));

        let totals = screener
            .run(&source, &MockScorer::new(), &MockAlarm::new(), &MockStorage::new())
            .await
            .unwrap();

        assert_eq!(totals.batches, 2);
        assert_eq!(source.records.borrow().len(), 3);
    }

    #[tokio::test]
    async fn run_stops_gracefully_on_closed() {
        let result = make_screener(10)
            .run(
                &MockSource::new(vec![]),
                &MockScorer::new(),
                &MockAlarm::new(),
                &MockStorage::new(),
            )
            .await;
        assert_eq!(result.unwrap(), ScreeningTotals::default());
    }

    #[tokio::test]
    async fn run_propagates_storage_failure() {
        let result = make_screener(10)
            .run(
                &MockSource::new(records(&["scam"])),
                &MockScorer::new(),
                &MockAlarm::new(),
                &MockStorage::failing(),
            )
            .await;
        assert!(matches!(result, Err(ScreenerError::Store(_))), "{result:?}");
    }
}
