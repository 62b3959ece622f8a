// Rust guideline compliant 2026-10-12

//! Demo adapter for the `Alarm` port.
//!
//! Logs each flagged posting via `tracing::warn!` and always returns `Ok(())`.

use domain::{Alarm, AlarmError, ScoredJob};

/// `Alarm` adapter that emits a warning log for each flagged posting.
#[derive(Debug, Default)]
pub struct LogAlarm;

impl LogAlarm {
    /// Create a new log alarm adapter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Alarm for LogAlarm {
    async fn trigger(&self, job: &ScoredJob) -> Result<(), AlarmError> {
        tracing::warn!(
            title = job.record.title(),
            company = job.record.company(),
            score = job.score(),
            reasons = ?job.reasons(),
            "log_alarm.scam_alert"
        );
        Ok(())
    }
}
