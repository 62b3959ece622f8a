// Rust guideline compliant 2026-10-12

//! In-memory adapter for the `Storage` port.
//!
//! Intended for demo runs and unit tests. Returns
//! `StorageError::CapacityExceeded` when a batch would not fit; never returns
//! `StorageError::Unavailable`.

use std::cell::RefCell;

use chrono::Utc;
use domain::{JobQuery, ScoredJob, Storage, StorageError, StorageStats, StoredJob};
use uuid::Uuid;

/// `Storage` adapter backed by an in-memory `Vec<StoredJob>` in insertion order.
// #[allow] not #[expect]: this adapter is dead in the SQLite binary only, so
// #[expect] would be unfulfilled in the other one.
#[allow(dead_code, reason = "used by job_screening binary; dead in job_screening_sqlite")]
#[derive(Debug)]
pub struct InMemoryStorage {
    rows: RefCell<Vec<StoredJob>>,
    /// Maximum number of records the storage can hold.
    capacity: usize,
}

impl InMemoryStorage {
    /// Create an empty storage with the given `capacity`.
    #[allow(dead_code, reason = "used by job_screening binary; dead in job_screening_sqlite")]
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self { rows: RefCell::new(vec![]), capacity }
    }

    /// Number of stored records.
    #[cfg(test)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.borrow().len()
    }
}

impl Storage for InMemoryStorage {
    /// Append `batch`, stamping each record with a fresh id and the current time.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::CapacityExceeded` when `stored + batch.len()`
    /// exceeds the configured capacity. Nothing is written in that case.
    async fn write_batch(&self, batch: Vec<ScoredJob>) -> Result<Vec<Uuid>, StorageError> {
        let mut rows = self.rows.borrow_mut();
        if rows.len() + batch.len() > self.capacity {
            return Err(StorageError::CapacityExceeded { capacity: self.capacity });
        }
        let date_scraped = Utc::now();
        let ids = batch
            .into_iter()
            .map(|job| {
                let id = Uuid::new_v4();
                rows.push(StoredJob { id, date_scraped, job });
                id
            })
            .collect();
        Ok(ids)
    }

    /// Highest score first; newest first on ties, later inserts winning exact ties.
    async fn query(&self, query: &JobQuery) -> Result<Vec<StoredJob>, StorageError> {
        let rows = self.rows.borrow();
        let mut hits: Vec<StoredJob> =
            rows.iter().rev().filter(|row| query.matches(&row.job)).cloned().collect();
        // Stable sort keeps the reversed insertion order among equal keys.
        hits.sort_by(|a, b| {
            b.job.score().cmp(&a.job.score()).then_with(|| b.date_scraped.cmp(&a.date_scraped))
        });
        hits.truncate(query.limit);
        Ok(hits)
    }

    async fn stats(&self) -> Result<StorageStats, StorageError> {
        let rows = self.rows.borrow();
        Ok(StorageStats::tally(rows.iter().map(|row| (row.job.score(), row.job.reasons()))))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
