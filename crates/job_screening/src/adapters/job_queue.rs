// Rust guideline compliant 2026-10-12

//! Acquisition queue between the generator and the screener.
//!
//! Implements both `JobSink` and `JobSource`. An empty queue cooperatively
//! yields rather than signaling `Closed`; an explicit `close()` signals
//! end-of-data to readers. Meant for `tokio::join!` on a `current_thread` runtime.

use std::cell::RefCell;
use std::collections::VecDeque;

use domain::{BufferError, JobRecord, JobSink, JobSource};

#[derive(Debug, Default)]
struct QueueState {
    records: VecDeque<JobRecord>,
    closed: bool,
}

/// FIFO queue of raw job records.
///
/// The `RefCell` borrow is always released before any `.await` inside
/// `read_batch`, so interleaved polling within `tokio::join!` cannot panic.
#[derive(Debug, Default)]
pub struct JobQueue {
    state: RefCell<QueueState>,
}

impl JobQueue {
    /// Create an empty, open queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal end-of-data. Idempotent.
    pub fn close(&self) {
        self.state.borrow_mut().closed = true;
    }

    /// Records waiting to be read.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.borrow().records.len()
    }

    /// `true` when nothing is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl JobSink for JobQueue {
    /// Append `batch` if the queue is open.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Closed`] after [`JobQueue::close`].
    async fn write_batch(&self, batch: Vec<JobRecord>) -> Result<(), BufferError> {
        let mut state = self.state.borrow_mut();
        if state.closed {
            return Err(BufferError::Closed);
        }
        state.records.extend(batch);
        Ok(())
    }
}

impl JobSource for JobQueue {
    /// Take up to `max` records from the front; yield and retry while empty and open.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::Closed`] once the queue is closed and drained.
    async fn read_batch(&self, max: usize) -> Result<Vec<JobRecord>, BufferError> {
        loop {
            let ready = {
                let mut state = self.state.borrow_mut();
                if !state.records.is_empty() {
                    let count = max.min(state.records.len());
                    Some(Ok(state.records.drain(..count).collect()))
                } else if state.closed {
                    Some(Err(BufferError::Closed))
                } else {
                    None
                }
            };

            match ready {
                Some(result) => return result,
                None => tokio::task::yield_now().await,
            }
        }
    }
}
