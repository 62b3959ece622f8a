// Rust guideline compliant 2026-10-12

//! End-of-run report shared by the pipeline binaries.

use anyhow::Context as _;
use domain::{JobQuery, Storage};
use screener::ScreeningTotals;

/// Records listed in the closing report.
const TOP_LISTED: usize = 5;

/// Log run totals, storage statistics, and the highest-scoring stored records.
///
/// `totals` is `None` when the run was interrupted before the screener returned.
///
/// # Errors
///
/// Returns an error when storage cannot be queried.
pub async fn log_summary<D: Storage>(
    storage: &D,
    totals: Option<ScreeningTotals>,
) -> anyhow::Result<()> {
    if let Some(t) = totals {
        tracing::info!(
            batches = t.batches,
            analyzed = t.analyzed,
            flagged = t.flagged,
            clear = t.clear,
            failed = t.failed,
            stored = t.stored,
            "main.run.totals"
        );
    }

    let stats = storage.stats().await.context("failed to read storage stats")?;
    tracing::info!(
        total = stats.total,
        high_score = stats.high_score,
        top_reasons = ?stats.top_reasons,
        "main.storage.stats"
    );

    let top = storage
        .query(&JobQuery::default().limit(TOP_LISTED))
        .await
        .context("failed to query stored misdeeds")?;
    for (rank, row) in top.iter().enumerate() {
        tracing::info!(
            rank = rank + 1,
            id = %row.id,
            title = row.job.record.title(),
            company = row.job.record.company(),
            score = row.job.score(),
            "main.storage.top"
        );
    }
    Ok(())
}
