// Rust guideline compliant 2026-10-12

//! Job-screening pipeline entry point -- `SQLite` storage.
//!
//! Identical to the `job_screening` binary except that flagged postings are
//! persisted to a `SQLite` file (`misdeeds.db` in the current working
//! directory). Only this entry point and the storage adapter differ; the
//! pipeline crates are untouched.
//!
//! # Usage
//!
//! ```text
//! RUST_LOG=info cargo run --bin job_screening_sqlite -- --iterations 10
//! ```
//!
//! The file is created on first run and accumulates across runs.

mod adapters;
mod summary;

// Load sqlite_storage directly so it only enters this binary's module tree.
#[path = "adapters/sqlite_storage.rs"]
mod sqlite_storage;

use adapters::job_queue::JobQueue;
use adapters::log_alarm::LogAlarm;
use analyzer::ScamAnalyzer;
use anyhow::Context as _;
use clap::Parser;
use generator::{Generator, GeneratorConfig};
use screener::{Screener, ScreenerConfig};
use sqlite_storage::SqliteStorage;
use std::time::Duration;
use tracing::Instrument as _;

/// Run the synthetic job-screening pipeline with `SQLite` storage.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Stop the generator after this many batches. Runs until CTRL+C when absent.
    #[arg(long)]
    iterations: Option<u64>,
    /// Search query the synthetic postings answer; sets the scam share.
    #[arg(long, default_value = "data entry remote")]
    query: String,
    /// Score at or above which a posting is flagged.
    #[arg(long, default_value_t = screener::DEFAULT_THRESHOLD)]
    threshold: u32,
    /// Database URL.
    #[arg(long, default_value = "sqlite:misdeeds.db")]
    db: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let mut generator_config = GeneratorConfig::builder(20)
        .poll_interval(Duration::from_millis(500))
        .scam_probability(Generator::scam_probability_for_query(&args.query));
    if let Some(n) = args.iterations {
        generator_config = generator_config.iterations(n);
    }
    let generator = Generator::new(
        generator_config.build().context("failed to build generator config")?,
    );
    let queue = JobQueue::new();

    let screener = Screener::new(
        ScreenerConfig::builder(10)
            .poll_interval(Duration::from_millis(25))
            .threshold(args.threshold)
            .build()
            .context("failed to build screener config")?,
    );
    let analyzer = ScamAnalyzer::standard();
    let alarm = LogAlarm::new();
    let storage = SqliteStorage::new(&args.db)
        .await
        .with_context(|| format!("failed to open SQLite storage at {}", args.db))?;

    let pipeline = async {
        let (g, s) = tokio::join!(
            async {
                let r = generator.run(&queue).await;
                queue.close();
                r
            }
            .instrument(tracing::info_span!("generator")),
            screener
                .run(&queue, &analyzer, &alarm, &storage)
                .instrument(tracing::info_span!("screener"))
        );
        g.context("generator failed")?;
        s.context("screener failed")
    };

    let totals = tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("main.shutdown: ctrl_c received, closing queue");
            queue.close();
            None
        }
        result = pipeline => Some(result?),
    };

    if !queue.is_empty() {
        tracing::warn!(pending = queue.len(), "main.queue.undrained");
    }
    summary::log_summary(&storage, totals).await
}
