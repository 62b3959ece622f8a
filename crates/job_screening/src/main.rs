// Rust guideline compliant 2026-10-12

//! Job-screening pipeline entry point.
//!
//! Wires the generator, the acquisition queue, the screener with the heuristic
//! analyzer, the log alarm, and in-memory storage, and runs them concurrently.
//!
//! # Usage
//!
//! ```text
//! # Infinite mode -- press CTRL+C to stop
//! RUST_LOG=info cargo run --bin job_screening
//!
//! # Ten batches of results for a scam-typical search
//! RUST_LOG=info cargo run --bin job_screening -- --iterations 10 --query "data entry"
//! ```

mod adapters;
mod summary;

use adapters::in_memory_storage::InMemoryStorage;
use adapters::job_queue::JobQueue;
use adapters::log_alarm::LogAlarm;
use analyzer::ScamAnalyzer;
use anyhow::Context as _;
use clap::Parser;
use generator::{Generator, GeneratorConfig};
use screener::{Screener, ScreenerConfig};
use std::time::Duration;
use tracing::Instrument as _;

/// Run the synthetic job-screening pipeline with in-memory storage.
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
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    // -- Generator: synthetic postings -> queue --
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

    // -- Screener: queue -> analyzer -> alarm + storage --
    let screener = Screener::new(
        ScreenerConfig::builder(10)
            // Short cadence keeps the screener close behind the generator.
            .poll_interval(Duration::from_millis(25))
            .threshold(args.threshold)
            .build()
            .context("failed to build screener config")?,
    );
    let analyzer = ScamAnalyzer::standard();
    let alarm = LogAlarm::new();
    let storage = InMemoryStorage::new(10_000);

    // Finite mode: generator.run completes -> close() -> screener drains -> join resolves.
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
