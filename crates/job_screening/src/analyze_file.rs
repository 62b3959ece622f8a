// Rust guideline compliant 2026-10-12

//! Batch analysis of a JSON file of job postings.
//!
//! Reads an array of postings, scores every one with the heuristic analyzer,
//! writes all scored postings to `--output`, and writes the flagged subset to
//! a sibling `<stem>_misdeeds.json`. Each output object is the input object
//! with `scam_score` and `scam_reasons` set; unknown keys pass through.
//! Array elements that are not postings are logged and skipped.
//!
//! # Usage
//!
//! ```text
//! RUST_LOG=info cargo run --bin analyze_file -- --input jobs.json --output scored.json
//! ```

use analyzer::{AnalyzerConfig, ScamAnalyzer};
use anyhow::Context as _;
use clap::Parser;
use domain::{JobRecord, ScoredJob};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Score a JSON array of job postings for fraud likelihood.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// JSON file holding an array of postings.
    #[arg(long)]
    input: PathBuf,
    /// Destination for every scored posting.
    #[arg(long, default_value = "output.json")]
    output: PathBuf,
    /// Score at or above which a posting is written to the misdeeds file.
    #[arg(long, default_value_t = screener::DEFAULT_THRESHOLD)]
    threshold: u32,
    /// Word list replacing the bundled spelling dictionary.
    #[arg(long)]
    dictionary: Option<PathBuf>,
}

/// Summary of one file run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct FileReport {
    analyzed: usize,
    flagged: usize,
    skipped: usize,
}

/// Path of the flagged-postings file written next to `output`.
fn misdeeds_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .map_or_else(|| "output".into(), |s| s.to_string_lossy());
    output.with_file_name(format!("{stem}_misdeeds.json"))
}

fn write_json(path: &Path, postings: &[Value]) -> anyhow::Result<()> {
    let body =
        serde_json::to_string_pretty(postings).context("failed to serialize scored postings")?;
    std::fs::write(path, body).with_context(|| format!("failed to write {}", path.display()))
}

/// An input element after scoring.
#[derive(Debug)]
struct ScoredElement {
    /// The input object plus `scam_score` and `scam_reasons`.
    value: Value,
    job: ScoredJob,
}

/// Score one array element, returning the element with its assessment merged in.
///
/// # Errors
///
/// Returns an error when `element` is not a JSON object.
fn score_element(analyzer: &ScamAnalyzer, mut element: Value) -> anyhow::Result<ScoredElement> {
    if !element.is_object() {
        anyhow::bail!("expected a JSON object, found {element}");
    }
    let record: JobRecord =
        serde_json::from_value(element.clone()).context("not a job posting")?;
    let scored = analyzer.analyze_job(record);
    if let Value::Object(object) = &mut element {
        object.insert("scam_score".to_owned(), Value::from(scored.score()));
        object.insert("scam_reasons".to_owned(), Value::from(scored.reasons().to_vec()));
    }
    Ok(ScoredElement { value: element, job: scored })
}

fn analyze_file(
    analyzer: &ScamAnalyzer,
    input: &Path,
    output: &Path,
    threshold: u32,
) -> anyhow::Result<FileReport> {
    let raw = std::fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let elements: Vec<Value> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of job postings", input.display()))?;

    let mut report = FileReport::default();
    let mut scored = Vec::with_capacity(elements.len());
    let mut flagged = vec![];
    for (index, element) in elements.into_iter().enumerate() {
        match score_element(analyzer, element) {
            Ok(ScoredElement { value, job }) => {
                if job.is_flagged(threshold) {
                    flagged.push(value.clone());
                }
                scored.push(value);
            }
            Err(e) => {
                tracing::warn!(index, error = %e, "analyze_file.element.skipped");
                report.skipped += 1;
            }
        }
    }
    report.analyzed = scored.len();
    report.flagged = flagged.len();

    write_json(output, &scored)?;
    write_json(&misdeeds_path(output), &flagged)?;
    Ok(report)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let mut config = AnalyzerConfig::builder();
    if let Some(path) = &args.dictionary {
        config = config.dictionary_path(path);
    }
    let analyzer = ScamAnalyzer::new(config.build().context("failed to build analyzer config")?);

    let report = analyze_file(&analyzer, &args.input, &args.output, args.threshold)?;
    tracing::info!(
        input = %args.input.display(),
        output = %args.output.display(),
        analyzed = report.analyzed,
        flagged = report.flagged,
        skipped = report.skipped,
        "analyze_file.done"
    );
    Ok(())
}
