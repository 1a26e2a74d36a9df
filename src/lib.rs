//! Driver library for the entity-resolver binary.
//!
//! The matching core lives in the `normalize`, `criteria`, `matching`, and
//! `pairing` crates; this crate wires them into a runnable process: load
//! configuration, build the two reference [`pairing::Source`]s and a
//! reference [`pairing::Sink`], run [`pairing::SourcesMatcher::compare`]
//! over them, and apply the driver-level policy the core deliberately
//! leaves out — score threshold, per-pair timeout, and batched flushing.

pub mod config;
pub mod error;
pub mod sinks;
pub mod sources;

use std::sync::Arc;

use matching::CompanyMatcher;
use pairing::{Sink, Source, SourcesMatcher};
use tracing::{info, warn};

pub use config::ResolverConfig;
pub use error::ResolverError;
pub use sinks::CsvSink;
pub use sources::{CsvSource, InMemorySource};

/// Number of accepted matches buffered before an interim [`Sink::flush`].
pub const FLUSH_BATCH_SIZE: usize = 500;

/// Summary of a single resolver run, returned by [`run`] for callers (the
/// CLI entry point, tests) that want counts without re-deriving them from
/// logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Total pairs compared (`|A| * |B|`).
    pub pairs_compared: usize,
    /// Pairs whose score met the configured threshold.
    pub matches_accepted: usize,
    /// Pairs that timed out before the result arrived.
    pub timeouts: usize,
    /// Pairs whose worker task failed (panicked or was cancelled).
    pub worker_failures: usize,
}

/// Run a full resolver pass: compare every pair across `source_a` and
/// `source_b`, keep matches clearing `config.score_threshold`, and flush
/// them to `sink` in batches of [`FLUSH_BATCH_SIZE`].
///
/// Timeouts and worker failures are logged and skipped rather than
/// aborting the run, per the driver's recovery policy: log + continue,
/// not log + abort.
pub async fn run(
    config: &ResolverConfig,
    source_a: &dyn Source,
    source_b: &dyn Source,
    sink: &dyn Sink,
) -> Result<RunSummary, ResolverError> {
    let matcher = CompanyMatcher::new().strict(config.strict);
    let sources_matcher = SourcesMatcher::new(matcher, config.worker_amount, config.pair_timeout());

    let handles = sources_matcher.compare(source_a, source_b);
    let pairs_compared = handles.len();
    info!(pairs_compared, "submitted all pairs for comparison");

    let mut summary = RunSummary {
        pairs_compared,
        ..RunSummary::default()
    };
    let mut batch = Vec::with_capacity(FLUSH_BATCH_SIZE);

    for handle in handles {
        match handle.await {
            Ok(Ok(result)) => {
                if result.score >= config.score_threshold {
                    summary.matches_accepted += 1;
                    batch.push(result);
                    if batch.len() >= FLUSH_BATCH_SIZE {
                        flush_batch(sink, &mut batch)?;
                    }
                }
            }
            Ok(Err(pairing::PairingError::Timeout { a, b })) => {
                summary.timeouts += 1;
                warn!(a, b, "comparison timed out, skipping pair");
            }
            Ok(Err(err)) => {
                summary.worker_failures += 1;
                warn!(error = %err, "pair comparison failed, skipping pair");
            }
            Err(join_err) => {
                summary.worker_failures += 1;
                warn!(error = %join_err, "worker task panicked, skipping pair");
            }
        }
    }

    flush_batch(sink, &mut batch)?;
    sink.flush().map_err(|err| ResolverError::SinkWrite {
        path: "final flush".to_string(),
        source: std::io::Error::other(err.to_string()),
    })?;

    info!(
        pairs_compared = summary.pairs_compared,
        matches_accepted = summary.matches_accepted,
        timeouts = summary.timeouts,
        worker_failures = summary.worker_failures,
        "resolver run complete"
    );

    Ok(summary)
}

fn flush_batch(sink: &dyn Sink, batch: &mut Vec<matching::CompanyMatch>) -> Result<(), ResolverError> {
    if batch.is_empty() {
        return Ok(());
    }
    let pending = std::mem::take(batch);
    sink.add_all(pending).map_err(|err| ResolverError::SinkWrite {
        path: "batch flush".to_string(),
        source: std::io::Error::other(err.to_string()),
    })
}

/// Build the two reference CSV sources and sink a `ResolverConfig` names,
/// and run a full resolver pass against them.
///
/// This is the thin end-to-end helper the binary calls; it exists
/// separately from [`run`] so tests can exercise the core loop against
/// in-memory fixtures without touching the filesystem.
pub async fn run_from_config(config: &ResolverConfig) -> Result<RunSummary, ResolverError> {
    let source_a = CsvSource::new(config.source_a_path.clone());
    let source_b = CsvSource::new(config.source_b_path.clone());
    let sink = CsvSink::create(config.output_path.clone())?;

    run(config, &source_a, &source_b, &sink).await
}

/// Convenience wrapper pairing [`run`] with two already-loaded in-memory
/// sources and an [`Arc`]-shared sink, for callers that already hold
/// `Company` vectors (tests, embedders) rather than file paths.
pub async fn run_in_memory(
    config: &ResolverConfig,
    companies_a: Vec<matching::Company>,
    companies_b: Vec<matching::Company>,
    sink: Arc<dyn Sink>,
) -> Result<RunSummary, ResolverError> {
    let source_a = InMemorySource::new(companies_a);
    let source_b = InMemorySource::new(companies_b);
    run(config, &source_a, &source_b, sink.as_ref()).await
}
