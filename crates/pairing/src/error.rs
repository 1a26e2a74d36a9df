//! Error type for the pairing crate.

use thiserror::Error;

/// Failures that can occur while fanning a pair comparison out to a worker,
/// or while a [`crate::sink::Sink`] persists results.
#[derive(Debug, Error)]
pub enum PairingError {
    /// The per-pair comparison did not complete within the configured
    /// timeout.
    #[error("comparing company {a} against {b} timed out")]
    Timeout { a: String, b: String },

    /// The worker task running the comparison panicked or was cancelled.
    #[error("worker task for company {a} against {b} did not complete: {reason}")]
    WorkerFailed {
        a: String,
        b: String,
        reason: String,
    },

    /// A [`crate::sink::Sink`] failed to persist a batch of matches.
    #[error("sink failed: {0}")]
    Sink(String),
}
