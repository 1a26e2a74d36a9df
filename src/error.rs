//! Top-level error type for the entity resolver binary.

use thiserror::Error;

/// Errors surfaced by the reference `Source`/`Sink` implementations and the
/// driver loop. Crate-internal failures (a bad criterion, a malformed
/// pair) are reported through `pairing::PairingError`; this type wraps
/// those alongside I/O failures specific to the CLI's CSV plumbing.
///
/// Per-row read/parse failures in [`crate::sources::CsvSource`] are not
/// represented here: they are logged and the offending row is skipped, so
/// the source keeps streaming rather than failing the whole run (see
/// `CsvSource::load`). Only a failure to create the output sink is fatal.
#[derive(Debug, Error)]
pub enum ResolverError {
    #[error("failed to write match to {path}: {source}")]
    SinkWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Pairing(#[from] pairing::PairingError),
}
