//! The `Sink` seam: where completed matches go.

use matching::CompanyMatch;

use crate::error::PairingError;

/// A destination `SourcesMatcher` results are written to.
///
/// Implementations are expected to be cheap to clone/share (an `Arc`
/// around internal mutable state) since a single sink instance is driven
/// from the result-collection loop, not from individual workers.
pub trait Sink: Send + Sync {
    /// Persist a single match.
    fn add(&self, result: CompanyMatch) -> Result<(), PairingError>;

    /// Persist a batch of matches. The default implementation calls
    /// [`Sink::add`] once per item; implementations with a genuinely
    /// batched backend (a bulk INSERT, a buffered writer) should override
    /// this for efficiency.
    fn add_all(&self, results: Vec<CompanyMatch>) -> Result<(), PairingError> {
        for result in results {
            self.add(result)?;
        }
        Ok(())
    }

    /// Flush any buffered results to the underlying storage. Called once
    /// after the comparison is complete; sinks that write eagerly can make
    /// this a no-op.
    fn flush(&self) -> Result<(), PairingError>;
}
