//! The `Source` seam: where company records come from.

use criteria::Company;

/// A data source `SourcesMatcher` draws companies from.
///
/// `load` returns a lazy, single-pass sequence rather than a materialized
/// `Vec` so that a CSV- or database-backed implementation can stream
/// records without holding the whole source in memory. [`crate::sources_matcher::SourcesMatcher`]
/// calls `load` once per outer-loop company, so implementations backed by
/// re-readable storage (a file path, a query) should expect to be invoked
/// repeatedly rather than exactly once.
pub trait Source: Send + Sync {
    /// Produce a fresh iterator over this source's companies.
    fn load(&self) -> Box<dyn Iterator<Item = Company> + Send + '_>;
}
