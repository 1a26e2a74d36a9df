//! Bounded fan-out of `CompanyMatcher` over the cartesian product of two
//! sources.

use std::sync::Arc;
use std::time::{Duration, Instant};

use matching::{Company, CompanyMatch, CompanyMatcher};
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::error::PairingError;
use crate::metrics::metrics_recorder;
use crate::source::Source;

/// Creates matches between two company data sources by running a
/// `CompanyMatcher` across every `(company_a, company_b)` pair, bounded to
/// at most `worker_amount` comparisons in flight at once.
///
/// Pairs are submitted in deterministic order — source A's outer loop,
/// source B's inner loop, both in source iteration order — but because
/// each pair runs as an independently scheduled task, completion order is
/// not guaranteed to match submission order once `worker_amount` allows
/// more than one pair to run concurrently.
pub struct SourcesMatcher {
    matcher: Arc<CompanyMatcher>,
    semaphore: Arc<Semaphore>,
    pair_timeout: Option<Duration>,
}

impl SourcesMatcher {
    /// `worker_amount` is the maximum number of pair comparisons allowed to
    /// run concurrently. `pair_timeout`, if set, bounds how long a single
    /// comparison may take before it is reported as [`PairingError::Timeout`].
    pub fn new(matcher: CompanyMatcher, worker_amount: usize, pair_timeout: Option<Duration>) -> Self {
        assert!(worker_amount > 0, "worker_amount must be at least 1");
        Self {
            matcher: Arc::new(matcher),
            semaphore: Arc::new(Semaphore::new(worker_amount)),
            pair_timeout,
        }
    }

    /// Submit every `(company_a, company_b)` pair across both sources as a
    /// task and return their handles in submission order.
    ///
    /// `source_b` is re-loaded once per `company_a`, so a source backed by
    /// re-readable storage (a file, a query) should expect to be read
    /// repeatedly rather than exactly once — see [`Source::load`].
    pub fn compare(
        &self,
        source_a: &dyn Source,
        source_b: &dyn Source,
    ) -> Vec<JoinHandle<Result<CompanyMatch, PairingError>>> {
        let mut handles = Vec::new();

        for company_a in source_a.load() {
            for company_b in source_b.load() {
                handles.push(self.submit(company_a.clone(), company_b));
            }
        }

        handles
    }

    fn submit(&self, company_a: Company, company_b: Company) -> JoinHandle<Result<CompanyMatch, PairingError>> {
        let matcher = Arc::clone(&self.matcher);
        let semaphore = Arc::clone(&self.semaphore);
        let pair_timeout = self.pair_timeout;

        tokio::spawn(async move {
            let _permit = semaphore
                .acquire_owned()
                .await
                .expect("pairing semaphore closed unexpectedly");

            let a_id = company_a.source_id.clone();
            let b_id = company_b.source_id.clone();
            let started = Instant::now();

            let compare = async { matcher.match_companies(&company_a, &company_b) };

            let outcome = match pair_timeout {
                Some(timeout) => tokio::time::timeout(timeout, compare).await.ok(),
                None => Some(compare.await),
            };

            match outcome {
                Some(result) => {
                    if let Some(metrics) = metrics_recorder() {
                        metrics.record_pair(&a_id, &b_id, started.elapsed(), result.score);
                    }
                    info!(a = %a_id, b = %b_id, score = result.score, "pair compared");
                    Ok(result)
                }
                None => {
                    if let Some(metrics) = metrics_recorder() {
                        metrics.record_timeout(&a_id, &b_id);
                    }
                    warn!(a = %a_id, b = %b_id, "pair comparison timed out");
                    Err(PairingError::Timeout { a: a_id, b: b_id })
                }
            }
        })
    }
}
