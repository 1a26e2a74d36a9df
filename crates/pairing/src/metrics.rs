//! Metrics hook for the `pairing` crate.
//!
//! Callers install a global [`PairingMetrics`] implementation via
//! [`set_pairing_metrics`]; `SourcesMatcher` then reports per-pair latency
//! and score for every comparison it runs. This keeps instrumentation
//! decoupled from any specific metrics backend.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

/// Metrics observer for pair comparisons.
pub trait PairingMetrics: Send + Sync {
    /// Record the outcome of a single company-pair comparison.
    ///
    /// `source_a_id` and `source_b_id` are the `source_id` of each company,
    /// `latency` is the wall-clock duration of the comparison, and `score`
    /// is the resulting match score.
    fn record_pair(&self, source_a_id: &str, source_b_id: &str, latency: Duration, score: f64);

    /// Record that a comparison timed out rather than completing.
    fn record_timeout(&self, source_a_id: &str, source_b_id: &str);
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn PairingMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn PairingMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn PairingMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global pairing metrics recorder.
///
/// Typically called once during startup so every `SourcesMatcher` shares
/// the same metrics backend.
pub fn set_pairing_metrics(recorder: Option<Arc<dyn PairingMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock.write().expect("pairing metrics lock poisoned");
    *guard = recorder;
}
