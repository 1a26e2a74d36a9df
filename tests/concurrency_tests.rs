//! Concurrency and worker-pool boundary tests for the resolver driver.

use matching::{Company, CompanyMatcher};
use pairing::{Source, SourcesMatcher};

struct VecSource(Vec<Company>);

impl Source for VecSource {
    fn load(&self) -> Box<dyn Iterator<Item = Company> + Send + '_> {
        Box::new(self.0.clone().into_iter())
    }
}

fn company(id: &str, name: &str) -> Company {
    Company {
        source_id: id.into(),
        source_name: "test".into(),
        name: name.into(),
        website: None,
        email: None,
        phone: None,
        address: None,
        postal_code: None,
        city: None,
        country: None,
    }
}

fn companies(prefix: &str, n: usize) -> Vec<Company> {
    (0..n).map(|i| company(&format!("{prefix}{i}"), &format!("{prefix}-company-{i}"))).collect()
}

/// `worker_amount = 1` is semantically a serialization of the same
/// cartesian product: same pair count, same scores, just no overlap.
#[tokio::test]
async fn worker_amount_one_matches_worker_amount_many_in_score_distribution() {
    let source_a = VecSource(companies("a", 6));
    let source_b = VecSource(companies("b", 6));

    let serial = SourcesMatcher::new(CompanyMatcher::new(), 1, None);
    let serial_handles = serial.compare(&source_a, &source_b);
    let mut serial_scores: Vec<f64> = Vec::new();
    for handle in serial_handles {
        serial_scores.push(handle.await.unwrap().unwrap().score);
    }

    let source_a = VecSource(companies("a", 6));
    let source_b = VecSource(companies("b", 6));
    let parallel = SourcesMatcher::new(CompanyMatcher::new(), 16, None);
    let parallel_handles = parallel.compare(&source_a, &source_b);
    let mut parallel_scores: Vec<f64> = Vec::new();
    for handle in parallel_handles {
        parallel_scores.push(handle.await.unwrap().unwrap().score);
    }

    assert_eq!(serial_scores, parallel_scores);
}

/// Submitting more pairs than `worker_amount` must still complete every
/// one of them; the semaphore bounds concurrency, not throughput.
#[tokio::test]
async fn worker_pool_drains_every_pair_when_queue_exceeds_capacity() {
    let source_a = VecSource(companies("a", 10));
    let source_b = VecSource(companies("b", 10));

    let sources_matcher = SourcesMatcher::new(CompanyMatcher::new(), 3, None);
    let handles = sources_matcher.compare(&source_a, &source_b);
    assert_eq!(handles.len(), 100);

    let mut completed = 0;
    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
        completed += 1;
    }
    assert_eq!(completed, 100);
}

/// Comparisons against distinct pairs must not interfere with each other
/// even when run concurrently — criteria are stateless, so every score in
/// a self-comparison matrix should be `1.0` regardless of execution order.
#[tokio::test]
async fn concurrent_identical_comparisons_are_mutually_independent() {
    let base = company("x1", "Acme Corporation");
    let source_a = VecSource(vec![base.clone(); 20]);
    let source_b = VecSource(vec![base]);

    let sources_matcher = SourcesMatcher::new(CompanyMatcher::new(), 8, None);
    let handles = sources_matcher.compare(&source_a, &source_b);

    for handle in handles {
        let result = handle.await.unwrap().unwrap();
        assert_eq!(result.score, 1.0);
    }
}
