//! Substring-containment criterion on company names.

use normalize::normalize_text;

use crate::company::Company;
use crate::criterion::Criterion;
use crate::verdict::Verdict;

/// Agrees when the normalized name of one company is a substring of the
/// other's (in either direction). Catches cases like "Acme" vs. "Acme
/// Corporation" that an exact `name` match would reject.
pub struct NameContainedCriterion {
    weight: u32,
}

impl NameContainedCriterion {
    pub fn new(weight: u32) -> Self {
        Self { weight }
    }
}

impl Criterion for NameContainedCriterion {
    fn name(&self) -> &str {
        "NameContainedCriterion"
    }

    fn weight(&self) -> u32 {
        self.weight
    }

    fn evaluate(&self, one: &Company, two: &Company) -> Verdict {
        let a = normalize_text(one.name());
        let b = normalize_text(two.name());
        match (a, b) {
            (Some(a), Some(b)) => {
                if a.contains(&b) || b.contains(&a) {
                    Verdict::Agree
                } else {
                    Verdict::Disagree
                }
            }
            _ => Verdict::Undetermined,
        }
    }
}
