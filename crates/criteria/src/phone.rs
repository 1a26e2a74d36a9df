//! Phone number criterion.

use normalize::normalize_phone;

use crate::company::Company;
use crate::criterion::Criterion;
use crate::verdict::Verdict;

/// Compares two phone numbers after normalizing both to E.164, using each
/// company's own `country` field as the parse hint. Unlike [`crate::field::FieldCriterion`]
/// this needs two source fields per side, so it isn't expressible as a
/// plain field comparison.
pub struct PhoneCriterion {
    weight: u32,
}

impl PhoneCriterion {
    pub fn new(weight: u32) -> Self {
        Self { weight }
    }
}

impl Criterion for PhoneCriterion {
    fn name(&self) -> &str {
        "PhoneCriterion"
    }

    fn weight(&self) -> u32 {
        self.weight
    }

    fn evaluate(&self, one: &Company, two: &Company) -> Verdict {
        let a = normalize_phone(one.phone.as_deref(), one.country.as_deref());
        let b = normalize_phone(two.phone.as_deref(), two.country.as_deref());
        Verdict::from_comparison(a, b)
    }
}
