//! Postal code and composite address criteria.

use normalize::{normalize_postal_code, normalize_text};

use crate::company::Company;
use crate::criterion::Criterion;
use crate::field::FieldCriterion;
use crate::verdict::Verdict;

/// Compares normalized postal codes, stripping the trailing `.0` artifact
/// left by numeric-typed spreadsheet exports.
pub struct PostalCodeCriterion {
    inner: FieldCriterion,
}

impl PostalCodeCriterion {
    pub fn new(weight: u32) -> Self {
        Self {
            inner: FieldCriterion::new(
                "PostalCodeCriterion",
                weight,
                |c| c.postal_code.as_deref(),
                normalize_postal_code,
            ),
        }
    }
}

impl Criterion for PostalCodeCriterion {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn weight(&self) -> u32 {
        self.inner.weight()
    }

    fn evaluate(&self, one: &Company, two: &Company) -> Verdict {
        self.inner.evaluate(one, two)
    }
}

/// A composite criterion: agrees only if `address`, postal code, `city`,
/// and `country` all agree. The first sub-criterion that does not agree
/// is returned as-is (`Disagree` or `Undetermined`) — a single missing
/// field is enough to make the whole address comparison indeterminate,
/// without checking the remaining fields.
pub struct AddressCriterion {
    weight: u32,
    criteria: Vec<Box<dyn Criterion>>,
}

impl AddressCriterion {
    pub fn new(weight: u32) -> Self {
        let criteria: Vec<Box<dyn Criterion>> = vec![
            Box::new(FieldCriterion::new(
                "address",
                1,
                |c| c.address.as_deref(),
                normalize_text,
            )),
            Box::new(PostalCodeCriterion::new(1)),
            Box::new(FieldCriterion::new("city", 1, |c| c.city.as_deref(), normalize_text)),
            Box::new(FieldCriterion::new(
                "country",
                1,
                |c| c.country.as_deref(),
                normalize_text,
            )),
        ];
        Self { weight, criteria }
    }
}

impl Criterion for AddressCriterion {
    fn name(&self) -> &str {
        "AddressCriterion"
    }

    fn weight(&self) -> u32 {
        self.weight
    }

    fn evaluate(&self, one: &Company, two: &Company) -> Verdict {
        for criterion in &self.criteria {
            let verdict = criterion.evaluate(one, two);
            if !verdict.is_agree() {
                return verdict;
            }
        }
        Verdict::Agree
    }
}
