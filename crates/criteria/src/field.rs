//! Generic single-field equality criterion.

use crate::company::Company;
use crate::criterion::Criterion;
use crate::verdict::Verdict;

/// Compares a single field between two companies, after normalizing both
/// sides with the given function. Agrees on equality, disagrees otherwise,
/// and is undetermined if either normalization yields nothing.
///
/// This is the workhorse most concrete criteria are built from: `name`,
/// `city`, `address`, `postal_code`, and `website` all reduce to "extract
/// a field, normalize it, compare the two normalized values."
pub struct FieldCriterion {
    name: &'static str,
    weight: u32,
    extractor: fn(&Company) -> Option<&str>,
    normalize: fn(Option<&str>) -> Option<String>,
}

impl FieldCriterion {
    pub fn new(
        name: &'static str,
        weight: u32,
        extractor: fn(&Company) -> Option<&str>,
        normalize: fn(Option<&str>) -> Option<String>,
    ) -> Self {
        Self {
            name,
            weight,
            extractor,
            normalize,
        }
    }
}

impl Criterion for FieldCriterion {
    fn name(&self) -> &str {
        self.name
    }

    fn weight(&self) -> u32 {
        self.weight
    }

    fn evaluate(&self, one: &Company, two: &Company) -> Verdict {
        let a = (self.normalize)((self.extractor)(one));
        let b = (self.normalize)((self.extractor)(two));
        Verdict::from_comparison(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(name: &str, city: Option<&str>) -> Company {
        Company {
            source_id: "1".into(),
            source_name: "test".into(),
            name: name.into(),
            website: None,
            email: None,
            phone: None,
            address: None,
            postal_code: None,
            city: city.map(String::from),
            country: None,
        }
    }

    fn city_criterion() -> FieldCriterion {
        FieldCriterion::new("city", 1, |c| c.city.as_deref(), normalize::normalize_text)
    }

    #[test]
    fn agrees_on_normalized_equality() {
        let a = company("A", Some("  Paris "));
        let b = company("B", Some("paris"));
        assert_eq!(city_criterion().evaluate(&a, &b), Verdict::Agree);
    }

    #[test]
    fn disagrees_on_differing_values() {
        let a = company("A", Some("Paris"));
        let b = company("B", Some("Lyon"));
        assert_eq!(city_criterion().evaluate(&a, &b), Verdict::Disagree);
    }

    #[test]
    fn undetermined_when_either_side_missing() {
        let a = company("A", None);
        let b = company("B", Some("Lyon"));
        assert_eq!(city_criterion().evaluate(&a, &b), Verdict::Undetermined);
    }
}
