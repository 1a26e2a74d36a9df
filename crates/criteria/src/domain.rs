//! Website domain criterion.

use normalize::normalize_domain;

use crate::company::Company;
use crate::criterion::Criterion;
use crate::field::FieldCriterion;
use crate::verdict::Verdict;

/// Compares the registrable domain extracted from each company's `website`
/// field. Usually the highest-weight, highest-precision criterion: two
/// unrelated companies essentially never share a domain.
pub struct DomainNameCriterion {
    inner: FieldCriterion,
}

impl DomainNameCriterion {
    pub fn new(weight: u32) -> Self {
        Self {
            inner: FieldCriterion::new(
                "DomainNameCriterion",
                weight,
                |c| c.website.as_deref(),
                normalize_domain,
            ),
        }
    }
}

impl Criterion for DomainNameCriterion {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn company(website: Option<&str>) -> Company {
        Company {
            source_id: "1".into(),
            source_name: "test".into(),
            name: "Acme".into(),
            website: website.map(String::from),
            email: None,
            phone: None,
            address: None,
            postal_code: None,
            city: None,
            country: None,
        }
    }

    #[test]
    fn agrees_on_same_registrable_domain_with_different_paths() {
        let a = company(Some("https://www.toto.com/about"));
        let b = company(Some("toto.com"));
        assert_eq!(DomainNameCriterion::new(5).evaluate(&a, &b), Verdict::Agree);
    }

    #[test]
    fn disagrees_on_different_domains() {
        let a = company(Some("toto.com"));
        let b = company(Some("tata.com"));
        assert_eq!(DomainNameCriterion::new(5).evaluate(&a, &b), Verdict::Disagree);
    }

    #[test]
    fn undetermined_when_website_missing() {
        let a = company(None);
        let b = company(Some("tata.com"));
        assert_eq!(DomainNameCriterion::new(5).evaluate(&a, &b), Verdict::Undetermined);
    }
}
