//! The default criteria set, mirroring production's configuration.

use normalize::normalize_text;

use crate::address::AddressCriterion;
use crate::company::Company;
use crate::criterion::Criterion;
use crate::domain::DomainNameCriterion;
use crate::field::FieldCriterion;
use crate::name_contained::NameContainedCriterion;
use crate::phone::PhoneCriterion;

/// The criteria the `CompanyMatcher` in the `matching` crate uses when
/// none are supplied explicitly.
///
/// Order matters only for [`AddressCriterion`]'s internal short-circuiting;
/// overall score computation is order-independent.
pub fn default_criteria() -> Vec<Box<dyn Criterion>> {
    vec![
        Box::new(DomainNameCriterion::new(5)),
        Box::new(FieldCriterion::new("name", 3, Company::name, normalize_text)),
        Box::new(AddressCriterion::new(3)),
        Box::new(PhoneCriterion::new(3)),
        Box::new(NameContainedCriterion::new(1)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_has_the_five_documented_criteria() {
        let criteria = default_criteria();
        assert_eq!(criteria.len(), 5);
        let names: Vec<&str> = criteria.iter().map(|c| c.name()).collect();
        assert!(names.contains(&"DomainNameCriterion"));
        assert!(names.contains(&"AddressCriterion"));
        assert!(names.contains(&"PhoneCriterion"));
        assert!(names.contains(&"NameContainedCriterion"));
    }

    #[test]
    fn total_default_weight_matches_documented_budget() {
        let total: u32 = default_criteria().iter().map(|c| c.weight()).sum();
        assert_eq!(total, 5 + 3 + 3 + 3 + 1);
    }
}
