//! Three-valued matching criteria for comparing two company records.
//!
//! Every [`Criterion`] answers `Agree`, `Disagree`, or `Undetermined` —
//! never a plain bool — so that missing source data degrades to "we don't
//! know" instead of silently counting as a mismatch. The `matching` crate
//! aggregates a set of these into a single score.

pub mod address;
pub mod company;
pub mod criterion;
pub mod defaults;
pub mod domain;
pub mod field;
pub mod name_contained;
pub mod phone;
pub mod verdict;

pub use address::{AddressCriterion, PostalCodeCriterion};
pub use company::Company;
pub use criterion::Criterion;
pub use defaults::default_criteria;
pub use domain::DomainNameCriterion;
pub use field::FieldCriterion;
pub use name_contained::NameContainedCriterion;
pub use phone::PhoneCriterion;
pub use verdict::Verdict;
