//! Weighted, partial-evidence scoring for a single company pair.
//!
//! Builds on the three-valued criteria in the `criteria` crate: each
//! criterion's [`criteria::Verdict`] is folded into a weighted score by
//! [`CompanyMatcher`], producing a [`CompanyMatch`].

pub mod company_match;
pub mod matcher;

pub use company_match::CompanyMatch;
pub use criteria::Company;
pub use matcher::CompanyMatcher;
