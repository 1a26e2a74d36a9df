//! The `Criterion` contract every concrete comparison implements.

use crate::company::Company;
use crate::verdict::Verdict;

/// A single, named, weighted point of comparison between two companies.
///
/// Implementations must be pure and side-effect free: given the same pair
/// of companies, `evaluate` always returns the same verdict. The
/// `CompanyMatcher` in the `matching` crate relies on this to aggregate
/// verdicts into a score without re-running comparisons.
pub trait Criterion: Send + Sync {
    /// Stable identifier reported in [`crate::company::Company`] match
    /// output (`success_criteria`) and used in logs.
    fn name(&self) -> &str;

    /// The weight this criterion contributes to the overall score when it
    /// resolves to [`Verdict::Agree`] or [`Verdict::Disagree`].
    fn weight(&self) -> u32;

    /// Compare `one` and `two` under this criterion.
    fn evaluate(&self, one: &Company, two: &Company) -> Verdict;
}
