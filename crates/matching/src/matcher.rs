//! Aggregates criterion verdicts into a single company-pair score.

use criteria::{default_criteria, Company, Criterion, Verdict};
use tracing::debug;

use crate::company_match::CompanyMatch;

/// Computes a weighted match score between two companies from a set of
/// [`Criterion`]s.
///
/// # Denominator policy
///
/// Each criterion contributes its weight to the denominator when it
/// resolves to `Agree` or `Disagree` — both mean "we had enough data to
/// compare." Whether `Undetermined` also counts toward the denominator
/// is controlled by `strict`:
///
/// - non-strict (default): `Undetermined` criteria are excluded entirely,
///   so the score reflects agreement among only the criteria that could
///   actually be evaluated.
/// - strict: `Undetermined` criteria still count toward the denominator
///   (as if they had weight but no credit), so missing data pulls the
///   score down rather than being ignored.
///
/// If every criterion is undetermined (or the criteria set is empty), the
/// denominator is zero; rather than divide by zero, the match is emitted
/// with `score = 0.0` and an empty `success_criteria` list.
pub struct CompanyMatcher {
    criteria: Vec<Box<dyn Criterion>>,
    strict: bool,
}

impl CompanyMatcher {
    /// Build a matcher with the default criteria set and non-strict mode.
    pub fn new() -> Self {
        Self {
            criteria: default_criteria(),
            strict: false,
        }
    }

    /// Build a matcher with an explicit criteria set.
    pub fn with_criteria(criteria: Vec<Box<dyn Criterion>>) -> Self {
        Self {
            criteria,
            strict: false,
        }
    }

    /// Toggle strict denominator mode (builder-style).
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Compare two companies and return their scored match.
    pub fn match_companies(&self, one: &Company, two: &Company) -> CompanyMatch {
        debug!(a = %one.name, b = %two.name, "comparing companies");

        let mut total_weight: u32 = 0;
        let mut current_score: u32 = 0;
        let mut success_criteria = Vec::new();

        for criterion in &self.criteria {
            match criterion.evaluate(one, two) {
                Verdict::Agree => {
                    total_weight += criterion.weight();
                    current_score += criterion.weight();
                    success_criteria.push(criterion.name().to_string());
                }
                Verdict::Disagree => {
                    total_weight += criterion.weight();
                }
                Verdict::Undetermined => {
                    if self.strict {
                        total_weight += criterion.weight();
                    }
                }
            }
        }

        let score = if total_weight == 0 {
            0.0
        } else {
            f64::from(current_score) / f64::from(total_weight)
        };

        CompanyMatch {
            company_a: one.clone(),
            company_b: two.clone(),
            score,
            success_criteria,
        }
    }
}

impl Default for CompanyMatcher {
    fn default() -> Self {
        Self::new()
    }
}
