//! The result of comparing two companies.

use criteria::Company;
use serde::{Deserialize, Serialize};

/// A scored comparison between two companies, one drawn from each source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyMatch {
    pub company_a: Company,
    pub company_b: Company,
    /// Weighted fraction of counted criteria that agreed, in `[0.0, 1.0]`.
    pub score: f64,
    /// Names of the criteria that agreed, in evaluation order.
    pub success_criteria: Vec<String>,
}
