//! The company record criteria compare.

use serde::{Deserialize, Serialize};

/// A single company record from one of the two sources being matched.
///
/// Every field except `source_id`, `source_name`, and `name` is optional:
/// real-world catalogs rarely have complete data, and a missing field must
/// flow through as `Undetermined` rather than a hard failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub source_id: String,
    pub source_name: String,
    pub name: String,
    pub website: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl Company {
    /// Field accessor used by criteria that operate on `name`. Kept as a
    /// method (rather than direct field access) so generic field criteria
    /// can be parameterized uniformly over optional and non-optional
    /// fields.
    pub fn name(&self) -> Option<&str> {
        Some(self.name.as_str())
    }
}
