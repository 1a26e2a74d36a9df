//! Pure, idempotent normalizers for company-record matching.
//!
//! Every function in this crate takes an `Option<&str>` (a possibly-missing
//! source field) and returns `Option<String>` (a canonical value, or
//! nothing to compare). None of them ever panics on bad input — a value
//! that can't be normalized degrades to `None`, which downstream criteria
//! treat as `Undetermined` rather than `Disagree`. [`phone::try_normalize_phone`]
//! is the one fallible counterpart, returning [`error::NormalizeError`] for
//! callers that want the underlying reason (diagnostics, tests) instead of
//! a bare `Option`.

pub mod country;
pub mod domain;
pub mod error;
pub mod phone;
pub mod postal;
pub mod text;

pub use country::country_to_alpha2;
pub use domain::normalize_domain;
pub use error::NormalizeError;
pub use phone::{normalize_phone, try_normalize_phone};
pub use postal::normalize_postal_code;
pub use text::normalize_text;
