//! Error types for the normalization library.
//!
//! The criteria crate never sees these: it calls [`crate::phone::normalize_phone`],
//! which collapses any failure to `None` and becomes an `Undetermined`
//! verdict rather than a propagated error. [`crate::phone::try_normalize_phone`]
//! is the fallible counterpart that returns this type directly, for callers
//! (diagnostics, logging, tests) that want the specific reason rather than
//! a bare `Option`.
use thiserror::Error;

/// Reasons a normalizer could not produce a canonical value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// The input was empty after trimming.
    #[error("input is empty after normalization")]
    Empty,
    /// The phone number could not be parsed, even with a country hint.
    #[error("could not parse phone number {raw:?} (country hint: {country_hint:?})")]
    UnparseablePhone {
        raw: String,
        country_hint: Option<String>,
    },
    /// The country name did not resolve to a known ISO-3166-1 alpha-2 code.
    #[error("unknown country name: {0:?}")]
    UnknownCountry(String),
}
