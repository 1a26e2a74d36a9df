//! Fans a `CompanyMatcher` out across two company sources.
//!
//! [`Source`] and [`Sink`] are the seams where this crate hands off to
//! whatever storage the rest of the system uses; [`SourcesMatcher`] owns
//! the bounded worker pool that submits every pair in the cartesian
//! product of two sources to a shared `CompanyMatcher`.

pub mod error;
pub mod metrics;
pub mod sink;
pub mod source;
pub mod sources_matcher;

pub use error::PairingError;
pub use metrics::{set_pairing_metrics, PairingMetrics};
pub use sink::Sink;
pub use source::Source;
pub use sources_matcher::SourcesMatcher;
