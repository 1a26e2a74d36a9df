//! Generic text normalization.
//!
//! This is the base normalizer every other normalizer in this crate builds
//! on: Unicode-preserving lowercase plus trimming of leading/trailing
//! whitespace. It deliberately does not strip internal whitespace or
//! punctuation — callers that need that run [`normalize_text`] first and
//! layer their own transform on top (see [`crate::postal::normalize_postal_code`]).

/// Lowercase and trim a field, treating `None` and an empty/whitespace-only
/// string identically.
///
/// Returns `None` when there is nothing left to compare, so callers can
/// treat "missing" and "present but blank" the same way the rest of this
/// library does.
///
/// ```
/// use normalize::text::normalize_text;
///
/// assert_eq!(normalize_text(Some("  ACME Corp  ")), Some("acme corp".to_string()));
/// assert_eq!(normalize_text(Some("   ")), None);
/// assert_eq!(normalize_text(None), None);
/// ```
pub fn normalize_text(field: Option<&str>) -> Option<String> {
    let trimmed = field?.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_lowercase())
}
