//! Postal code normalization.
//!
//! Some upstream sources store postal codes in numeric-typed spreadsheet
//! columns; when exported, those columns grow a spurious `.0` suffix (e.g.
//! `"75001"` becomes `"75001.0"`). This normalizer strips that artifact on
//! top of the generic text normalization.

use crate::text::normalize_text;

/// Normalize a postal code: generic text normalization, then strip a
/// trailing `.0` literal left over from numeric-typed source columns.
///
/// ```
/// use normalize::postal::normalize_postal_code;
///
/// assert_eq!(normalize_postal_code(Some("75001.0")), Some("75001".to_string()));
/// assert_eq!(normalize_postal_code(Some(" 75001 ")), Some("75001".to_string()));
/// ```
pub fn normalize_postal_code(field: Option<&str>) -> Option<String> {
    let text = normalize_text(field)?;
    let stripped = text.strip_suffix(".0").unwrap_or(&text);
    if stripped.is_empty() {
        return None;
    }
    Some(stripped.to_string())
}
