//! Phone number normalization to E.164.
//!
//! Two-pass strategy: first try parsing the raw string as a self-contained
//! international number (covers values already carrying a `+` country
//! prefix). If that fails, resolve the supplied country name to an
//! ISO-3166-1 alpha-2 code via [`crate::country::country_to_alpha2`] and
//! reparse with that as a hint. [`normalize_phone`] collapses either pass
//! failing to `None`, since callers in the criteria crate treat a missing
//! phone normalization as `Undetermined`, not an error; [`try_normalize_phone`]
//! is the same two-pass strategy for callers (diagnostics, logging, tests)
//! that want the specific [`crate::error::NormalizeError`] reason instead.

use phonenumber::country::Id;
use phonenumber::Mode;
use std::str::FromStr;

use crate::country::country_to_alpha2;
use crate::error::NormalizeError;

/// Normalize a phone number to E.164 (`+33123456789`) form.
///
/// `country` is a free-text country name used only as a hint for the second
/// parse attempt; it is resolved through [`crate::country::country_to_alpha2`]
/// and ignored if unrecognized. Discards the failure reason from
/// [`try_normalize_phone`]; use that directly if the reason matters.
///
/// ```
/// use normalize::phone::normalize_phone;
///
/// assert_eq!(
///     normalize_phone(Some("+33 1 23 45 67 89"), None),
///     Some("+33123456789".to_string())
/// );
/// assert_eq!(
///     normalize_phone(Some("01 23 45 67 89"), Some("France")),
///     Some("+33123456789".to_string())
/// );
/// assert_eq!(normalize_phone(Some("not a number"), Some("France")), None);
/// assert_eq!(normalize_phone(None, Some("France")), None);
/// ```
pub fn normalize_phone(phone: Option<&str>, country: Option<&str>) -> Option<String> {
    try_normalize_phone(phone, country).ok()
}

/// Normalize a phone number to E.164, surfacing why normalization failed.
///
/// ```
/// use normalize::phone::try_normalize_phone;
/// use normalize::error::NormalizeError;
///
/// assert_eq!(try_normalize_phone(None, Some("France")), Err(NormalizeError::Empty));
/// assert_eq!(
///     try_normalize_phone(Some("01 23 45 67 89"), Some("Atlantis")),
///     Err(NormalizeError::UnknownCountry("Atlantis".to_string()))
/// );
/// ```
pub fn try_normalize_phone(phone: Option<&str>, country: Option<&str>) -> Result<String, NormalizeError> {
    let raw = phone.unwrap_or_default().trim();
    if raw.is_empty() {
        return Err(NormalizeError::Empty);
    }

    if let Some(e164) = parse_international(raw) {
        return Ok(e164);
    }

    let country_name = country.ok_or_else(|| NormalizeError::UnparseablePhone {
        raw: raw.to_string(),
        country_hint: None,
    })?;

    let alpha2 =
        country_to_alpha2(country_name).ok_or_else(|| NormalizeError::UnknownCountry(country_name.to_string()))?;
    let id = Id::from_str(alpha2).map_err(|_| NormalizeError::UnknownCountry(country_name.to_string()))?;

    parse_with_country(raw, id).ok_or_else(|| NormalizeError::UnparseablePhone {
        raw: raw.to_string(),
        country_hint: Some(country_name.to_string()),
    })
}

fn parse_international(raw: &str) -> Option<String> {
    let number = phonenumber::parse(None, raw).ok()?;
    if !phonenumber::is_valid(&number) {
        return None;
    }
    Some(phonenumber::format(&number).mode(Mode::E164).to_string())
}

fn parse_with_country(raw: &str, country: Id) -> Option<String> {
    let number = phonenumber::parse(Some(country), raw).ok()?;
    if !phonenumber::is_valid(&number) {
        return None;
    }
    Some(phonenumber::format(&number).mode(Mode::E164).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_already_international_numbers() {
        assert_eq!(
            normalize_phone(Some("+33 1 23 45 67 89"), None),
            Some("+33123456789".into())
        );
    }

    #[test]
    fn reparses_local_numbers_with_country_hint() {
        assert_eq!(
            normalize_phone(Some("01 23 45 67 89"), Some("France")),
            Some("+33123456789".into())
        );
    }

    #[test]
    fn country_hint_is_case_insensitive_and_aliased() {
        assert_eq!(
            normalize_phone(Some("020 7946 0958"), Some("UK")),
            Some("+442079460958".into())
        );
    }

    #[test]
    fn garbage_input_is_none() {
        assert_eq!(normalize_phone(Some("not a number"), Some("France")), None);
    }

    #[test]
    fn unknown_country_with_unparseable_local_number_is_none() {
        assert_eq!(normalize_phone(Some("01 23 45 67 89"), Some("Atlantis")), None);
    }

    #[test]
    fn missing_phone_is_none() {
        assert_eq!(normalize_phone(None, Some("France")), None);
    }

    #[test]
    fn missing_country_hint_falls_back_to_international_only() {
        assert_eq!(normalize_phone(Some("01 23 45 67 89"), None), None);
    }

    #[test]
    fn try_normalize_phone_reports_empty_for_missing_or_blank_input() {
        assert_eq!(try_normalize_phone(None, Some("France")), Err(NormalizeError::Empty));
        assert_eq!(try_normalize_phone(Some("   "), Some("France")), Err(NormalizeError::Empty));
    }

    #[test]
    fn try_normalize_phone_reports_unknown_country() {
        assert_eq!(
            try_normalize_phone(Some("01 23 45 67 89"), Some("Atlantis")),
            Err(NormalizeError::UnknownCountry("Atlantis".to_string()))
        );
    }

    #[test]
    fn try_normalize_phone_reports_unparseable_phone_with_no_country_hint() {
        assert_eq!(
            try_normalize_phone(Some("not a number"), None),
            Err(NormalizeError::UnparseablePhone {
                raw: "not a number".to_string(),
                country_hint: None,
            })
        );
    }

    #[test]
    fn try_normalize_phone_reports_unparseable_phone_even_with_a_resolved_country() {
        assert_eq!(
            try_normalize_phone(Some("not a number"), Some("France")),
            Err(NormalizeError::UnparseablePhone {
                raw: "not a number".to_string(),
                country_hint: Some("France".to_string()),
            })
        );
    }

    #[test]
    fn try_normalize_phone_succeeds_the_same_as_normalize_phone() {
        assert_eq!(
            try_normalize_phone(Some("01 23 45 67 89"), Some("France")),
            Ok("+33123456789".to_string())
        );
    }
}
