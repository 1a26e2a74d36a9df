//! Country-name canonicalization for phone normalization.
//!
//! [`crate::phone::normalize_phone`] needs an ISO-3166-1 alpha-2 code to
//! re-parse a phone number that failed international parsing. Source data
//! gives us free-text country names ("France", "FRANCE", "United Kingdom",
//! "UK", ...) rather than codes, so this module case-folds, strips
//! diacritics, and looks the result up in a small alias table layered over
//! the ISO English short names.

use unicode_normalization::UnicodeNormalization;

/// Case-fold and strip diacritics/punctuation noise from a country name so
/// it can be looked up in [`ALIASES`] or [`ISO_SHORT_NAMES`].
fn fold(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .trim()
        .replace('.', "")
        .replace(['\'', '’'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_combining_mark(c: char) -> bool {
    matches!(c as u32, 0x0300..=0x036F)
}

/// Common aliases, abbreviations, and alternate spellings that don't match
/// an ISO English short name verbatim.
const ALIASES: &[(&str, &str)] = &[
    ("uk", "GB"),
    ("great britain", "GB"),
    ("united kingdom", "GB"),
    ("england", "GB"),
    ("scotland", "GB"),
    ("wales", "GB"),
    ("usa", "US"),
    ("u s a", "US"),
    ("united states", "US"),
    ("united states of america", "US"),
    ("america", "US"),
    ("holland", "NL"),
    ("the netherlands", "NL"),
    ("uae", "AE"),
    ("united arab emirates", "AE"),
    ("south korea", "KR"),
    ("republic of korea", "KR"),
    ("north korea", "KP"),
    ("russia", "RU"),
    ("russian federation", "RU"),
    ("czechia", "CZ"),
    ("czech republic", "CZ"),
    ("ivory coast", "CI"),
    ("cote d ivoire", "CI"),
    ("vietnam", "VN"),
    ("laos", "LA"),
    ("syria", "SY"),
    ("iran", "IR"),
    ("bolivia", "BO"),
    ("venezuela", "VE"),
    ("tanzania", "TZ"),
    ("moldova", "MD"),
    ("brunei", "BN"),
    ("macau", "MO"),
    ("hong kong", "HK"),
];

/// ISO-3166-1 English short names for the countries most likely to appear
/// in company-catalog data. Not exhaustive; extend as new source countries
/// are onboarded.
const ISO_SHORT_NAMES: &[(&str, &str)] = &[
    ("france", "FR"),
    ("germany", "DE"),
    ("spain", "ES"),
    ("italy", "IT"),
    ("portugal", "PT"),
    ("belgium", "BE"),
    ("luxembourg", "LU"),
    ("switzerland", "CH"),
    ("austria", "AT"),
    ("ireland", "IE"),
    ("denmark", "DK"),
    ("sweden", "SE"),
    ("norway", "NO"),
    ("finland", "FI"),
    ("iceland", "IS"),
    ("poland", "PL"),
    ("hungary", "HU"),
    ("romania", "RO"),
    ("bulgaria", "BG"),
    ("greece", "GR"),
    ("turkey", "TR"),
    ("ukraine", "UA"),
    ("canada", "CA"),
    ("mexico", "MX"),
    ("brazil", "BR"),
    ("argentina", "AR"),
    ("chile", "CL"),
    ("colombia", "CO"),
    ("peru", "PE"),
    ("china", "CN"),
    ("japan", "JP"),
    ("india", "IN"),
    ("singapore", "SG"),
    ("malaysia", "MY"),
    ("indonesia", "ID"),
    ("thailand", "TH"),
    ("philippines", "PH"),
    ("australia", "AU"),
    ("new zealand", "NZ"),
    ("south africa", "ZA"),
    ("egypt", "EG"),
    ("nigeria", "NG"),
    ("kenya", "KE"),
    ("morocco", "MA"),
    ("israel", "IL"),
    ("saudi arabia", "SA"),
    ("qatar", "QA"),
    ("kuwait", "KW"),
    ("portugal republic", "PT"),
];

/// Resolve a free-text country name to an ISO-3166-1 alpha-2 code.
///
/// The lookup is case- and diacritic-insensitive and checks the alias table
/// before the ISO short-name table. Returns `None` for unrecognized names
/// rather than erroring; callers degrade to `Undetermined`.
///
/// ```
/// use normalize::country::country_to_alpha2;
///
/// assert_eq!(country_to_alpha2("France"), Some("FR"));
/// assert_eq!(country_to_alpha2("FRANCE"), Some("FR"));
/// assert_eq!(country_to_alpha2("United Kingdom"), Some("GB"));
/// assert_eq!(country_to_alpha2("Atlantis"), None);
/// ```
pub fn country_to_alpha2(name: &str) -> Option<&'static str> {
    let folded = fold(name);
    if folded.is_empty() {
        return None;
    }
    ALIASES
        .iter()
        .chain(ISO_SHORT_NAMES.iter())
        .find(|(key, _)| *key == folded)
        .map(|(_, code)| *code)
}
