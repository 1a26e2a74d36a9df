//! Registrable domain normalization.
//!
//! Deliberately simplistic: strip a `scheme://` prefix, drop everything from
//! the first `/`, then keep the last two dot-separated labels. This
//! collapses co-country TLDs like `example.co.uk` down to `co.uk`, which is
//! wrong for registrability purposes but is the documented limitation
//! carried over from the reference implementation — see the domain
//! normalizer open question in `DESIGN.md` for the public-suffix-list-aware
//! alternative this could be swapped in for.

use crate::text::normalize_text;

/// Extract a deliberately simplistic "registrable domain" from a website
/// field: lowercase + trim, strip any scheme prefix, drop the path, keep the
/// last two dot-separated labels.
///
/// ```
/// use normalize::domain::normalize_domain;
///
/// assert_eq!(
///     normalize_domain(Some("https://toto.com")),
///     Some("toto.com".to_string())
/// );
/// assert_eq!(
///     normalize_domain(Some("web.toto.com/any/particular/url?view=json")),
///     Some("toto.com".to_string())
/// );
/// ```
pub fn normalize_domain(field: Option<&str>) -> Option<String> {
    let text = normalize_text(field)?;

    let without_scheme = match text.find("//") {
        Some(idx) => &text[idx + 2..],
        None => &text[..],
    };
    let domain = without_scheme.split('/').next().unwrap_or("");
    let labels: Vec<&str> = domain.split('.').filter(|l| !l.is_empty()).collect();
    if labels.is_empty() {
        return None;
    }

    let root_domain = if labels.len() <= 2 {
        labels.join(".")
    } else {
        labels[labels.len() - 2..].join(".")
    };

    if root_domain.is_empty() {
        return None;
    }
    Some(root_domain)
}
