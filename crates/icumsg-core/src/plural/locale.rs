//! Locale canonicalization and fallback.

/// Normalize a user-supplied locale tag.
///
/// `_` becomes `-`, POSIX encoding and modifier suffixes (`.UTF-8`, `@euro`)
/// are dropped, the language is lowercased, four-letter script subtags are
/// titlecased and two-letter regions are uppercased.
pub fn canonicalize(locale: &str) -> String {
    let tag = locale
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim()
        .replace('_', "-");

    let mut out = String::with_capacity(tag.len());
    for (index, subtag) in tag.split('-').filter(|s| !s.is_empty()).enumerate() {
        if index > 0 {
            out.push('-');
        }
        if index == 0 {
            out.push_str(&subtag.to_ascii_lowercase());
        } else if subtag.len() == 4 && subtag.chars().all(|c| c.is_ascii_alphabetic()) {
            let mut chars = subtag.chars();
            if let Some(first) = chars.next() {
                out.push(first.to_ascii_uppercase());
                out.push_str(&chars.as_str().to_ascii_lowercase());
            }
        } else if subtag.len() == 2 && subtag.chars().all(|c| c.is_ascii_alphabetic()) {
            out.push_str(&subtag.to_ascii_uppercase());
        } else {
            out.push_str(subtag);
        }
    }
    out
}

/// The tag itself followed by each shorter prefix: `sr-Latn-RS`, `sr-Latn`, `sr`.
pub fn fallback_chain(canonical: &str) -> impl Iterator<Item = &str> {
    let mut next = (!canonical.is_empty()).then_some(canonical);
    std::iter::from_fn(move || {
        let current = next?;
        next = current.rfind('-').map(|cut| &current[..cut]);
        Some(current)
    })
}

/// Language subtag of a canonical tag.
pub fn language(canonical: &str) -> &str {
    canonical.split('-').next().unwrap_or(canonical)
}
