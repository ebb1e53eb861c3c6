//! The documentation alias table and the resolution logic built on it.
//!
//! Everything in here is a pure function over the static table: `/doc`
//! resolves through [`lookup`] with [`slugify`] as the fallback, and the
//! autocomplete provider filters the table keys through [`suggest`].

use crate::constants::MAX_SUGGESTIONS;

/// Alias -> GitBook path fragment. Aliases are stored lowercase; several
/// aliases may point at the same page (synonyms). Path fragments are carried
/// verbatim from the source data, including the historical oddities (the
/// `vega` entry's leading slash, the `.` directory artifacts) — the
/// composition step compensates for the leading slash and nothing else.
pub static DOCS: &[(&str, &str)] = &[
    // Rainbow Six Siege
    ("lethal", "rainbow-six-siege./lethal-lite-and-full-r6s"),
    ("lethal lite", "rainbow-six-siege./lethal-lite-and-full-r6s"),
    ("lethal full", "rainbow-six-siege./lethal-lite-and-full-r6s"),
    ("lethal-lite-and-full-r6s", "rainbow-six-siege./lethal-lite-and-full-r6s"),
    ("crusader", "rainbow-six-siege./cursader-r6s"),
    ("cursader-r6s", "rainbow-six-siege./cursader-r6s"),
    ("aptitude", "rainbow-six-siege./aptitude-recoil-r6s"),
    ("aptitude recoil", "rainbow-six-siege./aptitude-recoil-r6s"),
    ("aptitude-recoil-r6s", "rainbow-six-siege./aptitude-recoil-r6s"),
    ("vega", "/rainbow-six-siege./vega-r6"),
    ("zeroday", "rainbow-six-siege./zeroday-r6s"),
    ("zero day", "rainbow-six-siege./zeroday-r6s"),
    ("zeroday-r6s", "rainbow-six-siege./zeroday-r6s"),
    ("calamari", "rainbow-six-siege./calamari-r6s"),
    ("calamari-r6s", "rainbow-six-siege./calamari-r6s"),
    ("ring 1", "rainbow-six-siege./ring-1-basic-and-full-r6s"),
    ("ring1", "rainbow-six-siege./ring-1-basic-and-full-r6s"),
    ("ring 1 basic", "rainbow-six-siege./ring-1-basic-and-full-r6s"),
    ("ring 1 full", "rainbow-six-siege./ring-1-basic-and-full-r6s"),
    ("ring-1-basic-and-full-r6s", "rainbow-six-siege./ring-1-basic-and-full-r6s"),
    // FiveM
    ("susano", "fivem/susano-fivem"),
    ("susano fivem", "fivem/susano-fivem"),
    ("susano-fivem", "fivem/susano-fivem"),
    // Rust
    ("disconnect", "rust/disconnect-rust-or"),
    ("disconnect rust", "rust/disconnect-rust-or"),
    ("disconnect-rust-or", "rust/disconnect-rust-or"),
    // General
    ("troubleshooting", "troubleshooting"),
    ("qb", "troubleshooting/sharing-qbs"),
];

/// All alias keys, in table order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    DOCS.iter().map(|(alias, _)| *alias)
}

/// Exact-match lookup after trimming and lowercasing the input. No fuzzy
/// matching here; a miss means the caller falls through to [`slugify`].
pub fn lookup(key: &str) -> Option<&'static str> {
    let needle = key.trim().to_lowercase();
    DOCS.iter()
        .find(|(alias, _)| *alias == needle)
        .map(|(_, fragment)| *fragment)
}

/// Turn "Widget Pro" into "widget-pro" for a clean URL.
///
/// Total and deterministic: trim, lowercase, underscores become spaces,
/// whitespace runs collapse to a single hyphen, everything outside
/// `[a-z0-9-]` is dropped. Fully-invalid input yields an empty string; the
/// caller treats that as "link to the docs root" rather than an error.
pub fn slugify(text: &str) -> String {
    let normalized = text.trim().to_lowercase().replace('_', " ");
    let mut slug = String::with_capacity(normalized.len());
    let mut pending_gap = false;
    for ch in normalized.chars() {
        if ch.is_whitespace() {
            pending_gap = true;
            continue;
        }
        if pending_gap {
            slug.push('-');
            pending_gap = false;
        }
        if matches!(ch, 'a'..='z' | '0'..='9' | '-') {
            slug.push(ch);
        }
    }
    slug
}

/// Rank alias keys against partial user input for autocomplete.
///
/// An empty partial shows the whole table (capped). Otherwise keys are kept
/// on a case-insensitive substring match — substring, not prefix, so
/// "recoil" still surfaces "aptitude recoil". Shortest keys sort first with
/// a lexicographic tie-break, which floats the canonical short aliases above
/// their slug-styled duplicates.
pub fn suggest<'a, I>(keys: I, partial: &str, limit: usize) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = partial.trim().to_lowercase();
    let mut matches: Vec<&str> = keys
        .into_iter()
        .filter(|key| needle.is_empty() || key.to_lowercase().contains(&needle))
        .collect();
    matches.sort_by_key(|key| (key.len(), key.to_lowercase()));
    matches.truncate(limit);
    matches
}

/// Autocomplete provider for the `/doc` product option.
pub fn suggest_products(partial: &str) -> Vec<&'static str> {
    suggest(keys(), partial, MAX_SUGGESTIONS)
}

/// Compose the final doc URL for whatever the user typed.
///
/// `base` must already carry its single trailing slash (config normalizes
/// it at startup). Exactly one leading slash is stripped from the fragment;
/// internal irregularities in the table data are preserved verbatim.
pub fn resolve_url(base: &str, product: &str) -> String {
    let fragment = match lookup(product) {
        Some(fragment) => fragment.to_string(),
        None => slugify(product),
    };
    format!("{base}{}", fragment.strip_prefix('/').unwrap_or(&fragment))
}
