//! Exercises the alias table, slugify fallback, and URL composition.

use doclink_bot::docs::{keys, lookup, resolve_url, slugify, DOCS};

const BASE: &str = "https://docs.example.com/";

#[test]
fn alias_table_has_no_duplicates() {
    let mut aliases: Vec<&str> = keys().collect();
    aliases.sort();
    for pair in aliases.windows(2) {
        assert_ne!(pair[0], pair[1], "Duplicate alias in DOCS: {}", pair[0]);
    }
}

#[test]
fn alias_table_keys_are_stored_normalized() {
    for (alias, _) in DOCS {
        assert_eq!(*alias, alias.trim().to_lowercase(), "Alias not lowercase/trimmed: {alias}");
    }
}

#[test]
fn lookup_is_exact_after_trim_and_lowercase() {
    for (alias, fragment) in DOCS {
        assert_eq!(lookup(alias), Some(*fragment));
        assert_eq!(lookup(&format!("  {}  ", alias.to_uppercase())), Some(*fragment));
    }
    assert_eq!(lookup("letha"), None, "No prefix matching at the lookup stage");
    assert_eq!(lookup("no such product"), None);
}

#[test]
fn slugify_output_stays_in_url_safe_alphabet() {
    let inputs = [
        "Widget Pro",
        "  Some_Unknown Item!  ",
        "UPPER CASE",
        "tabs\tand\nnewlines",
        "ünïcödé stuff",
        "!!!",
        "",
    ];
    for input in inputs {
        let slug = slugify(input);
        assert!(
            slug.chars().all(|c| matches!(c, 'a'..='z' | '0'..='9' | '-')),
            "slugify({input:?}) produced {slug:?}"
        );
    }
}

#[test]
fn slugify_examples() {
    assert_eq!(slugify("Widget Pro"), "widget-pro");
    assert_eq!(slugify("Some Unknown Item!"), "some-unknown-item");
    assert_eq!(slugify("snake_case_name"), "snake-case-name");
    assert_eq!(slugify("  spaced   out  "), "spaced-out");
    // Fully-invalid input degrades to empty; callers link the docs root.
    assert_eq!(slugify("!!!"), "");
    assert_eq!(slugify(""), "");
}

#[test]
fn slugify_is_idempotent() {
    let inputs = ["Widget Pro", "a - b", "  Mixed_Case Input!  ", "already-a-slug", "!!!"];
    for input in inputs {
        let once = slugify(input);
        assert_eq!(slugify(&once), once, "slugify not idempotent for {input:?}");
    }
}

#[test]
fn known_alias_composes_full_url() {
    assert_eq!(
        resolve_url(BASE, "lethal"),
        format!("{BASE}rainbow-six-siege./lethal-lite-and-full-r6s")
    );
    assert_eq!(
        resolve_url(BASE, "  LETHAL  "),
        format!("{BASE}rainbow-six-siege./lethal-lite-and-full-r6s")
    );
}

#[test]
fn stray_leading_slash_is_stripped_exactly_once() {
    // The `vega` fragment carries a leading slash in the source data. The
    // composition strips that one slash and leaves the rest of the fragment
    // alone, `./` artifact included.
    assert_eq!(resolve_url(BASE, "vega"), format!("{BASE}rainbow-six-siege./vega-r6"));
}

#[test]
fn unknown_product_falls_back_to_slugify() {
    assert_eq!(resolve_url(BASE, "Some Unknown Item!"), format!("{BASE}some-unknown-item"));
    // Symbol-only input yields the bare base URL, by design.
    assert_eq!(resolve_url(BASE, "???"), BASE);
    assert_eq!(resolve_url(BASE, ""), BASE);
}
