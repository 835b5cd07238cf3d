// crates/countrydex-core/src/text.rs

/// Folded sort key: Unicode transliterated to ASCII, then lower-cased.
///
/// `"Åland Islands"` sorts next to `"Albania"` instead of after `"Zimbabwe"`.
///
/// ```rust
/// use countrydex_core::text::fold_key;
///
/// assert_eq!(fold_key("Åland Islands"), "aland islands");
/// assert_eq!(fold_key("Côte d'Ivoire"), "cote d'ivoire");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Normalize a user search term: trimmed and lower-cased.
pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Case-insensitive substring match against an already normalized term.
#[inline]
pub fn contains_term(haystack: &str, normalized_term: &str) -> bool {
    normalized_term.is_empty() || haystack.to_lowercase().contains(normalized_term)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_term("  GerMany \t"), "germany");
        assert_eq!(normalize_term("   "), "");
    }

    #[test]
    fn contains_is_case_insensitive() {
        assert!(contains_term("United Kingdom", "king"));
        assert!(contains_term("Åland Islands", "åland"));
        assert!(!contains_term("France", "ger"));
        assert!(contains_term("France", ""));
    }
}
