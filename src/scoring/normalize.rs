//! Canonical comparison form for matching terms
//!
//! Skills, licenses, and industries are compared as trimmed, lower-cased
//! set members. Free-text fields (location, education requirement) are not
//! pre-normalized into sets because compound phrasing matters for substring
//! checks; those are lower-cased inline at the comparison site.

use std::collections::HashSet;

/// Trim surrounding whitespace and lower-case a single matching term.
pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Collapse a list of terms into a normalized set for membership tests.
/// Duplicates that differ only in case or surrounding whitespace collapse
/// into one entry.
pub fn normalize_terms(terms: &[String]) -> HashSet<String> {
    terms.iter().map(|term| normalize_term(term)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_term_trims_and_lowercases() {
        assert_eq!(normalize_term("  AWS "), "aws");
        assert_eq!(normalize_term("Registered Nurse"), "registered nurse");
        assert_eq!(normalize_term(""), "");
    }

    #[test]
    fn test_normalize_terms_collapses_case_variants() {
        let terms = vec![
            "SQL".to_string(),
            " sql".to_string(),
            "Sql ".to_string(),
            "Python".to_string(),
        ];

        let set = normalize_terms(&terms);
        assert_eq!(set.len(), 2);
        assert!(set.contains("sql"));
        assert!(set.contains("python"));
    }

    #[test]
    fn test_inner_whitespace_is_preserved() {
        let set = normalize_terms(&["  High School Diploma ".to_string()]);
        assert!(set.contains("high school diploma"));
    }
}
