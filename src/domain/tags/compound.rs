//! Compound-word splitting
//!
//! Detects unspaced compounds like "tablerunner" by scanning a fixed list of
//! known root words. Matching is substring-based, not word-boundary-based; a
//! root can match inside an unrelated word. That imprecision is accepted.

/// Known root words, scanned in this order. First match wins, so earlier
/// entries take priority over later ones.
pub static KNOWN_COMPOUND_TERMS: &[&str] = &[
    "table", "runner", "cloth", "cover", "chair", "tent", "linen", "napkin",
    "candle", "stand", "arch", "backdrop",
];

/// Split a token into a known root and the remainder around it.
///
/// Scans [`KNOWN_COMPOUND_TERMS`] in declared order and, for the first term
/// that occurs inside `word` without being all of it, removes the first
/// occurrence of the term. Returns `None` when no term matches or every
/// match would leave an empty remainder. Never splits recursively.
pub fn split_compound(word: &str) -> Option<(&'static str, String)> {
    for term in KNOWN_COMPOUND_TERMS {
        if word != *term && word.contains(term) {
            let remainder = word.replacen(term, "", 1);
            if !remainder.is_empty() {
                return Some((term, remainder));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_known_compound() {
        assert_eq!(
            split_compound("tablerunner"),
            Some(("table", "runner".to_string()))
        );
        assert_eq!(
            split_compound("chaircover"),
            Some(("chair", "cover".to_string()))
        );
    }

    #[test]
    fn test_root_alone_does_not_split() {
        assert_eq!(split_compound("table"), None);
        assert_eq!(split_compound("tent"), None);
    }

    #[test]
    fn test_unknown_word_does_not_split() {
        assert_eq!(split_compound("champagne"), None);
    }

    #[test]
    fn test_first_declared_term_wins() {
        // Both "runner" and "cloth" are known; "table" is declared first.
        assert_eq!(
            split_compound("tablecloth"),
            Some(("table", "cloth".to_string()))
        );
    }

    #[test]
    fn test_only_first_occurrence_removed() {
        assert_eq!(
            split_compound("tabletable"),
            Some(("table", "table".to_string()))
        );
    }

    #[test]
    fn test_substring_match_inside_larger_word() {
        // "arch" matches inside "marche"; substring matching is accepted.
        assert_eq!(split_compound("marche"), Some(("arch", "me".to_string())));
    }
}
