//! Naive English pluralization heuristic
//!
//! A deliberately simple approximation: it knows nothing about irregular
//! plurals and only handles the consonant+"y" ending specially. Good enough
//! for generating extra search-tag variants, nothing more.

/// Pluralize a lowercase ASCII word.
///
/// Words of two characters or fewer are returned unchanged (too short to
/// pluralize meaningfully). Words ending in consonant+"y" swap the "y" for
/// "ies"; words already ending in "s" gain "es"; everything else gains "s".
pub fn pluralize(word: &str) -> String {
    if word.len() <= 2 {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix('y') {
        if !stem.ends_with(['a', 'e', 'i', 'o', 'u']) {
            return format!("{}ies", stem);
        }
    }

    if word.ends_with('s') {
        return format!("{}es", word);
    }

    format!("{}s", word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_plural() {
        assert_eq!(pluralize("tent"), "tents");
        assert_eq!(pluralize("chair"), "chairs");
        // The heuristic only special-cases "y" and "s" endings, so "box"
        // gets a plain "s" rather than a real English plural.
        assert_eq!(pluralize("box"), "boxs");
    }

    #[test]
    fn test_consonant_y_becomes_ies() {
        assert_eq!(pluralize("party"), "parties");
        assert_eq!(pluralize("canopy"), "canopies");
    }

    #[test]
    fn test_vowel_y_gets_plain_s() {
        assert_eq!(pluralize("day"), "days");
        assert_eq!(pluralize("tray"), "trays");
    }

    #[test]
    fn test_trailing_s_gets_es() {
        assert_eq!(pluralize("glass"), "glasses");
        assert_eq!(pluralize("bus"), "buses");
    }

    #[test]
    fn test_short_words_unchanged() {
        assert_eq!(pluralize("x"), "x");
        assert_eq!(pluralize("ft"), "ft");
        assert_eq!(pluralize(""), "");
    }
}
