//! Post-accumulation tag suppression
//!
//! Some product families pick up misleading tags from their own copy (a
//! champagne wall "holds glasses" but is not glassware). Suppression rules
//! run after all expansion steps: when the trigger phrase appears in the
//! corpus, the listed tags are removed no matter how they were added.

use std::collections::BTreeSet;

/// A single suppression rule: when `trigger` occurs in the corpus, every
/// tag in `remove` is dropped from the result.
#[derive(Debug, Clone, Copy)]
pub struct SuppressionRule {
    pub trigger: &'static str,
    pub remove: &'static [&'static str],
}

/// Rules evaluated in declared order against the full corpus.
pub static SUPPRESSION_RULES: &[SuppressionRule] = &[SuppressionRule {
    trigger: "champagne wall",
    remove: &["glass", "glasses"],
}];

/// Apply every matching suppression rule to an accumulated tag set.
pub fn apply_suppressions(corpus: &str, tags: &mut BTreeSet<String>) {
    for rule in SUPPRESSION_RULES {
        if corpus.contains(rule.trigger) {
            for tag in rule.remove {
                tags.remove(*tag);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_set(tags: &[&str]) -> BTreeSet<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_trigger_removes_listed_tags() {
        let mut tags = tag_set(&["champagne", "glass", "glasses", "wall"]);
        apply_suppressions("gold champagne wall with shelves", &mut tags);
        assert_eq!(tags, tag_set(&["champagne", "wall"]));
    }

    #[test]
    fn test_no_trigger_leaves_tags_alone() {
        let mut tags = tag_set(&["glass", "glasses"]);
        apply_suppressions("champagne flutes", &mut tags);
        assert_eq!(tags, tag_set(&["glass", "glasses"]));
    }

    #[test]
    fn test_missing_tags_are_ignored() {
        let mut tags = tag_set(&["wall"]);
        apply_suppressions("champagne wall", &mut tags);
        assert_eq!(tags, tag_set(&["wall"]));
    }
}
