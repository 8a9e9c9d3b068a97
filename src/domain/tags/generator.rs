//! Search-tag generation
//!
//! The core algorithm: turn a product's name and description into a
//! normalized set of search tags. Tokens are expanded with plural forms,
//! compound splits, and synonyms; phrase triggers and number references are
//! matched against the whole corpus; suppression rules run last.

use super::compound::split_compound;
use super::pluralize::pluralize;
use super::stopwords::is_stopword;
use super::suppress::apply_suppressions;
use crate::domain::SynonymTable;
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Regex for markup-tag-like substrings in descriptions: `<...>`
fn markup_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"<[^>]+>").unwrap())
}

/// Regex for tokens: maximal runs of ASCII letters
fn word_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[a-zA-Z]+").unwrap())
}

/// Regex for number references like "#2" or "# 2"
fn number_tag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"#\s*\d+").unwrap())
}

/// Generate search tags for a product.
///
/// Deterministic and free of I/O: the same name, description, and synonym
/// table always produce the same sorted, duplicate-free tag list. Any input
/// is valid; empty or malformed text just yields fewer tags.
pub fn generate_tags(name: &str, description: &str, synonyms: &SynonymTable) -> Vec<String> {
    let mut tags: BTreeSet<String> = BTreeSet::new();

    // Markup in descriptions becomes a single space; stray '<' without a
    // closing '>' stays literal and tokenizes normally.
    let clean_desc = markup_regex().replace_all(description, " ");
    let corpus = format!("{} {}", name, clean_desc).to_lowercase();

    for token in word_regex().find_iter(&corpus) {
        let word = token.as_str();
        if is_stopword(word) {
            continue;
        }

        tags.insert(word.to_string());

        let plural = pluralize(word);
        if plural != word {
            tags.insert(plural);
        }

        if let Some(extra) = synonyms.get(word) {
            tags.extend(extra.iter().cloned());
        }

        if let Some((root, remainder)) = split_compound(word) {
            tags.insert(format!("{} {}", root, remainder));
            for part in [root, remainder.as_str()] {
                tags.insert(part.to_string());
                let plural = pluralize(part);
                if plural != part {
                    tags.insert(plural);
                }
            }
        }
    }

    // Multi-word triggers match anywhere in the corpus, across token
    // boundaries.
    for (trigger, extra) in synonyms.iter() {
        if corpus.contains(trigger) {
            tags.insert(trigger.to_string());
            tags.extend(extra.iter().cloned());
        }
    }

    // Number references like "#2" become tags in both their spaced and
    // compact form.
    for m in number_tag_regex().find_iter(&corpus) {
        tags.insert(m.as_str().trim().to_string());
        tags.insert(m.as_str().replace(' ', ""));
    }

    apply_suppressions(&corpus, &mut tags);

    tags.into_iter().collect()
}
