//! Synonym table

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from a lowercase trigger (single word or multi-word phrase) to
/// the extra tags it contributes.
///
/// Single-word triggers fire on exact token matches; multi-word triggers
/// fire on substring containment in the corpus. Deserialized straight from
/// a JSON object of string to array-of-string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SynonymTable(BTreeMap<String, Vec<String>>);

impl SynonymTable {
    pub fn new() -> Self {
        SynonymTable(BTreeMap::new())
    }

    /// Add or replace the synonyms for a trigger
    pub fn insert(&mut self, trigger: impl Into<String>, synonyms: Vec<String>) {
        self.0.insert(trigger.into(), synonyms);
    }

    /// Synonyms for an exact trigger, if any
    pub fn get(&self, trigger: &str) -> Option<&[String]> {
        self.0.get(trigger).map(Vec::as_slice)
    }

    /// Iterate over (trigger, synonyms) pairs in trigger order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
