//! Product record

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// A catalog product record.
///
/// `name` and `description` are optional in the source file and treated as
/// empty when absent; a record that never had them is written back without
/// them. Every other field a record carries is kept in `extra` and written
/// back untouched. `tags` is always written after enrichment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// Merge generated tags into the existing tag set.
    ///
    /// The result is the sorted, duplicate-free union of the old and new
    /// tags; existing tags are never removed. Returns how many tags the
    /// merge actually added.
    pub fn merge_tags(&mut self, generated: Vec<String>) -> usize {
        let mut union: BTreeSet<String> = self.tags.iter().cloned().collect();
        let existing = union.len();
        union.extend(generated);
        let added = union.len() - existing;

        self.tags = union.into_iter().collect();
        added
    }
}
