//! Tag generation

pub mod compound;
pub mod generator;
pub mod pluralize;
pub mod stopwords;
pub mod suppress;

// Re-export the main entry points
pub use compound::{split_compound, KNOWN_COMPOUND_TERMS};
pub use generator::generate_tags;
pub use pluralize::pluralize;
pub use stopwords::is_stopword;
pub use suppress::{apply_suppressions, SuppressionRule, SUPPRESSION_RULES};
