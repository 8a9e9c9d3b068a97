//! Domain layer - Business logic and domain models

pub mod product;
pub mod synonyms;
pub mod tags;

pub use product::Product;
pub use synonyms::SynonymTable;
