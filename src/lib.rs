//! tagsmith - Search-tag enrichment for product catalogs
//!
//! A command-line batch tool that derives search tags from product names and
//! descriptions (tokenization, stopword filtering, pluralization, compound
//! splitting, synonym expansion) and merges them into a JSON catalog.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::TagsmithError;
