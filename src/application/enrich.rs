//! Catalog enrichment use case
//!
//! Orchestrates the batch workflow: load the synonym dictionary and the
//! product collection, generate tags for every product, merge them into the
//! existing tag sets, and persist the enriched collection.

use crate::domain::tags::generate_tags;
use crate::error::{Result, TagsmithError};
use crate::infrastructure::{CatalogRepository, FileSystemRepository};
use std::path::PathBuf;

/// Options for enrichment
#[derive(Debug, Clone, Default)]
pub struct EnrichOptions {
    /// Catalog file to read (None = config default)
    pub input: Option<PathBuf>,

    /// File to write the enriched catalog to (None = config default)
    pub output: Option<PathBuf>,

    /// Synonym dictionary file (None = config default)
    pub synonyms: Option<PathBuf>,

    /// Generate and report without writing the output file
    pub dry_run: bool,
}

/// Summary of an enrichment run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichReport {
    pub processed: usize,
    pub added_tags: usize,
    pub output: PathBuf,
    pub dry_run: bool,
}

/// Service for enriching the catalog
pub struct EnrichService {
    repository: FileSystemRepository,
}

impl EnrichService {
    /// Create new enrich service
    pub fn new(repository: FileSystemRepository) -> Self {
        EnrichService { repository }
    }

    /// Execute the enrichment
    ///
    /// A single-pass, in-memory batch: every product is processed, then the
    /// whole collection is written at once. Record order is preserved.
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog or synonym file is missing or
    /// malformed, or if the output file cannot be written.
    pub fn execute(&self, options: EnrichOptions) -> Result<EnrichReport> {
        let config = self.repository.load_config()?;

        let input = resolve_path(options.input, &config.input)?;
        let output = resolve_path(options.output, &config.output)?;
        let synonyms_file = resolve_path(options.synonyms, &config.synonyms)?;

        let synonyms = self.repository.load_synonyms(&synonyms_file)?;
        let mut products = self.repository.load_products(&input)?;

        let mut added_tags = 0;
        for product in &mut products {
            let generated = generate_tags(
                product.name.as_deref().unwrap_or(""),
                product.description.as_deref().unwrap_or(""),
                &synonyms,
            );
            added_tags += product.merge_tags(generated);
        }

        if !options.dry_run {
            self.repository.save_products_atomic(&output, &products)?;
        }

        Ok(EnrichReport {
            processed: products.len(),
            added_tags,
            output: self.repository.root().join(&output),
            dry_run: options.dry_run,
        })
    }
}

/// Use the given path when provided, the config default otherwise
fn resolve_path(option: Option<PathBuf>, default: &str) -> Result<String> {
    match option {
        Some(path) => match path.to_str() {
            Some(s) => Ok(s.to_string()),
            None => Err(TagsmithError::Config(format!(
                "Invalid path: {}",
                path.display()
            ))),
        },
        None => Ok(default.to_string()),
    }
}
