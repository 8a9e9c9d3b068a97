//! Ad-hoc tag preview use case

use crate::domain::tags::generate_tags;
use crate::domain::SynonymTable;
use crate::error::Result;
use crate::infrastructure::{CatalogRepository, FileSystemRepository};

/// Service for previewing the tags a name/description pair would generate.
pub struct PreviewService {
    repository: FileSystemRepository,
}

impl PreviewService {
    /// Create a new preview service.
    pub fn new(repository: FileSystemRepository) -> Self {
        Self { repository }
    }

    /// Generate tags using the catalog's synonym dictionary.
    ///
    /// A missing synonym file is not an error here: preview falls back to an
    /// empty table so the generator can still be exercised.
    pub fn execute(&self, name: &str, description: &str) -> Result<Vec<String>> {
        let config = self.repository.load_config()?;

        let synonyms = if self.repository.file_exists(&config.synonyms) {
            self.repository.load_synonyms(&config.synonyms)?
        } else {
            SynonymTable::new()
        };

        Ok(generate_tags(name, description, &synonyms))
    }
}
