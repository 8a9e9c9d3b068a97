//! Initialize catalog use case

use crate::domain::SynonymTable;
use crate::error::Result;
use crate::infrastructure::{CatalogRepository, Config, FileSystemRepository};
use std::fs;
use std::path::Path;

/// Initialize a new tagsmith catalog at the specified path.
pub fn init(path: &Path) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    // Create repository for this path
    let repo = FileSystemRepository::new(path.to_path_buf());

    // Initialize .tagsmith directory
    repo.initialize()?;

    // Create default config
    let config = Config::new();

    // Save config
    repo.save_config(&config)?;

    // Seed an empty synonym dictionary so enrich works out of the box
    if !repo.file_exists(&config.synonyms) {
        repo.save_synonyms(&config.synonyms, &SynonymTable::new())?;
    }

    println!("Initialized tagsmith catalog at {}", path.display());

    Ok(())
}
