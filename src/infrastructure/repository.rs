//! File system repository

use crate::domain::{Product, SynonymTable};
use crate::error::{Result, TagsmithError};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for catalog operations
pub trait CatalogRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .tagsmith/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .tagsmith/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .tagsmith directory exists
    fn is_initialized(&self) -> bool;

    /// Create .tagsmith directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of CatalogRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover catalog root by walking up from current directory
    /// First checks TAGSMITH_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        // 1. Check TAGSMITH_ROOT environment variable first
        if let Ok(root_path) = std::env::var("TAGSMITH_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_tagsmith_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(TagsmithError::Config(format!(
                    "TAGSMITH_ROOT is set to '{}' but no .tagsmith directory found. \
                    Run 'tagsmith init' in that directory or unset TAGSMITH_ROOT.",
                    path.display()
                )));
            }
        }

        // 2. Fall back to walking up from current directory
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover catalog root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_tagsmith_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            // Try to move to parent directory
            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    // Reached filesystem root without finding .tagsmith
                    return Err(TagsmithError::NotCatalogDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .tagsmith directory
    fn has_tagsmith_dir(path: &Path) -> bool {
        path.join(".tagsmith").is_dir()
    }
}

impl CatalogRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_tagsmith_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let tagsmith_dir = self.root.join(".tagsmith");

        if tagsmith_dir.exists() {
            return Err(TagsmithError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&tagsmith_dir)?;
        Ok(())
    }
}

// Catalog file operations (not part of trait - filesystem-specific)
impl FileSystemRepository {
    /// Check if a file exists relative to the repository root
    pub fn file_exists(&self, filename: &str) -> bool {
        self.root.join(filename).exists()
    }

    /// Load a product collection from a JSON file
    pub fn load_products(&self, filename: &str) -> Result<Vec<Product>> {
        let path = self.root.join(filename);

        let contents = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TagsmithError::Config(format!("Catalog file not found: {}", path.display()))
            } else {
                TagsmithError::Io(e)
            }
        })?;

        Ok(serde_json::from_str(&contents)?)
    }

    /// Load a synonym table from a JSON file
    pub fn load_synonyms(&self, filename: &str) -> Result<SynonymTable> {
        let path = self.root.join(filename);

        let contents = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TagsmithError::Config(format!(
                    "Synonym file not found: {}. Create it or point the 'synonyms' \
                    config key at an existing file.",
                    path.display()
                ))
            } else {
                TagsmithError::Io(e)
            }
        })?;

        Ok(serde_json::from_str(&contents)?)
    }

    /// Write a product collection using a best-effort atomic replace:
    /// write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
    pub fn save_products_atomic(&self, filename: &str, products: &[Product]) -> Result<()> {
        let path = self.root.join(filename);

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut contents = serde_json::to_string_pretty(products)?;
        contents.push('\n');

        let tmp_name = format!(
            "{}.tagsmith-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("catalog.json"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, contents)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(&path)?;
        }

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    /// Write a synonym table as pretty-printed JSON
    pub fn save_synonyms(&self, filename: &str, synonyms: &SynonymTable) -> Result<()> {
        let path = self.root.join(filename);

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut contents = serde_json::to_string_pretty(synonyms)?;
        contents.push('\n');

        fs::write(&path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn initialized_repo(temp: &TempDir) -> FileSystemRepository {
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo
    }

    #[test]
    fn test_initialize_creates_tagsmith_dir() {
        let temp = TempDir::new().unwrap();
        let repo = initialized_repo(&temp);

        assert!(repo.is_initialized());
        assert!(temp.path().join(".tagsmith").is_dir());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let repo = initialized_repo(&temp);

        assert!(repo.initialize().is_err());
    }

    #[test]
    fn test_discover_from_walks_up() {
        let temp = TempDir::new().unwrap();
        initialized_repo(&temp);

        let nested = temp.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();

        let found = FileSystemRepository::discover_from(&nested).unwrap();
        assert_eq!(found.root, temp.path());
    }

    #[test]
    fn test_discover_from_fails_without_catalog() {
        let temp = TempDir::new().unwrap();

        let result = FileSystemRepository::discover_from(temp.path());
        assert!(matches!(
            result,
            Err(TagsmithError::NotCatalogDirectory(_))
        ));
    }

    #[test]
    fn test_products_round_trip() {
        let temp = TempDir::new().unwrap();
        let repo = initialized_repo(&temp);

        let products = vec![
            Product {
                name: Some("Tent".to_string()),
                ..Product::default()
            },
            Product {
                name: Some("Chair".to_string()),
                tags: vec!["wood".to_string()],
                ..Product::default()
            },
        ];

        repo.save_products_atomic("products.json", &products).unwrap();
        let loaded = repo.load_products("products.json").unwrap();

        assert_eq!(loaded, products);
    }

    #[test]
    fn test_save_products_overwrites_existing_file() {
        let temp = TempDir::new().unwrap();
        let repo = initialized_repo(&temp);

        repo.save_products_atomic("products.json", &[]).unwrap();
        let products = vec![Product {
            name: Some("Arch".to_string()),
            ..Product::default()
        }];
        repo.save_products_atomic("products.json", &products).unwrap();

        let loaded = repo.load_products("products.json").unwrap();
        assert_eq!(loaded.len(), 1);
    }

    #[test]
    fn test_load_missing_products_is_config_error() {
        let temp = TempDir::new().unwrap();
        let repo = initialized_repo(&temp);

        let result = repo.load_products("missing.json");
        assert!(matches!(result, Err(TagsmithError::Config(_))));
    }

    #[test]
    fn test_synonyms_round_trip() {
        let temp = TempDir::new().unwrap();
        let repo = initialized_repo(&temp);

        let mut synonyms = SynonymTable::new();
        synonyms.insert("tent", vec!["canopy".to_string()]);

        repo.save_synonyms("synonyms.json", &synonyms).unwrap();
        let loaded = repo.load_synonyms("synonyms.json").unwrap();

        assert_eq!(loaded, synonyms);
    }
}
