//! Configuration management

use crate::error::{Result, TagsmithError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default catalog input file
pub const DEFAULT_INPUT: &str = "products.json";
/// Default enriched output file
pub const DEFAULT_OUTPUT: &str = "products_with_tags.json";
/// Default synonym dictionary file
pub const DEFAULT_SYNONYMS: &str = "synonyms.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub input: String,
    pub output: String,
    pub synonyms: String,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default file names
    pub fn new() -> Self {
        Config {
            input: DEFAULT_INPUT.to_string(),
            output: DEFAULT_OUTPUT.to_string(),
            synonyms: DEFAULT_SYNONYMS.to_string(),
            created: Utc::now(),
        }
    }

    /// Load config from .tagsmith/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".tagsmith").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TagsmithError::NotCatalogDirectory(path.to_path_buf())
            } else {
                TagsmithError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| TagsmithError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .tagsmith/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let tagsmith_dir = path.join(".tagsmith");
        let config_path = tagsmith_dir.join("config.toml");

        // Ensure .tagsmith directory exists
        if !tagsmith_dir.exists() {
            fs::create_dir(&tagsmith_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| TagsmithError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
