//! Config management use case

use crate::error::{Result, TagsmithError};
use crate::infrastructure::{CatalogRepository, Config, FileSystemRepository};

/// Service for managing catalog configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "input" => Ok(config.input),
            "output" => Ok(config.output),
            "synonyms" => Ok(config.synonyms),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(TagsmithError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: input, output, synonyms, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "input" => {
                config.input = value.to_string();
            }
            "output" => {
                config.output = value.to_string();
            }
            "synonyms" => {
                config.synonyms = value.to_string();
            }
            "created" => {
                return Err(TagsmithError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(TagsmithError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: input, output, synonyms",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
