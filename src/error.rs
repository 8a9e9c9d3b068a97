//! Error types for tagsmith

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tagsmith application
#[derive(Debug, Error)]
pub enum TagsmithError {
    #[error("Not a tagsmith catalog: {0}")]
    NotCatalogDirectory(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl TagsmithError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TagsmithError::NotCatalogDirectory(_) => 2,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TagsmithError::NotCatalogDirectory(path) => {
                format!(
                    "Not a tagsmith catalog: {}\n\n\
                    Suggestions:\n\
                    • Run 'tagsmith init' in this directory to create a new catalog\n\
                    • Navigate to an existing tagsmith catalog\n\
                    • Set TAGSMITH_ROOT environment variable to your catalog path",
                    path.display()
                )
            }
            TagsmithError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Valid keys: input, output, synonyms, created (read-only)\n\
                        Example: tagsmith config synonyms dictionaries/synonyms.json",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TagsmithError
pub type Result<T> = std::result::Result<T, TagsmithError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_catalog_directory_suggestion() {
        let err = TagsmithError::NotCatalogDirectory(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("tagsmith init"));
        assert!(msg.contains("TAGSMITH_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_unknown_config_key_suggestions() {
        let err = TagsmithError::Config("Unknown config key: 'mode'".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("Valid keys"));
        assert!(msg.contains("tagsmith config synonyms"));
    }

    #[test]
    fn test_exit_codes() {
        let err = TagsmithError::NotCatalogDirectory(PathBuf::from("/tmp/test"));
        assert_eq!(err.exit_code(), 2);

        let err = TagsmithError::Config("bad".to_string());
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = TagsmithError::Config("plain message".to_string());
        assert_eq!(err.display_with_suggestions(), "plain message");
    }
}
