//! Error types for allure-hosting.
//!
//! The taxonomy is deliberately small: this tool performs no input validation
//! beyond its own flag and file parsing. Malformed certificate ARNs, wrong
//! regions, and the like are surfaced by the external deployment tool, not
//! here.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for allure-hosting operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for allure-hosting.
#[derive(Error, Debug)]
pub enum Error {
    /// A `-c` flag was not of the form `key=value`.
    #[error("Invalid context value '{0}': expected key=value")]
    ContextParse(String),

    /// The config file could not be read.
    #[error("Failed to load config '{path}': {message}")]
    ConfigLoad {
        /// Path to the config file
        path: PathBuf,
        /// Error message
        message: String,
    },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a new config load error.
    pub fn config_load(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::ConfigLoad {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Returns the error code for CLI exit status.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ContextParse(_) => 2,
            Error::ConfigLoad { .. } | Error::TomlParse(_) => 3,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_by_category() {
        assert_eq!(Error::ContextParse("x".to_string()).exit_code(), 2);
        assert_eq!(Error::config_load("a.toml", "missing").exit_code(), 3);
        let io = Error::Io(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        assert_eq!(io.exit_code(), 1);
    }
}
