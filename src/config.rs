//! Configuration file support
//!
//! An optional TOML file (default `allure-hosting.toml` in the working
//! directory) can carry default context values and output preferences, so a
//! repository can pin its project name the way the original deployment setups
//! pin context in a checked-in file:
//!
//! ```toml
//! [context]
//! project = "myapp"
//! domainName = "reports.example.com"
//!
//! [output]
//! format = "json"
//! color = true
//! ```
//!
//! Command-line flags always win over file values.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "allure-hosting.toml";

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default context values, overridden by `-c` flags.
    pub context: IndexMap<String, String>,

    /// Output preferences.
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            context: IndexMap::new(),
            output: OutputConfig::default(),
        }
    }
}

/// Output preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default serialization format ("json" or "yaml").
    pub format: String,

    /// Colored terminal messages.
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "json".to_string(),
            color: true,
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// With an explicit path, a missing or unreadable file is an error. With
    /// no path, the default file is used when present and silently skipped
    /// when absent.
    pub fn load(path: Option<&PathBuf>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.exists() {
                    Self::from_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Parse a specific config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config_load(path, e.to_string()))?;
        Self::from_str(&content)
    }

    /// Parse config from TOML text.
    pub fn from_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
