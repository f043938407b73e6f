//! Configuration for boxoffice
//!
//! Every field has a default, so an empty or partial TOML file is valid:
//!
//! ```toml
//! [dataset]
//! path = "dataset.csv"
//! delimiter = ","
//! has_header = true
//!
//! [charts]
//! budget_bin_width = 50
//! gross_bin_width = 200
//!
//! [display]
//! unit = "million USD"
//! ```

use std::path::{Path, PathBuf};

use boxoffice_io::{LoadOptions, DEFAULT_DATASET};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the per-user config directory and file
const CONFIG_DIR: &str = "boxoffice";
const CONFIG_FILE: &str = "config.toml";

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("TOML parse error: {0}")]
    Parse(String),

    #[error("TOML serialize error: {0}")]
    Serialize(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxofficeConfig {
    /// Dataset file settings
    pub dataset: DatasetConfig,
    /// Chart settings
    pub charts: ChartConfig,
    /// Output settings
    pub display: DisplayConfig,
}

/// Where the dataset lives and how it is laid out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Path to the dataset file
    pub path: PathBuf,
    /// Field delimiter (single ASCII character)
    pub delimiter: char,
    /// Whether the first line is a header
    pub has_header: bool,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATASET),
            delimiter: ',',
            has_header: true,
        }
    }
}

/// Histogram bin widths in million USD
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub budget_bin_width: u32,
    pub gross_bin_width: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            budget_bin_width: 50,
            gross_bin_width: 200,
        }
    }
}

/// How results are shown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Unit suffix appended to monetary results
    pub unit: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            unit: "million USD".to_string(),
        }
    }
}

impl BoxofficeConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> ConfigResult<Self> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    /// Read, parse and validate a config file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the configuration to use
    ///
    /// An explicit path must exist. Otherwise the per-user config file is
    /// used when present, and defaults when not.
    pub fn resolve(explicit: Option<&Path>) -> ConfigResult<Self> {
        if let Some(path) = explicit {
            tracing::debug!("Loading config from {:?}", path);
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.is_file() => {
                tracing::debug!("Loading config from {:?}", path);
                Self::load(&path)
            }
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Per-user config file location, e.g. `~/.config/boxoffice/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Validate configuration values
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.dataset.delimiter.is_ascii() {
            return Err(ConfigError::InvalidValue(format!(
                "delimiter must be a single ASCII character, got {:?}",
                self.dataset.delimiter
            )));
        }

        if self.charts.budget_bin_width == 0 || self.charts.gross_bin_width == 0 {
            return Err(ConfigError::InvalidValue(
                "histogram bin widths must be positive".to_string(),
            ));
        }

        Ok(())
    }

    /// Loader options for the configured dataset layout
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions::default()
            .with_delimiter(self.dataset.delimiter as u8)
            .with_header(self.dataset.has_header)
    }
}
