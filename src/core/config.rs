//! Configuration file management.
//!
//! Reads the optional `config.toml`:
//!
//! ```toml
//! [key]
//! url = "https://example.org/pubkey.asc"
//!
//! [output]
//! dir = "encrypted"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// User configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub key: KeyConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where the preloaded key comes from.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyConfig {
    /// Default key URL, fetched when no key is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory encrypted files are written to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

impl Config {
    /// Platform default location, e.g. `~/.config/pgpdrop/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(constants::CONFIG_DIR).join(constants::CONFIG_FILE))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// used if present, otherwise an empty configuration is returned.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing (explicit path only),
    /// unreadable, malformed, or fails validation.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()).into());
                }
                Self::load_from(path)
            }
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => {
                    debug!("no config file, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Load and validate the configuration at `path`.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse(&contents)
    }

    /// Parse and validate TOML contents.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate field contents.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a key URL that is not http(s).
    pub fn validate(&self) -> Result<()> {
        if let Some(url) = &self.key.url {
            validate_url(url).map_err(|reason| ConfigError::InvalidValue {
                field: "key.url",
                reason,
            })?;
        }
        Ok(())
    }

    pub fn key_url(&self) -> Option<&str> {
        self.key.url.as_deref()
    }

    /// Output directory, the current directory when unset.
    pub fn output_dir(&self) -> PathBuf {
        self.output.dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Check that `url` is an absolute http or https URL.
pub fn validate_url(url: &str) -> std::result::Result<(), String> {
    let parsed = reqwest::Url::parse(url).map_err(|e| format!("{}: {}", url, e))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!("unsupported scheme '{}' in {}", other, url)),
    }
}
