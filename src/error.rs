//! Error types.
//!
//! Each concern gets its own enum; [`Error`] wraps them so call sites can
//! use `?` across module boundaries.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error for pgpdrop operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Key(#[from] KeyError),

    #[error("Failed to get key: {0}")]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to read {}: {source}", path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Usage(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Problems with the current public key.
#[derive(Error, Debug)]
pub enum KeyError {
    #[error("no key loaded")]
    NoKey,

    #[error("Invalid GPG key: {0}")]
    Invalid(String),

    /// Error already recorded on the key state, rendered verbatim.
    #[error("{0}")]
    Rejected(String),
}

/// Key retrieval failures.
///
/// Rendered without a prefix; [`Error::Fetch`] adds `Failed to get key:`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("HTTP {0}")]
    Status(u16),

    #[error("{0}")]
    Network(String),
}

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("key has no usable encryption subkey")]
    NoEncryptionKey,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Clipboard access failures. Never escalated past the text action.
#[derive(Error, Debug)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);

pub type Result<T> = std::result::Result<T, Error>;
