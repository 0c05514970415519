//! Constants used throughout pgpdrop.
//!
//! Centralizes magic strings and configuration values.

/// Extension appended to every encrypted output (`report.pdf` -> `report.pdf.asc`).
pub const OUTPUT_EXTENSION: &str = "asc";

/// Config directory name under the platform config dir.
pub const CONFIG_DIR: &str = "pgpdrop";

/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "PGPDROP_LOG";

/// First line of an armored encrypted message.
pub const ARMORED_MESSAGE_HEADER: &str = "-----BEGIN PGP MESSAGE-----";

/// Label shown when the armored text could not be placed on the clipboard.
pub const CLIPBOARD_FAILED_LABEL: &str = "Failed";
