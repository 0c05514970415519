//! Key resolution for CLI commands.

use std::path::PathBuf;

use tracing::debug;

use crate::cli::KeyArgs;
use crate::core::config::Config;
use crate::core::session::Session;
use crate::error::{Error, Result};

/// Build a session and load its key from the command line and config.
///
/// Updates are applied in order and the last one wins:
/// 1. `--key-url` (or `PGPDROP_KEY_URL`), else the configured URL when
///    `--key` is absent
/// 2. `--key` text, read from a file or stdin
///
/// A URL that cannot be fetched, malformed ones included, is recorded on
/// the key like any other fetch failure.
///
/// # Errors
///
/// Returns the recorded key error when no usable key results.
pub async fn load_session(args: &KeyArgs, config: &Config) -> Result<Session> {
    let mut session = Session::new();

    let url = match (&args.key_url, &args.key) {
        (Some(url), _) => Some(url.as_str()),
        (None, None) => config.key_url(),
        (None, Some(_)) => None,
    };

    if let Some(url) = url {
        debug!(url, "loading key from url");
        session.load_from_url(url).await;
    }

    if let Some(source) = &args.key {
        debug!(source = %source, "loading key text");
        let armored = read_key(source)?;
        session.parse(&armored);
    }

    session.key().require()?;
    Ok(session)
}

/// Read armored key text from a path, or stdin for `-`.
fn read_key(from: &str) -> Result<String> {
    if from == "-" {
        return Ok(std::io::read_to_string(std::io::stdin())?);
    }
    let path = PathBuf::from(from);
    std::fs::read_to_string(&path).map_err(|source| Error::Input { path, source })
}

/// Whether the key is read from stdin.
pub fn key_from_stdin(args: &KeyArgs) -> bool {
    args.key.as_deref() == Some("-")
}
