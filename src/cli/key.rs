//! Key inspection command.

use crate::cli::{output, resolve, KeyArgs};
use crate::core::config::Config;
use crate::error::{KeyError, Result};

/// Show the fingerprint and user IDs of the resolved key.
pub async fn show(key: &KeyArgs, json: bool, config: &Config) -> Result<()> {
    let session = resolve::load_session(key, config).await?;
    let info = session.key().summary().ok_or(KeyError::NoKey)?;

    if json {
        output::data(&serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    output::header("Public key");
    output::rule();
    output::kv("fingerprint", &info.fingerprint);
    output::kv("encrypt    ", if info.can_encrypt { "yes" } else { "no" });
    if info.user_ids.is_empty() {
        output::kv("user ids   ", "(none)");
    } else {
        output::kv("user ids   ", info.user_ids.len());
        for uid in &info.user_ids {
            output::list_item(uid);
        }
    }

    Ok(())
}
