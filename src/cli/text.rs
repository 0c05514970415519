//! Text command.
//!
//! Encrypt a message to ASCII armor and hand it to the clipboard.

use crate::cli::{output, resolve, KeyArgs};
use crate::core::clipboard::{self, Clipboard};
use crate::core::config::Config;
use crate::core::constants::CLIPBOARD_FAILED_LABEL;
use crate::core::session::TextOutcome;
use crate::error::{Error, Result};

pub async fn execute(
    text: Option<String>,
    key: &KeyArgs,
    to_stdout: bool,
    config: &Config,
) -> Result<()> {
    if text.is_none() && resolve::key_from_stdin(key) {
        return Err(Error::Usage(
            "cannot read both the key and the message from stdin".to_string(),
        ));
    }

    let session = resolve::load_session(key, config).await?;

    let text = match text {
        Some(text) => text,
        None => std::io::read_to_string(std::io::stdin())?,
    };

    let mut target: Box<dyn Clipboard> = if to_stdout {
        Box::new(clipboard::Stdout)
    } else {
        Box::new(clipboard::System::new().on_hold(|| {
            output::hint("keeping the message on the clipboard until something else is copied")
        }))
    };

    match session.encrypt_text(&text, target.as_mut())? {
        TextOutcome::Copied if to_stdout => {}
        TextOutcome::Copied => output::success("encrypted message copied to clipboard"),
        TextOutcome::ClipboardFailed => output::warn(CLIPBOARD_FAILED_LABEL),
        TextOutcome::Skipped => output::warn("nothing to encrypt"),
    }

    Ok(())
}
