//! Key/session controller.
//!
//! Holds the single active key and gates the two encryption actions on it.
//! Actions run to completion or fail once; nothing is retried or cancelled.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use zeroize::Zeroizing;

use crate::core::cipher;
use crate::core::clipboard::Clipboard;
use crate::core::fetch::KeyFetcher;
use crate::core::key::KeyState;
use crate::core::sink::{OutputNames, Sink};
use crate::error::{Error, Result};

/// Result of [`Session::encrypt_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextOutcome {
    /// Armored message placed on the clipboard.
    Copied,
    /// Encryption succeeded but the clipboard refused the write.
    ClipboardFailed,
    /// Gate closed or nothing to encrypt; no output produced.
    Skipped,
}

/// Current key plus the operations that depend on it.
#[derive(Debug, Default)]
pub struct Session {
    key: KeyState,
    fetcher: KeyFetcher,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(&self) -> &KeyState {
        &self.key
    }

    pub fn disabled(&self) -> bool {
        self.key.disabled()
    }

    /// Replace the key with one parsed from `armored`.
    pub fn parse(&mut self, armored: &str) {
        self.key.parse(armored);
    }

    /// Fetch an armored key from `url` and parse it.
    ///
    /// A failed fetch clears the key and records
    /// `Failed to get key: <reason>`.
    pub async fn load_from_url(&mut self, url: &str) {
        match self.fetcher.fetch(url).await {
            Ok(body) => self.key.parse(&body),
            Err(e) => {
                let err = Error::from(e);
                warn!(url, error = %err, "key fetch failed");
                self.key.fail(&err);
            }
        }
    }

    /// Encrypt each file to a binary message named `<file>.asc`.
    ///
    /// Files are processed one after another; the first failure stops the
    /// batch. Inputs sharing a file name get numbered outputs
    /// (`<file> (1).asc`), so every input has its own output. Returns the
    /// written locations, empty when the gate is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read, encrypted, or saved.
    pub fn encrypt_files<P, S>(&self, files: &[P], sink: &mut S) -> Result<Vec<PathBuf>>
    where
        P: AsRef<Path>,
        S: Sink + ?Sized,
    {
        let Some(cert) = self.gate() else {
            return Ok(Vec::new());
        };

        let mut names = OutputNames::new();
        let mut written = Vec::with_capacity(files.len());
        for file in files {
            let file = file.as_ref();
            let plaintext = Zeroizing::new(std::fs::read(file).map_err(|source| {
                Error::Input {
                    path: file.to_path_buf(),
                    source,
                }
            })?);

            let ciphertext = cipher::encrypt_binary(plaintext.as_slice(), cert)?;
            let path = sink.save(&names.claim(file), &ciphertext)?;

            info!(
                input = %file.display(),
                output = %path.display(),
                "encrypted file"
            );
            written.push(path);
        }

        Ok(written)
    }

    /// Encrypt `text` to an armored message and put it on the clipboard.
    ///
    /// Blank text and a closed gate are no-ops. A clipboard failure is
    /// reported as [`TextOutcome::ClipboardFailed`], never as an error.
    ///
    /// # Errors
    ///
    /// Returns an error only if encryption itself fails.
    pub fn encrypt_text<C>(&self, text: &str, clipboard: &mut C) -> Result<TextOutcome>
    where
        C: Clipboard + ?Sized,
    {
        let Some(cert) = self.gate() else {
            return Ok(TextOutcome::Skipped);
        };
        if text.trim().is_empty() {
            debug!("text blank, nothing to encrypt");
            return Ok(TextOutcome::Skipped);
        }

        let armored = cipher::encrypt_armored(text.as_bytes(), cert)?;

        match clipboard.set_text(&armored) {
            Ok(()) => Ok(TextOutcome::Copied),
            Err(e) => {
                warn!(error = %e, "clipboard write failed");
                Ok(TextOutcome::ClipboardFailed)
            }
        }
    }

    fn gate(&self) -> Option<&sequoia_openpgp::Cert> {
        if self.key.disabled() {
            debug!("encryption disabled, no valid key");
            return None;
        }
        self.key.cert()
    }
}
