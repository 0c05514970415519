//! Current public key and its validity gate.

use sequoia_openpgp::Cert;
use serde::Serialize;
use tracing::debug;

use crate::core::cipher;
use crate::error::{Error, KeyError};

/// State of the single active public key.
///
/// `disabled()` is true whenever no certificate is held or an error is
/// recorded. Every mutation replaces the state wholesale, so the last
/// update applied wins.
#[derive(Debug, Default, Clone)]
pub struct KeyState {
    armored: String,
    cert: Option<Cert>,
    error: Option<String>,
}

/// Display summary of a loaded key.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct KeyInfo {
    pub fingerprint: String,
    pub user_ids: Vec<String>,
    pub can_encrypt: bool,
}

impl KeyState {
    /// Empty state: no key, no error, disabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Interpret `armored` as a public key.
    ///
    /// - blank input clears both key and error
    /// - parse failure clears the key and records `Invalid GPG key: ...`
    /// - a key with nothing to encrypt to is a parse failure too
    pub fn parse(&mut self, armored: &str) {
        self.armored = armored.to_string();

        if armored.trim().is_empty() {
            debug!("key text empty");
            self.cert = None;
            self.error = None;
            return;
        }

        let parsed = cipher::parse_cert(armored).and_then(|cert| {
            if cipher::has_encryption_key(&cert) {
                Ok(cert)
            } else {
                Err(KeyError::Invalid("no encryption-capable key".to_string()).into())
            }
        });

        match parsed {
            Ok(cert) => {
                debug!(fingerprint = %cert.fingerprint(), "key loaded");
                self.cert = Some(cert);
                self.error = None;
            }
            Err(e) => {
                debug!(error = %e, "key rejected");
                self.cert = None;
                self.error = Some(e.to_string());
            }
        }
    }

    /// Drop the key and record `error`.
    pub fn fail(&mut self, error: &Error) {
        self.cert = None;
        self.error = Some(error.to_string());
    }

    /// Whether encryption actions must refuse to run.
    pub fn disabled(&self) -> bool {
        self.cert.is_none() || self.error.is_some()
    }

    pub fn cert(&self) -> Option<&Cert> {
        self.cert.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Raw text last passed to [`KeyState::parse`].
    pub fn armored(&self) -> &str {
        &self.armored
    }

    /// The certificate, or the reason there is none.
    pub fn require(&self) -> Result<&Cert, Error> {
        match (&self.cert, &self.error) {
            (Some(cert), None) => Ok(cert),
            (_, Some(msg)) => Err(KeyError::Rejected(msg.clone()).into()),
            (None, None) => Err(KeyError::NoKey.into()),
        }
    }

    /// User IDs of the loaded key, for display only.
    pub fn user_ids(&self) -> Vec<String> {
        self.cert
            .as_ref()
            .map(|cert| {
                cert.userids()
                    .map(|ua| String::from_utf8_lossy(ua.userid().value()).into_owned())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn fingerprint(&self) -> Option<String> {
        self.cert.as_ref().map(|cert| cert.fingerprint().to_hex())
    }

    pub fn summary(&self) -> Option<KeyInfo> {
        let cert = self.cert.as_ref()?;
        Some(KeyInfo {
            fingerprint: cert.fingerprint().to_hex(),
            user_ids: self.user_ids(),
            can_encrypt: cipher::has_encryption_key(cert),
        })
    }
}
