//! OpenPGP backend implementation.
//!
//! Builds a message stream of `[Armorer] -> Encryptor -> LiteralWriter`
//! over an in-memory buffer.

use std::io::Write;

use sequoia_openpgp::cert::amalgamation::key::ValidErasedKeyAmalgamation;
use sequoia_openpgp::packet::key::PublicParts;
use sequoia_openpgp::parse::Parse;
use sequoia_openpgp::policy::StandardPolicy;
use sequoia_openpgp::serialize::stream::{Armorer, Encryptor2, LiteralWriter, Message};
use sequoia_openpgp::Cert;
use tracing::trace;

use super::Cipher;
use crate::error::{CipherError, KeyError, Result};

const POLICY: &StandardPolicy = &StandardPolicy::new();

/// OpenPGP backend using sequoia.
pub struct OpenPgp;

impl OpenPgp {
    fn encrypt_into(plaintext: &[u8], cert: &Cert, armor: bool) -> Result<Vec<u8>> {
        let recipients = recipients(cert);
        if recipients.is_empty() {
            return Err(CipherError::NoEncryptionKey.into());
        }

        trace!(
            recipients = recipients.len(),
            plaintext_len = plaintext.len(),
            armor,
            "encrypting"
        );

        let mut sink = Vec::new();
        {
            let mut message = Message::new(&mut sink);
            if armor {
                message = Armorer::new(message).build().map_err(failed)?;
            }
            let message = Encryptor2::for_recipients(message, recipients)
                .build()
                .map_err(failed)?;
            let mut message = LiteralWriter::new(message).build().map_err(failed)?;
            message.write_all(plaintext)?;
            message.finalize().map_err(failed)?;
        }

        trace!(ciphertext_len = sink.len(), "encrypted");
        Ok(sink)
    }
}

impl Cipher for OpenPgp {
    type Recipient = Cert;

    fn encrypt_binary(&self, plaintext: &[u8], recipient: &Cert) -> Result<Vec<u8>> {
        Self::encrypt_into(plaintext, recipient, false)
    }

    fn encrypt_armored(&self, plaintext: &[u8], recipient: &Cert) -> Result<String> {
        let armored = Self::encrypt_into(plaintext, recipient, true)?;
        String::from_utf8(armored)
            .map_err(|e| CipherError::EncryptionFailed(format!("UTF-8 error: {}", e)).into())
    }
}

fn failed(e: impl std::fmt::Display) -> CipherError {
    CipherError::EncryptionFailed(e.to_string())
}

/// Parse armored (or binary) text into a certificate.
///
/// # Errors
///
/// Returns `KeyError::Invalid` carrying the library's message.
pub fn parse_cert(text: &str) -> Result<Cert> {
    Cert::from_bytes(text.as_bytes()).map_err(|e| KeyError::Invalid(e.to_string()).into())
}

/// Whether `cert` has at least one key usable for encrypting to it today.
pub fn has_encryption_key(cert: &Cert) -> bool {
    !recipients(cert).is_empty()
}

/// Alive, non-revoked transport-encryption keys valid under the policy.
fn recipients(cert: &Cert) -> Vec<ValidErasedKeyAmalgamation<'_, PublicParts>> {
    cert.keys()
        .with_policy(POLICY, None)
        .supported()
        .alive()
        .revoked(false)
        .for_transport_encryption()
        .collect()
}
