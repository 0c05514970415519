//! Cryptographic operations.
//!
//! Encryption is delegated to `sequoia-openpgp`. This module only selects
//! the recipient keys of one certificate and chooses the output encoding.
//!
//! ## Encodings
//!
//! - **binary**: raw OpenPGP packets, used for file outputs
//! - **armored**: ASCII armor (`-----BEGIN PGP MESSAGE-----`), used for text

use sequoia_openpgp::Cert;

use crate::error::Result;

mod openpgp;

#[cfg(test)]
pub(crate) mod testkit;

pub use openpgp::{has_encryption_key, parse_cert, OpenPgp};

/// Encryption backend trait.
///
/// A backend encrypts a payload to a single recipient and can emit either
/// a binary or an ASCII-armored message.
pub trait Cipher {
    /// Type representing the recipient public key.
    type Recipient;

    /// Encrypt to a binary message.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if the recipient has no usable encryption key
    /// or the library rejects the operation.
    fn encrypt_binary(&self, plaintext: &[u8], recipient: &Self::Recipient) -> Result<Vec<u8>>;

    /// Encrypt to an ASCII-armored message.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if encryption fails.
    fn encrypt_armored(&self, plaintext: &[u8], recipient: &Self::Recipient) -> Result<String>;
}

/// Encrypt bytes to a binary OpenPGP message for `cert`.
///
/// Convenience wrapper around `OpenPgp::encrypt_binary`.
pub fn encrypt_binary(plaintext: &[u8], cert: &Cert) -> Result<Vec<u8>> {
    OpenPgp.encrypt_binary(plaintext, cert)
}

/// Encrypt bytes to an armored OpenPGP message for `cert`.
///
/// Convenience wrapper around `OpenPgp::encrypt_armored`.
pub fn encrypt_armored(plaintext: &[u8], cert: &Cert) -> Result<String> {
    OpenPgp.encrypt_armored(plaintext, cert)
}
