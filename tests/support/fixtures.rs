//! Test fixtures: keys, decryption, and canned inputs.
//!
//! The tool never decrypts, so key generation and the decryptor come from
//! the crate's unit-test kit and are shared here.

#[path = "../../src/core/cipher/testkit.rs"]
mod testkit;

pub use testkit::{armored, decrypt, keypair};

/// Text that is not an OpenPGP key.
pub const INVALID_KEY: &str = "-----BEGIN PGP PUBLIC KEY BLOCK-----\n\nnot a key\n-----END PGP PUBLIC KEY BLOCK-----\n";

/// First line of every armored message.
pub const MESSAGE_HEADER: &str = "-----BEGIN PGP MESSAGE-----";
