//! Key generation and decryption helpers shared by unit and integration tests.

use std::io::Read;

use sequoia_openpgp as openpgp;
use openpgp::cert::CertBuilder;
use openpgp::crypto::SessionKey;
use openpgp::packet::{PKESK, SKESK};
use openpgp::parse::stream::{
    DecryptionHelper, DecryptorBuilder, MessageStructure, VerificationHelper,
};
use openpgp::parse::Parse;
use openpgp::policy::StandardPolicy;
use openpgp::serialize::SerializeInto;
use openpgp::types::SymmetricAlgorithm;
use openpgp::{Cert, Fingerprint, KeyHandle};

const POLICY: &StandardPolicy = &StandardPolicy::new();

/// Generate a general-purpose key; returns (secret cert, public cert).
pub fn keypair(userid: &str) -> (Cert, Cert) {
    let (secret, _) = CertBuilder::general_purpose(None, Some(userid))
        .generate()
        .unwrap();
    let public = secret.clone().strip_secret_key_material();
    (secret, public)
}

/// A certificate that can sign but has no encryption subkey.
pub fn signing_only(userid: &str) -> Cert {
    let (cert, _) = CertBuilder::new()
        .add_userid(userid)
        .add_signing_subkey()
        .generate()
        .unwrap();
    cert.strip_secret_key_material()
}

/// Armored public key block.
pub fn armored(cert: &Cert) -> String {
    String::from_utf8(cert.armored().to_vec().unwrap()).unwrap()
}

/// Decrypt an armored or binary message with `secret`.
pub fn decrypt(secret: &Cert, message: &[u8]) -> Vec<u8> {
    let helper = Helper { secret };
    let mut decryptor = DecryptorBuilder::from_bytes(message)
        .unwrap()
        .with_policy(POLICY, None, helper)
        .unwrap();

    let mut plaintext = Vec::new();
    decryptor.read_to_end(&mut plaintext).unwrap();
    plaintext
}

struct Helper<'a> {
    secret: &'a Cert,
}

impl VerificationHelper for Helper<'_> {
    fn get_certs(&mut self, _ids: &[KeyHandle]) -> openpgp::Result<Vec<Cert>> {
        Ok(Vec::new())
    }

    fn check(&mut self, _structure: MessageStructure) -> openpgp::Result<()> {
        Ok(())
    }
}

impl DecryptionHelper for Helper<'_> {
    fn decrypt<D>(
        &mut self,
        pkesks: &[PKESK],
        _skesks: &[SKESK],
        sym_algo: Option<SymmetricAlgorithm>,
        mut decrypt: D,
    ) -> openpgp::Result<Option<Fingerprint>>
    where
        D: FnMut(SymmetricAlgorithm, &SessionKey) -> bool,
    {
        let key = self
            .secret
            .keys()
            .unencrypted_secret()
            .with_policy(POLICY, None)
            .for_transport_encryption()
            .next()
            .ok_or(openpgp::Error::InvalidOperation("no decryption key".into()))?
            .key()
            .clone();
        let mut pair = key.into_keypair()?;

        for pkesk in pkesks {
            if let Some((algo, session_key)) = pkesk.decrypt(&mut pair, sym_algo) {
                if decrypt(algo, &session_key) {
                    break;
                }
            }
        }
        Ok(None)
    }
}
