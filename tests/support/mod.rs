//! Test support utilities for pgpdrop integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use sequoia_openpgp::Cert;
use tempfile::TempDir;

/// Test environment with an isolated working dir, config dir, and keypair.
///
/// No process-global state is mutated; child processes use `.current_dir()`
/// and explicit env vars so tests can run in parallel.
pub struct Test {
    /// Working directory for the command
    pub dir: TempDir,
    /// Home/config directory
    pub home: TempDir,
    /// Secret key for checking outputs
    pub secret: Cert,
    /// Public half, the key commands encrypt to
    pub public: Cert,
}

impl Test {
    /// Create a new environment with a fresh keypair.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");
        let (secret, public) = keypair("Test User <test@example.org>");

        Self {
            dir,
            home,
            secret,
            public,
        }
    }

    /// Write the armored public key into the working dir and return its path.
    pub fn key_file(&self) -> PathBuf {
        let path = self.dir.path().join("public.asc");
        std::fs::write(&path, armored(&self.public)).expect("failed to write key");
        path
    }

    /// Write a file into the working dir.
    pub fn file(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("failed to write file");
        path
    }

    /// Write a config file into the home dir and return its path.
    pub fn config(&self, contents: &str) -> PathBuf {
        let path = self.home.path().join("config.toml");
        std::fs::write(&path, contents).expect("failed to write config");
        path
    }
}
