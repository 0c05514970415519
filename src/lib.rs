//! pgpdrop - Encrypt files and text to a single OpenPGP public key.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── files         # Encrypt files to <name>.asc
//! │   ├── text          # Encrypt text to the clipboard
//! │   ├── key           # Inspect the resolved key
//! │   ├── resolve       # Key source resolution (file, stdin, URL, config)
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── session       # Key/session controller, gates encryption
//!     ├── key           # Key state and validity
//!     ├── cipher/       # OpenPGP encryption (sequoia)
//!     ├── fetch         # HTTP key retrieval
//!     ├── sink/         # Encrypted file destinations
//!     ├── clipboard     # Armored text destinations
//!     └── config        # config.toml management
//! ```
//!
//! # Example
//!
//! ```no_run
//! use pgpdrop::core::clipboard::Memory;
//! use pgpdrop::core::session::{Session, TextOutcome};
//!
//! let mut session = Session::new();
//! session.parse(&std::fs::read_to_string("alice.asc").unwrap());
//!
//! let mut clipboard = Memory::default();
//! let outcome = session.encrypt_text("hello", &mut clipboard).unwrap();
//! assert_eq!(outcome, TextOutcome::Copied);
//! ```

pub mod cli;
pub mod core;
pub mod error;
