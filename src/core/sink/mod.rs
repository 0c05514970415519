//! Output sinks for encrypted files.
//!
//! A sink is where an encrypted file "downloads" to. The default writes
//! into a directory; tests collect outputs in memory.
//!
//! ## Adding a New Sink
//!
//! 1. Implement the `Sink` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::core::constants::OUTPUT_EXTENSION;
use crate::error::Result;

mod dir;
mod memory;

pub use dir::Directory;
pub use memory::Memory;

/// Destination for encrypted file outputs.
pub trait Sink {
    /// Store `bytes` under `name`.
    ///
    /// # Returns
    ///
    /// Location the output was written to.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the output cannot be written.
    fn save(&mut self, name: &str, bytes: &[u8]) -> Result<PathBuf>;
}

/// Output name for an input path: `<file-name>.asc`.
///
/// Only the final path component is kept, so outputs never escape the sink.
pub fn output_name(input: &Path) -> String {
    format!("{}.{}", base_name(input), OUTPUT_EXTENSION)
}

fn base_name(input: &Path) -> String {
    input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "message".to_string())
}

/// Output names for one batch, numbered when inputs share a file name.
///
/// `a/x.txt` and `b/x.txt` become `x.txt.asc` and `x.txt (1).asc`.
#[derive(Debug, Default)]
pub struct OutputNames {
    taken: HashSet<String>,
}

impl OutputNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve a name for `input` that no earlier input in the batch got.
    pub fn claim(&mut self, input: &Path) -> String {
        let mut name = output_name(input);
        let base = base_name(input);
        let mut n = 1;
        while self.taken.contains(&name) {
            name = format!("{} ({}).{}", base, n, OUTPUT_EXTENSION);
            n += 1;
        }
        self.taken.insert(name.clone());
        name
    }
}
