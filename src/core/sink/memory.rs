//! In-memory sink.

use std::path::PathBuf;

use super::Sink;
use crate::error::Result;

/// Collects outputs as `(name, bytes)` pairs in arrival order.
#[derive(Debug, Default)]
pub struct Memory {
    pub outputs: Vec<(String, Vec<u8>)>,
}

impl Sink for Memory {
    fn save(&mut self, name: &str, bytes: &[u8]) -> Result<PathBuf> {
        self.outputs.push((name.to_string(), bytes.to_vec()));
        Ok(PathBuf::from(name))
    }
}
