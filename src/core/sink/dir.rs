//! Directory-backed sink.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use super::Sink;
use crate::error::Result;

/// Writes each output as a file inside `dir`, creating it on first use.
///
/// A file left in `dir` by an earlier run is overwritten.
#[derive(Debug, Clone)]
pub struct Directory {
    dir: PathBuf,
}

impl Directory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Sink for Directory {
    fn save(&mut self, name: &str, bytes: &[u8]) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(name);
        fs::write(&path, bytes)?;
        debug!(path = %path.display(), bytes = bytes.len(), "output written");
        Ok(path)
    }
}
