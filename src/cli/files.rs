//! Files command.
//!
//! Encrypt each input to a binary message written as `<name>.asc`.

use std::path::PathBuf;

use crate::cli::{output, resolve, KeyArgs};
use crate::core::config::Config;
use crate::core::sink::Directory;
use crate::error::Result;

pub async fn execute(
    files: &[PathBuf],
    key: &KeyArgs,
    out_dir: Option<PathBuf>,
    config: &Config,
) -> Result<()> {
    let session = resolve::load_session(key, config).await?;
    let mut sink = Directory::new(out_dir.unwrap_or_else(|| config.output_dir()));

    let written = session.encrypt_files(files, &mut sink)?;
    for path in &written {
        output::success(&format!("wrote {}", output::path(&path.display().to_string())));
    }

    Ok(())
}
