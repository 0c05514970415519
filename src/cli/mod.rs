//! Command-line interface.

pub mod completions;
pub mod files;
pub mod key;
pub mod output;
pub mod resolve;
pub mod text;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::config::Config;
use crate::error::Result;

/// pgpdrop - Encrypt files and text to a single OpenPGP public key.
#[derive(Parser)]
#[command(
    name = "pgpdrop",
    about = "Encrypt files and text to a single OpenPGP public key",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to the config file
    #[arg(long, global = true, value_name = "PATH", env = "PGPDROP_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Where the public key comes from.
///
/// With neither flag set, the configured default key URL is fetched.
#[derive(Args, Clone, Debug, Default)]
pub struct KeyArgs {
    /// Armored public key file ("-" reads stdin)
    #[arg(short, long, value_name = "PATH")]
    pub key: Option<String>,

    /// URL to fetch the armored public key from
    #[arg(short = 'u', long, value_name = "URL", env = "PGPDROP_KEY_URL")]
    pub key_url: Option<String>,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Encrypt files to binary messages named <file>.asc
    Files {
        /// Files to encrypt, processed in order
        #[arg(required = true)]
        files: Vec<PathBuf>,

        #[command(flatten)]
        key: KeyArgs,

        /// Directory to write encrypted files to
        #[arg(short, long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },

    /// Encrypt text to an armored message and copy it to the clipboard
    Text {
        /// Text to encrypt (read from stdin when omitted)
        text: Option<String>,

        #[command(flatten)]
        key: KeyArgs,

        /// Print the armored message instead of copying it
        #[arg(long)]
        stdout: bool,
    },

    /// Inspect the public key
    Key {
        #[command(subcommand)]
        action: KeyAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Key subcommands.
#[derive(Subcommand)]
pub enum KeyAction {
    /// Show fingerprint and user IDs of the resolved key
    Show {
        #[command(flatten)]
        key: KeyArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub async fn execute(command: Command, config_path: Option<PathBuf>) -> Result<()> {
    if let Command::Completions { shell } = command {
        return completions::execute(shell);
    }

    let config = Config::load(config_path.as_deref())?;

    match command {
        Command::Files {
            files,
            key,
            out_dir,
        } => files::execute(&files, &key, out_dir, &config).await,
        Command::Text { text, key, stdout } => text::execute(text, &key, stdout, &config).await,
        Command::Key { action } => match action {
            KeyAction::Show { key, json } => key::show(&key, json, &config).await,
        },
        Command::Completions { .. } => Ok(()),
    }
}
