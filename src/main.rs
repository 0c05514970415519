//! pgpdrop - Encrypt files and text to a single OpenPGP public key.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pgpdrop::cli::output;
use pgpdrop::cli::{execute, Cli};
use pgpdrop::core::constants::LOG_ENV;
use pgpdrop::error::{ConfigError, Error, KeyError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("pgpdrop=debug")
        } else {
            EnvFilter::new("pgpdrop=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    // Key fetches are the only suspension point; one thread is enough.
    let result = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(Error::from)
        .and_then(|rt| rt.block_on(execute(cli.command, cli.config)));

    if let Err(e) = result {
        let suggestion = match &e {
            Error::Key(KeyError::NoKey) => Some("pass --key <file> or --key-url <url>"),
            Error::Key(KeyError::Rejected(_)) => Some("check the key source and try again"),
            Error::Config(ConfigError::NotFound(_)) => Some("unset PGPDROP_CONFIG or fix --config"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
