//! Vaultdiff - Inventory secret stores and compare them across environments.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vaultdiff::cli::output;
use vaultdiff::cli::{execute, Cli};
use vaultdiff::core::constants::LOG_ENV;
use vaultdiff::error::{ConfigError, Error, StoreError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("vaultdiff=debug")
        } else {
            EnvFilter::new("vaultdiff=warn")
        }
    });

    let registry = tracing_subscriber::registry().with(filter);
    if cli.log_json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    if let Err(e) = execute(cli.command, cli.config) {
        // Format error with suggestion if available
        let error_msg = e.to_string();
        let suggestion = match &e {
            Error::Store(StoreError::Enumerate { .. }) => {
                Some("check the store path and your access to it")
            }
            Error::Store(StoreError::InvalidLocator(_)) => {
                Some("pass a secrets directory, a snapshot file, or a configured alias")
            }
            Error::Config(ConfigError::Parse(_)) | Error::Config(ConfigError::Invalid(_)) => {
                Some("fix the [stores] table in .vaultdiff.toml")
            }
            _ => None,
        };

        output::error(&error_msg);
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
