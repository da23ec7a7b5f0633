//! Command-line interface.

pub mod compare;
pub mod completions;
pub mod list;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::config::Config;
use crate::core::store::{self, SecretStore};
use crate::error::Result;

/// Vaultdiff - Inventory secret stores and compare them across environments.
#[derive(Parser)]
#[command(
    name = "vaultdiff",
    about = "Inventory secret stores and compare them across environments",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Path to a store alias config file
    #[arg(long, global = true, env = "VAULTDIFF_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// List every secret in a store
    List {
        /// Store alias or locator (secrets directory or snapshot file)
        store: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare the secrets of two stores
    Compare {
        /// Source store alias or locator
        source: String,
        /// Target store alias or locator
        target: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
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
pub fn execute(command: Command, config: Option<PathBuf>) -> Result<()> {
    use Command::*;

    match command {
        List { store, json } => {
            let config = Config::load(config.as_deref())?;
            list::execute(open(&config, &store)?.as_ref(), json)
        }
        Compare {
            source,
            target,
            json,
        } => {
            let config = Config::load(config.as_deref())?;
            let source = open(&config, &source)?;
            let target = open(&config, &target)?;
            compare::execute(source.as_ref(), target.as_ref(), json)
        }
        Completions { shell } => completions::execute(shell),
    }
}

/// Open a store argument, expanding config aliases.
fn open(config: &Config, arg: &str) -> Result<Box<dyn SecretStore>> {
    let store_ref = config.resolve(arg);
    store::open(&store_ref.name, &store_ref.locator)
}
