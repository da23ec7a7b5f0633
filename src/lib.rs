//! Vaultdiff - Inventory secret stores and compare them across environments.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── list          # Inventory one store
//! │   ├── compare       # Compare two stores
//! │   ├── completions   # Shell completions
//! │   └── output        # Terminal rendering helpers
//! └── core/             # Core library components
//!     ├── config        # .vaultdiff.toml store aliases
//!     ├── domain/       # SecretValue, Inventory
//!     ├── store/        # SecretStore trait and backends
//!     │   ├── dir       # Mounted secrets directory
//!     │   ├── snapshot  # TOML snapshot file
//!     │   └── memory    # In-memory store
//!     ├── fetch         # Inventory fetcher
//!     ├── diff          # Comparison engine
//!     └── format        # Display formatting of values
//! ```
//!
//! # Example
//!
//! ```
//! use vaultdiff::core::diff::Comparison;
//! use vaultdiff::core::fetch::fetch;
//! use vaultdiff::core::store::Memory;
//!
//! let dev = Memory::new("dev").with_secret("API_KEY", "a").with_secret("DEBUG", "1");
//! let stage = Memory::new("stage").with_secret("API_KEY", "a");
//!
//! let cmp = Comparison::compute(&fetch(&dev)?, &fetch(&stage)?);
//! assert_eq!(cmp.stats().matching, 1);
//! assert_eq!(cmp.stats().source_only, 1);
//! # Ok::<(), vaultdiff::error::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
