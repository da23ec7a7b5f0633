//! Test support utilities for vaultdiff integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]


#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own temporary working dir and home dir.
/// No process-global state is mutated; child processes use `.current_dir()`
/// so tests can safely run in parallel.
pub struct Test {
    /// Temporary working directory holding stores and config
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self { dir, home }
    }

    /// Create a secrets directory store populated with `secrets`.
    ///
    /// Returns the store's path.
    pub fn store_dir(&self, name: &str, secrets: &[(&str, &str)]) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::create_dir_all(&path).expect("failed to create store dir");
        for (k, v) in secrets {
            std::fs::write(path.join(k), v).expect("failed to write secret");
        }
        path
    }

    /// Add a secret to a directory store that cannot be read as text.
    pub fn unreadable_secret(&self, store: &str, id: &str) {
        let path = self.dir.path().join(store).join(id);
        std::fs::write(path, [0xff, 0xfe, 0xfd]).expect("failed to write secret");
    }

    /// Write a snapshot store file with the given TOML contents.
    ///
    /// Returns the file's path.
    pub fn snapshot(&self, file: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(file);
        std::fs::write(&path, contents).expect("failed to write snapshot");
        path
    }

    /// Write `.vaultdiff.toml` in the working directory.
    pub fn config(&self, contents: &str) {
        std::fs::write(self.dir.path().join(".vaultdiff.toml"), contents)
            .expect("failed to write config");
    }
}
