//! Directory-backed secret store.
//!
//! Reads a mounted secrets directory where each regular file is one secret:
//! the file name is the identifier and the file contents are the value. This
//! is the layout used by Docker secrets and Kubernetes secret volumes.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::SecretStore;
use crate::error::{Result, StoreError};

/// A secrets directory.
#[derive(Debug, Clone)]
pub struct Directory {
    name: String,
    root: PathBuf,
}

impl Directory {
    /// Create a store rooted at `root`.
    pub fn new(name: impl Into<String>, root: impl AsRef<Path>) -> Self {
        Self {
            name: name.into(),
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Root directory of the store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn enumerate_error(&self, reason: impl ToString) -> StoreError {
        StoreError::Enumerate {
            store: self.name.clone(),
            reason: reason.to_string(),
        }
    }

    fn resolve_error(&self, id: &str, reason: impl ToString) -> StoreError {
        StoreError::Resolve {
            store: self.name.clone(),
            id: id.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Identifiers are bare file names.
fn is_valid_id(id: &str) -> bool {
    !id.is_empty() && !id.starts_with('.') && !id.contains(['/', '\\'])
}

/// Whether an entry is a directory, following symlinks. A dangling link is
/// not a directory.
fn is_directory(entry: &fs::DirEntry) -> bool {
    match entry.file_type() {
        Ok(ft) if ft.is_symlink() => fs::metadata(entry.path()).is_ok_and(|m| m.is_dir()),
        Ok(ft) => ft.is_dir(),
        Err(_) => false,
    }
}

impl SecretStore for Directory {
    fn name(&self) -> &str {
        &self.name
    }

    fn list(&self) -> Result<Vec<String>> {
        debug!(store = %self.name, root = %self.root.display(), "listing secrets directory");

        let entries = fs::read_dir(&self.root).map_err(|e| self.enumerate_error(e))?;
        let mut ids = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|e| self.enumerate_error(e))?;
            let file_name = entry.file_name();
            // Listed under a lossy name so the entry still shows up unresolved.
            let id = match file_name.to_str() {
                Some(id) => id.to_string(),
                None => {
                    warn!(store = %self.name, name = ?file_name, "file name is not UTF-8");
                    file_name.to_string_lossy().into_owned()
                }
            };
            // Hidden entries include the `..data` links of Kubernetes mounts.
            if !is_valid_id(&id) || is_directory(&entry) {
                continue;
            }
            ids.push(id);
        }

        debug!(store = %self.name, count = ids.len(), "listed secrets");
        Ok(ids)
    }

    fn resolve(&self, id: &str) -> Result<String> {
        if !is_valid_id(id) {
            return Err(self.resolve_error(id, "invalid identifier").into());
        }
        fs::read_to_string(self.root.join(id)).map_err(|e| self.resolve_error(id, e).into())
    }
}
