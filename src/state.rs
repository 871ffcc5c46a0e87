//! Persisted `alias -> window id` bindings.
//!
//! The state file is a flat JSON object living next to the configuration.
//! It is read once at startup and, after an index pass, rewritten wholesale.
//! There is no locking: two overlapping runs race and the last writer wins.

use log::{debug, info};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// File name of the state inside the config directory.
pub const STATE_FILE_NAME: &str = "managed_windows.state";

/// The last known window id for every alias that has ever been indexed.
///
/// Entries are only ever added or overwritten, never removed, so an alias
/// whose window is temporarily closed keeps its previous binding.
#[derive(Debug, Clone)]
pub struct WindowState {
    path: PathBuf,
    windows: BTreeMap<String, String>,
}

impl WindowState {
    /// Load the state at `path`, creating it as `{}` first if it is absent.
    pub fn load_or_create(path: &Path) -> Result<Self, StateError> {
        if !path.exists() {
            info!("creating empty state file {}", path.display());
            let empty = Self {
                path: path.to_path_buf(),
                windows: BTreeMap::new(),
            };
            empty.persist()?;
        }

        let contents = std::fs::read_to_string(path).map_err(|source| StateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let windows: BTreeMap<String, String> =
            serde_json::from_str(&contents).map_err(|source| StateError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;
        debug!("loaded {} binding(s) from {}", windows.len(), path.display());

        Ok(Self {
            path: path.to_path_buf(),
            windows,
        })
    }

    /// The last known window id for `alias`.
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.windows.get(alias).map(String::as_str)
    }

    /// Overwrite the bindings for every alias in `updates`, leaving all other
    /// aliases untouched.
    ///
    /// Returns how many bindings were added or changed.
    pub fn merge(&mut self, updates: impl IntoIterator<Item = (String, String)>) -> usize {
        let mut changed = 0;
        for (alias, id) in updates {
            match self.windows.insert(alias.clone(), id.clone()) {
                Some(old) if old == id => {}
                Some(old) => {
                    debug!("{}: {} -> {}", alias, old, id);
                    changed += 1;
                }
                None => {
                    debug!("{}: new binding {}", alias, id);
                    changed += 1;
                }
            }
        }
        changed
    }

    /// Serialize the full mapping and atomically replace the state file.
    pub fn persist(&self) -> Result<(), StateError> {
        let write_err = |source: std::io::Error| StateError::Write {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(write_err)?;

        let json = serde_json::to_string(&self.windows)
            .map_err(|e| write_err(std::io::Error::other(e)))?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
        tmp.write_all(json.as_bytes()).map_err(write_err)?;
        tmp.persist(&self.path).map_err(|e| write_err(e.error))?;
        Ok(())
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Iterate over `(alias, window_id)` pairs in alias order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.windows.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of known bindings.
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Whether no alias has been bound yet.
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}

/// Errors from reading or writing the state file.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("failed to read state {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse state {}: {}", .path.display(), .source)]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to write state {}: {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
