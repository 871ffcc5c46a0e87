//! Application configuration.
//!
//! The configuration is loaded from `manage_windows.json` inside the config
//! directory.  Both top-level keys are required.
//!
//! # Example
//!
//! ```json
//! {
//!   "WINDOW_TITLE_SUBSTRINGS": {
//!     "chat": ["Messages", "Slack"],
//!     "mail": ["Inbox - Mozilla Thunderbird"]
//!   },
//!   "WINDOW_RAISE_BY_KEY": {
//!     "1": "chat",
//!     "2": "mail"
//!   }
//! }
//! ```

use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File name of the configuration inside the config directory.
pub const CONFIG_FILE_NAME: &str = "manage_windows.json";

/// Top-level configuration.
///
/// Unknown top-level keys are ignored so the file can carry notes or future
/// sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// `alias -> title substrings`, tried in declaration order.
    #[serde(rename = "WINDOW_TITLE_SUBSTRINGS")]
    pub window_title_substrings: BTreeMap<String, Vec<String>>,

    /// `raise key -> alias`.  Keys are matched case-sensitively.
    #[serde(rename = "WINDOW_RAISE_BY_KEY")]
    pub window_raise_by_key: BTreeMap<String, String>,
}

impl AppConfig {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::Missing(path.to_path_buf()));
        }
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;
        config.warn_dangling_keys();
        Ok(config)
    }

    /// The alias bound to `key`, if any.
    pub fn alias_for_key(&self, key: &str) -> Option<&str> {
        self.window_raise_by_key.get(key).map(String::as_str)
    }

    // A key pointing at an alias without substrings can still be raised if
    // the state file knows the alias, so this is only a warning.
    fn warn_dangling_keys(&self) {
        for (key, alias) in &self.window_raise_by_key {
            if !self.window_title_substrings.contains_key(alias) {
                warn!(
                    "raise key {} maps to alias {} which has no title substrings",
                    key, alias
                );
            }
        }
    }
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("No configuration file found. The file '{}' is required.", .0.display())]
    Missing(PathBuf),
    #[error("failed to read {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {}", .path.display(), .source)]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}
