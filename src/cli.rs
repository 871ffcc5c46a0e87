//! Command-line interface.
//!
//! ```text
//! winjump index
//! winjump raise <key>
//! ```
//!
//! `index` is meant to run from cron every minute or so; `raise` is bound to
//! hotkeys through a launcher such as Autokey or xbindkeys.

use crate::command::Command;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Directory name under the user's config dir, shared with existing
/// `manage_windows` setups so their config and state are picked up as-is.
pub const APP_DIR: &str = "mjs_manage_windows";

#[derive(Parser, Debug)]
#[command(
    name = "winjump",
    version,
    about = "Jump to specific windows, even among several windows of one application"
)]
pub struct Cli {
    /// Directory holding manage_windows.json and managed_windows.state
    /// [default: $XDG_CONFIG_HOME/mjs_manage_windows]
    #[arg(long, global = true, env = "WINJUMP_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub operation: Operation,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Index the currently open windows. Intended to be called on an automated schedule.
    Index,
    /// Raise the window whose alias is mapped to KEY.
    Raise {
        /// Raise key as defined in WINDOW_RAISE_BY_KEY
        key: String,
    },
}

impl Cli {
    /// The directory holding both the config and the state file.
    ///
    /// `None` if no override was given and the platform has no config dir
    /// (e.g. `$HOME` is unset).
    pub fn resolve_config_dir(&self) -> Option<PathBuf> {
        self.config_dir
            .clone()
            .or_else(|| dirs::config_dir().map(|d| d.join(APP_DIR)))
    }
}

impl From<Operation> for Command {
    fn from(op: Operation) -> Self {
        match op {
            Operation::Index => Command::Index,
            Operation::Raise { key } => Command::Raise { key },
        }
    }
}
