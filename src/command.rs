//! Commands and types used throughout winjump.
//!
//! This module defines the vocabulary that all components share:
//! [`Command`] describes every operation the jumper can perform,
//! [`Outcome`] describes what it ended up doing, and [`WindowRecord`] is
//! one open window as reported by the window manager.

use std::fmt;

/// An operation requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Snapshot the open windows and refresh the alias bindings.
    Index,
    /// Focus the window bound to the alias that `key` maps to.
    Raise { key: String },
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Index => write!(f, "index"),
            Command::Raise { key } => write!(f, "raise {}", key),
        }
    }
}

/// One open window from the window manager's listing.
///
/// Records only live for the duration of an index pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    /// Opaque window identifier, e.g. `0x03a00007`.
    pub id: String,
    /// Desktop number the window lives on.
    pub desktop: u64,
    /// `WM_CLASS` as `instance.Class`.
    pub window_class: String,
    /// Client machine name.
    pub host: String,
    /// Window title, verbatim.
    pub title: String,
}

/// What a [`Command`] ended up doing.
///
/// None of these are failures: a key that isn't mapped or an alias that
/// hasn't been indexed yet are reported and the process still exits 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// An index pass finished; `resolved` aliases matched an open window.
    Indexed { resolved: usize },
    /// The activation tool was asked to focus `id`.
    Raised { alias: String, id: String },
    /// `key` has no entry in `WINDOW_RAISE_BY_KEY`.
    KeyNotMapped { key: String },
    /// `alias` has never been bound to a window.
    StateUnknown { alias: String },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Indexed { resolved } => write!(f, "indexed {} alias(es)", resolved),
            Outcome::Raised { alias, id } => write!(f, "Raising {} ({})", alias, id),
            Outcome::KeyNotMapped { key } => {
                write!(f, "Requested key {} is not mapped, ignoring.", key)
            }
            Outcome::StateUnknown { alias } => {
                write!(f, "Current state unknown for window {}", alias)
            }
        }
    }
}
