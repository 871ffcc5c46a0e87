//! **winjump** — raise specific desktop windows from keyboard shortcuts.
//!
//! The desktop's own "jump to app N" shortcuts follow the order of icons in
//! the dock and can't tell two windows of one application apart.  winjump
//! works in two steps instead:
//!
//! * `index` (run periodically) lists the open windows and binds each
//!   configured alias to the first window whose title contains one of the
//!   alias's substrings.  Bindings are persisted next to the config.
//! * `raise <key>` maps a key to an alias, looks up the alias's last known
//!   window id and asks the window manager to focus it.
//!
//! # Architecture
//!
//! [`traits::WindowManager`] abstracts listing and activating windows so
//! [`jumper::Jumper`] is not coupled to any specific tool.  The concrete
//! implementation lives in [`wmctrl`].

pub mod cli;
pub mod command;
pub mod config;
pub mod index;
pub mod jumper;
pub mod state;
pub mod traits;
pub mod wmctrl;
