//! wmctrl-specific implementations.
//!
//! This module provides the concrete backend for the
//! [`WindowManager`](crate::traits::WindowManager) trait, powered by the
//! `wmctrl` command-line tool.
//!
//! Nothing outside this module should reference wmctrl directly.

pub mod listing;
pub mod wm;
