//! Core trait that decouples winjump from the tool that talks to the window
//! manager.
//!
//! The [`Jumper`](crate::jumper::Jumper) only depends on this abstraction;
//! [`WmctrlWm`](crate::wmctrl::wm::WmctrlWm) is the production backend and
//! the jumper's tests use a recording double.

use crate::command::WindowRecord;

/// Abstraction over a window manager that can list windows and focus one of
/// them by id.
pub trait WindowManager {
    /// The error type produced by this window manager.
    type Error: std::error::Error + Send + 'static;

    /// Return every open window, in the order the window manager lists them.
    ///
    /// Blocks until the listing is complete.
    fn list_windows(&self) -> Result<Vec<WindowRecord>, Self::Error>;

    /// Ask the window manager to focus the window with `id`.
    ///
    /// Fire-and-forget: `Ok(())` means the request was issued, not that the
    /// window actually came to the front.
    fn activate(&self, id: &str) -> Result<(), Self::Error>;
}

