//! [`WindowManager`] implementation backed by the `wmctrl` tool.
//!
//! Listing runs `wmctrl -lx` and waits for it; activation runs
//! `wmctrl -i -a <id>` and returns as soon as the child is spawned.

use crate::command::WindowRecord;
use crate::traits::WindowManager;
use crate::wmctrl::listing::parse_listing;
use log::debug;
use std::ffi::OsString;
use std::process::{Command, ExitStatus, Stdio};

/// Default program name, resolved through `$PATH`.
pub const DEFAULT_PROGRAM: &str = "wmctrl";

/// wmctrl-backed window manager.
///
/// Every call spawns a fresh `wmctrl` process.  wmctrl itself needs
/// `DISPLAY` (and usually `XAUTHORITY`) to reach the X server, which is the
/// caller's job when running from cron.
#[derive(Debug, Clone)]
pub struct WmctrlWm {
    program: OsString,
}

/// Errors that can occur when running wmctrl.
#[derive(Debug, thiserror::Error)]
pub enum WmctrlError {
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
    #[error("{program} exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
}

impl Default for WmctrlWm {
    fn default() -> Self {
        Self::new()
    }
}

impl WmctrlWm {
    /// Create a handle that runs `wmctrl` from `$PATH`.
    pub fn new() -> Self {
        Self::with_program(DEFAULT_PROGRAM)
    }

    /// Create a handle that runs `program` instead of `wmctrl`.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }

    fn spawn_err(&self, source: std::io::Error) -> WmctrlError {
        WmctrlError::Spawn {
            program: self.program_name(),
            source,
        }
    }
}

impl WindowManager for WmctrlWm {
    type Error = WmctrlError;

    fn list_windows(&self) -> Result<Vec<WindowRecord>, Self::Error> {
        let output = Command::new(&self.program)
            .arg("-lx")
            .stdin(Stdio::null())
            .output()
            .map_err(|e| self.spawn_err(e))?;

        if !output.status.success() {
            return Err(WmctrlError::Failed {
                program: self.program_name(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let records = parse_listing(&stdout);
        debug!("{} listed {} window(s)", self.program_name(), records.len());
        Ok(records)
    }

    fn activate(&self, id: &str) -> Result<(), Self::Error> {
        // The child is never waited on; its exit status is not our concern.
        let child = Command::new(&self.program)
            .args(["-i", "-a", id])
            .stdin(Stdio::null())
            .spawn()
            .map_err(|e| self.spawn_err(e))?;
        debug!("spawned {} (pid {}) to activate {}", self.program_name(), child.id(), id);
        Ok(())
    }
}
