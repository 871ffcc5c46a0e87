//! The orchestrator that ties configuration, persisted state, and the
//! window manager together.
//!
//! [`Jumper`] reacts to a [`Command`] by indexing the open windows or by
//! raising a previously indexed one, issuing calls to the
//! [`WindowManager`] trait.

use crate::command::{Command, Outcome};
use crate::config::AppConfig;
use crate::index::resolve_aliases;
use crate::state::{StateError, WindowState};
use crate::traits::WindowManager;
use log::{debug, error, info};

/// Possible errors from the jumper.
#[derive(Debug, thiserror::Error)]
pub enum JumperError {
    /// The window manager returned an error.
    #[error("window manager error: {0}")]
    WindowManager(String),
    /// The state file could not be written.
    #[error(transparent)]
    State(#[from] StateError),
}

/// Runs index and raise operations.
///
/// The jumper is generic over any [`WindowManager`] implementation and owns
/// the configuration and state loaded for this process.
///
/// # Typical usage
///
/// ```ignore
/// let config = AppConfig::load(&config_path)?;
/// let state = WindowState::load_or_create(&state_path)?;
/// let mut jumper = Jumper::new(WmctrlWm::new(), config, state);
/// jumper.handle(Command::Raise { key: "1".into() })?;
/// ```
pub struct Jumper<W: WindowManager> {
    wm: W,
    config: AppConfig,
    state: WindowState,
}

impl<W: WindowManager> Jumper<W> {
    /// Create a new jumper.
    pub fn new(wm: W, config: AppConfig, state: WindowState) -> Self {
        Self { wm, config, state }
    }

    /// Return a shared reference to the in-memory state.
    pub fn state(&self) -> &WindowState {
        &self.state
    }

    /// Process a single [`Command`].
    pub fn handle(&mut self, cmd: Command) -> Result<Outcome, JumperError> {
        match cmd {
            Command::Index => self.index(),
            Command::Raise { key } => Ok(self.raise(&key)),
        }
    }

    /// Snapshot the open windows, bind aliases, and persist the result.
    ///
    /// Aliases without a matching window keep their previous binding.
    pub fn index(&mut self) -> Result<Outcome, JumperError> {
        let windows = self
            .wm
            .list_windows()
            .map_err(|e| JumperError::WindowManager(e.to_string()))?;
        info!("indexing {} open window(s)", windows.len());

        let resolved = resolve_aliases(&self.config, &windows);
        let count = resolved.len();
        debug!("resolved this pass: {:?}", resolved);

        let changed = self.state.merge(resolved);
        self.state.persist()?;
        info!(
            "{} alias(es) resolved, {} binding(s) changed, {} known, saved to {}",
            count,
            changed,
            self.state.len(),
            self.state.path().display()
        );

        Ok(Outcome::Indexed { resolved: count })
    }

    /// Focus the window bound to the alias that `key` maps to.
    ///
    /// An unmapped key or an alias that was never indexed is reported as an
    /// [`Outcome`], not an error.  A failure to start the activation tool is
    /// logged and otherwise ignored.
    pub fn raise(&self, key: &str) -> Outcome {
        info!("raising {}", key);
        let Some(alias) = self.config.alias_for_key(key) else {
            return Outcome::KeyNotMapped {
                key: key.to_string(),
            };
        };

        debug!(
            "states that we know of: {:?}",
            self.state.iter().collect::<Vec<_>>()
        );
        let Some(id) = self.state.get(alias) else {
            return Outcome::StateUnknown {
                alias: alias.to_string(),
            };
        };

        info!("raising {} ({})", alias, id);
        if let Err(e) = self.wm.activate(id) {
            error!("failed to activate {}: {}", id, e);
        }

        Outcome::Raised {
            alias: alias.to_string(),
            id: id.to_string(),
        }
    }
}
