//! Entry point for the **winjump** command.
//!
//! Loads the configuration and state from the config directory, runs one
//! [`Command`] through a [`Jumper`] backed by wmctrl, and exits.  Only hard
//! failures (missing or malformed files, a broken window listing) exit
//! non-zero; an unmapped key or an alias that was never indexed does not.

use clap::Parser;
use log::{error, info};
use std::io::Write;
use std::path::Path;
use winjump::cli::Cli;
use winjump::command::{Command, Outcome};
use winjump::config::{AppConfig, ConfigError, CONFIG_FILE_NAME};
use winjump::jumper::Jumper;
use winjump::state::{WindowState, STATE_FILE_NAME};
use winjump::traits::WindowManager;
use winjump::wmctrl::wm::WmctrlWm;

fn init_logging(verbose: bool) {
    let env = env_logger::Env::default().default_filter_or("info");
    let mut builder = env_logger::Builder::from_env(env);
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(dir) = cli.resolve_config_dir() else {
        error!("could not determine the config directory; pass --config-dir");
        std::process::exit(1);
    };

    let status = run(
        &dir,
        Command::from(cli.operation),
        WmctrlWm::new(),
        &mut std::io::stdout(),
    );
    std::process::exit(status);
}

/// Run `command` against the config and state in `dir`.
///
/// User-facing messages go to `out`; the return value is the exit status.
fn run<W: WindowManager>(dir: &Path, command: Command, wm: W, out: &mut impl Write) -> i32 {
    let config_path = dir.join(CONFIG_FILE_NAME);
    let config = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            info!("loaded config from {}", config_path.display());
            cfg
        }
        Err(e @ ConfigError::Missing(_)) => {
            let _ = writeln!(out, "{}", e);
            return 1;
        }
        Err(e) => {
            error!("{}", e);
            return 1;
        }
    };

    let state = match WindowState::load_or_create(&dir.join(STATE_FILE_NAME)) {
        Ok(s) => s,
        Err(e) => {
            error!("{}", e);
            return 1;
        }
    };

    let mut jumper = Jumper::new(wm, config, state);
    let outcome = match jumper.handle(command) {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("{}", e);
            return 1;
        }
    };

    match outcome {
        Outcome::Indexed { .. } => info!("{}", outcome),
        // Nothing was done; these end the run early, still with status 0.
        Outcome::KeyNotMapped { .. } | Outcome::StateUnknown { .. } => {
            let _ = writeln!(out, "{}", outcome);
            return 0;
        }
        Outcome::Raised { .. } => {
            let _ = writeln!(out, "{}", outcome);
        }
    }

    let _ = writeln!(out, "Done, exiting.");
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use winjump::command::WindowRecord;

    /// Window manager double; clones share the activation log.
    #[derive(Debug, Default, Clone)]
    struct SharedWm {
        windows: Vec<WindowRecord>,
        fail_listing: bool,
        activations: Rc<RefCell<Vec<String>>>,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("shared wm error")]
    struct SharedWmErr;

    impl WindowManager for SharedWm {
        type Error = SharedWmErr;

        fn list_windows(&self) -> Result<Vec<WindowRecord>, SharedWmErr> {
            if self.fail_listing {
                return Err(SharedWmErr);
            }
            Ok(self.windows.clone())
        }

        fn activate(&self, id: &str) -> Result<(), SharedWmErr> {
            self.activations.borrow_mut().push(id.into());
            Ok(())
        }
    }

    const CHAT_CONFIG: &str =
        r#"{"WINDOW_TITLE_SUBSTRINGS": {"chat":["Messages"]}, "WINDOW_RAISE_BY_KEY": {"1":"chat"}}"#;

    fn write_config(dir: &Path) {
        std::fs::write(dir.join(CONFIG_FILE_NAME), CHAT_CONFIG).unwrap();
    }

    fn run_capture(dir: &Path, command: Command, wm: SharedWm) -> (i32, String) {
        let mut out = Vec::new();
        let status = run(dir, command, wm, &mut out);
        (status, String::from_utf8(out).unwrap())
    }

    #[test]
    fn missing_config_exits_1() {
        let dir = tempfile::tempdir().unwrap();
        let (status, out) = run_capture(dir.path(), Command::Index, SharedWm::default());
        assert_eq!(status, 1);
        assert!(out.starts_with("No configuration file found."));
        assert!(!dir.path().join(STATE_FILE_NAME).exists());
    }

    #[test]
    fn malformed_config_exits_1() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "{").unwrap();
        let (status, out) = run_capture(dir.path(), Command::Index, SharedWm::default());
        assert_eq!(status, 1);
        assert!(!out.contains("Done, exiting."));
    }

    #[test]
    fn malformed_state_exits_1() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path());
        std::fs::write(dir.path().join(STATE_FILE_NAME), "not json").unwrap();
        let (status, _) = run_capture(dir.path(), Command::Index, SharedWm::default());
        assert_eq!(status, 1);
    }

    #[test]
    fn listing_failure_exits_1() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path());
        let wm = SharedWm {
            fail_listing: true,
            ..Default::default()
        };
        let (status, out) = run_capture(dir.path(), Command::Index, wm);
        assert_eq!(status, 1);
        assert!(!out.contains("Done, exiting."));
    }

    #[test]
    fn index_then_raise_exit_0() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path());
        let wm = SharedWm {
            windows: vec![WindowRecord {
                id: "0x00123".into(),
                desktop: 0,
                window_class: "Slack".into(),
                host: "host".into(),
                title: "\"Messages - general\"".into(),
            }],
            ..Default::default()
        };

        let (status, out) = run_capture(dir.path(), Command::Index, wm.clone());
        assert_eq!(status, 0);
        assert_eq!(out, "Done, exiting.\n");

        let (status, out) = run_capture(dir.path(), Command::Raise { key: "1".into() }, wm.clone());
        assert_eq!(status, 0);
        assert_eq!(out, "Raising chat (0x00123)\nDone, exiting.\n");
        assert_eq!(*wm.activations.borrow(), vec!["0x00123".to_string()]);
    }

    #[test]
    fn unmapped_key_exits_0_without_done() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path());
        let wm = SharedWm::default();
        let (status, out) = run_capture(dir.path(), Command::Raise { key: "9".into() }, wm.clone());
        assert_eq!(status, 0);
        assert_eq!(out, "Requested key 9 is not mapped, ignoring.\n");
        assert!(wm.activations.borrow().is_empty());
    }

    #[test]
    fn unknown_state_exits_0_without_done() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path());
        let wm = SharedWm::default();
        let (status, out) = run_capture(dir.path(), Command::Raise { key: "1".into() }, wm.clone());
        assert_eq!(status, 0);
        assert_eq!(out, "Current state unknown for window chat\n");
        assert!(wm.activations.borrow().is_empty());
    }
}
