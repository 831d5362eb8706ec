//! Play commands
//!
//! Set up a session from the configuration and hand it to a front-end.

use crate::config::GameConfig;
use crate::console::Console;
use crate::game::Session;
use crate::interactive::{App, MessageStyle, run_tui};
use crate::wordlists::StoreError;
use anyhow::Result;
use colored::Colorize;
use log::info;
use std::io;

/// Create a session and load the main dictionary
///
/// A missing dictionary is not fatal: the game reports it when a round is
/// attempted and the shop can still add words. The load error is returned
/// alongside the session so the caller can show it.
pub fn open_session(config: GameConfig) -> (Session, Option<StoreError>) {
    let mut session = Session::new(config);
    match session.load_dictionary() {
        Ok(report) => {
            info!(
                "Session ready with {} words ({} dropped, {} skipped)",
                report.added, report.dropped, report.skipped
            );
            (session, None)
        }
        Err(err) => (session, Some(err)),
    }
}

/// Run the line-based console game on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading stdin or writing stdout fails.
pub fn run_console(config: GameConfig) -> Result<()> {
    let (mut session, load_error) = open_session(config);

    if let Some(err) = load_error {
        println!("{}", format!("Warning: {err}").yellow());
    }

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    console.run(&mut session)?;
    Ok(())
}

/// Run the full-screen TUI game
///
/// # Errors
///
/// Returns an error if terminal setup fails.
pub fn run_interactive(config: GameConfig) -> Result<()> {
    let (session, load_error) = open_session(config);
    let word_count = session.store().len();

    let mut app = App::new(session);
    if let Some(err) = load_error {
        app.add_message(&err.to_string(), MessageStyle::Error);
    } else {
        app.add_message(&format!("{word_count} words loaded."), MessageStyle::Info);
    }

    run_tui(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn open_session_with_missing_dictionary() {
        let config = GameConfig {
            dictionary: std::env::temp_dir().join("unscramble-play-missing.txt"),
            seed: Some(2),
            ..GameConfig::default()
        };
        let (session, err) = open_session(config);
        assert!(matches!(err, Some(StoreError::NoSource { .. })));
        assert!(session.store().is_empty());
    }

    #[test]
    fn open_session_loads_dictionary() {
        let path: PathBuf = std::env::temp_dir().join(format!(
            "unscramble-play-dictionary-{}.txt",
            std::process::id()
        ));
        std::fs::write(&path, "cat house dog").unwrap();

        let config = GameConfig {
            dictionary: path.clone(),
            seed: Some(2),
            ..GameConfig::default()
        };
        let (session, err) = open_session(config);
        assert!(err.is_none());
        assert_eq!(session.store().len(), 3);

        std::fs::remove_file(path).ok();
    }
}
