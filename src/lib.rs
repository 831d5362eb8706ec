//! Unscramble
//!
//! A terminal word-unscrambling game: words from a dictionary are scrambled
//! and the player has three tries to recover each one, with streak combos,
//! paid hints and achievements.
//!
//! # Quick Start
//!
//! ```rust
//! use unscramble::config::GameConfig;
//! use unscramble::core::Difficulty;
//! use unscramble::game::{GuessOutcome, Session};
//!
//! let mut session = Session::new(GameConfig { seed: Some(1), ..GameConfig::default() });
//! session.store_mut().load_str("cat house dog", 0);
//!
//! let mut round = session.start_round(Difficulty::Easy).unwrap();
//! let answer = round.target().text().to_string();
//! let report = session.guess(&mut round, &answer).unwrap();
//! assert!(matches!(report.outcome, GuessOutcome::Correct(_)));
//! ```

// Core domain types
pub mod core;

// Game rules and session state
pub mod game;

// Dictionary loading
pub mod wordlists;

// Runtime configuration
pub mod config;

// Line-based front-end
pub mod console;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
