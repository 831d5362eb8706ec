//! Game configuration
//!
//! Built from the command line in `main.rs`; the defaults reproduce the
//! classic game.

use crate::game::{ScrambleMode, TimingMode};
use crate::wordlists::DEFAULT_CAPACITY;
use std::path::PathBuf;

/// Dictionary loaded at startup
pub const DEFAULT_DICTIONARY: &str = "dictionary.txt";

/// Dictionary offered in the shop
pub const DEFAULT_SHOP_DICTIONARY: &str = "dictionary2.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub dictionary: PathBuf,
    pub shop_dictionary: PathBuf,
    /// Maximum words held across all loads
    pub capacity: usize,
    /// Seed for word choice, scrambling and random-letter hints
    pub seed: Option<u64>,
    pub timing: TimingMode,
    pub scramble: ScrambleMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dictionary: PathBuf::from(DEFAULT_DICTIONARY),
            shop_dictionary: PathBuf::from(DEFAULT_SHOP_DICTIONARY),
            capacity: DEFAULT_CAPACITY,
            seed: None,
            timing: TimingMode::Fixed,
            scramble: ScrambleMode::Classic,
        }
    }
}
