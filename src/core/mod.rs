//! Core domain types for the unscramble game
//!
//! Words and the length-based difficulty bands. Everything here is pure and
//! free of I/O.

pub mod difficulty;
mod word;

pub use difficulty::{Difficulty, InvalidDifficultyChoice, classify, filter};
pub use word::{Word, WordError};
