//! Word lists for the game
//!
//! Parsing of plain-text dictionaries and the bounded store that holds them.

pub mod loader;
mod store;

pub use store::{DEFAULT_CAPACITY, LoadReport, StoreError, WordStore};
