//! Terminal output formatting
//!
//! Display utilities for command reports.

pub mod display;
pub mod formatters;

pub use display::{print_analysis_result, print_benchmark_result};
