//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod play;

pub use analyze::{AnalysisResult, analyze_words};
pub use benchmark::{BandStats, BenchmarkResult, run_benchmark};
pub use play::{open_session, run_console, run_interactive};
