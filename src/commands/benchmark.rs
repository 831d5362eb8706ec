//! Scramble benchmark command
//!
//! Scrambles every playable word many times with both algorithms and counts
//! how often the anagram comes out identical to the word.

use crate::core::{Difficulty, Word, classify};
use crate::game::ScrambleMode;
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Scramble tallies for one band under one algorithm
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BandStats {
    pub words: usize,
    pub trials: usize,
    /// Scrambles that returned the word unchanged
    pub unchanged: usize,
}

impl BandStats {
    /// Fraction of scrambles that returned the word unchanged
    #[must_use]
    pub fn unchanged_rate(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.unchanged as f64 / self.trials as f64
        }
    }

    fn merge(&mut self, other: Self) {
        self.words += other.words;
        self.trials += other.trials;
        self.unchanged += other.unchanged;
    }
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub trials_per_word: usize,
    pub total_words: usize,
    /// Per band: classic stats, uniform stats
    pub bands: Vec<(Difficulty, BandStats, BandStats)>,
    pub duration: Duration,
}

impl BenchmarkResult {
    #[must_use]
    pub fn stats(&self, band: Difficulty, mode: ScrambleMode) -> BandStats {
        self.bands
            .iter()
            .find(|(b, _, _)| *b == band)
            .map_or_else(BandStats::default, |(_, classic, uniform)| match mode {
                ScrambleMode::Classic => *classic,
                ScrambleMode::Uniform => *uniform,
            })
    }
}

fn count_unchanged(word: &Word, mode: ScrambleMode, trials: usize, rng: &mut StdRng) -> usize {
    (0..trials)
        .filter(|_| mode.apply(word, rng) == word.text())
        .count()
}

/// Run `trials_per_word` scrambles of every playable word with each algorithm
///
/// Each word gets its own generator derived from `seed`, so results do not
/// depend on how rayon splits the work.
#[must_use]
pub fn run_benchmark(
    words: &[Word],
    trials_per_word: usize,
    seed: u64,
    show_progress: bool,
) -> BenchmarkResult {
    let start = Instant::now();
    let playable: Vec<(u64, &Word, Difficulty)> = words
        .iter()
        .enumerate()
        .filter_map(|(i, w)| classify(w).map(|band| (i as u64, w, band)))
        .collect();

    let pb = if show_progress {
        ProgressBar::new(playable.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb.set_message("scrambling");

    let per_word: Vec<(Difficulty, BandStats, BandStats)> = playable
        .par_iter()
        .map(|&(index, word, band)| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(index));
            let classic = BandStats {
                words: 1,
                trials: trials_per_word,
                unchanged: count_unchanged(word, ScrambleMode::Classic, trials_per_word, &mut rng),
            };
            let uniform = BandStats {
                words: 1,
                trials: trials_per_word,
                unchanged: count_unchanged(word, ScrambleMode::Uniform, trials_per_word, &mut rng),
            };
            pb.inc(1);
            (band, classic, uniform)
        })
        .collect();

    pb.finish_with_message("Complete!");

    let mut totals: FxHashMap<Difficulty, (BandStats, BandStats)> = FxHashMap::default();
    for (band, classic, uniform) in per_word {
        let entry = totals.entry(band).or_default();
        entry.0.merge(classic);
        entry.1.merge(uniform);
    }

    let bands = Difficulty::ALL
        .iter()
        .map(|&band| {
            let (classic, uniform) = totals.get(&band).copied().unwrap_or_default();
            (band, classic, uniform)
        })
        .collect();

    BenchmarkResult {
        trials_per_word,
        total_words: playable.len(),
        bands,
        duration: start.elapsed(),
    }
}
