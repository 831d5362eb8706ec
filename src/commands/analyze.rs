//! Dictionary analysis command
//!
//! Summarises how a word list splits across the difficulty bands.

use crate::core::{Difficulty, Word, classify};
use rustc_hash::FxHashMap;

/// Result of analysing a word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub total_words: usize,
    /// Word count per band, in band order
    pub bands: Vec<(Difficulty, usize)>,
    /// Words too short for any band
    pub unclassified: usize,
    /// Word count per length, sorted by length
    pub lengths: Vec<(usize, usize)>,
    pub shortest: Option<String>,
    pub longest: Option<String>,
}

impl AnalysisResult {
    #[must_use]
    pub fn band_count(&self, band: Difficulty) -> usize {
        self.bands
            .iter()
            .find(|(b, _)| *b == band)
            .map_or(0, |(_, count)| *count)
    }
}

/// Analyse the words currently in a store
#[must_use]
pub fn analyze_words(words: &[Word]) -> AnalysisResult {
    let mut band_counts: FxHashMap<Difficulty, usize> = FxHashMap::default();
    let mut length_counts: FxHashMap<usize, usize> = FxHashMap::default();
    let mut unclassified = 0;

    for word in words {
        *length_counts.entry(word.len()).or_insert(0) += 1;
        match classify(word) {
            Some(band) => *band_counts.entry(band).or_insert(0) += 1,
            None => unclassified += 1,
        }
    }

    let bands = Difficulty::ALL
        .iter()
        .map(|&band| (band, band_counts.get(&band).copied().unwrap_or(0)))
        .collect();

    let mut lengths: Vec<(usize, usize)> = length_counts.into_iter().collect();
    lengths.sort_unstable();

    // First word wins ties
    let shortest = words
        .iter()
        .reduce(|best, w| if w.len() < best.len() { w } else { best })
        .map(|w| w.text().to_string());
    let longest = words
        .iter()
        .reduce(|best, w| if w.len() > best.len() { w } else { best })
        .map(|w| w.text().to_string());

    AnalysisResult {
        total_words: words.len(),
        bands,
        unclassified,
        lengths,
        shortest,
        longest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn analyze_mixed_list() {
        let words = words_from_slice(&[
            "cat", "house", "dog", "garden", "elephant", "adventure", "an", "pie",
        ]);
        let result = analyze_words(&words);

        assert_eq!(result.total_words, 8);
        assert_eq!(result.band_count(Difficulty::Easy), 4);
        assert_eq!(result.band_count(Difficulty::Medium), 2);
        assert_eq!(result.band_count(Difficulty::Hard), 1);
        assert_eq!(result.unclassified, 1);
        assert_eq!(
            result.lengths,
            vec![(2, 1), (3, 3), (5, 1), (6, 1), (8, 1), (9, 1)]
        );
        assert_eq!(result.shortest.as_deref(), Some("an"));
        assert_eq!(result.longest.as_deref(), Some("adventure"));
    }

    #[test]
    fn analyze_empty_list() {
        let result = analyze_words(&[]);
        assert_eq!(result.total_words, 0);
        assert!(result.bands.iter().all(|(_, count)| *count == 0));
        assert!(result.lengths.is_empty());
        assert_eq!(result.shortest, None);
    }

    #[test]
    fn ties_keep_first_word() {
        let words = words_from_slice(&["cat", "dog"]);
        let result = analyze_words(&words);
        assert_eq!(result.shortest.as_deref(), Some("cat"));
        assert_eq!(result.longest.as_deref(), Some("cat"));
    }
}
