//! Word scrambling
//!
//! The classic scramble swaps every position with a uniformly random
//! position. That is not a uniform shuffle: some permutations come up more
//! often than others and the word can come back unchanged. It stays the
//! default; `Uniform` is opt-in.

use crate::core::Word;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// Scramble algorithm selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScrambleMode {
    /// Swap each position with a random position (biased, may be identity)
    #[default]
    Classic,
    /// Fisher-Yates shuffle
    Uniform,
}

impl ScrambleMode {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Uniform => "uniform",
        }
    }

    /// Scramble `word` with this algorithm
    pub fn apply<R: Rng + ?Sized>(self, word: &Word, rng: &mut R) -> String {
        match self {
            Self::Classic => scramble(word, rng),
            Self::Uniform => shuffle(word, rng),
        }
    }
}

impl fmt::Display for ScrambleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScrambleMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "classic" => Ok(Self::Classic),
            "uniform" | "fisher-yates" => Ok(Self::Uniform),
            other => Err(format!("unknown scramble mode '{other}'")),
        }
    }
}

/// Classic scramble: for each position `i`, swap with a random `k` in `[0, len)`
///
/// The result is always a permutation of the input but is not guaranteed to
/// differ from it.
pub fn scramble<R: Rng + ?Sized>(word: &Word, rng: &mut R) -> String {
    let mut letters = word.as_bytes().to_vec();
    let len = letters.len();

    for i in 0..len {
        let k = rng.random_range(0..len);
        letters.swap(i, k);
    }

    // Swapping ASCII bytes cannot produce invalid UTF-8
    letters.into_iter().map(char::from).collect()
}

/// Uniform scramble using a Fisher-Yates shuffle
pub fn shuffle<R: Rng + ?Sized>(word: &Word, rng: &mut R) -> String {
    let mut letters = word.as_bytes().to_vec();
    letters.shuffle(rng);
    letters.into_iter().map(char::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sorted(text: &str) -> Vec<u8> {
        let mut bytes = text.as_bytes().to_vec();
        bytes.sort_unstable();
        bytes
    }

    #[test]
    fn scramble_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        for text in ["a", "at", "cat", "house", "balloon", "mississippi", "Zebra"] {
            let word = Word::new(text).unwrap();
            for _ in 0..50 {
                let scrambled = scramble(&word, &mut rng);
                assert_eq!(scrambled.len(), text.len());
                assert_eq!(sorted(&scrambled), sorted(text), "{text} -> {scrambled}");
            }
        }
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(11);
        for text in ["cat", "garden", "adventure"] {
            let word = Word::new(text).unwrap();
            for _ in 0..50 {
                let scrambled = shuffle(&word, &mut rng);
                assert_eq!(sorted(&scrambled), sorted(text));
            }
        }
    }

    #[test]
    fn single_letter_scrambles_to_itself() {
        let mut rng = StdRng::seed_from_u64(1);
        let word = Word::new("a").unwrap();
        assert_eq!(scramble(&word, &mut rng), "a");
        assert_eq!(shuffle(&word, &mut rng), "a");
    }

    #[test]
    fn classic_scramble_can_return_the_word_unchanged() {
        // Two letters: each swap is identity or transposition with
        // probability 1/2, so identity shows up about half the time.
        let mut rng = StdRng::seed_from_u64(3);
        let word = Word::new("ab").unwrap();
        let unchanged = (0..200)
            .filter(|_| scramble(&word, &mut rng) == "ab")
            .count();
        assert!(unchanged > 0);
        assert!(unchanged < 200);
    }

    #[test]
    fn scramble_is_deterministic_for_a_seed() {
        let word = Word::new("elephant").unwrap();
        let a = scramble(&word, &mut StdRng::seed_from_u64(42));
        let b = scramble(&word, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn mode_from_str() {
        assert_eq!("classic".parse::<ScrambleMode>(), Ok(ScrambleMode::Classic));
        assert_eq!("Uniform".parse::<ScrambleMode>(), Ok(ScrambleMode::Uniform));
        assert!("random".parse::<ScrambleMode>().is_err());
        assert_eq!(ScrambleMode::default(), ScrambleMode::Classic);
    }
}
