//! Difficulty bands
//!
//! Words are classified purely by length. Bands are contiguous and
//! non-overlapping; words shorter than three letters belong to none.

use super::Word;
use std::fmt;
use std::ops::RangeInclusive;

/// Length bounds for each band
pub const EASY_LENGTHS: RangeInclusive<usize> = 3..=5;
pub const MEDIUM_LENGTHS: RangeInclusive<usize> = 6..=8;
pub const HARD_MIN_LENGTH: usize = 9;

/// Difficulty band derived from word length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Error for a difficulty menu choice outside 1-3
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDifficultyChoice(pub String);

impl fmt::Display for InvalidDifficultyChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid difficulty '{}', expected 1, 2 or 3", self.0)
    }
}

impl std::error::Error for InvalidDifficultyChoice {}

impl Difficulty {
    /// All bands in menu order
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Classify a word length
    ///
    /// # Examples
    /// ```
    /// use unscramble::core::Difficulty;
    ///
    /// assert_eq!(Difficulty::for_length(2), None);
    /// assert_eq!(Difficulty::for_length(5), Some(Difficulty::Easy));
    /// assert_eq!(Difficulty::for_length(6), Some(Difficulty::Medium));
    /// assert_eq!(Difficulty::for_length(12), Some(Difficulty::Hard));
    /// ```
    #[must_use]
    pub fn for_length(len: usize) -> Option<Self> {
        if EASY_LENGTHS.contains(&len) {
            Some(Self::Easy)
        } else if MEDIUM_LENGTHS.contains(&len) {
            Some(Self::Medium)
        } else if len >= HARD_MIN_LENGTH {
            Some(Self::Hard)
        } else {
            None
        }
    }

    /// Parse a difficulty menu selection ("1", "2" or "3")
    ///
    /// # Errors
    /// Returns `InvalidDifficultyChoice` for anything else.
    pub fn from_choice(input: &str) -> Result<Self, InvalidDifficultyChoice> {
        match input.trim() {
            "1" => Ok(Self::Easy),
            "2" => Ok(Self::Medium),
            "3" => Ok(Self::Hard),
            other => Err(InvalidDifficultyChoice(other.to_string())),
        }
    }

    /// Menu number for this band
    #[must_use]
    pub const fn choice(self) -> u8 {
        match self {
            Self::Easy => 1,
            Self::Medium => 2,
            Self::Hard => 3,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Human readable length range, as shown in the difficulty menu
    #[must_use]
    pub const fn length_label(self) -> &'static str {
        match self {
            Self::Easy => "3-5 letters",
            Self::Medium => "6-8 letters",
            Self::Hard => "9+ letters",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a word into its band, if any
#[must_use]
pub fn classify(word: &Word) -> Option<Difficulty> {
    Difficulty::for_length(word.len())
}

/// Keep the words belonging to `band`, in their original order
#[must_use]
pub fn filter(words: &[Word], band: Difficulty) -> Vec<&Word> {
    words
        .iter()
        .filter(|word| classify(word) == Some(band))
        .collect()
}
