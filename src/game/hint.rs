//! Hints
//!
//! A hint reveals part of the target word and costs one point. At most two
//! hints may be taken per word.

use crate::core::Word;
use rand::Rng;
use std::fmt;

/// Points deducted for each hint
pub const HINT_COST: i64 = 1;

/// Hints allowed per word
pub const MAX_HINTS_PER_WORD: u32 = 2;

/// The kinds of hint offered in the hint menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintKind {
    FirstLetter,
    WordLength,
    RandomLetter,
}

impl HintKind {
    /// All kinds in menu order
    pub const ALL: [Self; 3] = [Self::FirstLetter, Self::WordLength, Self::RandomLetter];

    /// Parse a hint menu selection ("1", "2" or "3")
    ///
    /// # Errors
    /// Returns `HintError::InvalidChoice` for anything else.
    pub fn from_choice(input: &str) -> Result<Self, HintError> {
        match input.trim() {
            "1" => Ok(Self::FirstLetter),
            "2" => Ok(Self::WordLength),
            "3" => Ok(Self::RandomLetter),
            other => Err(HintError::InvalidChoice(other.to_string())),
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::FirstLetter => "Reveal the first letter",
            Self::WordLength => "Show word length",
            Self::RandomLetter => "Reveal a random letter",
        }
    }
}

/// Information revealed by a hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    FirstLetter(char),
    WordLength(usize),
    /// `position` is 1-based
    Letter { position: usize, letter: char },
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstLetter(c) => write!(f, "First letter: {c}"),
            Self::WordLength(len) => write!(f, "Word length: {len} letters."),
            Self::Letter { position, letter } => {
                write!(f, "Revealed letter at position {position}: {letter}")
            }
        }
    }
}

/// Hint failures; none of them change any state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintError {
    LimitReached,
    InvalidChoice(String),
    RoundOver,
}

impl fmt::Display for HintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LimitReached => write!(f, "You have used all available hints for this word."),
            Self::InvalidChoice(choice) => write!(f, "Invalid hint choice '{choice}'."),
            Self::RoundOver => write!(f, "This round is already over."),
        }
    }
}

impl std::error::Error for HintError {}

/// A granted hint together with its bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintOutcome {
    pub hint: Hint,
    pub hints_used: u32,
    /// Points to deduct from the score
    pub cost: i64,
}

/// Reveal part of `word`
///
/// # Errors
/// Returns `HintError::LimitReached` once `hints_used` reaches
/// [`MAX_HINTS_PER_WORD`].
pub fn use_hint<R: Rng + ?Sized>(
    word: &Word,
    hints_used: u32,
    kind: HintKind,
    rng: &mut R,
) -> Result<HintOutcome, HintError> {
    if hints_used >= MAX_HINTS_PER_WORD {
        return Err(HintError::LimitReached);
    }

    let hint = match kind {
        HintKind::FirstLetter => Hint::FirstLetter(word.char_at(0)),
        HintKind::WordLength => Hint::WordLength(word.len()),
        HintKind::RandomLetter => {
            let index = rng.random_range(0..word.len());
            Hint::Letter {
                position: index + 1,
                letter: word.char_at(index),
            }
        }
    };

    Ok(HintOutcome {
        hint,
        hints_used: hints_used + 1,
        cost: HINT_COST,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(5)
    }

    #[test]
    fn first_letter_hint() {
        let word = Word::new("garden").unwrap();
        let outcome = use_hint(&word, 0, HintKind::FirstLetter, &mut rng()).unwrap();
        assert_eq!(outcome.hint, Hint::FirstLetter('g'));
        assert_eq!(outcome.hints_used, 1);
        assert_eq!(outcome.cost, 1);
    }

    #[test]
    fn word_length_hint() {
        let word = Word::new("garden").unwrap();
        let outcome = use_hint(&word, 1, HintKind::WordLength, &mut rng()).unwrap();
        assert_eq!(outcome.hint, Hint::WordLength(6));
        assert_eq!(outcome.hints_used, 2);
    }

    #[test]
    fn random_letter_hint_matches_position() {
        let word = Word::new("garden").unwrap();
        let mut rng = rng();
        for _ in 0..30 {
            let outcome = use_hint(&word, 0, HintKind::RandomLetter, &mut rng).unwrap();
            let Hint::Letter { position, letter } = outcome.hint else {
                panic!("expected a letter hint");
            };
            assert!((1..=6).contains(&position));
            assert_eq!(word.char_at(position - 1), letter);
        }
    }

    #[test]
    fn third_hint_is_refused() {
        let word = Word::new("garden").unwrap();
        for kind in HintKind::ALL {
            assert_eq!(
                use_hint(&word, 2, kind, &mut rng()),
                Err(HintError::LimitReached)
            );
        }
    }

    #[test]
    fn from_choice() {
        assert_eq!(HintKind::from_choice("1"), Ok(HintKind::FirstLetter));
        assert_eq!(HintKind::from_choice("2 "), Ok(HintKind::WordLength));
        assert_eq!(HintKind::from_choice("3"), Ok(HintKind::RandomLetter));
        assert_eq!(
            HintKind::from_choice("9"),
            Err(HintError::InvalidChoice("9".to_string()))
        );
    }

    #[test]
    fn hint_display() {
        assert_eq!(Hint::FirstLetter('c').to_string(), "First letter: c");
        assert_eq!(Hint::WordLength(3).to_string(), "Word length: 3 letters.");
        assert_eq!(
            Hint::Letter {
                position: 2,
                letter: 'a'
            }
            .to_string(),
            "Revealed letter at position 2: a"
        );
    }
}
