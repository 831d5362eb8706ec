//! A single guessing round
//!
//! ```text
//! SelectWord -> Scrambled -> AwaitingGuess -+-> (hint) -> AwaitingGuess
//!                                           +-> Correct
//!                                           +-> AttemptsExhausted
//! ```
//!
//! Word selection and scrambling happen in [`Session::start_round`]; a
//! `Round` value always starts in `AwaitingGuess`.
//!
//! [`Session::start_round`]: super::Session::start_round

use super::hint::{HintError, HintKind, HintOutcome, use_hint};
use super::score::{Award, ScoreTracker};
use crate::core::{Difficulty, Word};
use rand::Rng;
use std::fmt;

/// Guesses allowed per word
pub const MAX_ATTEMPTS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    AwaitingGuess,
    Correct,
    AttemptsExhausted,
}

impl RoundState {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::AwaitingGuess)
    }
}

/// Result of one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct(Award),
    Incorrect { attempts_left: u32 },
    /// Last attempt used; the score has been reset
    GameOver { answer: Word },
}

/// Reasons a round cannot start or continue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundError {
    NoWordsLoaded,
    NoWordsForDifficulty(Difficulty),
    Finished,
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWordsLoaded => write!(f, "No words loaded from the dictionary files."),
            Self::NoWordsForDifficulty(band) => {
                write!(f, "No words available for the {band} difficulty level.")
            }
            Self::Finished => write!(f, "This round is already over."),
        }
    }
}

impl std::error::Error for RoundError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    target: Word,
    scrambled: String,
    difficulty: Difficulty,
    attempts_left: u32,
    hints_used: u32,
    state: RoundState,
}

impl Round {
    #[must_use]
    pub fn new(target: Word, scrambled: String, difficulty: Difficulty) -> Self {
        Self {
            target,
            scrambled,
            difficulty,
            attempts_left: MAX_ATTEMPTS,
            hints_used: 0,
            state: RoundState::AwaitingGuess,
        }
    }

    /// The word to guess; only shown to the player once the round is lost
    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    /// The anagram shown to the player
    #[must_use]
    pub fn scrambled(&self) -> &str {
        &self.scrambled
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub const fn attempts_left(&self) -> u32 {
        self.attempts_left
    }

    #[must_use]
    pub const fn hints_used(&self) -> u32 {
        self.hints_used
    }

    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Check a guess and settle the score
    ///
    /// # Errors
    /// Returns `RoundError::Finished` if the round already ended.
    pub fn guess(
        &mut self,
        guess: &str,
        score: &mut ScoreTracker,
    ) -> Result<GuessOutcome, RoundError> {
        if self.is_finished() {
            return Err(RoundError::Finished);
        }

        if self.target.matches(guess) {
            self.state = RoundState::Correct;
            return Ok(GuessOutcome::Correct(score.apply_correct(self.target.len())));
        }

        self.attempts_left = score.apply_incorrect_attempt(self.attempts_left);
        if self.attempts_left > 0 {
            return Ok(GuessOutcome::Incorrect {
                attempts_left: self.attempts_left,
            });
        }

        self.state = RoundState::AttemptsExhausted;
        score.apply_game_over();
        Ok(GuessOutcome::GameOver {
            answer: self.target.clone(),
        })
    }

    /// Take a hint, charging its cost to the score
    ///
    /// Hints do not use up an attempt.
    ///
    /// # Errors
    /// Returns `HintError::LimitReached` after two hints and
    /// `HintError::RoundOver` once the round has ended. Neither changes state.
    pub fn hint<R: Rng + ?Sized>(
        &mut self,
        kind: HintKind,
        score: &mut ScoreTracker,
        rng: &mut R,
    ) -> Result<HintOutcome, HintError> {
        if self.is_finished() {
            return Err(HintError::RoundOver);
        }

        let outcome = use_hint(&self.target, self.hints_used, kind, rng)?;
        self.hints_used = outcome.hints_used;
        score.deduct_hint(outcome.cost);
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::hint::Hint;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn round(word: &str) -> Round {
        let target = Word::new(word).unwrap();
        let scrambled: String = word.chars().rev().collect();
        Round::new(target, scrambled, Difficulty::Easy)
    }

    #[test]
    fn new_round_awaits_guess() {
        let round = round("house");
        assert_eq!(round.state(), RoundState::AwaitingGuess);
        assert_eq!(round.attempts_left(), MAX_ATTEMPTS);
        assert_eq!(round.hints_used(), 0);
        assert_eq!(round.scrambled(), "esuoh");
    }

    #[test]
    fn correct_guess_wins() {
        let mut round = round("house");
        let mut score = ScoreTracker::new();

        let outcome = round.guess("house", &mut score).unwrap();
        let GuessOutcome::Correct(award) = outcome else {
            panic!("expected a win, got {outcome:?}");
        };
        assert_eq!(award.points, 5);
        assert_eq!(round.state(), RoundState::Correct);
        assert_eq!(score.score(), 5);
    }

    #[test]
    fn guess_with_different_case_is_incorrect() {
        let mut round = round("cat");
        let mut score = ScoreTracker::new();
        score.apply_correct(5);

        assert_eq!(
            round.guess("CAT", &mut score),
            Ok(GuessOutcome::Incorrect { attempts_left: 2 })
        );
        assert_eq!(round.state(), RoundState::AwaitingGuess);
        assert_eq!(score.streak(), 0);
        assert_eq!(score.score(), 5);
    }

    #[test]
    fn three_wrong_guesses_end_the_round() {
        let mut round = round("cat");
        let mut score = ScoreTracker::new();
        score.apply_correct(9);

        assert_eq!(
            round.guess("act", &mut score),
            Ok(GuessOutcome::Incorrect { attempts_left: 2 })
        );
        assert_eq!(score.streak(), 0);
        assert_eq!(score.score(), 9);

        assert_eq!(
            round.guess("tac", &mut score),
            Ok(GuessOutcome::Incorrect { attempts_left: 1 })
        );

        let outcome = round.guess("cta", &mut score).unwrap();
        assert_eq!(
            outcome,
            GuessOutcome::GameOver {
                answer: Word::new("cat").unwrap()
            }
        );
        assert_eq!(round.state(), RoundState::AttemptsExhausted);
        assert_eq!(score.score(), 0);
        assert_eq!(score.high_score(), 9);
    }

    #[test]
    fn win_on_last_attempt() {
        let mut round = round("dog");
        let mut score = ScoreTracker::new();
        round.guess("god", &mut score).unwrap();
        round.guess("odg", &mut score).unwrap();
        assert!(matches!(
            round.guess("dog", &mut score),
            Ok(GuessOutcome::Correct(_))
        ));
        assert_eq!(round.attempts_left(), 1);
    }

    #[test]
    fn finished_round_rejects_input() {
        let mut round = round("dog");
        let mut score = ScoreTracker::new();
        let mut rng = StdRng::seed_from_u64(0);
        round.guess("dog", &mut score).unwrap();

        assert_eq!(round.guess("dog", &mut score), Err(RoundError::Finished));
        assert_eq!(
            round.hint(HintKind::FirstLetter, &mut score, &mut rng),
            Err(HintError::RoundOver)
        );
        assert_eq!(score.score(), 3);
    }

    #[test]
    fn hints_cost_points_but_not_attempts() {
        let mut round = round("garden");
        let mut score = ScoreTracker::new();
        let mut rng = StdRng::seed_from_u64(0);

        let first = round
            .hint(HintKind::FirstLetter, &mut score, &mut rng)
            .unwrap();
        assert_eq!(first.hint, Hint::FirstLetter('g'));
        let second = round
            .hint(HintKind::WordLength, &mut score, &mut rng)
            .unwrap();
        assert_eq!(second.hint, Hint::WordLength(6));

        assert_eq!(round.hints_used(), 2);
        assert_eq!(round.attempts_left(), MAX_ATTEMPTS);
        assert_eq!(score.score(), -2);

        assert_eq!(
            round.hint(HintKind::RandomLetter, &mut score, &mut rng),
            Err(HintError::LimitReached)
        );
        assert_eq!(score.score(), -2);
        assert_eq!(round.hints_used(), 2);
    }
}
