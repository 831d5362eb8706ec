//! Game session
//!
//! Owns everything that lives for the whole run: the word store, the score,
//! the achievement set, the stopwatch and the random number generator.
//! Front-ends drive it one call at a time.

use super::achievements::{AchievementKind, AchievementTracker, RoundEvent};
use super::clock::{Clock, Stopwatch};
use super::hint::{HintError, HintKind, HintOutcome};
use super::round::{GuessOutcome, Round, RoundError};
use super::score::ScoreTracker;
use crate::config::GameConfig;
use crate::core::{Difficulty, filter};
use crate::wordlists::{LoadReport, StoreError, WordStore};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

/// A guess outcome plus any achievements it unlocked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessReport {
    pub outcome: GuessOutcome,
    pub unlocked: Vec<AchievementKind>,
}

#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    store: WordStore,
    score: ScoreTracker,
    achievements: AchievementTracker,
    stopwatch: Clock,
    rng: StdRng,
}

impl Session {
    /// Create a session with an empty word store
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        Self {
            store: WordStore::with_capacity(config.capacity),
            score: ScoreTracker::new(),
            achievements: AchievementTracker::new(),
            stopwatch: config.timing.stopwatch(),
            rng,
            config,
        }
    }

    /// Replace the stopwatch, e.g. with a fixed one in tests
    #[must_use]
    pub fn with_stopwatch(mut self, stopwatch: impl Into<Clock>) -> Self {
        self.stopwatch = stopwatch.into();
        self
    }

    #[must_use]
    pub const fn store(&self) -> &WordStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut WordStore {
        &mut self.store
    }

    #[must_use]
    pub const fn score(&self) -> &ScoreTracker {
        &self.score
    }

    #[must_use]
    pub const fn achievements(&self) -> &AchievementTracker {
        &self.achievements
    }

    /// Load the main dictionary into an empty store
    ///
    /// # Errors
    /// Returns `StoreError::NoSource` if the dictionary cannot be read.
    pub fn load_dictionary(&mut self) -> Result<LoadReport, StoreError> {
        let path = self.config.dictionary.clone();
        self.store.load(path, 0)
    }

    /// Shop purchase: append the shop dictionary to the store
    ///
    /// # Errors
    /// Returns `StoreError::NoSource` if the dictionary cannot be read.
    pub fn buy_words(&mut self) -> Result<LoadReport, StoreError> {
        let path = self.config.shop_dictionary.clone();
        self.store.append(path)
    }

    /// Pick and scramble a word of the given difficulty
    ///
    /// # Errors
    /// Returns `RoundError::NoWordsLoaded` if the store is empty and
    /// `RoundError::NoWordsForDifficulty` if no word fits the band.
    pub fn start_round(&mut self, difficulty: Difficulty) -> Result<Round, RoundError> {
        if self.store.is_empty() {
            return Err(RoundError::NoWordsLoaded);
        }

        let pool = filter(self.store.words(), difficulty);
        let target = (*pool
            .choose(&mut self.rng)
            .ok_or(RoundError::NoWordsForDifficulty(difficulty))?)
        .clone();

        let scrambled = self.config.scramble.apply(&target, &mut self.rng);
        debug!(
            "Round started: {difficulty} pool={} scrambled={scrambled}",
            pool.len()
        );

        self.stopwatch.start();
        Ok(Round::new(target, scrambled, difficulty))
    }

    /// Submit a guess for `round`
    ///
    /// When the guess ends the round, achievements are checked against the
    /// settled score.
    ///
    /// # Errors
    /// Returns `RoundError::Finished` if the round already ended.
    pub fn guess(&mut self, round: &mut Round, guess: &str) -> Result<GuessReport, RoundError> {
        let outcome = round.guess(guess, &mut self.score)?;

        let unlocked = if round.is_finished() {
            let event = RoundEvent {
                won: matches!(outcome, GuessOutcome::Correct(_)),
                score: self.score.score(),
                hints_used: round.hints_used(),
                time_taken: self.stopwatch.elapsed(),
            };
            info!(
                "Round over: won={} score={} hints={} time={:?}",
                event.won, event.score, event.hints_used, event.time_taken
            );
            self.achievements.evaluate(&event)
        } else {
            Vec::new()
        };

        Ok(GuessReport { outcome, unlocked })
    }

    /// Take a hint for `round`
    ///
    /// # Errors
    /// See [`Round::hint`].
    pub fn hint(&mut self, round: &mut Round, kind: HintKind) -> Result<HintOutcome, HintError> {
        round.hint(kind, &mut self.score, &mut self.rng)
    }
}
