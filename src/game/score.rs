//! Score, high score and streak tracking

/// Extra points per streak level on a correct guess
pub const COMBO_BONUS_PER_STREAK: i64 = 2;

/// Points earned by one correct guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Award {
    /// Total points added to the score
    pub points: i64,
    /// The part of `points` that came from the streak
    pub combo_bonus: i64,
    /// Streak after this guess
    pub streak: u32,
}

/// Session-wide score state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreTracker {
    score: i64,
    high_score: i64,
    streak: u32,
    max_streak: u32,
}

impl ScoreTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current score; may be negative after hints
    #[must_use]
    pub const fn score(&self) -> i64 {
        self.score
    }

    #[must_use]
    pub const fn high_score(&self) -> i64 {
        self.high_score
    }

    #[must_use]
    pub const fn streak(&self) -> u32 {
        self.streak
    }

    #[must_use]
    pub const fn max_streak(&self) -> u32 {
        self.max_streak
    }

    /// Award a correct guess of a word with `word_len` letters
    ///
    /// Points are the word length plus twice the streak before this guess.
    ///
    /// # Examples
    /// ```
    /// use unscramble::game::ScoreTracker;
    ///
    /// let mut tracker = ScoreTracker::new();
    /// assert_eq!(tracker.apply_correct(5).points, 5);
    /// assert_eq!(tracker.apply_correct(5).points, 7);
    /// assert_eq!(tracker.streak(), 2);
    /// ```
    pub fn apply_correct(&mut self, word_len: usize) -> Award {
        let combo_bonus = i64::from(self.streak) * COMBO_BONUS_PER_STREAK;
        let points = word_len as i64 + combo_bonus;

        self.streak += 1;
        self.max_streak = self.max_streak.max(self.streak);

        self.score += points;
        self.high_score = self.high_score.max(self.score);

        Award {
            points,
            combo_bonus,
            streak: self.streak,
        }
    }

    /// Record a wrong guess; returns the attempts left afterwards
    ///
    /// Any wrong guess breaks the combo, even with attempts remaining.
    pub fn apply_incorrect_attempt(&mut self, attempts_left: u32) -> u32 {
        self.streak = 0;
        attempts_left.saturating_sub(1)
    }

    /// Deduct the cost of a hint
    pub fn deduct_hint(&mut self, cost: i64) {
        self.score -= cost;
    }

    /// Losing a round wipes the whole score, not just this round's points
    pub fn apply_game_over(&mut self) {
        self.score = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_streak(streak: u32) -> ScoreTracker {
        ScoreTracker {
            streak,
            max_streak: streak,
            ..ScoreTracker::default()
        }
    }

    #[test]
    fn first_correct_guess_scores_word_length() {
        let mut tracker = ScoreTracker::new();
        let award = tracker.apply_correct(3);
        assert_eq!(award.points, 3);
        assert_eq!(award.combo_bonus, 0);
        assert_eq!(tracker.score(), 3);
        assert_eq!(tracker.high_score(), 3);
        assert_eq!(tracker.streak(), 1);
        assert_eq!(tracker.max_streak(), 1);
    }

    #[test]
    fn combo_bonus_uses_streak_before_guess() {
        let mut tracker = with_streak(3);
        let award = tracker.apply_correct(5);
        assert_eq!(award.points, 11);
        assert_eq!(award.combo_bonus, 6);
        assert_eq!(award.streak, 4);
        assert_eq!(tracker.streak(), 4);
        assert_eq!(tracker.max_streak(), 4);
    }

    #[test]
    fn incorrect_attempt_resets_streak() {
        for streak in [0, 1, 7, 100] {
            let mut tracker = with_streak(streak);
            assert_eq!(tracker.apply_incorrect_attempt(3), 2);
            assert_eq!(tracker.streak(), 0);
            assert_eq!(tracker.max_streak(), streak);
        }
    }

    #[test]
    fn incorrect_attempt_never_underflows() {
        let mut tracker = ScoreTracker::new();
        assert_eq!(tracker.apply_incorrect_attempt(0), 0);
    }

    #[test]
    fn game_over_zeroes_score_but_keeps_high_score() {
        let mut tracker = ScoreTracker::new();
        tracker.apply_correct(9);
        tracker.apply_game_over();
        assert_eq!(tracker.score(), 0);
        assert_eq!(tracker.high_score(), 9);
        assert_eq!(tracker.max_streak(), 1);
    }

    #[test]
    fn game_over_from_negative_score() {
        let mut tracker = ScoreTracker::new();
        tracker.deduct_hint(1);
        tracker.deduct_hint(1);
        assert_eq!(tracker.score(), -2);
        tracker.apply_game_over();
        assert_eq!(tracker.score(), 0);
    }

    #[test]
    fn hints_can_drive_score_negative_without_touching_high_score() {
        let mut tracker = ScoreTracker::new();
        tracker.apply_correct(4);
        for _ in 0..6 {
            tracker.deduct_hint(1);
        }
        assert_eq!(tracker.score(), -2);
        assert_eq!(tracker.high_score(), 4);
    }

    #[test]
    fn high_score_only_moves_up() {
        let mut tracker = ScoreTracker::new();
        tracker.apply_correct(10);
        tracker.apply_incorrect_attempt(1);
        tracker.apply_game_over();
        tracker.apply_correct(3);
        assert_eq!(tracker.score(), 3);
        assert_eq!(tracker.high_score(), 10);
    }
}
