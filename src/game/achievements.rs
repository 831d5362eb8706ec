//! Achievements
//!
//! Four one-shot achievements, checked after every finished round. Once
//! unlocked they stay unlocked for the rest of the session.

use log::info;
use std::time::Duration;

/// Score needed for the High Scorer achievement
pub const HIGH_SCORE_THRESHOLD: i64 = 50;

/// Time limit for the Quick Thinker achievement
pub const QUICK_THINKER_LIMIT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementKind {
    FirstWin,
    HintMaster,
    HighScorer,
    QuickThinker,
}

impl AchievementKind {
    pub const ALL: [Self; 4] = [
        Self::FirstWin,
        Self::HintMaster,
        Self::HighScorer,
        Self::QuickThinker,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::FirstWin => "First Win",
            Self::HintMaster => "Hint Master",
            Self::HighScorer => "High Scorer",
            Self::QuickThinker => "Quick Thinker",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::FirstWin => "Win your first game",
            Self::HintMaster => "Win without using a hint",
            Self::HighScorer => "Reach a score of 50 or more",
            Self::QuickThinker => "Win within 30 seconds",
        }
    }

    /// Exclamation used when the achievement is announced
    #[must_use]
    pub const fn cheer(self) -> &'static str {
        match self {
            Self::FirstWin => "Congratulations!",
            Self::HintMaster => "Amazing!",
            Self::HighScorer => "Impressive!",
            Self::QuickThinker => "Fast thinking!",
        }
    }

    fn is_met(self, event: &RoundEvent) -> bool {
        match self {
            Self::FirstWin => event.won,
            Self::HintMaster => event.won && event.hints_used == 0,
            Self::HighScorer => event.score >= HIGH_SCORE_THRESHOLD,
            Self::QuickThinker => event.won && event.time_taken <= QUICK_THINKER_LIMIT,
        }
    }
}

/// What happened in a finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundEvent {
    pub won: bool,
    /// Score after the round was settled
    pub score: i64,
    pub hints_used: u32,
    pub time_taken: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub kind: AchievementKind,
    pub achieved: bool,
}

/// The session's achievement set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementTracker {
    achievements: [Achievement; 4],
}

impl Default for AchievementTracker {
    fn default() -> Self {
        Self {
            achievements: AchievementKind::ALL.map(|kind| Achievement {
                kind,
                achieved: false,
            }),
        }
    }
}

impl AchievementTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All achievements, in display order
    #[must_use]
    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    #[must_use]
    pub fn unlocked_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.achieved).count()
    }

    /// Check every locked achievement against `event`
    ///
    /// Returns the achievements unlocked by this event, each reported once
    /// over the lifetime of the tracker.
    pub fn evaluate(&mut self, event: &RoundEvent) -> Vec<AchievementKind> {
        let mut unlocked = Vec::new();

        for achievement in &mut self.achievements {
            if !achievement.achieved && achievement.kind.is_met(event) {
                achievement.achieved = true;
                info!("Achievement unlocked: {}", achievement.kind.name());
                unlocked.push(achievement.kind);
            }
        }

        unlocked
    }
}
