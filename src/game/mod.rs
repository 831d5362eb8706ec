//! Game rules
//!
//! Scrambling, hints, scoring, achievements and the round state machine,
//! tied together by [`Session`].

pub mod achievements;
pub mod clock;
pub mod hint;
mod round;
pub mod scramble;
mod score;
mod session;

pub use achievements::{Achievement, AchievementKind, AchievementTracker, RoundEvent};
pub use clock::{Clock, FixedStopwatch, Stopwatch, TimingMode, WallStopwatch};
pub use hint::{HINT_COST, Hint, HintError, HintKind, HintOutcome, MAX_HINTS_PER_WORD};
pub use round::{GuessOutcome, MAX_ATTEMPTS, Round, RoundError, RoundState};
pub use scramble::ScrambleMode;
pub use score::{Award, ScoreTracker};
pub use session::{GuessReport, Session};
