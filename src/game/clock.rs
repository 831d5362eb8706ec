//! Round timing
//!
//! The time a round took feeds the Quick Thinker achievement. By default a
//! round is reported as taking a fixed 25 seconds; a wall-clock stopwatch is
//! available for timed play.

use std::fmt;
use std::time::{Duration, Instant};

/// Time reported by [`FixedStopwatch::default`]
pub const DEFAULT_ROUND_TIME: Duration = Duration::from_secs(25);

/// Measures how long a round took
pub trait Stopwatch: fmt::Debug {
    /// Called when a round starts
    fn start(&mut self);

    /// Time since the last `start`
    fn elapsed(&self) -> Duration;
}

/// Always reports the same duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedStopwatch(pub Duration);

impl Default for FixedStopwatch {
    fn default() -> Self {
        Self(DEFAULT_ROUND_TIME)
    }
}

impl Stopwatch for FixedStopwatch {
    fn start(&mut self) {}

    fn elapsed(&self) -> Duration {
        self.0
    }
}

/// Real elapsed time
#[derive(Debug, Clone, Copy)]
pub struct WallStopwatch {
    started: Instant,
}

impl Default for WallStopwatch {
    fn default() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Stopwatch for WallStopwatch {
    fn start(&mut self) {
        self.started = Instant::now();
    }

    fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Stopwatch held by a session
#[derive(Debug, Clone, Copy)]
pub enum Clock {
    Fixed(FixedStopwatch),
    Wall(WallStopwatch),
}

impl Stopwatch for Clock {
    fn start(&mut self) {
        match self {
            Self::Fixed(s) => s.start(),
            Self::Wall(s) => s.start(),
        }
    }

    fn elapsed(&self) -> Duration {
        match self {
            Self::Fixed(s) => s.elapsed(),
            Self::Wall(s) => s.elapsed(),
        }
    }
}

impl From<FixedStopwatch> for Clock {
    fn from(stopwatch: FixedStopwatch) -> Self {
        Self::Fixed(stopwatch)
    }
}

impl From<WallStopwatch> for Clock {
    fn from(stopwatch: WallStopwatch) -> Self {
        Self::Wall(stopwatch)
    }
}

/// Which stopwatch a session uses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimingMode {
    #[default]
    Fixed,
    Wall,
}

impl TimingMode {
    #[must_use]
    pub fn stopwatch(self) -> Clock {
        match self {
            Self::Fixed => Clock::Fixed(FixedStopwatch::default()),
            Self::Wall => Clock::Wall(WallStopwatch::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_stopwatch_ignores_start() {
        let mut watch = FixedStopwatch::default();
        watch.start();
        assert_eq!(watch.elapsed(), Duration::from_secs(25));

        let watch = FixedStopwatch(Duration::from_secs(90));
        assert_eq!(watch.elapsed(), Duration::from_secs(90));
    }

    #[test]
    fn wall_stopwatch_starts_near_zero() {
        let mut watch = WallStopwatch::default();
        watch.start();
        assert!(watch.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn clock_dispatches_to_the_chosen_stopwatch() {
        let mut clock = TimingMode::Wall.stopwatch();
        assert!(matches!(clock, Clock::Wall(_)));
        clock.start();
        assert!(clock.elapsed() < Duration::from_secs(5));

        let clock = Clock::from(FixedStopwatch(Duration::from_secs(7)));
        assert_eq!(clock.elapsed(), Duration::from_secs(7));
    }

    #[test]
    fn timing_mode_default_is_fixed() {
        assert_eq!(TimingMode::default(), TimingMode::Fixed);
        assert_eq!(
            TimingMode::Fixed.stopwatch().elapsed(),
            DEFAULT_ROUND_TIME
        );
    }
}
