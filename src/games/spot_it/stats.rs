//! Per-session score keeping.

use serde::{Deserialize, Serialize};

/// Statistics collected while playing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    /// Correct guesses.
    pub correct: u32,

    /// Wrong guesses.
    pub wrong: u32,

    /// Sum of correct round times (milliseconds).
    pub total_time_ms: u64,

    /// Time of each correctly finished round (milliseconds).
    pub round_times_ms: Vec<u64>,

    /// Current run of correct guesses.
    pub streak: u32,

    /// Longest run of correct guesses.
    pub best_streak: u32,
}

impl GameStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record a correct guess that took `round_time_ms`.
    pub fn record_correct(&mut self, round_time_ms: u64) {
        self.correct += 1;
        self.streak += 1;
        self.best_streak = self.best_streak.max(self.streak);
        self.total_time_ms += round_time_ms;
        self.round_times_ms.push(round_time_ms);
    }

    /// Record a wrong guess.
    pub fn record_wrong(&mut self) {
        self.wrong += 1;
        self.streak = 0;
    }

    /// Total guesses.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.correct + self.wrong
    }

    /// Fraction of guesses that were correct.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        if self.attempts() == 0 {
            0.0
        } else {
            f64::from(self.correct) / f64::from(self.attempts())
        }
    }

    /// Mean round time over correct rounds.
    #[must_use]
    pub fn average_round_ms(&self) -> f64 {
        if self.round_times_ms.is_empty() {
            0.0
        } else {
            self.total_time_ms as f64 / self.round_times_ms.len() as f64
        }
    }

    /// Fastest correct round.
    #[must_use]
    pub fn fastest_round_ms(&self) -> Option<u64> {
        self.round_times_ms.iter().copied().min()
    }
}
