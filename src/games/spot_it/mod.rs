//! Spot It! played against the deck.
//!
//! Two cards are turned face up; the player names the one symbol they share.
//!
//! - Practice: pick any two cards, guess at leisure
//! - Timed: random pairs, each correct round is timed
//! - Countdown: the match is revealed automatically after an interval,
//!   then a new pair is dealt
//!
//! The session is headless. Callers drive time by passing `now_ms` and
//! calling `tick` once per second in countdown mode.

mod session;
mod stats;

pub use session::{CountdownEvent, GuessOutcome, Round, SessionError, SpotItSession};
pub use stats::GameStats;
