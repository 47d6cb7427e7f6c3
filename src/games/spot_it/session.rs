//! Headless Spot It! session.
//!
//! Holds a deck and the state of one player's game: which two cards are
//! face up, what was guessed, the countdown, and the score. Time never comes
//! from a clock; every time-dependent call takes `now_ms`.

use thiserror::Error;
use tracing::debug;

use super::stats::GameStats;
use crate::cards::{Card, CardId, LabelTable, SymbolId};
use crate::core::{DeckError, DeckRng, PlayMode, SessionConfig, SymbolMode};
use crate::deck::{find_shared_symbol, generate_deck_with_labels, Deck};

/// Errors from session operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Deck generation failed for the requested order.
    #[error(transparent)]
    Deck(#[from] DeckError),

    /// No pair of cards is face up.
    #[error("no active round")]
    NoActiveRound,

    /// A card index is past the end of the deck.
    #[error("card index {index} out of range for a deck of {len}")]
    CardOutOfRange { index: usize, len: usize },

    /// Both picks point at the same card.
    #[error("card index {index} picked twice")]
    SameCard { index: usize },

    /// The two face-up cards share no symbol.
    #[error("{first} and {second} share no symbol")]
    NoSharedSymbol { first: CardId, second: CardId },

    /// Countdown intervals must be at least one second.
    #[error("invalid countdown interval: {seconds}s")]
    InvalidCountdownInterval { seconds: u32 },
}

/// The two face-up cards of a round, by position in the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Round {
    pub first: usize,
    pub second: usize,
    /// When the round began; `None` for hand-picked practice pairs.
    pub started_at_ms: Option<u64>,
}

/// Result of a guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct { symbol: SymbolId, round_time_ms: u64 },
    Wrong,
}

impl GuessOutcome {
    #[must_use]
    pub fn is_correct(&self) -> bool {
        matches!(self, GuessOutcome::Correct { .. })
    }
}

/// What a countdown tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownEvent {
    /// Not in countdown mode, or not playing.
    Idle,
    /// Still counting; seconds left.
    Counting { remaining: u32 },
    /// The shared symbol was revealed.
    Revealed(SymbolId),
    /// A new pair was dealt.
    NextRound,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Countdown {
    remaining: u32,
    revealed: bool,
}

impl Countdown {
    fn new(interval: u32) -> Self {
        Self {
            remaining: interval,
            revealed: false,
        }
    }
}

/// One player's game over one deck.
///
/// ## Example
///
/// ```
/// use spot_plane::core::SessionConfig;
/// use spot_plane::games::spot_it::SpotItSession;
///
/// let mut session = SpotItSession::new(SessionConfig::new().with_order(3)).unwrap();
/// session.start(0).unwrap();
///
/// let answer = session.reveal().unwrap();
/// let outcome = session.guess(answer, 1_500).unwrap();
/// assert!(outcome.is_correct());
/// assert_eq!(session.stats().correct, 1);
/// ```
#[derive(Clone, Debug)]
pub struct SpotItSession {
    config: SessionConfig,
    labels: LabelTable,
    deck: Deck,
    round_rng: DeckRng,
    shuffle_rng: DeckRng,
    playing: bool,
    round: Option<Round>,
    selected_symbol: Option<SymbolId>,
    revealed_symbol: Option<SymbolId>,
    countdown: Countdown,
    stats: GameStats,
}

impl SpotItSession {
    /// Start a session with the built-in label table.
    pub fn new(config: SessionConfig) -> Result<Self, SessionError> {
        Self::with_labels(config, LabelTable::default())
    }

    /// Start a session with a caller-supplied label table.
    pub fn with_labels(config: SessionConfig, labels: LabelTable) -> Result<Self, SessionError> {
        if config.countdown_interval_secs == 0 {
            return Err(SessionError::InvalidCountdownInterval { seconds: 0 });
        }
        let deck = generate_deck_with_labels(config.order, config.symbol_mode, &labels)?;
        let rng = DeckRng::new(config.seed);

        Ok(Self {
            round_rng: rng.for_context("rounds"),
            shuffle_rng: rng.for_context("shuffle"),
            countdown: Countdown::new(config.countdown_interval_secs),
            config,
            labels,
            deck,
            playing: false,
            round: None,
            selected_symbol: None,
            revealed_symbol: None,
            stats: GameStats::new(),
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn play_mode(&self) -> PlayMode {
        self.config.play_mode
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    #[must_use]
    pub fn round(&self) -> Option<Round> {
        self.round
    }

    /// The two face-up cards.
    #[must_use]
    pub fn current_cards(&self) -> Option<(&Card, &Card)> {
        let round = self.round?;
        Some((self.deck.card(round.first)?, self.deck.card(round.second)?))
    }

    #[must_use]
    pub fn selected_symbol(&self) -> Option<SymbolId> {
        self.selected_symbol
    }

    #[must_use]
    pub fn revealed_symbol(&self) -> Option<SymbolId> {
        self.revealed_symbol
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// Seconds left before the countdown reveal.
    #[must_use]
    pub fn countdown_remaining(&self) -> u32 {
        self.countdown.remaining
    }

    /// Time spent on the current round so far.
    #[must_use]
    pub fn elapsed_ms(&self, now_ms: u64) -> Option<u64> {
        let started = self.round?.started_at_ms?;
        Some(now_ms.saturating_sub(started))
    }

    // === Settings ===

    /// Switch to a new order. The deck is regenerated and the game stops.
    ///
    /// On error the session is left unchanged.
    pub fn set_order(&mut self, order: u32) -> Result<(), SessionError> {
        self.deck = generate_deck_with_labels(order, self.config.symbol_mode, &self.labels)?;
        self.config.order = order;
        self.reset_after_new_deck();
        debug!(order, cards = self.deck.len(), "order changed");
        Ok(())
    }

    /// Switch labeling. The deck is regenerated and the game stops.
    pub fn set_symbol_mode(&mut self, mode: SymbolMode) -> Result<(), SessionError> {
        self.deck = generate_deck_with_labels(self.config.order, mode, &self.labels)?;
        self.config.symbol_mode = mode;
        self.reset_after_new_deck();
        Ok(())
    }

    /// Switch play mode. The game stops; the score is kept.
    pub fn set_play_mode(&mut self, mode: PlayMode) {
        self.config.play_mode = mode;
        self.stop();
    }

    /// Change the countdown interval.
    pub fn set_countdown_interval(&mut self, seconds: u32) -> Result<(), SessionError> {
        if seconds == 0 {
            return Err(SessionError::InvalidCountdownInterval { seconds });
        }
        self.config.countdown_interval_secs = seconds;
        self.countdown = Countdown::new(seconds);
        Ok(())
    }

    // === Play ===

    /// Deal a random pair and start scoring from zero.
    pub fn start(&mut self, now_ms: u64) -> Result<(), SessionError> {
        self.deal(now_ms)?;
        self.playing = true;
        self.stats.reset();
        debug!(mode = ?self.config.play_mode, "game started");
        Ok(())
    }

    /// Stop playing and clear the table.
    pub fn stop(&mut self) {
        self.playing = false;
        self.clear_round();
        debug!("game stopped");
    }

    /// Deal a new random pair.
    pub fn next_round(&mut self, now_ms: u64) -> Result<(), SessionError> {
        self.deal(now_ms)
    }

    /// Put two chosen cards face up (practice).
    pub fn select_cards(&mut self, first: usize, second: usize) -> Result<(), SessionError> {
        let len = self.deck.len();
        for index in [first, second] {
            if index >= len {
                return Err(SessionError::CardOutOfRange { index, len });
            }
        }
        if first == second {
            return Err(SessionError::SameCard { index: first });
        }
        self.round = Some(Round {
            first,
            second,
            started_at_ms: None,
        });
        self.selected_symbol = None;
        self.revealed_symbol = None;
        Ok(())
    }

    /// Guess the shared symbol of the face-up pair.
    ///
    /// The answer is revealed only when the guess is right.
    pub fn guess(&mut self, symbol: SymbolId, now_ms: u64) -> Result<GuessOutcome, SessionError> {
        let answer = self.shared_symbol()?;
        self.selected_symbol = Some(symbol);

        if symbol == answer {
            let round_time_ms = self.elapsed_ms(now_ms).unwrap_or(0);
            self.stats.record_correct(round_time_ms);
            self.revealed_symbol = Some(answer);
            Ok(GuessOutcome::Correct {
                symbol,
                round_time_ms,
            })
        } else {
            self.stats.record_wrong();
            self.revealed_symbol = None;
            Ok(GuessOutcome::Wrong)
        }
    }

    /// Reveal the shared symbol of the face-up pair.
    pub fn reveal(&mut self) -> Result<SymbolId, SessionError> {
        let answer = self.shared_symbol()?;
        self.revealed_symbol = Some(answer);
        Ok(answer)
    }

    /// Advance the countdown by one second.
    ///
    /// Counts down to 1, reveals the match on the next tick, then deals a
    /// new pair on the tick after that.
    pub fn tick(&mut self, now_ms: u64) -> Result<CountdownEvent, SessionError> {
        if self.config.play_mode != PlayMode::Countdown || !self.playing {
            return Ok(CountdownEvent::Idle);
        }
        if self.countdown.revealed {
            self.deal(now_ms)?;
            return Ok(CountdownEvent::NextRound);
        }
        if self.countdown.remaining > 1 {
            self.countdown.remaining -= 1;
            return Ok(CountdownEvent::Counting {
                remaining: self.countdown.remaining,
            });
        }
        let answer = self.reveal()?;
        self.countdown.revealed = true;
        Ok(CountdownEvent::Revealed(answer))
    }

    /// Shuffle the deck. Face-up cards are cleared since positions change.
    pub fn shuffle(&mut self) {
        self.deck = self.deck.shuffled(&mut self.shuffle_rng);
        self.clear_round();
        debug!(cards = self.deck.len(), "deck shuffled");
    }

    /// Zero the score.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    // === Internals ===

    fn deal(&mut self, now_ms: u64) -> Result<(), SessionError> {
        let (first, second) = self
            .round_rng
            .distinct_pair(self.deck.len())
            .ok_or(SessionError::NoActiveRound)?;
        self.round = Some(Round {
            first,
            second,
            started_at_ms: Some(now_ms),
        });
        self.selected_symbol = None;
        self.revealed_symbol = None;
        self.countdown = Countdown::new(self.config.countdown_interval_secs);
        Ok(())
    }

    fn shared_symbol(&self) -> Result<SymbolId, SessionError> {
        let (first, second) = self.current_cards().ok_or(SessionError::NoActiveRound)?;
        find_shared_symbol(first, second).ok_or(SessionError::NoSharedSymbol {
            first: first.id,
            second: second.id,
        })
    }

    fn clear_round(&mut self) {
        self.round = None;
        self.selected_symbol = None;
        self.revealed_symbol = None;
        self.countdown = Countdown::new(self.config.countdown_interval_secs);
    }

    fn reset_after_new_deck(&mut self) {
        self.playing = false;
        self.clear_round();
        self.stats.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(order: u32) -> SpotItSession {
        SpotItSession::new(SessionConfig::new().with_order(order).with_seed(11)).unwrap()
    }

    #[test]
    fn test_new_session_is_idle() {
        let s = session(3);
        assert!(!s.is_playing());
        assert_eq!(s.round(), None);
        assert_eq!(s.deck().len(), 13);
        assert_eq!(s.countdown_remaining(), 3);
    }

    #[test]
    fn test_rejects_zero_interval() {
        let err = SpotItSession::new(SessionConfig::new().with_countdown_interval(0)).unwrap_err();
        assert_eq!(err, SessionError::InvalidCountdownInterval { seconds: 0 });
    }

    #[test]
    fn test_rejects_invalid_order() {
        let err = SpotItSession::new(SessionConfig::new().with_order(10)).unwrap_err();
        assert_eq!(err, SessionError::Deck(DeckError::InvalidOrder { order: 10 }));
    }

    #[test]
    fn test_start_deals_distinct_pair() {
        let mut s = session(5);
        s.start(100).unwrap();
        let round = s.round().unwrap();
        assert_ne!(round.first, round.second);
        assert_eq!(round.started_at_ms, Some(100));
        assert!(s.is_playing());
    }

    #[test]
    fn test_wrong_guess_does_not_reveal() {
        let mut s = session(3);
        s.select_cards(0, 1).unwrap();
        // Cards 0 and 1 share symbol 0.
        let outcome = s.guess(SymbolId(1), 0).unwrap();
        assert_eq!(outcome, GuessOutcome::Wrong);
        assert_eq!(s.selected_symbol(), Some(SymbolId(1)));
        assert_eq!(s.revealed_symbol(), None);
        assert_eq!(s.stats().wrong, 1);
    }

    #[test]
    fn test_correct_guess_records_time() {
        let mut s = session(3);
        s.start(1_000).unwrap();
        let answer = {
            let (a, b) = s.current_cards().unwrap();
            find_shared_symbol(a, b).unwrap()
        };
        let outcome = s.guess(answer, 3_500).unwrap();
        assert_eq!(
            outcome,
            GuessOutcome::Correct {
                symbol: answer,
                round_time_ms: 2_500
            }
        );
        assert_eq!(s.revealed_symbol(), Some(answer));
        assert_eq!(s.stats().round_times_ms, vec![2_500]);
    }

    #[test]
    fn test_guess_without_round() {
        let mut s = session(2);
        assert_eq!(s.guess(SymbolId(0), 0), Err(SessionError::NoActiveRound));
    }

    #[test]
    fn test_select_cards_validation() {
        let mut s = session(2);
        assert_eq!(
            s.select_cards(0, 7),
            Err(SessionError::CardOutOfRange { index: 7, len: 7 })
        );
        assert_eq!(s.select_cards(3, 3), Err(SessionError::SameCard { index: 3 }));
        assert!(s.select_cards(2, 6).is_ok());
        assert_eq!(s.round().unwrap().started_at_ms, None);
    }

    #[test]
    fn test_set_order_resets() {
        let mut s = session(3);
        s.start(0).unwrap();
        s.guess(SymbolId(0), 10).unwrap();
        s.set_order(4).unwrap();

        assert!(!s.is_playing());
        assert_eq!(s.round(), None);
        assert_eq!(s.stats(), &GameStats::default());
        assert_eq!(s.deck().len(), 21);
        assert_eq!(s.config().order, 4);
    }

    #[test]
    fn test_set_order_failure_keeps_state() {
        let mut s = session(3);
        s.start(0).unwrap();
        assert!(s.set_order(6).is_err());
        assert!(s.is_playing());
        assert_eq!(s.config().order, 3);
        assert_eq!(s.deck().len(), 13);
    }

    #[test]
    fn test_set_symbol_mode() {
        let mut s = session(2);
        s.set_symbol_mode(SymbolMode::Numbers).unwrap();
        assert_eq!(s.deck().symbol(SymbolId(0)).unwrap().label, "1");
        assert_eq!(s.config().symbol_mode, SymbolMode::Numbers);
    }

    #[test]
    fn test_play_mode_change_keeps_score() {
        let mut s = session(3);
        s.start(0).unwrap();
        s.guess(SymbolId(0), 0).unwrap();
        s.set_play_mode(PlayMode::Timed);
        assert!(!s.is_playing());
        assert_eq!(s.stats().attempts(), 1);
        assert_eq!(s.play_mode(), PlayMode::Timed);
    }

    #[test]
    fn test_countdown_cycle() {
        let config = SessionConfig::new()
            .with_order(3)
            .with_play_mode(PlayMode::Countdown)
            .with_countdown_interval(3);
        let mut s = SpotItSession::new(config).unwrap();

        assert_eq!(s.tick(0).unwrap(), CountdownEvent::Idle);

        s.start(0).unwrap();
        assert_eq!(s.tick(1_000).unwrap(), CountdownEvent::Counting { remaining: 2 });
        assert_eq!(s.tick(2_000).unwrap(), CountdownEvent::Counting { remaining: 1 });

        let revealed = s.tick(3_000).unwrap();
        let answer = s.revealed_symbol().unwrap();
        assert_eq!(revealed, CountdownEvent::Revealed(answer));

        assert_eq!(s.tick(4_000).unwrap(), CountdownEvent::NextRound);
        assert_eq!(s.revealed_symbol(), None);
        assert_eq!(s.countdown_remaining(), 3);
        assert_eq!(s.round().unwrap().started_at_ms, Some(4_000));
    }

    #[test]
    fn test_countdown_interval_of_one_reveals_first() {
        let config = SessionConfig::new()
            .with_play_mode(PlayMode::Countdown)
            .with_countdown_interval(1);
        let mut s = SpotItSession::new(config).unwrap();
        s.start(0).unwrap();
        assert!(matches!(s.tick(1_000).unwrap(), CountdownEvent::Revealed(_)));
    }

    #[test]
    fn test_set_countdown_interval() {
        let mut s = session(3);
        assert!(s.set_countdown_interval(0).is_err());
        s.set_countdown_interval(5).unwrap();
        assert_eq!(s.countdown_remaining(), 5);
        assert_eq!(s.config().countdown_interval_secs, 5);
    }

    #[test]
    fn test_shuffle_clears_round() {
        let mut s = session(4);
        s.start(0).unwrap();
        let before: Vec<_> = s.deck().cards().iter().map(|c| c.id).collect();
        s.shuffle();
        let after: Vec<_> = s.deck().cards().iter().map(|c| c.id).collect();

        assert_ne!(before, after);
        assert_eq!(s.round(), None);
    }

    #[test]
    fn test_same_seed_same_rounds() {
        let mut a = session(7);
        let mut b = session(7);
        for t in 0..20 {
            a.next_round(t).unwrap();
            b.next_round(t).unwrap();
            assert_eq!(a.round(), b.round());
        }
    }

    #[test]
    fn test_elapsed() {
        let mut s = session(2);
        assert_eq!(s.elapsed_ms(10), None);
        s.start(100).unwrap();
        assert_eq!(s.elapsed_ms(350), Some(250));
        assert_eq!(s.elapsed_ms(50), Some(0));
    }
}
