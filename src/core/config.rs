//! Configuration types.
//!
//! - `VALID_ORDERS` / `OrderInfo`: the orders offered to players
//! - `SymbolMode`: numeric labels or glyphs
//! - `PlayMode`: practice, timed, or countdown play
//! - `SessionConfig`: everything a game session starts from
//!
//! The deck engine itself takes only an order and a `SymbolMode`; the rest
//! is consumed by `games::spot_it`.

use serde::{Deserialize, Serialize};

/// Orders offered to players.
///
/// All are prime powers with an implemented field. 6 and 10 are absent
/// because no projective plane of those orders exists.
pub const VALID_ORDERS: [u32; 8] = [2, 3, 4, 5, 7, 8, 9, 11];

/// Largest order a deck is generated for.
///
/// Fields exist for much larger prime powers, but a plane of order `q` holds
/// `q² + q + 1` cards, so decks are capped well below any size that could
/// exhaust memory.
pub const MAX_ORDER: u32 = 16;

/// Check whether `order` is one of `VALID_ORDERS`.
#[must_use]
pub fn is_valid_order(order: u32) -> bool {
    VALID_ORDERS.contains(&order)
}

/// Number of cards (and symbols) in a plane of order `q`: `q² + q + 1`.
///
/// Computed in `u64`, which holds the result for every `u32` order.
#[must_use]
pub const fn plane_size(order: u32) -> u64 {
    let q = order as u64;
    q * q + q + 1
}

/// How symbols are labeled for display.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymbolMode {
    /// Labels are `1..=N` as decimal text.
    Numbers,
    /// Labels are glyphs from a `LabelTable`.
    #[default]
    Emojis,
}

/// Game variants offered by a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayMode {
    /// Untimed; the player may pick cards by hand.
    #[default]
    Practice,
    /// Each correct guess records its round time.
    Timed,
    /// The match is revealed automatically after a countdown.
    Countdown,
}

/// Human-readable summary of an order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderInfo {
    pub order: u32,
    pub total_cards: u64,
    pub total_symbols: u64,
    pub symbols_per_card: u64,
    /// For example `"57 cards, 8 symbols each"`.
    pub description: String,
}

/// Describe the deck an order produces.
#[must_use]
pub fn order_info(order: u32) -> OrderInfo {
    let total = plane_size(order);
    let symbols_per_card = u64::from(order) + 1;
    OrderInfo {
        order,
        total_cards: total,
        total_symbols: total,
        symbols_per_card,
        description: format!("{} cards, {} symbols each", total, symbols_per_card),
    }
}

/// Session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Plane order `q`.
    pub order: u32,

    /// Symbol labeling.
    pub symbol_mode: SymbolMode,

    /// Initial play mode.
    pub play_mode: PlayMode,

    /// Seconds between reveals in countdown mode (at least 1).
    pub countdown_interval_secs: u32,

    /// Seed for shuffles and card-pair selection.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            order: 3,
            symbol_mode: SymbolMode::Emojis,
            play_mode: PlayMode::Practice,
            countdown_interval_secs: 3,
            seed: 42,
        }
    }
}

impl SessionConfig {
    /// Create a config with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the plane order.
    #[must_use]
    pub fn with_order(mut self, order: u32) -> Self {
        self.order = order;
        self
    }

    /// Set the symbol mode.
    #[must_use]
    pub fn with_symbol_mode(mut self, mode: SymbolMode) -> Self {
        self.symbol_mode = mode;
        self
    }

    /// Set the initial play mode.
    #[must_use]
    pub fn with_play_mode(mut self, mode: PlayMode) -> Self {
        self.play_mode = mode;
        self
    }

    /// Set the countdown interval.
    #[must_use]
    pub fn with_countdown_interval(mut self, seconds: u32) -> Self {
        self.countdown_interval_secs = seconds;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
