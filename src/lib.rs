//! # spot-plane
//!
//! Spot It! style decks built from finite projective planes.
//!
//! A deck of order `q` has `q² + q + 1` cards, each with `q + 1` symbols,
//! and any two cards share exactly one symbol. Cards are the lines of the
//! projective plane `PG(2, q)` and symbols are its points, so a deck exists
//! whenever a field `GF(q)` can be built.
//!
//! ## Design Principles
//!
//! 1. **Pure Construction**: Deck generation is a function of the order and
//!    labeling mode. Same inputs, same deck.
//!
//! 2. **Immutable Decks**: A `Deck` is never edited in place. Shuffling
//!    returns a new deck sharing structure via `im-rs`.
//!
//! 3. **Seeded Randomness**: Shuffles and card-pair selection draw from a
//!    seeded `DeckRng`, so a session replays exactly.
//!
//! ## Modules
//!
//! - `core`: Configuration, errors, RNG
//! - `field`: Finite-field arithmetic for prime, binary and `GF(9)` orders
//! - `cards`: Symbol and card ids, labels
//! - `deck`: Plane construction, queries, incidence checks
//! - `games`: Headless Spot It! sessions
//!
//! ## Example
//!
//! ```
//! use spot_plane::{find_shared_symbol, generate_deck, SymbolMode};
//!
//! let deck = generate_deck(7, SymbolMode::Emojis).unwrap();
//! assert_eq!(deck.len(), 57);
//!
//! let (a, b) = (deck.card(3).unwrap(), deck.card(40).unwrap());
//! assert!(find_shared_symbol(a, b).is_some());
//! ```

pub mod core;
pub mod field;
pub mod cards;
pub mod deck;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    is_valid_order, order_info, plane_size,
    OrderInfo, PlayMode, SessionConfig, SymbolMode, VALID_ORDERS,
    DeckError, DeckRng, MAX_ORDER,
};

pub use crate::field::{prime_power, FieldArithmetic, GaloisField, PrimePower};

pub use crate::cards::{Card, CardId, LabelTable, SymbolId, SymbolMeta};

pub use crate::deck::{
    deck_stats, find_cards_with_symbol, find_shared_symbol,
    generate_deck, generate_deck_with_labels, verify_plane,
    Deck, DeckBuilder, DeckStats, IncidenceIndex, PlaneViolation,
};

pub use crate::games::spot_it::{
    CountdownEvent, GameStats, GuessOutcome, SessionError, SpotItSession,
};
