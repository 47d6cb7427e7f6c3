//! Deck generation and queries.
//!
//! ## Key Types
//!
//! - `Deck`: immutable cards + symbol metadata for one order
//! - `DeckBuilder` / `generate_deck`: the projective-plane construction
//! - `find_shared_symbol`, `find_cards_with_symbol`, `deck_stats`: queries
//! - `IncidenceIndex`, `incidence_matrix`, `verify_plane`: incidence tools
//!
//! ## Invariants
//!
//! For every generated deck of order `q`, with `N = q² + q + 1`:
//!
//! - `N` cards and `N` symbols
//! - `q + 1` distinct symbols per card
//! - every symbol on exactly `q + 1` cards
//! - any two cards share exactly one symbol
//! - any two symbols appear together on exactly one card

#[allow(clippy::module_inception)]
mod deck;

pub mod builder;
pub mod incidence;
pub mod query;

pub use builder::{generate_deck, generate_deck_with_labels, DeckBuilder};
pub use deck::Deck;
pub use incidence::{incidence_matrix, verify_plane, IncidenceIndex, PlaneViolation};
pub use query::{deck_stats, find_cards_with_symbol, find_shared_symbol, DeckStats};
