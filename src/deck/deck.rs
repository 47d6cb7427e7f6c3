//! The `Deck` value: cards, symbol metadata, and the order they came from.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, SymbolId, SymbolMeta};
use crate::core::DeckRng;

/// A generated deck.
///
/// Immutable once built. Cards and symbols are `im` vectors, so cloning a
/// deck is O(1) and a shuffle produces a new card sequence rather than
/// reordering one in place.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
    symbols: Vector<SymbolMeta>,
    order: u32,
    symbols_per_card: u32,
}

impl Deck {
    pub(crate) fn from_parts(order: u32, cards: Vec<Card>, symbols: Vec<SymbolMeta>) -> Self {
        Self {
            cards: Vector::from(cards),
            symbols: Vector::from(symbols),
            order,
            symbols_per_card: order + 1,
        }
    }

    /// Cards in their current order.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// Symbol metadata, indexed by symbol id.
    #[must_use]
    pub fn symbols(&self) -> &Vector<SymbolMeta> {
        &self.symbols
    }

    /// Card at a position in the current order.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Card with a given id, wherever a shuffle put it.
    #[must_use]
    pub fn card_by_id(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Metadata for a symbol.
    #[must_use]
    pub fn symbol(&self, id: SymbolId) -> Option<&SymbolMeta> {
        self.symbols.get(id.index())
    }

    /// Plane order `q`.
    #[must_use]
    pub fn order(&self) -> u32 {
        self.order
    }

    /// Symbols on every card, `q + 1`.
    #[must_use]
    pub fn symbols_per_card(&self) -> u32 {
        self.symbols_per_card
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check whether the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// A copy of this deck with its cards in a random order.
    ///
    /// Ids, symbols, and incidence are untouched.
    #[must_use]
    pub fn shuffled(&self, rng: &mut DeckRng) -> Deck {
        let mut cards: Vec<Card> = self.cards.iter().cloned().collect();
        rng.shuffle(&mut cards);
        Deck {
            cards: Vector::from(cards),
            ..self.clone()
        }
    }

    /// Encode for an external cache.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decode a deck produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}
