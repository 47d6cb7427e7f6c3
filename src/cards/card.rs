//! Cards and the identifiers they are built from.
//!
//! In plane terms a symbol is a point and a card is a line.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Symbol identifier in `0..N`, `N = q² + q + 1`.
///
/// Identity only; labels and glyphs live in `SymbolMeta`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SymbolId(pub u32);

impl SymbolId {
    /// Create a new symbol ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Get the ID as an index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for SymbolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

/// Card identifier, dense in `0..N` within a deck.
///
/// Stable across shuffles: shuffling moves cards, never renames them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Inline capacity for a card's symbols. Covers every order up to 11
/// without a heap allocation.
pub const INLINE_SYMBOLS: usize = 12;

/// Symbol list of one card.
pub type SymbolList = SmallVec<[SymbolId; INLINE_SYMBOLS]>;

/// A card: an id and its `q + 1` distinct symbols, in construction order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub symbols: SymbolList,
}

impl Card {
    /// Create a card.
    pub fn new(id: CardId, symbols: impl IntoIterator<Item = SymbolId>) -> Self {
        Self {
            id,
            symbols: symbols.into_iter().collect(),
        }
    }

    /// Check whether the card carries `symbol`.
    #[must_use]
    pub fn contains(&self, symbol: SymbolId) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Number of symbols on the card.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check whether the card has no symbols.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterate over the card's symbols.
    pub fn iter(&self) -> impl Iterator<Item = SymbolId> + '_ {
        self.symbols.iter().copied()
    }
}
