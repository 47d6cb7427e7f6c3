//! Read-only queries over a built deck.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, SymbolId};
use crate::core::plane_size;

use super::Deck;

/// The symbol two cards share.
///
/// Two distinct cards of one deck always share exactly one symbol. Returns
/// `None` for a card compared with itself (same id), or for cards that
/// share nothing, which only happens when they come from different decks.
///
/// ```
/// use spot_plane::core::SymbolMode;
/// use spot_plane::deck::{find_shared_symbol, generate_deck};
///
/// let deck = generate_deck(3, SymbolMode::Numbers).unwrap();
/// let (a, b) = (deck.card(0).unwrap(), deck.card(5).unwrap());
/// assert!(find_shared_symbol(a, b).is_some());
/// assert!(find_shared_symbol(a, a).is_none());
/// ```
#[must_use]
pub fn find_shared_symbol(first: &Card, second: &Card) -> Option<SymbolId> {
    if first.id == second.id {
        return None;
    }
    let seen: FxHashSet<SymbolId> = first.iter().collect();
    second.iter().find(|s| seen.contains(s))
}

/// All cards carrying `symbol`, in current deck order.
///
/// A well-formed deck always yields `q + 1` cards for a valid id.
#[must_use]
pub fn find_cards_with_symbol(deck: &Deck, symbol: SymbolId) -> Vec<&Card> {
    deck.cards().iter().filter(|c| c.contains(symbol)).collect()
}

/// Observed and expected deck sizes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckStats {
    pub order: u32,
    pub total_cards: usize,
    pub total_symbols: usize,
    pub symbols_per_card: u32,
    /// `q² + q + 1`, recomputed from the order.
    pub expected_cards: usize,
    /// `q² + q + 1`, recomputed from the order.
    pub expected_symbols: usize,
}

impl DeckStats {
    /// Check that observed counts match the formula.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.total_cards == self.expected_cards
            && self.total_symbols == self.expected_symbols
            && self.order.checked_add(1) == Some(self.symbols_per_card)
    }
}

/// Summary statistics for a deck.
#[must_use]
pub fn deck_stats(deck: &Deck) -> DeckStats {
    let expected = plane_size(deck.order()) as usize;
    DeckStats {
        order: deck.order(),
        total_cards: deck.len(),
        total_symbols: deck.symbols().len(),
        symbols_per_card: deck.symbols_per_card(),
        expected_cards: expected,
        expected_symbols: expected,
    }
}
