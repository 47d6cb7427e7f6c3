//! Incidence structure: symbol-to-card index, the 0/1 matrix, and a full
//! check of the plane axioms.

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;
use thiserror::Error;

use crate::cards::{CardId, SymbolId, INLINE_SYMBOLS};
use crate::core::plane_size;

use super::Deck;

/// Maps each symbol to the cards that carry it.
#[derive(Clone, Debug, Default)]
pub struct IncidenceIndex {
    by_symbol: FxHashMap<SymbolId, SmallVec<[CardId; INLINE_SYMBOLS]>>,
}

impl IncidenceIndex {
    /// Index every card of `deck`.
    #[must_use]
    pub fn from_deck(deck: &Deck) -> Self {
        let mut by_symbol: FxHashMap<SymbolId, SmallVec<[CardId; INLINE_SYMBOLS]>> =
            FxHashMap::default();
        for card in deck.cards() {
            for symbol in card.iter() {
                by_symbol.entry(symbol).or_default().push(card.id);
            }
        }
        Self { by_symbol }
    }

    /// Cards carrying `symbol`; empty for unknown symbols.
    #[must_use]
    pub fn cards_with(&self, symbol: SymbolId) -> &[CardId] {
        self.by_symbol
            .get(&symbol)
            .map(|cards| cards.as_slice())
            .unwrap_or(&[])
    }

    /// The card carrying both symbols, if exactly one does.
    #[must_use]
    pub fn card_through(&self, first: SymbolId, second: SymbolId) -> Option<CardId> {
        if first == second {
            return None;
        }
        let other: FxHashSet<CardId> = self.cards_with(second).iter().copied().collect();
        let mut common = self.cards_with(first).iter().filter(|c| other.contains(*c));
        match (common.next(), common.next()) {
            (Some(&card), None) => Some(card),
            _ => None,
        }
    }

    /// Number of distinct symbols seen.
    #[must_use]
    pub fn symbol_count(&self) -> usize {
        self.by_symbol.len()
    }
}

/// Card-by-symbol table: `matrix[row][s]` is true when the card at `row`
/// (current deck order) carries symbol `s`.
#[must_use]
pub fn incidence_matrix(deck: &Deck) -> Vec<Vec<bool>> {
    let columns = deck.symbols().len();
    deck.cards()
        .iter()
        .map(|card| {
            let mut row = vec![false; columns];
            for symbol in card.iter() {
                if let Some(cell) = row.get_mut(symbol.index()) {
                    *cell = true;
                }
            }
            row
        })
        .collect()
}

/// First broken plane axiom found by `verify_plane`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlaneViolation {
    #[error("expected {expected} cards, found {actual}")]
    CardCount { expected: usize, actual: usize },

    #[error("expected {expected} symbols, found {actual}")]
    SymbolCount { expected: usize, actual: usize },

    #[error("{card} has {actual} symbols, expected {expected}")]
    CardSize { card: CardId, expected: usize, actual: usize },

    #[error("{card} carries {symbol} more than once")]
    RepeatedSymbol { card: CardId, symbol: SymbolId },

    #[error("{card} carries {symbol}, which is outside the deck")]
    SymbolOutOfRange { card: CardId, symbol: SymbolId },

    #[error("{card} is outside the deck or appears twice")]
    BadCardId { card: CardId },

    #[error("{symbol} is on {actual} cards, expected {expected}")]
    SymbolFrequency { symbol: SymbolId, expected: usize, actual: usize },

    #[error("{first} and {second} share {shared} symbols")]
    CardIntersection { first: CardId, second: CardId, shared: usize },

    #[error("{first} and {second} appear together on {cards} cards")]
    SymbolPair { first: SymbolId, second: SymbolId, cards: usize },
}

/// Check every projective-plane invariant of `deck`.
///
/// Card order is irrelevant, so shuffled decks pass too.
pub fn verify_plane(deck: &Deck) -> Result<(), PlaneViolation> {
    let n = plane_size(deck.order()) as usize;
    let per_card = deck.order() as usize + 1;

    if deck.len() != n {
        return Err(PlaneViolation::CardCount { expected: n, actual: deck.len() });
    }
    if deck.symbols().len() != n {
        return Err(PlaneViolation::SymbolCount { expected: n, actual: deck.symbols().len() });
    }

    let mut card_ids = FxHashSet::default();
    let mut card_sets: Vec<(CardId, FxHashSet<SymbolId>)> = Vec::with_capacity(n);
    for card in deck.cards() {
        if card.id.raw() as usize >= n || !card_ids.insert(card.id) {
            return Err(PlaneViolation::BadCardId { card: card.id });
        }
        if card.len() != per_card {
            return Err(PlaneViolation::CardSize { card: card.id, expected: per_card, actual: card.len() });
        }
        let mut set = FxHashSet::default();
        for symbol in card.iter() {
            if symbol.index() >= n {
                return Err(PlaneViolation::SymbolOutOfRange { card: card.id, symbol });
            }
            if !set.insert(symbol) {
                return Err(PlaneViolation::RepeatedSymbol { card: card.id, symbol });
            }
        }
        card_sets.push((card.id, set));
    }

    let index = IncidenceIndex::from_deck(deck);
    for symbol in (0..n as u32).map(SymbolId::new) {
        let actual = index.cards_with(symbol).len();
        if actual != per_card {
            return Err(PlaneViolation::SymbolFrequency { symbol, expected: per_card, actual });
        }
    }

    for (i, (first, a)) in card_sets.iter().enumerate() {
        for (second, b) in &card_sets[i + 1..] {
            let shared = a.intersection(b).count();
            if shared != 1 {
                return Err(PlaneViolation::CardIntersection { first: *first, second: *second, shared });
            }
        }
    }

    let mut pair_counts: FxHashMap<(SymbolId, SymbolId), usize> = FxHashMap::default();
    for card in deck.cards() {
        let mut symbols: SmallVec<[SymbolId; INLINE_SYMBOLS]> = card.symbols.clone();
        symbols.sort_unstable();
        for (i, &s) in symbols.iter().enumerate() {
            for &t in &symbols[i + 1..] {
                *pair_counts.entry((s, t)).or_default() += 1;
            }
        }
    }
    for s in 0..n as u32 {
        for t in s + 1..n as u32 {
            let (first, second) = (SymbolId(s), SymbolId(t));
            let cards = pair_counts.get(&(first, second)).copied().unwrap_or(0);
            if cards != 1 {
                return Err(PlaneViolation::SymbolPair { first, second, cards });
            }
        }
    }

    Ok(())
}
