//! Projective-plane construction.
//!
//! Points of `PG(2, q)` are the affine points `(x, y)` of `GF(q)²`, encoded
//! as `S + x·q + y` with `S = q + 1`, plus `q + 1` points at infinity encoded
//! `0..=q`. Infinity point `0` is the vertical direction and point `a + 1`
//! is the direction of slope `a`.
//!
//! Lines, in card order:
//!
//! 1. the line at infinity: `0..=q`
//! 2. `q` vertical lines `x = i`: point `0` plus `{S + i·q + j}`
//! 3. `q²` lines `y = a·x + b`, row-major in `(a, b)`: point `a + 1` plus
//!    `{S + x·q + (a·x + b)}`
//!
//! Only `FieldArithmetic::add` and `multiply` are used, so the same code
//! serves prime and extension fields.

use tracing::debug;

use crate::cards::{assign_labels, Card, CardId, LabelTable, SymbolId};
use crate::core::{plane_size, DeckError, Result, SymbolMode, MAX_ORDER};
use crate::field::{FieldArithmetic, GaloisField};

use super::Deck;

/// Builds decks for one order. Holds the field so repeated builds skip
/// table construction.
#[derive(Clone, Debug)]
pub struct DeckBuilder {
    field: GaloisField,
}

impl DeckBuilder {
    /// Prepare a builder for order `q`.
    ///
    /// Fails with `InvalidOrder` above `MAX_ORDER`, otherwise with whatever
    /// the field rejects.
    pub fn new(order: u32) -> Result<Self> {
        if order > MAX_ORDER {
            return Err(DeckError::InvalidOrder { order });
        }
        Ok(Self {
            field: GaloisField::new(order)?,
        })
    }

    /// Plane order `q`.
    #[must_use]
    pub fn order(&self) -> u32 {
        self.field.order()
    }

    /// The field the plane is built over.
    #[must_use]
    pub fn field(&self) -> &GaloisField {
        &self.field
    }

    /// All `q² + q + 1` lines as cards with dense ids.
    #[must_use]
    pub fn lines(&self) -> Vec<Card> {
        let q = self.order();
        let s = q + 1;
        let mut cards = Vec::with_capacity(plane_size(q) as usize);

        let mut push = |symbols: Vec<u32>| {
            let id = CardId::new(cards.len() as u32);
            cards.push(Card::new(id, symbols.into_iter().map(SymbolId::new)));
        };

        push((0..s).collect());

        for i in 0..q {
            push(std::iter::once(0).chain((0..q).map(|j| s + i * q + j)).collect());
        }

        let f = &self.field;
        for a in f.elements() {
            for b in f.elements() {
                let affine = f.elements().map(|x| s + x * q + f.add(f.multiply(a, x), b));
                push(std::iter::once(a + 1).chain(affine).collect());
            }
        }

        cards
    }

    /// Build a labeled deck.
    #[must_use]
    pub fn build(&self, mode: SymbolMode, table: &LabelTable) -> Deck {
        let q = self.order();
        let cards = self.lines();
        let symbols = assign_labels(plane_size(q) as usize, mode, table);

        debug!(
            order = q,
            field = self.field.variant_name(),
            cards = cards.len(),
            symbols = symbols.len(),
            "deck generated"
        );
        Deck::from_parts(q, cards, symbols)
    }
}

/// Generate the deck of order `q` with the built-in label table.
///
/// ```
/// use spot_plane::core::SymbolMode;
/// use spot_plane::deck::generate_deck;
///
/// let deck = generate_deck(2, SymbolMode::Numbers).unwrap();
/// assert_eq!(deck.len(), 7);
/// assert_eq!(deck.symbols_per_card(), 3);
/// ```
pub fn generate_deck(order: u32, mode: SymbolMode) -> Result<Deck> {
    generate_deck_with_labels(order, mode, &LabelTable::default())
}

/// Generate the deck of order `q` with a caller-supplied label table.
pub fn generate_deck_with_labels(order: u32, mode: SymbolMode, table: &LabelTable) -> Result<Deck> {
    Ok(DeckBuilder::new(order)?.build(mode, table))
}
