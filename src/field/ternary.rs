//! The degree-2 characteristic-3 extension `GF(9)`.
//!
//! An element `a + b·α` is encoded as `a + 3b` with `a, b` in `0..3`, where
//! `α² = 2` (that is, `-1 mod 3`).
//!
//! ```text
//! 0 = 0     3 = α      6 = 2α
//! 1 = 1     4 = 1 + α  7 = 1 + 2α
//! 2 = 2     5 = 2 + α  8 = 2 + 2α
//! ```
//!
//! `α` itself has order 4, so the tables are built from the first element
//! in `2..9` that generates all 8 units.

use super::tables::LogTable;
use super::{Element, FieldArithmetic};

/// `GF(9) = GF(3)[α] / (α² + 1)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gf9 {
    tables: LogTable,
}

impl Gf9 {
    pub(crate) fn new() -> Option<Self> {
        let tables = LogTable::search(9, expand_product)?;
        Some(Self { tables })
    }

    /// Generator of the multiplicative group used for the tables.
    #[must_use]
    pub fn generator(&self) -> Element {
        self.tables.generator()
    }
}

impl FieldArithmetic for Gf9 {
    fn order(&self) -> u32 {
        9
    }

    fn add(&self, x: Element, y: Element) -> Element {
        let (a1, b1) = split(x);
        let (a2, b2) = split(y);
        join((a1 + a2) % 3, (b1 + b2) % 3)
    }

    fn multiply(&self, x: Element, y: Element) -> Element {
        self.tables.multiply(x, y)
    }
}

fn split(x: Element) -> (Element, Element) {
    (x % 3, x / 3)
}

fn join(a: Element, b: Element) -> Element {
    a + 3 * b
}

/// `(a1 + b1·α)(a2 + b2·α) = (a1·a2 + 2·b1·b2) + (a1·b2 + a2·b1)·α`.
fn expand_product(x: Element, y: Element) -> Element {
    let (a1, b1) = split(x);
    let (a2, b2) = split(y);
    join((a1 * a2 + 2 * b1 * b2) % 3, (a1 * b2 + a2 * b1) % 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_squared_is_minus_one() {
        assert_eq!(expand_product(3, 3), 2);
    }

    #[test]
    fn test_generator_is_one_plus_alpha() {
        let f = Gf9::new().unwrap();
        // 2 = -1 has order 2 and 3 = α has order 4.
        assert_eq!(f.generator(), 4);
    }

    #[test]
    fn test_tables_match_expansion() {
        let f = Gf9::new().unwrap();
        for x in 0..9 {
            for y in 0..9 {
                assert_eq!(f.multiply(x, y), expand_product(x, y));
            }
        }
    }

    #[test]
    fn test_add_componentwise() {
        let f = Gf9::new().unwrap();
        // (2 + α) + (1 + 2α) = 0
        assert_eq!(f.add(5, 7), 0);
        // (1 + α) + (1 + α) = 2 + 2α
        assert_eq!(f.add(4, 4), 8);
    }
}
