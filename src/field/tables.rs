//! Discrete-log / exponent tables for extension-field multiplication.
//!
//! Built once per field from a raw polynomial multiply. After that every
//! product is two lookups and an addition mod `q - 1`.

use super::Element;

/// Exponent and logarithm tables over the multiplicative group of `GF(q)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogTable {
    generator: Element,
    /// `exp[i] = g^i` for `i` in `0..q-1`.
    exp: Vec<Element>,
    /// `log[x] = i` with `g^i = x`; `log[0]` is unused.
    log: Vec<u32>,
}

impl LogTable {
    /// Build tables from `generator`, or `None` if it does not generate the
    /// whole multiplicative group.
    pub fn with_generator<F>(order: u32, generator: Element, mul: F) -> Option<Self>
    where
        F: Fn(Element, Element) -> Element,
    {
        let group = order as usize - 1;
        let mut exp = Vec::with_capacity(group);
        let mut log = vec![u32::MAX; order as usize];

        let mut x: Element = 1;
        for i in 0..group {
            let slot = log.get_mut(x as usize)?;
            if x == 0 || *slot != u32::MAX {
                return None;
            }
            *slot = i as u32;
            exp.push(x);
            x = mul(x, generator);
        }

        Some(Self { generator, exp, log })
    }

    /// Search `2..order` for the first element that generates the group.
    pub fn search<F>(order: u32, mul: F) -> Option<Self>
    where
        F: Fn(Element, Element) -> Element,
    {
        (2..order).find_map(|g| Self::with_generator(order, g, &mul))
    }

    /// The generator the tables were built from.
    #[must_use]
    pub fn generator(&self) -> Element {
        self.generator
    }

    /// Multiply through the tables.
    #[must_use]
    pub fn multiply(&self, a: Element, b: Element) -> Element {
        if a == 0 || b == 0 {
            return 0;
        }
        let group = self.exp.len();
        let i = self.log[a as usize] as usize + self.log[b as usize] as usize;
        self.exp[i % group]
    }
}
