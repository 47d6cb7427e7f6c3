//! Prime fields `GF(p)`: plain modular arithmetic.

use super::{Element, FieldArithmetic};

/// The field of integers mod a prime `p`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrimeField {
    modulus: u32,
}

impl PrimeField {
    /// Create `GF(p)`. The caller guarantees `p` is prime.
    #[must_use]
    pub(crate) fn new(modulus: u32) -> Self {
        Self { modulus }
    }
}

impl FieldArithmetic for PrimeField {
    fn order(&self) -> u32 {
        self.modulus
    }

    fn add(&self, a: Element, b: Element) -> Element {
        ((u64::from(a) + u64::from(b)) % u64::from(self.modulus)) as Element
    }

    fn multiply(&self, a: Element, b: Element) -> Element {
        ((u64::from(a) * u64::from(b)) % u64::from(self.modulus)) as Element
    }
}
