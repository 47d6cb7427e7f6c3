//! Finite-field arithmetic over `GF(q)`.
//!
//! ## Key Types
//!
//! - `PrimePower` / `prime_power`: decide whether `q = p^k`
//! - `FieldArithmetic`: the `add` / `multiply` contract the deck builder
//!   is written against
//! - `GaloisField`: the concrete field for `q`, one variant per strategy
//!
//! ## Variants
//!
//! | Case            | Variant   | add          | multiply        |
//! |-----------------|-----------|--------------|-----------------|
//! | `k = 1`         | `Prime`   | `(a+b) mod p`| `(a·b) mod p`   |
//! | `p = 2`, `k > 1`| `Binary`  | XOR          | log tables      |
//! | `q = 9`         | `Ternary` | digit-wise   | log tables      |
//!
//! Any other prime power is rejected with `DeckError::UnsupportedField`.
//!
//! ```
//! use spot_plane::field::{FieldArithmetic, GaloisField};
//!
//! let gf4 = GaloisField::new(4).unwrap();
//! assert_eq!(gf4.add(2, 3), 1);
//! assert_eq!(gf4.multiply(2, 2), 3);
//! ```

pub mod binary;
pub mod prime;
pub mod prime_power;
pub mod tables;
pub mod ternary;

use tracing::debug;

use crate::core::{DeckError, Result};

pub use binary::{BinaryField, MAX_BINARY_DEGREE};
pub use prime::PrimeField;
pub use prime_power::{is_prime, prime_power, PrimePower};
pub use ternary::Gf9;

/// A field element, encoded as an integer in `0..q`.
pub type Element = u32;

/// Arithmetic contract shared by every field variant.
///
/// Inputs must already be elements of the field (`< order()`).
pub trait FieldArithmetic {
    /// Number of elements `q`.
    fn order(&self) -> u32;

    /// Field addition.
    fn add(&self, a: Element, b: Element) -> Element;

    /// Field multiplication.
    fn multiply(&self, a: Element, b: Element) -> Element;

    /// Iterate over all elements `0..q`.
    fn elements(&self) -> std::ops::Range<Element> {
        0..self.order()
    }
}

/// The field of order `q`, with its arithmetic strategy chosen once at
/// construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GaloisField {
    Prime(PrimeField),
    Binary(BinaryField),
    Ternary(Gf9),
}

impl GaloisField {
    /// Build `GF(order)`.
    ///
    /// Fails with `InvalidOrder` if `order` is not a prime power and with
    /// `UnsupportedField` for prime powers without an implementation.
    pub fn new(order: u32) -> Result<Self> {
        let pp = prime_power(order).ok_or(DeckError::InvalidOrder { order })?;
        let unsupported = DeckError::UnsupportedField {
            order,
            characteristic: pp.prime,
            degree: pp.exponent,
        };

        let field = match (pp.prime, pp.exponent) {
            (p, 1) => GaloisField::Prime(PrimeField::new(p)),
            (2, k) => GaloisField::Binary(BinaryField::new(k).ok_or(unsupported)?),
            (3, 2) => GaloisField::Ternary(Gf9::new().ok_or(unsupported)?),
            _ => return Err(unsupported),
        };

        debug!(
            order,
            characteristic = pp.prime,
            degree = pp.exponent,
            variant = field.variant_name(),
            "field constructed"
        );
        Ok(field)
    }

    /// The prime characteristic `p`.
    #[must_use]
    pub fn characteristic(&self) -> u32 {
        match self {
            GaloisField::Prime(f) => f.order(),
            GaloisField::Binary(_) => 2,
            GaloisField::Ternary(_) => 3,
        }
    }

    /// The extension degree `k`.
    #[must_use]
    pub fn degree(&self) -> u32 {
        match self {
            GaloisField::Prime(_) => 1,
            GaloisField::Binary(f) => f.degree(),
            GaloisField::Ternary(_) => 2,
        }
    }

    /// Short name of the active strategy.
    #[must_use]
    pub fn variant_name(&self) -> &'static str {
        match self {
            GaloisField::Prime(_) => "prime",
            GaloisField::Binary(_) => "binary",
            GaloisField::Ternary(_) => "gf9",
        }
    }
}

impl FieldArithmetic for GaloisField {
    fn order(&self) -> u32 {
        match self {
            GaloisField::Prime(f) => f.order(),
            GaloisField::Binary(f) => f.order(),
            GaloisField::Ternary(f) => f.order(),
        }
    }

    fn add(&self, a: Element, b: Element) -> Element {
        match self {
            GaloisField::Prime(f) => f.add(a, b),
            GaloisField::Binary(f) => f.add(a, b),
            GaloisField::Ternary(f) => f.add(a, b),
        }
    }

    fn multiply(&self, a: Element, b: Element) -> Element {
        match self {
            GaloisField::Prime(f) => f.multiply(a, b),
            GaloisField::Binary(f) => f.multiply(a, b),
            GaloisField::Ternary(f) => f.multiply(a, b),
        }
    }
}
