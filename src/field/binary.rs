//! Characteristic-2 extension fields `GF(2^k)`.
//!
//! Elements are integers in `0..2^k` whose bits are polynomial coefficients
//! over `GF(2)` (bit `i` is the coefficient of `x^i`). Addition is XOR.
//! Multiplication goes through log tables built from a carry-less multiply
//! reduced by an irreducible polynomial of degree `k`.

use tracing::trace;

use super::tables::LogTable;
use super::{Element, FieldArithmetic};

/// Largest extension degree with tables.
pub const MAX_BINARY_DEGREE: u32 = 16;

/// `GF(2^k)` for `2 <= k <= MAX_BINARY_DEGREE`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BinaryField {
    degree: u32,
    modulus: u32,
    tables: LogTable,
}

impl BinaryField {
    /// Build `GF(2^degree)`, or `None` if the degree is out of range.
    pub(crate) fn new(degree: u32) -> Option<Self> {
        if !(2..=MAX_BINARY_DEGREE).contains(&degree) {
            return None;
        }
        let modulus = find_irreducible(degree)?;
        trace!(degree, modulus, "irreducible polynomial");

        let order = 1u32 << degree;
        let tables = LogTable::search(order, |a, b| poly_mod(clmul(a, b), modulus))?;
        Some(Self {
            degree,
            modulus,
            tables,
        })
    }

    /// Extension degree `k`.
    #[must_use]
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// The reducing polynomial, bit-encoded with its `x^k` term.
    #[must_use]
    pub fn modulus(&self) -> u32 {
        self.modulus
    }

    /// Generator of the multiplicative group used for the tables.
    #[must_use]
    pub fn generator(&self) -> Element {
        self.tables.generator()
    }
}

impl FieldArithmetic for BinaryField {
    fn order(&self) -> u32 {
        1 << self.degree
    }

    fn add(&self, a: Element, b: Element) -> Element {
        a ^ b
    }

    fn multiply(&self, a: Element, b: Element) -> Element {
        self.tables.multiply(a, b)
    }
}

/// Degree of a bit-encoded polynomial; `None` for the zero polynomial.
fn poly_degree(p: u64) -> Option<u32> {
    (p != 0).then(|| 63 - p.leading_zeros())
}

/// Carry-less product of two polynomials over `GF(2)`.
fn clmul(a: Element, b: Element) -> u64 {
    let mut product = 0u64;
    let mut a = u64::from(a);
    let mut b = b;
    while b != 0 {
        if b & 1 == 1 {
            product ^= a;
        }
        a <<= 1;
        b >>= 1;
    }
    product
}

/// Remainder of polynomial long division (subtraction is XOR).
fn poly_mod(mut value: u64, modulus: u32) -> Element {
    let modulus = u64::from(modulus);
    let Some(m_deg) = poly_degree(modulus) else {
        return 0;
    };
    while let Some(v_deg) = poly_degree(value) {
        if v_deg < m_deg {
            break;
        }
        value ^= modulus << (v_deg - m_deg);
    }
    value as Element
}

/// First odd polynomial above `x^k` with no factor of degree `1..=k/2`.
fn find_irreducible(degree: u32) -> Option<u32> {
    let low = 1u32 << degree;
    let high = low << 1;
    (low + 1..high).step_by(2).find(|&candidate| {
        let max_divisor = 1u32 << (degree / 2 + 1);
        (2..max_divisor).all(|divisor| poly_mod(u64::from(candidate), divisor) != 0)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_irreducible_search() {
        // x^2 + x + 1
        assert_eq!(find_irreducible(2), Some(0b111));
        // x^3 + x + 1
        assert_eq!(find_irreducible(3), Some(0b1011));
        // x^4 + x + 1
        assert_eq!(find_irreducible(4), Some(0b10011));
    }

    #[test]
    fn test_poly_mod() {
        // x^2 = x + 1 mod x^2 + x + 1
        assert_eq!(poly_mod(0b100, 0b111), 0b11);
        // x^2 + 1 = (x + 1)^2
        assert_eq!(poly_mod(0b101, 0b11), 0);
    }

    #[test]
    fn test_gf4_tables() {
        let f = BinaryField::new(2).unwrap();
        assert_eq!(f.order(), 4);
        assert_eq!(f.generator(), 2);
        // x * x = x + 1
        assert_eq!(f.multiply(2, 2), 3);
        // x * (x + 1) = 1
        assert_eq!(f.multiply(2, 3), 1);
        assert_eq!(f.add(2, 3), 1);
    }

    #[test]
    fn test_gf8_generator_is_x() {
        let f = BinaryField::new(3).unwrap();
        assert_eq!(f.modulus(), 0b1011);
        assert_eq!(f.generator(), 2);
    }

    #[test]
    fn test_gf256_falls_back_when_x_not_primitive() {
        // x^8 + x^4 + x^3 + x + 1 is irreducible but x has order 51.
        let f = BinaryField::new(8).unwrap();
        assert_eq!(f.modulus(), 0x11b);
        assert_ne!(f.generator(), 2);
        for a in 1..256 {
            assert!((1..256).any(|b| f.multiply(a, b) == 1));
        }
    }

    #[test]
    fn test_tables_match_raw_multiply() {
        let f = BinaryField::new(4).unwrap();
        for a in 0..16 {
            for b in 0..16 {
                assert_eq!(f.multiply(a, b), poly_mod(clmul(a, b), f.modulus()));
            }
        }
    }

    #[test]
    fn test_degree_bounds() {
        assert!(BinaryField::new(1).is_none());
        assert!(BinaryField::new(MAX_BINARY_DEGREE + 1).is_none());
    }
}
