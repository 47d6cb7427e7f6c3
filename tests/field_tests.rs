//! Field axiom tests.
//!
//! Property-based checks that every implemented `GF(q)` really is a field,
//! plus exhaustive checks on the small ones.

use proptest::prelude::*;
use spot_plane::core::{DeckError, VALID_ORDERS};
use spot_plane::field::{prime_power, Element, FieldArithmetic, GaloisField};

const ORDERS: [u32; 11] = [2, 3, 4, 5, 7, 8, 9, 11, 13, 16, 256];

/// A field order together with three of its elements.
fn triple_strategy() -> impl Strategy<Value = (u32, Element, Element, Element)> {
    prop::sample::select(ORDERS.to_vec())
        .prop_flat_map(|q| (Just(q), 0..q, 0..q, 0..q))
}

fn field(q: u32) -> GaloisField {
    GaloisField::new(q).unwrap()
}

proptest! {
    #[test]
    fn test_closure((q, a, b, _c) in triple_strategy()) {
        let f = field(q);
        prop_assert!(f.add(a, b) < q);
        prop_assert!(f.multiply(a, b) < q);
    }

    #[test]
    fn test_commutativity((q, a, b, _c) in triple_strategy()) {
        let f = field(q);
        prop_assert_eq!(f.add(a, b), f.add(b, a));
        prop_assert_eq!(f.multiply(a, b), f.multiply(b, a));
    }

    #[test]
    fn test_associativity((q, a, b, c) in triple_strategy()) {
        let f = field(q);
        prop_assert_eq!(f.add(f.add(a, b), c), f.add(a, f.add(b, c)));
        prop_assert_eq!(f.multiply(f.multiply(a, b), c), f.multiply(a, f.multiply(b, c)));
    }

    #[test]
    fn test_distributivity((q, a, b, c) in triple_strategy()) {
        let f = field(q);
        // a·(b + c) = a·b + a·c
        let lhs = f.multiply(a, f.add(b, c));
        let rhs = f.add(f.multiply(a, b), f.multiply(a, c));
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn test_identities((q, a, _b, _c) in triple_strategy()) {
        let f = field(q);
        prop_assert_eq!(f.add(a, 0), a);
        prop_assert_eq!(f.multiply(a, 1), a);
        prop_assert_eq!(f.multiply(a, 0), 0);
    }

    #[test]
    fn test_no_zero_divisors((q, a, b, _c) in triple_strategy()) {
        let f = field(q);
        if a != 0 && b != 0 {
            prop_assert_ne!(f.multiply(a, b), 0);
        }
    }
}

/// Test every element has an additive inverse and every nonzero element a
/// multiplicative one, exhaustively for the offered orders.
#[test]
fn test_inverses_exist() {
    for &q in &VALID_ORDERS {
        let f = field(q);
        for a in f.elements() {
            assert!(f.elements().any(|b| f.add(a, b) == 0), "additive inverse of {a} in GF({q})");
            if a != 0 {
                let inverses = f.elements().filter(|&b| f.multiply(a, b) == 1).count();
                assert_eq!(inverses, 1, "multiplicative inverse of {a} in GF({q})");
            }
        }
    }
}

/// Test multiplication by a nonzero element permutes the field.
#[test]
fn test_multiplication_rows_are_permutations() {
    for &q in &VALID_ORDERS {
        let f = field(q);
        for a in 1..q {
            let mut row: Vec<_> = f.elements().map(|x| f.multiply(a, x)).collect();
            row.sort_unstable();
            assert_eq!(row, f.elements().collect::<Vec<_>>());
        }
    }
}

/// Test the strategy chosen for each order.
#[test]
fn test_variant_selection() {
    let cases = [
        (2, "prime", 2, 1),
        (7, "prime", 7, 1),
        (4, "binary", 2, 2),
        (8, "binary", 2, 3),
        (9, "gf9", 3, 2),
        (11, "prime", 11, 1),
    ];
    for (q, variant, p, k) in cases {
        let f = field(q);
        assert_eq!(f.variant_name(), variant);
        assert_eq!(f.characteristic(), p);
        assert_eq!(f.degree(), k);
        assert_eq!(f.order(), q);
    }
}

/// Test GF(4) against its known tables.
#[test]
fn test_gf4_tables() {
    let f = field(4);
    // x² = x + 1 with encoding 2 = x, 3 = x + 1.
    let mul = [[0, 0, 0, 0], [0, 1, 2, 3], [0, 2, 3, 1], [0, 3, 1, 2]];
    for a in 0..4 {
        for b in 0..4 {
            assert_eq!(f.add(a, b), a ^ b);
            assert_eq!(f.multiply(a, b), mul[a as usize][b as usize]);
        }
    }
}

/// Test GF(9) addition is digit-wise mod 3.
#[test]
fn test_gf9_addition() {
    let f = field(9);
    // (1 + 2α) + (2 + 2α) = 0 + α
    assert_eq!(f.add(1 + 3 * 2, 2 + 3 * 2), 3);
    // α · α = 2
    assert_eq!(f.multiply(3, 3), 2);
}

/// Test prime power decomposition.
#[test]
fn test_prime_power_decomposition() {
    let cases = [(2, 2, 1), (4, 2, 2), (8, 2, 3), (9, 3, 2), (11, 11, 1), (125, 5, 3)];
    for (n, p, k) in cases {
        let pp = prime_power(n).unwrap();
        assert_eq!((pp.prime, pp.exponent), (p, k));
        assert_eq!(pp.value(), n);
    }
    for n in [0, 1, 6, 10, 12, 15, 18, 100] {
        assert!(prime_power(n).is_none(), "{n} is not a prime power");
    }
}

/// Test construction errors.
#[test]
fn test_field_errors() {
    assert_eq!(GaloisField::new(6), Err(DeckError::InvalidOrder { order: 6 }));
    assert_eq!(
        GaloisField::new(49),
        Err(DeckError::UnsupportedField { order: 49, characteristic: 7, degree: 2 })
    );
    assert_eq!(
        GaloisField::new(1 << 17),
        Err(DeckError::UnsupportedField { order: 1 << 17, characteristic: 2, degree: 17 })
    );
}
