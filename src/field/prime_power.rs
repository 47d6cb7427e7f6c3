//! Primality and prime-power decomposition by trial division.
//!
//! Orders are tiny, so trial division up to `sqrt(n)` is all that is needed.

use serde::{Deserialize, Serialize};

/// A decomposition `n = prime^exponent`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PrimePower {
    /// The prime `p`.
    pub prime: u32,
    /// The exponent `k >= 1`.
    pub exponent: u32,
}

impl PrimePower {
    /// Recompute `p^k`.
    #[must_use]
    pub fn value(self) -> u32 {
        self.prime.pow(self.exponent)
    }
}

/// Check whether `n` is prime. Returns false for `n < 2`.
///
/// ```
/// use spot_plane::field::is_prime;
///
/// assert!(is_prime(7));
/// assert!(!is_prime(9));
/// assert!(!is_prime(1));
/// ```
#[must_use]
pub fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let n = u64::from(n);
    let mut d = 3u64;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

/// Decompose `n` as `p^k`, or `None` if `n` is not a prime power.
///
/// The smallest divisor found is prime; all of its factors are stripped and
/// the remainder must be exactly 1. If nothing up to `sqrt(n)` divides `n`,
/// `n` is itself prime.
///
/// ```
/// use spot_plane::field::prime_power;
///
/// let pp = prime_power(8).unwrap();
/// assert_eq!((pp.prime, pp.exponent), (2, 3));
/// assert_eq!(prime_power(6), None);
/// ```
#[must_use]
pub fn prime_power(n: u32) -> Option<PrimePower> {
    if n < 2 {
        return None;
    }
    let mut p = 2u32;
    while u64::from(p) * u64::from(p) <= u64::from(n) {
        if n % p == 0 {
            let mut rest = n;
            let mut exponent = 0;
            while rest % p == 0 {
                rest /= p;
                exponent += 1;
            }
            return (rest == 1).then_some(PrimePower { prime: p, exponent });
        }
        p += 1;
    }
    Some(PrimePower {
        prime: n,
        exponent: 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime_small() {
        let primes: Vec<u32> = (0..40).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37]);
    }

    #[test]
    fn test_prime_power_of_primes() {
        for p in [2, 3, 5, 7, 11, 13, 101] {
            assert_eq!(prime_power(p), Some(PrimePower { prime: p, exponent: 1 }));
        }
    }

    #[test]
    fn test_prime_power_of_powers() {
        assert_eq!(prime_power(4), Some(PrimePower { prime: 2, exponent: 2 }));
        assert_eq!(prime_power(8), Some(PrimePower { prime: 2, exponent: 3 }));
        assert_eq!(prime_power(9), Some(PrimePower { prime: 3, exponent: 2 }));
        assert_eq!(prime_power(27), Some(PrimePower { prime: 3, exponent: 3 }));
        assert_eq!(prime_power(1024), Some(PrimePower { prime: 2, exponent: 10 }));
    }

    #[test]
    fn test_prime_power_rejects_composites() {
        for n in [0, 1, 6, 10, 12, 14, 15, 18, 36, 100] {
            assert_eq!(prime_power(n), None, "{} is not a prime power", n);
        }
    }

    #[test]
    fn test_value_roundtrip() {
        for n in 2..200 {
            if let Some(pp) = prime_power(n) {
                assert_eq!(pp.value(), n);
                assert!(is_prime(pp.prime));
            }
        }
    }
}
