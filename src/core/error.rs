//! Error types for field construction and deck generation.
//!
//! Both kinds are deterministic functions of the order alone. Nothing is
//! retried and no partial deck is ever produced.

use thiserror::Error;

/// Result alias for deck and field operations.
pub type Result<T> = std::result::Result<T, DeckError>;

/// Errors raised while building a field or a deck.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The order is below 2, not a prime power, or above `MAX_ORDER`.
    #[error("invalid order {order}: not a supported prime power")]
    InvalidOrder {
        /// Requested order.
        order: u32,
    },

    /// The order is a prime power, but its extension field is not
    /// implemented.
    #[error("unsupported field GF({order}) = GF({characteristic}^{degree})")]
    UnsupportedField {
        /// Requested order.
        order: u32,
        /// Prime characteristic `p`.
        characteristic: u32,
        /// Extension degree `k`.
        degree: u32,
    },
}

impl DeckError {
    /// The order that caused the error.
    #[must_use]
    pub fn order(&self) -> u32 {
        match self {
            DeckError::InvalidOrder { order } | DeckError::UnsupportedField { order, .. } => *order,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = DeckError::InvalidOrder { order: 6 };
        assert_eq!(err.to_string(), "invalid order 6: not a supported prime power");

        let err = DeckError::UnsupportedField {
            order: 25,
            characteristic: 5,
            degree: 2,
        };
        assert_eq!(err.to_string(), "unsupported field GF(25) = GF(5^2)");
    }

    #[test]
    fn test_order_accessor() {
        assert_eq!(DeckError::InvalidOrder { order: 10 }.order(), 10);
        let err = DeckError::UnsupportedField {
            order: 27,
            characteristic: 3,
            degree: 3,
        };
        assert_eq!(err.order(), 27);
    }
}
