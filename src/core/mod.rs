//! Core types shared by every layer: configuration, errors, RNG.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{
    is_valid_order, order_info, plane_size, OrderInfo, PlayMode, SessionConfig, SymbolMode,
    MAX_ORDER, VALID_ORDERS,
};
pub use error::{DeckError, Result};
pub use rng::DeckRng;
