//! Game modes built on the deck engine.

pub mod spot_it;
