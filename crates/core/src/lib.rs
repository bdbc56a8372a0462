//! Tarot shuffle engine. Keep this crate free of IO and platform concerns.

pub mod cards;
pub mod config;
pub mod deck;
pub mod rng;
pub mod shuffle;
pub mod spread;

pub use cards::*;
pub use config::*;
pub use deck::*;
pub use rng::*;
pub use shuffle::*;
pub use spread::*;
