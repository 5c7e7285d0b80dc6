//! Core types: card ids, RNG, configuration, errors.
//!
//! Everything here is independent of the match rules; the card, grid and
//! engine modules build on it.

pub mod entity;
pub mod rng;
pub mod config;
pub mod error;

pub use entity::CardId;
pub use rng::{GameRng, GameRngState};
pub use config::{GridSize, MatchConfig};
pub use error::{MatchError, Result};
