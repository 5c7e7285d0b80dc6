//! Grid building: shuffled decks and card layout.
//!
//! Building is a pure function of grid size and RNG; nothing here keeps
//! state between games.

pub mod builder;
mod layout;

pub use builder::{build, build_sets, Deck};
pub use layout::GridLayout;
