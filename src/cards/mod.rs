//! Card system: face values, card entities and pooling.
//!
//! ## Architecture
//!
//! - `FaceValue`: The picture on a card, validated to `1..=10`
//! - `Card`: One card's flip/match state machine
//! - `CardPool`: Free list recycling cards between games
//!
//! `Selectable` and `Flippable` are the narrow interfaces a host loop needs
//! to route input and animation completions to cards.

mod face;
mod card;
mod pool;
mod traits;

pub use face::FaceValue;
pub use card::{Card, CardState, FlipTicket};
pub use pool::CardPool;
pub use traits::{Flippable, Selectable};
