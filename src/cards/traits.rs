//! Interfaces the host loop uses to drive cards without knowing the engine.

use super::card::FlipTicket;
use crate::core::entity::CardId;

/// Something the player can pick.
pub trait Selectable {
    /// Identity carried by selection events.
    fn id(&self) -> CardId;

    /// Would a selection be accepted right now?
    fn is_interactive(&self) -> bool;
}

/// Something with a back and a face that animates between them.
pub trait Flippable {
    /// Begin a flip. Returns the completion ticket, or `None` if the flip
    /// was refused.
    fn start_flip(&mut self) -> Option<FlipTicket>;

    /// Complete a flip. Returns `false` if the ticket is stale.
    fn finish_flip(&mut self, ticket: FlipTicket) -> bool;

    fn is_face_up(&self) -> bool;

    fn is_flipping(&self) -> bool;
}
