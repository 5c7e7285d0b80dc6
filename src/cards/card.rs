//! Card entity - one card on the table and its flip state machine.
//!
//! ## States
//!
//! ```text
//!            start_flip            finish_flip
//!   Hidden ─────────────▶ Flipping ─────────────▶ FaceUp
//!     ▲                                             │
//!     │ finish_flip          start_flip             │ mark_matched
//!     └──────────── Flipping ◀──────────────────────┤
//!                                                   ▼
//!   reset() from anywhere ──▶ Hidden             Matched
//! ```
//!
//! Interactivity is derived on every query: a card is interactive iff it is
//! active, input is enabled, it is not flipping and it is not matched. A card
//! that finishes turning face up keeps input disabled until the engine
//! re-enables it, so it cannot be picked twice while pending.
//!
//! ## Flip tickets
//!
//! Each `start_flip` bumps the card's epoch and hands out a [`FlipTicket`].
//! Only the ticket of the current flip completes it; tickets from before a
//! `reset` or an earlier flip are stale and ignored.

use serde::{Deserialize, Serialize};

use super::face::FaceValue;
use super::traits::{Flippable, Selectable};
use crate::core::entity::CardId;
use crate::core::error::Result;

/// Observable state of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardState {
    /// Face down, possibly selectable.
    Hidden,
    /// Flip animation in progress.
    Flipping,
    /// Face up, waiting for resolution.
    FaceUp,
    /// Part of a completed set. Terminal until `reset`.
    Matched,
}

/// One-shot completion token for a flip animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlipTicket {
    /// Card being flipped.
    pub card: CardId,
    /// Flip generation this ticket completes.
    pub epoch: u32,
}

/// A card entity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    id: CardId,
    face_value: FaceValue,
    grid_index: Option<usize>,
    active: bool,
    face_up: bool,
    matched: bool,
    flipping: bool,
    input_enabled: bool,
    epoch: u32,
}

impl Card {
    /// Create an inactive, hidden card. This is the pooled state.
    #[must_use]
    pub fn new(id: CardId) -> Self {
        Self {
            id,
            face_value: FaceValue::MIN,
            grid_index: None,
            active: false,
            face_up: false,
            matched: false,
            flipping: false,
            input_enabled: false,
            epoch: 0,
        }
    }

    /// Activate the card with a face value. Input stays disabled until the
    /// card is dealt.
    pub fn activate(&mut self, face: FaceValue) {
        self.face_value = face;
        self.active = true;
    }

    /// Place the card at a grid cell and enable input.
    pub fn deal(&mut self, grid_index: usize) {
        self.grid_index = Some(grid_index);
        self.input_enabled = true;
    }

    /// Pool slot identity.
    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    /// Current face value.
    #[must_use]
    pub fn face_value(&self) -> FaceValue {
        self.face_value
    }

    /// Assign a face value from a raw integer.
    ///
    /// Out-of-range values are logged and rejected; the previous face value
    /// is kept.
    pub fn set_face_value(&mut self, value: u8) -> Result<()> {
        match FaceValue::new(value) {
            Ok(face) => {
                self.face_value = face;
                Ok(())
            }
            Err(err) => {
                log::error!("{}: {}", self.id, err);
                Err(err)
            }
        }
    }

    /// Grid cell, `col + row * cols`, while dealt.
    #[must_use]
    pub fn grid_index(&self) -> Option<usize> {
        self.grid_index
    }

    /// Is the card handed out by the pool?
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    #[must_use]
    pub fn is_flipping(&self) -> bool {
        self.flipping
    }

    /// Can the player select this card right now?
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.active && self.input_enabled && !self.flipping && !self.matched
    }

    /// Current state of the flip state machine.
    #[must_use]
    pub fn state(&self) -> CardState {
        if self.matched {
            CardState::Matched
        } else if self.flipping {
            CardState::Flipping
        } else if self.face_up {
            CardState::FaceUp
        } else {
            CardState::Hidden
        }
    }

    /// Begin flipping the card over.
    ///
    /// No-op returning `None` while already flipping or once matched.
    pub fn start_flip(&mut self) -> Option<FlipTicket> {
        if self.flipping || self.matched {
            return None;
        }
        self.flipping = true;
        self.epoch = self.epoch.wrapping_add(1);
        Some(FlipTicket {
            card: self.id,
            epoch: self.epoch,
        })
    }

    /// Complete the flip started with `ticket`.
    ///
    /// Returns `false` for stale tickets. A card that lands face down becomes
    /// selectable again; one that lands face up stays locked.
    pub fn finish_flip(&mut self, ticket: FlipTicket) -> bool {
        if !self.flipping || ticket.card != self.id || ticket.epoch != self.epoch {
            return false;
        }
        self.flipping = false;
        self.face_up = !self.face_up;
        self.input_enabled = !self.matched && !self.face_up;
        true
    }

    /// Mark the card as part of a completed set.
    pub fn mark_matched(&mut self) {
        self.matched = true;
        self.input_enabled = false;
    }

    /// Enable or disable player input. Matched cards stay non-interactive.
    pub fn set_input_enabled(&mut self, enabled: bool) {
        self.input_enabled = enabled;
    }

    /// Return to the pooled state: inactive, hidden, unmatched.
    ///
    /// The flip epoch is kept so tickets issued before the reset stay stale.
    pub fn reset(&mut self) {
        self.grid_index = None;
        self.active = false;
        self.face_up = false;
        self.matched = false;
        self.flipping = false;
        self.input_enabled = false;
    }
}

impl Selectable for Card {
    fn id(&self) -> CardId {
        self.id
    }

    fn is_interactive(&self) -> bool {
        Card::is_interactive(self)
    }
}

impl Flippable for Card {
    fn start_flip(&mut self) -> Option<FlipTicket> {
        Card::start_flip(self)
    }

    fn finish_flip(&mut self, ticket: FlipTicket) -> bool {
        Card::finish_flip(self, ticket)
    }

    fn is_face_up(&self) -> bool {
        self.face_up
    }

    fn is_flipping(&self) -> bool {
        self.flipping
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::MatchError;

    fn dealt_card(face: FaceValue) -> Card {
        let mut card = Card::new(CardId::new(0));
        card.activate(face);
        card.deal(0);
        card
    }

    #[test]
    fn test_new_card_is_pooled_state() {
        let card = Card::new(CardId::new(3));
        assert!(!card.is_active());
        assert!(!card.is_interactive());
        assert_eq!(card.state(), CardState::Hidden);
        assert_eq!(card.grid_index(), None);
    }

    #[test]
    fn test_flip_up_keeps_input_locked() {
        let mut card = dealt_card(FaceValue::CAT);
        assert!(card.is_interactive());

        let ticket = card.start_flip().unwrap();
        assert_eq!(card.state(), CardState::Flipping);
        assert!(!card.is_interactive());

        assert!(card.finish_flip(ticket));
        assert_eq!(card.state(), CardState::FaceUp);
        assert!(!card.is_interactive());
    }

    #[test]
    fn test_flip_back_reenables_input() {
        let mut card = dealt_card(FaceValue::CAT);
        let up = card.start_flip().unwrap();
        card.finish_flip(up);

        let down = card.start_flip().unwrap();
        assert!(card.finish_flip(down));
        assert_eq!(card.state(), CardState::Hidden);
        assert!(card.is_interactive());
    }

    #[test]
    fn test_start_flip_noop_while_flipping_or_matched() {
        let mut card = dealt_card(FaceValue::COW);
        let ticket = card.start_flip().unwrap();
        assert!(card.start_flip().is_none());

        card.finish_flip(ticket);
        card.mark_matched();
        assert!(card.start_flip().is_none());
        assert_eq!(card.state(), CardState::Matched);
    }

    #[test]
    fn test_matched_never_interactive() {
        let mut card = dealt_card(FaceValue::HEN);
        card.mark_matched();
        card.set_input_enabled(true);
        assert!(!card.is_interactive());
    }

    #[test]
    fn test_stale_ticket_ignored() {
        let mut card = dealt_card(FaceValue::PIG);
        let first = card.start_flip().unwrap();
        card.reset();
        card.activate(FaceValue::PIG);
        card.deal(1);
        let second = card.start_flip().unwrap();

        assert!(!card.finish_flip(first));
        assert_eq!(card.state(), CardState::Flipping);
        assert!(card.finish_flip(second));
        assert!(!card.finish_flip(second));
    }

    #[test]
    fn test_ticket_for_other_card_ignored() {
        let mut card = dealt_card(FaceValue::PIG);
        let ticket = card.start_flip().unwrap();
        let foreign = FlipTicket {
            card: CardId::new(99),
            epoch: ticket.epoch,
        };
        assert!(!card.finish_flip(foreign));
        assert!(card.is_flipping());
    }

    #[test]
    fn test_set_face_value_rejects_out_of_range() {
        let mut card = dealt_card(FaceValue::DRAGON);

        assert!(matches!(
            card.set_face_value(0),
            Err(MatchError::InvalidFaceValue { value: 0, .. })
        ));
        assert!(card.set_face_value(FaceValue::MAX.get() + 1).is_err());
        assert_eq!(card.face_value(), FaceValue::DRAGON);

        card.set_face_value(5).unwrap();
        assert_eq!(card.face_value(), FaceValue::GARBAGE_MAN);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut card = dealt_card(FaceValue::HORSE);
        let ticket = card.start_flip().unwrap();
        card.finish_flip(ticket);
        card.mark_matched();

        card.reset();
        let once = card.clone();
        card.reset();
        assert_eq!(card, once);
        assert_eq!(card.state(), CardState::Hidden);
        assert!(!card.is_matched());
        assert!(!card.is_interactive());
    }

    #[test]
    fn test_traits() {
        fn flip_all<C: Flippable + Selectable>(cards: &mut [C]) -> Vec<FlipTicket> {
            cards
                .iter_mut()
                .filter(|c| c.is_interactive())
                .filter_map(Flippable::start_flip)
                .collect()
        }

        let mut cards = vec![dealt_card(FaceValue::BAT), dealt_card(FaceValue::BAT)];
        cards[1].mark_matched();
        let tickets = flip_all(&mut cards);
        assert_eq!(tickets.len(), 1);
        assert!(Flippable::is_flipping(&cards[0]));
    }
}
