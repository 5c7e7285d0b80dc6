//! Serializable view of a session for hosts, replays and debugging.
//!
//! Only public information is captured: face values of hidden cards are
//! left out. The deal stream position is the one after the current deck was
//! dealt, so it predicts the next deck, not this one.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::controller::SessionPhase;
use crate::cards::{Card, CardState, FaceValue};
use crate::core::config::GridSize;
use crate::core::entity::CardId;
use crate::core::error::{MatchError, Result};
use crate::core::rng::GameRngState;
use crate::engine::GameSession;

/// Public state of one dealt card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSnapshot {
    pub id: CardId,
    pub grid_index: Option<usize>,
    pub state: CardState,
    /// Face value, if the face is showing.
    pub face: Option<FaceValue>,
    pub interactive: bool,
}

impl From<&Card> for CardSnapshot {
    fn from(card: &Card) -> Self {
        let showing = card.is_face_up() || card.is_matched();
        Self {
            id: card.id(),
            grid_index: card.grid_index(),
            state: card.state(),
            face: showing.then(|| card.face_value()),
            interactive: card.is_interactive(),
        }
    }
}

/// Public state of a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub grid: GridSize,
    pub match_count: usize,
    pub total_cards: usize,
    pub time_remaining: Duration,
    pub play_set: Vec<CardId>,
    pub cards: Vec<CardSnapshot>,
    /// Deal stream position; see [`Session::restore_deal_rng`](super::Session::restore_deal_rng).
    pub deal_rng: GameRngState,
}

impl SessionSnapshot {
    pub(crate) fn capture(
        phase: SessionPhase,
        grid: GridSize,
        game: Option<&GameSession>,
        play_set: &[CardId],
        cards: &[Card],
        deal_rng: GameRngState,
    ) -> Self {
        Self {
            phase,
            grid,
            match_count: game.map_or(0, GameSession::match_count),
            total_cards: game.map_or(0, GameSession::total_cards),
            time_remaining: game.map_or(Duration::ZERO, GameSession::time_remaining),
            play_set: play_set.to_vec(),
            cards: cards.iter().map(CardSnapshot::from).collect(),
            deal_rng,
        }
    }

    /// Encode to a compact binary form.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| MatchError::Snapshot(e.to_string()))
    }

    /// Decode from [`to_bytes`](Self::to_bytes) output.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes).map_err(|e| MatchError::Snapshot(e.to_string()))
    }

    /// Snapshot of the card at a cell index.
    #[must_use]
    pub fn card_at(&self, index: usize) -> Option<&CardSnapshot> {
        self.cards.iter().find(|c| c.grid_index == Some(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardPool;
    use crate::core::rng::GameRng;

    #[test]
    fn test_hidden_faces_are_not_captured() {
        let mut pool = CardPool::new();
        let mut hidden = pool.acquire(FaceValue::BAT);
        hidden.deal(0);
        let mut shown = pool.acquire(FaceValue::CAT);
        shown.deal(1);
        let ticket = shown.start_flip().unwrap();
        shown.finish_flip(ticket);

        let snapshot = SessionSnapshot::capture(
            SessionPhase::Playing,
            GridSize::new(2, 1),
            None,
            &[shown.id()],
            &[hidden, shown],
            GameRng::new(1).state(),
        );

        assert_eq!(snapshot.card_at(0).unwrap().face, None);
        assert!(snapshot.card_at(0).unwrap().interactive);
        assert_eq!(snapshot.card_at(1).unwrap().face, Some(FaceValue::CAT));
        assert_eq!(snapshot.card_at(1).unwrap().state, CardState::FaceUp);
        assert_eq!(snapshot.match_count, 0);
    }

    #[test]
    fn test_bytes_roundtrip_and_garbage() {
        let snapshot = SessionSnapshot::capture(
            SessionPhase::Menu,
            GridSize::default(),
            None,
            &[],
            &[],
            GameRng::new(2).state(),
        );
        let bytes = snapshot.to_bytes().unwrap();
        assert_eq!(SessionSnapshot::from_bytes(&bytes).unwrap(), snapshot);

        assert!(matches!(
            SessionSnapshot::from_bytes(&[0xff]),
            Err(MatchError::Snapshot(_))
        ));
    }
}
