//! Presentation and audio collaborators.
//!
//! The session drives these; it never reads anything back from them except
//! flip completions, which the host returns through
//! [`Session::complete_flip`](super::Session::complete_flip).

use serde::{Deserialize, Serialize};

use crate::cards::{Card, FlipTicket};
use crate::core::config::GridSize;
use crate::core::entity::CardId;
use crate::core::rng::GameRng;
use crate::engine::Outcome;

/// Sound cues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundKey {
    Card,
    Match1,
    Match2,
    NoMatch,
    Button,
    GameLost,
    GameWon,
    GameInstructions,
}

impl SoundKey {
    /// Cues picked from at random on a successful match.
    pub const MATCH_SOUNDS: [SoundKey; 2] = [SoundKey::Match1, SoundKey::Match2];
}

/// Fire-and-forget audio.
pub trait AudioSink {
    fn play_sound(&mut self, key: SoundKey);

    /// Play one of the match cues.
    fn play_random_match_sound(&mut self, rng: &mut GameRng) {
        if let Some(&key) = rng.choose(&SoundKey::MATCH_SOUNDS) {
            self.play_sound(key);
        }
    }
}

/// Rendering and animation.
///
/// Every `play_flip_animation` must eventually be answered with the ticket
/// through `Session::complete_flip`, unless the game ends first.
pub trait Presenter {
    /// Cards were dealt; position them on the grid.
    fn layout_grid(&mut self, _grid: GridSize, _cards: &[Card]) {}

    fn play_flip_animation(&mut self, card: CardId, ticket: FlipTicket);

    fn play_success_animation(&mut self, _card: CardId) {}

    fn play_fail_animation(&mut self, _card: CardId) {}

    fn play_win_effect(&mut self) {}

    /// The game reached a terminal state.
    fn game_over(&mut self, _outcome: Outcome) {}

    /// The table was cleared on the way back to the menu.
    fn exit_to_menu(&mut self) {}
}

/// Presenter that shows nothing. Flip tickets are dropped, so flips only
/// complete if the host calls `complete_flip` itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn play_flip_animation(&mut self, _card: CardId, _ticket: FlipTicket) {}
}

/// Silent audio.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play_sound(&mut self, _key: SoundKey) {}
}
