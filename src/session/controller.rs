//! Session controller: game start, input routing, frame updates, game end.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::collaborators::{AudioSink, NullAudio, NullPresenter, Presenter, SoundKey};
use super::snapshot::SessionSnapshot;
use crate::cards::{Card, CardPool, FlipTicket};
use crate::core::config::{GridSize, MatchConfig};
use crate::core::entity::CardId;
use crate::core::error::Result;
use crate::core::rng::{GameRng, GameRngState};
use crate::engine::{
    FlipOutcome, GameSession, MatchEngine, Outcome, Rejection, Scheduler, Selection, Table,
    Verdict,
};
use crate::grid::{self, Deck};

/// Where the controller is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No cards dealt.
    Menu,
    /// Game in progress.
    Playing,
    /// Game finished; cards still on the table.
    Over(Outcome),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Deferred {
    RevealMismatch,
    RejectPlaySet,
    ExitToMenu,
}

/// Owns one game at a time and wires the match engine to the clock and to
/// the presentation and audio collaborators.
///
/// The host calls [`select`](Self::select) for input,
/// [`complete_flip`](Self::complete_flip) when a flip animation finishes and
/// [`update`](Self::update) once per frame.
pub struct Session<P = NullPresenter, A = NullAudio> {
    config: MatchConfig,
    pool: CardPool,
    table: Table,
    engine: MatchEngine,
    game: Option<GameSession>,
    deck: Option<Deck>,
    scheduler: Scheduler<Deferred>,
    deal_rng: GameRng,
    sfx_rng: GameRng,
    instructions_played: bool,
    presenter: P,
    audio: A,
}

impl Session {
    /// Session with no presentation or audio.
    pub fn headless(config: MatchConfig) -> Result<Self> {
        Self::new(config, NullPresenter, NullAudio)
    }
}

impl<P: Presenter, A: AudioSink> Session<P, A> {
    /// Create a controller in the menu phase.
    ///
    /// Fails if `config` could never start a game.
    pub fn new(config: MatchConfig, presenter: P, audio: A) -> Result<Self> {
        if let Err(err) = config.validate() {
            log::warn!("rejected configuration: {}", err);
            return Err(err);
        }

        let rng = GameRng::new(config.seed);
        Ok(Self {
            engine: MatchEngine::new(config.max_cards_in_play, config.time_bonus_per_match),
            pool: CardPool::with_capacity(CardPool::DEFAULT_CAPACITY),
            table: Table::default(),
            game: None,
            deck: None,
            scheduler: Scheduler::new(),
            deal_rng: rng.for_context("deal"),
            sfx_rng: rng.for_context("sfx"),
            instructions_played: false,
            presenter,
            audio,
            config,
        })
    }

    /// Start a game on the configured grid.
    pub fn start(&mut self) -> Result<()> {
        self.start_with(self.config.grid)
    }

    /// Start a game on `grid`, replacing any game in progress.
    ///
    /// The deck is built before any card is taken from the pool, so an
    /// invalid grid leaves the controller untouched.
    pub fn start_with(&mut self, grid: GridSize) -> Result<()> {
        let deck = match grid::build_sets(grid, self.config.max_cards_in_play, &mut self.deal_rng) {
            Ok(deck) => deck,
            Err(err) => {
                log::warn!("cannot start {} game: {}", grid, err);
                return Err(err);
            }
        };

        if self.game.is_some() {
            self.teardown();
        }

        let cards = deck
            .faces()
            .iter()
            .enumerate()
            .map(|(index, &face)| {
                let mut card = self.pool.acquire(face);
                card.deal(index);
                card
            })
            .collect();

        self.table = Table::new(grid, cards);
        self.engine = MatchEngine::new(
            self.config.max_cards_in_play,
            self.config.time_bonus_per_match,
        );
        self.game = Some(GameSession::new(grid.area(), self.config.max_time));
        self.config.grid = grid;
        self.deck = Some(deck);

        self.presenter.layout_grid(grid, self.table.cards());
        if !self.instructions_played {
            self.audio.play_sound(SoundKey::GameInstructions);
            self.instructions_played = true;
        }
        log::info!("game started on {} grid ({} cards)", grid, grid.area());
        Ok(())
    }

    /// Route a card-selection event to the match engine.
    pub fn select(&mut self, id: CardId) -> Selection {
        let Some(game) = self.game.as_ref() else {
            return Selection::Ignored;
        };
        let selection = self.engine.select(&mut self.table, game, id);

        if let Some(ticket) = selection.ticket() {
            self.audio.play_sound(SoundKey::Card);
            self.presenter.play_flip_animation(id, ticket);
        }
        if let Selection::Evaluated {
            verdict: Verdict::Mismatch,
            ..
        } = selection
        {
            self.scheduler
                .schedule(self.config.fail_reveal_delay, Deferred::RevealMismatch);
        }
        selection
    }

    /// Report that the flip animation for `ticket` finished.
    ///
    /// Ignored once the game is over.
    pub fn complete_flip(&mut self, ticket: FlipTicket) -> FlipOutcome {
        let Some(game) = self.game.as_mut() else {
            return FlipOutcome::Stale;
        };
        if game.is_over() {
            return FlipOutcome::Stale;
        }

        let outcome = self.engine.flip_completed(&mut self.table, game, ticket);
        if let FlipOutcome::Matched { cards, won } = &outcome {
            for &id in cards {
                self.presenter.play_success_animation(id);
            }
            self.audio.play_random_match_sound(&mut self.sfx_rng);
            if *won {
                self.on_game_over(Outcome::Won);
            }
        }
        outcome
    }

    /// Advance by one frame.
    ///
    /// Runs due deferred work and ticks the clock while the game is in
    /// progress. After the game ends only the pending exit to the menu runs.
    pub fn update(&mut self, delta: Duration) {
        for task in self.scheduler.advance(delta) {
            self.run(task);
        }

        let expired = match self.game.as_mut() {
            Some(game) if !game.is_over() => game.timer_mut().tick(delta),
            _ => false,
        };
        if expired {
            self.end(Outcome::Lost);
        }
    }

    fn run(&mut self, task: Deferred) {
        match task {
            Deferred::RevealMismatch => {
                let Some(cards) = self.engine.mismatched() else {
                    return;
                };
                for &id in cards {
                    self.presenter.play_fail_animation(id);
                }
                self.audio.play_sound(SoundKey::NoMatch);
                self.scheduler
                    .schedule(self.config.reject_delay, Deferred::RejectPlaySet);
            }
            Deferred::RejectPlaySet => match self.engine.reject(&mut self.table) {
                Rejection::Rejected(tickets) => {
                    for ticket in tickets {
                        self.presenter.play_flip_animation(ticket.card, ticket);
                    }
                }
                Rejection::Retry => {
                    self.scheduler.schedule(Duration::ZERO, Deferred::RejectPlaySet);
                }
                Rejection::Nothing => {}
            },
            Deferred::ExitToMenu => self.return_to_menu(),
        }
    }

    /// End the game with `outcome`. Does nothing if it is already over.
    pub fn end(&mut self, outcome: Outcome) {
        let finished = self.game.as_mut().map_or(false, |game| game.finish(outcome));
        if finished {
            self.on_game_over(outcome);
        }
    }

    fn on_game_over(&mut self, outcome: Outcome) {
        self.scheduler.clear();
        self.engine.cancel();
        self.table.disable_input();
        self.presenter.game_over(outcome);

        match outcome {
            Outcome::Won => {
                self.presenter.play_win_effect();
                self.audio.play_sound(SoundKey::GameWon);
            }
            Outcome::Lost => {
                self.audio.play_sound(SoundKey::GameLost);
                self.scheduler
                    .schedule(self.config.lost_exit_delay, Deferred::ExitToMenu);
            }
        }
        log::info!("game over: {:?}", outcome);
    }

    /// Leave the current game from the back button.
    pub fn back_to_menu(&mut self) {
        self.audio.play_sound(SoundKey::Button);
        self.return_to_menu();
    }

    fn return_to_menu(&mut self) {
        if self.game.is_none() {
            return;
        }
        self.teardown();
        self.presenter.exit_to_menu();
        log::info!("returned to menu, {} cards pooled", self.pool.available());
    }

    /// Cancel deferred work and return every card to the pool.
    fn teardown(&mut self) {
        self.scheduler.clear();
        self.engine.cancel();
        self.pool.release_all(self.table.take_cards());
        self.game = None;
        self.deck = None;
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match &self.game {
            None => SessionPhase::Menu,
            Some(game) => match game.outcome() {
                None => SessionPhase::Playing,
                Some(outcome) => SessionPhase::Over(outcome),
            },
        }
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// State of the current game.
    #[must_use]
    pub fn game(&self) -> Option<&GameSession> {
        self.game.as_ref()
    }

    /// Deck of the current game.
    #[must_use]
    pub fn deck(&self) -> Option<&Deck> {
        self.deck.as_ref()
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.table.get(id)
    }

    /// Dealt cards in cell order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.table.cards()
    }

    #[must_use]
    pub fn play_set(&self) -> &[CardId] {
        self.engine.play_set()
    }

    #[must_use]
    pub fn pool(&self) -> &CardPool {
        &self.pool
    }

    /// Number of deferred tasks waiting.
    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.len()
    }

    /// Life bar fill in `[0, 1]`; zero in the menu.
    #[must_use]
    pub fn time_fraction(&self) -> f32 {
        self.game.as_ref().map_or(0.0, |game| game.timer().fraction())
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    #[must_use]
    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    /// Capture the public state of the session.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(
            self.phase(),
            self.config.grid,
            self.game.as_ref(),
            self.engine.play_set(),
            self.table.cards(),
            self.deal_rng.state(),
        )
    }

    /// Position of the deal stream.
    #[must_use]
    pub fn deal_rng_state(&self) -> GameRngState {
        self.deal_rng.state()
    }

    /// Rewind or fast-forward the deal stream, typically to
    /// [`SessionSnapshot::deal_rng`]. The next game started on the same grid
    /// deals the same deck the captured session would have dealt.
    pub fn restore_deal_rng(&mut self, state: &GameRngState) {
        self.deal_rng = GameRng::from_state(state);
        log::debug!("deal stream restored to word {}", state.word_pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::MatchError;

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = MatchConfig::new(GridSize::new(3, 3));
        assert!(matches!(
            Session::headless(config),
            Err(MatchError::InvalidGridDimensions { .. })
        ));
    }

    #[test]
    fn test_start_deals_cards() {
        let mut session = Session::headless(MatchConfig::new(GridSize::new(4, 5))).unwrap();
        assert_eq!(session.phase(), SessionPhase::Menu);
        assert_eq!(session.time_fraction(), 0.0);

        session.start().unwrap();
        assert_eq!(session.phase(), SessionPhase::Playing);
        assert_eq!(session.cards().len(), 20);
        assert_eq!(session.pool().available(), 0);
        assert_eq!(session.time_fraction(), 1.0);

        let deck = session.deck().unwrap();
        for (index, card) in session.cards().iter().enumerate() {
            assert_eq!(card.grid_index(), Some(index));
            assert_eq!(Some(card.face_value()), deck.get(index));
            assert!(card.is_interactive());
        }
    }

    #[test]
    fn test_invalid_grid_keeps_current_game() {
        let mut session = Session::headless(MatchConfig::default()).unwrap();
        session.start().unwrap();
        let before: Vec<_> = session.cards().iter().map(Card::id).collect();

        assert!(session.start_with(GridSize::new(5, 5)).is_err());
        assert_eq!(session.phase(), SessionPhase::Playing);
        let after: Vec<_> = session.cards().iter().map(Card::id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_restart_recycles_cards() {
        let mut session = Session::headless(MatchConfig::default()).unwrap();
        session.start().unwrap();
        session.start_with(GridSize::new(2, 2)).unwrap();

        assert_eq!(session.cards().len(), 4);
        assert_eq!(session.pool().created(), CardPool::DEFAULT_CAPACITY);
        assert_eq!(session.pool().available(), CardPool::DEFAULT_CAPACITY - 4);
        assert_eq!(session.config().grid, GridSize::new(2, 2));
    }

    #[test]
    fn test_select_in_menu_ignored() {
        let mut session = Session::headless(MatchConfig::default()).unwrap();
        assert_eq!(session.select(CardId::new(0)), Selection::Ignored);
        let ticket = FlipTicket {
            card: CardId::new(0),
            epoch: 1,
        };
        assert_eq!(session.complete_flip(ticket), FlipOutcome::Stale);
    }
}
