//! Per-game session state: score, clock and terminal outcome.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::timer::GameTimer;

/// How a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Every card was matched.
    Won,
    /// Time ran out first.
    Lost,
}

/// State of one game, created on start and dropped on return to the menu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    match_count: usize,
    total_cards: usize,
    timer: GameTimer,
    outcome: Option<Outcome>,
}

impl GameSession {
    /// Start a game over `total_cards` cards with a full clock.
    #[must_use]
    pub fn new(total_cards: usize, max_time: Duration) -> Self {
        Self {
            match_count: 0,
            total_cards,
            timer: GameTimer::new(max_time),
            outcome: None,
        }
    }

    /// Cards matched so far.
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.match_count
    }

    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.total_cards
    }

    #[must_use]
    pub fn timer(&self) -> &GameTimer {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut GameTimer {
        &mut self.timer
    }

    #[must_use]
    pub fn time_remaining(&self) -> Duration {
        self.timer.remaining()
    }

    /// Has the game reached a terminal state?
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Are all cards matched?
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.match_count >= self.total_cards
    }

    /// Credit a completed set of `cards` cards and grant `bonus` time.
    pub fn record_match(&mut self, cards: usize, bonus: Duration) {
        self.match_count += cards;
        self.timer.add_bonus(bonus);
    }

    /// Enter a terminal state. Returns `false` if the game was already over.
    pub fn finish(&mut self, outcome: Outcome) -> bool {
        if self.outcome.is_some() {
            return false;
        }
        self.outcome = Some(outcome);
        true
    }
}
