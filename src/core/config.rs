//! Game configuration types.
//!
//! Hosts configure a game by providing:
//! - `GridSize`: Columns × rows of the card grid
//! - `MatchConfig`: Grid plus play rules and timing
//!
//! Timing values are presentation pacing except `max_time` and
//! `time_bonus_per_match`, which decide when a game is lost.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{MatchError, Result};
use crate::cards::FaceValue;

/// Grid dimensions, `cols` across and `rows` down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    pub cols: usize,
    pub rows: usize,
}

impl GridSize {
    /// Grids offered by the lobby menu, in menu order.
    pub const LOBBY_PRESETS: [GridSize; 4] = [
        GridSize::new(3, 4),
        GridSize::new(5, 2),
        GridSize::new(4, 4),
        GridSize::new(4, 5),
    ];

    /// Create a grid size from columns and rows.
    #[must_use]
    pub const fn new(cols: usize, rows: usize) -> Self {
        Self { cols, rows }
    }

    /// Total number of cells. Saturates for grids too large to address.
    #[must_use]
    pub const fn area(self) -> usize {
        self.cols.saturating_mul(self.rows)
    }

    /// Total number of cells, or `None` if it overflows `usize`.
    #[must_use]
    pub const fn checked_area(self) -> Option<usize> {
        self.cols.checked_mul(self.rows)
    }

    /// Cell index of a position, `col + row * cols`.
    #[must_use]
    pub const fn index(self, col: usize, row: usize) -> usize {
        col + row * self.cols
    }

    /// Position `(col, row)` of a cell index, or `None` outside the grid.
    #[must_use]
    pub const fn position(self, index: usize) -> Option<(usize, usize)> {
        if index >= self.area() {
            return None;
        }
        Some((index % self.cols, index / self.cols))
    }

    /// Check the grid can be dealt as sets of `set_size` equal faces with at
    /// least two distinct faces and no more than `FaceValue::MAX`.
    pub fn validate(self, set_size: usize) -> Result<()> {
        let invalid = |reason| MatchError::InvalidGridDimensions {
            rows: self.rows,
            cols: self.cols,
            reason,
        };

        if set_size < 2 {
            return Err(invalid("sets need at least two cards"));
        }
        let Some(area) = self.checked_area() else {
            return Err(invalid("grid is too large"));
        };
        if area % set_size != 0 {
            return Err(if set_size == 2 {
                invalid("odd number of cards")
            } else {
                invalid("card count is not a multiple of the set size")
            });
        }

        let distinct = area / set_size;
        if distinct < 2 {
            return Err(invalid("fewer than two distinct sets"));
        }
        if distinct > usize::from(FaceValue::MAX.get()) {
            return Err(invalid("more distinct sets than face values"));
        }
        Ok(())
    }
}

impl Default for GridSize {
    fn default() -> Self {
        GridSize::new(3, 4)
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} x {}", self.cols, self.rows)
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Grid dimensions.
    pub grid: GridSize,

    /// Cards face-up at once before a match is evaluated (default: 2).
    /// Also the number of equal faces dealt per set.
    pub max_cards_in_play: usize,

    /// Starting and maximum time on the clock (default: 25s).
    pub max_time: Duration,

    /// Time granted per successful match, clamped to `max_time` (default: 5s).
    pub time_bonus_per_match: Duration,

    /// Delay after a mismatching selection before the fail animation (default: 0.25s).
    pub fail_reveal_delay: Duration,

    /// Delay after the fail animation before the cards are turned back (default: 1s).
    pub reject_delay: Duration,

    /// Delay after losing before returning to the menu (default: 5s).
    pub lost_exit_delay: Duration,

    /// Seed for dealing and audio choices.
    pub seed: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            grid: GridSize::default(),
            max_cards_in_play: 2,
            max_time: Duration::from_secs(25),
            time_bonus_per_match: Duration::from_secs(5),
            fail_reveal_delay: Duration::from_millis(250),
            reject_delay: Duration::from_secs(1),
            lost_exit_delay: Duration::from_secs(5),
            seed: 42,
        }
    }
}

impl MatchConfig {
    /// Create a config for the given grid with default rules.
    pub fn new(grid: GridSize) -> Self {
        Self {
            grid,
            ..Self::default()
        }
    }

    /// Set the grid.
    #[must_use]
    pub fn with_grid(mut self, grid: GridSize) -> Self {
        self.grid = grid;
        self
    }

    /// Set how many cards are compared per match.
    #[must_use]
    pub fn with_max_cards_in_play(mut self, n: usize) -> Self {
        self.max_cards_in_play = n;
        self
    }

    /// Set the maximum (and starting) time.
    #[must_use]
    pub fn with_max_time(mut self, max_time: Duration) -> Self {
        self.max_time = max_time;
        self
    }

    /// Set the per-match time bonus.
    #[must_use]
    pub fn with_time_bonus(mut self, bonus: Duration) -> Self {
        self.time_bonus_per_match = bonus;
        self
    }

    /// Set both mismatch delays.
    #[must_use]
    pub fn with_mismatch_delays(mut self, reveal: Duration, reject: Duration) -> Self {
        self.fail_reveal_delay = reveal;
        self.reject_delay = reject;
        self
    }

    /// Set the delay before leaving a lost game.
    #[must_use]
    pub fn with_lost_exit_delay(mut self, delay: Duration) -> Self {
        self.lost_exit_delay = delay;
        self
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Total number of cards dealt.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.grid.area()
    }

    /// Validate the configuration before anything is dealt.
    pub fn validate(&self) -> Result<()> {
        if self.max_time.is_zero() {
            return Err(MatchError::InvalidConfig("max_time must be positive".into()));
        }
        if self.max_cards_in_play < 2 {
            return Err(MatchError::InvalidConfig(format!(
                "max_cards_in_play must be at least 2, got {}",
                self.max_cards_in_play
            )));
        }
        self.grid.validate(self.max_cards_in_play)
    }
}
