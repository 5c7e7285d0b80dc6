//! # memory-match
//!
//! Engine for a "memory match" card game: a grid of face-down cards is
//! turned over a few at a time, equal faces score and buy time, and a
//! countdown ends the game if the player is too slow.
//!
//! ## Design Principles
//!
//! 1. **Frame-Driven**: No threads or timers. The host delivers input,
//!    animation completions and frame deltas; everything runs synchronously.
//!
//! 2. **Presentation at Arm's Length**: Rendering and audio sit behind the
//!    `Presenter` and `AudioSink` traits. The engine only depends on flip
//!    completions coming back as `FlipTicket`s.
//!
//! 3. **Deterministic**: Decks come from a seeded ChaCha8 stream, so the same
//!    seed deals the same game.
//!
//! ## Modules
//!
//! - `core`: Card ids, RNG, configuration, errors
//! - `cards`: Face values, the card state machine, card pooling
//! - `grid`: Deck building and card layout
//! - `engine`: Match engine, timer, scheduler, per-game state
//! - `session`: Session controller and collaborator traits

pub mod core;
pub mod cards;
pub mod grid;
pub mod engine;
pub mod session;

// Re-export commonly used types
pub use crate::core::{CardId, GameRng, GameRngState, GridSize, MatchConfig, MatchError, Result};

pub use crate::cards::{Card, CardPool, CardState, FaceValue, FlipTicket, Flippable, Selectable};

pub use crate::grid::{Deck, GridLayout};

pub use crate::engine::{
    FlipOutcome, GameSession, GameTimer, MatchEngine, Outcome, PlaySet, Rejection, Scheduler,
    Selection, Table, TaskId, Verdict,
};

pub use crate::session::{
    AudioSink, CardSnapshot, NullAudio, NullPresenter, Presenter, Session, SessionPhase,
    SessionSnapshot, SoundKey,
};
