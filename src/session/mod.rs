//! Session control and the collaborators it drives.
//!
//! ## Data flow
//!
//! ```text
//! start ─▶ grid::build_sets ─▶ CardPool::acquire ─▶ Table
//! select ─▶ MatchEngine::select ─▶ Presenter::play_flip_animation
//! complete_flip ─▶ MatchEngine::flip_completed ─▶ GameSession (score, clock)
//! update ─▶ Scheduler (mismatch reveal / reject / exit) ─▶ GameTimer::tick
//! ```
//!
//! ## Example
//!
//! ```
//! use memory_match::{GridSize, MatchConfig, Session, SessionPhase};
//!
//! let config = MatchConfig::new(GridSize::new(2, 2)).with_seed(7);
//! let mut session = Session::headless(config).unwrap();
//! session.start().unwrap();
//!
//! let first = session.cards()[0].id();
//! let ticket = session.select(first).ticket().unwrap();
//! session.complete_flip(ticket);
//!
//! assert_eq!(session.phase(), SessionPhase::Playing);
//! assert_eq!(session.play_set(), &[first]);
//! ```

mod collaborators;
mod controller;
mod snapshot;

pub use collaborators::{AudioSink, NullAudio, NullPresenter, Presenter, SoundKey};
pub use controller::{Session, SessionPhase};
pub use snapshot::{CardSnapshot, SessionSnapshot};
