//! Match engine, countdown timer and deferred-task scheduler.
//!
//! ## Components
//!
//! - `MatchEngine`: Play set, match evaluation and resolution
//! - `Table`: Dealt cards in grid order
//! - `GameSession`: Score, clock and outcome of one game
//! - `GameTimer`: Frame-driven countdown with bonus time
//! - `Scheduler`: Delayed tasks with cancellation tokens
//!
//! Everything runs synchronously on the caller's thread. Deferred steps are
//! either flip tickets the host hands back on animation completion, or
//! scheduler tasks that come due during `advance`.

mod matcher;
mod scheduler;
mod state;
mod table;
mod timer;

pub use matcher::{FlipOutcome, MatchEngine, PlaySet, Rejection, Selection, Verdict};
pub use scheduler::{Scheduler, TaskId};
pub use state::{GameSession, Outcome};
pub use table::Table;
pub use timer::GameTimer;
