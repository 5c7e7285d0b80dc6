//! Frame-driven deferred tasks with cancellation.
//!
//! Tasks are plain values queued with a delay. The host advances the
//! scheduler from its frame update and gets back every task that came due,
//! ordered by due time and then by scheduling order.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Cancellation token for a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub u64);

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task({})", self.0)
    }
}

#[derive(Clone, Debug)]
struct ScheduledTask<T> {
    id: TaskId,
    due: Duration,
    task: T,
}

/// Queue of delayed tasks.
///
/// ```
/// use std::time::Duration;
/// use memory_match::engine::Scheduler;
///
/// let mut scheduler = Scheduler::new();
/// scheduler.schedule(Duration::from_millis(250), "reveal");
/// let reject = scheduler.schedule(Duration::from_secs(1), "reject");
/// scheduler.cancel(reject);
///
/// assert!(scheduler.advance(Duration::from_millis(100)).is_empty());
/// assert_eq!(scheduler.advance(Duration::from_secs(2)), vec!["reveal"]);
/// ```
#[derive(Clone, Debug)]
pub struct Scheduler<T> {
    clock: Duration,
    next_id: u64,
    tasks: Vec<ScheduledTask<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            clock: Duration::ZERO,
            next_id: 0,
            tasks: Vec::new(),
        }
    }
}

impl<T> Scheduler<T> {
    /// Create an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `task` to come due after `delay`.
    pub fn schedule(&mut self, delay: Duration, task: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.push(ScheduledTask {
            id,
            due: self.clock.saturating_add(delay),
            task,
        });
        id
    }

    /// Cancel a task. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Cancel everything.
    pub fn clear(&mut self) {
        if !self.tasks.is_empty() {
            log::trace!("cancelling {} scheduled tasks", self.tasks.len());
        }
        self.tasks.clear();
    }

    /// Advance the clock and take every task now due.
    pub fn advance(&mut self, delta: Duration) -> Vec<T> {
        self.clock = self.clock.saturating_add(delta);
        let clock = self.clock;

        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.tasks.drain(..).partition(|t| t.due <= clock);
        self.tasks = pending;

        due.sort_by_key(|t| (t.due, t.id.0));
        for t in &due {
            log::trace!("{} fired at {:?}", t.id, clock);
        }
        due.into_iter().map(|t| t.task).collect()
    }

    /// Is the task still waiting?
    #[must_use]
    pub fn is_scheduled(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|t| t.id == id)
    }

    /// Number of waiting tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Time advanced so far.
    #[must_use]
    pub fn clock(&self) -> Duration {
        self.clock
    }
}
