//! Virtual-clock scheduler.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Cancellation token for a scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskHandle(pub u64);

impl std::fmt::Display for TaskHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task({})", self.0)
    }
}

/// A task waiting for its due time.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct ScheduledTask<T> {
    handle: TaskHandle,
    due: Duration,
    payload: T,
}

/// Single-threaded scheduler driven by explicit clock advances.
///
/// ## Ordering
///
/// Tasks fire in due-time order. Tasks due at the same instant fire in the
/// order they were scheduled.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scheduler<T> {
    /// Pending tasks, unordered.
    tasks: Vec<ScheduledTask<T>>,

    /// Time elapsed since the scheduler was created.
    now: Duration,

    /// Next task handle.
    next_id: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            now: Duration::ZERO,
            next_id: 0,
        }
    }
}

impl<T> Scheduler<T> {
    /// Create an empty scheduler at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of tasks still waiting.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Whether a task is still waiting.
    #[must_use]
    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.tasks.iter().any(|t| t.handle == handle)
    }

    /// Queue `payload` to fire once `delay` has elapsed.
    pub fn schedule(&mut self, delay: Duration, payload: T) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.tasks.push(ScheduledTask {
            handle,
            due: self.now.saturating_add(delay),
            payload,
        });
        handle
    }

    /// Cancel a task. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.handle != handle);
        self.tasks.len() != before
    }

    /// Cancel every pending task.
    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    /// Move the clock forward and return the payloads that became due.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<T> {
        self.now = self.now.saturating_add(elapsed);

        let now = self.now;
        let (mut due, waiting): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.tasks).into_iter().partition(|t| t.due <= now);
        self.tasks = waiting;

        due.sort_by_key(|t| (t.due, t.handle));
        due.into_iter().map(|t| t.payload).collect()
    }
}
