//! Deferred tasks on a virtual clock.
//!
//! The engine never sleeps or spawns timers. Work that must happen later
//! (playing back a round's newest signal) is queued in a [`Scheduler`]
//! with a delay; the host advances the clock and gets back every payload
//! that became due.
//!
//! ## Example Usage
//!
//! ```
//! use std::time::Duration;
//! use echo_engine::schedule::Scheduler;
//!
//! let mut scheduler = Scheduler::new();
//! let late = scheduler.schedule(Duration::from_millis(1000), "late");
//! scheduler.schedule(Duration::from_millis(200), "early");
//!
//! assert_eq!(scheduler.advance(Duration::from_millis(500)), vec!["early"]);
//! assert!(scheduler.cancel(late));
//! assert!(scheduler.advance(Duration::from_secs(5)).is_empty());
//! ```

mod timer;

pub use timer::{Scheduler, TaskHandle};
