//! Normalized inbound events and the queue that feeds them to the engine.
//!
//! Input devices differ (keyboard, pointer, touch), but the engine only
//! ever sees three things: a begin trigger, a signal index, and elapsed
//! time. Hosts that receive events from several sources push them onto an
//! [`InputQueue`] and drain it once per frame; events are processed
//! strictly in arrival order.

use std::collections::VecDeque;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::effects::Effects;

use super::game::GameEngine;

/// A normalized inbound event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Input {
    /// Any "start the game" gesture.
    Begin,
    /// The button at this index was activated.
    SignalActivated(u8),
    /// Wall-clock time passed.
    Elapsed(Duration),
}

/// FIFO of pending inputs.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct InputQueue {
    inputs: VecDeque<Input>,
}

impl InputQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an input.
    pub fn push(&mut self, input: Input) {
        self.inputs.push_back(input);
    }

    /// Number of queued inputs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Drop every queued input.
    pub fn clear(&mut self) {
        self.inputs.clear();
    }

    /// Feed every queued input to `engine` in order.
    ///
    /// Returns the concatenated effects.
    pub fn process(&mut self, engine: &mut GameEngine) -> Effects {
        let mut effects = Effects::new();
        while let Some(input) = self.inputs.pop_front() {
            effects.extend(engine.handle(input));
        }
        effects
    }
}

impl Extend<Input> for InputQueue {
    fn extend<I: IntoIterator<Item = Input>>(&mut self, iter: I) {
        self.inputs.extend(iter);
    }
}
