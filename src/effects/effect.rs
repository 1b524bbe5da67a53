//! Outbound effect requests.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Signal;

/// A request from the engine to the presentation layer.
///
/// The engine never renders or plays audio; it only says what should
/// happen. Flash and sound are one combined request so the presentation
/// layer always triggers them together.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    /// Flash `signal` and play its sound.
    ///
    /// Playback flashes (`is_sequence_playback`) additionally get a
    /// sustained glow; player flashes do not.
    SignalFeedback {
        signal: Signal,
        is_sequence_playback: bool,
    },

    /// Update the visible score readout.
    ScoreChanged {
        level: u32,
    },

    /// The player entered a wrong signal.
    GameOver,
}

impl Effect {
    /// Feedback for a signal the player just entered.
    #[must_use]
    pub const fn player_flash(signal: Signal) -> Self {
        Effect::SignalFeedback {
            signal,
            is_sequence_playback: false,
        }
    }

    /// Feedback for a signal the engine is playing back.
    #[must_use]
    pub const fn playback_flash(signal: Signal) -> Self {
        Effect::SignalFeedback {
            signal,
            is_sequence_playback: true,
        }
    }

    /// Score readout update.
    #[must_use]
    pub const fn score(level: u32) -> Self {
        Effect::ScoreChanged { level }
    }

    /// The signal this effect flashes, if any.
    #[must_use]
    pub const fn signal(&self) -> Option<Signal> {
        match self {
            Effect::SignalFeedback { signal, .. } => Some(*signal),
            _ => None,
        }
    }
}

/// Effects emitted by a single engine call, in emission order.
///
/// No single call emits more than three effects outside of a long
/// `advance`, so these rarely spill to the heap.
pub type Effects = SmallVec<[Effect; 4]>;
