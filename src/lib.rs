//! # echo-engine
//!
//! Game engine for a "repeat the growing sequence" memory game.
//!
//! The engine shows an increasingly long sequence of four colored signals;
//! the player reproduces it, and the game ends on the first mismatch.
//!
//! ## Design Principles
//!
//! 1. **Effects Out, Events In**: The engine never renders, plays audio, or
//!    reads devices. It consumes normalized inputs and returns `Effect`s.
//!
//! 2. **Deterministic**: Draws come from a seeded ChaCha8 RNG and deferred
//!    playback runs on a virtual clock, so a seed plus an input log
//!    replays a game exactly.
//!
//! 3. **No Globals**: All state lives in a `GameEngine`; any number of
//!    engines can run side by side.
//!
//! ## Modules
//!
//! - `core`: Signals, game state, RNG, configuration, errors
//! - `effects`: Outbound effects and the presenter seam
//! - `schedule`: Cancellable deferred tasks on a virtual clock
//! - `engine`: The state machine and its input queue

pub mod core;
pub mod effects;
pub mod schedule;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Signal, GameRng, GameRngState,
    EngineConfig, GameState, RoundState, InputCheck,
    EngineError,
};

pub use crate::effects::{Effect, Effects, Presenter, PresentationError, EffectDispatcher, DispatchResult};

pub use crate::schedule::{Scheduler, TaskHandle};

pub use crate::engine::{GameEngine, EngineSnapshot, PlaybackTask, Input, InputQueue};
