//! The game engine and its inbound event surface.
//!
//! - `GameEngine`: the state machine (start, submit, reset, advance)
//! - `Input` / `InputQueue`: normalized inbound events, processed in order
//! - `EngineSnapshot`: serializable capture of an engine

mod game;
mod input;

pub use game::{EngineSnapshot, GameEngine, PlaybackTask};
pub use input::{Input, InputQueue};
