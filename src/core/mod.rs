//! Core engine types: signals, game state, RNG, configuration, errors.
//!
//! This module contains the building blocks the engine is assembled from.
//! None of it knows about scheduling or presentation.

pub mod signal;
pub mod rng;
pub mod config;
pub mod state;
pub mod error;

pub use signal::Signal;
pub use rng::{GameRng, GameRngState};
pub use config::EngineConfig;
pub use state::{GameState, InputCheck, RoundState};
pub use error::EngineError;
