//! Game phase and round bookkeeping.
//!
//! ## GameState
//!
//! Whether a game is in progress. Controls whether `start` has an effect
//! and whether input is accepted.
//!
//! ## RoundState
//!
//! The two growable sequences plus the level and high-score counters.
//! The engine owns one of these and is the only code that mutates it.

use serde::{Deserialize, Serialize};

use super::error::EngineError;
use super::signal::Signal;

/// Whether a game is in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    /// Waiting for a begin trigger.
    #[default]
    Idle,
    /// A game is running and input is accepted.
    Playing,
}

/// Outcome of checking the player's newest input against the sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputCheck {
    /// The input differs from the generated signal at the same position.
    Mismatch,
    /// Correct so far; more inputs are needed to finish the round.
    Incomplete,
    /// Correct, and the whole generated sequence has been reproduced.
    Complete,
}

/// Sequences and counters for the current game.
///
/// Invariant: `player.len() <= generated.len()`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    generated: Vec<Signal>,
    player: Vec<Signal>,
    level: u32,
    high_score: u32,
}

impl RoundState {
    /// Create an empty round state with no high score.
    pub fn new() -> Self {
        Self::default()
    }

    /// The pattern the player must reproduce.
    #[must_use]
    pub fn generated(&self) -> &[Signal] {
        &self.generated
    }

    /// The player's inputs for the current round.
    #[must_use]
    pub fn player(&self) -> &[Signal] {
        &self.player
    }

    /// Rounds completed in the current game.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Highest level reached during this state's lifetime.
    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    /// Append a newly drawn signal and begin a new round.
    pub fn extend(&mut self, signal: Signal) {
        self.generated.push(signal);
        self.player.clear();
    }

    /// Record a player input and check it against the generated sequence.
    ///
    /// Inputs past the end of the generated sequence are rejected as a
    /// mismatch without being recorded.
    pub fn record_input(&mut self, signal: Signal) -> InputCheck {
        let position = self.player.len();
        let Some(&expected) = self.generated.get(position) else {
            return InputCheck::Mismatch;
        };

        self.player.push(signal);

        if signal != expected {
            InputCheck::Mismatch
        } else if self.player.len() < self.generated.len() {
            InputCheck::Incomplete
        } else {
            InputCheck::Complete
        }
    }

    /// Count a completed round and return the new level.
    pub fn complete_round(&mut self) -> u32 {
        self.level = self.level.saturating_add(1);
        self.high_score = self.high_score.max(self.level);
        self.level
    }

    /// Check that this round could have been produced by an engine in `state`.
    pub fn validate(&self, state: GameState) -> Result<(), EngineError> {
        if self.player.len() > self.generated.len() {
            return Err(EngineError::InvalidSnapshot("player sequence longer than generated sequence"));
        }
        if !self.generated.starts_with(&self.player) {
            return Err(EngineError::InvalidSnapshot("player sequence diverges from generated sequence"));
        }
        if self.high_score < self.level {
            return Err(EngineError::InvalidSnapshot("high score below level"));
        }

        match state {
            GameState::Playing => {
                if self.generated.is_empty() {
                    return Err(EngineError::InvalidSnapshot("playing with an empty sequence"));
                }
                if self.generated.len() as u64 != u64::from(self.level) + 1 {
                    return Err(EngineError::InvalidSnapshot("level does not match sequence length"));
                }
            }
            GameState::Idle => {
                if !self.generated.is_empty() || self.level != 0 {
                    return Err(EngineError::InvalidSnapshot("idle with a round in progress"));
                }
            }
        }

        Ok(())
    }

    /// Clear both sequences and the level, keeping the high score.
    pub fn clear(&mut self) {
        self.generated.clear();
        self.player.clear();
        self.level = 0;
    }
}
