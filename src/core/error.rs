//! Engine error type.

use thiserror::Error;

/// Errors surfaced by the engine's checked entry points.
///
/// The state machine itself never fails; only conversions from raw,
/// presentation-supplied values can.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A raw signal index outside the four-signal alphabet.
    #[error("signal index {0} is out of range (expected 0..4)")]
    InvalidSignal(u8),

    /// A snapshot whose round state contradicts its game state.
    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(&'static str),
}
