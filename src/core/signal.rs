//! The four-signal alphabet.
//!
//! Signals are addressed by a 0-based index in the order Red, Blue, Yellow,
//! Green. Presentation layers usually lay buttons out in that order and hand
//! the engine raw indices; [`Signal::try_from`] is the checked conversion.

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// One of the four colored signals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Signal {
    Red = 0,
    Blue = 1,
    Yellow = 2,
    Green = 3,
}

impl Signal {
    /// Number of signals in the alphabet.
    pub const COUNT: usize = 4;

    /// Every signal, in index order.
    pub const ALL: [Signal; Self::COUNT] = [Signal::Red, Signal::Blue, Signal::Yellow, Signal::Green];

    /// Get the raw 0-based index.
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Lowercase color name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Signal::Red => "red",
            Signal::Blue => "blue",
            Signal::Yellow => "yellow",
            Signal::Green => "green",
        }
    }

    /// Relative path of the sound asset conventionally played with this signal.
    ///
    /// ```
    /// use echo_engine::core::Signal;
    ///
    /// assert_eq!(Signal::Yellow.sound_asset(), "assets/yellow.mp3");
    /// ```
    #[must_use]
    pub const fn sound_asset(self) -> &'static str {
        match self {
            Signal::Red => "assets/red.mp3",
            Signal::Blue => "assets/blue.mp3",
            Signal::Yellow => "assets/yellow.mp3",
            Signal::Green => "assets/green.mp3",
        }
    }
}

impl TryFrom<u8> for Signal {
    type Error = EngineError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Signal::ALL
            .get(usize::from(index))
            .copied()
            .ok_or(EngineError::InvalidSignal(index))
    }
}

impl From<Signal> for u8 {
    fn from(signal: Signal) -> Self {
        signal.index()
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
