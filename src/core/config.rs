//! Engine timing configuration.
//!
//! Only `playback_delay` is used by the engine itself. The flash and glow
//! durations are carried for the presentation layer, which owns those
//! timers.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default delay before the newest signal of a round is played back.
pub const DEFAULT_PLAYBACK_DELAY: Duration = Duration::from_millis(1000);

/// Default length of the sustained glow on a playback flash.
pub const DEFAULT_GLOW_DURATION: Duration = Duration::from_millis(1000);

/// Default length of a single button flash.
pub const DEFAULT_FLASH_DURATION: Duration = Duration::from_millis(300);

/// Engine configuration.
///
/// Durations serialize as whole milliseconds:
///
/// ```
/// use echo_engine::core::EngineConfig;
///
/// let config: EngineConfig = serde_json::from_str(r#"{"playback_delay": 250}"#).unwrap();
/// assert_eq!(config.playback_delay.as_millis(), 250);
/// assert_eq!(config.flash_duration.as_millis(), 300);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Delay between a round starting and its newest signal being played.
    #[serde(with = "millis")]
    pub playback_delay: Duration,

    /// Sustained glow applied to playback flashes (not to player flashes).
    #[serde(with = "millis")]
    pub glow_duration: Duration,

    /// Time a flashed button stays lit.
    #[serde(with = "millis")]
    pub flash_duration: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            playback_delay: DEFAULT_PLAYBACK_DELAY,
            glow_duration: DEFAULT_GLOW_DURATION,
            flash_duration: DEFAULT_FLASH_DURATION,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with the default timings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the playback delay.
    #[must_use]
    pub fn with_playback_delay(mut self, delay: Duration) -> Self {
        self.playback_delay = delay;
        self
    }

    /// Set the playback glow duration.
    #[must_use]
    pub fn with_glow_duration(mut self, duration: Duration) -> Self {
        self.glow_duration = duration;
        self
    }

    /// Set the flash duration.
    #[must_use]
    pub fn with_flash_duration(mut self, duration: Duration) -> Self {
        self.flash_duration = duration;
        self
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(ms)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
