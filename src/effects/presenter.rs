//! Delivering effects to a presentation layer.
//!
//! Presentation layers implement [`Presenter`]; [`EffectDispatcher`] maps
//! each [`Effect`] onto presenter calls. Delivery failures stop at the
//! dispatcher: they are logged and reported back, never fed into the
//! engine.

use std::time::Duration;

use thiserror::Error;

use crate::core::{EngineConfig, Signal};

use super::Effect;

/// Failure inside the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PresentationError {
    /// The sound for a signal could not be played.
    #[error("failed to play sound for {signal}: {reason}")]
    Sound { signal: Signal, reason: String },
}

/// Rendering and audio collaborator.
///
/// Flash timers (how long a button stays lit, how long a glow lasts)
/// belong to the implementor.
pub trait Presenter {
    /// Light up a signal's button.
    ///
    /// `glow` is `Some` for engine playback and `None` for player input.
    fn flash(&mut self, signal: Signal, glow: Option<Duration>);

    /// Play the sound associated with a signal.
    fn play_sound(&mut self, signal: Signal) -> Result<(), PresentationError>;

    /// Show the current level.
    fn show_score(&mut self, level: u32);

    /// Tell the player the game is over.
    fn game_over(&mut self);
}

/// Result of delivering one effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchResult {
    /// Every presenter call succeeded.
    Delivered,
    /// The flash was shown but the sound failed.
    SoundFailed(PresentationError),
}

/// Maps effects onto presenter calls.
pub struct EffectDispatcher;

impl EffectDispatcher {
    /// Deliver effects in order.
    pub fn dispatch<'a, P>(
        presenter: &mut P,
        effects: impl IntoIterator<Item = &'a Effect>,
        config: &EngineConfig,
    ) -> Vec<DispatchResult>
    where
        P: Presenter + ?Sized,
    {
        effects
            .into_iter()
            .map(|effect| Self::dispatch_single(presenter, effect, config))
            .collect()
    }

    /// Deliver one effect.
    pub fn dispatch_single<P>(presenter: &mut P, effect: &Effect, config: &EngineConfig) -> DispatchResult
    where
        P: Presenter + ?Sized,
    {
        match *effect {
            Effect::SignalFeedback { signal, is_sequence_playback } => {
                let glow = is_sequence_playback.then_some(config.glow_duration);
                presenter.flash(signal, glow);
                match presenter.play_sound(signal) {
                    Ok(()) => DispatchResult::Delivered,
                    Err(err) => {
                        log::warn!("{err}");
                        DispatchResult::SoundFailed(err)
                    }
                }
            }
            Effect::ScoreChanged { level } => {
                presenter.show_score(level);
                DispatchResult::Delivered
            }
            Effect::GameOver => {
                presenter.game_over();
                DispatchResult::Delivered
            }
        }
    }
}
