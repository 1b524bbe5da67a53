//! Effects the engine asks the presentation layer to perform.
//!
//! - `Effect`: flash + sound, score update, game over
//! - `Effects`: the ordered batch returned by each engine call
//! - `Presenter`: trait implemented by whatever renders and plays audio
//! - `EffectDispatcher`: maps effects onto presenter calls
//!
//! ## Design Philosophy
//!
//! The engine returns effects instead of calling out. A UI can dispatch
//! them straight to a [`Presenter`], forward them over a channel, or a
//! test can simply compare them.

mod effect;
mod presenter;

pub use effect::{Effect, Effects};
pub use presenter::{DispatchResult, EffectDispatcher, PresentationError, Presenter};
