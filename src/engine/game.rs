//! The game engine state machine.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{EngineConfig, EngineError, GameRng, GameRngState, GameState, InputCheck, RoundState, Signal};
use crate::effects::{Effect, Effects};
use crate::schedule::Scheduler;

use super::input::Input;

/// A deferred playback of one generated signal.
///
/// `generation` ties the task to the game that scheduled it; a task from
/// an earlier game is dropped when it fires even if cancellation missed it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackTask {
    /// Game generation the task was scheduled in.
    pub generation: u64,
    /// Index of the signal in the generated sequence.
    pub position: usize,
    /// The signal to play back.
    pub signal: Signal,
}

/// Memory-game engine.
///
/// Owns the generated and player sequences, the level and high score,
/// and the pending playback tasks. Every operation returns the effects
/// the presentation layer should perform, in order.
///
/// ## Lifecycle
///
/// ```text
/// Idle --start--> Playing --(wrong signal)--> Idle
///                 Playing --(round complete)--> Playing (sequence + 1)
/// ```
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use echo_engine::core::{EngineConfig, GameState};
/// use echo_engine::effects::Effect;
/// use echo_engine::engine::GameEngine;
///
/// let mut engine = GameEngine::new(EngineConfig::default(), 42);
/// engine.start();
/// assert_eq!(engine.state(), GameState::Playing);
///
/// // The first signal is played back after the playback delay.
/// let effects = engine.advance(Duration::from_millis(1000));
/// let first = engine.generated()[0];
/// assert_eq!(effects.as_slice(), &[Effect::playback_flash(first)]);
///
/// // Repeating it completes the round.
/// let effects = engine.submit_signal(first);
/// assert!(effects.contains(&Effect::score(1)));
/// assert_eq!(engine.generated().len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: EngineConfig,
    rng: GameRng,
    state: GameState,
    round: RoundState,
    playbacks: Scheduler<PlaybackTask>,
    /// Bumped on every start and reset.
    generation: u64,
}

impl GameEngine {
    /// Create an idle engine with a fixed seed.
    pub fn new(config: EngineConfig, seed: u64) -> Self {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Create an idle engine seeded from OS entropy.
    pub fn from_entropy(config: EngineConfig) -> Self {
        Self::with_rng(config, GameRng::from_entropy())
    }

    /// Create an idle engine drawing from the given RNG.
    pub fn with_rng(config: EngineConfig, rng: GameRng) -> Self {
        log::debug!("engine created with seed {}", rng.seed());
        Self {
            config,
            rng,
            state: GameState::Idle,
            round: RoundState::new(),
            playbacks: Scheduler::new(),
            generation: 0,
        }
    }

    // === Accessors ===

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Whether a game is in progress.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Rounds completed in the current game.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.round.level()
    }

    /// Highest level reached during this engine's lifetime.
    #[must_use]
    pub fn high_score(&self) -> u32 {
        self.round.high_score()
    }

    /// The sequence the player must reproduce.
    #[must_use]
    pub fn generated(&self) -> &[Signal] {
        self.round.generated()
    }

    /// The player's inputs for the current round.
    #[must_use]
    pub fn player_sequence(&self) -> &[Signal] {
        self.round.player()
    }

    /// Number of playbacks scheduled but not yet fired.
    #[must_use]
    pub fn pending_playbacks(&self) -> usize {
        self.playbacks.pending()
    }

    /// Virtual time elapsed through [`advance`](Self::advance).
    #[must_use]
    pub fn now(&self) -> Duration {
        self.playbacks.now()
    }

    // === Lifecycle ===

    /// Begin a new game.
    ///
    /// Does nothing while a game is already in progress, so repeated begin
    /// triggers cannot overlap rounds.
    pub fn start(&mut self) -> Effects {
        if self.state == GameState::Playing {
            log::debug!("start ignored: game already in progress");
            return Effects::new();
        }

        self.playbacks.cancel_all();
        self.generation = self.generation.wrapping_add(1);
        self.state = GameState::Playing;
        self.round.clear();
        log::info!("game {} started", self.generation);

        self.extend_sequence();
        Effects::new()
    }

    /// Handle one player input.
    ///
    /// Ignored unless a game is in progress.
    pub fn submit_signal(&mut self, signal: Signal) -> Effects {
        let mut effects = Effects::new();

        if self.state != GameState::Playing {
            log::debug!("input {signal} ignored: no game in progress");
            return effects;
        }

        let check = self.round.record_input(signal);
        effects.push(Effect::player_flash(signal));

        match check {
            InputCheck::Mismatch => {
                log::info!("game {} over at level {}", self.generation, self.round.level());
                effects.push(Effect::GameOver);
                effects.extend(self.reset());
            }
            InputCheck::Incomplete => {}
            InputCheck::Complete => {
                let level = self.round.complete_round();
                log::debug!("round complete, level {level} (high score {})", self.round.high_score());
                effects.push(Effect::score(level));
                self.extend_sequence();
            }
        }

        effects
    }

    /// Handle a raw button index from the presentation layer.
    pub fn submit_index(&mut self, index: u8) -> Result<Effects, EngineError> {
        let signal = Signal::try_from(index)?;
        Ok(self.submit_signal(signal))
    }

    /// End the current game.
    ///
    /// Cancels pending playback and clears the sequences and level. The
    /// high score is kept.
    pub fn reset(&mut self) -> Effects {
        let cancelled = self.playbacks.pending();
        self.playbacks.cancel_all();
        self.generation = self.generation.wrapping_add(1);
        self.round.clear();
        self.state = GameState::Idle;
        log::debug!("engine reset, {cancelled} pending playback(s) cancelled");

        let mut effects = Effects::new();
        effects.push(Effect::score(0));
        effects
    }

    /// Move the clock forward, firing playbacks that became due.
    pub fn advance(&mut self, elapsed: Duration) -> Effects {
        let mut effects = Effects::new();

        for task in self.playbacks.advance(elapsed) {
            if self.is_current(&task) {
                log::debug!("playing back {} at position {}", task.signal, task.position);
                effects.push(Effect::playback_flash(task.signal));
            } else {
                log::debug!("dropping stale playback from game {}", task.generation);
            }
        }

        effects
    }

    /// Dispatch a normalized inbound event.
    ///
    /// Out-of-range signal indices are logged and ignored.
    pub fn handle(&mut self, input: Input) -> Effects {
        match input {
            Input::Begin => self.start(),
            Input::SignalActivated(index) => match self.submit_index(index) {
                Ok(effects) => effects,
                Err(err) => {
                    log::warn!("rejected input: {err}");
                    Effects::new()
                }
            },
            Input::Elapsed(elapsed) => self.advance(elapsed),
        }
    }

    // === Snapshots ===

    /// Capture the full engine state.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            config: self.config.clone(),
            rng: self.rng.state(),
            state: self.state,
            round: self.round.clone(),
            playbacks: self.playbacks.clone(),
            generation: self.generation,
        }
    }

    /// Rebuild an engine from a snapshot.
    ///
    /// The restored engine continues exactly where the original left off,
    /// including future random draws and pending playbacks. Snapshots whose
    /// round state could not have been produced by the engine are rejected.
    pub fn try_from_snapshot(snapshot: EngineSnapshot) -> Result<Self, EngineError> {
        snapshot.round.validate(snapshot.state)?;
        if snapshot.state == GameState::Idle && snapshot.playbacks.pending() > 0 {
            return Err(EngineError::InvalidSnapshot("idle engine with pending playbacks"));
        }

        Ok(Self {
            config: snapshot.config,
            rng: GameRng::from_state(&snapshot.rng),
            state: snapshot.state,
            round: snapshot.round,
            playbacks: snapshot.playbacks,
            generation: snapshot.generation,
        })
    }

    // === Internals ===

    /// Draw the next signal, start a new round and schedule its playback.
    fn extend_sequence(&mut self) {
        let signal = self.rng.gen_signal();
        self.round.extend(signal);

        let position = self.round.generated().len() - 1;
        let handle = self.playbacks.schedule(
            self.config.playback_delay,
            PlaybackTask {
                generation: self.generation,
                position,
                signal,
            },
        );
        log::debug!("sequence extended with {signal} (length {}), playback {handle}", position + 1);
    }

    fn is_current(&self, task: &PlaybackTask) -> bool {
        self.state == GameState::Playing
            && task.generation == self.generation
            && self.round.generated().get(task.position) == Some(&task.signal)
    }
}

/// Serializable capture of a [`GameEngine`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub config: EngineConfig,
    pub rng: GameRngState,
    pub state: GameState,
    pub round: RoundState,
    pub playbacks: Scheduler<PlaybackTask>,
    pub generation: u64,
}
