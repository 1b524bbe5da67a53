//! Game engine integration tests.
//!
//! These tests drive the engine through whole games the way a
//! presentation layer would: begin, wait for playback, repeat the
//! sequence, and eventually miss.

use std::time::Duration;

use echo_engine::core::{EngineConfig, GameState, Signal};
use echo_engine::effects::{DispatchResult, Effect, EffectDispatcher, Effects, PresentationError, Presenter};
use echo_engine::engine::{GameEngine, Input, InputQueue};

const DELAY: Duration = Duration::from_millis(1000);

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn repeat_sequence(engine: &mut GameEngine) -> Effects {
    let sequence = engine.generated().to_vec();
    let mut last = Effects::new();
    for signal in sequence {
        last = engine.submit_signal(signal);
    }
    last
}

fn other_than(signal: Signal) -> Signal {
    Signal::ALL[(usize::from(signal.index()) + 1) % Signal::COUNT]
}

// =============================================================================
// Round Progression
// =============================================================================

/// Each completed round adds exactly one level and one signal.
#[test]
fn test_rounds_grow_by_one() {
    init_logging();
    let mut engine = GameEngine::new(EngineConfig::default(), 7);
    engine.start();

    for round in 1..=10u32 {
        let before = engine.generated().to_vec();
        let effects = repeat_sequence(&mut engine);

        assert_eq!(effects.last(), Some(&Effect::score(round)));
        assert_eq!(engine.level(), round);
        assert_eq!(engine.generated().len(), before.len() + 1);
        assert_eq!(&engine.generated()[..before.len()], before.as_slice());
        assert!(engine.player_sequence().is_empty());
    }

    assert_eq!(engine.high_score(), 10);
}

/// Two-round scenario: the right second round reaches level 2, a wrong
/// second input ends the game.
#[test]
fn test_two_round_scenario() {
    let mut engine = GameEngine::new(EngineConfig::default(), 11);
    engine.start();

    let a = engine.generated()[0];
    let effects = engine.submit_signal(a);
    assert_eq!(effects.as_slice(), &[Effect::player_flash(a), Effect::score(1)]);
    assert_eq!(engine.generated().len(), 2);
    let b = engine.generated()[1];

    // Branch 1: correct order.
    let mut winning = engine.clone();
    winning.submit_signal(a);
    let effects = winning.submit_signal(b);
    assert_eq!(effects.as_slice(), &[Effect::player_flash(b), Effect::score(2)]);
    assert_eq!(winning.level(), 2);

    // Branch 2: wrong second signal.
    let mut losing = engine;
    let wrong = other_than(b);
    assert_eq!(losing.submit_signal(a).as_slice(), &[Effect::player_flash(a)]);
    let effects = losing.submit_signal(wrong);
    assert_eq!(
        effects.as_slice(),
        &[Effect::player_flash(wrong), Effect::GameOver, Effect::score(0)]
    );
    assert_eq!(losing.level(), 0);
    assert_eq!(losing.high_score(), 1);
}

/// After a game over, everything but the high score is back to new.
#[test]
fn test_game_over_restores_initial_state() {
    let fresh = GameEngine::new(EngineConfig::default(), 5);
    let mut engine = fresh.clone();

    engine.start();
    for _ in 0..4 {
        repeat_sequence(&mut engine);
    }
    engine.advance(DELAY / 2);
    let wrong = other_than(engine.generated()[0]);
    let effects = engine.submit_signal(wrong);

    assert!(effects.contains(&Effect::GameOver));
    assert_eq!(engine.state(), fresh.state());
    assert_eq!(engine.level(), fresh.level());
    assert_eq!(engine.generated(), fresh.generated());
    assert_eq!(engine.player_sequence(), fresh.player_sequence());
    assert_eq!(engine.pending_playbacks(), 0);
    assert_eq!(engine.high_score(), 4);
}

/// The high score survives several games and only ever rises.
#[test]
fn test_high_score_across_games() {
    let mut engine = GameEngine::new(EngineConfig::default(), 99);
    let mut best = 0;

    for target in [3u32, 1, 5, 2] {
        engine.start();
        for _ in 0..target {
            repeat_sequence(&mut engine);
        }
        best = best.max(target);
        assert_eq!(engine.high_score(), best);

        let wrong = other_than(engine.generated()[0]);
        engine.submit_signal(wrong);
        assert_eq!(engine.state(), GameState::Idle);
        assert_eq!(engine.high_score(), best);
    }

    assert_eq!(engine.high_score(), 5);
}

// =============================================================================
// Guards
// =============================================================================

/// Begin while playing changes nothing.
#[test]
fn test_begin_is_idempotent() {
    let mut engine = GameEngine::new(EngineConfig::default(), 1);
    engine.start();
    repeat_sequence(&mut engine);
    let before = engine.snapshot();

    assert!(engine.start().is_empty());
    assert_eq!(engine.generated(), before.round.generated());
    assert_eq!(engine.level(), before.round.level());
    assert_eq!(engine.pending_playbacks(), before.playbacks.pending());
}

/// Input with no game running changes nothing.
#[test]
fn test_idle_input_ignored() {
    let mut engine = GameEngine::new(EngineConfig::default(), 1);

    for signal in Signal::ALL {
        assert!(engine.submit_signal(signal).is_empty());
    }
    assert_eq!(engine.state(), GameState::Idle);
    assert!(engine.generated().is_empty());
    assert!(engine.player_sequence().is_empty());
}

/// Playback scheduled before a game over never fires into the next game.
#[test]
fn test_playback_cancelled_by_game_over() {
    let mut engine = GameEngine::new(EngineConfig::default(), 21);
    engine.start();
    repeat_sequence(&mut engine);
    assert_eq!(engine.pending_playbacks(), 2);

    let wrong = other_than(engine.generated()[0]);
    engine.submit_signal(wrong);
    assert_eq!(engine.pending_playbacks(), 0);
    assert!(engine.advance(DELAY * 3).is_empty());
}

/// Each round's playback lands one playback delay after the round began.
#[test]
fn test_playback_timing() {
    let config = EngineConfig::new().with_playback_delay(Duration::from_millis(400));
    let mut engine = GameEngine::new(config, 31);
    let step = Duration::from_millis(100);

    engine.start();
    for round in 0..5 {
        let round_began = engine.now();

        let mut flashed = Vec::new();
        while flashed.is_empty() {
            flashed.extend(engine.advance(step).iter().filter_map(Effect::signal));
        }

        assert_eq!(engine.now() - round_began, Duration::from_millis(400));
        assert_eq!(flashed, vec![engine.generated()[round]]);
        repeat_sequence(&mut engine);
    }

    assert_eq!(engine.now(), Duration::from_millis(2000));
}

// =============================================================================
// Determinism
// =============================================================================

/// Same seed and same inputs produce the same effects.
#[test]
fn test_deterministic_replay() {
    let inputs = |engine: &GameEngine| -> Vec<Input> {
        engine.generated().iter().map(|s| Input::SignalActivated(s.index())).collect()
    };

    let mut engine1 = GameEngine::new(EngineConfig::default(), 12345);
    let mut engine2 = GameEngine::new(EngineConfig::default(), 12345);
    let mut log1 = Vec::new();
    let mut log2 = Vec::new();

    log1.extend(engine1.handle(Input::Begin));
    log2.extend(engine2.handle(Input::Begin));

    for _ in 0..8 {
        let mut queue1 = InputQueue::new();
        queue1.push(Input::Elapsed(DELAY));
        queue1.extend(inputs(&engine1));
        log1.extend(queue1.process(&mut engine1));

        let mut queue2 = InputQueue::new();
        queue2.push(Input::Elapsed(DELAY));
        queue2.extend(inputs(&engine2));
        log2.extend(queue2.process(&mut engine2));
    }

    assert_eq!(log1, log2);
    assert_eq!(engine1.generated(), engine2.generated());
    assert_eq!(engine1.level(), 8);
}

// =============================================================================
// Presentation
// =============================================================================

#[derive(Default)]
struct Screen {
    score: u32,
    flashes: Vec<(Signal, bool)>,
    sounds: Vec<Signal>,
    game_overs: u32,
}

impl Presenter for Screen {
    fn flash(&mut self, signal: Signal, glow: Option<Duration>) {
        self.flashes.push((signal, glow.is_some()));
    }

    fn play_sound(&mut self, signal: Signal) -> Result<(), PresentationError> {
        if signal == Signal::Green {
            return Err(PresentationError::Sound {
                signal,
                reason: "decoder error".to_string(),
            });
        }
        self.sounds.push(signal);
        Ok(())
    }

    fn show_score(&mut self, level: u32) {
        self.score = level;
    }

    fn game_over(&mut self) {
        self.game_overs += 1;
    }
}

/// A full game routed through a presenter, including failing sounds.
#[test]
fn test_presenter_drives_a_game() {
    init_logging();
    let mut engine = GameEngine::new(EngineConfig::default(), 8);
    let mut screen = Screen::default();
    let config = engine.config().clone();

    engine.start();
    for _ in 0..3 {
        let effects = engine.advance(DELAY);
        EffectDispatcher::dispatch(&mut screen, &effects, &config);
        let effects = repeat_sequence(&mut engine);
        EffectDispatcher::dispatch(&mut screen, &effects, &config);
    }
    assert_eq!(screen.score, 3);

    let wrong = other_than(engine.generated()[0]);
    let effects = engine.submit_signal(wrong);
    let results = EffectDispatcher::dispatch(&mut screen, &effects, &config);

    assert_eq!(screen.game_overs, 1);
    assert_eq!(screen.score, 0);
    assert_eq!(results.len(), 3);
    assert!(results[1..].iter().all(|r| *r == DispatchResult::Delivered));

    // Every flash was attempted; only green sounds are missing.
    assert!(screen.flashes.iter().any(|&(_, glow)| glow));
    let non_green = screen.flashes.iter().filter(|(s, _)| *s != Signal::Green).count();
    assert_eq!(screen.sounds.len(), non_green);
    assert_eq!(engine.high_score(), 3);
}
