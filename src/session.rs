//! Game session orchestrator
//!
//! A [`Session`] is the single owner of one run's state: the caller creates
//! it, feeds it elapsed time and taps, and reads snapshots back for
//! rendering. There are no globals and no background timers; everything
//! happens on the caller's thread, and the scheduler is cancelled before
//! any teardown or reset so nothing mutates state the caller has already
//! let go of.

use crate::scheduler::Scheduler;
use crate::sim::{GameEvent, GamePhase, GameState, motion_tick, spawn_tick};
use crate::tuning::Tuning;

/// One game session: state, ticker, and tuning.
#[derive(Debug, Clone)]
pub struct Session {
    state: GameState,
    scheduler: Scheduler,
    tuning: Tuning,
}

impl Session {
    /// Create an idle session. Call [`Session::start`] to begin play.
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let scheduler = Scheduler::new(tuning.spawn_interval_ms, tuning.motion_interval_ms);
        Self {
            state: GameState::new(seed, &tuning),
            scheduler,
            tuning,
        }
    }

    /// Begin play from Idle, or resume a stopped (not game-over) session.
    pub fn start(&mut self) {
        if self.state.phase == GamePhase::Idle {
            self.state.phase = GamePhase::Running;
        }
        if self.state.phase == GamePhase::Running {
            self.scheduler.start();
            log::info!("session started (seed {})", self.state.seed);
        }
    }

    /// Feed elapsed wall time; runs the due spawn and motion ticks and
    /// returns everything that happened. On game over the scheduler is
    /// cancelled immediately and remaining due ticks are discarded.
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<GameEvent> {
        let due = self.scheduler.advance(elapsed_ms);
        let mut events = Vec::new();

        for _ in 0..due.spawn {
            spawn_tick(&mut self.state, &self.tuning);
        }

        for _ in 0..due.motion {
            events.extend(motion_tick(&mut self.state, &self.tuning));
            if self.state.phase == GamePhase::GameOver {
                // Cancel before anything else observes the terminal state
                self.scheduler.stop();
                log::info!("game over, final score {}", self.state.score);
                break;
            }
        }

        events
    }

    /// Apply a tap at `tap_x`. Takes effect immediately: the next collision
    /// test reads the displaced paddle.
    pub fn on_tap(&mut self, tap_x: f32) {
        self.state.paddle.tap(tap_x, &self.tuning);
    }

    /// Restart after game over (or mid-run): scheduler stops first, then
    /// state is rebuilt and ticking resumes.
    pub fn reset(&mut self) {
        self.scheduler.stop();
        self.state.reset(&self.tuning);
        self.scheduler.start();
        log::info!("session reset");
    }

    /// Stop ticking without touching state (screen exit, app background).
    /// Idempotent; no tick fires after this returns.
    pub fn stop(&mut self) {
        self.scheduler.stop();
    }

    /// Read-only snapshot for the render collaborator.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running() && self.state.phase == GamePhase::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{FallingObject, ObjectKind};

    fn session() -> Session {
        Session::new(12345, Tuning::default())
    }

    #[test]
    fn test_idle_until_started() {
        let mut session = session();
        assert_eq!(session.state().phase, GamePhase::Idle);
        assert!(session.advance(5000).is_empty());
        assert!(session.state().objects.is_empty());

        session.start();
        assert_eq!(session.state().phase, GamePhase::Running);
        assert!(session.is_running());
    }

    #[test]
    fn test_advance_spawns_and_moves() {
        let mut session = session();
        session.start();

        // One full spawn period: one object, 20 motion ticks at 50ms
        session.advance(1000);
        assert_eq!(session.state().objects.len(), 1);
        assert_eq!(session.state().time_ticks, 20);
        // Spawns run before motion within an advance, so the new object
        // fell 20 ticks: still far above the paddle band
        assert_eq!(session.state().objects[0].y, 200.0);
    }

    #[test]
    fn test_game_over_cancels_ticker() {
        let mut session = session();
        session.start();

        // Plant a hazard about to land on the paddle
        let paddle_x = session.state().paddle.x;
        let id = session.state.next_entity_id();
        session.state.objects.push(FallingObject {
            id,
            x: paddle_x,
            y: 659.0,
            kind: ObjectKind::Hazard,
        });

        let events = session.advance(50);
        assert!(matches!(events.last(), Some(GameEvent::GameOver { .. })));
        assert_eq!(session.state().phase, GamePhase::GameOver);
        assert!(!session.is_running());

        // Further time does nothing until reset
        let ticks = session.state().time_ticks;
        assert!(session.advance(10_000).is_empty());
        assert_eq!(session.state().time_ticks, ticks);
    }

    #[test]
    fn test_reset_restarts_play() {
        let mut session = session();
        session.start();
        session.state.phase = GamePhase::GameOver;
        session.scheduler.stop();
        session.state.score = 80;

        session.reset();
        assert_eq!(session.state().phase, GamePhase::Running);
        assert_eq!(session.state().score, 0);
        assert!(session.is_running());

        // Ticking works again
        session.advance(1000);
        assert_eq!(session.state().objects.len(), 1);
    }

    #[test]
    fn test_stop_is_idempotent_and_preserves_state() {
        let mut session = session();
        session.start();
        session.advance(1000);
        let objects = session.state().objects.clone();
        let ticks = session.state().time_ticks;

        session.stop();
        session.stop();
        assert!(session.advance(5000).is_empty());
        assert_eq!(session.state().objects, objects);
        assert_eq!(session.state().time_ticks, ticks);
    }

    #[test]
    fn test_tap_applies_immediately() {
        let mut session = session();
        session.start();
        let before = session.state().paddle.x;
        session.on_tap(0.0);
        assert_eq!(session.state().paddle.x, before - 30.0);
    }
}
