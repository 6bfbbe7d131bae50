//! Two-cadence ticker
//!
//! One scheduler owns both periodic cadences of a session - object spawning
//! and motion - and converts elapsed wall time into whole due ticks. The
//! cadences are independent (never chained) but cancel as a unit: ticks only
//! surface from [`Scheduler::advance`] on the caller's thread, so after
//! `stop()` returns no tick can fire, ever.

use crate::consts::MAX_TICKS_PER_ADVANCE;

/// Whole ticks owed for each cadence after an `advance`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DueTicks {
    pub spawn: u32,
    pub motion: u32,
}

/// Accumulator-driven scheduler for the spawn and motion cadences.
#[derive(Debug, Clone)]
pub struct Scheduler {
    spawn_period_ms: u64,
    motion_period_ms: u64,
    spawn_acc_ms: u64,
    motion_acc_ms: u64,
    running: bool,
}

impl Scheduler {
    /// Create a stopped scheduler with the given periods. Zero periods are
    /// bumped to 1ms so an accumulator can always drain.
    pub fn new(spawn_period_ms: u64, motion_period_ms: u64) -> Self {
        Self {
            spawn_period_ms: spawn_period_ms.max(1),
            motion_period_ms: motion_period_ms.max(1),
            spawn_acc_ms: 0,
            motion_acc_ms: 0,
            running: false,
        }
    }

    /// Begin ticking. Accumulators start empty so the first ticks land one
    /// full period after start.
    pub fn start(&mut self) {
        self.spawn_acc_ms = 0;
        self.motion_acc_ms = 0;
        self.running = true;
    }

    /// Cancel both cadences. Idempotent; subsequent `advance` calls report
    /// zero due ticks until `start` is called again.
    pub fn stop(&mut self) {
        self.running = false;
        self.spawn_acc_ms = 0;
        self.motion_acc_ms = 0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Feed elapsed time and collect the whole ticks now due per cadence.
    /// Each cadence is capped per advance to prevent a spiral of death after
    /// a long stall; the remainder stays in the accumulator.
    pub fn advance(&mut self, elapsed_ms: u64) -> DueTicks {
        if !self.running {
            return DueTicks::default();
        }

        self.spawn_acc_ms += elapsed_ms;
        self.motion_acc_ms += elapsed_ms;

        let spawn = drain(&mut self.spawn_acc_ms, self.spawn_period_ms);
        let motion = drain(&mut self.motion_acc_ms, self.motion_period_ms);
        DueTicks { spawn, motion }
    }
}

fn drain(acc_ms: &mut u64, period_ms: u64) -> u32 {
    let due = (*acc_ms / period_ms) as u32;
    let due = due.min(MAX_TICKS_PER_ADVANCE);
    *acc_ms -= u64::from(due) * period_ms;
    // A capped advance also forfeits its backlog
    if due == MAX_TICKS_PER_ADVANCE {
        *acc_ms = 0;
    }
    due
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stopped_scheduler_reports_nothing() {
        let mut scheduler = Scheduler::new(1000, 50);
        assert_eq!(scheduler.advance(10_000), DueTicks::default());
    }

    #[test]
    fn test_cadences_are_independent() {
        let mut scheduler = Scheduler::new(1000, 50);
        scheduler.start();

        // 100ms: two motion ticks, no spawn yet
        assert_eq!(scheduler.advance(100), DueTicks { spawn: 0, motion: 2 });
        // 900ms more: spawn fires once, motion 18 more times
        assert_eq!(scheduler.advance(900), DueTicks { spawn: 1, motion: 18 });
    }

    #[test]
    fn test_remainder_carries_over() {
        let mut scheduler = Scheduler::new(1000, 50);
        scheduler.start();

        assert_eq!(scheduler.advance(49), DueTicks { spawn: 0, motion: 0 });
        assert_eq!(scheduler.advance(1), DueTicks { spawn: 0, motion: 1 });
        assert_eq!(scheduler.advance(75), DueTicks { spawn: 0, motion: 1 });
        // The 25ms remainder plus 25ms completes the next period
        assert_eq!(scheduler.advance(25), DueTicks { spawn: 0, motion: 1 });
    }

    #[test]
    fn test_stall_is_capped() {
        let mut scheduler = Scheduler::new(1000, 50);
        scheduler.start();

        // A 10s stall would owe 200 motion ticks; capped, backlog dropped
        let due = scheduler.advance(10_000);
        assert_eq!(due.motion, MAX_TICKS_PER_ADVANCE);
        assert_eq!(due.spawn, 10);
        assert_eq!(scheduler.advance(0), DueTicks::default());
    }

    #[test]
    fn test_stop_is_idempotent_and_final() {
        let mut scheduler = Scheduler::new(1000, 50);
        scheduler.start();
        scheduler.advance(30); // Leave something in the accumulators

        scheduler.stop();
        scheduler.stop();
        assert!(!scheduler.is_running());
        assert_eq!(scheduler.advance(10_000), DueTicks::default());

        // Restart begins from empty accumulators
        scheduler.start();
        assert_eq!(scheduler.advance(49), DueTicks::default());
        assert_eq!(scheduler.advance(1).motion, 1);
    }
}
