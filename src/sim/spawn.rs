//! Object spawner
//!
//! One new falling object per spawn tick, drawn from the state's seeded RNG
//! so runs are reproducible.

use rand::Rng;

use super::state::{FallingObject, GamePhase, GameState, ObjectKind};
use crate::tuning::Tuning;

/// Spawn one object at the top of the field: uniform random x across the
/// field, hazard with probability `hazard_chance`. No-op unless running.
pub fn spawn_tick(state: &mut GameState, tuning: &Tuning) {
    if state.phase != GamePhase::Running {
        return;
    }

    let x = state.rng.random_range(0.0..=tuning.max_object_x());
    let kind = if state.rng.random_bool(tuning.hazard_chance) {
        ObjectKind::Hazard
    } else {
        ObjectKind::Collectible
    };
    let id = state.next_entity_id();

    log::debug!("spawn {id}: {kind:?} at x={x:.1}");
    state.objects.push(FallingObject { id, x, y: 0.0, kind });
}
