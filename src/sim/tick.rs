//! Fixed timestep motion tick
//!
//! Advances every live object, resolves paddle collisions and misses, and
//! reports what happened as events. Pure with respect to its inputs: the
//! caller decides cadence, rendering, and the game-over hand-off.

use super::collision::{object_hits_paddle, past_bottom};
use super::state::{GameEvent, GamePhase, GameState, ObjectKind};
use crate::tuning::Tuning;

/// How a single object left the live set this tick
enum Resolution {
    Falling,
    CapturedScored,
    CapturedFatal,
    Missed,
}

/// Advance the simulation by one motion tick.
///
/// Every live object falls by exactly `fall_speed`, then each is resolved
/// independently: caught collectibles score, a caught hazard ends the
/// session, objects past the field bottom are misses. Resolutions within a
/// tick are commutative - captures still score in the tick that also
/// catches a hazard. Returns an empty event list (and mutates nothing)
/// unless the session is running.
pub fn motion_tick(state: &mut GameState, tuning: &Tuning) -> Vec<GameEvent> {
    if state.phase != GamePhase::Running {
        return Vec::new();
    }

    state.time_ticks += 1;

    for object in &mut state.objects {
        object.y += tuning.fall_speed;
    }

    let mut events = Vec::new();
    let mut fatal = false;

    // Resolve in insertion order; order is not observable in the final
    // score because each resolution touches disjoint state.
    let paddle = state.paddle;
    let mut score = state.score;
    state.objects.retain(|object| {
        let resolution = if object_hits_paddle(object, &paddle, tuning) {
            match object.kind {
                ObjectKind::Collectible => Resolution::CapturedScored,
                ObjectKind::Hazard => Resolution::CapturedFatal,
            }
        } else if past_bottom(object.y, tuning) {
            Resolution::Missed
        } else {
            Resolution::Falling
        };

        match resolution {
            Resolution::Falling => true,
            Resolution::CapturedScored => {
                score += tuning.reward;
                events.push(GameEvent::Scored {
                    id: object.id,
                    points: tuning.reward,
                });
                false
            }
            Resolution::CapturedFatal => {
                fatal = true;
                false
            }
            Resolution::Missed => {
                if tuning.penalize_missed_collectibles && object.kind == ObjectKind::Collectible {
                    score = (score - tuning.miss_penalty).max(0);
                }
                events.push(GameEvent::Missed { id: object.id });
                false
            }
        }
    });
    state.score = score;

    if fatal {
        state.phase = GamePhase::GameOver;
        log::debug!("game over at tick {} with score {}", state.time_ticks, state.score);
        events.push(GameEvent::GameOver { score: state.score });
    }

    events
}
