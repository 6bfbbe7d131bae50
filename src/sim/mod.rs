//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one motion tick = one fixed fall step)
//! - Seeded RNG only
//! - Stable iteration order (insertion order by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{object_hits_paddle, past_bottom, spans_overlap};
pub use spawn::spawn_tick;
pub use state::{FallingObject, GameEvent, GamePhase, GameState, ObjectKind, Paddle};
pub use tick::motion_tick;
