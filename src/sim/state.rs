//! Game state and core simulation types
//!
//! All state that must be persisted for Continue/determinism lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Current phase of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Session created, ticker not yet started
    Idle,
    /// Active gameplay
    Running,
    /// A hazard was caught; nothing moves until reset
    GameOver,
}

/// Classification assigned at spawn time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Capture increases score
    Collectible,
    /// Capture ends the session
    Hazard,
}

/// A falling object entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FallingObject {
    pub id: u32,
    /// Horizontal position, fixed for the object's lifetime
    pub x: f32,
    /// Vertical position, 0 at the top of the field, grows each motion tick
    pub y: f32,
    pub kind: ObjectKind,
}

impl FallingObject {
    /// Center of the object's square (render/steering consumers)
    pub fn center(&self, tuning: &Tuning) -> Vec2 {
        Vec2::new(
            self.x + tuning.object_size / 2.0,
            self.y + tuning.object_size / 2.0,
        )
    }
}

/// The player's paddle (the rocket), fixed to a band at the bottom of
/// the field. Only its horizontal position changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
}

impl Paddle {
    /// Paddle centered in the field
    pub fn centered(tuning: &Tuning) -> Self {
        Self {
            x: tuning.paddle_center_x(),
        }
    }

    /// Center of the paddle rectangle
    pub fn center(&self, tuning: &Tuning) -> Vec2 {
        Vec2::new(
            self.x + tuning.paddle_width / 2.0,
            tuning.paddle_band_top() + tuning.paddle_height / 2.0,
        )
    }

    /// Apply a tap: left half of the field nudges the paddle left by
    /// `tap_step`, right half nudges it right. Clamped to the field.
    pub fn tap(&mut self, tap_x: f32, tuning: &Tuning) {
        let step = if tap_x < tuning.field_width / 2.0 {
            -tuning.tap_step
        } else {
            tuning.tap_step
        };
        self.x = (self.x + step).clamp(0.0, tuning.max_paddle_x());
    }
}

/// Events produced by a motion tick, in resolution order. Consumers use
/// these for rendering, sound, and the game-over hand-off; resolutions
/// within one tick are commutative, so ordering carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A collectible was caught
    Scored { id: u32, points: i64 },
    /// An object fell past the field bottom uncaught
    Missed { id: u32 },
    /// A hazard was caught; `score` is the final score of the session
    GameOver { score: i64 },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG carried in place so a restored state resumes the same stream
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Score (non-negative; the miss penalty saturates at zero)
    pub score: i64,
    /// Motion tick counter
    pub time_ticks: u64,
    /// Player paddle
    pub paddle: Paddle,
    /// Live objects in spawn order (ids are monotonic)
    pub objects: Vec<FallingObject>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new idle game state with the given seed
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Idle,
            score: 0,
            time_ticks: 0,
            paddle: Paddle::centered(tuning),
            objects: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Restart after game over: clear the live set, zero the score,
    /// recenter the paddle, and resume running. The RNG stream continues
    /// so consecutive runs in one session differ.
    pub fn reset(&mut self, tuning: &Tuning) {
        self.objects.clear();
        self.score = 0;
        self.time_ticks = 0;
        self.paddle = Paddle::centered(tuning);
        self.phase = GamePhase::Running;
    }
}
