//! Astro Drop - a falling-object catch/dodge arcade core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, motion, collisions, scoring)
//! - `scheduler`: Two-cadence ticker (spawn + motion) driven by elapsed time
//! - `session`: Caller-owned game session (start/advance/on_tap/reset/stop)
//! - `storage`: Key-value blob store abstraction (memory + file backends)
//! - `collections`: Persisted mission/expedition lists
//! - `highscores`: Persisted leaderboard
//! - `tuning`: Data-driven game balance

pub mod collections;
pub mod highscores;
pub mod scheduler;
pub mod session;
pub mod sim;
pub mod storage;
pub mod tuning;

pub use collections::{Collection, CollectionEntry, CollectionStore};
pub use highscores::HighScores;
pub use scheduler::{DueTicks, Scheduler};
pub use session::Session;
pub use storage::{FileStore, KvStore, MemoryStore};
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_HEIGHT: f32 = 800.0;

    /// Falling object defaults
    pub const OBJECT_SIZE: f32 = 40.0;
    /// Fall distance per motion tick
    pub const FALL_SPEED: f32 = 10.0;
    /// Probability a spawned object is a hazard
    pub const HAZARD_CHANCE: f64 = 0.2;

    /// Paddle (rocket) defaults - fixed band at the bottom of the field
    pub const PADDLE_WIDTH: f32 = 80.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Horizontal displacement per tap
    pub const TAP_STEP: f32 = 30.0;

    /// Score awarded per collectible capture
    pub const REWARD: i64 = 10;
    /// Score deducted per missed collectible (penalty variant only)
    pub const MISS_PENALTY: i64 = 10;

    /// Ticker cadences
    pub const SPAWN_INTERVAL_MS: u64 = 1000;
    pub const MOTION_INTERVAL_MS: u64 = 50;

    /// Maximum ticks a cadence may fire in one advance (prevents spiral of death)
    pub const MAX_TICKS_PER_ADVANCE: u32 = 32;
}
