//! Data-driven game balance
//!
//! Everything the simulation treats as a knob lives here so variants
//! (e.g. the penalty-on-miss mode) are configuration, not code paths.
//! Persisted as a JSON blob through [`KvStore`].

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::storage::KvStore;

/// Tunable game parameters. All distances are in field units, all
/// cadences in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    // === Field geometry ===
    pub field_width: f32,
    pub field_height: f32,

    // === Falling objects ===
    pub object_size: f32,
    /// Vertical distance an object falls per motion tick
    pub fall_speed: f32,
    /// Probability a spawned object is a hazard (rest are collectibles)
    pub hazard_chance: f64,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Horizontal displacement per tap
    pub tap_step: f32,

    // === Scoring ===
    /// Points per collectible capture
    pub reward: i64,
    /// Deduct points when a collectible falls past the paddle
    pub penalize_missed_collectibles: bool,
    /// Deduction per missed collectible (only when the flag above is set)
    pub miss_penalty: i64,

    // === Ticker cadences ===
    pub spawn_interval_ms: u64,
    pub motion_interval_ms: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            object_size: OBJECT_SIZE,
            fall_speed: FALL_SPEED,
            hazard_chance: HAZARD_CHANCE,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            tap_step: TAP_STEP,
            reward: REWARD,
            penalize_missed_collectibles: false,
            miss_penalty: MISS_PENALTY,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            motion_interval_ms: MOTION_INTERVAL_MS,
        }
    }
}

impl Tuning {
    /// Storage key for the persisted tuning blob
    const STORAGE_KEY: &'static str = "astro_drop_tuning";

    /// Top of the paddle band (objects reaching this y can be caught)
    pub fn paddle_band_top(&self) -> f32 {
        self.field_height - self.paddle_height
    }

    /// Rightmost valid x for a falling object
    pub fn max_object_x(&self) -> f32 {
        self.field_width - self.object_size
    }

    /// Rightmost valid x for the paddle
    pub fn max_paddle_x(&self) -> f32 {
        self.field_width - self.paddle_width
    }

    /// Paddle x when centered (initial position)
    pub fn paddle_center_x(&self) -> f32 {
        (self.field_width - self.paddle_width) / 2.0
    }

    /// Load tuning from storage, falling back to defaults
    pub fn load(store: &dyn KvStore) -> Self {
        if let Some(json) = store.get(Self::STORAGE_KEY) {
            match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from storage");
                    return tuning;
                }
                Err(err) => log::warn!("Discarding corrupt tuning blob: {err}"),
            }
        }
        log::info!("Using default tuning");
        Self::default()
    }

    /// Save tuning to storage (best-effort)
    pub fn save(&self, store: &mut dyn KvStore) {
        match serde_json::to_string(self) {
            Ok(json) => {
                store.set(Self::STORAGE_KEY, &json);
                log::info!("Tuning saved");
            }
            Err(err) => log::warn!("Failed to serialize tuning: {err}"),
        }
    }
}
