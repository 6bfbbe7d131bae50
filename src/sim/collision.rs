//! Paddle collision tests
//!
//! Everything is axis-aligned: objects and the paddle are rectangles, the
//! paddle sits in a fixed band at the bottom of the field, so a collision
//! is a vertical band check plus a horizontal span overlap.

use super::state::{FallingObject, Paddle};
use crate::tuning::Tuning;

/// True if the object's bottom edge has reached the top of the paddle band
pub fn in_paddle_band(object_y: f32, tuning: &Tuning) -> bool {
    object_y + tuning.object_size >= tuning.paddle_band_top()
}

/// True if the object's horizontal span intersects the paddle's span
pub fn spans_overlap(object_x: f32, paddle_x: f32, tuning: &Tuning) -> bool {
    object_x < paddle_x + tuning.paddle_width && object_x + tuning.object_size > paddle_x
}

/// Full collision test, evaluated after the position update
pub fn object_hits_paddle(object: &FallingObject, paddle: &Paddle, tuning: &Tuning) -> bool {
    in_paddle_band(object.y, tuning) && spans_overlap(object.x, paddle.x, tuning)
}

/// True once the object's top edge has passed the field bottom (a miss)
pub fn past_bottom(object_y: f32, tuning: &Tuning) -> bool {
    object_y >= tuning.field_height
}
