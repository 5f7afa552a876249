//! Normalized control input
//!
//! The engine never sees keyboards or touch events; the hosting layer
//! collapses whatever devices it has into a [`TickInput`] per frame.

use glam::Vec2;

use crate::consts::*;
use crate::normalize_degrees;

/// Control signals sampled for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
    /// Absolute heading (degrees) from an analog pointer/joystick, already
    /// past its dead zone; overrides the discrete rotation flags
    pub rotation_override: Option<f32>,
    /// Start a new game (only observed on the start and game-over screens)
    pub start: bool,
}

/// Translate a raw joystick nub offset into a heading override
///
/// The offset is clamped to the joystick's maximum deflection; inside the
/// dead zone there is no override and the discrete flags apply instead.
/// Heading is `atan2` of the offset rotated so that "up" is 0 degrees.
pub fn joystick_rotation_override(delta: Vec2) -> Option<f32> {
    let max_delta = JOYSTICK_BASE_RADIUS * JOYSTICK_MAX_DELTA_RATIO;
    let delta = delta.clamp_length_max(max_delta);

    let dead_zone = JOYSTICK_BASE_RADIUS * JOYSTICK_DEAD_ZONE_RATIO;
    if delta.length() > dead_zone {
        Some(normalize_degrees(
            delta.y.atan2(delta.x).to_degrees() + 90.0,
        ))
    } else {
        None
    }
}
