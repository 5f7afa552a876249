//! Retro Asteroids - a screen-wrapping asteroids arcade simulation
//!
//! Core modules:
//! - `sim`: the simulation engine (physics, collisions, entity lifecycle,
//!   game state machine)
//!
//! Rendering and input devices live outside this crate: callers feed
//! normalized control signals into [`sim::tick`] once per frame and read the
//! resulting [`sim::World`] snapshot back out. The engine knows nothing
//! about pixels, SVG paths, or touch events.

pub mod sim;

pub use sim::{GamePhase, TickInput, World, tick};

use glam::Vec2;

/// Game tuning constants
///
/// All speeds, accelerations, and timers are expressed per frame at a
/// nominal 60 fps; the integrator scales them by `dt * 60` so behavior is
/// independent of the actual frame rate.
pub mod consts {
    /// Nominal simulation step (seconds) substituted when a frame gap is
    /// too large to integrate
    pub const NOMINAL_DT: f32 = 1.0 / 60.0;
    /// Any measured dt above this is treated as a scheduling gap
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Ship size in world units; collision radius is half of this
    pub const PLAYER_SIZE: f32 = 20.0;
    pub const PLAYER_THRUST: f32 = 0.1;
    pub const PLAYER_MAX_SPEED: f32 = 4.0;
    /// Discrete rotation rate (degrees/frame) for left/right control flags
    pub const PLAYER_ROTATION_SPEED: f32 = 5.0;
    /// Multiplicative velocity decay per frame
    pub const PLAYER_DRAG: f32 = 0.99;
    /// Collision immunity granted on spawn/respawn (frames, 2 s at 60 fps)
    pub const PLAYER_INVINCIBILITY_FRAMES: f32 = 120.0;

    pub const BULLET_SPEED: f32 = 7.0;
    pub const BULLET_RADIUS: f32 = 3.0;
    pub const BULLET_LIFESPAN_FRAMES: f32 = 70.0;
    /// Frames between shots; the weapon fires automatically whenever Playing
    pub const BULLET_COOLDOWN_FRAMES: f32 = 10.0;
    /// Muzzle offset from ship center, as a fraction of [`PLAYER_SIZE`]
    pub const BULLET_NOSE_OFFSET: f32 = 0.7;
    /// Fraction of the ship's velocity inherited by fired bullets
    pub const BULLET_MOMENTUM_FACTOR: f32 = 0.5;

    /// 0 = perfect circle, 1 = very jagged
    pub const ASTEROID_JAGGEDNESS: f32 = 0.4;
    /// Fraction of the parent's velocity split children keep
    pub const SPLIT_VELOCITY_FACTOR: f32 = 0.8;
    /// Split kick speed as a fraction of the child size class's min speed
    pub const SPLIT_KICK_FACTOR: f32 = 0.5;
    /// Asteroid spin is uniform in +/- this (degrees/frame)
    pub const ASTEROID_MAX_SPIN: f32 = 1.0;

    pub const INITIAL_ASTEROID_COUNT: u32 = 4;
    pub const WAVE_ASTEROID_INCREMENT: u32 = 1;
    pub const WAVE_ASTEROID_BASE_CAP: u32 = 7;
    /// No-spawn radius around the player's restart position
    pub const SAFE_ZONE_RADIUS: f32 = PLAYER_SIZE * 5.0;
    /// Placement retries before accepting an unsafe candidate
    pub const SPAWN_PLACEMENT_ATTEMPTS: u32 = 50;

    pub const INITIAL_LIVES: u8 = 3;
    pub const MAX_LIVES: u8 = 16;

    /// Chance a destroyed size-1 asteroid drops a heart
    pub const HEART_DROP_CHANCE: f64 = 0.1;
    pub const HEART_RADIUS: f32 = 10.0;
    /// Heart lifetime in frames (5 s at 60 fps)
    pub const HEART_LIFESPAN_FRAMES: f32 = 300.0;

    /// Joystick base radius in the input layer's coordinate space
    pub const JOYSTICK_BASE_RADIUS: f32 = 60.0;
    /// No rotation override while the nub is within this fraction of the base
    pub const JOYSTICK_DEAD_ZONE_RATIO: f32 = 0.1;
    /// Maximum nub displacement as a fraction of the base radius
    pub const JOYSTICK_MAX_DELTA_RATIO: f32 = 1.0;
}

/// Degrees to radians
#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * (std::f32::consts::PI / 180.0)
}

/// Normalize an angle into [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    angle.rem_euclid(360.0)
}

/// Unit vector for a heading angle (degrees, 0 = up, clockwise positive)
#[inline]
pub fn heading_vector(angle_deg: f32) -> Vec2 {
    let rad = deg_to_rad(angle_deg - 90.0);
    Vec2::new(rad.cos(), rad.sin())
}
