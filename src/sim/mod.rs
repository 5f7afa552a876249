//! Simulation engine
//!
//! All gameplay logic lives here. The module owns the [`World`] aggregate
//! and advances it one tick at a time:
//! - Variable dt, scaled to frame-equivalents at 60 fps
//! - All randomness through a caller-supplied `Rng`
//! - Two-phase collision resolution (detect, then apply atomically)
//! - No rendering or platform dependencies

pub mod collision;
pub mod input;
pub mod physics;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Resolution, circles_overlap, resolve_collisions};
pub use input::{TickInput, joystick_rotation_override};
pub use spawn::{AsteroidSize, SizeClass, spawn_asteroid, spawn_wave, wave_asteroid_count};
pub use state::{Asteroid, Bullet, GamePhase, Heart, Player, World};
pub use tick::tick;
