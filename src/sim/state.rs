//! Game state and core simulation types
//!
//! Everything the render layer needs to draw a frame lives in [`World`];
//! the engine mutates it in place and callers read it back as a snapshot.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::spawn::AsteroidSize;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the start signal
    #[default]
    StartScreen,
    /// Active gameplay
    Playing,
    /// Run ended; the start signal begins a new game
    GameOver,
}

/// The player's ship
///
/// Recreated (never mutated in place) on game start and respawn, so no
/// velocity, heading, or timer state survives a lost life.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Heading in degrees, 0 = up, clockwise positive
    pub angle: f32,
    pub radius: f32,
    /// Whether thrust was applied this tick (drives the exhaust flame)
    pub is_thrusting: bool,
    /// Legacy discrete rotation intent: -1 left, 1 right, 0 none
    pub rotation_direction: i8,
    /// Collision immunity remaining, in frames; 0 = vulnerable
    pub invincible_timer: f32,
}

impl Player {
    pub fn new(id: u32, pos: Vec2, invincible_frames: f32) -> Self {
        Self {
            id,
            pos,
            vel: Vec2::ZERO,
            angle: 0.0,
            radius: PLAYER_SIZE / 2.0,
            is_thrusting: false,
            rotation_direction: 0,
            invincible_timer: invincible_frames,
        }
    }

    /// Ship hull offsets from center, nose up, for the render snapshot
    pub fn hull(&self) -> [Vec2; 4] {
        let s = PLAYER_SIZE;
        [
            Vec2::new(0.0, -s * 0.66),
            Vec2::new(s * 0.5, s * 0.33),
            Vec2::new(0.0, s * 0.15),
            Vec2::new(-s * 0.5, s * 0.33),
        ]
    }
}

/// A drifting rock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Current rotation in degrees, [0, 360)
    pub angle: f32,
    pub radius: f32,
    pub size: AsteroidSize,
    /// Spin in degrees/frame, fixed at spawn
    pub rotation_speed: f32,
    /// Jagged polygon outline as offsets from center, fixed at spawn
    pub vertices: Vec<Vec2>,
}

/// A fired projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub angle: f32,
    pub radius: f32,
    /// Frames until expiry
    pub life: f32,
}

/// An extra-life pickup dropped by small asteroids
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Heart {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub angle: f32,
    pub radius: f32,
    /// Frames until expiry
    pub life: f32,
}

impl Heart {
    pub fn new(id: u32, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            vel: Vec2::ZERO,
            angle: 0.0,
            radius: HEART_RADIUS,
            life: HEART_LIFESPAN_FRAMES,
        }
    }
}

/// The full mutable simulation state for one game session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// World bounds in world units; the playfield wraps at these edges
    pub width: f32,
    pub height: f32,
    pub phase: GamePhase,
    pub player: Player,
    pub asteroids: Vec<Asteroid>,
    pub bullets: Vec<Bullet>,
    pub hearts: Vec<Heart>,
    /// Monotonically increasing
    pub score: u64,
    /// Bounded to [0, MAX_LIVES]; 0 coincides with GameOver
    pub lives: u8,
    /// 1-based, monotonically non-decreasing within a game
    pub wave: u32,
    /// Frames until the next automatic shot
    pub fire_cooldown: f32,
    next_id: u32,
}

impl World {
    /// Create a world on the start screen with the given bounds
    pub fn new(width: f32, height: f32) -> Self {
        let mut world = Self {
            width,
            height,
            phase: GamePhase::StartScreen,
            player: Player::new(0, Vec2::ZERO, 0.0),
            asteroids: Vec::new(),
            bullets: Vec::new(),
            hearts: Vec::new(),
            score: 0,
            lives: INITIAL_LIVES,
            wave: 1,
            fire_cooldown: 0.0,
            next_id: 1,
        };
        let id = world.next_entity_id();
        world.player = Player::new(id, world.center(), 0.0);
        world
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// The player's fixed restart position
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Replace the player with a fresh ship at world center
    ///
    /// All kinematic state is discarded; only the immunity window is set.
    pub fn respawn_player(&mut self, invincible_frames: f32) {
        let id = self.next_entity_id();
        self.player = Player::new(id, self.center(), invincible_frames);
    }
}
