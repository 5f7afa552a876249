//! Entity factory: procedural asteroids and wave spawning
//!
//! Asteroids are built from a fixed size-class table: radius, outline vertex
//! count, score value, speed range, and split child count are all functions
//! of size alone. The jagged outline is rolled once at creation and never
//! regenerated.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::circles_overlap;
use super::state::{Asteroid, World};
use crate::consts::*;
use crate::deg_to_rad;

/// Asteroid size class; splitting strictly decreases size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AsteroidSize {
    Small,
    Medium,
    Large,
}

/// Per-size configuration
#[derive(Debug, Clone, Copy)]
pub struct SizeClass {
    pub radius: f32,
    pub vertex_count: usize,
    pub score: u64,
    pub min_speed: f32,
    pub max_speed: f32,
    pub child_count: u32,
}

const LARGE: SizeClass = SizeClass {
    radius: 50.0,
    vertex_count: 12,
    score: 20,
    min_speed: 0.5,
    max_speed: 1.5,
    child_count: 2,
};

const MEDIUM: SizeClass = SizeClass {
    radius: 25.0,
    vertex_count: 10,
    score: 50,
    min_speed: 0.8,
    max_speed: 2.0,
    child_count: 2,
};

const SMALL: SizeClass = SizeClass {
    radius: 12.0,
    vertex_count: 8,
    score: 100,
    min_speed: 1.0,
    max_speed: 2.5,
    child_count: 0,
};

impl AsteroidSize {
    /// Look up the fixed configuration for this size
    pub const fn class(self) -> &'static SizeClass {
        match self {
            AsteroidSize::Large => &LARGE,
            AsteroidSize::Medium => &MEDIUM,
            AsteroidSize::Small => &SMALL,
        }
    }

    /// The size produced when this size splits; Small is terminal
    pub const fn split_child(self) -> Option<AsteroidSize> {
        match self {
            AsteroidSize::Large => Some(AsteroidSize::Medium),
            AsteroidSize::Medium => Some(AsteroidSize::Small),
            AsteroidSize::Small => None,
        }
    }
}

/// Generate a jagged polygon outline as offsets from center
///
/// One point per equally spaced angle, at a radius jittered by the
/// jaggedness factor: `radius * (1 - j/2 + uniform(0, j))`.
pub fn generate_vertices(
    radius: f32,
    vertex_count: usize,
    jaggedness: f32,
    rng: &mut impl Rng,
) -> Vec<Vec2> {
    (0..vertex_count)
        .map(|i| {
            let angle = (i as f32 / vertex_count as f32) * std::f32::consts::TAU;
            let r = radius * (1.0 - jaggedness / 2.0 + rng.random::<f32>() * jaggedness);
            Vec2::new(r * angle.cos(), r * angle.sin())
        })
        .collect()
}

/// Build an asteroid of the given size
///
/// Position defaults to uniform-random within `bounds`; velocity defaults to
/// a uniform-random heading at a speed in the size class's range. Split
/// children pass both explicitly.
pub fn spawn_asteroid(
    id: u32,
    size: AsteroidSize,
    bounds: Vec2,
    pos: Option<Vec2>,
    vel: Option<Vec2>,
    rng: &mut impl Rng,
) -> Asteroid {
    let class = size.class();
    let pos = pos.unwrap_or_else(|| {
        Vec2::new(
            rng.random::<f32>() * bounds.x,
            rng.random::<f32>() * bounds.y,
        )
    });
    let vel = vel.unwrap_or_else(|| {
        let heading = deg_to_rad(rng.random::<f32>() * 360.0);
        let speed = rng.random_range(class.min_speed..class.max_speed);
        Vec2::new(heading.cos(), heading.sin()) * speed
    });

    Asteroid {
        id,
        pos,
        vel,
        angle: rng.random::<f32>() * 360.0,
        radius: class.radius,
        size,
        rotation_speed: rng.random_range(-ASTEROID_MAX_SPIN..ASTEROID_MAX_SPIN),
        vertices: generate_vertices(class.radius, class.vertex_count, ASTEROID_JAGGEDNESS, rng),
    }
}

/// Asteroid count for a given wave number (1-based)
pub fn wave_asteroid_count(wave: u32) -> u32 {
    let scaled = INITIAL_ASTEROID_COUNT + (wave - 1) * WAVE_ASTEROID_INCREMENT;
    scaled.min(WAVE_ASTEROID_BASE_CAP + (wave - 1))
}

/// Spawn a batch of top-size asteroids, keeping clear of the safe zone
///
/// Placement retries are capped: after [`SPAWN_PLACEMENT_ATTEMPTS`] failed
/// candidates the last one is accepted regardless of overlap, so spawning
/// can never stall.
pub fn spawn_wave(world: &mut World, count: u32, rng: &mut impl Rng) {
    let bounds = Vec2::new(world.width, world.height);
    let safe_center = world.center();

    for _ in 0..count {
        let id = world.next_entity_id();
        let mut asteroid = spawn_asteroid(id, AsteroidSize::Large, bounds, None, None, rng);
        let mut attempts = 0;
        while circles_overlap(asteroid.pos, asteroid.radius, safe_center, SAFE_ZONE_RADIUS) {
            attempts += 1;
            if attempts > SPAWN_PLACEMENT_ATTEMPTS {
                log::warn!("asteroid placement retries exhausted, accepting overlap");
                break;
            }
            asteroid.pos = Vec2::new(
                rng.random::<f32>() * bounds.x,
                rng.random::<f32>() * bounds.y,
            );
        }
        world.asteroids.push(asteroid);
    }
    log::debug!("spawned {} asteroids for wave {}", count, world.wave);
}
