//! Collision detection and lifecycle resolution
//!
//! Detection runs against the post-integration positions in a fixed order:
//! bullets vs asteroids, player vs asteroids, player vs hearts, expiry.
//! Destructions and spawns are collected during detection and applied once
//! at the end, so an asteroid can be destroyed at most once per tick and a
//! rock that a bullet just shattered can never also ram the player.

use glam::Vec2;
use rand::Rng;

use super::spawn::{AsteroidSize, spawn_asteroid};
use super::state::{Asteroid, GamePhase, Heart, World};
use crate::consts::*;

/// Boundary-inclusive circle overlap test; touching circles collide
#[inline]
pub fn circles_overlap(pos_a: Vec2, radius_a: f32, pos_b: Vec2, radius_b: f32) -> bool {
    let sum = radius_a + radius_b;
    pos_a.distance_squared(pos_b) <= sum * sum
}

/// What one resolution pass did, for the progression check and callers' logs
#[derive(Debug, Clone, Copy, Default)]
pub struct Resolution {
    pub asteroids_destroyed: usize,
    pub children_spawned: usize,
    pub hearts_collected: usize,
}

/// Resolve all overlaps and lifecycle events for this tick
///
/// May transition the world to [`GamePhase::GameOver`] when the last life is
/// lost; that transition wins over any further respawn this tick.
pub fn resolve_collisions(world: &mut World, rng: &mut impl Rng) -> Resolution {
    let mut destroyed: Vec<u32> = Vec::new();
    let mut consumed_bullets: Vec<u32> = Vec::new();
    let mut children: Vec<Asteroid> = Vec::new();
    let mut dropped_hearts: Vec<Heart> = Vec::new();

    // Bullets vs asteroids. A bullet resolves at most one overlap; hitting
    // an asteroid something else already destroyed still consumes the
    // bullet but awards nothing.
    for b_idx in 0..world.bullets.len() {
        let (bullet_id, bullet_pos, bullet_radius) = {
            let b = &world.bullets[b_idx];
            (b.id, b.pos, b.radius)
        };
        for a_idx in 0..world.asteroids.len() {
            let (asteroid_id, pos, radius) = {
                let a = &world.asteroids[a_idx];
                (a.id, a.pos, a.radius)
            };
            if !circles_overlap(bullet_pos, bullet_radius, pos, radius) {
                continue;
            }
            consumed_bullets.push(bullet_id);
            if !destroyed.contains(&asteroid_id) {
                destroyed.push(asteroid_id);
                let (vel, size) = {
                    let a = &world.asteroids[a_idx];
                    (a.vel, a.size)
                };
                world.score += size.class().score;
                resolve_destruction(world, pos, vel, size, &mut children, &mut dropped_hearts, rng);
            }
            break;
        }
    }

    // Player vs asteroids, only while vulnerable. Collision tests use the
    // ship's position at the start of the pass; a mid-pass respawn does not
    // rescue it from other rocks already overlapping it this tick.
    if world.player.invincible_timer == 0.0 {
        let ship_pos = world.player.pos;
        let ship_radius = world.player.radius;
        for a_idx in 0..world.asteroids.len() {
            let (asteroid_id, pos, vel, radius, size) = {
                let a = &world.asteroids[a_idx];
                (a.id, a.pos, a.vel, a.radius, a.size)
            };
            if destroyed.contains(&asteroid_id)
                || !circles_overlap(ship_pos, ship_radius, pos, radius)
            {
                continue;
            }
            destroyed.push(asteroid_id);
            resolve_destruction(world, pos, vel, size, &mut children, &mut dropped_hearts, rng);

            if world.lives <= 1 {
                world.lives = 0;
                world.phase = GamePhase::GameOver;
                log::info!("ship destroyed with no lives left, game over");
                break;
            }
            world.lives -= 1;
            log::info!("ship destroyed, {} lives remaining", world.lives);
            world.respawn_player(PLAYER_INVINCIBILITY_FRAMES);
        }
    }

    // Hearts: expiry, then pickup by the (possibly respawned) ship
    let ship_pos = world.player.pos;
    let ship_radius = world.player.radius;
    let playing = world.phase == GamePhase::Playing;
    let mut hearts_collected = 0;
    let mut lives = world.lives;
    world.hearts.retain(|heart| {
        if heart.life <= 0.0 {
            return false;
        }
        if playing && circles_overlap(ship_pos, ship_radius, heart.pos, heart.radius) {
            lives = (lives + 1).min(MAX_LIVES);
            hearts_collected += 1;
            return false;
        }
        true
    });
    world.lives = lives;

    // Bullet expiry: lifetime over, consumed, or fully past a world edge
    // (bullets do not wrap)
    let (width, height) = (world.width, world.height);
    world.bullets.retain(|b| {
        b.life > 0.0
            && !consumed_bullets.contains(&b.id)
            && b.pos.x > -b.radius
            && b.pos.x < width + b.radius
            && b.pos.y > -b.radius
            && b.pos.y < height + b.radius
    });

    // Apply the asteroid set swap atomically: survivors plus new children
    let resolution = Resolution {
        asteroids_destroyed: destroyed.len(),
        children_spawned: children.len(),
        hearts_collected,
    };
    world.asteroids.retain(|a| !destroyed.contains(&a.id));
    world.asteroids.append(&mut children);
    world.hearts.append(&mut dropped_hearts);

    resolution
}

/// Shared destruction fate: split into kicked children, or maybe drop a heart
fn resolve_destruction(
    world: &mut World,
    pos: Vec2,
    vel: Vec2,
    size: AsteroidSize,
    children: &mut Vec<Asteroid>,
    hearts: &mut Vec<Heart>,
    rng: &mut impl Rng,
) {
    let bounds = Vec2::new(world.width, world.height);
    match size.split_child() {
        Some(child_size) => {
            let kick_speed = child_size.class().min_speed * SPLIT_KICK_FACTOR;
            for _ in 0..size.class().child_count {
                let kick_angle = rng.random::<f32>() * std::f32::consts::TAU;
                let child_vel =
                    vel * SPLIT_VELOCITY_FACTOR + Vec2::from_angle(kick_angle) * kick_speed;
                let id = world.next_entity_id();
                children.push(spawn_asteroid(
                    id,
                    child_size,
                    bounds,
                    Some(pos),
                    Some(child_vel),
                    rng,
                ));
            }
        }
        None => {
            if rng.random_bool(HEART_DROP_CHANCE) {
                let id = world.next_entity_id();
                hearts.push(Heart::new(id, pos));
            }
        }
    }
}
