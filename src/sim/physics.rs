//! Per-tick integration and screen-wrap topology
//!
//! All tuning constants are per-frame at 60 fps, so every step scales them
//! by the elapsed frame-equivalent (`dt * 60`). Drag is a per-frame
//! multiplicative factor and is exponentiated by the same amount, which
//! keeps the decay rate identical across frame rates.

use glam::Vec2;

use super::input::TickInput;
use super::state::{Player, World};
use crate::consts::*;
use crate::{heading_vector, normalize_degrees};

/// Elapsed frame-equivalents for a measured dt (seconds)
///
/// A dt above [`MAX_FRAME_DT`] means the process was suspended; rather than
/// integrate across the gap, the nominal 1/60 s step is substituted.
pub fn frame_scale(dt: f32) -> f32 {
    let dt = if dt > MAX_FRAME_DT { NOMINAL_DT } else { dt };
    dt * 60.0
}

/// Teleport a position to the opposite edge once its leading edge has fully
/// crossed a world boundary (torus topology)
pub fn wrap_position(pos: &mut Vec2, radius: f32, width: f32, height: f32) {
    if pos.x < -radius {
        pos.x = width + radius;
    } else if pos.x > width + radius {
        pos.x = -radius;
    }
    if pos.y < -radius {
        pos.y = height + radius;
    } else if pos.y > height + radius {
        pos.y = -radius;
    }
}

/// Advance all entities by `frames` frame-equivalents
///
/// Screen wrap applies to the player and asteroids only; bullets and hearts
/// run out their lifetimes instead (expiry is the resolver's job).
pub fn integrate(world: &mut World, input: &TickInput, frames: f32) {
    let (width, height) = (world.width, world.height);
    step_player(&mut world.player, input, frames, width, height);

    for asteroid in &mut world.asteroids {
        asteroid.pos += asteroid.vel * frames;
        asteroid.angle = normalize_degrees(asteroid.angle + asteroid.rotation_speed * frames);
        wrap_position(&mut asteroid.pos, asteroid.radius, width, height);
    }

    for bullet in &mut world.bullets {
        bullet.pos += bullet.vel * frames;
        bullet.life = (bullet.life - frames).max(0.0);
    }

    for heart in &mut world.hearts {
        heart.pos += heart.vel * frames;
        heart.life = (heart.life - frames).max(0.0);
    }
}

fn step_player(player: &mut Player, input: &TickInput, frames: f32, width: f32, height: f32) {
    // Heading: a joystick override wins outright, otherwise discrete impulses
    if let Some(angle) = input.rotation_override {
        player.angle = angle;
        player.rotation_direction = 0;
    } else {
        player.rotation_direction = match (input.rotate_left, input.rotate_right) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        };
        if input.rotate_left {
            player.angle -= PLAYER_ROTATION_SPEED * frames;
        }
        if input.rotate_right {
            player.angle += PLAYER_ROTATION_SPEED * frames;
        }
    }
    player.angle = normalize_degrees(player.angle);

    player.is_thrusting = input.thrust;
    if input.thrust {
        player.vel += heading_vector(player.angle) * PLAYER_THRUST * frames;
    }

    player.vel = player.vel.clamp_length_max(PLAYER_MAX_SPEED);
    player.vel *= PLAYER_DRAG.powf(frames);
    player.pos += player.vel * frames;

    player.invincible_timer = (player.invincible_timer - frames).max(0.0);
    wrap_position(&mut player.pos, player.radius, width, height);
}
