//! Tick orchestrator and game state machine
//!
//! One call per rendered frame: input sampling, integration, automatic
//! fire, collision resolution, progression check. Outside `Playing` the
//! simulation stages are no-ops and only the start signal is observed.

use rand::Rng;

use super::collision::resolve_collisions;
use super::input::TickInput;
use super::physics::{frame_scale, integrate};
use super::spawn::{spawn_wave, wave_asteroid_count};
use super::state::{Bullet, GamePhase, World};
use crate::consts::*;
use crate::heading_vector;

/// Advance the world by one frame of elapsed time `dt` (seconds)
pub fn tick(world: &mut World, input: &TickInput, dt: f32, rng: &mut impl Rng) {
    match world.phase {
        GamePhase::StartScreen | GamePhase::GameOver => {
            if input.start {
                start_game(world, rng);
            }
            return;
        }
        GamePhase::Playing => {}
    }

    let frames = frame_scale(dt);
    integrate(world, input, frames);
    fire_weapon(world, frames);
    let resolution = resolve_collisions(world, rng);

    // Board clear: no survivors and nothing split this tick. Next wave
    // spawns immediately with a brief grace period, not a full reset.
    if world.phase == GamePhase::Playing
        && world.asteroids.is_empty()
        && resolution.children_spawned == 0
    {
        world.wave += 1;
        let count = wave_asteroid_count(world.wave);
        log::info!("wave {} cleared, spawning {} asteroids", world.wave - 1, count);
        spawn_wave(world, count, rng);
        world.player.invincible_timer = PLAYER_INVINCIBILITY_FRAMES / 2.0;
    }
}

/// Start a fresh game from the start or game-over screen
fn start_game(world: &mut World, rng: &mut impl Rng) {
    world.score = 0;
    world.lives = INITIAL_LIVES;
    world.wave = 1;
    world.asteroids.clear();
    world.bullets.clear();
    world.hearts.clear();
    world.fire_cooldown = 0.0;
    world.respawn_player(PLAYER_INVINCIBILITY_FRAMES);
    spawn_wave(world, wave_asteroid_count(1), rng);
    world.phase = GamePhase::Playing;
    log::info!(
        "game started: {} lives, wave 1, {} asteroids",
        world.lives,
        world.asteroids.len()
    );
}

/// Fully automatic weapon: fires from the ship's nose whenever the cooldown
/// has run out, inheriting half the ship's momentum
fn fire_weapon(world: &mut World, frames: f32) {
    if world.fire_cooldown <= 0.0 {
        world.fire_cooldown = BULLET_COOLDOWN_FRAMES;
        let id = world.next_entity_id();
        let heading = heading_vector(world.player.angle);
        let player = &world.player;
        world.bullets.push(Bullet {
            id,
            pos: player.pos + heading * (PLAYER_SIZE * BULLET_NOSE_OFFSET),
            vel: heading * BULLET_SPEED + player.vel * BULLET_MOMENTUM_FACTOR,
            angle: player.angle,
            radius: BULLET_RADIUS,
            life: BULLET_LIFESPAN_FRAMES,
        });
    }
    // The cooldown runs every tick, firing or not
    world.fire_cooldown = (world.fire_cooldown - frames).max(0.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::collision::circles_overlap;
    use crate::sim::spawn::{AsteroidSize, spawn_asteroid};
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(2024)
    }

    fn start_input() -> TickInput {
        TickInput {
            start: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_start_signal_begins_game() {
        let mut world = World::new(800.0, 600.0);
        let mut rng = rng();
        tick(&mut world, &start_input(), NOMINAL_DT, &mut rng);

        assert_eq!(world.phase, GamePhase::Playing);
        assert_eq!(world.lives, INITIAL_LIVES);
        assert_eq!(world.score, 0);
        assert_eq!(world.wave, 1);
        assert_eq!(world.asteroids.len(), wave_asteroid_count(1) as usize);
        assert_eq!(wave_asteroid_count(1), INITIAL_ASTEROID_COUNT);
        assert_eq!(world.player.invincible_timer, PLAYER_INVINCIBILITY_FRAMES);
        for a in &world.asteroids {
            assert_eq!(a.size, AsteroidSize::Large);
            assert!(!circles_overlap(
                a.pos,
                a.radius,
                world.center(),
                SAFE_ZONE_RADIUS
            ));
        }
    }

    #[test]
    fn test_no_simulation_outside_playing() {
        let mut world = World::new(800.0, 600.0);
        let mut rng = rng();
        tick(&mut world, &TickInput::default(), NOMINAL_DT, &mut rng);
        assert_eq!(world.phase, GamePhase::StartScreen);
        assert!(world.bullets.is_empty());
        assert!(world.asteroids.is_empty());
    }

    #[test]
    fn test_restart_from_game_over_resets_everything() {
        let mut world = World::new(800.0, 600.0);
        let mut rng = rng();
        world.phase = GamePhase::GameOver;
        world.score = 9999;
        world.lives = 0;
        world.wave = 7;
        let id = world.next_entity_id();
        world.hearts.push(crate::sim::Heart::new(id, Vec2::ZERO));

        tick(&mut world, &start_input(), NOMINAL_DT, &mut rng);

        assert_eq!(world.phase, GamePhase::Playing);
        assert_eq!(world.score, 0);
        assert_eq!(world.lives, INITIAL_LIVES);
        assert_eq!(world.wave, 1);
        assert!(world.hearts.is_empty());
        assert!(world.bullets.is_empty());
    }

    #[test]
    fn test_weapon_fires_on_cooldown_cadence() {
        let mut world = World::new(800.0, 600.0);
        let mut rng = rng();
        world.phase = GamePhase::Playing;
        // Park a rock far from the line of fire so the board never clears
        let id = world.next_entity_id();
        let a = spawn_asteroid(
            id,
            AsteroidSize::Large,
            Vec2::new(800.0, 600.0),
            Some(Vec2::new(750.0, 550.0)),
            Some(Vec2::ZERO),
            &mut rng,
        );
        world.asteroids.push(a);

        tick(&mut world, &TickInput::default(), NOMINAL_DT, &mut rng);
        assert_eq!(world.bullets.len(), 1);

        // Cooldown holds fire for the next 9 frames
        for _ in 0..9 {
            tick(&mut world, &TickInput::default(), NOMINAL_DT, &mut rng);
        }
        assert_eq!(world.bullets.len(), 1);

        tick(&mut world, &TickInput::default(), NOMINAL_DT, &mut rng);
        assert_eq!(world.bullets.len(), 2);
    }

    #[test]
    fn test_bullet_spawns_at_nose_with_inherited_momentum() {
        let mut world = World::new(800.0, 600.0);
        world.phase = GamePhase::Playing;
        world.player.vel = Vec2::new(2.0, 0.0);
        fire_weapon(&mut world, 1.0);

        let bullet = &world.bullets[0];
        let expected_pos =
            world.player.pos + heading_vector(0.0) * (PLAYER_SIZE * BULLET_NOSE_OFFSET);
        assert!((bullet.pos - expected_pos).length() < 1e-4);
        let expected_vel = heading_vector(0.0) * BULLET_SPEED + Vec2::new(1.0, 0.0);
        assert!((bullet.vel - expected_vel).length() < 1e-4);
    }

    #[test]
    fn test_board_clear_advances_wave_with_grace_period() {
        let mut world = World::new(800.0, 600.0);
        let mut rng = rng();
        world.phase = GamePhase::Playing;
        world.player.invincible_timer = PLAYER_INVINCIBILITY_FRAMES;
        // Last small rock with a bullet sitting on it
        let id = world.next_entity_id();
        let a = spawn_asteroid(
            id,
            AsteroidSize::Small,
            Vec2::new(800.0, 600.0),
            Some(Vec2::new(100.0, 100.0)),
            Some(Vec2::ZERO),
            &mut rng,
        );
        world.asteroids.push(a);
        let bid = world.next_entity_id();
        world.bullets.push(Bullet {
            id: bid,
            pos: Vec2::new(100.0, 100.0),
            vel: Vec2::ZERO,
            angle: 0.0,
            radius: BULLET_RADIUS,
            life: BULLET_LIFESPAN_FRAMES,
        });

        tick(&mut world, &TickInput::default(), NOMINAL_DT, &mut rng);

        assert_eq!(world.wave, 2);
        assert_eq!(world.asteroids.len(), wave_asteroid_count(2) as usize);
        assert_eq!(
            world.player.invincible_timer,
            PLAYER_INVINCIBILITY_FRAMES / 2.0
        );
    }

    #[test]
    fn test_split_children_defer_wave_clear() {
        let mut world = World::new(800.0, 600.0);
        let mut rng = rng();
        world.phase = GamePhase::Playing;
        world.player.invincible_timer = PLAYER_INVINCIBILITY_FRAMES;
        let id = world.next_entity_id();
        let a = spawn_asteroid(
            id,
            AsteroidSize::Medium,
            Vec2::new(800.0, 600.0),
            Some(Vec2::new(100.0, 100.0)),
            Some(Vec2::ZERO),
            &mut rng,
        );
        world.asteroids.push(a);
        let bid = world.next_entity_id();
        world.bullets.push(Bullet {
            id: bid,
            pos: Vec2::new(100.0, 100.0),
            vel: Vec2::ZERO,
            angle: 0.0,
            radius: BULLET_RADIUS,
            life: BULLET_LIFESPAN_FRAMES,
        });

        tick(&mut world, &TickInput::default(), NOMINAL_DT, &mut rng);

        // The medium split into smalls; the wave is not over yet
        assert_eq!(world.wave, 1);
        assert_eq!(world.asteroids.len(), 2);
    }
}
