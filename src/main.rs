//! Headless demo runner
//!
//! Drives the simulation at 60 fps with a monotonic clock and a canned
//! autopilot, logging progress and dumping the final world snapshot as
//! JSON - the same snapshot a render layer would consume.
//!
//! Usage: `retro-asteroids [seed] [frames]`

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_pcg::Pcg32;

use retro_asteroids::consts::NOMINAL_DT;
use retro_asteroids::{GamePhase, TickInput, World, tick};

const DEFAULT_SEED: u64 = 0xA57E_201D;
const DEFAULT_FRAMES: u64 = 600;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_SEED);
    let frames: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    let mut rng = Pcg32::seed_from_u64(seed);
    let mut world = World::new(1024.0, 768.0);

    log::info!("seed {seed}, running {frames} frames");
    tick(
        &mut world,
        &TickInput {
            start: true,
            ..Default::default()
        },
        NOMINAL_DT,
        &mut rng,
    );

    let mut last = Instant::now();
    for frame in 0..frames {
        std::thread::sleep(Duration::from_secs_f32(NOMINAL_DT));
        let dt = last.elapsed().as_secs_f32();
        last = Instant::now();

        // Autopilot: slow clockwise sweep with periodic thrust bursts
        let input = TickInput {
            rotate_right: true,
            thrust: frame % 120 < 40,
            ..Default::default()
        };
        tick(&mut world, &input, dt, &mut rng);

        if frame % 60 == 0 {
            log::info!(
                "frame {frame}: wave {}, score {}, lives {}, {} asteroids",
                world.wave,
                world.score,
                world.lives,
                world.asteroids.len()
            );
        }
        if world.phase == GamePhase::GameOver {
            log::info!("game over at frame {frame}");
            break;
        }
    }

    match serde_json::to_string_pretty(&world) {
        Ok(snapshot) => println!("{snapshot}"),
        Err(err) => log::error!("failed to serialize world snapshot: {err}"),
    }
}
