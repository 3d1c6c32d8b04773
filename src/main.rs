//! Headless demo driver
//!
//! Scatters a seeded fleet across the arena, boosts everything for a while,
//! and logs where the boats end up. Run with `RUST_LOG=debug` to watch
//! boundary containment fire.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use seabound::sim::{ActorKind, ActorParams, Appearance, Arena, Fleet};
use seabound::SimConfig;

const ARENA_SIZE: f32 = 400.0;
const FLEET_SIZE: usize = 12;
const DEMO_TICKS: u32 = 600;
const BOOST_TICKS: u32 = 200;

fn main() {
    env_logger::init();

    let seed: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    log::info!("seabound demo starting, seed {seed}");

    let config = SimConfig::default();
    let mut fleet = Fleet::new(Arena::new(Vec2::splat(ARENA_SIZE)));
    let mut rng = Pcg32::seed_from_u64(seed);

    for n in 0..FLEET_SIZE {
        let params = ActorParams {
            kind: ActorKind::Ship,
            pos: Vec2::new(
                rng.random_range(20.0..ARENA_SIZE - 20.0),
                rng.random_range(20.0..ARENA_SIZE - 20.0),
            ),
            ang: rng.random_range(-std::f32::consts::PI..std::f32::consts::PI),
            vel: rng.random_range(0.5..2.0),
            appearance: Appearance::ColorDisc {
                color: 0x224488 + n as u32 * 0x001111,
            },
            ..Default::default()
        };
        match fleet.spawn(params, &config) {
            Ok(id) => log::debug!("spawned actor {id}"),
            Err(e) => {
                log::error!("spawn failed: {e}");
                std::process::exit(1);
            }
        }
    }

    for tick in 0..DEMO_TICKS {
        if tick < BOOST_TICKS {
            // Hold the throttle open for the first stretch
            let ids: Vec<u32> = fleet.actors().iter().map(|a| a.id).collect();
            for id in ids {
                if let Some(actor) = fleet.actor_mut(id) {
                    actor.boost();
                }
            }
        }
        fleet.step();

        if tick % 100 == 0 {
            let inside = fleet
                .actors()
                .iter()
                .filter(|a| fleet.arena.contains(a.pos))
                .count();
            log::info!(
                "tick {tick}: {inside}/{} inside the arena, {} contacts",
                fleet.actors().len(),
                fleet.contacts().len()
            );
        }
    }

    for actor in fleet.actors() {
        let snapshot = actor
            .export_state()
            .to_json()
            .unwrap_or_else(|e| format!("<unserializable: {e}>"));
        println!("{snapshot}");
    }
    log::info!("demo finished after {DEMO_TICKS} ticks");
}
