//! Entity spawn factories for the simulation world.
//!
//! Adversaries, projectiles and explosions are hecs entities; each factory
//! builds the full component bundle for one of them.

use std::f32::consts::TAU;

use glam::Vec3;
use hecs::{Entity, World};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use skyfire_ai::steering::random_heading;
use skyfire_core::components::{Adversary, Projectile};
use skyfire_core::config::AdversaryConfig;

use crate::effects::new_explosion;
use crate::systems::adversaries::WanderRng;

/// Roll a new adversary on the spawn ring around `player_position`.
///
/// The altitude is sampled in `[min_altitude, min_altitude + altitude_variation]`
/// and becomes the centre of the adversary's altitude drift.
pub fn sample_adversary(
    rng: &mut ChaCha8Rng,
    id: u32,
    player_position: Vec3,
    config: &AdversaryConfig,
    now_secs: f64,
) -> Adversary {
    let bearing = random_heading(rng);
    let altitude = config.min_altitude + rng.gen::<f32>() * config.altitude_variation;
    let scale = config.scale_min + rng.gen::<f32>() * (config.scale_max - config.scale_min);

    let mut position = player_position + bearing * config.spawn_radius;
    position.y = altitude;

    Adversary {
        id,
        position,
        scale,
        wander: random_heading(rng),
        last_resample_secs: now_secs,
        cruise_altitude: altitude,
        drift_phase: rng.gen_range(0.0..TAU),
    }
}

/// Spawn an adversary with its own wander RNG.
pub fn spawn_adversary(world: &mut World, adversary: Adversary, wander_seed: u64) -> Entity {
    world.spawn((adversary, WanderRng(ChaCha8Rng::seed_from_u64(wander_seed))))
}

pub fn spawn_projectile(world: &mut World, projectile: Projectile) -> Entity {
    world.spawn((projectile,))
}

pub fn spawn_explosion(world: &mut World, position: Vec3, lifetime: f32) -> Entity {
    world.spawn((new_explosion(position, lifetime),))
}
