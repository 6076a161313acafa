//! Snapshot system: reads the world and the engine-owned state into a
//! [`SimSnapshot`]. Never modifies anything.

use hecs::World;

use skyfire_core::components::{Adversary, ExplosionEffect, Projectile};
use skyfire_core::enums::GameStatus;
use skyfire_core::events::SimEvent;
use skyfire_core::state::*;
use skyfire_core::types::{AircraftState, SimTime};

use crate::effects;

pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    status: GameStatus,
    aircraft: &AircraftState,
    camera: CameraView,
    game: GameStateView,
    events: Vec<SimEvent>,
) -> SimSnapshot {
    SimSnapshot {
        time: *time,
        status,
        aircraft: build_aircraft(aircraft),
        camera,
        adversaries: build_adversaries(world),
        projectiles: build_projectiles(world),
        explosions: build_explosions(world),
        game,
        events,
    }
}

fn build_aircraft(aircraft: &AircraftState) -> AircraftView {
    AircraftView {
        position: aircraft.position,
        orientation: aircraft.orientation,
        pitch: aircraft.pitch,
        yaw: aircraft.yaw,
        roll: aircraft.roll,
        speed: aircraft.speed,
        recovering: aircraft.recovering,
    }
}

/// Sorted by id for stable output.
fn build_adversaries(world: &World) -> Vec<AdversaryView> {
    let mut views: Vec<AdversaryView> = world
        .query::<&Adversary>()
        .iter()
        .map(|(_, a)| AdversaryView {
            id: a.id,
            position: a.position,
            scale: a.scale,
        })
        .collect();
    views.sort_by_key(|v| v.id);
    views
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut views: Vec<ProjectileView> = world
        .query::<&Projectile>()
        .iter()
        .map(|(_, p)| ProjectileView {
            id: p.id,
            position: p.position,
            direction: p.direction,
        })
        .collect();
    views.sort_by_key(|v| v.id);
    views
}

fn build_explosions(world: &World) -> Vec<ExplosionView> {
    world
        .query::<&ExplosionEffect>()
        .iter()
        .filter(|(_, e)| !e.completed)
        .map(|(_, e)| ExplosionView {
            position: e.position,
            intensity: effects::intensity(e),
        })
        .collect()
}
