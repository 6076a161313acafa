//! Weapon system: fire rate limiting, projectile advance and the
//! projectile-vs-adversary collision pass.
//!
//! Hits are not applied here. The collision pass only reads the dynamic
//! registry and queues [`HitEvent`]s; the engine hands them to the adversary
//! manager once the pass is over.

use std::collections::HashSet;

use hecs::{Entity, World};
use tracing::{debug, trace};

use skyfire_core::components::Projectile;
use skyfire_core::config::WeaponConfig;
use skyfire_core::constants::TIME_EPSILON;
use skyfire_core::events::{HitEvent, SimEvent};
use skyfire_core::types::AircraftState;

use crate::projectile;
use crate::registry::DynamicRegistry;
use crate::world_setup;

pub struct WeaponSystem {
    config: WeaponConfig,
    last_fire_secs: Option<f64>,
    next_projectile_id: u32,
    pending_hits: Vec<HitEvent>,
    despawn_buffer: Vec<Entity>,
}

impl WeaponSystem {
    pub fn new(config: WeaponConfig) -> Self {
        Self {
            config,
            last_fire_secs: None,
            next_projectile_id: 0,
            pending_hits: Vec::new(),
            despawn_buffer: Vec::new(),
        }
    }

    pub fn config(&self) -> &WeaponConfig {
        &self.config
    }

    /// Hits queued by the last collision pass and not yet taken.
    pub fn pending_hits(&self) -> &[HitEvent] {
        &self.pending_hits
    }

    /// Launch a projectile pair if the fire cooldown has elapsed.
    ///
    /// Requests inside the cooldown window are dropped, not queued.
    pub fn try_fire(
        &mut self,
        world: &mut World,
        aircraft: &AircraftState,
        now_secs: f64,
        events: &mut Vec<SimEvent>,
    ) -> bool {
        if let Some(last) = self.last_fire_secs {
            if now_secs - last < self.config.fire_cooldown_secs - TIME_EPSILON {
                trace!(now_secs, last, "fire request inside cooldown dropped");
                return false;
            }
        }

        let pair = projectile::launch_pair(aircraft, &self.config, self.next_projectile_id);
        self.next_projectile_id = self.next_projectile_id.wrapping_add(2);
        for round in pair {
            world_setup::spawn_projectile(world, round);
        }

        self.last_fire_secs = Some(now_secs);
        debug!(now_secs, position = ?aircraft.position, "shot fired");
        events.push(SimEvent::ShotFired {
            position: aircraft.position,
        });
        true
    }

    /// Move every live projectile and remove the ones past their lifetime.
    pub fn advance(&mut self, world: &mut World, dt: f32, events: &mut Vec<SimEvent>) {
        self.despawn_buffer.clear();
        let speed = self.config.projectile_speed;

        for (entity, round) in world.query_mut::<&mut Projectile>() {
            projectile::advance(round, speed, dt);
            if projectile::is_expired(round) {
                debug!(projectile_id = round.id, "projectile expired");
                events.push(SimEvent::ProjectileExpired {
                    projectile_id: round.id,
                });
                self.despawn_buffer.push(entity);
            }
        }

        for entity in self.despawn_buffer.drain(..) {
            let _ = world.despawn(entity);
        }
    }

    /// Test every projectile against the adversaries in the dynamic registry.
    ///
    /// A projectile hits at most one adversary and an adversary takes at most
    /// one hit per pass. Projectiles are visited in launch order so the pass
    /// is reproducible. Consumed projectiles are removed after the pass.
    pub fn resolve_hits(&mut self, world: &mut World, dynamics: &DynamicRegistry) {
        self.despawn_buffer.clear();
        let radius = self.config.projectile_radius;

        let mut rounds: Vec<(Entity, u32, glam::Vec3)> = world
            .query::<&Projectile>()
            .iter()
            .map(|(entity, p)| (entity, p.id, p.position))
            .collect();
        rounds.sort_by_key(|&(_, id, _)| id);

        let mut consumed: HashSet<u32> = HashSet::new();
        for (entity, projectile_id, position) in rounds {
            let target = dynamics
                .iter()
                .find(|(id, sphere)| !consumed.contains(id) && sphere.intersects_sphere(position, radius))
                .map(|(id, _)| id);

            if let Some(adversary_id) = target {
                consumed.insert(adversary_id);
                debug!(projectile_id, adversary_id, "projectile hit");
                self.pending_hits.push(HitEvent {
                    adversary_id,
                    position,
                });
                self.despawn_buffer.push(entity);
            }
        }

        for entity in self.despawn_buffer.drain(..) {
            let _ = world.despawn(entity);
        }
    }

    /// Drain the queued hits for delivery to the adversary manager.
    pub fn take_hits(&mut self) -> Vec<HitEvent> {
        std::mem::take(&mut self.pending_hits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use glam::Vec3;

    fn round_at(id: u32, position: Vec3) -> Projectile {
        Projectile {
            id,
            position,
            direction: Vec3::X,
            age: 0.0,
            max_lifetime: 3.0,
        }
    }

    fn projectile_count(world: &World) -> usize {
        world.query::<&Projectile>().iter().count()
    }

    #[test]
    fn test_fire_cooldown_accepts_two_of_five() {
        let mut world = World::new();
        let mut weapons = WeaponSystem::new(WeaponConfig::default());
        let aircraft = AircraftState::default();
        let mut events = Vec::new();

        let accepted = [0.0, 0.05, 0.1, 0.15, 0.2]
            .iter()
            .filter(|&&t| weapons.try_fire(&mut world, &aircraft, t, &mut events))
            .count();
        assert_eq!(accepted, 2, "only t=0 and t=0.2 fire");
        assert_eq!(projectile_count(&world), 4, "two rounds per accepted shot");
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn test_cooldown_tolerates_accumulated_time() {
        let mut world = World::new();
        let mut weapons = WeaponSystem::new(WeaponConfig::default());
        let aircraft = AircraftState::default();
        let mut events = Vec::new();

        let mut now = 0.0_f64;
        let mut accepted = 0;
        for _ in 0..=60 {
            if weapons.try_fire(&mut world, &aircraft, now, &mut events) {
                accepted += 1;
            }
            now += 1.0 / 60.0;
        }
        // t = 0, 0.2, 0.4, 0.6, 0.8, 1.0
        assert_eq!(accepted, 6);
    }

    #[test]
    fn test_single_hit_queues_one_event() {
        let mut world = World::new();
        let mut weapons = WeaponSystem::new(WeaponConfig::default());
        let mut dynamics = DynamicRegistry::new();
        dynamics.register(7, Vec3::new(0.0, 50.0, -40.0), 3.0);
        dynamics.register(8, Vec3::new(100.0, 50.0, -40.0), 3.0);
        world_setup::spawn_projectile(&mut world, round_at(0, Vec3::new(1.0, 50.0, -40.0)));
        world_setup::spawn_projectile(&mut world, round_at(1, Vec3::new(-60.0, 50.0, -40.0)));

        weapons.resolve_hits(&mut world, &dynamics);
        let hits = weapons.take_hits();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].adversary_id, 7);
        assert_eq!(projectile_count(&world), 1, "only the hitting round is removed");
        assert!(weapons.pending_hits().is_empty(), "taking drains the queue");
    }

    #[test]
    fn test_one_hit_per_adversary_per_pass() {
        let mut world = World::new();
        let mut weapons = WeaponSystem::new(WeaponConfig::default());
        let mut dynamics = DynamicRegistry::new();
        dynamics.register(3, Vec3::new(0.0, 50.0, 0.0), 3.0);
        world_setup::spawn_projectile(&mut world, round_at(0, Vec3::new(0.5, 50.0, 0.0)));
        world_setup::spawn_projectile(&mut world, round_at(1, Vec3::new(-0.5, 50.0, 0.0)));

        weapons.resolve_hits(&mut world, &dynamics);
        assert_eq!(weapons.pending_hits().len(), 1);
        assert_eq!(projectile_count(&world), 1, "the second round flies on");
    }

    #[test]
    fn test_touching_is_not_a_hit() {
        let mut world = World::new();
        let mut weapons = WeaponSystem::new(WeaponConfig::default());
        let mut dynamics = DynamicRegistry::new();
        dynamics.register(1, Vec3::ZERO, 3.0);
        // 3.0 + 0.5 apart: spheres touch but do not overlap.
        world_setup::spawn_projectile(&mut world, round_at(0, Vec3::new(3.5, 0.0, 0.0)));

        weapons.resolve_hits(&mut world, &dynamics);
        assert!(weapons.pending_hits().is_empty());
    }

    #[test]
    fn test_expired_round_removed_without_hit() {
        let mut world = World::new();
        let mut weapons = WeaponSystem::new(WeaponConfig::default());
        let mut events = Vec::new();
        world_setup::spawn_projectile(&mut world, round_at(4, Vec3::ZERO));

        for _ in 0..31 {
            weapons.advance(&mut world, 0.1, &mut events);
        }
        assert_eq!(projectile_count(&world), 0);
        assert_eq!(events, vec![SimEvent::ProjectileExpired { projectile_id: 4 }]);
        assert!(weapons.pending_hits().is_empty());
    }
}
