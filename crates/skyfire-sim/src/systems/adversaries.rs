//! Adversary manager: population floor, pursuit AI, hit handling and the
//! explosion effects left behind by destroyed adversaries.
//!
//! Sole writer of adversary entities and of the dynamic registry.

use std::collections::HashMap;

use glam::Vec3;
use hecs::{Entity, World};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use skyfire_ai::steering::{self, SteeringContext};
use skyfire_core::components::{Adversary, ExplosionEffect};
use skyfire_core::config::AdversaryConfig;
use skyfire_core::constants::TIME_EPSILON;
use skyfire_core::events::{HitEvent, SimEvent};

use crate::effects;
use crate::game_state::GameState;
use crate::registry::DynamicRegistry;
use crate::world_setup;

/// Per-adversary random stream for wander resampling.
pub struct WanderRng(pub ChaCha8Rng);

pub struct AdversaryManager {
    config: AdversaryConfig,
    rng: ChaCha8Rng,
    next_id: u32,
    last_spawn_secs: Option<f64>,
    despawn_buffer: Vec<Entity>,
}

impl AdversaryManager {
    pub fn new(config: AdversaryConfig, seed: u64) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            next_id: 0,
            last_spawn_secs: None,
            despawn_buffer: Vec::new(),
        }
    }

    pub fn config(&self) -> &AdversaryConfig {
        &self.config
    }

    /// Run one full adversary pass.
    ///
    /// Effects age first so an explosion spawned by this tick's hits starts
    /// at full intensity. Hits are applied before spawning so the population
    /// check sees the post-hit count.
    #[allow(clippy::too_many_arguments)]
    pub fn run(
        &mut self,
        world: &mut World,
        hits: &[HitEvent],
        player_position: Vec3,
        now_secs: f64,
        dt: f32,
        dynamics: &mut DynamicRegistry,
        game: &mut GameState,
        events: &mut Vec<SimEvent>,
    ) {
        self.update_effects(world, dt, events);
        self.handle_hits(world, hits, dynamics, game, events);
        self.maintain_population(world, player_position, now_secs, dynamics, game, events);
        self.update_ai(world, player_position, now_secs, dt);
        self.sync_registry(world, dynamics);
    }

    /// Apply queued hits: remove the adversary everywhere, credit the score,
    /// then leave an explosion at the hit point.
    ///
    /// Hits on adversaries that are already gone are ignored.
    pub fn handle_hits(
        &mut self,
        world: &mut World,
        hits: &[HitEvent],
        dynamics: &mut DynamicRegistry,
        game: &mut GameState,
        events: &mut Vec<SimEvent>,
    ) {
        if hits.is_empty() {
            return;
        }

        let mut by_id: HashMap<u32, Entity> = world
            .query::<&Adversary>()
            .iter()
            .map(|(entity, a)| (a.id, entity))
            .collect();

        for hit in hits {
            let Some(entity) = by_id.remove(&hit.adversary_id) else {
                continue;
            };
            let _ = world.despawn(entity);
            dynamics.unregister(hit.adversary_id);
            game.unregister_adversary();
            game.report_hit(self.config.hit_score);

            debug!(adversary_id = hit.adversary_id, position = ?hit.position, "adversary destroyed");
            events.push(SimEvent::AdversaryDestroyed {
                adversary_id: hit.adversary_id,
                position: hit.position,
            });

            world_setup::spawn_explosion(world, hit.position, self.config.explosion_lifetime_secs);
        }
    }

    /// Spawn one adversary if the population is below the floor and the
    /// spawn cooldown has elapsed. Returns the new adversary's id.
    pub fn maintain_population(
        &mut self,
        world: &mut World,
        player_position: Vec3,
        now_secs: f64,
        dynamics: &mut DynamicRegistry,
        game: &mut GameState,
        events: &mut Vec<SimEvent>,
    ) -> Option<u32> {
        let live = world.query::<&Adversary>().iter().count();
        if live >= self.config.population_floor {
            return None;
        }
        if let Some(last) = self.last_spawn_secs {
            if now_secs - last < self.config.spawn_cooldown_secs - TIME_EPSILON {
                return None;
            }
        }

        let id = self.next_id;
        self.next_id += 1;
        let adversary =
            world_setup::sample_adversary(&mut self.rng, id, player_position, &self.config, now_secs);
        let wander_seed: u64 = self.rng.gen();
        self.insert(world, adversary, wander_seed, dynamics, game, events);
        self.last_spawn_secs = Some(now_secs);
        Some(id)
    }

    /// Add an adversary to the world, the dynamic registry and the game tally.
    pub fn insert(
        &mut self,
        world: &mut World,
        adversary: Adversary,
        wander_seed: u64,
        dynamics: &mut DynamicRegistry,
        game: &mut GameState,
        events: &mut Vec<SimEvent>,
    ) -> Entity {
        let id = adversary.id;
        let position = adversary.position;
        self.next_id = self.next_id.max(id + 1);

        dynamics.register(id, position, self.config.radius * adversary.scale);
        let entity = world_setup::spawn_adversary(world, adversary, wander_seed);
        game.register_adversary();

        debug!(adversary_id = id, ?position, "adversary spawned");
        events.push(SimEvent::AdversarySpawned {
            adversary_id: id,
            position,
        });
        entity
    }

    /// Steer every adversary toward the player.
    ///
    /// Separation compares each tentative position against the other
    /// adversaries' positions from the start of the pass, so the result does
    /// not depend on iteration order.
    pub fn update_ai(&mut self, world: &mut World, player_position: Vec3, now_secs: f64, dt: f32) {
        let cfg = &self.config;
        let starts: Vec<(u32, Vec3)> = world
            .query::<&Adversary>()
            .iter()
            .map(|(_, a)| (a.id, a.position))
            .collect();

        for (_entity, (adversary, wander_rng)) in world.query_mut::<(&mut Adversary, &mut WanderRng)>() {
            if steering::should_resample(now_secs, adversary.last_resample_secs, cfg.wander_resample_secs) {
                adversary.wander = steering::random_heading(&mut wander_rng.0);
                adversary.last_resample_secs = now_secs;
            }

            let ctx = SteeringContext {
                position: adversary.position,
                target: player_position,
                wander: adversary.wander,
                wander_weight: cfg.wander_weight,
                follow_speed: cfg.follow_speed,
                altitude_target: steering::altitude_target(
                    adversary.cruise_altitude,
                    cfg.altitude_variation,
                    cfg.altitude_drift_frequency,
                    adversary.drift_phase,
                    now_secs,
                ),
                altitude_follow_rate: cfg.altitude_follow_rate,
                min_altitude: cfg.min_altitude,
                dt,
            };
            let update = steering::steer(&ctx);

            let own_id = adversary.id;
            let neighbors = starts
                .iter()
                .filter(|(id, _)| *id != own_id)
                .map(|(_, position)| *position);
            let push = steering::separation_offset(
                update.tentative_position,
                neighbors,
                cfg.min_separation,
                cfg.separation_strength,
                dt,
            );

            let mut next = update.tentative_position + push;
            next.y = next.y.max(cfg.min_altitude);
            adversary.position = next;
        }
    }

    /// Mirror adversary positions into the dynamic registry.
    pub fn sync_registry(&self, world: &World, dynamics: &mut DynamicRegistry) {
        for (_entity, adversary) in world.query::<&Adversary>().iter() {
            dynamics.register(adversary.id, adversary.position, self.config.radius * adversary.scale);
        }
    }

    /// Age explosions and evict the ones that report completion.
    pub fn update_effects(&mut self, world: &mut World, dt: f32, events: &mut Vec<SimEvent>) {
        self.despawn_buffer.clear();
        let finished = &mut self.despawn_buffer;

        for (entity, effect) in world.query_mut::<&mut ExplosionEffect>() {
            effects::advance(effect, dt, |done| {
                finished.push(entity);
                events.push(SimEvent::ExplosionFinished {
                    position: done.position,
                });
            });
        }

        for entity in self.despawn_buffer.drain(..) {
            let _ = world.despawn(entity);
        }
    }
}
