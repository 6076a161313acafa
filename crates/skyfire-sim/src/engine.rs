//! Simulation engine: the headless core of the game.
//!
//! `SimulationEngine` owns the hecs world, both collision registries and
//! every subsystem. It applies the tick's input snapshot, runs the systems
//! in their fixed order and produces a `SimSnapshot`. No rendering or input
//! device dependency, so every test runs deterministically.

use glam::Vec3;
use hecs::World;
use tracing::info;

use skyfire_core::config::SimConfig;
use skyfire_core::enums::{CameraMode, GameStatus};
use skyfire_core::events::SimEvent;
use skyfire_core::input::InputSnapshot;
use skyfire_core::state::SimSnapshot;
use skyfire_core::types::{clamp_dt, AircraftState, SimTime};

use crate::camera::CameraRig;
use crate::flight::FlightController;
use crate::game_state::GameState;
use crate::registry::{DynamicRegistry, StaticRegistry};
use crate::systems;
use crate::systems::adversaries::AdversaryManager;
use crate::systems::weapons::WeaponSystem;

pub struct SimulationEngine {
    world: World,
    time: SimTime,
    config: SimConfig,
    statics: StaticRegistry,
    dynamics: DynamicRegistry,
    flight: FlightController,
    camera: CameraRig,
    weapons: WeaponSystem,
    adversaries: AdversaryManager,
    game: GameState,
    events: Vec<SimEvent>,
}

impl SimulationEngine {
    /// Create an engine. Out-of-range config values are clamped.
    pub fn new(config: SimConfig) -> Self {
        let config = config.sanitized();
        info!(seed = config.seed, "simulation created");
        Self {
            world: World::new(),
            time: SimTime::default(),
            statics: StaticRegistry::new(),
            dynamics: DynamicRegistry::new(),
            flight: FlightController::new(config.flight.clone()),
            camera: CameraRig::new(config.camera.clone()),
            weapons: WeaponSystem::new(config.weapons.clone()),
            adversaries: AdversaryManager::new(config.adversaries.clone(), config.seed),
            game: GameState::new(config.rules.clone()),
            events: Vec::new(),
            config,
        }
    }

    /// Register (or move) a static obstacle. Called by the world generator
    /// between ticks.
    pub fn register_obstacle(&mut self, id: u32, position: Vec3, half_extents: Vec3) {
        self.statics.register(id, position, half_extents);
    }

    /// Remove a static obstacle. Returns false for unknown ids.
    pub fn unregister_obstacle(&mut self, id: u32) -> bool {
        self.statics.unregister(id).is_some()
    }

    /// Advance the simulation by `dt` seconds of wall time and return the
    /// resulting snapshot.
    ///
    /// Discrete input events are applied first. Systems run only while
    /// playing; paused and finished sessions still produce snapshots.
    pub fn tick(&mut self, dt: f64, input: &InputSnapshot) -> SimSnapshot {
        let status_before = self.game.status();
        self.apply_discrete_input(input);

        if self.game.status() == GameStatus::Playing {
            self.run_systems(clamp_dt(dt), input);
        }

        let status = self.game.status();
        if status != status_before {
            self.events.push(SimEvent::StatusChanged { status });
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            status,
            self.flight.state(),
            self.camera.view(),
            self.game.view(),
            events,
        )
    }

    pub fn status(&self) -> GameStatus {
        self.game.status()
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn time_scale(&self) -> f64 {
        self.config.time_scale
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn aircraft(&self) -> &AircraftState {
        self.flight.state()
    }

    pub fn camera_mode(&self) -> CameraMode {
        self.camera.mode()
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn statics(&self) -> &StaticRegistry {
        &self.statics
    }

    pub fn dynamics(&self) -> &DynamicRegistry {
        &self.dynamics
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Place an adversary directly (for tests). Returns its id.
    #[cfg(test)]
    pub fn spawn_test_adversary(&mut self, id: u32, position: Vec3) -> u32 {
        let adversary = skyfire_core::components::Adversary {
            id,
            position,
            scale: 1.0,
            wander: Vec3::X,
            last_resample_secs: self.time.elapsed_secs,
            cruise_altitude: position.y,
            drift_phase: 0.0,
        };
        self.adversaries.insert(
            &mut self.world,
            adversary,
            u64::from(id),
            &mut self.dynamics,
            &mut self.game,
            &mut self.events,
        );
        id
    }

    /// Place a projectile directly (for tests).
    #[cfg(test)]
    pub fn spawn_test_projectile(&mut self, id: u32, position: Vec3, direction: Vec3) {
        crate::world_setup::spawn_projectile(
            &mut self.world,
            skyfire_core::components::Projectile {
                id,
                position,
                direction: direction.normalize_or_zero(),
                age: 0.0,
                max_lifetime: self.config.weapons.projectile_lifetime_secs,
            },
        );
    }

    /// Reset, camera toggle and pause. Reset is honoured in every state.
    fn apply_discrete_input(&mut self, input: &InputSnapshot) {
        if input.reset {
            self.flight.reset();
            self.camera.recenter();
            self.events.push(SimEvent::AircraftReset);
        }
        if input.toggle_camera {
            let mode = self.camera.toggle_mode();
            info!(?mode, "camera mode changed");
            self.events.push(SimEvent::CameraModeChanged { mode });
        }
        if input.pause {
            let paused = self.game.status() == GameStatus::Paused;
            self.game.set_paused(!paused);
        }
    }

    /// input → flight → camera → weapons → adversaries → game state.
    fn run_systems(&mut self, dt: f64, input: &InputSnapshot) {
        self.time.advance(dt);
        let now = self.time.elapsed_secs;
        let dt32 = dt as f32;

        let step = self.flight.tick(dt, now, &input.axes(), &self.statics);
        let aircraft = *self.flight.state();
        if let Some(kind) = step.collision {
            self.events.push(SimEvent::Collision {
                kind,
                position: aircraft.position,
            });
            self.game.report_collision();
        }
        if step.recovery_ended {
            self.events.push(SimEvent::RecoveryEnded);
        }

        self.camera.update(dt32, Some(&aircraft));

        self.weapons.advance(&mut self.world, dt32, &mut self.events);
        if input.fire {
            self.weapons
                .try_fire(&mut self.world, &aircraft, now, &mut self.events);
        }
        self.weapons.resolve_hits(&mut self.world, &self.dynamics);

        // Hits are delivered only after the collision pass is complete.
        let hits = self.weapons.take_hits();
        self.adversaries.run(
            &mut self.world,
            &hits,
            aircraft.position,
            now,
            dt32,
            &mut self.dynamics,
            &mut self.game,
            &mut self.events,
        );
    }
}
