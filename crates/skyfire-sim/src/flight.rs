//! Flight controller: integrates the player aircraft each tick.
//!
//! Owns the only mutable [`AircraftState`]. Reads the static registry for
//! obstacle tests and never looks at camera state.

use glam::Vec3;
use tracing::info;

use skyfire_core::config::FlightConfig;
use skyfire_core::constants::TIME_EPSILON;
use skyfire_core::enums::CollisionKind;
use skyfire_core::input::ControlAxes;
use skyfire_core::types::{clamp_dt, normalize_angle, orientation_from_euler, AircraftState};

use crate::registry::StaticRegistry;

/// What happened during one flight tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlightStep {
    /// Set when a collision was accepted and recovery began this tick.
    pub collision: Option<CollisionKind>,
    /// Set on the tick recovery finished.
    pub recovery_ended: bool,
}

pub struct FlightController {
    config: FlightConfig,
    state: AircraftState,
}

impl FlightController {
    pub fn new(config: FlightConfig) -> Self {
        let state = spawn_state(&config);
        Self { config, state }
    }

    pub fn state(&self) -> &AircraftState {
        &self.state
    }

    pub fn config(&self) -> &FlightConfig {
        &self.config
    }

    /// Restore the canonical spawn state, cancelling any recovery in progress.
    pub fn reset(&mut self) {
        self.state = spawn_state(&self.config);
        info!(position = ?self.state.position, "aircraft reset to spawn");
    }

    /// Advance the aircraft by `dt` seconds (clamped to the maximum tick).
    ///
    /// `now_secs` is the simulation time at the end of this tick and is used
    /// for the collision cooldown and recovery timers.
    pub fn tick(
        &mut self,
        dt: f64,
        now_secs: f64,
        axes: &ControlAxes,
        statics: &StaticRegistry,
    ) -> FlightStep {
        let dt = clamp_dt(dt) as f32;
        self.state.colliding = false;

        if self.state.recovering {
            return FlightStep {
                collision: None,
                recovery_ended: self.recover(dt, now_secs),
            };
        }

        let cfg = &self.config;
        let s = &self.state;

        let throttle = axes.throttle.clamp(-1.0, 1.0);
        let speed = (s.speed + throttle * cfg.throttle_sensitivity * dt)
            .clamp(cfg.min_speed, cfg.max_speed);

        let pitch = drive_or_level(
            s.pitch,
            axes.pitch,
            cfg.pitch_sensitivity,
            cfg.max_pitch,
            cfg.auto_level_rate,
            dt,
        );
        let roll = drive_or_level(
            s.roll,
            axes.roll,
            cfg.roll_sensitivity,
            cfg.max_roll,
            cfg.auto_level_rate,
            dt,
        );

        // Banking turns the aircraft: right roll yaws right.
        let yaw = normalize_angle(s.yaw - roll * cfg.turn_sensitivity * dt);

        let orientation = orientation_from_euler(pitch, yaw, roll);
        let forward = orientation * Vec3::NEG_Z;
        let candidate = s.position + forward * speed * dt;

        let contact = self.detect_collision(candidate, statics);

        if let Some(kind) = contact {
            if self.cooldown_elapsed(now_secs) {
                self.enter_recovery(kind, now_secs);
                return FlightStep {
                    collision: Some(kind),
                    recovery_ended: false,
                };
            }
        }

        let floor = self.config.ground_level + self.config.collision_radius;
        let s = &mut self.state;
        s.position = Vec3::new(candidate.x, candidate.y.max(floor), candidate.z);
        s.pitch = pitch;
        s.roll = roll;
        s.yaw = yaw;
        s.orientation = orientation;
        s.speed = speed;
        s.colliding = contact.is_some();

        FlightStep::default()
    }

    /// Ground is checked before buildings.
    fn detect_collision(&self, candidate: Vec3, statics: &StaticRegistry) -> Option<CollisionKind> {
        let radius = self.config.collision_radius;
        if candidate.y - radius < self.config.ground_level {
            Some(CollisionKind::Ground)
        } else if statics.query(candidate, radius) {
            Some(CollisionKind::Building)
        } else {
            None
        }
    }

    fn cooldown_elapsed(&self, now_secs: f64) -> bool {
        match self.state.last_collision_secs {
            None => true,
            Some(last) => now_secs - last >= self.config.collision_cooldown_secs - TIME_EPSILON,
        }
    }

    fn enter_recovery(&mut self, kind: CollisionKind, now_secs: f64) {
        let s = &mut self.state;
        s.recovering = true;
        s.colliding = true;
        s.last_collision_secs = Some(now_secs);
        s.last_collision_kind = Some(kind);
        s.speed = (s.speed * self.config.collision_speed_factor).max(self.config.min_speed);
        info!(?kind, position = ?s.position, speed = s.speed, "collision, entering recovery");
    }

    /// Level the wings, climb clear, and hand control back once the
    /// recovery window has elapsed. Returns true on the tick it ends.
    fn recover(&mut self, dt: f32, now_secs: f64) -> bool {
        let cfg = &self.config;
        let s = &mut self.state;

        s.pitch = level(s.pitch, cfg.auto_level_rate, dt).clamp(-cfg.max_pitch, cfg.max_pitch);
        s.roll = level(s.roll, cfg.auto_level_rate, dt).clamp(-cfg.max_roll, cfg.max_roll);
        s.orientation = orientation_from_euler(s.pitch, s.yaw, s.roll);
        s.position.y = s
            .position
            .y
            .max(cfg.ground_level + cfg.collision_radius)
            + cfg.recovery_climb_rate * dt;

        let started = s.last_collision_secs.unwrap_or(now_secs);
        if now_secs - started >= cfg.recovery_duration_secs - TIME_EPSILON {
            s.recovering = false;
            info!(position = ?s.position, "recovery complete");
            return true;
        }
        false
    }
}

fn spawn_state(config: &FlightConfig) -> AircraftState {
    AircraftState::spawn(
        config.spawn_position,
        config.spawn_speed.clamp(config.min_speed, config.max_speed),
    )
}

/// Accumulate a driven angle, or decay an idle one toward level.
fn drive_or_level(angle: f32, input: f32, sensitivity: f32, limit: f32, level_rate: f32, dt: f32) -> f32 {
    let input = input.clamp(-1.0, 1.0);
    let next = if input != 0.0 {
        angle + input * sensitivity * dt
    } else {
        level(angle, level_rate, dt)
    };
    next.clamp(-limit, limit)
}

/// Linear interpolation toward zero by `rate·dt`.
fn level(angle: f32, rate: f32, dt: f32) -> f32 {
    angle * (1.0 - (rate * dt).min(1.0))
}
