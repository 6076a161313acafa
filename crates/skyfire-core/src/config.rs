//! Tunable simulation configuration.
//!
//! Every section defaults to the values in [`crate::constants`]. Config files
//! are JSON and may name only the fields they override.

use std::f32::consts::{FRAC_PI_2, PI};
use std::path::{Path, PathBuf};

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Errors raised while loading a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Top-level configuration for a simulation session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed. Same seed and same inputs give the same session.
    pub seed: u64,
    /// Wall-clock speed multiplier used by the real-time loop (1.0 = normal).
    pub time_scale: f64,
    pub flight: FlightConfig,
    pub camera: CameraConfig,
    pub weapons: WeaponConfig,
    pub adversaries: AdversaryConfig,
    pub rules: RulesConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            flight: FlightConfig::default(),
            camera: CameraConfig::default(),
            weapons: WeaponConfig::default(),
            adversaries: AdversaryConfig::default(),
            rules: RulesConfig::default(),
        }
    }
}

impl SimConfig {
    /// Parse a JSON document, then validate and sanitize it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config.sanitized())
    }

    /// Read and parse a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Reject combinations that have no sensible clamped interpretation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let f = &self.flight;
        if f.min_speed > f.max_speed {
            return Err(ConfigError::Invalid(format!(
                "flight.min_speed ({}) exceeds flight.max_speed ({})",
                f.min_speed, f.max_speed
            )));
        }
        let a = &self.adversaries;
        if a.scale_min > a.scale_max {
            return Err(ConfigError::Invalid(format!(
                "adversaries.scale_min ({}) exceeds adversaries.scale_max ({})",
                a.scale_min, a.scale_max
            )));
        }
        Ok(())
    }

    /// Clamp every field into its usable range.
    pub fn sanitized(mut self) -> Self {
        self.time_scale = self.time_scale.clamp(0.0, 4.0);

        let f = &mut self.flight;
        f.max_pitch = f.max_pitch.abs().min(FRAC_PI_2 - 0.01);
        f.max_roll = f.max_roll.abs().min(PI - 0.01);
        f.min_speed = f.min_speed.max(0.0);
        f.max_speed = f.max_speed.max(f.min_speed);
        f.spawn_speed = f.spawn_speed.clamp(f.min_speed, f.max_speed);
        f.pitch_sensitivity = f.pitch_sensitivity.abs();
        f.roll_sensitivity = f.roll_sensitivity.abs();
        f.throttle_sensitivity = f.throttle_sensitivity.abs();
        f.auto_level_rate = f.auto_level_rate.abs();
        f.collision_radius = f.collision_radius.abs();
        f.collision_cooldown_secs = f.collision_cooldown_secs.max(0.0);
        f.recovery_duration_secs = f.recovery_duration_secs.max(0.0);
        f.collision_speed_factor = f.collision_speed_factor.clamp(0.0, 1.0);
        f.recovery_climb_rate = f.recovery_climb_rate.max(0.0);

        let c = &mut self.camera;
        c.position_damping = c.position_damping.max(0.0);
        c.rotation_damping = c.rotation_damping.max(0.0);

        let w = &mut self.weapons;
        w.fire_cooldown_secs = w.fire_cooldown_secs.max(0.0);
        w.projectile_speed = w.projectile_speed.abs();
        w.projectile_lifetime_secs = w.projectile_lifetime_secs.max(0.0);
        w.projectile_radius = w.projectile_radius.abs();

        let a = &mut self.adversaries;
        a.spawn_cooldown_secs = a.spawn_cooldown_secs.max(0.0);
        a.spawn_radius = a.spawn_radius.abs();
        a.altitude_variation = a.altitude_variation.abs();
        a.radius = a.radius.abs();
        a.scale_min = a.scale_min.max(0.01);
        a.scale_max = a.scale_max.max(a.scale_min);
        a.follow_speed = a.follow_speed.abs();
        a.wander_weight = a.wander_weight.clamp(0.0, 1.0);
        a.wander_resample_secs = a.wander_resample_secs.max(NOMINAL_DT);
        a.altitude_follow_rate = a.altitude_follow_rate.abs();
        a.min_separation = a.min_separation.abs();
        a.separation_strength = a.separation_strength.abs();
        a.explosion_lifetime_secs = a.explosion_lifetime_secs.max(0.01);

        let r = &mut self.rules;
        r.max_health = r.max_health.max(1);
        r.collision_damage = r.collision_damage.max(0);

        self
    }
}

/// Flight envelope and collision response of the player aircraft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    pub max_pitch: f32,
    pub max_roll: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    pub spawn_position: Vec3,
    pub spawn_speed: f32,
    pub pitch_sensitivity: f32,
    pub roll_sensitivity: f32,
    pub throttle_sensitivity: f32,
    pub turn_sensitivity: f32,
    pub auto_level_rate: f32,
    pub collision_radius: f32,
    pub ground_level: f32,
    pub collision_cooldown_secs: f64,
    pub recovery_duration_secs: f64,
    pub collision_speed_factor: f32,
    pub recovery_climb_rate: f32,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            max_pitch: MAX_PITCH,
            max_roll: MAX_ROLL,
            min_speed: MIN_SPEED,
            max_speed: MAX_SPEED,
            spawn_position: Vec3::from_array(SPAWN_POSITION),
            spawn_speed: SPAWN_SPEED,
            pitch_sensitivity: PITCH_SENSITIVITY,
            roll_sensitivity: ROLL_SENSITIVITY,
            throttle_sensitivity: THROTTLE_SENSITIVITY,
            turn_sensitivity: TURN_SENSITIVITY,
            auto_level_rate: AUTO_LEVEL_RATE,
            collision_radius: AIRCRAFT_COLLISION_RADIUS,
            ground_level: GROUND_LEVEL,
            collision_cooldown_secs: COLLISION_COOLDOWN_SECS,
            recovery_duration_secs: RECOVERY_DURATION_SECS,
            collision_speed_factor: COLLISION_SPEED_FACTOR,
            recovery_climb_rate: RECOVERY_CLIMB_RATE,
        }
    }
}

/// Chase camera geometry and damping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub offset: Vec3,
    pub look_ahead: Vec3,
    pub position_damping: f32,
    pub rotation_damping: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            offset: Vec3::from_array(CAMERA_OFFSET),
            look_ahead: Vec3::from_array(CAMERA_LOOK_AHEAD),
            position_damping: CAMERA_POSITION_DAMPING,
            rotation_damping: CAMERA_ROTATION_DAMPING,
        }
    }
}

/// Gun and projectile parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponConfig {
    pub fire_cooldown_secs: f64,
    pub projectile_speed: f32,
    pub projectile_lifetime_secs: f32,
    pub projectile_radius: f32,
    pub gun_lateral_offset: f32,
    pub gun_forward_offset: f32,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            fire_cooldown_secs: FIRE_COOLDOWN_SECS,
            projectile_speed: PROJECTILE_SPEED,
            projectile_lifetime_secs: PROJECTILE_LIFETIME_SECS,
            projectile_radius: PROJECTILE_RADIUS,
            gun_lateral_offset: GUN_LATERAL_OFFSET,
            gun_forward_offset: GUN_FORWARD_OFFSET,
        }
    }
}

/// Adversary population, steering and reward parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdversaryConfig {
    pub population_floor: usize,
    pub spawn_cooldown_secs: f64,
    pub spawn_radius: f32,
    pub min_altitude: f32,
    pub altitude_variation: f32,
    pub radius: f32,
    pub scale_min: f32,
    pub scale_max: f32,
    pub follow_speed: f32,
    pub wander_weight: f32,
    pub wander_resample_secs: f64,
    pub altitude_follow_rate: f32,
    pub altitude_drift_frequency: f32,
    pub min_separation: f32,
    pub separation_strength: f32,
    pub hit_score: i64,
    pub explosion_lifetime_secs: f32,
}

impl Default for AdversaryConfig {
    fn default() -> Self {
        Self {
            population_floor: POPULATION_FLOOR,
            spawn_cooldown_secs: SPAWN_COOLDOWN_SECS,
            spawn_radius: SPAWN_RADIUS,
            min_altitude: ADVERSARY_MIN_ALTITUDE,
            altitude_variation: ADVERSARY_ALTITUDE_VARIATION,
            radius: ADVERSARY_RADIUS,
            scale_min: ADVERSARY_SCALE_RANGE.0,
            scale_max: ADVERSARY_SCALE_RANGE.1,
            follow_speed: ADVERSARY_FOLLOW_SPEED,
            wander_weight: WANDER_WEIGHT,
            wander_resample_secs: WANDER_RESAMPLE_SECS,
            altitude_follow_rate: ALTITUDE_FOLLOW_RATE,
            altitude_drift_frequency: ALTITUDE_DRIFT_FREQUENCY,
            min_separation: MIN_SEPARATION,
            separation_strength: SEPARATION_STRENGTH,
            hit_score: HIT_SCORE,
            explosion_lifetime_secs: EXPLOSION_LIFETIME_SECS,
        }
    }
}

/// Session win/lose rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub max_health: i32,
    pub collision_damage: i32,
    pub victory_score: i64,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_health: PLAYER_MAX_HEALTH,
            collision_damage: COLLISION_DAMAGE,
            victory_score: VICTORY_SCORE,
        }
    }
}
