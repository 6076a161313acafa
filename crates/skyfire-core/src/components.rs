//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in the simulation crate, not in components.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A hostile flyer pursuing the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Adversary {
    /// Stable id, also the key of the adversary's dynamic-registry entry.
    pub id: u32,
    pub position: Vec3,
    /// Size multiplier applied to the base hit radius.
    pub scale: f32,
    /// Current random wander direction (horizontal unit vector).
    pub wander: Vec3,
    /// Simulation time of the last wander resample.
    pub last_resample_secs: f64,
    /// Altitude around which the drift target oscillates.
    pub cruise_altitude: f32,
    /// Phase offset of the altitude drift (radians).
    pub drift_phase: f32,
}

/// A gun round in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub position: Vec3,
    /// Unit direction frozen at launch.
    pub direction: Vec3,
    /// Seconds since launch.
    pub age: f32,
    pub max_lifetime: f32,
}

/// A short-lived visual explosion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplosionEffect {
    pub position: Vec3,
    /// Seconds since the effect started.
    pub age: f32,
    pub lifetime: f32,
    /// Set once the completion callback has fired.
    pub completed: bool,
}
