//! Fundamental geometric and simulation types.

use std::f32::consts::{PI, TAU};

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_DT, SPAWN_POSITION, SPAWN_SPEED};
use crate::enums::CollisionKind;

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each advanced tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one tick of `dt` seconds. `dt` must already be clamped.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}

/// Clamp a raw frame delta into `[0, MAX_DT]`. Non-finite deltas become 0.
pub fn clamp_dt(dt: f64) -> f64 {
    if dt.is_finite() {
        dt.clamp(0.0, MAX_DT)
    } else {
        0.0
    }
}

/// Map an angle into (-π, π]. Non-finite input maps to 0.
pub fn normalize_angle(angle: f32) -> f32 {
    if !angle.is_finite() {
        return 0.0;
    }
    if angle > -PI && angle <= PI {
        return angle;
    }
    let wrapped = angle.rem_euclid(TAU);
    if wrapped > PI {
        wrapped - TAU
    } else {
        wrapped
    }
}

/// Orientation from Euler angles, composed yaw (world up) outermost, then
/// pitch about the local right axis, then roll about the nose axis (-Z).
///
/// The order is fixed so identical angles always yield identical rotations.
pub fn orientation_from_euler(pitch: f32, yaw: f32, roll: f32) -> Quat {
    Quat::from_rotation_y(yaw) * Quat::from_rotation_x(pitch) * Quat::from_axis_angle(Vec3::NEG_Z, roll)
}

/// Axis-aligned bounding box: center plus half-extents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub center: Vec3,
    pub half_extents: Vec3,
}

impl Aabb {
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            center,
            half_extents: half_extents.abs(),
        }
    }

    pub fn min(&self) -> Vec3 {
        self.center - self.half_extents
    }

    pub fn max(&self) -> Vec3 {
        self.center + self.half_extents
    }

    /// Closest point of the box to `point`.
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.clamp(self.min(), self.max())
    }

    /// True if a sphere strictly overlaps the box (touching is not overlap).
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        self.closest_point(center).distance_squared(center) < radius * radius
    }
}

/// Bounding sphere used for mobile entities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            center,
            radius: radius.abs(),
        }
    }

    /// True if two spheres strictly overlap.
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        self.center.distance(center) < self.radius + radius
    }
}

/// Complete kinematic state of the player aircraft.
///
/// Invariants (maintained by the flight controller): pitch within
/// ±max pitch, roll within ±max roll, yaw in (-π, π], speed within the
/// configured airspeed band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftState {
    pub position: Vec3,
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
    /// Derived from (pitch, yaw, roll) via [`orientation_from_euler`].
    pub orientation: Quat,
    pub speed: f32,
    /// Whether the last integrated tick touched an obstacle or the ground.
    pub colliding: bool,
    /// Simulation time of the last accepted collision.
    pub last_collision_secs: Option<f64>,
    /// Kind of the last accepted collision.
    pub last_collision_kind: Option<CollisionKind>,
    /// Input is ignored while recovering.
    pub recovering: bool,
}

impl AircraftState {
    /// Canonical spawn state at the given position and airspeed.
    pub fn spawn(position: Vec3, speed: f32) -> Self {
        Self {
            position,
            pitch: 0.0,
            yaw: 0.0,
            roll: 0.0,
            orientation: Quat::IDENTITY,
            speed,
            colliding: false,
            last_collision_secs: None,
            last_collision_kind: None,
            recovering: false,
        }
    }

    /// World-space nose direction.
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// World-space right-wing direction.
    pub fn right(&self) -> Vec3 {
        self.orientation * Vec3::X
    }

    /// Yaw-only orientation (pitch and roll zeroed).
    pub fn level_orientation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw)
    }
}

impl Default for AircraftState {
    fn default() -> Self {
        Self::spawn(Vec3::from_array(SPAWN_POSITION), SPAWN_SPEED)
    }
}
