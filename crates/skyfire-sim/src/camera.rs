//! Chase camera rig.
//!
//! Keeps a damped rig pose separate from the raw aircraft pose so the view
//! does not inherit per-tick jitter. The rig follows a yaw-only frame of the
//! aircraft, and the look rotation is rebuilt against world up every tick so
//! the horizon never tilts with the wings.

use glam::{Mat3, Quat, Vec3};

use skyfire_core::config::CameraConfig;
use skyfire_core::enums::CameraMode;
use skyfire_core::state::CameraView;
use skyfire_core::types::AircraftState;

pub struct CameraRig {
    config: CameraConfig,
    mode: CameraMode,
    rig_position: Vec3,
    /// Look rotation the camera is easing toward.
    rig_orientation: Quat,
    camera_orientation: Quat,
    initialized: bool,
}

impl CameraRig {
    pub fn new(config: CameraConfig) -> Self {
        Self {
            config,
            mode: CameraMode::Chase,
            rig_position: Vec3::ZERO,
            rig_orientation: Quat::IDENTITY,
            camera_orientation: Quat::IDENTITY,
            initialized: false,
        }
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Switch camera paths. Re-entering chase mode snaps the rig on its next update.
    pub fn toggle_mode(&mut self) -> CameraMode {
        self.mode = self.mode.toggled();
        if self.mode == CameraMode::Chase {
            self.initialized = false;
        }
        self.mode
    }

    /// Snap to the aircraft on the next update instead of easing.
    pub fn recenter(&mut self) {
        self.initialized = false;
    }

    pub fn view(&self) -> CameraView {
        CameraView {
            mode: self.mode,
            position: self.rig_position,
            orientation: self.camera_orientation,
        }
    }

    /// Advance the rig toward the aircraft. No-op in free mode or while the
    /// aircraft pose is unavailable.
    pub fn update(&mut self, dt: f32, aircraft: Option<&AircraftState>) {
        if self.mode == CameraMode::Free {
            return;
        }
        let Some(aircraft) = aircraft else {
            return;
        };

        let level = aircraft.level_orientation();
        let desired = aircraft.position + level * self.config.offset;
        let look_target = aircraft.position + level * self.config.look_ahead;

        if !self.initialized {
            self.rig_position = desired;
            if let Some(look) = level_look_rotation(look_target - desired) {
                self.rig_orientation = look;
                self.camera_orientation = look;
            }
            self.initialized = true;
            return;
        }

        let dt = dt.max(0.0);
        self.rig_position = self
            .rig_position
            .lerp(desired, damping_factor(self.config.position_damping, dt));

        if let Some(look) = level_look_rotation(look_target - self.rig_position) {
            self.rig_orientation = look;
        }
        let eased = self
            .camera_orientation
            .slerp(self.rig_orientation, damping_factor(self.config.rotation_damping, dt))
            .normalize();
        // Slerp between two level rotations can pick up a trace of roll.
        self.camera_orientation = level_look_rotation(eased * Vec3::NEG_Z).unwrap_or(eased);
    }
}

/// Frame-rate independent lerp factor for an exponential approach.
pub fn damping_factor(rate: f32, dt: f32) -> f32 {
    1.0 - (-rate * dt).exp()
}

/// Rotation whose -Z axis looks along `direction` with the right axis kept
/// horizontal. `None` when the direction is zero or vertical.
pub fn level_look_rotation(direction: Vec3) -> Option<Quat> {
    let forward = direction.normalize_or_zero();
    if forward == Vec3::ZERO {
        return None;
    }
    let right = forward.cross(Vec3::Y);
    if right.length_squared() < 1e-8 {
        return None;
    }
    let right = right.normalize();
    let up = right.cross(forward);
    Some(Quat::from_mat3(&Mat3::from_cols(right, up, -forward)).normalize())
}
