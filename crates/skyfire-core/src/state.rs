//! Simulation snapshot: the complete visible state handed to the
//! presentation layer after each tick.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::SimEvent;
use crate::types::SimTime;

/// Complete read-only view of the simulation after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimSnapshot {
    pub time: SimTime,
    pub status: GameStatus,
    pub aircraft: AircraftView,
    pub camera: CameraView,
    pub adversaries: Vec<AdversaryView>,
    pub projectiles: Vec<ProjectileView>,
    pub explosions: Vec<ExplosionView>,
    pub game: GameStateView,
    pub events: Vec<SimEvent>,
}

/// Player aircraft pose and flight status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AircraftView {
    pub position: Vec3,
    pub orientation: Quat,
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
    pub speed: f32,
    pub recovering: bool,
}

/// Pose of the rendering camera.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CameraView {
    pub mode: CameraMode,
    pub position: Vec3,
    pub orientation: Quat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdversaryView {
    pub id: u32,
    pub position: Vec3,
    pub scale: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u32,
    pub position: Vec3,
    pub direction: Vec3,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplosionView {
    pub position: Vec3,
    /// Linearly decaying 1.0 → 0.0 over the effect's lifetime.
    pub intensity: f32,
}

/// HUD-facing game state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStateView {
    pub score: i64,
    pub adversary_count: u32,
    pub player_health: i32,
    pub status: GameStatus,
}
