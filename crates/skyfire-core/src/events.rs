//! Events emitted by the simulation for presentation and audio feedback.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// A projectile struck an adversary. Produced by the weapon system and
/// consumed by the adversary manager once the collision pass has finished.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitEvent {
    pub adversary_id: u32,
    /// Where the hit happened (projectile position).
    pub position: Vec3,
}

/// Feedback events drained into each snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A fire request was accepted and a projectile pair launched.
    ShotFired { position: Vec3 },
    /// A projectile timed out without hitting anything.
    ProjectileExpired { projectile_id: u32 },
    /// The aircraft hit an obstacle or the ground and entered recovery.
    Collision { kind: CollisionKind, position: Vec3 },
    /// Recovery finished; input is live again.
    RecoveryEnded,
    /// The aircraft was reset to its spawn state.
    AircraftReset,
    AdversarySpawned { adversary_id: u32, position: Vec3 },
    AdversaryDestroyed { adversary_id: u32, position: Vec3 },
    ExplosionFinished { position: Vec3 },
    StatusChanged { status: GameStatus },
    CameraModeChanged { mode: CameraMode },
}
