//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Session status shown by the HUD.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    Playing,
    Victory,
    Defeat,
    Paused,
}

impl GameStatus {
    /// Victory and defeat end the session.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Victory | GameStatus::Defeat)
    }
}

/// What the aircraft ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionKind {
    Ground,
    Building,
}

/// Which camera path drives the view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CameraMode {
    /// Smoothed chase rig behind the aircraft.
    #[default]
    Chase,
    /// Externally driven free camera; the chase rig is idle.
    Free,
}

impl CameraMode {
    pub fn toggled(self) -> Self {
        match self {
            CameraMode::Chase => CameraMode::Free,
            CameraMode::Free => CameraMode::Chase,
        }
    }
}
