//! Player input as seen by the simulation.
//!
//! The input device layer is external. Once per tick the host samples an
//! [`InputSource`] into an [`InputSnapshot`] and hands it to the engine; the
//! snapshot is read only within that tick.

use serde::{Deserialize, Serialize};

/// Boolean state of the control axes plus this tick's discrete events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub pitch_up: bool,
    pub pitch_down: bool,
    pub roll_left: bool,
    pub roll_right: bool,
    pub throttle_up: bool,
    pub throttle_down: bool,
    /// Trigger held. Rate limiting happens in the weapon system.
    pub fire: bool,
    /// Reset the aircraft to spawn.
    pub reset: bool,
    /// Switch between chase and free camera.
    pub toggle_camera: bool,
    /// Toggle pause.
    pub pause: bool,
}

/// Signed unit axes derived from an [`InputSnapshot`]. Each is -1, 0 or 1.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ControlAxes {
    pub pitch: f32,
    pub roll: f32,
    pub throttle: f32,
}

fn axis(positive: bool, negative: bool) -> f32 {
    match (positive, negative) {
        (true, false) => 1.0,
        (false, true) => -1.0,
        _ => 0.0,
    }
}

impl InputSnapshot {
    /// Map the boolean intents to signed axes. Opposing keys cancel.
    pub fn axes(&self) -> ControlAxes {
        ControlAxes {
            pitch: axis(self.pitch_up, self.pitch_down),
            roll: axis(self.roll_right, self.roll_left),
            throttle: axis(self.throttle_up, self.throttle_down),
        }
    }
}

/// Anything that can be polled for the current input state.
pub trait InputSource {
    /// Sample the current state. Called once per tick.
    fn sample(&mut self) -> InputSnapshot;
}

/// An input source that never presses anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdleInput;

impl InputSource for IdleInput {
    fn sample(&mut self) -> InputSnapshot {
        InputSnapshot::default()
    }
}
