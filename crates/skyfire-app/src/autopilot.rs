//! Scripted input for demos and soak runs.
//!
//! Open loop: a fixed manoeuvre cycle keyed on the tick counter, with the
//! trigger held throughout.

use skyfire_core::constants::TICK_RATE;
use skyfire_core::input::{InputSnapshot, InputSource};

/// Length of one manoeuvre cycle.
const CYCLE_TICKS: u64 = 8 * TICK_RATE as u64;

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    tick: u64,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Input for a given tick without advancing the script.
    pub fn input_at(tick: u64) -> InputSnapshot {
        let second = |s: u64| s * TICK_RATE as u64;
        let phase = tick % CYCLE_TICKS;

        InputSnapshot {
            fire: true,
            throttle_up: phase < second(2),
            throttle_down: (second(6)..second(7)).contains(&phase),
            roll_right: (second(1)..second(3)).contains(&phase),
            roll_left: (second(5)..second(6)).contains(&phase),
            pitch_up: (second(3)..second(3) + 20).contains(&phase),
            pitch_down: (second(7)..second(7) + 10).contains(&phase),
            ..Default::default()
        }
    }
}

impl InputSource for Autopilot {
    fn sample(&mut self) -> InputSnapshot {
        let input = Self::input_at(self.tick);
        self.tick += 1;
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_always_held() {
        let mut pilot = Autopilot::new();
        assert!((0..2000).all(|_| pilot.sample().fire));
    }

    #[test]
    fn test_script_repeats_each_cycle() {
        for tick in [0, 75, 200, 333, 470] {
            assert_eq!(Autopilot::input_at(tick), Autopilot::input_at(tick + CYCLE_TICKS));
        }
    }

    #[test]
    fn test_never_commands_opposing_axes() {
        for tick in 0..CYCLE_TICKS {
            let input = Autopilot::input_at(tick);
            assert!(!(input.roll_left && input.roll_right));
            assert!(!(input.pitch_up && input.pitch_down));
            assert!(!(input.throttle_up && input.throttle_down));
        }
    }
}
