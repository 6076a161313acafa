//! SKYFIRE headless runner.
//!
//! Wires the simulation engine to a scripted input source, a demo obstacle
//! layout and either a free-running or a fixed-rate game loop.

pub mod autopilot;
pub mod game_loop;
pub mod layout;
pub mod logging;
pub mod runner;
pub mod state;

pub use skyfire_core as core;
