//! Per-tick systems operating on the simulation world.
//!
//! Each system owns the entity kind it writes and reads everything else
//! through shared references passed in by the engine.

pub mod adversaries;
pub mod snapshot;
pub mod weapons;
