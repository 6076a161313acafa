//! Simulation core for SKYFIRE.
//!
//! Owns the hecs world, the collision registries and every per-tick
//! subsystem, and produces `SimSnapshot`s for the presentation layer.

pub mod camera;
pub mod effects;
pub mod engine;
pub mod flight;
pub mod game_state;
pub mod projectile;
pub mod registry;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use skyfire_core as core;
