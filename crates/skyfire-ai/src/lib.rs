//! Adversary AI for SKYFIRE.
//!
//! Pursuit/wander steering, altitude drift and crowd separation as pure
//! functions over plain data. No ECS dependency.

pub mod steering;

pub use skyfire_core as core;
