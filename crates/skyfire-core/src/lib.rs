//! Core types and definitions for the SKYFIRE flight-combat simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, input, state snapshots, events, tuning constants and config.
//! It has no dependency on any runtime framework.

pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
