//! Headless run: tick the engine as fast as possible and tally the outcome.

use tracing::info;

use skyfire_core::config::SimConfig;
use skyfire_core::constants::{NOMINAL_DT, TICK_RATE};
use skyfire_core::enums::GameStatus;
use skyfire_core::events::SimEvent;
use skyfire_core::input::InputSource;
use skyfire_core::state::SimSnapshot;
use skyfire_sim::SimulationEngine;

use crate::layout::{self, Building};

/// Totals gathered from the snapshots of one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub ticks: u64,
    pub sim_secs: f64,
    pub shots: u32,
    pub kills: u32,
    pub collisions: u32,
    pub score: i64,
    pub player_health: i32,
    pub adversaries: u32,
    pub status: GameStatus,
}

impl RunSummary {
    pub fn record(&mut self, snapshot: &SimSnapshot) {
        self.ticks += 1;
        self.sim_secs = snapshot.time.elapsed_secs;
        for event in &snapshot.events {
            match event {
                SimEvent::ShotFired { .. } => self.shots += 1,
                SimEvent::AdversaryDestroyed { .. } => self.kills += 1,
                SimEvent::Collision { .. } => self.collisions += 1,
                _ => {}
            }
        }
        self.score = snapshot.game.score;
        self.player_health = snapshot.game.player_health;
        self.adversaries = snapshot.game.adversary_count;
        self.status = snapshot.status;
    }

    pub fn log(&self) {
        info!(
            ticks = self.ticks,
            sim_secs = self.sim_secs,
            shots = self.shots,
            kills = self.kills,
            collisions = self.collisions,
            score = self.score,
            health = self.player_health,
            adversaries = self.adversaries,
            status = ?self.status,
            "run summary"
        );
    }
}

/// Build an engine and register the obstacle layout.
pub fn build_engine(config: SimConfig, buildings: &[Building]) -> SimulationEngine {
    let mut engine = SimulationEngine::new(config);
    layout::register_all(&mut engine, buildings);
    info!(obstacles = buildings.len(), "world ready");
    engine
}

/// Run up to `ticks` ticks, stopping early once the session is decided.
pub fn run_headless(
    engine: &mut SimulationEngine,
    input: &mut dyn InputSource,
    ticks: u64,
) -> RunSummary {
    let mut summary = RunSummary::default();
    let progress_every = u64::from(TICK_RATE) * 10;

    for _ in 0..ticks {
        let snapshot = engine.tick(NOMINAL_DT, &input.sample());
        summary.record(&snapshot);

        if summary.ticks % progress_every == 0 {
            info!(
                tick = summary.ticks,
                score = summary.score,
                health = summary.player_health,
                "progress"
            );
        }
        if snapshot.status.is_terminal() {
            info!(status = ?snapshot.status, tick = summary.ticks, "session decided");
            break;
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    use skyfire_core::input::IdleInput;

    use crate::autopilot::Autopilot;

    #[test]
    fn test_headless_run_counts_ticks() {
        let mut engine = build_engine(SimConfig::default(), &[]);
        let summary = run_headless(&mut engine, &mut IdleInput, 120);
        assert_eq!(summary.ticks, 120);
        assert!((summary.sim_secs - 2.0).abs() < 1e-6);
        assert_eq!(summary.shots, 0);
        assert_eq!(summary.status, GameStatus::Playing);
    }

    #[test]
    fn test_autopilot_run_fires() {
        let mut engine = build_engine(SimConfig::default(), &[]);
        let summary = run_headless(&mut engine, &mut Autopilot::new(), 600);
        // Held trigger: one shot every 12 ticks.
        assert_eq!(summary.shots, 50);
        assert!(summary.score >= 0);
    }

    #[test]
    fn test_run_stops_on_defeat() {
        let mut config = SimConfig::default();
        config.rules.max_health = 20;
        let wall = Building {
            id: 0,
            position: glam::Vec3::new(0.0, 60.0, 0.0),
            half_extents: glam::Vec3::splat(10.0),
        };
        let mut engine = build_engine(config, &[wall]);
        let summary = run_headless(&mut engine, &mut IdleInput, 500);
        assert_eq!(summary.status, GameStatus::Defeat);
        assert_eq!(summary.ticks, 1);
        assert_eq!(summary.collisions, 1);
    }
}
