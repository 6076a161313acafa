//! Game loop thread: runs the simulation engine at `TICK_RATE` Hz.
//!
//! The engine is created inside this thread so it never crosses a thread
//! boundary. Commands arrive via an `mpsc` channel. The latest snapshot is
//! stored in shared state for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use skyfire_core::config::SimConfig;
use skyfire_core::constants::{NOMINAL_DT, TICK_RATE};
use skyfire_core::input::InputSource;
use skyfire_core::state::SimSnapshot;

use crate::layout::Building;
use crate::runner::{self, RunSummary};
use crate::state::GameLoopCommand;

/// Nominal duration of one tick at 1x speed.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Everything the loop needs to build its engine.
pub struct LoopSetup {
    pub config: SimConfig,
    pub buildings: Vec<Building>,
    pub input: Box<dyn InputSource + Send>,
    /// Stop after this many ticks. `None` runs until shutdown.
    pub max_ticks: Option<u64>,
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and a handle yielding the run summary.
pub fn spawn_game_loop(
    setup: LoopSetup,
    latest_snapshot: Arc<Mutex<Option<SimSnapshot>>>,
) -> (mpsc::Sender<GameLoopCommand>, JoinHandle<RunSummary>) {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    let handle = std::thread::Builder::new()
        .name("skyfire-game-loop".into())
        .spawn(move || run_game_loop(setup, cmd_rx, &latest_snapshot))
        .expect("Failed to spawn game loop thread");

    (cmd_tx, handle)
}

/// The game loop. Runs until Shutdown, channel disconnect or the tick limit.
fn run_game_loop(
    setup: LoopSetup,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<SimSnapshot>>,
) -> RunSummary {
    let LoopSetup {
        config,
        buildings,
        mut input,
        max_ticks,
    } = setup;
    let mut engine = runner::build_engine(config, &buildings);
    let mut summary = RunSummary::default();
    let mut next_tick_time = Instant::now();
    info!(rate = TICK_RATE, "game loop started");

    loop {
        if max_ticks.is_some_and(|max| summary.ticks >= max) {
            info!(ticks = summary.ticks, "tick limit reached");
            return summary;
        }

        // 1. Drain pending commands; the last injected input wins.
        let mut injected = None;
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Input(snapshot)) => injected = Some(snapshot),
                Ok(GameLoopCommand::Shutdown) => {
                    info!(ticks = summary.ticks, "game loop shut down");
                    return summary;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    debug!("command channel closed");
                    return summary;
                }
            }
        }

        // 2. Advance one tick (the engine handles pause semantics internally)
        let tick_input = injected.unwrap_or_else(|| input.sample());
        let snapshot = engine.tick(NOMINAL_DT, &tick_input);
        summary.record(&snapshot);

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick, adjusting for time_scale
        let time_scale = engine.time_scale();
        let effective_tick_duration = if time_scale > 0.001 {
            TICK_DURATION.div_f64(time_scale)
        } else {
            TICK_DURATION
        };

        next_tick_time += effective_tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > effective_tick_duration * 2 {
            // Too far behind; reset to avoid a catch-up spiral.
            next_tick_time = now;
        }
    }
}
