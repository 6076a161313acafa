use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info, Level};

use skyfire_app::autopilot::Autopilot;
use skyfire_app::game_loop::{self, LoopSetup};
use skyfire_app::layout;
use skyfire_app::logging::{self, LogConfig};
use skyfire_app::runner;
use skyfire_app::state::{GameLoopCommand, RunnerState};
use skyfire_core::config::SimConfig;

/// Headless SKYFIRE flight-combat simulation.
#[derive(Parser, Debug)]
#[command(name = "skyfire", version, about)]
struct Cli {
    /// RNG seed, overriding the config file.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of ticks to run.
    #[arg(long, default_value_t = 3600)]
    ticks: u64,

    /// JSON config file. Missing fields keep their defaults.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// trace, debug, info, warn or error. RUST_LOG takes precedence.
    #[arg(long, default_value = "info", value_parser = logging::parse_log_level)]
    log_level: Level,

    /// Emit logs as JSON lines.
    #[arg(long)]
    log_json: bool,

    /// Run on the fixed-rate game loop thread instead of as fast as possible.
    #[arg(long)]
    realtime: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_config = LogConfig {
        level: cli.log_level,
        json: cli.log_json,
    };
    if let Err(err) = logging::init_logging(&log_config) {
        eprintln!("failed to initialise logging: {err}");
        return ExitCode::FAILURE;
    }

    let mut config = match &cli.config {
        Some(path) => match SimConfig::from_path(path) {
            Ok(config) => config,
            Err(err) => {
                error!(%err, "could not load config");
                return ExitCode::FAILURE;
            }
        },
        None => SimConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    info!(seed = config.seed, ticks = cli.ticks, realtime = cli.realtime, "starting");
    let buildings = layout::city_grid(6, 6, 80.0, 250.0);

    let summary = if cli.realtime {
        let state = RunnerState::new();
        let setup = LoopSetup {
            config,
            buildings,
            input: Box::new(Autopilot::new()),
            max_ticks: Some(cli.ticks),
        };
        let (tx, handle) = game_loop::spawn_game_loop(setup, state.latest_snapshot.clone());
        if let Ok(mut slot) = state.command_tx.lock() {
            *slot = Some(tx);
        }

        while !handle.is_finished() {
            std::thread::sleep(Duration::from_secs(1));
            let Some(snapshot) = state.latest() else {
                continue;
            };
            info!(
                tick = snapshot.time.tick,
                score = snapshot.game.score,
                health = snapshot.game.player_health,
                "realtime progress"
            );
            if snapshot.status.is_terminal() {
                state.send(GameLoopCommand::Shutdown);
            }
        }

        match handle.join() {
            Ok(summary) => summary,
            Err(_) => {
                error!("game loop thread panicked");
                return ExitCode::FAILURE;
            }
        }
    } else {
        let mut engine = runner::build_engine(config, &buildings);
        runner::run_headless(&mut engine, &mut Autopilot::new(), cli.ticks)
    };

    summary.log();
    ExitCode::SUCCESS
}
