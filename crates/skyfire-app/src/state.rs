//! State shared between the runner and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use skyfire_core::input::InputSnapshot;
use skyfire_core::state::SimSnapshot;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// Use this snapshot instead of the loop's own input source for the next tick.
    Input(InputSnapshot),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Handles the runner keeps while the game loop is alive.
///
/// - `command_tx` is `None` until the loop has been spawned
/// - `latest_snapshot` is written by the loop after every tick
pub struct RunnerState {
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    pub latest_snapshot: Arc<Mutex<Option<SimSnapshot>>>,
}

impl Default for RunnerState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl RunnerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward a command to the loop. Returns false if the loop is not
    /// running or has already hung up.
    pub fn send(&self, command: GameLoopCommand) -> bool {
        match self.command_tx.lock() {
            Ok(guard) => guard.as_ref().is_some_and(|tx| tx.send(command).is_ok()),
            Err(_) => false,
        }
    }

    /// Clone of the most recent snapshot, if any tick has run.
    pub fn latest(&self) -> Option<SimSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|s| s.clone())
    }
}
