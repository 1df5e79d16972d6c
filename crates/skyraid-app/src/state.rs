//! Application state shared between the frontend glue and the game loop
//! thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use skyraid_core::commands::PlayerCommand;
use skyraid_core::state::GameStateSnapshot;

/// Commands sent from the input layer to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// A player intent to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared driver state.
///
/// - `mpsc::Sender` is Send but not Sync, so it sits behind a `Mutex`
/// - `Mutex<Option<...>>` because the sender does not exist before
///   `start_session` spawns the loop
/// - `Arc<Mutex<...>>` for the snapshot mailbox shared with the loop thread
pub struct AppState {
    /// Channel sender to forward commands to the game loop thread.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Latest snapshot for synchronous polling by the renderer.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
