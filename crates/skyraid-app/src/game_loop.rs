//! Game loop thread — runs the simulation engine at the fixed tick rate
//! and publishes snapshots.
//!
//! The engine is created inside the thread because it's cleaner for
//! ownership. Commands arrive via `mpsc` channel; snapshots are stored in a
//! shared mailbox for synchronous polling by the renderer. The loop tears
//! itself down a fixed delay after the session reaches game over.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use skyraid_core::constants::{GAME_OVER_LINGER_SECS, TICK_INTERVAL_MS};
use skyraid_core::enums::GamePhase;
use skyraid_core::state::GameStateSnapshot;
use skyraid_sim::engine::{SimConfig, SimulationEngine};

use crate::state::GameLoopCommand;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_millis(TICK_INTERVAL_MS);

/// Spawns the game loop in a new thread.
///
/// Returns the command sender for the input layer to use.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> mpsc::Sender<GameLoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("skyraid-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot);
        })
        .expect("Failed to spawn game loop thread");

    cmd_tx
}

/// The game loop. Runs until a Shutdown command, channel disconnect, or the
/// post-game-over linger elapses.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let mut engine = SimulationEngine::new(config);
    let mut next_tick_time = Instant::now();
    let mut game_over_seen: Option<Instant> = None;

    log::info!("game loop started");

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                    engine.queue_command(cmd);
                }
                Ok(GameLoopCommand::Shutdown) => {
                    log::info!("game loop shutting down on command");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (the engine handles pause/countdown gating)
        let snapshot = engine.tick();

        // 3. Session teardown a fixed delay after game over
        if snapshot.phase == GamePhase::GameOver {
            let seen = game_over_seen.get_or_insert_with(Instant::now);
            if seen.elapsed() >= Duration::from_secs_f64(GAME_OVER_LINGER_SECS) {
                if let Ok(mut lock) = latest_snapshot.lock() {
                    *lock = Some(snapshot.clone());
                }
                log::info!("game loop finished: {:?}", snapshot.outcome);
                return;
            }
        }

        // 4. Store the latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 5. Sleep until the next tick
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}
