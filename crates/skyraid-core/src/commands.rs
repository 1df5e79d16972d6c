//! Player intents sent from the input layer to the simulation.
//!
//! Commands are queued and applied at the next tick boundary, never
//! mid-tick.

use serde::{Deserialize, Serialize};

use crate::enums::Facing;

/// All possible player intents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Move the craft so its left edge sits at `x` (clamped to the screen).
    /// Facing is derived from the movement direction and held briefly.
    /// Ignored while paused or after game over.
    MovePlayer { x: f32 },
    /// Explicitly set the craft facing (restarts the facing hold).
    SetFacing { facing: Facing },
    /// Begin the auto-fire cadence. Ignored during the countdown and after
    /// game over.
    StartFiring,
    /// Stop the auto-fire cadence.
    StopFiring,
    /// Toggle between Running and Paused. Ignored in any other phase.
    TogglePause,
}
