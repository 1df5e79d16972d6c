//! Events emitted by the simulation for audio and UI feedback.
//!
//! Collected during a tick and drained into that tick's snapshot.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Audio events for the frontend sound system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// A bullet was fired.
    ShotFired { owner: BulletOwner },
    /// A regular plane was destroyed.
    EnemyDown { kind: EnemyKind },
    /// A boss took a hit and survived.
    BossDamaged { kind: EnemyKind, remaining: i32 },
    /// A power-up dropped from a destroyed plane.
    PowerUpSpawned { kind: PowerUpKind },
    /// The player collected a power-up.
    PowerUpCollected { kind: PowerUpKind },
    /// The player took a hit and lost a life.
    PlayerHit { lives_remaining: u32 },
    /// The shield absorbed a hit and deactivated.
    ShieldAbsorbed,
    /// A new level's formation was spawned.
    LevelStarted { level: usize },
    /// The pre-round countdown decremented.
    CountdownTick { value: u8 },
    /// The session ended.
    GameOver { outcome: GameOutcome },
}
