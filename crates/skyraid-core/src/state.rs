//! Game state snapshot — the complete visible state handed to the rendering
//! collaborator after each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::AudioEvent;
use crate::types::{Position, SimTime, Size};

/// Complete game state produced by the engine each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Pre-round countdown value; 0 once the round is running.
    pub countdown: u8,
    /// 1-based current level.
    pub level: usize,
    pub max_level: usize,
    pub lives: u32,
    pub score: u32,
    pub combo: u32,
    /// Set once phase is GameOver.
    pub outcome: Option<GameOutcome>,
    pub player: PlayerView,
    /// Visible enemies only.
    pub enemies: Vec<EnemyView>,
    pub bullets: Vec<BulletView>,
    pub power_ups: Vec<PowerUpView>,
    pub explosions: Vec<ExplosionView>,
    pub audio_events: Vec<AudioEvent>,
}

/// Player craft state for rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub size: Size,
    pub facing: Facing,
    /// Renderer flickers the sprite while this holds.
    pub invulnerable: bool,
    pub shield_active: bool,
    pub rapid_fire: bool,
}

/// A visible enemy plane.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub kind: EnemyKind,
    pub position: Position,
    pub size: Size,
    /// Present for bosses: (current, max) for the health bar.
    pub health: Option<i32>,
    pub max_health: Option<i32>,
}

/// A bullet in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletView {
    pub owner: BulletOwner,
    pub kind: BulletKind,
    pub position: Position,
    pub size: Size,
}

/// A falling pickup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUpView {
    pub kind: PowerUpKind,
    pub position: Position,
    pub size: Size,
}

/// An active explosion effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplosionView {
    pub position: Position,
    /// Current frame for frame-sequence explosions.
    pub frame: Option<usize>,
    /// Seconds since creation, for duration-based visuals.
    pub elapsed_secs: f64,
}
