//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// A projectile in flight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet {
    pub owner: BulletOwner,
    pub kind: BulletKind,
}

/// An enemy plane. Destroyed planes are marked invisible but stay in the
/// world until the level is rebuilt; invisible planes are excluded from
/// collision checks, formation movement bounds, and the snapshot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub visible: bool,
}

/// Multi-hit health, attached to boss planes only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BossHealth {
    pub current: i32,
    pub max: i32,
}

/// A falling pickup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerUp {
    pub kind: PowerUpKind,
}

/// Visual style of an explosion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ExplosionStyle {
    /// A frame sequence advanced on a fixed per-frame delay.
    Frames {
        frame_count: usize,
        frame_delay_secs: f64,
    },
    /// A single looping visual shown for a fixed total duration.
    Flash { duration_secs: f64 },
}

/// A transient explosion effect. Self-retires once its frames or duration
/// elapse; cleanup removes finished entries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Explosion {
    pub style: ExplosionStyle,
    /// Sim-clock second this explosion was created.
    pub spawned_at_secs: f64,
    /// Current frame index (frame-sequence style only).
    pub frame: usize,
    /// Sim-clock second of the last frame advance.
    pub last_frame_change_secs: f64,
    pub finished: bool,
}
