//! Enumeration types used throughout the simulation.
//!
//! Bullet, enemy and power-up variants are flat discriminators with
//! parameter tables exposed as methods. The original subclass-per-variant
//! trees collapse into these tables; systems stay generic over the kind.

use serde::{Deserialize, Serialize};

use crate::types::{Size, Velocity};

/// Which side fired a bullet. Determines the collision checks it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BulletOwner {
    Player,
    Enemy,
}

/// Bullet variant. One per projectile sprite in the game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BulletKind {
    /// The player's standard shot.
    #[default]
    Standard,
    /// Slow enemy round.
    Slug,
    /// Fast heavy enemy round.
    Bolt,
    /// Wide enemy round.
    Orb,
    /// Thin enemy round.
    Dart,
}

impl BulletKind {
    pub fn size(self) -> Size {
        match self {
            BulletKind::Standard => Size::new(15.0, 25.0),
            BulletKind::Slug => Size::new(15.0, 26.0),
            BulletKind::Bolt => Size::new(19.0, 30.0),
            BulletKind::Orb => Size::new(20.0, 30.0),
            BulletKind::Dart => Size::new(15.0, 26.0),
        }
    }

    /// Muzzle velocity in pixels per tick. Player shots travel up, enemy
    /// shots down.
    pub fn velocity(self) -> Velocity {
        match self {
            BulletKind::Standard => Velocity::new(0.0, -5.0),
            BulletKind::Slug => Velocity::new(0.0, 4.0),
            BulletKind::Bolt => Velocity::new(0.0, 6.0),
            BulletKind::Orb => Velocity::new(0.0, 4.0),
            BulletKind::Dart => Velocity::new(0.0, 4.0),
        }
    }

    pub fn owner(self) -> BulletOwner {
        match self {
            BulletKind::Standard => BulletOwner::Player,
            _ => BulletOwner::Enemy,
        }
    }

    /// Logical asset key resolved by the rendering collaborator.
    pub fn sprite_key(self) -> &'static str {
        match self {
            BulletKind::Standard => "bullet_simple",
            BulletKind::Slug => "enemy_bullet2",
            BulletKind::Bolt => "enemy_bullet1",
            BulletKind::Orb => "enemy_bullet3",
            BulletKind::Dart => "enemy_bullet4",
        }
    }
}

/// Enemy plane variant: four regular kinds plus two bosses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Scout,
    Raider,
    Viper,
    Bomber,
    /// First boss encounter (level 4).
    Dreadnought,
    /// Final boss encounter (level 6).
    Leviathan,
}

impl EnemyKind {
    pub fn size(self) -> Size {
        match self {
            EnemyKind::Scout => Size::new(40.0, 30.0),
            EnemyKind::Raider => Size::new(50.0, 35.0),
            EnemyKind::Viper => Size::new(45.0, 32.0),
            EnemyKind::Bomber => Size::new(55.0, 40.0),
            EnemyKind::Dreadnought => Size::new(250.0, 150.0),
            EnemyKind::Leviathan => Size::new(300.0, 180.0),
        }
    }

    /// Bullet variant this plane fires during a volley.
    pub fn bullet_kind(self) -> BulletKind {
        match self {
            EnemyKind::Scout => BulletKind::Slug,
            EnemyKind::Raider => BulletKind::Bolt,
            EnemyKind::Viper => BulletKind::Orb,
            EnemyKind::Bomber => BulletKind::Dart,
            EnemyKind::Dreadnought => BulletKind::Slug,
            EnemyKind::Leviathan => BulletKind::Bolt,
        }
    }

    /// Starting health for bosses; regular planes die to a single hit.
    pub fn max_health(self) -> Option<i32> {
        match self {
            EnemyKind::Dreadnought => Some(200),
            EnemyKind::Leviathan => Some(300),
            _ => None,
        }
    }

    pub fn is_boss(self) -> bool {
        self.max_health().is_some()
    }

    pub fn sprite_key(self) -> &'static str {
        match self {
            EnemyKind::Scout => "mob_small",
            EnemyKind::Raider => "mob2",
            EnemyKind::Viper => "mob3",
            EnemyKind::Bomber => "mob4",
            EnemyKind::Dreadnought => "boss1",
            EnemyKind::Leviathan => "boss2",
        }
    }
}

/// Beneficial pickup variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    ExtraLife,
    RapidFire,
    Shield,
}

impl PowerUpKind {
    pub fn sprite_key(self) -> &'static str {
        match self {
            PowerUpKind::ExtraLife => "powerup_extra_life",
            PowerUpKind::RapidFire => "powerup_fire_rate",
            PowerUpKind::Shield => "powerup_shield",
        }
    }
}

/// Player craft facing, driven by movement intents. Render concern only,
/// but tracked here because the 300ms hold is simulation state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
    #[default]
    Neutral,
}

/// Top-level engine state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Pre-round countdown: entities advance, no new bullets.
    #[default]
    Countdown,
    Running,
    Paused,
    /// Terminal. Further ticks are no-ops.
    GameOver,
}

/// How the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Won,
    Lost,
}
