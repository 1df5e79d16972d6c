//! Player craft state — owned directly by the session, not stored in the
//! ECS world. There is exactly one craft per session and every subsystem
//! touches it, so a plain struct is simpler than a single-entity query.

use skyraid_core::constants::*;
use skyraid_core::enums::Facing;
use skyraid_core::geometry::Polygon;
use skyraid_core::types::{Position, Size};

/// The player's craft.
#[derive(Debug, Clone)]
pub struct PlayerCraft {
    pub position: Position,
    pub size: Size,
    pub facing: Facing,
    /// Auto-fire intent is currently held.
    pub firing: bool,
    /// Sim-clock second the post-hit invulnerability window ends.
    pub invulnerable_until: f64,
    pub shield_active: bool,
    /// Sim-clock second an unconsumed shield expires.
    pub shield_until: f64,
    /// Sim-clock second the triple-shot pattern reverts to single-shot.
    pub rapid_fire_until: f64,
    /// Sim-clock second a movement-derived facing reverts to neutral.
    pub facing_hold_until: f64,
    /// Wedge hitbox in screen space, recomputed on every position change.
    hitbox: Polygon,
}

impl PlayerCraft {
    pub fn new() -> Self {
        let position = Position::new(PLAYER_START_X, PLAYER_START_Y);
        Self {
            position,
            size: Size::new(PLAYER_SIZE, PLAYER_SIZE),
            facing: Facing::Neutral,
            firing: false,
            invulnerable_until: 0.0,
            shield_active: false,
            shield_until: 0.0,
            rapid_fire_until: 0.0,
            facing_hold_until: 0.0,
            hitbox: Polygon::translated(&PLAYER_HITBOX_VERTICES, position),
        }
    }

    /// Move the craft's left edge to `x` (already clamped by the caller)
    /// and recompute the hitbox.
    pub fn set_x(&mut self, x: f32) {
        self.position.x = x;
        self.hitbox = Polygon::translated(&PLAYER_HITBOX_VERTICES, self.position);
    }

    pub fn hitbox(&self) -> &Polygon {
        &self.hitbox
    }

    pub fn is_invulnerable(&self, now: f64) -> bool {
        now < self.invulnerable_until
    }

    pub fn rapid_fire_active(&self, now: f64) -> bool {
        now < self.rapid_fire_until
    }

    pub fn grant_invulnerability(&mut self, now: f64) {
        self.invulnerable_until = now + INVULNERABILITY_SECS;
    }

    pub fn activate_shield(&mut self, now: f64) {
        self.shield_active = true;
        self.shield_until = now + SHIELD_SECS;
    }

    /// Expire deadline-based states. Called once per tick.
    pub fn expire_timed_states(&mut self, now: f64) {
        if self.shield_active && now > self.shield_until {
            self.shield_active = false;
        }
        if self.facing != Facing::Neutral && now > self.facing_hold_until {
            self.facing = Facing::Neutral;
        }
    }
}

impl Default for PlayerCraft {
    fn default() -> Self {
        Self::new()
    }
}
