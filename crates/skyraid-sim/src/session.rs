//! Session state — the single mutable game-state record for one play
//! session. Owned by `SimulationEngine` and passed to systems alongside the
//! ECS world; nothing here lives in global or static storage.

use skyraid_core::constants::*;
use skyraid_core::enums::{GameOutcome, GamePhase, PowerUpKind};
use skyraid_core::events::AudioEvent;
use skyraid_core::types::SimTime;

use crate::player::PlayerCraft;
use crate::score::ScoreState;

/// All non-entity simulation state for a session.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Set on entering GameOver.
    pub outcome: Option<GameOutcome>,
    pub lives: u32,
    /// 1-based current level.
    pub level: usize,
    pub max_level: usize,
    /// Pre-round countdown value.
    pub countdown: u8,
    pub player: PlayerCraft,
    pub score: ScoreState,
    /// Shared horizontal direction of the enemy formation (+1 or -1).
    pub formation_direction: f32,

    // Elapsed-time accumulators replacing the original's per-feature
    // timers. All periodic triggers dispatch from the single tick loop.
    pub fire_accum: f64,
    pub enemy_fire_accum: f64,
    pub formation_accum: f64,
    pub countdown_accum: f64,

    /// Sim-clock second the session ended, for driver teardown.
    pub game_over_at_secs: Option<f64>,
    /// Events produced this tick, drained into the snapshot.
    pub audio_events: Vec<AudioEvent>,
}

impl SessionState {
    pub fn new(max_level: usize) -> Self {
        Self {
            time: SimTime::default(),
            phase: GamePhase::Countdown,
            outcome: None,
            lives: STARTING_LIVES,
            level: 1,
            max_level,
            countdown: COUNTDOWN_START,
            player: PlayerCraft::new(),
            score: ScoreState::default(),
            formation_direction: 1.0,
            fire_accum: 0.0,
            enemy_fire_accum: 0.0,
            formation_accum: 0.0,
            countdown_accum: 0.0,
            game_over_at_secs: None,
            audio_events: Vec::new(),
        }
    }

    /// Current sim-clock reading in seconds.
    pub fn now(&self) -> f64 {
        self.time.elapsed_secs
    }

    /// Resolve a hit on the player, from an enemy bullet or a formation
    /// breach. An active shield absorbs exactly one hit and deactivates
    /// without granting invulnerability; otherwise a life is lost and a
    /// fresh invulnerability window starts.
    pub fn player_hit(&mut self) {
        if self.player.shield_active {
            self.player.shield_active = false;
            self.audio_events.push(AudioEvent::ShieldAbsorbed);
            return;
        }
        if self.phase == GamePhase::GameOver {
            return;
        }

        self.lives = self.lives.saturating_sub(1);
        self.audio_events.push(AudioEvent::PlayerHit {
            lives_remaining: self.lives,
        });

        if self.lives == 0 {
            self.end_game(GameOutcome::Lost);
        } else {
            self.player.grant_invulnerability(self.time.elapsed_secs);
        }
    }

    /// Apply a collected power-up effect.
    pub fn apply_power_up(&mut self, kind: PowerUpKind) {
        let now = self.time.elapsed_secs;
        match kind {
            PowerUpKind::ExtraLife => self.lives += 1,
            PowerUpKind::RapidFire => self.player.rapid_fire_until = now + RAPID_FIRE_SECS,
            PowerUpKind::Shield => self.player.activate_shield(now),
        }
        self.audio_events.push(AudioEvent::PowerUpCollected { kind });
    }

    /// Enter the terminal state. Idempotent.
    pub fn end_game(&mut self, outcome: GameOutcome) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.outcome = Some(outcome);
        self.game_over_at_secs = Some(self.time.elapsed_secs);
        self.player.firing = false;
        self.audio_events.push(AudioEvent::GameOver { outcome });
    }
}
