//! Scoring and combo state tracked by the engine.

use skyraid_core::constants::COMBO_WINDOW_SECS;

/// Running score, combo, and per-level kill progress.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub score: u32,
    /// Consecutive-kill multiplier. Resets to 1 after a >1s gap.
    pub combo: u32,
    /// Sim-clock second of the most recent kill.
    pub last_kill_secs: f64,
    pub kills_this_level: u32,
    /// Number of planes the current level spawned with.
    pub level_target: u32,
    /// At most one power-up drops per level.
    pub power_up_dropped: bool,
}

impl ScoreState {
    /// Record a kill: extend or reset the combo, add `base * combo` to the
    /// score, and bump the per-level counter. Returns the points awarded.
    pub fn register_kill(&mut self, base: u32, now: f64) -> u32 {
        if now - self.last_kill_secs <= COMBO_WINDOW_SECS {
            self.combo += 1;
        } else {
            self.combo = 1;
        }
        self.last_kill_secs = now;

        let awarded = base * self.combo;
        self.score += awarded;
        self.kills_this_level += 1;
        awarded
    }

    /// Whether the current level's kill target has been met.
    /// A level with no planes never clears.
    pub fn level_cleared(&self) -> bool {
        self.level_target > 0 && self.kills_this_level >= self.level_target
    }

    /// Reset per-level progress for a freshly spawned formation.
    /// Score carries across levels; combo state does not.
    pub fn reset_for_level(&mut self, target: u32) {
        self.kills_this_level = 0;
        self.level_target = target;
        self.power_up_dropped = false;
        self.combo = 0;
        self.last_kill_secs = 0.0;
    }
}
