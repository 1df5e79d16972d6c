//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world and the session state,
//! processes player commands, runs all systems in a fixed order, and
//! produces `GameStateSnapshot`s. Completely headless (no windowing or
//! rendering dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skyraid_core::commands::PlayerCommand;
use skyraid_core::constants::*;
use skyraid_core::enums::{Facing, GameOutcome, GamePhase};
use skyraid_core::events::AudioEvent;
use skyraid_core::state::GameStateSnapshot;

use crate::levels;
use crate::session::SessionState;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same commands = same session.
    pub seed: u64,
    /// 1-based level to open the session on.
    pub starting_level: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            starting_level: 1,
        }
    }
}

/// The simulation engine. Owns the ECS world and all session state.
pub struct SimulationEngine {
    world: World,
    session: SessionState,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
}

impl SimulationEngine {
    /// Create a new engine with the opening level's formation in place and
    /// the pre-round countdown running.
    pub fn new(config: SimConfig) -> Self {
        let mut engine = Self {
            world: World::new(),
            session: SessionState::new(levels::level_count()),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
        };
        engine.load_level(config.starting_level);
        engine
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// Paused sessions process commands but freeze the clock; game-over
    /// sessions additionally ignore everything except `reset`.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        match self.session.phase {
            GamePhase::Countdown => {
                self.advance_countdown();
                self.run_systems(false);
                self.session.time.advance();
            }
            GamePhase::Running => {
                self.run_systems(true);
                self.session.time.advance();
            }
            GamePhase::Paused | GamePhase::GameOver => {}
        }

        let audio_events = std::mem::take(&mut self.session.audio_events);
        systems::snapshot::build_snapshot(&self.world, &self.session, audio_events)
    }

    /// Full session restart: fresh world, lives, score, and countdown on
    /// level 1. The only way out of GameOver.
    pub fn reset(&mut self) {
        self.world = World::new();
        self.session = SessionState::new(levels::level_count());
        self.command_queue.clear();
        self.despawn_buffer.clear();
        self.load_level(1);
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    /// Get a read-only reference to the session state.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        let phase = self.session.phase;
        match command {
            PlayerCommand::MovePlayer { x } => {
                if matches!(phase, GamePhase::Paused | GamePhase::GameOver) {
                    return;
                }
                let now = self.session.now();
                let player = &mut self.session.player;
                let clamped = x.clamp(0.0, SCREEN_WIDTH - player.size.w);
                if clamped > player.position.x {
                    player.facing = Facing::Right;
                    player.facing_hold_until = now + FACING_HOLD_SECS;
                } else if clamped < player.position.x {
                    player.facing = Facing::Left;
                    player.facing_hold_until = now + FACING_HOLD_SECS;
                }
                player.set_x(clamped);
            }
            PlayerCommand::SetFacing { facing } => {
                if matches!(phase, GamePhase::Paused | GamePhase::GameOver) {
                    return;
                }
                let now = self.session.now();
                self.session.player.facing = facing;
                self.session.player.facing_hold_until = now + FACING_HOLD_SECS;
            }
            PlayerCommand::StartFiring => {
                // No firing during the countdown; re-press once running.
                if matches!(phase, GamePhase::Running | GamePhase::Paused) {
                    self.session.player.firing = true;
                    self.session.fire_accum = 0.0;
                }
            }
            PlayerCommand::StopFiring => {
                self.session.player.firing = false;
            }
            PlayerCommand::TogglePause => match phase {
                GamePhase::Running => self.session.phase = GamePhase::Paused,
                GamePhase::Paused => self.session.phase = GamePhase::Running,
                _ => {}
            },
        }
    }

    /// Decrement the pre-round countdown once per second of sim time.
    fn advance_countdown(&mut self) {
        self.session.countdown_accum += DT;
        if self.session.countdown_accum >= COUNTDOWN_STEP_SECS {
            self.session.countdown_accum -= COUNTDOWN_STEP_SECS;
            self.session.countdown = self.session.countdown.saturating_sub(1);
            self.session.audio_events.push(AudioEvent::CountdownTick {
                value: self.session.countdown,
            });
            if self.session.countdown == 0 {
                self.session.phase = GamePhase::Running;
            }
        }
    }

    /// Run all systems in order. `firing_enabled` is false during the
    /// countdown: cadences keep their phase, but no bullets are created.
    fn run_systems(&mut self, firing_enabled: bool) {
        // 1. Firing cadences
        self.run_firing_cadences(firing_enabled);
        // 2. Kinematic integration (bullets, falling power-ups)
        systems::movement::run(&mut self.world);
        // 3. Formation movement on its own cadence
        self.session.formation_accum += DT;
        while self.session.formation_accum >= FORMATION_STEP_SECS {
            self.session.formation_accum -= FORMATION_STEP_SECS;
            systems::formation::step(&mut self.world, &mut self.session);
            if self.session.phase == GamePhase::GameOver {
                break;
            }
        }
        // 4. Collision resolution
        systems::collision::run(
            &mut self.world,
            &mut self.session,
            &mut self.rng,
            &mut self.despawn_buffer,
        );
        // 5. Explosion aging
        systems::explosion::run(&mut self.world, self.session.now());
        // 6. Timed player state expiry
        let now = self.session.now();
        self.session.player.expire_timed_states(now);
        // 7. Level progression / win condition
        self.check_level_transition();
        // 8. Compaction (off-screen, finished, pending removals)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }

    /// Advance the player and enemy fire accumulators. Accumulators run
    /// even while firing is suppressed so the cadence phase is preserved;
    /// suppressed triggers are dropped, not deferred.
    fn run_firing_cadences(&mut self, firing_enabled: bool) {
        if self.session.player.firing {
            self.session.fire_accum += DT;
            while self.session.fire_accum >= PLAYER_FIRE_INTERVAL_SECS {
                self.session.fire_accum -= PLAYER_FIRE_INTERVAL_SECS;
                if firing_enabled {
                    systems::firing::player_fire(&mut self.world, &mut self.session);
                }
            }
        } else {
            self.session.fire_accum = 0.0;
        }

        self.session.enemy_fire_accum += DT;
        while self.session.enemy_fire_accum >= ENEMY_FIRE_INTERVAL_SECS {
            self.session.enemy_fire_accum -= ENEMY_FIRE_INTERVAL_SECS;
            if firing_enabled {
                systems::firing::enemy_volley(&mut self.world, &mut self.session);
            }
        }
    }

    /// Advance to the next level once the kill target is met, or end the
    /// session with a win after the final level.
    fn check_level_transition(&mut self) {
        if self.session.phase == GamePhase::GameOver || !self.session.score.level_cleared() {
            return;
        }
        if self.session.level < self.session.max_level {
            self.load_level(self.session.level + 1);
        } else {
            self.session.end_game(GameOutcome::Won);
        }
    }

    /// Rebuild the formation for `level`. An undefined level index is a
    /// configuration error: it is logged and ignored, leaving the current
    /// level untouched.
    fn load_level(&mut self, level: usize) {
        let Some(config) = levels::config_for(level) else {
            log::warn!(
                "level {level} is not defined; staying on level {}",
                self.session.level
            );
            return;
        };

        world_setup::clear_formation(&mut self.world);
        let count = world_setup::spawn_formation(&mut self.world, level, &config);

        self.session.level = level;
        self.session.score.reset_for_level(count);
        self.session
            .audio_events
            .push(AudioEvent::LevelStarted { level });
    }

    /// Mutable session access for tests.
    #[cfg(test)]
    pub fn session_mut(&mut self) -> &mut SessionState {
        &mut self.session
    }

    /// Skip the pre-round countdown (for tests that start mid-round).
    #[cfg(test)]
    pub fn skip_countdown(&mut self) {
        self.session.countdown = 0;
        self.session.phase = GamePhase::Running;
    }

    /// Spawn a bullet directly (for tests exercising collision paths).
    #[cfg(test)]
    pub fn spawn_test_bullet(
        &mut self,
        kind: skyraid_core::enums::BulletKind,
        x: f32,
        y: f32,
    ) -> hecs::Entity {
        world_setup::spawn_bullet(
            &mut self.world,
            kind,
            skyraid_core::types::Position::new(x, y),
        )
    }

    /// Jump to a level directly (for tests; same path as a real transition).
    #[cfg(test)]
    pub fn load_level_for_test(&mut self, level: usize) {
        self.load_level(level);
    }

    /// Mutable world access for tests that stage entity state directly.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }
}
