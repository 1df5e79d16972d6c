//! Simulation constants and tuning parameters.

// --- Tick timing ---

/// Simulation tick interval in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 15;

/// Seconds per tick.
pub const DT: f64 = TICK_INTERVAL_MS as f64 / 1000.0;

// --- Playfield ---

/// Playfield width in pixels.
pub const SCREEN_WIDTH: f32 = 800.0;

/// Playfield height in pixels.
pub const SCREEN_HEIGHT: f32 = 800.0;

// --- Player craft ---

/// Player spawn position.
pub const PLAYER_START_X: f32 = 360.0;
pub const PLAYER_START_Y: f32 = 700.0;

/// Player craft extent (square sprite).
pub const PLAYER_SIZE: f32 = 70.0;

/// Wedge hitbox vertices in model space (forward-pointing triangle).
pub const PLAYER_HITBOX_VERTICES: [(f32, f32); 3] = [(10.0, 0.0), (60.0, 35.0), (10.0, 70.0)];

/// Starting lives.
pub const STARTING_LIVES: u32 = 3;

/// Interval between player shots while the fire intent is held.
pub const PLAYER_FIRE_INTERVAL_SECS: f64 = 0.2;

/// How long a movement-derived facing is held before reverting to neutral.
pub const FACING_HOLD_SECS: f64 = 0.3;

/// Post-hit invulnerability window.
pub const INVULNERABILITY_SECS: f64 = 2.5;

// --- Power-ups ---

/// Chance that a kill drops a power-up (rolled at most once per level).
pub const POWER_UP_DROP_CHANCE: f64 = 0.2;

/// Power-up extent.
pub const POWER_UP_SIZE: f32 = 30.0;

/// Constant downward fall speed, pixels per tick.
pub const POWER_UP_FALL_SPEED: f32 = 2.0;

/// Duration of the triple-shot pattern.
pub const RAPID_FIRE_SECS: f64 = 4.0;

/// Shield duration if not consumed by a hit first.
pub const SHIELD_SECS: f64 = 5.0;

// --- Enemies / formation ---

/// Interval between enemy volleys (every visible enemy fires once).
pub const ENEMY_FIRE_INTERVAL_SECS: f64 = 3.0;

/// Interval between formation movement steps.
pub const FORMATION_STEP_SECS: f64 = 0.03;

/// Horizontal distance moved per formation step, in pixels.
pub const FORMATION_SPEED: f32 = 1.0;

/// Formation layout: the grid slot planes are positioned on.
pub const FORMATION_SLOT_WIDTH: f32 = 40.0;
pub const FORMATION_SLOT_HEIGHT: f32 = 30.0;
pub const FORMATION_TOP_MARGIN: f32 = 40.0;
pub const FORMATION_ROW_GAP: f32 = 5.0;

/// Damage a boss takes per registered player-bullet hit.
pub const BOSS_HIT_DAMAGE: i32 = 5;

/// Base score value for destroying a boss (combo-multiplied).
pub const BOSS_KILL_BONUS: u32 = 100;

/// Base score value for destroying a regular plane (combo-multiplied).
pub const KILL_BASE_VALUE: u32 = 1;

// --- Scoring ---

/// Maximum gap between kills that still extends the combo.
pub const COMBO_WINDOW_SECS: f64 = 1.0;

// --- Countdown / game over ---

/// Pre-round countdown start value (decrements once per second).
pub const COUNTDOWN_START: u8 = 3;

/// Seconds between countdown decrements.
pub const COUNTDOWN_STEP_SECS: f64 = 1.0;

/// Delay between entering game over and session teardown by the driver.
pub const GAME_OVER_LINGER_SECS: f64 = 5.0;

// --- Explosions ---

/// Total lifetime of a single-visual (looping) explosion.
pub const EXPLOSION_FLASH_SECS: f64 = 0.4;

/// Frame count and per-frame delay for frame-sequence explosions.
pub const EXPLOSION_FRAME_COUNT: usize = 6;
pub const EXPLOSION_FRAME_DELAY_SECS: f64 = 0.05;
