//! Level definitions — hardcoded formation layouts per level.
//!
//! Each level is an ordered list of rows; each row lists the relative
//! horizontal positions (fractions of screen width) its planes spawn at.
//! Boss levels mark row 0 with a single entry.

use skyraid_core::enums::EnemyKind;

/// Declarative formation layout for one level. Immutable once built.
#[derive(Debug, Clone)]
pub struct LevelConfig {
    pub rows: Vec<Vec<f32>>,
}

impl LevelConfig {
    /// Total number of planes this layout spawns — the level's kill target.
    pub fn plane_count(&self) -> u32 {
        self.rows.iter().map(|row| row.len() as u32).sum()
    }
}

/// Number of defined levels.
pub fn level_count() -> usize {
    6
}

/// Whether the level opens with a boss row.
pub fn has_boss(level: usize) -> bool {
    matches!(level, 4 | 6)
}

/// Layout for a 1-based level index, or `None` if undefined.
pub fn config_for(level: usize) -> Option<LevelConfig> {
    match level {
        1 => Some(build_level_1()),
        2 => Some(build_level_2()),
        3 => Some(build_level_3()),
        4 => Some(build_level_4()),
        5 => Some(build_level_5()),
        6 => Some(build_level_6()),
        _ => None,
    }
}

/// Plane variant spawned for a given level and row.
/// `boss_row` is true only for the single-entry row 0 of a boss level.
pub fn kind_for(level: usize, row: usize, boss_row: bool) -> EnemyKind {
    if boss_row {
        return if level == 6 {
            EnemyKind::Leviathan
        } else {
            EnemyKind::Dreadnought
        };
    }
    match level {
        1 => {
            if row % 2 == 0 {
                EnemyKind::Scout
            } else {
                EnemyKind::Raider
            }
        }
        2 => {
            if row % 2 == 0 {
                EnemyKind::Raider
            } else {
                EnemyKind::Viper
            }
        }
        3 => EnemyKind::Scout,
        5 => EnemyKind::Bomber,
        _ => EnemyKind::Scout,
    }
}

/// Level 1: a small wedge of 14 planes.
fn build_level_1() -> LevelConfig {
    LevelConfig {
        rows: vec![
            vec![0.1, 0.3, 0.5, 0.7, 0.9],
            vec![0.2, 0.4, 0.6, 0.8],
            vec![0.3, 0.5, 0.7],
            vec![0.4, 0.6],
        ],
    }
}

/// Level 2: a dense five-row block.
fn build_level_2() -> LevelConfig {
    LevelConfig {
        rows: vec![
            vec![0.05, 0.2, 0.35, 0.5, 0.65, 0.8, 0.95],
            vec![0.1, 0.3, 0.5, 0.7, 0.9],
            vec![0.15, 0.35, 0.55, 0.75, 0.95],
            vec![0.2, 0.4, 0.6, 0.8],
            vec![0.25, 0.45, 0.65, 0.85],
        ],
    }
}

/// Level 3: level 2's block plus a sixth row.
fn build_level_3() -> LevelConfig {
    LevelConfig {
        rows: vec![
            vec![0.05, 0.2, 0.35, 0.5, 0.65, 0.8, 0.95],
            vec![0.1, 0.3, 0.5, 0.7, 0.9],
            vec![0.15, 0.35, 0.55, 0.75, 0.95],
            vec![0.2, 0.4, 0.6, 0.8],
            vec![0.25, 0.45, 0.65, 0.85],
            vec![0.3, 0.5, 0.7, 0.9],
        ],
    }
}

/// Level 4: first boss encounter with an escort screen.
fn build_level_4() -> LevelConfig {
    LevelConfig {
        rows: vec![
            vec![0.5], // boss row
            vec![0.1, 0.3, 0.7, 0.9],
            vec![0.15, 0.35, 0.65, 0.85],
            vec![0.2, 0.4, 0.6, 0.8],
        ],
    }
}

/// Level 5: a breather wave of heavy planes.
fn build_level_5() -> LevelConfig {
    LevelConfig {
        rows: vec![
            vec![0.2, 0.4, 0.6, 0.8],
            vec![0.3, 0.5, 0.7],
            vec![0.4, 0.6],
        ],
    }
}

/// Level 6: final boss encounter.
fn build_level_6() -> LevelConfig {
    LevelConfig {
        rows: vec![
            vec![0.5], // boss row
            vec![0.1, 0.3, 0.7, 0.9],
            vec![0.15, 0.35, 0.65, 0.85],
            vec![0.2, 0.4, 0.6, 0.8],
            vec![0.25, 0.45, 0.65, 0.85],
        ],
    }
}
