//! Entity spawn factories for populating the simulation world.
//!
//! Creates formation planes, bullets, power-ups and explosions with
//! appropriate component bundles.

use hecs::World;

use skyraid_core::components::*;
use skyraid_core::constants::*;
use skyraid_core::enums::*;
use skyraid_core::types::{Position, Size, Velocity};

use crate::levels::{self, LevelConfig};

/// Clear any previous formation and spawn the layout for `level`.
/// Returns the number of planes spawned (the level's kill target).
pub fn spawn_formation(world: &mut World, level: usize, config: &LevelConfig) -> u32 {
    let mut count = 0;

    for (r, row) in config.rows.iter().enumerate() {
        let boss_row = levels::has_boss(level) && r == 0 && row.len() == 1;

        for &rel_x in row {
            let kind = levels::kind_for(level, r, boss_row);

            // Planes sit on a fixed slot grid regardless of their sprite
            // extent, so mixed-size rows stay aligned.
            let x = (rel_x * SCREEN_WIDTH - FORMATION_SLOT_WIDTH / 2.0)
                .clamp(0.0, SCREEN_WIDTH - FORMATION_SLOT_WIDTH);
            let y = FORMATION_TOP_MARGIN
                + r as f32 * (FORMATION_SLOT_HEIGHT + FORMATION_ROW_GAP);

            spawn_plane(world, kind, Position::new(x, y));
            count += 1;
        }
    }

    count
}

/// Spawn a single enemy plane. Bosses get a `BossHealth` component.
pub fn spawn_plane(world: &mut World, kind: EnemyKind, pos: Position) -> hecs::Entity {
    let enemy = Enemy {
        kind,
        visible: true,
    };
    match kind.max_health() {
        Some(max) => world.spawn((enemy, pos, kind.size(), BossHealth { current: max, max })),
        None => world.spawn((enemy, pos, kind.size())),
    }
}

/// Remove every plane (visible or not) ahead of a formation rebuild.
pub fn clear_formation(world: &mut World) {
    let planes: Vec<hecs::Entity> = world
        .query_mut::<&Enemy>()
        .into_iter()
        .map(|(entity, _)| entity)
        .collect();
    for entity in planes {
        let _ = world.despawn(entity);
    }
}

/// Spawn a bullet at its kind's default velocity.
pub fn spawn_bullet(world: &mut World, kind: BulletKind, pos: Position) -> hecs::Entity {
    spawn_bullet_with_velocity(world, kind, pos, kind.velocity())
}

/// Spawn a bullet with an explicit velocity (the angled rapid-fire shots).
pub fn spawn_bullet_with_velocity(
    world: &mut World,
    kind: BulletKind,
    pos: Position,
    vel: Velocity,
) -> hecs::Entity {
    let bullet = Bullet {
        owner: kind.owner(),
        kind,
    };
    world.spawn((bullet, pos, vel, kind.size()))
}

/// Spawn a falling power-up at a destroyed plane's location.
pub fn spawn_power_up(world: &mut World, kind: PowerUpKind, pos: Position) -> hecs::Entity {
    world.spawn((
        PowerUp { kind },
        pos,
        Velocity::new(0.0, POWER_UP_FALL_SPEED),
        Size::new(POWER_UP_SIZE, POWER_UP_SIZE),
    ))
}

/// Spawn the standard single-visual explosion at a death location.
pub fn spawn_explosion(world: &mut World, pos: Position, now: f64) -> hecs::Entity {
    spawn_explosion_styled(
        world,
        pos,
        ExplosionStyle::Flash {
            duration_secs: EXPLOSION_FLASH_SECS,
        },
        now,
    )
}

/// Spawn an explosion with an explicit visual style.
pub fn spawn_explosion_styled(
    world: &mut World,
    pos: Position,
    style: ExplosionStyle,
    now: f64,
) -> hecs::Entity {
    world.spawn((
        Explosion {
            style,
            spawned_at_secs: now,
            frame: 0,
            last_frame_change_secs: now,
            finished: false,
        },
        pos,
    ))
}
