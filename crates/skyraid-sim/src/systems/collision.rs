//! Collision resolution — the core of the tick.
//!
//! Three passes: enemy bullets against the player wedge, player bullets
//! against visible planes, and power-ups against the player. All world
//! reads happen into local records up front; removals and visibility
//! changes are applied after iteration, never mid-traversal.

use std::cmp::Ordering;

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skyraid_core::components::{BossHealth, Bullet, Enemy, PowerUp};
use skyraid_core::constants::*;
use skyraid_core::enums::*;
use skyraid_core::events::AudioEvent;
use skyraid_core::geometry::Rect;
use skyraid_core::types::{Position, Size};

use crate::session::SessionState;
use crate::world_setup;

/// A plane's collision-relevant state, read once per tick.
struct PlaneRecord {
    entity: Entity,
    kind: EnemyKind,
    rect: Rect,
    visible: bool,
    /// Bosses only; already reduced by earlier bullets this tick.
    health: Option<i32>,
}

/// Run collision resolution for one tick.
pub fn run(
    world: &mut World,
    session: &mut SessionState,
    rng: &mut ChaCha8Rng,
    despawn_buffer: &mut Vec<Entity>,
) {
    resolve_enemy_bullets(world, session, despawn_buffer);
    resolve_player_bullets(world, session, rng, despawn_buffer);
    resolve_power_up_pickups(world, session, despawn_buffer);
}

/// Enemy bullets vs the player's wedge hitbox (true-area test).
fn resolve_enemy_bullets(
    world: &mut World,
    session: &mut SessionState,
    despawn_buffer: &mut Vec<Entity>,
) {
    let now = session.now();
    let enemy_bullets: Vec<(Entity, Rect)> = world
        .query_mut::<(&Bullet, &Position, &Size)>()
        .into_iter()
        .filter(|(_, (bullet, _, _))| bullet.owner == BulletOwner::Enemy)
        .map(|(entity, (_, pos, size))| (entity, Rect::from_entity(*pos, *size)))
        .collect();

    for (entity, rect) in enemy_bullets {
        // Re-checked per bullet: the first hit of a volley grants the
        // invulnerability window that shields the player from the rest.
        if session.player.is_invulnerable(now) {
            continue;
        }
        if session.player.hitbox().intersects_rect(&rect) {
            session.player_hit();
            despawn_buffer.push(entity);
        }
    }
}

/// Player bullets vs visible planes. One bullet resolves at most one hit.
fn resolve_player_bullets(
    world: &mut World,
    session: &mut SessionState,
    rng: &mut ChaCha8Rng,
    despawn_buffer: &mut Vec<Entity>,
) {
    let player_bullets: Vec<(Entity, Rect)> = world
        .query_mut::<(&Bullet, &Position, &Size)>()
        .into_iter()
        .filter(|(_, (bullet, _, _))| bullet.owner == BulletOwner::Player)
        .map(|(entity, (_, pos, size))| (entity, Rect::from_entity(*pos, *size)))
        .collect();

    if player_bullets.is_empty() {
        return;
    }

    let mut planes: Vec<PlaneRecord> = world
        .query_mut::<(&Enemy, &Position, &Size, Option<&BossHealth>)>()
        .into_iter()
        .map(|(entity, (enemy, pos, size, boss))| PlaneRecord {
            entity,
            kind: enemy.kind,
            rect: Rect::from_entity(*pos, *size),
            visible: enemy.visible,
            health: boss.map(|b| b.current),
        })
        .collect();

    // Spawn order is row-major; sorting restores it across archetypes so
    // an overlapping boss row wins over its escorts.
    planes.sort_by(|a, b| {
        (a.rect.y, a.rect.x)
            .partial_cmp(&(b.rect.y, b.rect.x))
            .unwrap_or(Ordering::Equal)
    });

    let mut boss_damage: Vec<(Entity, i32)> = Vec::new();
    let mut kills: Vec<(Entity, EnemyKind, Position)> = Vec::new();

    for (bullet_entity, bullet_rect) in player_bullets {
        for plane in planes.iter_mut() {
            if !plane.visible || !bullet_rect.intersects(&plane.rect) {
                continue;
            }

            match plane.health.as_mut() {
                Some(health) => {
                    *health = (*health - BOSS_HIT_DAMAGE).max(0);
                    boss_damage.push((plane.entity, *health));
                    if *health == 0 {
                        plane.visible = false;
                        kills.push((
                            plane.entity,
                            plane.kind,
                            Position::new(plane.rect.x, plane.rect.y),
                        ));
                    } else {
                        session.audio_events.push(AudioEvent::BossDamaged {
                            kind: plane.kind,
                            remaining: *health,
                        });
                    }
                }
                None => {
                    plane.visible = false;
                    kills.push((
                        plane.entity,
                        plane.kind,
                        Position::new(plane.rect.x, plane.rect.y),
                    ));
                }
            }

            despawn_buffer.push(bullet_entity);
            break;
        }
    }

    // Apply the locally accumulated results back to the world.
    for (entity, health) in boss_damage {
        if let Ok(mut boss) = world.get::<&mut BossHealth>(entity) {
            boss.current = health;
        }
    }

    let now = session.now();
    for (entity, kind, pos) in kills {
        if let Ok(mut enemy) = world.get::<&mut Enemy>(entity) {
            enemy.visible = false;
        }

        let base = if kind.is_boss() {
            BOSS_KILL_BONUS
        } else {
            KILL_BASE_VALUE
        };
        session.score.register_kill(base, now);
        session.audio_events.push(AudioEvent::EnemyDown { kind });

        attempt_power_up_drop(world, session, rng, pos);
        world_setup::spawn_explosion(world, pos, now);
    }
}

/// Roll the per-level power-up drop at a death location.
fn attempt_power_up_drop(
    world: &mut World,
    session: &mut SessionState,
    rng: &mut ChaCha8Rng,
    pos: Position,
) {
    if session.score.power_up_dropped {
        return;
    }
    if !rng.gen_bool(POWER_UP_DROP_CHANCE) {
        return;
    }

    let roll: f64 = rng.gen();
    let kind = if roll < 0.33 {
        PowerUpKind::ExtraLife
    } else if roll < 0.66 {
        PowerUpKind::RapidFire
    } else {
        PowerUpKind::Shield
    };

    world_setup::spawn_power_up(world, kind, pos);
    session.score.power_up_dropped = true;
    session.audio_events.push(AudioEvent::PowerUpSpawned { kind });
}

/// Power-ups vs the player's bounding box.
fn resolve_power_up_pickups(
    world: &mut World,
    session: &mut SessionState,
    despawn_buffer: &mut Vec<Entity>,
) {
    let player_bounds = session.player.hitbox().bounds();

    let pickups: Vec<(Entity, PowerUpKind)> = world
        .query_mut::<(&PowerUp, &Position, &Size)>()
        .into_iter()
        .filter(|(_, (_, pos, size))| Rect::from_entity(**pos, **size).intersects(&player_bounds))
        .map(|(entity, (power_up, _, _))| (entity, power_up.kind))
        .collect();

    for (entity, kind) in pickups {
        session.apply_power_up(kind);
        despawn_buffer.push(entity);
    }
}
