//! Snapshot system: queries the world and builds a complete
//! `GameStateSnapshot` for the rendering collaborator.
//!
//! This system is read-only — it never modifies the world.

use std::cmp::Ordering;

use hecs::World;

use skyraid_core::components::*;
use skyraid_core::events::AudioEvent;
use skyraid_core::state::*;
use skyraid_core::types::{Position, Size};

use crate::session::SessionState;

/// Build a complete snapshot from the current world and session state.
pub fn build_snapshot(
    world: &World,
    session: &SessionState,
    audio_events: Vec<AudioEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: session.time,
        phase: session.phase,
        countdown: session.countdown,
        level: session.level,
        max_level: session.max_level,
        lives: session.lives,
        score: session.score.score,
        combo: session.score.combo,
        outcome: session.outcome,
        player: build_player(session),
        enemies: build_enemies(world),
        bullets: build_bullets(world),
        power_ups: build_power_ups(world),
        explosions: build_explosions(world, session.now()),
        audio_events,
    }
}

fn build_player(session: &SessionState) -> PlayerView {
    let now = session.now();
    PlayerView {
        position: session.player.position,
        size: session.player.size,
        facing: session.player.facing,
        invulnerable: session.player.is_invulnerable(now),
        shield_active: session.player.shield_active,
        rapid_fire: session.player.rapid_fire_active(now),
    }
}

/// Visible planes only, in row-major order for stable rendering.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position, &Size, Option<&BossHealth>)>()
        .iter()
        .filter(|(_, (enemy, _, _, _))| enemy.visible)
        .map(|(_, (enemy, pos, size, boss))| EnemyView {
            kind: enemy.kind,
            position: *pos,
            size: *size,
            health: boss.map(|b| b.current),
            max_health: boss.map(|b| b.max),
        })
        .collect();

    enemies.sort_by(|a, b| {
        (a.position.y, a.position.x)
            .partial_cmp(&(b.position.y, b.position.x))
            .unwrap_or(Ordering::Equal)
    });
    enemies
}

fn build_bullets(world: &World) -> Vec<BulletView> {
    world
        .query::<(&Bullet, &Position, &Size)>()
        .iter()
        .map(|(_, (bullet, pos, size))| BulletView {
            owner: bullet.owner,
            kind: bullet.kind,
            position: *pos,
            size: *size,
        })
        .collect()
}

fn build_power_ups(world: &World) -> Vec<PowerUpView> {
    world
        .query::<(&PowerUp, &Position, &Size)>()
        .iter()
        .map(|(_, (power_up, pos, size))| PowerUpView {
            kind: power_up.kind,
            position: *pos,
            size: *size,
        })
        .collect()
}

fn build_explosions(world: &World, now: f64) -> Vec<ExplosionView> {
    world
        .query::<(&Explosion, &Position)>()
        .iter()
        .filter(|(_, (explosion, _))| !explosion.finished)
        .map(|(_, (explosion, pos))| ExplosionView {
            position: *pos,
            frame: match explosion.style {
                ExplosionStyle::Frames { .. } => Some(explosion.frame),
                ExplosionStyle::Flash { .. } => None,
            },
            elapsed_secs: now - explosion.spawned_at_secs,
        })
        .collect()
}
