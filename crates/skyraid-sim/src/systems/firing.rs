//! Bullet creation — the player's auto-fire cadence and the enemy volley.
//!
//! Cadence timing lives in the engine's accumulators; these functions fire
//! exactly once per trigger.

use hecs::World;

use skyraid_core::components::Enemy;
use skyraid_core::enums::{BulletKind, BulletOwner};
use skyraid_core::events::AudioEvent;
use skyraid_core::types::{Position, Size, Velocity};

use crate::session::SessionState;
use crate::world_setup;

/// Fire one player trigger: a single centered shot, or the triple-shot
/// pattern (center plus two angled side shots) while rapid fire is active.
pub fn player_fire(world: &mut World, session: &mut SessionState) {
    let center_x = session.player.position.x + session.player.size.w / 2.0;
    let y = session.player.position.y;

    world_setup::spawn_bullet(
        world,
        BulletKind::Standard,
        Position::new(center_x - 5.0, y),
    );

    if session.player.rapid_fire_active(session.now()) {
        world_setup::spawn_bullet_with_velocity(
            world,
            BulletKind::Standard,
            Position::new(center_x - 15.0, y),
            Velocity::new(-1.0, -2.0),
        );
        world_setup::spawn_bullet_with_velocity(
            world,
            BulletKind::Standard,
            Position::new(center_x + 5.0, y),
            Velocity::new(1.0, -2.0),
        );
    }

    session.audio_events.push(AudioEvent::ShotFired {
        owner: BulletOwner::Player,
    });
}

/// Fire one enemy volley: every visible plane releases one bullet of its
/// assigned kind from its bottom center.
pub fn enemy_volley(world: &mut World, session: &mut SessionState) {
    let mut shots: Vec<(BulletKind, Position)> = Vec::new();

    for (_entity, (enemy, pos, size)) in world.query_mut::<(&Enemy, &Position, &Size)>() {
        if !enemy.visible {
            continue;
        }
        shots.push((
            enemy.kind.bullet_kind(),
            Position::new(pos.x + size.w / 2.0 - 4.0, pos.y + size.h),
        ));
    }

    let fired = !shots.is_empty();
    for (kind, pos) in shots {
        world_setup::spawn_bullet(world, kind, pos);
    }
    if fired {
        session.audio_events.push(AudioEvent::ShotFired {
            owner: BulletOwner::Enemy,
        });
    }
}
