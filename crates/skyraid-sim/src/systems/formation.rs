//! Formation movement — synchronized horizontal oscillation of all visible
//! planes, with an edge-triggered direction flip and half-height descent.
//!
//! Runs on its own cadence, faster than the enemy fire period and
//! independent of bullet ticks.

use hecs::World;

use skyraid_core::components::Enemy;
use skyraid_core::constants::{FORMATION_SPEED, SCREEN_WIDTH};
use skyraid_core::types::{Position, Size};

use crate::session::SessionState;

/// Advance the formation by one step.
///
/// Every visible plane shifts horizontally by the shared direction. If any
/// plane crosses a screen edge the direction flips and, in the same step,
/// every visible plane drops by half its height. A plane whose bottom edge
/// reaches the player's row triggers player-hit handling immediately and
/// aborts the rest of the pass.
pub fn step(world: &mut World, session: &mut SessionState) {
    let dir = session.formation_direction;
    let mut hit_edge = false;

    for (_entity, (enemy, pos, size)) in world.query_mut::<(&Enemy, &mut Position, &Size)>() {
        if !enemy.visible {
            continue;
        }
        pos.x += FORMATION_SPEED * dir;
        if pos.x < 0.0 || pos.x + size.w > SCREEN_WIDTH {
            hit_edge = true;
        }
    }

    if !hit_edge {
        return;
    }

    session.formation_direction = -dir;

    // Collect first: the descent can end in a player hit that mutates
    // session state, which must not happen mid-query.
    let planes: Vec<(hecs::Entity, f32)> = world
        .query_mut::<(&Enemy, &Size)>()
        .into_iter()
        .filter(|(_, (enemy, _))| enemy.visible)
        .map(|(entity, (_, size))| (entity, size.h))
        .collect();

    for (entity, height) in planes {
        let bottom = match world.get::<&mut Position>(entity) {
            Ok(mut pos) => {
                pos.y += height / 2.0;
                pos.y + height
            }
            Err(_) => continue,
        };

        if bottom >= session.player.position.y {
            session.player_hit();
            return;
        }
    }
}
