//! Cleanup system: compacts the world after a tick's iteration passes.
//!
//! Collects off-screen bullets and power-ups and finished explosions into
//! the pending-removal buffer (which may already hold this tick's collision
//! removals), then despawns everything in one drain. Invisible planes are
//! deliberately left in place until the level is rebuilt.

use hecs::{Entity, World};

use skyraid_core::components::{Bullet, Explosion, PowerUp};
use skyraid_core::constants::{SCREEN_HEIGHT, SCREEN_WIDTH};
use skyraid_core::types::{Position, Size};

/// Queue out-of-bounds and finished entities, then apply all removals.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    // Bullets leave play above the top, below the bottom, or sideways
    // beyond their own width.
    for (entity, (_bullet, pos, size)) in world.query_mut::<(&Bullet, &Position, &Size)>() {
        if pos.y < 0.0 || pos.y > SCREEN_HEIGHT || pos.x < -size.w || pos.x > SCREEN_WIDTH + size.w
        {
            despawn_buffer.push(entity);
        }
    }

    // Power-ups are only removed once they fall past the bottom.
    for (entity, (_power_up, pos)) in world.query_mut::<(&PowerUp, &Position)>() {
        if pos.y > SCREEN_HEIGHT {
            despawn_buffer.push(entity);
        }
    }

    for (entity, explosion) in world.query_mut::<&Explosion>() {
        if explosion.finished {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
