//! Explosion advancement — frame stepping and duration expiry.
//!
//! Explosions never move; they only age. Cleanup removes finished entries.

use hecs::World;

use skyraid_core::components::{Explosion, ExplosionStyle};

/// Advance every active explosion against the sim clock.
pub fn run(world: &mut World, now: f64) {
    for (_entity, explosion) in world.query_mut::<&mut Explosion>() {
        if explosion.finished {
            continue;
        }
        match explosion.style {
            ExplosionStyle::Frames {
                frame_count,
                frame_delay_secs,
            } => {
                if now - explosion.last_frame_change_secs >= frame_delay_secs {
                    explosion.frame += 1;
                    explosion.last_frame_change_secs = now;
                    if explosion.frame >= frame_count {
                        explosion.finished = true;
                    }
                }
            }
            ExplosionStyle::Flash { duration_secs } => {
                if now - explosion.spawned_at_secs >= duration_secs {
                    explosion.finished = true;
                }
            }
        }
    }
}
