//! Kinematic integration system.
//!
//! Advances every entity with a velocity (bullets and falling power-ups)
//! by one tick: position += velocity. Formation planes carry no velocity
//! component; their movement is cadence-driven (see `formation`).

use hecs::World;

use skyraid_core::types::{Position, Velocity};

/// Run kinematic integration for all entities with Position + Velocity.
pub fn run(world: &mut World) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.x += vel.dx;
        pos.y += vel.dy;
    }
}
