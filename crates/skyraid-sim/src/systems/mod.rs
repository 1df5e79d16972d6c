//! Systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for the
//! read-only snapshot builder) plus the session state they mutate.
//! They do not own state of their own.

pub mod cleanup;
pub mod collision;
pub mod explosion;
pub mod firing;
pub mod formation;
pub mod movement;
pub mod snapshot;
