//! Simulation engine for SKYRAID.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for the frontend.

pub mod engine;
pub mod levels;
pub mod player;
pub mod score;
pub mod session;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use skyraid_core as core;

#[cfg(test)]
mod tests;
