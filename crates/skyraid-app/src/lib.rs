//! Fixed-rate driver for the SKYRAID simulation.
//!
//! Hosts the game-loop thread and the channel/mailbox plumbing between the
//! engine and its external collaborators. Rendering and input live outside
//! this workspace; they consume snapshots from the mailbox and feed intents
//! into the command channel.

pub mod game_loop;
pub mod state;

pub use skyraid_core as core;
