//! Simulation core for STARWAKE.
//!
//! Owns weapons, boons and level progression for one run, steps them at a
//! fixed frame order, and produces `WorldView`s for the frontend.

pub mod boons;
pub mod engine;
pub mod progression;
pub mod snapshot;
pub mod weapons;

pub use boons::{compute_modifiers, BoonModifierEngine};
pub use engine::{FrameInput, FrameReport, SimConfig, SimulationWorld};
pub use progression::LevelProgressionEngine;
pub use starwake_core as core;
pub use weapons::WeaponSystem;

#[cfg(test)]
mod tests;
