//! Core types and definitions for the STARWAKE simulation.
//!
//! This crate defines the vocabulary shared by the simulation and its
//! collaborators: static registries, components, commands, view snapshots,
//! events, and constants. It owns no engine state and draws no random numbers.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod registry;
pub mod snapshot;
pub mod state;
pub mod types;

pub use error::{Result, StarwakeError};
