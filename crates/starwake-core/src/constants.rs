//! Simulation constants and tuning parameters.

/// Nominal host frame rate (Hz). The simulation itself is delta-driven.
pub const TICK_RATE: u32 = 60;

/// Seconds per frame at the nominal rate.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Slots ---

/// Maximum number of equipped weapons.
pub const MAX_WEAPON_SLOTS: usize = 4;

/// Maximum number of equipped boons.
pub const MAX_BOON_SLOTS: usize = 3;

/// Highest level a weapon can be upgraded to.
pub const MAX_WEAPON_LEVEL: u32 = 9;

// --- Projectiles ---

/// Hard cap on live + pending projectiles.
pub const MAX_PROJECTILES: usize = 300;

/// Distance in front of the player at which forward-fired projectiles spawn.
pub const PROJECTILE_SPAWN_OFFSET: f64 = 1.5;

/// Height above the play plane at which projectiles spawn.
pub const PROJECTILE_SPAWN_HEIGHT: f64 = 0.5;

// --- Play area & planet placement ---

/// Side length of the square play area, centered on the origin.
pub const PLAY_AREA_SIZE: f64 = 400.0;

/// Inset from the play-area edge inside which planets are never placed.
pub const PLANET_PLACEMENT_MARGIN: f64 = 20.0;

/// Planets are kept at least this far from the origin (player spawn).
pub const PLANET_MIN_DISTANCE_FROM_CENTER: f64 = 40.0;

/// Minimum distance between any two planet centers.
pub const PLANET_MIN_DISTANCE_BETWEEN: f64 = 30.0;

/// Rejection-sampling attempts per planet before the last sample is accepted.
pub const PLANET_PLACEMENT_MAX_ATTEMPTS: u32 = 50;

// --- Run pacing ---

/// Index of the first star system in a run.
pub const FIRST_SYSTEM: u32 = 1;

/// Difficulty at the start of each system.
pub const BASE_DIFFICULTY: f64 = 1.0;

/// Difficulty gained per second spent in a system.
pub const DIFFICULTY_RAMP_PER_SEC: f64 = 0.01;

// --- Player vitals ---

/// Hull points before any boon bonus.
pub const BASE_MAX_HP: f64 = 100.0;

// --- Persistence ---

/// Current `RunSnapshot` format version.
pub const SNAPSHOT_VERSION: u32 = 1;
