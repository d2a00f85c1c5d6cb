//! Static definition tables for weapons, boons, planets and galaxies.
//!
//! Pure data: every lookup returns a `&'static` definition and nothing here
//! is ever mutated.

pub mod boons;
pub mod galaxies;
pub mod planets;
pub mod weapons;

pub use boons::{boon_def, BoonDef, BoonTier, StatEffect};
pub use galaxies::{galaxy_def, required_scans, wormhole_threshold_met, GalaxyDef};
pub use planets::{planet_def, PlanetDef};
pub use weapons::{
    weapon_def, ProjectilePattern, RarityTable, WeaponDef, WeaponUpgrade, STARTING_WEAPON,
};

/// Built-in pool of star-system names.
pub const SYSTEM_NAMES: &[&str] = &[
    "Kepler's Rest",
    "Vantablack Reach",
    "Halcyon Drift",
    "Tau Meridian",
    "Cinder Verge",
    "Obsidian Wake",
    "Lumen Hollow",
    "Nyx Terminus",
    "Aurelian Gate",
    "Sable Expanse",
];
