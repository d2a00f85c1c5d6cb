//! World view: the complete observable state handed to UI adapters.
//!
//! Adapters diff consecutive views (or just the revision counters) to decide
//! what to redraw; the simulation itself never notifies anyone.

use serde::{Deserialize, Serialize};

use crate::components::*;
use crate::enums::*;
use crate::types::SimTime;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldView {
    pub time: SimTime,
    pub weapons: Vec<WeaponInstance>,
    pub projectiles: Vec<Projectile>,
    pub boons: Vec<BoonInstance>,
    pub modifiers: ModifierSet,
    pub planets: Vec<Planet>,
    pub active_scan_planet_id: Option<PlanetId>,
    pub wormhole: WormholeView,
    pub progress: ProgressView,
    pub banished_items: Vec<ItemRef>,
    pub vitals: VitalsView,
    /// Bumped on weapon-list or projectile-list changes only.
    pub weapon_revision: u64,
    /// Bumped on boon-list changes only.
    pub boon_revision: u64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WormholeView {
    pub state: WormholeState,
    /// (x, z) once spawned.
    pub position: Option<(f64, f64)>,
    pub timer: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressView {
    pub galaxy: GalaxyId,
    pub current_system: u32,
    pub system_name: Option<String>,
    pub system_timer: f64,
    pub difficulty: f64,
    pub scanned_count: u32,
    pub required_scans: u32,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct VitalsView {
    pub hp: f64,
    pub max_hp: f64,
    pub fragments: u64,
    pub xp: u64,
}
