//! Builds a `WorldView` from engine state.

use starwake_core::state::{ProgressView, VitalsView, WorldView, WormholeView};
use starwake_core::types::SimTime;

use crate::boons::BoonModifierEngine;
use crate::progression::LevelProgressionEngine;
use crate::weapons::WeaponSystem;

/// Copy out everything a UI adapter can observe.
pub fn build_view(
    time: &SimTime,
    weapons: &WeaponSystem,
    boons: &BoonModifierEngine,
    progression: &LevelProgressionEngine,
    vitals: VitalsView,
) -> WorldView {
    WorldView {
        time: *time,
        weapons: weapons.active_weapons().to_vec(),
        projectiles: weapons.projectiles().to_vec(),
        boons: boons.boons().to_vec(),
        modifiers: *boons.modifiers(),
        planets: progression.planets().to_vec(),
        active_scan_planet_id: progression.active_scan_planet_id(),
        wormhole: WormholeView {
            state: progression.wormhole_state(),
            position: progression.wormhole_position(),
            timer: progression.wormhole_timer(),
        },
        progress: ProgressView {
            galaxy: progression.galaxy(),
            current_system: progression.current_system(),
            system_name: progression.system_name().map(str::to_string),
            system_timer: progression.system_timer(),
            difficulty: progression.difficulty(),
            scanned_count: progression.scanned_count() as u32,
            required_scans: progression.required_scans(),
        },
        banished_items: progression.banished_items().to_vec(),
        vitals,
        weapon_revision: weapons.revision(),
        boon_revision: boons.revision(),
    }
}
