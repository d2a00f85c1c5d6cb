//! Commands sent by collaborators (reward screens, debug console) to the
//! simulation.
//!
//! Commands are queued and applied at the next frame boundary. A command
//! that cannot apply (full slots, duplicate id, max level) is dropped
//! silently.

use serde::{Deserialize, Serialize};

use crate::enums::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RunCommand {
    // --- Loadout ---
    AddWeapon {
        weapon_id: WeaponId,
        #[serde(default)]
        rarity: Rarity,
    },
    UpgradeWeapon {
        weapon_id: WeaponId,
        #[serde(default)]
        rarity: Rarity,
    },
    RemoveWeapon { weapon_id: WeaponId },
    AddBoon {
        boon_id: BoonId,
        #[serde(default)]
        rarity: Rarity,
    },
    UpgradeBoon {
        boon_id: BoonId,
        #[serde(default)]
        rarity: Rarity,
    },
    RemoveBoon { boon_id: BoonId },
    /// Exclude an item from future reward offers for the rest of the run.
    BanishItem { item: ItemRef },

    // --- Progression ---
    SpawnWormhole { x: f64, z: f64 },
    SetWormholeState { state: WormholeState },
    SelectGalaxy { galaxy: GalaxyId },
    /// Jump to the next star system and generate its planets.
    AdvanceSystem,

    // --- Run control ---
    ClearProjectiles,
    /// Discard the whole run and start over with the starting loadout.
    ResetRun,
}
