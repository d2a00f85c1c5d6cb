//! Runtime data owned by the simulation engines.
//!
//! These are plain data structs. Game logic lives in the engines, not here.

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::ProjectileVisuals;

pub type PlanetId = u32;
pub type ProjectileId = u64;

/// Per-instance values layered over the immutable weapon definition.
/// `None` means "use the definition's value".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WeaponOverrides {
    pub damage: Option<f64>,
    pub cooldown: Option<f64>,
    pub pierce_count: Option<u32>,
    pub visuals: Option<ProjectileVisuals>,
}

/// An equipped weapon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponInstance {
    pub weapon_id: WeaponId,
    /// 1..=MAX_WEAPON_LEVEL.
    pub level: u32,
    /// Rarity of the most recent pick or upgrade.
    pub rarity: Rarity,
    /// Seconds until the next shot. Fires when it reaches zero or below.
    pub cooldown_timer: f64,
    pub overrides: WeaponOverrides,
    /// Current angle on the orbit, for orbital weapons only.
    pub orbital_angle: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Piercing {
    pub pierce_count: u32,
    /// Written by the collision layer.
    pub pierce_hits: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Explosion {
    pub radius: f64,
    pub damage: f64,
}

/// A live projectile. The collision layer may only flip `active` to false
/// (and bump `pierce_hits`); removal happens in `cleanup_inactive`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: ProjectileId,
    pub weapon_id: WeaponId,
    pub position: DVec3,
    /// Planar (x, z) unit vector.
    pub direction: DVec2,
    pub speed: f64,
    pub damage: f64,
    pub radius: f64,
    pub lifetime: f64,
    pub elapsed_time: f64,
    pub color: u32,
    pub mesh_scale: f64,
    pub homing: bool,
    pub piercing: Option<Piercing>,
    pub explosion: Option<Explosion>,
    pub active: bool,
}

/// An equipped boon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoonInstance {
    pub boon_id: BoonId,
    /// 1..=max_level.
    pub level: u32,
    /// Rarity of the most recent pick or upgrade.
    pub rarity: Rarity,
}

/// Aggregated effect of every equipped boon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModifierSet {
    pub damage_multiplier: f64,
    pub speed_multiplier: f64,
    pub cooldown_multiplier: f64,
    /// Always within [0, 1].
    pub crit_chance: f64,
    pub crit_multiplier: f64,
    pub projectile_speed_multiplier: f64,
    pub max_hp_bonus: f64,
    /// Hull repaired per second.
    pub hp_regen_rate: f64,
    pub damage_reduction: f64,
    pub xp_multiplier: f64,
    pub fragment_multiplier: f64,
    pub pickup_radius_multiplier: f64,
    pub luck_bonus: f64,
}

impl Default for ModifierSet {
    fn default() -> Self {
        Self {
            damage_multiplier: 1.0,
            speed_multiplier: 1.0,
            cooldown_multiplier: 1.0,
            crit_chance: 0.0,
            crit_multiplier: 1.5,
            projectile_speed_multiplier: 1.0,
            max_hp_bonus: 0.0,
            hp_regen_rate: 0.0,
            damage_reduction: 0.0,
            xp_multiplier: 1.0,
            fragment_multiplier: 1.0,
            pickup_radius_multiplier: 1.0,
            luck_bonus: 0.0,
        }
    }
}

impl ModifierSet {
    pub fn get(&self, stat: Stat) -> f64 {
        match stat {
            Stat::Damage => self.damage_multiplier,
            Stat::Speed => self.speed_multiplier,
            Stat::Cooldown => self.cooldown_multiplier,
            Stat::CritChance => self.crit_chance,
            Stat::CritMultiplier => self.crit_multiplier,
            Stat::ProjectileSpeed => self.projectile_speed_multiplier,
            Stat::MaxHp => self.max_hp_bonus,
            Stat::HpRegen => self.hp_regen_rate,
            Stat::DamageReduction => self.damage_reduction,
            Stat::Xp => self.xp_multiplier,
            Stat::Fragments => self.fragment_multiplier,
            Stat::PickupRadius => self.pickup_radius_multiplier,
            Stat::Luck => self.luck_bonus,
        }
    }

    pub fn get_mut(&mut self, stat: Stat) -> &mut f64 {
        match stat {
            Stat::Damage => &mut self.damage_multiplier,
            Stat::Speed => &mut self.speed_multiplier,
            Stat::Cooldown => &mut self.cooldown_multiplier,
            Stat::CritChance => &mut self.crit_chance,
            Stat::CritMultiplier => &mut self.crit_multiplier,
            Stat::ProjectileSpeed => &mut self.projectile_speed_multiplier,
            Stat::MaxHp => &mut self.max_hp_bonus,
            Stat::HpRegen => &mut self.hp_regen_rate,
            Stat::DamageReduction => &mut self.damage_reduction,
            Stat::Xp => &mut self.xp_multiplier,
            Stat::Fragments => &mut self.fragment_multiplier,
            Stat::PickupRadius => &mut self.pickup_radius_multiplier,
            Stat::Luck => &mut self.luck_bonus,
        }
    }
}

/// A planet in the current star system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    pub id: PlanetId,
    pub type_id: PlanetType,
    pub tier: u32,
    pub x: f64,
    pub z: f64,
    /// Terminal once true.
    pub scanned: bool,
    /// In [0, 1]. Zero for every planet that is neither scanned nor the
    /// active scan target.
    pub scan_progress: f64,
}
