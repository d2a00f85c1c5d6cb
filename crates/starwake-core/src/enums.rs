//! Enumeration types used throughout the simulation.
//!
//! Registry ids are closed enums. Their serialized form (and the form accepted
//! by `FromStr`) is the SCREAMING_SNAKE_CASE key used by save files and the
//! debug console.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StarwakeError;

/// Pick/upgrade rarity. Scales the raw effect of a weapon tier or boon tier.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    /// Factor applied to a boon tier's delta from its identity value.
    pub fn factor(self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Uncommon => 1.1,
            Rarity::Rare => 1.25,
            Rarity::Epic => 1.35,
            Rarity::Legendary => 1.5,
        }
    }

    /// Position in a per-rarity lookup table.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Wormhole life-cycle. One instance per star system; transitions are
/// driven by the host, not by the progression engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WormholeState {
    #[default]
    Hidden,
    Visible,
    Activating,
    Active,
    Reactivated,
    Inactive,
}

impl WormholeState {
    /// States during which the wormhole timer runs.
    pub fn is_charging(self) -> bool {
        matches!(
            self,
            WormholeState::Activating | WormholeState::Active | WormholeState::Reactivated
        )
    }
}

/// Every weapon in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeaponId {
    LaserFront,
    TwinSpread,
    ScatterCannon,
    OrbitBlades,
    WingDrone,
    RailLance,
    PlasmaMortar,
    ShieldAura,
    HomingSwarm,
}

impl WeaponId {
    pub const ALL: [WeaponId; 9] = [
        WeaponId::LaserFront,
        WeaponId::TwinSpread,
        WeaponId::ScatterCannon,
        WeaponId::OrbitBlades,
        WeaponId::WingDrone,
        WeaponId::RailLance,
        WeaponId::PlasmaMortar,
        WeaponId::ShieldAura,
        WeaponId::HomingSwarm,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            WeaponId::LaserFront => "LASER_FRONT",
            WeaponId::TwinSpread => "TWIN_SPREAD",
            WeaponId::ScatterCannon => "SCATTER_CANNON",
            WeaponId::OrbitBlades => "ORBIT_BLADES",
            WeaponId::WingDrone => "WING_DRONE",
            WeaponId::RailLance => "RAIL_LANCE",
            WeaponId::PlasmaMortar => "PLASMA_MORTAR",
            WeaponId::ShieldAura => "SHIELD_AURA",
            WeaponId::HomingSwarm => "HOMING_SWARM",
        }
    }
}

impl FromStr for WeaponId {
    type Err = StarwakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WeaponId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| StarwakeError::UnknownWeapon(s.to_string()))
    }
}

/// Every boon in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BoonId {
    DamageAmp,
    RapidFire,
    CritChance,
    CritMultiplier,
    Thrusters,
    VelocityRounds,
    HullPlating,
    NanoRepair,
    Scholar,
    Salvager,
    Magnet,
    Fortune,
}

impl BoonId {
    pub const ALL: [BoonId; 12] = [
        BoonId::DamageAmp,
        BoonId::RapidFire,
        BoonId::CritChance,
        BoonId::CritMultiplier,
        BoonId::Thrusters,
        BoonId::VelocityRounds,
        BoonId::HullPlating,
        BoonId::NanoRepair,
        BoonId::Scholar,
        BoonId::Salvager,
        BoonId::Magnet,
        BoonId::Fortune,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BoonId::DamageAmp => "DAMAGE_AMP",
            BoonId::RapidFire => "RAPID_FIRE",
            BoonId::CritChance => "CRIT_CHANCE",
            BoonId::CritMultiplier => "CRIT_MULTIPLIER",
            BoonId::Thrusters => "THRUSTERS",
            BoonId::VelocityRounds => "VELOCITY_ROUNDS",
            BoonId::HullPlating => "HULL_PLATING",
            BoonId::NanoRepair => "NANO_REPAIR",
            BoonId::Scholar => "SCHOLAR",
            BoonId::Salvager => "SALVAGER",
            BoonId::Magnet => "MAGNET",
            BoonId::Fortune => "FORTUNE",
        }
    }
}

impl FromStr for BoonId {
    type Err = StarwakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BoonId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| StarwakeError::UnknownBoon(s.to_string()))
    }
}

/// Planet archetype. Determines tier, scan time and scan radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlanetType {
    Barren,
    Oceanic,
    Volcanic,
    GasGiant,
    Crystalline,
}

impl PlanetType {
    pub const ALL: [PlanetType; 5] = [
        PlanetType::Barren,
        PlanetType::Oceanic,
        PlanetType::Volcanic,
        PlanetType::GasGiant,
        PlanetType::Crystalline,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PlanetType::Barren => "BARREN",
            PlanetType::Oceanic => "OCEANIC",
            PlanetType::Volcanic => "VOLCANIC",
            PlanetType::GasGiant => "GAS_GIANT",
            PlanetType::Crystalline => "CRYSTALLINE",
        }
    }
}

impl FromStr for PlanetType {
    type Err = StarwakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlanetType::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| StarwakeError::UnknownPlanetType(s.to_string()))
    }
}

/// Selectable galaxy. Sets planet count, planet mix and wormhole threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GalaxyId {
    #[default]
    Orion,
    Cygnus,
    Andromeda,
}

impl GalaxyId {
    pub const ALL: [GalaxyId; 3] = [GalaxyId::Orion, GalaxyId::Cygnus, GalaxyId::Andromeda];

    pub fn as_str(self) -> &'static str {
        match self {
            GalaxyId::Orion => "ORION",
            GalaxyId::Cygnus => "CYGNUS",
            GalaxyId::Andromeda => "ANDROMEDA",
        }
    }
}

impl FromStr for GalaxyId {
    type Err = StarwakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GalaxyId::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| StarwakeError::UnknownGalaxy(s.to_string()))
    }
}

/// A field of the aggregated `ModifierSet` that a boon can touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    Damage,
    Speed,
    Cooldown,
    CritChance,
    CritMultiplier,
    ProjectileSpeed,
    MaxHp,
    HpRegen,
    DamageReduction,
    Xp,
    Fragments,
    PickupRadius,
    Luck,
}

/// A weapon or boon reference, as held by the run-scoped banish list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id")]
pub enum ItemRef {
    Weapon(WeaponId),
    Boon(BoonId),
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemRef::Weapon(id) => f.write_str(id.as_str()),
            ItemRef::Boon(id) => f.write_str(id.as_str()),
        }
    }
}
