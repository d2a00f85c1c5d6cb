//! Weapon definitions.

use glam::DVec3;

use crate::enums::{Rarity, WeaponId};
use crate::types::ProjectileVisuals;

/// Projectile spawn geometry. Each variant carries only the parameters its
/// spawn handler reads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectilePattern {
    /// One projectile along the fire direction.
    Default,
    /// Three projectiles: center plus one each side at `angle` radians.
    Spread { angle: f64 },
    /// `count` projectiles at random angles within `±spread` radians.
    Pellet { count: u32, spread: f64 },
    /// Spawns on a circle of `radius` around the player whose angle advances
    /// `speed` radians per second, every tick.
    Orbital { radius: f64, speed: f64 },
    /// Spawns at a player-local offset instead of in front of the player.
    Drone { follow_offset: DVec3 },
    /// Projectiles pass through up to `pierce_count` targets.
    Piercing { pierce_count: u32 },
    /// Projectiles burst on impact.
    Explosive { radius: f64, damage: f64 },
    /// Passive damage field handled by the collision layer. Never fires.
    Aura,
}

/// Per-rarity multiplier table, indexed by [`Rarity::index`].
pub type RarityTable = [f64; 5];

/// Damage multipliers shared by most direct-fire weapons.
pub const STANDARD_RARITY_DAMAGE: RarityTable = [1.0, 1.15, 1.3, 1.5, 1.75];

/// Level-up override entry. `None` fields leave the previous override in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponUpgrade {
    pub damage: Option<f64>,
    pub cooldown: Option<f64>,
    pub pierce_count: Option<u32>,
    pub visuals: Option<ProjectileVisuals>,
}

const fn tier(damage: f64, cooldown: f64) -> WeaponUpgrade {
    WeaponUpgrade {
        damage: Some(damage),
        cooldown: Some(cooldown),
        pierce_count: None,
        visuals: None,
    }
}

const fn look(color: u32, mesh_scale: f64) -> ProjectileVisuals {
    ProjectileVisuals { color, mesh_scale }
}

/// Immutable weapon definition.
#[derive(Debug, Clone, PartialEq)]
pub struct WeaponDef {
    pub id: WeaponId,
    pub name: &'static str,
    pub base_damage: f64,
    /// Seconds between shots.
    pub base_cooldown: f64,
    /// World units per second.
    pub base_speed: f64,
    pub projectile_radius: f64,
    /// Seconds before an unspent projectile expires.
    pub projectile_lifetime: f64,
    pub pattern: ProjectilePattern,
    pub homing: bool,
    pub visuals: ProjectileVisuals,
    /// When present, damage is baked at pick time from the pick's rarity.
    pub rarity_damage_multipliers: Option<RarityTable>,
    /// Entry `i` is applied on reaching level `i + 2`.
    pub upgrades: &'static [WeaponUpgrade],
}

impl WeaponDef {
    /// Override entry for reaching `level`, if the table defines one.
    pub fn upgrade_for_level(&self, level: u32) -> Option<&WeaponUpgrade> {
        let index = level.checked_sub(2)? as usize;
        self.upgrades.get(index)
    }

    pub fn rarity_damage_multiplier(&self, rarity: Rarity) -> Option<f64> {
        self.rarity_damage_multipliers
            .map(|table| table[rarity.index()])
    }

    pub fn is_aura(&self) -> bool {
        matches!(self.pattern, ProjectilePattern::Aura)
    }
}

/// The weapon a fresh run starts with.
pub const STARTING_WEAPON: WeaponId = WeaponId::LaserFront;

/// Look up a weapon definition.
pub fn weapon_def(id: WeaponId) -> &'static WeaponDef {
    match id {
        WeaponId::LaserFront => &LASER_FRONT,
        WeaponId::TwinSpread => &TWIN_SPREAD,
        WeaponId::ScatterCannon => &SCATTER_CANNON,
        WeaponId::OrbitBlades => &ORBIT_BLADES,
        WeaponId::WingDrone => &WING_DRONE,
        WeaponId::RailLance => &RAIL_LANCE,
        WeaponId::PlasmaMortar => &PLASMA_MORTAR,
        WeaponId::ShieldAura => &SHIELD_AURA,
        WeaponId::HomingSwarm => &HOMING_SWARM,
    }
}

static LASER_FRONT: WeaponDef = WeaponDef {
    id: WeaponId::LaserFront,
    name: "Pulse Laser",
    base_damage: 10.0,
    base_cooldown: 0.5,
    base_speed: 40.0,
    projectile_radius: 0.3,
    projectile_lifetime: 2.0,
    pattern: ProjectilePattern::Default,
    homing: false,
    visuals: look(0x00e5ff, 1.0),
    rarity_damage_multipliers: Some(STANDARD_RARITY_DAMAGE),
    upgrades: &[
        tier(12.0, 0.48),
        tier(14.0, 0.45),
        WeaponUpgrade {
            visuals: Some(look(0x40c4ff, 1.2)),
            ..tier(17.0, 0.42)
        },
        tier(20.0, 0.40),
        tier(23.0, 0.37),
        WeaponUpgrade {
            visuals: Some(look(0x7c4dff, 1.4)),
            ..tier(27.0, 0.34)
        },
        tier(31.0, 0.31),
        tier(36.0, 0.28),
    ],
};

static TWIN_SPREAD: WeaponDef = WeaponDef {
    id: WeaponId::TwinSpread,
    name: "Trident Blaster",
    base_damage: 8.0,
    base_cooldown: 0.8,
    base_speed: 35.0,
    projectile_radius: 0.3,
    projectile_lifetime: 1.6,
    pattern: ProjectilePattern::Spread { angle: 0.26 },
    homing: false,
    visuals: look(0xffd740, 1.0),
    rarity_damage_multipliers: Some(STANDARD_RARITY_DAMAGE),
    upgrades: &[
        tier(9.0, 0.76),
        tier(10.0, 0.72),
        tier(12.0, 0.68),
        WeaponUpgrade {
            visuals: Some(look(0xffab40, 1.2)),
            ..tier(14.0, 0.64)
        },
        tier(16.0, 0.60),
        tier(18.0, 0.56),
        tier(21.0, 0.52),
        tier(24.0, 0.48),
    ],
};

static SCATTER_CANNON: WeaponDef = WeaponDef {
    id: WeaponId::ScatterCannon,
    name: "Scatter Cannon",
    base_damage: 4.0,
    base_cooldown: 1.2,
    base_speed: 30.0,
    projectile_radius: 0.2,
    projectile_lifetime: 0.8,
    pattern: ProjectilePattern::Pellet {
        count: 6,
        spread: 0.35,
    },
    homing: false,
    visuals: look(0xff6e40, 0.7),
    rarity_damage_multipliers: Some(STANDARD_RARITY_DAMAGE),
    upgrades: &[
        tier(5.0, 1.15),
        tier(5.0, 1.05),
        tier(6.0, 1.0),
        tier(7.0, 0.95),
        tier(8.0, 0.9),
        tier(9.0, 0.85),
        tier(10.0, 0.8),
        tier(12.0, 0.75),
    ],
};

static ORBIT_BLADES: WeaponDef = WeaponDef {
    id: WeaponId::OrbitBlades,
    name: "Orbit Blades",
    base_damage: 6.0,
    base_cooldown: 0.6,
    base_speed: 12.0,
    projectile_radius: 0.5,
    projectile_lifetime: 1.0,
    pattern: ProjectilePattern::Orbital {
        radius: 3.0,
        speed: 2.5,
    },
    homing: false,
    visuals: look(0x69f0ae, 1.1),
    rarity_damage_multipliers: None,
    upgrades: &[
        tier(7.0, 0.58),
        tier(8.0, 0.55),
        tier(9.0, 0.52),
        tier(11.0, 0.5),
        tier(12.0, 0.47),
        tier(14.0, 0.44),
        tier(16.0, 0.41),
        tier(18.0, 0.38),
    ],
};

static WING_DRONE: WeaponDef = WeaponDef {
    id: WeaponId::WingDrone,
    name: "Wing Drone",
    base_damage: 7.0,
    base_cooldown: 0.9,
    base_speed: 38.0,
    projectile_radius: 0.25,
    projectile_lifetime: 1.8,
    pattern: ProjectilePattern::Drone {
        follow_offset: DVec3::new(-2.0, 1.0, -1.5),
    },
    homing: false,
    visuals: look(0xb2ff59, 0.8),
    rarity_damage_multipliers: Some(STANDARD_RARITY_DAMAGE),
    upgrades: &[
        tier(8.0, 0.86),
        tier(9.0, 0.82),
        tier(11.0, 0.78),
        tier(12.0, 0.74),
        tier(14.0, 0.7),
        tier(16.0, 0.66),
        tier(18.0, 0.62),
        tier(21.0, 0.58),
    ],
};

static RAIL_LANCE: WeaponDef = WeaponDef {
    id: WeaponId::RailLance,
    name: "Rail Lance",
    base_damage: 18.0,
    base_cooldown: 1.5,
    base_speed: 60.0,
    projectile_radius: 0.2,
    projectile_lifetime: 1.5,
    pattern: ProjectilePattern::Piercing { pierce_count: 2 },
    homing: false,
    visuals: look(0xe040fb, 1.0),
    rarity_damage_multipliers: Some(STANDARD_RARITY_DAMAGE),
    upgrades: &[
        tier(21.0, 1.45),
        WeaponUpgrade {
            pierce_count: Some(3),
            ..tier(24.0, 1.4)
        },
        tier(27.0, 1.35),
        WeaponUpgrade {
            pierce_count: Some(4),
            visuals: Some(look(0xea80fc, 1.3)),
            ..tier(31.0, 1.3)
        },
        tier(35.0, 1.25),
        tier(40.0, 1.2),
        WeaponUpgrade {
            pierce_count: Some(6),
            ..tier(45.0, 1.15)
        },
        tier(52.0, 1.1),
    ],
};

static PLASMA_MORTAR: WeaponDef = WeaponDef {
    id: WeaponId::PlasmaMortar,
    name: "Plasma Mortar",
    base_damage: 15.0,
    base_cooldown: 2.0,
    base_speed: 20.0,
    projectile_radius: 0.6,
    projectile_lifetime: 2.5,
    pattern: ProjectilePattern::Explosive {
        radius: 4.0,
        damage: 12.0,
    },
    homing: false,
    visuals: look(0xff5252, 1.5),
    rarity_damage_multipliers: Some(STANDARD_RARITY_DAMAGE),
    upgrades: &[
        tier(17.0, 1.9),
        tier(19.0, 1.8),
        tier(22.0, 1.7),
        tier(25.0, 1.6),
        tier(28.0, 1.5),
        tier(32.0, 1.4),
        tier(36.0, 1.3),
        tier(41.0, 1.2),
    ],
};

static SHIELD_AURA: WeaponDef = WeaponDef {
    id: WeaponId::ShieldAura,
    name: "Static Field",
    base_damage: 3.0,
    base_cooldown: 1.0,
    base_speed: 0.0,
    projectile_radius: 5.0,
    projectile_lifetime: 0.0,
    pattern: ProjectilePattern::Aura,
    homing: false,
    visuals: look(0x18ffff, 5.0),
    rarity_damage_multipliers: None,
    upgrades: &[
        tier(4.0, 1.0),
        tier(5.0, 1.0),
        tier(6.0, 1.0),
        tier(7.0, 1.0),
        tier(8.0, 1.0),
        tier(9.0, 1.0),
        tier(10.0, 1.0),
        tier(12.0, 1.0),
    ],
};

static HOMING_SWARM: WeaponDef = WeaponDef {
    id: WeaponId::HomingSwarm,
    name: "Seeker Swarm",
    base_damage: 12.0,
    base_cooldown: 1.4,
    base_speed: 25.0,
    projectile_radius: 0.35,
    projectile_lifetime: 3.0,
    pattern: ProjectilePattern::Default,
    homing: true,
    visuals: look(0xffff00, 0.9),
    rarity_damage_multipliers: Some(STANDARD_RARITY_DAMAGE),
    upgrades: &[
        tier(14.0, 1.35),
        tier(16.0, 1.3),
        tier(18.0, 1.25),
        tier(21.0, 1.2),
        tier(24.0, 1.15),
        tier(27.0, 1.1),
        tier(31.0, 1.05),
        tier(35.0, 1.0),
    ],
};
