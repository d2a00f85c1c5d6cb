//! Boon definitions.
//!
//! A boon's level selects one tier. Tiers replace each other: a level-3 boon
//! applies only its third tier, never the sum of tiers 1 to 3.

use crate::enums::{BoonId, Stat};

/// How a tier value combines into the aggregated modifier set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatEffect {
    /// Multiplier-type: scaled by rarity, multiplied across boons.
    Scale(Stat, f64),
    /// Additive: summed across boons.
    Add(Stat, f64),
    /// Absolute value replacing the baseline; highest across boons wins.
    Set(Stat, f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoonTier {
    pub effects: &'static [StatEffect],
    pub description: &'static str,
    /// Short value shown on the pick card, e.g. "+15% DMG".
    pub stat_preview: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoonDef {
    pub id: BoonId,
    pub name: &'static str,
    /// One-line effect summary independent of level.
    pub effect: &'static str,
    pub max_level: u32,
    /// Entry `i` is the tier for level `i + 1`.
    pub tiers: &'static [BoonTier],
}

impl BoonDef {
    /// Tier for `level`, clamped into the defined range.
    pub fn tier(&self, level: u32) -> Option<&BoonTier> {
        if self.tiers.is_empty() {
            return None;
        }
        let index = (level.max(1) as usize - 1).min(self.tiers.len() - 1);
        self.tiers.get(index)
    }
}

/// Look up a boon definition.
pub fn boon_def(id: BoonId) -> &'static BoonDef {
    match id {
        BoonId::DamageAmp => &DAMAGE_AMP,
        BoonId::RapidFire => &RAPID_FIRE,
        BoonId::CritChance => &CRIT_CHANCE,
        BoonId::CritMultiplier => &CRIT_MULTIPLIER,
        BoonId::Thrusters => &THRUSTERS,
        BoonId::VelocityRounds => &VELOCITY_ROUNDS,
        BoonId::HullPlating => &HULL_PLATING,
        BoonId::NanoRepair => &NANO_REPAIR,
        BoonId::Scholar => &SCHOLAR,
        BoonId::Salvager => &SALVAGER,
        BoonId::Magnet => &MAGNET,
        BoonId::Fortune => &FORTUNE,
    }
}

static DAMAGE_AMP: BoonDef = BoonDef {
    id: BoonId::DamageAmp,
    name: "Overcharged Cells",
    effect: "Increases all weapon damage",
    max_level: 3,
    tiers: &[
        BoonTier {
            effects: &[StatEffect::Scale(Stat::Damage, 1.15)],
            description: "Weapons deal 15% more damage.",
            stat_preview: "+15% DMG",
        },
        BoonTier {
            effects: &[StatEffect::Scale(Stat::Damage, 1.3)],
            description: "Weapons deal 30% more damage.",
            stat_preview: "+30% DMG",
        },
        BoonTier {
            effects: &[StatEffect::Scale(Stat::Damage, 1.5)],
            description: "Weapons deal 50% more damage.",
            stat_preview: "+50% DMG",
        },
    ],
};

static RAPID_FIRE: BoonDef = BoonDef {
    id: BoonId::RapidFire,
    name: "Coolant Loop",
    effect: "Shortens weapon cooldowns",
    max_level: 3,
    tiers: &[
        BoonTier {
            effects: &[StatEffect::Scale(Stat::Cooldown, 0.9)],
            description: "Weapon cooldowns are 10% shorter.",
            stat_preview: "-10% CD",
        },
        BoonTier {
            effects: &[StatEffect::Scale(Stat::Cooldown, 0.8)],
            description: "Weapon cooldowns are 20% shorter.",
            stat_preview: "-20% CD",
        },
        BoonTier {
            effects: &[StatEffect::Scale(Stat::Cooldown, 0.7)],
            description: "Weapon cooldowns are 30% shorter.",
            stat_preview: "-30% CD",
        },
    ],
};

static CRIT_CHANCE: BoonDef = BoonDef {
    id: BoonId::CritChance,
    name: "Targeting Array",
    effect: "Adds critical hit chance",
    max_level: 3,
    tiers: &[
        BoonTier {
            effects: &[StatEffect::Add(Stat::CritChance, 0.1)],
            description: "10% chance to land a critical hit.",
            stat_preview: "+10% CRIT",
        },
        BoonTier {
            effects: &[StatEffect::Add(Stat::CritChance, 0.2)],
            description: "20% chance to land a critical hit.",
            stat_preview: "+20% CRIT",
        },
        BoonTier {
            effects: &[StatEffect::Add(Stat::CritChance, 0.3)],
            description: "30% chance to land a critical hit.",
            stat_preview: "+30% CRIT",
        },
    ],
};

static CRIT_MULTIPLIER: BoonDef = BoonDef {
    id: BoonId::CritMultiplier,
    name: "Hollow Point",
    effect: "Raises critical hit damage",
    max_level: 3,
    tiers: &[
        BoonTier {
            effects: &[StatEffect::Set(Stat::CritMultiplier, 2.0)],
            description: "Critical hits deal 2.0x damage.",
            stat_preview: "2.0x CRIT DMG",
        },
        BoonTier {
            effects: &[StatEffect::Set(Stat::CritMultiplier, 2.2)],
            description: "Critical hits deal 2.2x damage.",
            stat_preview: "2.2x CRIT DMG",
        },
        BoonTier {
            effects: &[StatEffect::Set(Stat::CritMultiplier, 2.4)],
            description: "Critical hits deal 2.4x damage.",
            stat_preview: "2.4x CRIT DMG",
        },
    ],
};

static THRUSTERS: BoonDef = BoonDef {
    id: BoonId::Thrusters,
    name: "Afterburners",
    effect: "Increases ship speed",
    max_level: 3,
    tiers: &[
        BoonTier {
            effects: &[StatEffect::Scale(Stat::Speed, 1.1)],
            description: "Move 10% faster.",
            stat_preview: "+10% SPD",
        },
        BoonTier {
            effects: &[StatEffect::Scale(Stat::Speed, 1.2)],
            description: "Move 20% faster.",
            stat_preview: "+20% SPD",
        },
        BoonTier {
            effects: &[StatEffect::Scale(Stat::Speed, 1.3)],
            description: "Move 30% faster.",
            stat_preview: "+30% SPD",
        },
    ],
};

static VELOCITY_ROUNDS: BoonDef = BoonDef {
    id: BoonId::VelocityRounds,
    name: "Mass Drivers",
    effect: "Increases projectile speed",
    max_level: 3,
    tiers: &[
        BoonTier {
            effects: &[StatEffect::Scale(Stat::ProjectileSpeed, 1.15)],
            description: "Projectiles travel 15% faster.",
            stat_preview: "+15% PROJ SPD",
        },
        BoonTier {
            effects: &[StatEffect::Scale(Stat::ProjectileSpeed, 1.3)],
            description: "Projectiles travel 30% faster.",
            stat_preview: "+30% PROJ SPD",
        },
        BoonTier {
            effects: &[StatEffect::Scale(Stat::ProjectileSpeed, 1.5)],
            description: "Projectiles travel 50% faster.",
            stat_preview: "+50% PROJ SPD",
        },
    ],
};

static HULL_PLATING: BoonDef = BoonDef {
    id: BoonId::HullPlating,
    name: "Ablative Plating",
    effect: "Adds hull and damage reduction",
    max_level: 3,
    tiers: &[
        BoonTier {
            effects: &[
                StatEffect::Add(Stat::MaxHp, 20.0),
                StatEffect::Add(Stat::DamageReduction, 0.05),
            ],
            description: "+20 max hull, take 5% less damage.",
            stat_preview: "+20 HP / 5% DR",
        },
        BoonTier {
            effects: &[
                StatEffect::Add(Stat::MaxHp, 40.0),
                StatEffect::Add(Stat::DamageReduction, 0.1),
            ],
            description: "+40 max hull, take 10% less damage.",
            stat_preview: "+40 HP / 10% DR",
        },
        BoonTier {
            effects: &[
                StatEffect::Add(Stat::MaxHp, 60.0),
                StatEffect::Add(Stat::DamageReduction, 0.15),
            ],
            description: "+60 max hull, take 15% less damage.",
            stat_preview: "+60 HP / 15% DR",
        },
    ],
};

static NANO_REPAIR: BoonDef = BoonDef {
    id: BoonId::NanoRepair,
    name: "Nanite Swarm",
    effect: "Regenerates hull over time",
    max_level: 3,
    tiers: &[
        BoonTier {
            effects: &[StatEffect::Add(Stat::HpRegen, 0.5)],
            description: "Repair 0.5 hull per second.",
            stat_preview: "+0.5 HP/s",
        },
        BoonTier {
            effects: &[StatEffect::Add(Stat::HpRegen, 1.0)],
            description: "Repair 1 hull per second.",
            stat_preview: "+1 HP/s",
        },
        BoonTier {
            effects: &[StatEffect::Add(Stat::HpRegen, 2.0)],
            description: "Repair 2 hull per second.",
            stat_preview: "+2 HP/s",
        },
    ],
};

static SCHOLAR: BoonDef = BoonDef {
    id: BoonId::Scholar,
    name: "Data Siphon",
    effect: "Increases experience gained",
    max_level: 3,
    tiers: &[
        BoonTier {
            effects: &[StatEffect::Scale(Stat::Xp, 1.1)],
            description: "Gain 10% more experience.",
            stat_preview: "+10% XP",
        },
        BoonTier {
            effects: &[StatEffect::Scale(Stat::Xp, 1.2)],
            description: "Gain 20% more experience.",
            stat_preview: "+20% XP",
        },
        BoonTier {
            effects: &[StatEffect::Scale(Stat::Xp, 1.35)],
            description: "Gain 35% more experience.",
            stat_preview: "+35% XP",
        },
    ],
};

static SALVAGER: BoonDef = BoonDef {
    id: BoonId::Salvager,
    name: "Salvage Rig",
    effect: "Increases fragments collected",
    max_level: 3,
    tiers: &[
        BoonTier {
            effects: &[StatEffect::Scale(Stat::Fragments, 1.15)],
            description: "Collect 15% more fragments.",
            stat_preview: "+15% FRAG",
        },
        BoonTier {
            effects: &[StatEffect::Scale(Stat::Fragments, 1.3)],
            description: "Collect 30% more fragments.",
            stat_preview: "+30% FRAG",
        },
        BoonTier {
            effects: &[StatEffect::Scale(Stat::Fragments, 1.5)],
            description: "Collect 50% more fragments.",
            stat_preview: "+50% FRAG",
        },
    ],
};

static MAGNET: BoonDef = BoonDef {
    id: BoonId::Magnet,
    name: "Tractor Field",
    effect: "Widens pickup radius",
    max_level: 3,
    tiers: &[
        BoonTier {
            effects: &[StatEffect::Scale(Stat::PickupRadius, 1.25)],
            description: "Pickup radius 25% larger.",
            stat_preview: "+25% PICKUP",
        },
        BoonTier {
            effects: &[StatEffect::Scale(Stat::PickupRadius, 1.5)],
            description: "Pickup radius 50% larger.",
            stat_preview: "+50% PICKUP",
        },
        BoonTier {
            effects: &[StatEffect::Scale(Stat::PickupRadius, 2.0)],
            description: "Pickup radius doubled.",
            stat_preview: "+100% PICKUP",
        },
    ],
};

static FORTUNE: BoonDef = BoonDef {
    id: BoonId::Fortune,
    name: "Lucky Charm",
    effect: "Improves reward rarity rolls",
    max_level: 3,
    tiers: &[
        BoonTier {
            effects: &[StatEffect::Add(Stat::Luck, 0.05)],
            description: "+5% luck on reward rolls.",
            stat_preview: "+5 LUCK",
        },
        BoonTier {
            effects: &[StatEffect::Add(Stat::Luck, 0.1)],
            description: "+10% luck on reward rolls.",
            stat_preview: "+10 LUCK",
        },
        BoonTier {
            effects: &[StatEffect::Add(Stat::Luck, 0.2)],
            description: "+20% luck on reward rolls.",
            stat_preview: "+20 LUCK",
        },
    ],
};
