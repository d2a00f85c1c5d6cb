//! Boon modifier engine. Owns equipped boons and the aggregated modifier set.
//!
//! The modifier set is rebuilt from the baseline on every boon mutation and
//! cached; readers never trigger a recompute.

use starwake_core::components::{BoonInstance, ModifierSet};
use starwake_core::constants::MAX_BOON_SLOTS;
use starwake_core::enums::{BoonId, Rarity, Stat};
use starwake_core::registry::{boon_def, StatEffect};
use tracing::{debug, trace};

#[derive(Debug, Clone, Default)]
pub struct BoonModifierEngine {
    boons: Vec<BoonInstance>,
    modifiers: ModifierSet,
    revision: u64,
}

impl BoonModifierEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn boons(&self) -> &[BoonInstance] {
        &self.boons
    }

    /// Current aggregated modifiers.
    pub fn modifiers(&self) -> &ModifierSet {
        &self.modifiers
    }

    /// Bumped on every change to the boon list.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn level_of(&self, boon_id: BoonId) -> Option<u32> {
        self.boons
            .iter()
            .find(|b| b.boon_id == boon_id)
            .map(|b| b.level)
    }

    /// Equip a boon at level 1. No-op when slots are full or it is equipped.
    pub fn add_boon(&mut self, boon_id: BoonId, rarity: Rarity) -> bool {
        if self.boons.len() >= MAX_BOON_SLOTS || self.level_of(boon_id).is_some() {
            trace!(boon = boon_id.as_str(), "add_boon rejected");
            return false;
        }
        self.boons.push(BoonInstance {
            boon_id,
            level: 1,
            rarity,
        });
        debug!(boon = boon_id.as_str(), ?rarity, "boon equipped");
        self.recompute();
        true
    }

    /// Raise an equipped boon one level. `rarity` replaces the boon's rarity:
    /// every upgrade is rolled independently of earlier picks.
    pub fn upgrade_boon(&mut self, boon_id: BoonId, rarity: Rarity) -> bool {
        let max_level = boon_def(boon_id).max_level;
        let Some(boon) = self
            .boons
            .iter_mut()
            .find(|b| b.boon_id == boon_id && b.level < max_level)
        else {
            trace!(boon = boon_id.as_str(), "upgrade_boon rejected");
            return false;
        };
        boon.level += 1;
        boon.rarity = rarity;
        debug!(boon = boon_id.as_str(), level = boon.level, ?rarity, "boon upgraded");
        self.recompute();
        true
    }

    pub fn remove_boon(&mut self, boon_id: BoonId) -> bool {
        let before = self.boons.len();
        self.boons.retain(|b| b.boon_id != boon_id);
        if self.boons.len() == before {
            return false;
        }
        debug!(boon = boon_id.as_str(), "boon removed");
        self.recompute();
        true
    }

    /// Drop every boon and return to the baseline modifiers.
    pub fn reset(&mut self) {
        self.boons.clear();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.modifiers = compute_modifiers(&self.boons);
        self.revision += 1;
    }
}

/// Rebuild a modifier set from the baseline and a list of boons.
///
/// Each boon contributes only its current tier. `Scale` effects are
/// rarity-scaled as `1 + (v - 1) * factor` and multiplied across boons;
/// `Add` effects are scaled as `v * factor` and summed; `Set` effects replace
/// the baseline (rarity-scaled like `Scale`, highest wins). Only crit chance is
/// clamped.
pub fn compute_modifiers(boons: &[BoonInstance]) -> ModifierSet {
    let mut modifiers = ModifierSet::default();
    let mut overridden: Vec<Stat> = Vec::new();

    for boon in boons {
        let Some(tier) = boon_def(boon.boon_id).tier(boon.level) else {
            continue;
        };
        let factor = boon.rarity.factor();
        for effect in tier.effects {
            match *effect {
                StatEffect::Scale(stat, value) => {
                    *modifiers.get_mut(stat) *= scale_multiplier(value, factor);
                }
                StatEffect::Add(stat, value) => {
                    *modifiers.get_mut(stat) += value * factor;
                }
                StatEffect::Set(stat, value) => {
                    let value = scale_multiplier(value, factor);
                    let slot = modifiers.get_mut(stat);
                    if overridden.contains(&stat) {
                        *slot = slot.max(value);
                    } else {
                        *slot = value;
                        overridden.push(stat);
                    }
                }
            }
        }
    }

    modifiers.crit_chance = modifiers.crit_chance.clamp(0.0, 1.0);
    modifiers
}

fn scale_multiplier(value: f64, rarity_factor: f64) -> f64 {
    1.0 + (value - 1.0) * rarity_factor
}
