//! Weapon system: equipped weapons, cooldown-gated firing, and the live
//! projectile list.
//!
//! The collision layer reads `projectiles()` and may only flip `active` to
//! false (and bump `pierce_hits`); reaping happens in `cleanup_inactive`.

pub mod patterns;

use std::f64::consts::TAU;

use glam::{DVec2, DVec3};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use starwake_core::components::{
    Explosion, ModifierSet, Piercing, Projectile, ProjectileId, WeaponInstance, WeaponOverrides,
};
use starwake_core::constants::{MAX_PROJECTILES, MAX_WEAPON_LEVEL, MAX_WEAPON_SLOTS};
use starwake_core::enums::{Rarity, WeaponId};
use starwake_core::registry::{
    weapon_def, ProjectilePattern, WeaponDef, WeaponUpgrade, STARTING_WEAPON,
};
use starwake_core::types::yaw_of;

use patterns::{FireOrigin, Muzzle};

#[derive(Debug, Clone, Default)]
pub struct WeaponSystem {
    weapons: Vec<WeaponInstance>,
    projectiles: Vec<Projectile>,
    next_projectile_id: ProjectileId,
    revision: u64,
    /// Reused per discharge to avoid per-tick allocation.
    muzzle_buffer: Vec<Muzzle>,
}

impl WeaponSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_weapons(&self) -> &[WeaponInstance] {
        &self.weapons
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    /// Mutable access for the collision layer.
    pub fn projectiles_mut(&mut self) -> &mut [Projectile] {
        &mut self.projectiles
    }

    pub fn weapon(&self, weapon_id: WeaponId) -> Option<&WeaponInstance> {
        self.weapons.iter().find(|w| w.weapon_id == weapon_id)
    }

    /// Bumped on weapon-list changes, projectile creation and reaping.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Equip the starting loadout.
    pub fn initialize_weapons(&mut self) {
        self.add_weapon(STARTING_WEAPON, Rarity::Common);
    }

    /// Equip a weapon at level 1. No-op when slots are full or it is equipped.
    ///
    /// Weapons with a rarity damage table get the pick's damage baked into
    /// their overrides here, once.
    pub fn add_weapon(&mut self, weapon_id: WeaponId, rarity: Rarity) -> bool {
        if self.weapons.len() >= MAX_WEAPON_SLOTS || self.weapon(weapon_id).is_some() {
            trace!(weapon = weapon_id.as_str(), "add_weapon rejected");
            return false;
        }
        let def = weapon_def(weapon_id);
        let overrides = WeaponOverrides {
            damage: def
                .rarity_damage_multiplier(rarity)
                .map(|m| (def.base_damage * m).round()),
            ..Default::default()
        };
        self.weapons.push(WeaponInstance {
            weapon_id,
            level: 1,
            rarity,
            cooldown_timer: 0.0,
            overrides,
            orbital_angle: matches!(def.pattern, ProjectilePattern::Orbital { .. })
                .then_some(0.0),
        });
        self.revision += 1;
        debug!(weapon = weapon_id.as_str(), ?rarity, "weapon equipped");
        true
    }

    /// Raise an equipped weapon one level and apply that level's table entry.
    /// The entry's damage is scaled by this upgrade's own `rarity`.
    pub fn upgrade_weapon(&mut self, weapon_id: WeaponId, rarity: Rarity) -> bool {
        let Some(weapon) = self
            .weapons
            .iter_mut()
            .find(|w| w.weapon_id == weapon_id && w.level < MAX_WEAPON_LEVEL)
        else {
            trace!(weapon = weapon_id.as_str(), "upgrade_weapon rejected");
            return false;
        };
        let def = weapon_def(weapon_id);
        weapon.level += 1;
        weapon.rarity = rarity;
        if let Some(upgrade) = def.upgrade_for_level(weapon.level) {
            apply_upgrade(
                &mut weapon.overrides,
                upgrade,
                def.rarity_damage_multiplier(rarity),
            );
        }
        debug!(
            weapon = weapon_id.as_str(),
            level = weapon.level,
            ?rarity,
            "weapon upgraded"
        );
        self.revision += 1;
        true
    }

    pub fn remove_weapon(&mut self, weapon_id: WeaponId) -> bool {
        let before = self.weapons.len();
        self.weapons.retain(|w| w.weapon_id != weapon_id);
        if self.weapons.len() == before {
            return false;
        }
        debug!(weapon = weapon_id.as_str(), "weapon removed");
        self.revision += 1;
        true
    }

    /// Advance cooldowns and fire every ready weapon. Returns the number of
    /// projectiles spawned.
    ///
    /// `aim_direction` overrides the ship's facing when present and non-zero.
    pub fn tick(
        &mut self,
        delta: f64,
        player_position: DVec3,
        player_rotation: f64,
        modifiers: &ModifierSet,
        aim_direction: Option<DVec2>,
        rng: &mut ChaCha8Rng,
    ) -> usize {
        let origin = FireOrigin {
            position: player_position,
            rotation: player_rotation,
            fire_angle: aim_direction
                .filter(|d| d.length_squared() > 0.0)
                .map_or(player_rotation, yaw_of),
        };
        let mut spawned = 0;

        for index in 0..self.weapons.len() {
            let def = weapon_def(self.weapons[index].weapon_id);
            if def.is_aura() {
                continue;
            }

            let weapon = &mut self.weapons[index];
            if let (ProjectilePattern::Orbital { speed, .. }, Some(angle)) =
                (def.pattern, weapon.orbital_angle.as_mut())
            {
                *angle = (*angle + delta * speed).rem_euclid(TAU);
            }

            weapon.cooldown_timer -= delta;
            if weapon.cooldown_timer > 0.0 {
                continue;
            }
            let cooldown = weapon.overrides.cooldown.unwrap_or(def.base_cooldown);
            weapon.cooldown_timer = cooldown * modifiers.cooldown_multiplier;

            if self.projectiles.len() >= MAX_PROJECTILES {
                trace!(weapon = def.id.as_str(), "projectile cap reached");
                continue;
            }

            let overrides = weapon.overrides;
            let orbital_angle = weapon.orbital_angle;
            let mut damage =
                overrides.damage.unwrap_or(def.base_damage) * modifiers.damage_multiplier;
            if rng.gen::<f64>() < modifiers.crit_chance {
                damage *= modifiers.crit_multiplier;
            }

            let mut muzzles = std::mem::take(&mut self.muzzle_buffer);
            muzzles.clear();
            patterns::emit(&def.pattern, &origin, orbital_angle, rng, &mut muzzles);
            for muzzle in &muzzles {
                if self.projectiles.len() >= MAX_PROJECTILES {
                    break;
                }
                let projectile = self.build_projectile(def, &overrides, modifiers, damage, muzzle);
                self.projectiles.push(projectile);
                spawned += 1;
            }
            self.muzzle_buffer = muzzles;
        }

        if spawned > 0 {
            self.revision += 1;
        }
        spawned
    }

    /// Move active projectiles and expire the ones past their lifetime.
    pub fn advance_projectiles(&mut self, delta: f64) {
        for projectile in self.projectiles.iter_mut().filter(|p| p.active) {
            let step = projectile.direction * projectile.speed * delta;
            projectile.position += DVec3::new(step.x, 0.0, step.y);
            projectile.elapsed_time += delta;
            if projectile.elapsed_time >= projectile.lifetime {
                projectile.active = false;
            }
        }
    }

    /// Drop projectiles the collision layer or lifetime expiry deactivated.
    pub fn cleanup_inactive(&mut self) -> usize {
        let before = self.projectiles.len();
        self.projectiles.retain(|p| p.active);
        let removed = before - self.projectiles.len();
        if removed > 0 {
            self.revision += 1;
        }
        removed
    }

    /// Wipe projectiles and zero cooldowns. Weapons stay equipped.
    pub fn clear_projectiles(&mut self) {
        self.projectiles.clear();
        for weapon in &mut self.weapons {
            weapon.cooldown_timer = 0.0;
        }
        self.revision += 1;
    }

    /// Unequip everything and wipe projectiles.
    pub fn reset(&mut self) {
        self.weapons.clear();
        self.projectiles.clear();
        self.revision += 1;
    }

    fn build_projectile(
        &mut self,
        def: &WeaponDef,
        overrides: &WeaponOverrides,
        modifiers: &ModifierSet,
        damage: f64,
        muzzle: &Muzzle,
    ) -> Projectile {
        let id = self.next_projectile_id;
        self.next_projectile_id += 1;
        let visuals = overrides.visuals.unwrap_or(def.visuals);
        Projectile {
            id,
            weapon_id: def.id,
            position: muzzle.position,
            direction: muzzle.direction,
            speed: def.base_speed * modifiers.projectile_speed_multiplier,
            damage,
            radius: def.projectile_radius,
            lifetime: def.projectile_lifetime,
            elapsed_time: 0.0,
            color: visuals.color,
            mesh_scale: visuals.mesh_scale,
            homing: def.homing,
            piercing: match def.pattern {
                ProjectilePattern::Piercing { pierce_count } => Some(Piercing {
                    pierce_count: overrides.pierce_count.unwrap_or(pierce_count),
                    pierce_hits: 0,
                }),
                _ => None,
            },
            explosion: match def.pattern {
                ProjectilePattern::Explosive { radius, damage } => {
                    Some(Explosion { radius, damage })
                }
                _ => None,
            },
            active: true,
        }
    }
}

/// Layer a level's table entry over the current overrides. Fields the entry
/// leaves out keep their previous override.
fn apply_upgrade(
    overrides: &mut WeaponOverrides,
    upgrade: &WeaponUpgrade,
    rarity_multiplier: Option<f64>,
) {
    if let Some(damage) = upgrade.damage {
        overrides.damage = Some(match rarity_multiplier {
            Some(m) => (damage * m).round(),
            None => damage,
        });
    }
    if let Some(cooldown) = upgrade.cooldown {
        overrides.cooldown = Some(cooldown);
    }
    if let Some(pierce_count) = upgrade.pierce_count {
        overrides.pierce_count = Some(pierce_count);
    }
    if let Some(visuals) = upgrade.visuals {
        overrides.visuals = Some(visuals);
    }
}
