//! Simulation world: the host that owns one run.
//!
//! `SimulationWorld` owns the weapon system, the boon engine and the
//! progression engine, processes queued `RunCommand`s at frame boundaries,
//! and steps everything in a fixed order. Completely headless and driven by a
//! single seeded RNG, so runs replay deterministically.

use std::collections::VecDeque;

use glam::{DVec2, DVec3};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use starwake_core::commands::RunCommand;
use starwake_core::components::{ModifierSet, Projectile};
use starwake_core::constants::{BASE_MAX_HP, DT, SNAPSHOT_VERSION};
use starwake_core::enums::{GalaxyId, Rarity};
use starwake_core::events::ScanStatus;
use starwake_core::registry::SYSTEM_NAMES;
use starwake_core::snapshot::{RunSnapshot, SavedWeapon};
use starwake_core::state::{VitalsView, WorldView};
use starwake_core::types::SimTime;
use starwake_core::Result;

use crate::boons::BoonModifierEngine;
use crate::progression::LevelProgressionEngine;
use crate::snapshot;
use crate::weapons::WeaponSystem;

/// Configuration for starting a new run. Missing fields deserialize to
/// their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same run.
    pub seed: u64,
    pub galaxy: GalaxyId,
    /// Star-system names drawn without repetition.
    pub name_pool: Vec<String>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            galaxy: GalaxyId::default(),
            name_pool: SYSTEM_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl SimConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_galaxy(mut self, galaxy: GalaxyId) -> Self {
        self.galaxy = galaxy;
        self
    }
}

/// Per-frame player input.
#[derive(Debug, Clone, Copy)]
pub struct FrameInput {
    pub delta: f64,
    pub player_position: DVec3,
    /// Ship yaw in radians.
    pub player_rotation: f64,
    pub aim_direction: Option<DVec2>,
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            delta: DT,
            player_position: DVec3::ZERO,
            player_rotation: 0.0,
            aim_direction: None,
        }
    }
}

/// What happened during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameReport {
    pub projectiles_spawned: usize,
    pub scan: ScanStatus,
}

/// One run of the game. Owns all sim state.
pub struct SimulationWorld {
    config: SimConfig,
    rng: ChaCha8Rng,
    time: SimTime,
    command_queue: VecDeque<RunCommand>,
    weapons: WeaponSystem,
    boons: BoonModifierEngine,
    progression: LevelProgressionEngine,

    // --- Vitals ---
    hp: f64,
    fragments: u64,
    xp: u64,
}

impl SimulationWorld {
    /// Create a world and start a fresh run: starting loadout, first system.
    pub fn new(config: SimConfig) -> Self {
        let mut world = Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            time: SimTime::default(),
            command_queue: VecDeque::new(),
            weapons: WeaponSystem::new(),
            boons: BoonModifierEngine::new(),
            progression: LevelProgressionEngine::new(),
            hp: BASE_MAX_HP,
            fragments: 0,
            xp: 0,
        };
        world.start_run();
        world
    }

    /// Queue a command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: RunCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = RunCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the run by one frame.
    ///
    /// Order: queued commands, modifiers read, existing projectiles advanced,
    /// weapons fire, scanning, timers, hull regeneration.
    pub fn frame(&mut self, input: &FrameInput) -> FrameReport {
        self.process_commands();

        let modifiers = *self.boons.modifiers();
        self.weapons.advance_projectiles(input.delta);
        let projectiles_spawned = self.weapons.tick(
            input.delta,
            input.player_position,
            input.player_rotation,
            &modifiers,
            input.aim_direction,
            &mut self.rng,
        );
        let scan = self.progression.scanning_tick(
            input.delta,
            input.player_position.x,
            input.player_position.z,
        );
        self.progression.tick_timers(input.delta);
        self.regenerate(input.delta, &modifiers);
        self.time.advance(input.delta);

        FrameReport {
            projectiles_spawned,
            scan,
        }
    }

    /// Reap projectiles deactivated by the collision pass or by expiry.
    pub fn cleanup_projectiles(&mut self) -> usize {
        self.weapons.cleanup_inactive()
    }

    // --- Accessors ---

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn weapons(&self) -> &WeaponSystem {
        &self.weapons
    }

    pub fn boons(&self) -> &BoonModifierEngine {
        &self.boons
    }

    pub fn progression(&self) -> &LevelProgressionEngine {
        &self.progression
    }

    pub fn modifiers(&self) -> &ModifierSet {
        self.boons.modifiers()
    }

    /// Mutable projectile access for the collision layer.
    pub fn projectiles_mut(&mut self) -> &mut [Projectile] {
        self.weapons.projectiles_mut()
    }

    /// Complete observable state.
    pub fn view(&self) -> WorldView {
        snapshot::build_view(
            &self.time,
            &self.weapons,
            &self.boons,
            &self.progression,
            self.vitals(),
        )
    }

    // --- Vitals ---

    pub fn hp(&self) -> f64 {
        self.hp
    }

    pub fn max_hp(&self) -> f64 {
        BASE_MAX_HP + self.boons.modifiers().max_hp_bonus
    }

    pub fn fragments(&self) -> u64 {
        self.fragments
    }

    pub fn xp(&self) -> u64 {
        self.xp
    }

    pub fn vitals(&self) -> VitalsView {
        VitalsView {
            hp: self.hp,
            max_hp: self.max_hp(),
            fragments: self.fragments,
            xp: self.xp,
        }
    }

    /// Apply incoming hull damage after damage reduction. Returns the damage
    /// actually taken.
    pub fn take_damage(&mut self, amount: f64) -> f64 {
        let reduction = self.boons.modifiers().damage_reduction.clamp(0.0, 1.0);
        let taken = (amount.max(0.0) * (1.0 - reduction)).min(self.hp);
        self.hp -= taken;
        taken
    }

    /// Credit collected fragments, scaled by the fragment multiplier.
    pub fn collect_fragments(&mut self, base: u64) -> u64 {
        let gained = scaled(base, self.boons.modifiers().fragment_multiplier);
        self.fragments += gained;
        gained
    }

    /// Credit experience, scaled by the xp multiplier.
    pub fn gain_xp(&mut self, base: u64) -> u64 {
        let gained = scaled(base, self.boons.modifiers().xp_multiplier);
        self.xp += gained;
        gained
    }

    // --- Persistence ---

    /// Capture the minimal state needed to resume between systems.
    pub fn snapshot(&self) -> RunSnapshot {
        RunSnapshot {
            version: SNAPSHOT_VERSION,
            weapons: self
                .weapons
                .active_weapons()
                .iter()
                .map(|w| SavedWeapon {
                    id: w.weapon_id,
                    level: w.level,
                })
                .collect(),
            boons: self.boons.boons().iter().map(|b| b.boon_id).collect(),
            current_system: self.progression.current_system(),
            hp: self.hp,
            fragments: self.fragments,
        }
    }

    /// Rebuild the run from a snapshot. Weapon levels are replayed at Common
    /// rarity and boons come back at level 1.
    pub fn restore(&mut self, snapshot: &RunSnapshot) {
        self.command_queue.clear();
        self.weapons.reset();
        for saved in &snapshot.weapons {
            if self.weapons.add_weapon(saved.id, Rarity::Common) {
                for _ in 1..saved.level {
                    self.weapons.upgrade_weapon(saved.id, Rarity::Common);
                }
            }
        }
        self.boons.reset();
        for &boon_id in &snapshot.boons {
            self.boons.add_boon(boon_id, Rarity::Common);
        }

        self.progression.reset();
        self.progression.select_galaxy(self.config.galaxy);
        self.progression.set_current_system(snapshot.current_system);
        self.enter_system();

        self.hp = snapshot.hp.clamp(0.0, self.max_hp());
        self.fragments = snapshot.fragments;
        self.xp = 0;
        info!(
            system = snapshot.current_system,
            weapons = snapshot.weapons.len(),
            boons = snapshot.boons.len(),
            "run restored"
        );
    }

    /// Parse and apply a JSON snapshot.
    pub fn restore_json(&mut self, json: &str) -> Result<()> {
        let snapshot = RunSnapshot::from_json(json)?;
        self.restore(&snapshot);
        Ok(())
    }

    // --- Internals ---

    fn start_run(&mut self) {
        self.time = SimTime::default();
        self.weapons.reset();
        self.boons.reset();
        self.progression.reset();
        self.progression.select_galaxy(self.config.galaxy);
        self.weapons.initialize_weapons();
        self.enter_system();
        self.hp = self.max_hp();
        self.fragments = 0;
        self.xp = 0;
        info!(seed = self.config.seed, galaxy = self.config.galaxy.as_str(), "run started");
    }

    /// Generate the current system's planets and name.
    fn enter_system(&mut self) {
        self.progression.initialize_planets(&mut self.rng);
        self.progression
            .initialize_system_name(&self.config.name_pool, &mut self.rng);
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: RunCommand) {
        debug!(?command, "command");
        match command {
            RunCommand::AddWeapon { weapon_id, rarity } => {
                self.weapons.add_weapon(weapon_id, rarity);
            }
            RunCommand::UpgradeWeapon { weapon_id, rarity } => {
                self.weapons.upgrade_weapon(weapon_id, rarity);
            }
            RunCommand::RemoveWeapon { weapon_id } => {
                self.weapons.remove_weapon(weapon_id);
            }
            RunCommand::AddBoon { boon_id, rarity } => {
                self.boons.add_boon(boon_id, rarity);
                self.clamp_hp();
            }
            RunCommand::UpgradeBoon { boon_id, rarity } => {
                self.boons.upgrade_boon(boon_id, rarity);
                self.clamp_hp();
            }
            RunCommand::RemoveBoon { boon_id } => {
                self.boons.remove_boon(boon_id);
                self.clamp_hp();
            }
            RunCommand::BanishItem { item } => {
                self.progression.banish_item(item);
            }
            RunCommand::SpawnWormhole { x, z } => {
                self.progression.spawn_wormhole(x, z);
            }
            RunCommand::SetWormholeState { state } => {
                self.progression.set_wormhole_state(state);
            }
            RunCommand::SelectGalaxy { galaxy } => {
                self.config.galaxy = galaxy;
                self.progression.select_galaxy(galaxy);
            }
            RunCommand::AdvanceSystem => {
                self.progression.advance_system();
                self.weapons.clear_projectiles();
                self.enter_system();
            }
            RunCommand::ClearProjectiles => {
                self.weapons.clear_projectiles();
            }
            RunCommand::ResetRun => {
                self.start_run();
            }
        }
    }

    fn regenerate(&mut self, delta: f64, modifiers: &ModifierSet) {
        if modifiers.hp_regen_rate > 0.0 && self.hp > 0.0 {
            self.hp = (self.hp + modifiers.hp_regen_rate * delta).min(self.max_hp());
        }
    }

    fn clamp_hp(&mut self) {
        self.hp = self.hp.min(self.max_hp());
    }
}

fn scaled(base: u64, multiplier: f64) -> u64 {
    (base as f64 * multiplier).round() as u64
}
