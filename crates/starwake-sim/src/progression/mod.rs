//! Level progression engine: planets and scanning, the wormhole objective,
//! per-system timers, and run-scoped memory (used system names, banished
//! items).
//!
//! Scan state per planet: unscanned → scanning (active id, progress > 0) →
//! scanned. Scanned is terminal.

pub mod placement;

use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, trace};

use starwake_core::components::{Planet, PlanetId};
use starwake_core::constants::{BASE_DIFFICULTY, DIFFICULTY_RAMP_PER_SEC, FIRST_SYSTEM};
use starwake_core::enums::{GalaxyId, ItemRef, WormholeState};
use starwake_core::events::ScanStatus;
use starwake_core::registry::{galaxy_def, planet_def, required_scans, wormhole_threshold_met};

#[derive(Debug, Clone)]
pub struct LevelProgressionEngine {
    galaxy: GalaxyId,
    current_system: u32,
    system_name: Option<String>,
    used_system_names: Vec<String>,
    planets: Vec<Planet>,
    active_scan_planet_id: Option<PlanetId>,
    wormhole_state: WormholeState,
    wormhole_position: Option<(f64, f64)>,
    wormhole_timer: f64,
    system_timer: f64,
    difficulty: f64,
    banished_items: Vec<ItemRef>,
}

impl Default for LevelProgressionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelProgressionEngine {
    pub fn new() -> Self {
        Self {
            galaxy: GalaxyId::default(),
            current_system: FIRST_SYSTEM,
            system_name: None,
            used_system_names: Vec::new(),
            planets: Vec::new(),
            active_scan_planet_id: None,
            wormhole_state: WormholeState::Hidden,
            wormhole_position: None,
            wormhole_timer: 0.0,
            system_timer: 0.0,
            difficulty: base_difficulty(GalaxyId::default()),
            banished_items: Vec::new(),
        }
    }

    // --- Getters ---

    pub fn galaxy(&self) -> GalaxyId {
        self.galaxy
    }

    pub fn current_system(&self) -> u32 {
        self.current_system
    }

    pub fn system_name(&self) -> Option<&str> {
        self.system_name.as_deref()
    }

    pub fn used_system_names(&self) -> &[String] {
        &self.used_system_names
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn active_scan_planet_id(&self) -> Option<PlanetId> {
        self.active_scan_planet_id
    }

    pub fn wormhole_state(&self) -> WormholeState {
        self.wormhole_state
    }

    pub fn wormhole_position(&self) -> Option<(f64, f64)> {
        self.wormhole_position
    }

    pub fn wormhole_timer(&self) -> f64 {
        self.wormhole_timer
    }

    pub fn system_timer(&self) -> f64 {
        self.system_timer
    }

    pub fn difficulty(&self) -> f64 {
        self.difficulty
    }

    pub fn banished_items(&self) -> &[ItemRef] {
        &self.banished_items
    }

    pub fn scanned_count(&self) -> usize {
        self.planets.iter().filter(|p| p.scanned).count()
    }

    /// Scans needed in the selected galaxy before the wormhole may spawn.
    pub fn required_scans(&self) -> u32 {
        required_scans(galaxy_def(self.galaxy))
    }

    /// Re-evaluated on every call against the currently selected galaxy.
    pub fn wormhole_threshold_met(&self) -> bool {
        wormhole_threshold_met(self.scanned_count(), galaxy_def(self.galaxy))
    }

    // --- Scanning ---

    /// Progress the scan of the nearest unscanned planet whose scan zone
    /// contains the player.
    ///
    /// Moving to a different target, or out of every zone, zeroes the
    /// abandoned target's progress.
    pub fn scanning_tick(&mut self, delta: f64, player_x: f64, player_z: f64) -> ScanStatus {
        let target = self.nearest_scannable(player_x, player_z);
        let target_id = target.map(|index| self.planets[index].id);

        if self.active_scan_planet_id != target_id {
            if let Some(previous) = self.active_scan_planet_id {
                if let Some(planet) = self
                    .planets
                    .iter_mut()
                    .find(|p| p.id == previous && !p.scanned)
                {
                    planet.scan_progress = 0.0;
                    trace!(planet = previous, "scan abandoned");
                }
            }
            self.active_scan_planet_id = target_id;
        }

        let Some(index) = target else {
            return ScanStatus::Idle;
        };
        let planet = &mut self.planets[index];
        let def = planet_def(planet.type_id);
        planet.scan_progress += delta / def.scan_time;

        if planet.scan_progress >= 1.0 {
            planet.scan_progress = 1.0;
            planet.scanned = true;
            self.active_scan_planet_id = None;
            debug!(
                planet = planet.id,
                planet_type = planet.type_id.as_str(),
                tier = planet.tier,
                "planet scanned"
            );
            ScanStatus::Completed {
                planet_id: planet.id,
                tier: planet.tier,
            }
        } else {
            ScanStatus::Scanning {
                planet_id: planet.id,
                progress: planet.scan_progress,
            }
        }
    }

    /// Index of the closest unscanned planet in scan range. Ties keep the
    /// earlier planet.
    fn nearest_scannable(&self, x: f64, z: f64) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, planet) in self.planets.iter().enumerate() {
            if planet.scanned {
                continue;
            }
            let dx = planet.x - x;
            let dz = planet.z - z;
            let distance = (dx * dx + dz * dz).sqrt();
            if distance > planet_def(planet.type_id).scan_radius {
                continue;
            }
            if best.map_or(true, |(_, d)| distance < d) {
                best = Some((index, distance));
            }
        }
        best.map(|(index, _)| index)
    }

    // --- System generation ---

    /// Replace the planet list with a fresh layout for the selected galaxy.
    pub fn initialize_planets(&mut self, rng: &mut ChaCha8Rng) {
        self.planets.clear();
        self.active_scan_planet_id = None;
        for &(type_id, count) in galaxy_def(self.galaxy).planet_mix {
            let def = planet_def(type_id);
            for _ in 0..count {
                let (x, z) = placement::sample_position(&self.planets, rng);
                self.planets.push(Planet {
                    id: self.planets.len() as PlanetId,
                    type_id,
                    tier: def.tier,
                    x,
                    z,
                    scanned: false,
                    scan_progress: 0.0,
                });
            }
        }
        debug!(
            system = self.current_system,
            planets = self.planets.len(),
            "planets placed"
        );
    }

    /// Pick a system name not used yet this run. Once the pool is exhausted
    /// the used list restarts with the new pick. An empty pool does nothing.
    pub fn initialize_system_name<S: AsRef<str>>(
        &mut self,
        pool: &[S],
        rng: &mut ChaCha8Rng,
    ) -> Option<&str> {
        if pool.is_empty() {
            return None;
        }
        let fresh: Vec<&str> = pool
            .iter()
            .map(AsRef::as_ref)
            .filter(|name| !self.used_system_names.iter().any(|used| used == name))
            .collect();

        let name = if fresh.is_empty() {
            let name = pool.choose(rng)?.as_ref().to_string();
            self.used_system_names.clear();
            name
        } else {
            (*fresh.choose(rng)?).to_string()
        };

        self.used_system_names.push(name.clone());
        self.system_name = Some(name);
        self.system_name.as_deref()
    }

    // --- Wormhole ---

    /// Reveal the wormhole at `(x, z)`. The caller checks the scan threshold.
    pub fn spawn_wormhole(&mut self, x: f64, z: f64) {
        self.wormhole_state = WormholeState::Visible;
        self.wormhole_position = Some((x, z));
        info!(system = self.current_system, x, z, "wormhole spawned");
    }

    /// Drive the wormhole through the states past `Visible`.
    pub fn set_wormhole_state(&mut self, state: WormholeState) {
        debug!(from = ?self.wormhole_state, to = ?state, "wormhole state");
        self.wormhole_state = state;
    }

    // --- Timers ---

    pub fn tick_timers(&mut self, delta: f64) {
        self.system_timer += delta;
        self.difficulty += delta * DIFFICULTY_RAMP_PER_SEC;
        if self.wormhole_state.is_charging() {
            self.wormhole_timer += delta;
        }
    }

    // --- Run control ---

    pub fn select_galaxy(&mut self, galaxy: GalaxyId) {
        info!(galaxy = galaxy.as_str(), "galaxy selected");
        self.galaxy = galaxy;
    }

    /// Move to the next system. Banished items and used names survive.
    pub fn advance_system(&mut self) {
        self.current_system += 1;
        self.clear_system();
        info!(
            system = self.current_system,
            galaxy = self.galaxy.as_str(),
            "advanced to next system"
        );
    }

    /// Jump straight to `system`, as when resuming a saved run.
    pub fn set_current_system(&mut self, system: u32) {
        self.current_system = system.max(FIRST_SYSTEM);
        self.clear_system();
    }

    /// Start over from the first system, forgetting run-scoped memory. The
    /// selected galaxy is kept.
    pub fn reset(&mut self) {
        self.current_system = FIRST_SYSTEM;
        self.used_system_names.clear();
        self.banished_items.clear();
        self.clear_system();
    }

    /// Exclude an item from future reward offers this run.
    pub fn banish_item(&mut self, item: ItemRef) -> bool {
        if self.is_banished(item) {
            return false;
        }
        debug!(%item, "item banished");
        self.banished_items.push(item);
        true
    }

    pub fn is_banished(&self, item: ItemRef) -> bool {
        self.banished_items.contains(&item)
    }

    /// Replace the planet list with a hand-built layout (for tests).
    #[cfg(test)]
    pub fn set_test_planets(&mut self, planets: Vec<Planet>) {
        self.planets = planets;
        self.active_scan_planet_id = None;
    }

    fn clear_system(&mut self) {
        self.system_name = None;
        self.planets.clear();
        self.active_scan_planet_id = None;
        self.wormhole_state = WormholeState::Hidden;
        self.wormhole_position = None;
        self.wormhole_timer = 0.0;
        self.system_timer = 0.0;
        self.difficulty = base_difficulty(self.galaxy);
    }
}

/// Difficulty a system starts at in `galaxy`.
fn base_difficulty(galaxy: GalaxyId) -> f64 {
    BASE_DIFFICULTY * galaxy_def(galaxy).difficulty_scale
}
