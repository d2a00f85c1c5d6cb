//! Galaxy definitions and the wormhole threshold rule.

use crate::enums::{GalaxyId, PlanetType};

#[derive(Debug, Clone, PartialEq)]
pub struct GalaxyDef {
    pub id: GalaxyId,
    pub name: &'static str,
    pub planet_count: u32,
    /// Fraction of planets that must be scanned before the wormhole opens.
    pub wormhole_threshold: f64,
    /// Planets generated per system, by type. Counts sum to `planet_count`.
    pub planet_mix: &'static [(PlanetType, u32)],
    /// Enemy pressure scale applied on top of the per-system difficulty ramp.
    pub difficulty_scale: f64,
}

/// Look up a galaxy definition.
pub fn galaxy_def(id: GalaxyId) -> &'static GalaxyDef {
    match id {
        GalaxyId::Orion => &ORION,
        GalaxyId::Cygnus => &CYGNUS,
        GalaxyId::Andromeda => &ANDROMEDA,
    }
}

/// Scanned planets needed to open the wormhole in `galaxy`.
pub fn required_scans(galaxy: &GalaxyDef) -> u32 {
    (f64::from(galaxy.planet_count) * galaxy.wormhole_threshold).ceil() as u32
}

/// Evaluated by the caller on every check; never cached, because the
/// selected galaxy can change between checks.
pub fn wormhole_threshold_met(scanned_count: usize, galaxy: &GalaxyDef) -> bool {
    scanned_count >= required_scans(galaxy) as usize
}

static ORION: GalaxyDef = GalaxyDef {
    id: GalaxyId::Orion,
    name: "Orion Spur",
    planet_count: 8,
    wormhole_threshold: 0.5,
    planet_mix: &[
        (PlanetType::Barren, 4),
        (PlanetType::Oceanic, 3),
        (PlanetType::Volcanic, 1),
    ],
    difficulty_scale: 1.0,
};

static CYGNUS: GalaxyDef = GalaxyDef {
    id: GalaxyId::Cygnus,
    name: "Cygnus Reach",
    planet_count: 12,
    wormhole_threshold: 0.66,
    planet_mix: &[
        (PlanetType::Barren, 4),
        (PlanetType::Oceanic, 3),
        (PlanetType::Volcanic, 3),
        (PlanetType::GasGiant, 2),
    ],
    difficulty_scale: 1.35,
};

static ANDROMEDA: GalaxyDef = GalaxyDef {
    id: GalaxyId::Andromeda,
    name: "Andromeda Deep",
    planet_count: 15,
    wormhole_threshold: 0.75,
    planet_mix: &[
        (PlanetType::Barren, 4),
        (PlanetType::Oceanic, 3),
        (PlanetType::Volcanic, 3),
        (PlanetType::GasGiant, 3),
        (PlanetType::Crystalline, 2),
    ],
    difficulty_scale: 1.75,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn andromeda_needs_twelve_scans() {
        let galaxy = galaxy_def(GalaxyId::Andromeda);
        assert_eq!(required_scans(galaxy), 12);
        assert!(!wormhole_threshold_met(11, galaxy));
        assert!(wormhole_threshold_met(12, galaxy));
    }

    #[test]
    fn cygnus_rounds_up() {
        // 12 * 0.66 = 7.92
        assert_eq!(required_scans(galaxy_def(GalaxyId::Cygnus)), 8);
    }
}
