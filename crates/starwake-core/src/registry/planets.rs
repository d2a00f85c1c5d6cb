//! Planet archetype definitions.

use crate::enums::PlanetType;

#[derive(Debug, Clone, PartialEq)]
pub struct PlanetDef {
    pub type_id: PlanetType,
    /// Reward tier granted on scan completion.
    pub tier: u32,
    /// Seconds of uninterrupted presence needed to complete a scan.
    pub scan_time: f64,
    /// Player must be within this planar distance of the planet center.
    pub scan_radius: f64,
    pub color: u32,
    pub scale: f64,
    pub model_key: &'static str,
}

/// Look up a planet definition.
pub fn planet_def(type_id: PlanetType) -> &'static PlanetDef {
    match type_id {
        PlanetType::Barren => &BARREN,
        PlanetType::Oceanic => &OCEANIC,
        PlanetType::Volcanic => &VOLCANIC,
        PlanetType::GasGiant => &GAS_GIANT,
        PlanetType::Crystalline => &CRYSTALLINE,
    }
}

static BARREN: PlanetDef = PlanetDef {
    type_id: PlanetType::Barren,
    tier: 1,
    scan_time: 5.0,
    scan_radius: 8.0,
    color: 0x9e9e9e,
    scale: 1.0,
    model_key: "planet_barren",
};

static OCEANIC: PlanetDef = PlanetDef {
    type_id: PlanetType::Oceanic,
    tier: 1,
    scan_time: 7.0,
    scan_radius: 10.0,
    color: 0x2979ff,
    scale: 1.3,
    model_key: "planet_oceanic",
};

static VOLCANIC: PlanetDef = PlanetDef {
    type_id: PlanetType::Volcanic,
    tier: 2,
    scan_time: 8.0,
    scan_radius: 10.0,
    color: 0xff3d00,
    scale: 1.2,
    model_key: "planet_volcanic",
};

static GAS_GIANT: PlanetDef = PlanetDef {
    type_id: PlanetType::GasGiant,
    tier: 2,
    scan_time: 12.0,
    scan_radius: 14.0,
    color: 0xffb74d,
    scale: 2.2,
    model_key: "planet_gas_giant",
};

static CRYSTALLINE: PlanetDef = PlanetDef {
    type_id: PlanetType::Crystalline,
    tier: 3,
    scan_time: 15.0,
    scan_radius: 12.0,
    color: 0xea80fc,
    scale: 1.1,
    model_key: "planet_crystalline",
};
