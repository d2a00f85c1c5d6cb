//! Signals emitted by the simulation for the reward layer and UI.

use serde::{Deserialize, Serialize};

use crate::components::PlanetId;

/// Result of one scanning tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ScanStatus {
    /// No planet in range and nothing being scanned.
    #[default]
    Idle,
    /// A scan is in progress.
    Scanning {
        planet_id: PlanetId,
        progress: f64,
    },
    /// A scan finished this tick. The reward layer grants a reward of `tier`.
    Completed { planet_id: PlanetId, tier: u32 },
}

impl ScanStatus {
    pub fn completed(&self) -> bool {
        matches!(self, ScanStatus::Completed { .. })
    }

    /// Planet currently being scanned, if any.
    pub fn active_scan_planet_id(&self) -> Option<PlanetId> {
        match self {
            ScanStatus::Scanning { planet_id, .. } => Some(*planet_id),
            _ => None,
        }
    }

    pub fn scan_progress(&self) -> f64 {
        match self {
            ScanStatus::Idle => 0.0,
            ScanStatus::Scanning { progress, .. } => *progress,
            ScanStatus::Completed { .. } => 1.0,
        }
    }
}
