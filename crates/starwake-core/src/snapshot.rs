//! Versioned run snapshot stored by the external persistence layer.

use serde::{Deserialize, Serialize};

use crate::constants::SNAPSHOT_VERSION;
use crate::enums::{BoonId, WeaponId};
use crate::error::{Result, StarwakeError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedWeapon {
    pub id: WeaponId,
    pub level: u32,
}

/// Minimal state needed to resume a run between systems.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSnapshot {
    pub version: u32,
    pub weapons: Vec<SavedWeapon>,
    pub boons: Vec<BoonId>,
    pub current_system: u32,
    pub hp: f64,
    pub fragments: u64,
}

impl RunSnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a snapshot, rejecting any version other than the current one.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: RunSnapshot = serde_json::from_str(json)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(StarwakeError::SnapshotVersion {
                found: snapshot.version,
                expected: SNAPSHOT_VERSION,
            });
        }
        Ok(snapshot)
    }
}
