//! Error types for the collaborator boundary.
//!
//! Engine commands never fail; invalid commands are no-ops. Errors only arise
//! when untyped input (console strings, save files) is turned into core types.

use thiserror::Error;

/// Result type alias using [`StarwakeError`].
pub type Result<T> = std::result::Result<T, StarwakeError>;

#[derive(Debug, Error)]
pub enum StarwakeError {
    #[error("unknown weapon id: {0}")]
    UnknownWeapon(String),

    #[error("unknown boon id: {0}")]
    UnknownBoon(String),

    #[error("unknown planet type: {0}")]
    UnknownPlanetType(String),

    #[error("unknown galaxy id: {0}")]
    UnknownGalaxy(String),

    /// Save written by a different snapshot format.
    #[error("unsupported snapshot version {found} (expected {expected})")]
    SnapshotVersion { found: u32, expected: u32 },

    #[error("malformed snapshot: {0}")]
    SnapshotFormat(#[from] serde_json::Error),
}
