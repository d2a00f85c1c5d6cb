//! Fundamental geometric and simulation types.
//!
//! World space: x = right, y = up, z = forward. Gameplay happens on the
//! x/z plane; planar vectors are `DVec2` holding (x, z). A yaw angle `a`
//! faces along `(sin a, cos a)`.

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Frames advanced so far.
    pub frame: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one frame of `delta` seconds.
    pub fn advance(&mut self, delta: f64) {
        self.frame += 1;
        self.elapsed_secs += delta;
    }
}

/// Render hints carried onto each projectile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileVisuals {
    /// 0xRRGGBB.
    pub color: u32,
    pub mesh_scale: f64,
}

/// Planar unit vector for a yaw angle.
pub fn forward(angle: f64) -> DVec2 {
    DVec2::new(angle.sin(), angle.cos())
}

/// Yaw angle of a planar direction. Inverse of [`forward`].
pub fn yaw_of(direction: DVec2) -> f64 {
    direction.x.atan2(direction.y)
}

/// Rotate a player-local offset into world space by the player's yaw.
/// Local +z is the facing direction, local +x is to the right of it.
pub fn rotate_local(offset: DVec3, yaw: f64) -> DVec3 {
    let (sin, cos) = yaw.sin_cos();
    DVec3::new(
        offset.x * cos + offset.z * sin,
        offset.y,
        -offset.x * sin + offset.z * cos,
    )
}
