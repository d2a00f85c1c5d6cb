//! Spawn geometry for each projectile pattern.
//!
//! A handler turns one weapon discharge into a list of muzzle placements
//! (spawn position + planar direction). Projectile stats are filled in by the
//! caller; handlers only decide where shots appear and where they go.

use glam::{DVec2, DVec3};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use starwake_core::constants::{PROJECTILE_SPAWN_HEIGHT, PROJECTILE_SPAWN_OFFSET};
use starwake_core::registry::ProjectilePattern;
use starwake_core::types::{forward, rotate_local};

/// Where one projectile appears and which way it travels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Muzzle {
    pub position: DVec3,
    pub direction: DVec2,
}

/// Player state a discharge is resolved against.
#[derive(Debug, Clone, Copy)]
pub struct FireOrigin {
    pub position: DVec3,
    /// Ship yaw, used for player-local offsets.
    pub rotation: f64,
    /// Aim yaw. Equals `rotation` unless an aim direction was supplied.
    pub fire_angle: f64,
}

/// Resolve one discharge of `pattern` into muzzle placements, appended to `out`.
pub fn emit(
    pattern: &ProjectilePattern,
    origin: &FireOrigin,
    orbital_angle: Option<f64>,
    rng: &mut ChaCha8Rng,
    out: &mut Vec<Muzzle>,
) {
    match *pattern {
        ProjectilePattern::Default => {
            out.push(ahead(origin.position, origin.fire_angle));
        }
        // Pierce count is attached by the caller.
        ProjectilePattern::Piercing { .. } => {
            out.push(ahead(origin.position, origin.fire_angle));
        }
        // Blast radius is attached by the caller.
        ProjectilePattern::Explosive { .. } => {
            out.push(ahead(origin.position, origin.fire_angle));
        }
        ProjectilePattern::Spread { angle } => {
            for offset in [-angle, 0.0, angle] {
                out.push(ahead(origin.position, origin.fire_angle + offset));
            }
        }
        ProjectilePattern::Pellet { count, spread } => {
            for _ in 0..count {
                let jitter = rng.gen_range(-spread..=spread);
                out.push(ahead(origin.position, origin.fire_angle + jitter));
            }
        }
        ProjectilePattern::Orbital { radius, .. } => {
            let angle = orbital_angle.unwrap_or(0.0);
            let direction = forward(angle);
            let rim = DVec2::new(origin.position.x, origin.position.z) + direction * radius;
            out.push(Muzzle {
                position: DVec3::new(rim.x, PROJECTILE_SPAWN_HEIGHT, rim.y),
                direction,
            });
        }
        ProjectilePattern::Drone { follow_offset } => {
            out.push(Muzzle {
                position: origin.position + rotate_local(follow_offset, origin.rotation),
                direction: forward(origin.fire_angle),
            });
        }
        ProjectilePattern::Aura => {}
    }
}

/// Muzzle in front of the ship along `angle`.
fn ahead(position: DVec3, angle: f64) -> Muzzle {
    let direction = forward(angle);
    let tip = DVec2::new(position.x, position.z) + direction * PROJECTILE_SPAWN_OFFSET;
    Muzzle {
        position: DVec3::new(tip.x, PROJECTILE_SPAWN_HEIGHT, tip.y),
        direction,
    }
}
