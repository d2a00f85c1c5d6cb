//! Planet placement by rejection sampling.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::warn;

use starwake_core::components::Planet;
use starwake_core::constants::*;

/// Half-width of the square planets may be placed in.
pub fn placement_extent() -> f64 {
    PLAY_AREA_SIZE / 2.0 - PLANET_PLACEMENT_MARGIN
}

/// Whether `(x, z)` keeps clear of the origin and of every placed planet.
pub fn is_clear(x: f64, z: f64, placed: &[Planet]) -> bool {
    let from_center_sq = x * x + z * z;
    if from_center_sq < PLANET_MIN_DISTANCE_FROM_CENTER * PLANET_MIN_DISTANCE_FROM_CENTER {
        return false;
    }
    let min_between_sq = PLANET_MIN_DISTANCE_BETWEEN * PLANET_MIN_DISTANCE_BETWEEN;
    placed.iter().all(|p| {
        let dx = p.x - x;
        let dz = p.z - z;
        dx * dx + dz * dz >= min_between_sq
    })
}

/// Sample a planet position. After the retry budget is spent the last sample
/// is accepted even if it violates spacing.
pub fn sample_position(placed: &[Planet], rng: &mut ChaCha8Rng) -> (f64, f64) {
    let extent = placement_extent();
    let mut candidate = (0.0, 0.0);
    for _ in 0..PLANET_PLACEMENT_MAX_ATTEMPTS {
        candidate = (
            rng.gen_range(-extent..=extent),
            rng.gen_range(-extent..=extent),
        );
        if is_clear(candidate.0, candidate.1, placed) {
            return candidate;
        }
    }
    warn!(
        attempts = PLANET_PLACEMENT_MAX_ATTEMPTS,
        x = candidate.0,
        z = candidate.1,
        placed = placed.len(),
        "planet placement retries exhausted, accepting last sample"
    );
    candidate
}
