use crate::world::config::WorldGenConfig;
use crate::world::defaults::terrain::*;

use super::noise::tile_noise;
use super::plates::PlateMap;
use super::{CARDINALS, ELEVATION_CHANNEL};

/// Builds the clamped `[0, 1]` elevation field: plate base height,
/// three layered noise octaves, then boundary collision uplift.
///
/// Layered noise alone gives plausible micro-terrain but no continents;
/// the plate base plus uplift at convergent boundaries supplies the
/// macro-structure without a full plate-dynamics simulation.
pub(super) fn build_elevation(config: &WorldGenConfig, plates: &PlateMap) -> Vec<f64> {
    let width = config.width;
    let height = config.height;
    let channel = config.seed.wrapping_add(ELEVATION_CHANNEL);

    let mut elevation = vec![0.0_f64; config.tile_count()];
    for y in 0..height {
        for x in 0..width {
            let idx = (y * width + x) as usize;
            let plate = plates.plate_at(idx);

            let mut layered = 0.0;
            for (freq, weight) in OCTAVE_FREQUENCIES.into_iter().zip(OCTAVE_WEIGHTS) {
                layered += tile_noise(channel, x * freq, y * freq) * weight;
            }

            let base = plate.kind.base_elevation();
            let uplift = collision_uplift(x, y, idx, plates, width, height);
            let value = (BASE_WEIGHT * base + NOISE_WEIGHT * layered + uplift).clamp(0.0, 1.0);
            debug_assert!((0.0..=1.0).contains(&value));
            elevation[idx] = value;
        }
    }

    elevation
}

/// Uplift where this tile's plate converges on a neighboring plate.
///
/// A plate "collides" with a neighbor when its drift points toward the
/// neighbor plate's center from the tile under evaluation. The maximum
/// contribution across the four directions is used, not the sum, so a
/// corner tile bordering several colliding plates is not overshot.
fn collision_uplift(
    x: i32,
    y: i32,
    idx: usize,
    plates: &PlateMap,
    width: i32,
    height: i32,
) -> f64 {
    let plate = plates.plate_at(idx);
    let mut best = 0.0_f64;

    for (dx, dy) in CARDINALS {
        let nx = x + dx;
        let ny = y + dy;
        if nx < 0 || nx >= width || ny < 0 || ny >= height {
            continue;
        }
        let other = plates.plate_at((ny * width + nx) as usize);
        if other.id == plate.id {
            continue;
        }

        let toward_x = (other.center_x - x) as f64;
        let toward_y = (other.center_y - y) as f64;
        if plate.drift_x * toward_x + plate.drift_y * toward_y <= 0.0 {
            continue;
        }

        let rel_x = plate.drift_x - other.drift_x;
        let rel_y = plate.drift_y - other.drift_y;
        let intensity = (rel_x * rel_x + rel_y * rel_y) / 4.0;
        let contribution = (intensity * UPLIFT_SCALE).min(MAX_COLLISION_UPLIFT);
        if contribution > best {
            best = contribution;
        }
    }

    best
}
