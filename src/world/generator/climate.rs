use crate::world::config::WorldGenConfig;
use crate::world::defaults::climate::*;
use crate::world::defaults::OCEAN_THRESHOLD;

use super::noise::tile_noise;
use super::MOISTURE_CHANNEL;

/// Temperature in degrees Celsius from latitude and elevation lapse.
/// Deliberately unclamped: strongly negative values represent extreme
/// cold at high latitudes and altitudes.
pub(super) fn build_temperature(config: &WorldGenConfig, elevation: &[f64]) -> Vec<f64> {
    let width = config.width;
    let height = config.height;

    let mut temperature = vec![0.0_f64; config.tile_count()];
    for y in 0..height {
        let latitude = normalized_latitude(y, height);
        let base = EQUATOR_TEMP_C - latitude.abs() * LATITUDE_SWING_C;
        for x in 0..width {
            let idx = (y * width + x) as usize;
            temperature[idx] = base - elevation[idx] * LAPSE_C;
        }
    }

    temperature
}

/// Row latitude in `[-1, 1]`, zero at the vertical midpoint.
fn normalized_latitude(y: i32, height: i32) -> f64 {
    if height <= 1 {
        return 0.0;
    }
    y as f64 / (height - 1) as f64 * 2.0 - 1.0
}

/// Moisture from a low-frequency noise channel blended with proximity
/// to open water.
pub(super) fn build_moisture(config: &WorldGenConfig, elevation: &[f64]) -> Vec<f64> {
    let width = config.width;
    let height = config.height;
    let channel = config.seed.wrapping_add(MOISTURE_CHANNEL);

    let mut moisture = vec![0.0_f64; config.tile_count()];
    for y in 0..height {
        for x in 0..width {
            let idx = (y * width + x) as usize;
            // Integer division coarsens the channel into 4x4 patches,
            // the cheap low-frequency variant of the tile noise.
            let noise = tile_noise(channel, x / 4, y / 4);
            let proximity = water_proximity(x, y, elevation, width, height);
            moisture[idx] = MOISTURE_NOISE_WEIGHT * noise + WATER_PROXIMITY_WEIGHT * proximity;
        }
    }

    moisture
}

/// 1.0 on water tiles; otherwise falls off with Euclidean distance to
/// the nearest water tile inside the search radius, flooring at 0.1.
///
/// The scan is O(radius^2) per tile. A distance transform would be
/// cheaper on very large grids and must produce identical values if
/// substituted.
fn water_proximity(x: i32, y: i32, elevation: &[f64], width: i32, height: i32) -> f64 {
    let radius = WATER_SEARCH_RADIUS;
    if elevation[(y * width + x) as usize] < OCEAN_THRESHOLD {
        return 1.0;
    }

    let radius_sq = (radius * radius) as f64;
    let mut nearest_sq = f64::MAX;
    for dy in -radius..=radius {
        let ny = y + dy;
        if ny < 0 || ny >= height {
            continue;
        }
        for dx in -radius..=radius {
            let nx = x + dx;
            if nx < 0 || nx >= width {
                continue;
            }
            let dist_sq = (dx * dx + dy * dy) as f64;
            if dist_sq > radius_sq || dist_sq >= nearest_sq {
                continue;
            }
            if elevation[(ny * width + nx) as usize] < OCEAN_THRESHOLD {
                nearest_sq = dist_sq;
            }
        }
    }

    if nearest_sq == f64::MAX {
        return MIN_WATER_PROXIMITY;
    }
    (1.0 - nearest_sq.sqrt() / radius as f64).max(MIN_WATER_PROXIMITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latitude_is_zero_at_midpoint_and_unit_at_edges() {
        assert_eq!(normalized_latitude(0, 101), -1.0);
        assert_eq!(normalized_latitude(50, 101), 0.0);
        assert_eq!(normalized_latitude(100, 101), 1.0);
        assert_eq!(normalized_latitude(0, 1), 0.0);
    }

    #[test]
    fn temperature_follows_latitude_and_lapse() {
        let config = WorldGenConfig::new(0, 3, 5);
        let elevation = vec![0.0; 15];
        let temperature = build_temperature(&config, &elevation);
        // Equator row at sea level elevation: 25C exactly.
        assert_eq!(temperature[(2 * 3 + 1) as usize], 25.0);
        // Poles: 25 - 35 = -10C.
        assert_eq!(temperature[0], -10.0);
        assert_eq!(temperature[(4 * 3) as usize], -10.0);

        // A 0.5 elevation at the equator loses 30C to lapse.
        let mut raised = vec![0.0; 15];
        raised[(2 * 3 + 1) as usize] = 0.5;
        let temperature = build_temperature(&config, &raised);
        assert_eq!(temperature[(2 * 3 + 1) as usize], -5.0);
    }

    #[test]
    fn water_tiles_have_full_proximity() {
        let elevation = vec![0.1; 9];
        assert_eq!(water_proximity(1, 1, &elevation, 3, 3), 1.0);
    }

    #[test]
    fn dry_interior_floors_at_minimum() {
        let elevation = vec![0.5; 25 * 25];
        assert_eq!(water_proximity(12, 12, &elevation, 25, 25), 0.1);
    }

    #[test]
    fn proximity_decays_with_distance() {
        // Single water tile at the west edge of a 25-wide strip.
        let mut elevation = vec![0.5; 25];
        elevation[0] = 0.1;
        let near = water_proximity(1, 0, &elevation, 25, 1);
        let far = water_proximity(8, 0, &elevation, 25, 1);
        assert!((near - 0.9).abs() < 1e-12);
        assert!((far - 0.2).abs() < 1e-12);
        assert!(near > far);
        // Beyond the radius the floor applies.
        assert_eq!(water_proximity(20, 0, &elevation, 25, 1), 0.1);
    }

    #[test]
    fn moisture_stays_near_unit_interval() {
        let config = WorldGenConfig::new(42, 64, 64);
        let elevation = vec![0.5; config.tile_count()];
        for value in build_moisture(&config, &elevation) {
            assert!(value >= 0.0 && value <= 1.0, "moisture {value}");
        }
    }
}
