use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::world::config::WorldGenConfig;
use crate::world::defaults;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlateKind {
    Oceanic,
    Continental,
}

impl PlateKind {
    /// Base elevation contributed before noise and uplift.
    pub fn base_elevation(self) -> f64 {
        match self {
            PlateKind::Continental => 0.5,
            PlateKind::Oceanic => 0.15,
        }
    }
}

/// A tectonic plate. Tile membership is not stored here; it is derived
/// from the grid's plate-id field.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plate {
    pub id: i32,
    pub center_x: i32,
    pub center_y: i32,
    pub drift_x: f64,
    pub drift_y: f64,
    pub kind: PlateKind,
}

#[derive(Clone)]
pub(super) struct PlateMap {
    pub(super) plates: Vec<Plate>,
    /// Row-major plate id per tile.
    pub(super) assignment: Vec<i32>,
}

impl PlateMap {
    pub(super) fn generate(config: &WorldGenConfig) -> Self {
        let width = config.width;
        let height = config.height;
        let tiles = width as i64 * height as i64;
        let plate_count =
            (tiles / defaults::TILES_PER_PLATE).max(defaults::MIN_PLATE_COUNT) as i32;

        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut plates = Vec::with_capacity(plate_count as usize);
        for id in 0..plate_count {
            let center_x = rng.gen_range(0..width);
            let center_y = rng.gen_range(0..height);
            let drift_x = rng.gen_range(-0.5..0.5);
            let drift_y = rng.gen_range(-0.5..0.5);
            let kind = if rng.gen::<f64>() < defaults::CONTINENTAL_CHANCE {
                PlateKind::Continental
            } else {
                PlateKind::Oceanic
            };
            plates.push(Plate {
                id,
                center_x,
                center_y,
                drift_x,
                drift_y,
                kind,
            });
        }

        let mut assignment = vec![0_i32; tiles as usize];
        for y in 0..height {
            for x in 0..width {
                assignment[(y * width + x) as usize] = nearest_plate(x, y, &plates);
            }
        }

        Self { plates, assignment }
    }

    pub(super) fn plate_at(&self, idx: usize) -> &Plate {
        &self.plates[self.assignment[idx] as usize]
    }
}

/// Squared-distance Voronoi assignment; the strict comparison keeps
/// ties on the lowest plate index.
fn nearest_plate(x: i32, y: i32, plates: &[Plate]) -> i32 {
    let mut best = 0;
    let mut best_dist = i64::MAX;
    for plate in plates {
        let dx = (x - plate.center_x) as i64;
        let dy = (y - plate.center_y) as i64;
        let dist = dx * dx + dy * dy;
        if dist < best_dist {
            best_dist = dist;
            best = plate.id;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plate_count_floors_at_four() {
        let map = PlateMap::generate(&WorldGenConfig::new(42, 64, 64));
        assert_eq!(map.plates.len(), 4);
    }

    #[test]
    fn plate_count_scales_with_area() {
        let map = PlateMap::generate(&WorldGenConfig::new(42, 500, 400));
        assert_eq!(map.plates.len(), 20);
    }

    #[test]
    fn every_tile_assigned_in_range() {
        let config = WorldGenConfig::new(7, 48, 32);
        let map = PlateMap::generate(&config);
        assert_eq!(map.assignment.len(), config.tile_count());
        for &id in &map.assignment {
            assert!(id >= 0 && (id as usize) < map.plates.len());
        }
    }

    #[test]
    fn centers_in_bounds_and_drift_bounded() {
        let config = WorldGenConfig::new(99, 200, 120);
        let map = PlateMap::generate(&config);
        for plate in &map.plates {
            assert!(plate.center_x >= 0 && plate.center_x < config.width);
            assert!(plate.center_y >= 0 && plate.center_y < config.height);
            assert!(plate.drift_x.abs() <= 0.5);
            assert!(plate.drift_y.abs() <= 0.5);
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let config = WorldGenConfig::new(1234, 100, 100);
        let a = PlateMap::generate(&config);
        let b = PlateMap::generate(&config);
        assert_eq!(a.plates, b.plates);
        assert_eq!(a.assignment, b.assignment);
    }

    #[test]
    fn ties_go_to_lowest_index() {
        let plates = vec![
            Plate {
                id: 0,
                center_x: 0,
                center_y: 0,
                drift_x: 0.0,
                drift_y: 0.0,
                kind: PlateKind::Continental,
            },
            Plate {
                id: 1,
                center_x: 4,
                center_y: 0,
                drift_x: 0.0,
                drift_y: 0.0,
                kind: PlateKind::Continental,
            },
        ];
        // (2, 0) is equidistant from both centers.
        assert_eq!(nearest_plate(2, 0, &plates), 0);
    }
}
