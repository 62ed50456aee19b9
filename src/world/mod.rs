use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod biome;
pub mod config;
pub(crate) mod defaults;
pub mod generator;

use biome::Biome;
use generator::{Plate, RegionalFeature, River};

#[derive(Debug, Error)]
pub enum WorldGenError {
    #[error("invalid world dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: i32, height: i32 },
    #[error("feature density must be non-negative, got {0}")]
    InvalidFeatureDensity(f64),
}

/// The generated terrain product: five same-shaped per-tile fields.
///
/// Fields are stored flat in row-major order and are immutable once the
/// generation pipeline hands the grid off. Every tile carries exactly one
/// elevation, temperature, moisture, plate id, and biome.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldGrid {
    width: i32,
    height: i32,
    seed: u64,
    elevation: Vec<f64>,
    temperature: Vec<f64>,
    moisture: Vec<f64>,
    plate_id: Vec<i32>,
    biome: Vec<Biome>,
}

impl WorldGrid {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        width: i32,
        height: i32,
        seed: u64,
        elevation: Vec<f64>,
        temperature: Vec<f64>,
        moisture: Vec<f64>,
        plate_id: Vec<i32>,
        biome: Vec<Biome>,
    ) -> Self {
        let count = width as usize * height as usize;
        debug_assert!(elevation.len() == count);
        debug_assert!(temperature.len() == count);
        debug_assert!(moisture.len() == count);
        debug_assert!(plate_id.len() == count);
        debug_assert!(biome.len() == count);

        Self {
            width,
            height,
            seed,
            elevation,
            temperature,
            moisture,
            plate_id,
            biome,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    fn idx(&self, x: i32, y: i32) -> usize {
        debug_assert!(self.in_bounds(x, y), "tile ({x}, {y}) out of bounds");
        (y * self.width + x) as usize
    }

    pub fn elevation(&self, x: i32, y: i32) -> f64 {
        self.elevation[self.idx(x, y)]
    }

    /// Air temperature at the tile surface, in degrees Celsius.
    pub fn temperature(&self, x: i32, y: i32) -> f64 {
        self.temperature[self.idx(x, y)]
    }

    pub fn moisture(&self, x: i32, y: i32) -> f64 {
        self.moisture[self.idx(x, y)]
    }

    pub fn plate_id(&self, x: i32, y: i32) -> i32 {
        self.plate_id[self.idx(x, y)]
    }

    pub fn biome(&self, x: i32, y: i32) -> Biome {
        self.biome[self.idx(x, y)]
    }
}

/// Everything generation produces: the grid plus the plate, river, and
/// feature overlays. This is the hand-off container consumed by the
/// persistence layer and queried read-only by gameplay systems.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedWorld {
    grid: WorldGrid,
    plates: Vec<Plate>,
    rivers: Vec<River>,
    features: Vec<RegionalFeature>,
}

impl GeneratedWorld {
    pub(crate) fn new(
        grid: WorldGrid,
        plates: Vec<Plate>,
        rivers: Vec<River>,
        features: Vec<RegionalFeature>,
    ) -> Self {
        Self {
            grid,
            plates,
            rivers,
            features,
        }
    }

    pub fn grid(&self) -> &WorldGrid {
        &self.grid
    }

    pub fn plates(&self) -> &[Plate] {
        &self.plates
    }

    pub fn rivers(&self) -> &[River] {
        &self.rivers
    }

    pub fn features(&self) -> &[RegionalFeature] {
        &self.features
    }

    /// Tiles belonging to a plate, recomputed from the plate-id field.
    /// Membership is derived rather than stored so the grid stays the
    /// single source of truth.
    pub fn plate_tiles(&self, plate_id: i32) -> impl Iterator<Item = (i32, i32)> + '_ {
        let grid = &self.grid;
        (0..grid.height)
            .flat_map(move |y| (0..grid.width).map(move |x| (x, y)))
            .filter(move |&(x, y)| grid.plate_id(x, y) == plate_id)
    }
}
