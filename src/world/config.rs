use serde::{Deserialize, Serialize};

use super::defaults;
use super::WorldGenError;

/// Generation inputs. Seed and dimensions fully determine the world;
/// the remaining knobs are tuning parameters passed in by the caller,
/// never read from the environment or disk.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldGenConfig {
    pub seed: u64,
    pub width: i32,
    pub height: i32,
    /// Number of rivers the carver aims for; fewer may survive when
    /// sources run dry or searches exhaust their budget.
    pub river_target: u32,
    /// Multiplier on the baseline regional feature count.
    pub feature_density: f64,
    /// Minimum Euclidean distance between placed features, in tiles.
    pub feature_separation: f64,
}

impl Default for WorldGenConfig {
    fn default() -> Self {
        use defaults::core::*;
        Self::new(SEED, WIDTH, HEIGHT)
    }
}

impl WorldGenConfig {
    pub fn new(seed: u64, width: i32, height: i32) -> Self {
        let tiles = width.max(0) as i64 * height.max(0) as i64;
        let river_target = (tiles / defaults::RIVER_TILES_PER_TARGET)
            .max(defaults::MIN_RIVER_TARGET) as u32;

        Self {
            seed,
            width,
            height,
            river_target,
            feature_density: 1.0,
            feature_separation: defaults::MIN_SEPARATION,
        }
    }

    pub fn validate(&self) -> Result<(), WorldGenError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(WorldGenError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.feature_density < 0.0 {
            return Err(WorldGenError::InvalidFeatureDensity(self.feature_density));
        }
        Ok(())
    }

    pub(crate) fn tile_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
