use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::world::biome::Biome;
use crate::world::config::WorldGenConfig;
use crate::world::defaults::features::*;

use super::FEATURE_STREAM;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum FeatureKind {
    Volcano,
    MagicZone,
    SubmergedCity,
    AncientRuins,
    CrystalCave,
}

impl FeatureKind {
    pub const ALL: [FeatureKind; 5] = [
        FeatureKind::Volcano,
        FeatureKind::MagicZone,
        FeatureKind::SubmergedCity,
        FeatureKind::AncientRuins,
        FeatureKind::CrystalCave,
    ];

    /// Relative spawn weight; a kind contributes `rarity * 100` copies
    /// to the sampling bag.
    pub fn rarity(self) -> f64 {
        match self {
            FeatureKind::Volcano => 0.15,
            FeatureKind::MagicZone => 0.25,
            FeatureKind::SubmergedCity => 0.10,
            FeatureKind::AncientRuins => 0.30,
            FeatureKind::CrystalCave => 0.20,
        }
    }

    /// Elevation band the kind naturally occupies.
    pub fn elevation_band(self) -> (f64, f64) {
        match self {
            FeatureKind::Volcano => (0.5, 1.0),
            FeatureKind::MagicZone => (0.0, 1.0),
            FeatureKind::SubmergedCity => (0.0, 0.15),
            FeatureKind::AncientRuins => (0.2, 0.8),
            FeatureKind::CrystalCave => (0.6, 1.0),
        }
    }

    /// Whether a tile's terrain can host this kind.
    pub fn compatible(self, elevation: f64, biome: Biome) -> bool {
        match self {
            FeatureKind::Volcano => !biome.is_water() && elevation > 0.5,
            FeatureKind::MagicZone => true,
            FeatureKind::SubmergedCity => biome == Biome::Ocean,
            FeatureKind::AncientRuins => {
                !biome.is_water() && elevation >= 0.2 && elevation < 0.8
            }
            FeatureKind::CrystalCave => {
                matches!(biome, Biome::Mountain | Biome::Hills) || elevation > 0.6
            }
        }
    }
}

/// A rare point landmark layered on top of the terrain grid.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionalFeature {
    pub id: i32,
    pub kind: FeatureKind,
    pub x: i32,
    pub y: i32,
    /// Magnitude in `[0.3, 1.0]`.
    pub intensity: f64,
}

/// Scatters features by rejection sampling: random tile, separation
/// check, rarity-weighted kind draw, compatibility check. The attempt
/// budget bounds the loop; falling short of the target is normal on
/// crowded or hostile terrain, not an error.
pub(super) fn place_features(
    config: &WorldGenConfig,
    elevation: &[f64],
    biomes: &[Biome],
) -> Vec<RegionalFeature> {
    let width = config.width;
    let height = config.height;
    let tiles = width as i64 * height as i64;
    let target = ((tiles / TILES_PER_FEATURE).max(MIN_FEATURE_TARGET) as f64
        * config.feature_density)
        .round() as usize;

    let mut bag = Vec::new();
    for kind in FeatureKind::ALL {
        let copies = (kind.rarity() * 100.0).round() as usize;
        bag.extend(std::iter::repeat(kind).take(copies));
    }

    let separation_sq = config.feature_separation * config.feature_separation;
    let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(FEATURE_STREAM));
    let mut placed: Vec<RegionalFeature> = Vec::new();

    for _ in 0..target * ATTEMPTS_PER_TARGET {
        if placed.len() >= target {
            break;
        }

        let x = rng.gen_range(0..width);
        let y = rng.gen_range(0..height);
        let too_close = placed.iter().any(|feature| {
            let dx = (feature.x - x) as f64;
            let dy = (feature.y - y) as f64;
            dx * dx + dy * dy < separation_sq
        });
        if too_close {
            continue;
        }

        let kind = bag[rng.gen_range(0..bag.len())];
        let idx = (y * width + x) as usize;
        if !kind.compatible(elevation[idx], biomes[idx]) {
            continue;
        }

        placed.push(RegionalFeature {
            id: placed.len() as i32,
            kind,
            x,
            y,
            intensity: INTENSITY_FLOOR + rng.gen::<f64>() * INTENSITY_RANGE,
        });
    }

    debug!("placed {} of {} requested features", placed.len(), target);
    placed
}
