use tracing::info;

use super::biome::Biome;
use super::config::WorldGenConfig;
use super::{GeneratedWorld, WorldGenError, WorldGrid};

mod climate;
mod features;
mod hydrology;
mod noise;
mod plates;
mod terrain;

pub use features::{FeatureKind, RegionalFeature};
pub use hydrology::{PathPoint, River};
pub use plates::{Plate, PlateKind};

use plates::PlateMap;

/// 4-connected neighborhood shared by uplift and river flow.
const CARDINALS: [(i32, i32); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

// Offsets deriving independent noise channels from the world seed.
const ELEVATION_CHANNEL: u64 = 1;
const MOISTURE_CHANNEL: u64 = 2;
const RIVER_JITTER_CHANNEL: u64 = 3;
const FEATURE_STREAM: u64 = 0x517c_c1b7_2722_0a95;

/// Logical phases of the generation pipeline, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GenPhase {
    Plates,
    Terrain,
    Climate,
    Biomes,
    Hydrology,
    Features,
    Finalize,
}

/// Callback for observing phase transitions, e.g. to drive a loading
/// indicator. A closure taking `GenPhase` implements it.
pub trait GenProgress {
    fn on_phase(&mut self, phase: GenPhase);
}

struct NoopProgress;

impl GenProgress for NoopProgress {
    fn on_phase(&mut self, _phase: GenPhase) {}
}

impl<F> GenProgress for F
where
    F: FnMut(GenPhase),
{
    fn on_phase(&mut self, phase: GenPhase) {
        self(phase);
    }
}

/// Runs the generation pipeline. Construction validates the
/// configuration; generation itself cannot fail, it only degrades
/// (fewer rivers or features than requested).
pub struct WorldGenerator {
    config: WorldGenConfig,
}

impl WorldGenerator {
    pub fn new(config: WorldGenConfig) -> Result<Self, WorldGenError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &WorldGenConfig {
        &self.config
    }

    pub fn generate(&self) -> GeneratedWorld {
        self.generate_with_progress(NoopProgress)
    }

    /// Executes the phases strictly in order: every later stage reads
    /// the outputs of earlier ones and nothing mutates a finished
    /// field. The sequential river pass is part of the determinism
    /// contract, since source order decides which tiles get claimed.
    pub fn generate_with_progress<P>(&self, mut progress: P) -> GeneratedWorld
    where
        P: GenProgress,
    {
        let config = &self.config;
        info!(
            "generating {}x{} world from seed {}",
            config.width, config.height, config.seed
        );

        progress.on_phase(GenPhase::Plates);
        let plate_map = PlateMap::generate(config);
        info!("simulated {} tectonic plates", plate_map.plates.len());

        progress.on_phase(GenPhase::Terrain);
        let elevation = terrain::build_elevation(config, &plate_map);

        progress.on_phase(GenPhase::Climate);
        let temperature = climate::build_temperature(config, &elevation);
        let moisture = climate::build_moisture(config, &elevation);

        progress.on_phase(GenPhase::Biomes);
        let biome: Vec<Biome> = (0..config.tile_count())
            .map(|idx| Biome::classify(elevation[idx], temperature[idx], moisture[idx]))
            .collect();

        progress.on_phase(GenPhase::Hydrology);
        let rivers = hydrology::carve_rivers(config, &elevation);
        info!("carved {} rivers", rivers.len());

        progress.on_phase(GenPhase::Features);
        let features = features::place_features(config, &elevation, &biome);
        info!("placed {} regional features", features.len());

        progress.on_phase(GenPhase::Finalize);
        let grid = WorldGrid::new(
            config.width,
            config.height,
            config.seed,
            elevation,
            temperature,
            moisture,
            plate_map.assignment,
            biome,
        );
        GeneratedWorld::new(grid, plate_map.plates, rivers, features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_fails_before_generation() {
        assert!(WorldGenerator::new(WorldGenConfig::new(1, 0, 10)).is_err());
        assert!(WorldGenerator::new(WorldGenConfig::new(1, 10, 10)).is_ok());
    }

    #[test]
    fn progress_reports_phases_in_pipeline_order() {
        let generator = WorldGenerator::new(WorldGenConfig::new(11, 32, 32)).unwrap();
        let mut phases = Vec::new();
        generator.generate_with_progress(|phase: GenPhase| phases.push(phase));
        assert_eq!(
            phases,
            vec![
                GenPhase::Plates,
                GenPhase::Terrain,
                GenPhase::Climate,
                GenPhase::Biomes,
                GenPhase::Hydrology,
                GenPhase::Features,
                GenPhase::Finalize,
            ]
        );
    }

    #[test]
    fn progress_callback_does_not_change_output() {
        let generator = WorldGenerator::new(WorldGenConfig::new(11, 32, 32)).unwrap();
        let silent = generator.generate();
        let observed = generator.generate_with_progress(|_phase: GenPhase| {});
        assert!(silent == observed);
    }
}
