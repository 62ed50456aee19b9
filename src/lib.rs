//! Deterministic procedural planet generation.
//!
//! A single integer seed expands into a complete world grid: tectonic
//! plates, elevation, temperature, moisture, biomes, carved river
//! networks, and rare regional landmarks. Identical inputs always yield
//! bit-identical worlds; every stochastic decision flows through pure
//! seed-mixed noise or an explicitly derived RNG stream.

pub mod world;

pub use world::biome::Biome;
pub use world::config::WorldGenConfig;
pub use world::generator::{
    FeatureKind, GenPhase, GenProgress, PathPoint, Plate, PlateKind, RegionalFeature, River,
    WorldGenerator,
};
pub use world::{GeneratedWorld, WorldGenError, WorldGrid};
