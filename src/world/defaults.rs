pub mod core {
    pub const SEED: u64 = 0;
    pub const WIDTH: i32 = 256;
    pub const HEIGHT: i32 = 256;
}
pub mod ocean {
    pub const OCEAN_THRESHOLD: f64 = 0.2;
}
pub mod plates {
    pub const TILES_PER_PLATE: i64 = 10_000;
    pub const MIN_PLATE_COUNT: i64 = 4;
    pub const CONTINENTAL_CHANCE: f64 = 0.7;
}
pub mod terrain {
    pub const OCTAVE_FREQUENCIES: [i32; 3] = [1, 2, 4];
    pub const OCTAVE_WEIGHTS: [f64; 3] = [0.6, 0.3, 0.1];
    pub const BASE_WEIGHT: f64 = 0.7;
    pub const NOISE_WEIGHT: f64 = 0.3;
    pub const UPLIFT_SCALE: f64 = 0.3;
    pub const MAX_COLLISION_UPLIFT: f64 = 0.3;
}
pub mod climate {
    pub const EQUATOR_TEMP_C: f64 = 25.0;
    pub const LATITUDE_SWING_C: f64 = 35.0;
    pub const LAPSE_C: f64 = 60.0;
    pub const MOISTURE_NOISE_WEIGHT: f64 = 0.6;
    pub const WATER_PROXIMITY_WEIGHT: f64 = 0.4;
    pub const WATER_SEARCH_RADIUS: i32 = 10;
    pub const MIN_WATER_PROXIMITY: f64 = 0.1;
}
pub mod hydrology {
    pub const SOURCE_MIN_ELEVATION: f64 = 0.6;
    pub const SOURCE_MAX_ELEVATION: f64 = 0.95;
    pub const DOWNHILL_TOLERANCE: f64 = 0.001;
    pub const PRIORITY_JITTER: f64 = 0.0001;
    pub const MIN_RIVER_LENGTH: usize = 5;
    pub const RIVER_TILES_PER_TARGET: i64 = 2_500;
    pub const MIN_RIVER_TARGET: i64 = 4;
}
pub mod features {
    pub const TILES_PER_FEATURE: i64 = 5_000;
    pub const MIN_FEATURE_TARGET: i64 = 3;
    pub const MIN_SEPARATION: f64 = 10.0;
    pub const ATTEMPTS_PER_TARGET: usize = 10;
    pub const INTENSITY_FLOOR: f64 = 0.3;
    pub const INTENSITY_RANGE: f64 = 0.7;
}
pub use self::climate::*;
pub use self::core::*;
pub use self::features::*;
pub use self::hydrology::*;
pub use self::ocean::*;
pub use self::plates::*;
pub use self::terrain::*;
