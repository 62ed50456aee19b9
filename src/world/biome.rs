use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Biome {
    Ocean,
    Lake,
    Volcanic,
    Mountain,
    Hills,
    Tundra,
    Taiga,
    Desert,
    Jungle,
    Savanna,
    Swamp,
    Forest,
    Grassland,
}

impl Biome {
    /// Classifies a tile from its three scalar fields.
    ///
    /// Rule order is authoritative: several rules can match the same
    /// triple (a hot, wet highland satisfies both the volcanic clause
    /// and the jungle band) and only the first match counts. Reordering
    /// these checks changes generated worlds.
    pub fn classify(elevation: f64, temperature: f64, moisture: f64) -> Biome {
        if elevation < 0.15 {
            return Biome::Ocean;
        }
        if elevation < 0.2 {
            return Biome::Lake;
        }
        if elevation > 0.8 {
            return if temperature > 25.0 && moisture > 0.6 {
                Biome::Volcanic
            } else {
                Biome::Mountain
            };
        }
        if elevation > 0.6 {
            return if temperature > 25.0 && moisture > 0.6 {
                Biome::Volcanic
            } else {
                Biome::Hills
            };
        }
        if temperature < 0.0 {
            return Biome::Tundra;
        }
        if temperature < 10.0 {
            return Biome::Taiga;
        }
        if temperature > 25.0 && moisture < 0.3 {
            return Biome::Desert;
        }
        if temperature > 22.0 {
            return if moisture > 0.7 {
                Biome::Jungle
            } else {
                Biome::Savanna
            };
        }
        if moisture > 0.8 {
            return Biome::Swamp;
        }
        if moisture > 0.6 {
            return Biome::Forest;
        }
        Biome::Grassland
    }

    pub fn is_water(self) -> bool {
        matches!(self, Biome::Ocean | Biome::Lake)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_table() {
        let cases = [
            ((0.1, 10.0, 0.5), Biome::Ocean),
            ((0.17, 10.0, 0.5), Biome::Lake),
            ((0.9, 30.0, 0.8), Biome::Volcanic),
            ((0.9, 30.0, 0.4), Biome::Mountain),
            ((0.7, 5.0, 0.5), Biome::Hills),
            ((0.3, -5.0, 0.4), Biome::Tundra),
            ((0.3, 5.0, 0.4), Biome::Taiga),
            ((0.4, 30.0, 0.1), Biome::Desert),
            ((0.4, 24.0, 0.9), Biome::Jungle),
            ((0.4, 24.0, 0.5), Biome::Savanna),
            ((0.4, 15.0, 0.9), Biome::Swamp),
            ((0.4, 15.0, 0.7), Biome::Forest),
            ((0.4, 15.0, 0.5), Biome::Grassland),
        ];

        for ((elevation, temperature, moisture), expected) in cases {
            assert_eq!(
                Biome::classify(elevation, temperature, moisture),
                expected,
                "({elevation}, {temperature}, {moisture})"
            );
        }
    }

    #[test]
    fn elevation_outranks_climate() {
        // A hot dry highland is Hills, never Desert: the elevation tiers
        // are checked before any temperature band.
        assert_eq!(Biome::classify(0.7, 30.0, 0.1), Biome::Hills);
        // A freezing peak is Mountain, never Tundra.
        assert_eq!(Biome::classify(0.85, -20.0, 0.5), Biome::Mountain);
    }

    #[test]
    fn volcanic_needs_both_heat_and_moisture() {
        assert_eq!(Biome::classify(0.85, 30.0, 0.6), Biome::Mountain);
        assert_eq!(Biome::classify(0.85, 25.0, 0.8), Biome::Mountain);
        assert_eq!(Biome::classify(0.65, 26.0, 0.65), Biome::Volcanic);
    }

    #[test]
    fn water_tags_are_water() {
        assert!(Biome::Ocean.is_water());
        assert!(Biome::Lake.is_water());
        assert!(!Biome::Swamp.is_water());
    }
}
