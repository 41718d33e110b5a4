mod seed;

pub use self::seed::Seed;

use crate::TerrainKind;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Configuration that defines a skirmish map. Two maps generated with the
/// same config will always be identical, down to which hexes the units land
/// on and which way they face.
#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct MapConfig {
    /// RNG seed to use for all randomized processes: terrain, unit placement
    /// and unit facing. See [Seed] for the accepted formats.
    pub seed: Seed,

    /// Distance from the center of the map to the edge (in hexes). 0 means a
    /// single hex, 1 is 7 hexes, etc.
    #[validate(range(min = 0, max = 1000))]
    pub radius: u16,

    /// Number of units to place on the map after terrain generation. This
    /// can't exceed the number of hexes on the map, but that's checked at
    /// generation time since it depends on `radius`.
    #[validate(range(min = 0, max = 1000))]
    pub units: u16,

    /// Config for how terrain is randomly assigned to each hex
    #[validate]
    pub terrain: TerrainConfig,
}

/// Configuration for terrain generation. All weights are relative, i.e.
/// `[3, 1]` and `[75, 25]` mean the same thing.
#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TerrainConfig {
    /// Weights for the elevation of non-water hexes. The weight at index `i`
    /// is the likelihood of elevation `i`.
    #[validate(custom = "validate_weights")]
    pub elevation_weights: Vec<u32>,

    /// Weights for the depth of water hexes. The weight at index `i` is the
    /// likelihood of depth `i` (height `-i`).
    #[validate(custom = "validate_weights")]
    pub depth_weights: Vec<u32>,

    /// Relative likelihood of each terrain kind. Must stay the last field,
    /// TOML can't have plain values after a table.
    #[validate]
    pub kind_weights: TerrainKindWeights,
}

/// Relative likelihood of each generated terrain kind. Units are placed
/// separately, so [TerrainKind::Mech] has no weight here.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_kind_weights"))]
pub struct TerrainKindWeights {
    pub ground: u32,
    pub light_woods: u32,
    pub heavy_woods: u32,
    pub rubble: u32,
    pub water: u32,
}

impl TerrainKindWeights {
    /// Pair each kind with its weight. The order here determines how the
    /// `[0, 1)` range gets sliced up during generation, so don't shuffle it.
    pub fn as_list(&self) -> [(TerrainKind, u32); 5] {
        [
            (TerrainKind::Ground, self.ground),
            (TerrainKind::LightWoods, self.light_woods),
            (TerrainKind::HeavyWoods, self.heavy_woods),
            (TerrainKind::Rubble, self.rubble),
            (TerrainKind::Water, self.water),
        ]
    }
}

/// A weight list needs at least one non-zero weight, otherwise there's nothing
/// to pick from. The total also has to fit in a `u32`.
fn validate_weights(weights: &[u32]) -> Result<(), ValidationError> {
    let total: u64 = weights.iter().copied().map(u64::from).sum();
    if total == 0 {
        Err(ValidationError::new("weights_all_zero"))
    } else if total > u64::from(u32::MAX) {
        Err(ValidationError::new("weights_overflow"))
    } else {
        Ok(())
    }
}

fn validate_kind_weights(
    weights: &TerrainKindWeights,
) -> Result<(), ValidationError> {
    let list: Vec<u32> =
        weights.as_list().iter().map(|(_, weight)| *weight).collect();
    validate_weights(&list)
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            // Danger! This means the default will vary between calls!
            seed: rand::random::<u64>().into(),
            radius: 5,
            units: 2,
            terrain: TerrainConfig::default(),
        }
    }
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            elevation_weights: vec![40, 30, 15, 10, 3, 2],
            depth_weights: vec![60, 30, 7, 3],
            kind_weights: TerrainKindWeights::default(),
        }
    }
}

impl Default for TerrainKindWeights {
    fn default() -> Self {
        // Mostly open ground, with a fifth of the map under water
        Self {
            ground: 60,
            light_woods: 10,
            heavy_woods: 5,
            rubble: 5,
            water: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        MapConfig::default().validate().unwrap();
    }

    #[test]
    fn test_validate_weights() {
        assert!(validate_weights(&[0, 1]).is_ok());
        assert!(validate_weights(&[]).is_err());
        assert!(validate_weights(&[0, 0, 0]).is_err());
        assert!(validate_weights(&[u32::MAX]).is_ok());
        assert_eq!(
            validate_weights(&[u32::MAX, 1]).unwrap_err().code,
            "weights_overflow"
        );
    }

    #[test]
    fn test_deserialize_partial() {
        // Missing fields fall back to defaults
        let config: MapConfig = serde_json::from_str(
            r#"{"seed": "hill 203", "terrain": {"depth_weights": [1]}}"#,
        )
        .unwrap();
        assert_eq!(config.seed, Seed::Text("hill 203".into()));
        assert_eq!(config.radius, 5);
        assert_eq!(config.terrain.depth_weights, vec![1]);
        assert_eq!(config.terrain.elevation_weights, vec![40, 30, 15, 10, 3, 2]);
        assert_eq!(config.terrain.kind_weights.water, 20);
    }
}
