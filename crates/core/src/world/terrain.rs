use crate::{HexAttributes, TerrainConfig};
use anyhow::{anyhow, Context};
use rand::{
    distributions::{Distribution, WeightedIndex},
    Rng,
};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The category of a hex. Everything except [TerrainKind::Mech] is produced
/// by terrain generation; `Mech` marks a hex that a unit has been placed on.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    EnumIter,
    EnumString,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
pub enum TerrainKind {
    #[serde(rename = "ground")]
    #[strum(serialize = "ground")]
    Ground,
    #[serde(rename = "light woods")]
    #[strum(serialize = "light woods")]
    LightWoods,
    #[serde(rename = "heavy woods")]
    #[strum(serialize = "heavy woods")]
    HeavyWoods,
    #[serde(rename = "rubble")]
    #[strum(serialize = "rubble")]
    Rubble,
    #[serde(rename = "water")]
    #[strum(serialize = "water")]
    Water,
    #[serde(rename = "mech")]
    #[strum(serialize = "mech")]
    Mech,
}

/// Anything that can hand out terrain for newly placed hexes. Grid population
/// pulls from one of these once per hex.
pub trait TerrainSource {
    fn terrain(&mut self) -> HexAttributes;
}

/// Draw a random index from a list of relative weights. The returned index
/// is always within the bounds of `weights`. Fails if the weights are empty
/// or all zero.
pub fn weighted_index(
    rng: &mut impl Rng,
    weights: &[u32],
) -> anyhow::Result<usize> {
    Ok(weighted_distribution(weights)?.sample(rng))
}

/// Build a distribution over indexes of `weights`. The weights have to total
/// at most `u32::MAX`, since that's the type the distribution sums in.
fn weighted_distribution(
    weights: &[u32],
) -> anyhow::Result<WeightedIndex<u32>> {
    weights
        .iter()
        .try_fold(0u32, |total, weight| total.checked_add(*weight))
        .ok_or_else(|| {
            anyhow!("weights {:?} total more than {}", weights, u32::MAX)
        })?;
    WeightedIndex::new(weights)
        .with_context(|| format!("invalid weights {:?}", weights))
}

/// Randomized terrain generation. Each hex gets a kind drawn from the
/// configured kind weights. Water then gets a depth and everything else gets
/// an elevation, each drawn from its own weight list where index `i` means
/// "depth/elevation `i`".
///
/// All randomness comes from the RNG passed in at construction, so a seeded
/// RNG yields the same terrain every time.
#[derive(Debug)]
pub struct TerrainGenerator<R> {
    rng: R,
    /// Each kind paired with the upper bound of its slice of `[0, 1)`, in
    /// ascending order
    kind_thresholds: Vec<(TerrainKind, f64)>,
    elevation: WeightedIndex<u32>,
    depth: WeightedIndex<u32>,
}

impl<R: Rng> TerrainGenerator<R> {
    pub fn new(config: &TerrainConfig, rng: R) -> anyhow::Result<Self> {
        let weights = config.kind_weights.as_list();
        // Five u32s always fit in a u64
        let total: u64 =
            weights.iter().map(|(_, weight)| u64::from(*weight)).sum();
        anyhow::ensure!(total > 0, "terrain kind weights must not all be 0");

        // Divide the running sum rather than summing fractions, so the
        // default weights give thresholds of exactly 0.6, 0.7, etc.
        let mut cumulative = 0u64;
        let kind_thresholds = weights
            .iter()
            .map(|(kind, weight)| {
                cumulative += u64::from(*weight);
                (*kind, cumulative as f64 / total as f64)
            })
            .collect();

        Ok(Self {
            rng,
            kind_thresholds,
            elevation: weighted_distribution(&config.elevation_weights)
                .context("invalid elevation weights")?,
            depth: weighted_distribution(&config.depth_weights)
                .context("invalid depth weights")?,
        })
    }

    /// Give back the RNG, e.g. to keep drawing from the same stream after
    /// generation is done
    pub fn into_rng(self) -> R {
        self.rng
    }

    fn kind(&mut self) -> TerrainKind {
        let value: f64 = self.rng.gen();
        self.kind_thresholds
            .iter()
            .find(|(_, threshold)| value < *threshold)
            .map(|(kind, _)| *kind)
            // Only reachable via float error at the very top of the range
            .unwrap_or(TerrainKind::Water)
    }
}

impl<R: Rng> TerrainSource for TerrainGenerator<R> {
    fn terrain(&mut self) -> HexAttributes {
        let kind = self.kind();
        let (height, level) = if kind == TerrainKind::Water {
            let depth = self.depth.sample(&mut self.rng) as i32;
            (-depth, format!("Depth: {}", depth))
        } else {
            let elevation = self.elevation.sample(&mut self.rng) as i32;
            (elevation, format!("Elev: {}", elevation))
        };
        HexAttributes {
            kind,
            level,
            height,
            facing: None,
        }
    }
}
