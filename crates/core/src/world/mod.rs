pub mod arc;
pub mod engagement;
pub mod grid;
pub mod hex;
pub mod line;
pub mod terrain;

use crate::{
    is_in_arc, timed, Engagement, HexAttributes, HexDirection, HexError,
    HexGrid, HexIdSequence, HexPoint, MapConfig, PlacedHex, TerrainGenerator,
    TerrainKind,
};
use anyhow::{anyhow, bail, Context};
use log::{debug, info};
use rand::{seq::SliceRandom, SeedableRng};
use rand_pcg::Pcg64;
use validator::Validate;

/// A populated skirmish map: the grid of hexes plus the units placed on it.
///
/// Everything random (terrain, unit placement, unit facing) draws from a
/// single RNG seeded from the config, in that order. Two skirmishes built
/// from the same config are identical, and stay identical as long as the
/// same sequence of calls is made on them.
#[derive(Clone, Debug)]
pub struct Skirmish {
    /// The config used to generate this map
    config: MapConfig,
    grid: HexGrid,
    /// Positions of every placed unit, in placement order
    units: Vec<HexPoint>,
    rng: Pcg64,
}

impl Skirmish {
    /// Generate a new map from the given config, then place `config.units`
    /// units on it. Returns an error if the config is invalid or if there
    /// isn't room for that many units.
    pub fn generate(config: MapConfig) -> anyhow::Result<Self> {
        info!("Generating map with config {:#?}", config);
        config.validate().context("invalid config")?;

        let mut rng = Pcg64::seed_from_u64(config.seed.to_u64());
        let grid = timed!("Map population", log::Level::Info, {
            let mut terrain =
                TerrainGenerator::new(&config.terrain, &mut rng)?;
            HexGrid::populate_hexagon(
                config.radius,
                &mut terrain,
                &mut HexIdSequence::new(),
            )
        });
        info!("Populated map with {} hexes", grid.len());

        if usize::from(config.units) > grid.len() {
            bail!(
                "cannot place {} units on a map of {} hexes",
                config.units,
                grid.len()
            );
        }

        let unit_count = config.units;
        let mut skirmish = Self {
            config,
            grid,
            units: Vec::with_capacity(unit_count.into()),
            rng,
        };
        for _ in 0..unit_count {
            skirmish.place_unit()?;
        }
        Ok(skirmish)
    }

    /// Get a reference to the config that defines this map
    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Get a reference to the grid of hexes that make up this map
    pub fn grid(&self) -> &HexGrid {
        &self.grid
    }

    /// Positions of all placed units, in placement order
    pub fn units(&self) -> &[HexPoint] {
        &self.units
    }

    /// Put a unit on a random hex that doesn't already hold one, facing a
    /// random direction. The hex keeps its height, but its kind becomes
    /// [TerrainKind::Mech] and its level label is cleared. Returns the
    /// position of the new unit, or an error if every hex is taken.
    pub fn place_unit(&mut self) -> anyhow::Result<HexPoint> {
        let free: Vec<&PlacedHex> =
            self.grid.iter().filter(|hex| !hex.is_unit()).collect();
        let hex = free
            .choose(&mut self.rng)
            .ok_or_else(|| anyhow!("no free hex left to place a unit on"))?;
        let position = hex.position();
        let height = hex.attributes().height;
        // The choice can't come back empty, ALL has 6 elements
        let facing = *HexDirection::ALL
            .choose(&mut self.rng)
            .unwrap_or(&HexDirection::E);

        self.grid.replace(
            position,
            HexAttributes {
                kind: TerrainKind::Mech,
                level: String::new(),
                height,
                facing: Some(facing),
            },
        )?;
        self.units.push(position);
        debug!("Placed unit at {} facing {}", position, facing);
        Ok(position)
    }

    /// Check a shot from the unit at `attacker` to the unit at `defender`:
    /// trace the line of fire through the grid and check whether the defender
    /// is inside the attacker's frontal arc. Fails if either position has no
    /// hex, or if the attacker has no facing (i.e. isn't a unit).
    pub fn engage(
        &self,
        attacker: HexPoint,
        defender: HexPoint,
    ) -> anyhow::Result<Engagement> {
        let attacker_hex =
            self.grid.get(attacker).ok_or(HexError::NotFound(attacker))?;
        let defender_hex =
            self.grid.get(defender).ok_or(HexError::NotFound(defender))?;
        let facing = attacker_hex.attributes().facing.ok_or_else(|| {
            anyhow!("hex {} at {} has no facing", attacker_hex.id(), attacker)
        })?;

        let line = self.grid.line_of_sight(attacker, defender);
        let in_arc = is_in_arc(attacker, facing, defender, &self.grid);
        info!(
            "Hex {} {} in the firing arc of hex {} (facing {})",
            defender_hex.id(),
            if in_arc { "is" } else { "is not" },
            attacker_hex.id(),
            facing
        );

        Ok(Engagement {
            attacker: attacker_hex.id(),
            defender: defender_hex.id(),
            facing,
            distance: attacker.distance_to(defender),
            line,
            in_arc,
        })
    }
}
