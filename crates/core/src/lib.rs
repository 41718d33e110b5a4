//! Skirmish is the tactical core of a hex-grid wargame. It answers the two
//! questions a turn-based engagement keeps asking: which hexes does a shot
//! pass through, and is the target inside the shooter's frontal firing arc?
//! Rendering and input handling live elsewhere; this crate only deals in
//! coordinates and the grid of placed hexes.
//!
//! ```
//! use skirmish::{MapConfig, Skirmish};
//!
//! let config = MapConfig {
//!     seed: 1234.into(),
//!     ..Default::default()
//! };
//! let skirmish = Skirmish::generate(config).unwrap();
//! let units = skirmish.units().to_vec();
//! let engagement = skirmish.engage(units[0], units[1]).unwrap();
//! println!("in arc: {}", engagement.in_arc);
//! ```
//!
//! The geometry is usable on its own too. See [HexPoint], [trace_line] and
//! [is_in_arc].

mod config;
mod error;
mod util;
mod world;

pub use crate::{
    config::{MapConfig, Seed, TerrainConfig, TerrainKindWeights},
    error::HexError,
    util::hexagon_len,
    world::{
        arc::{is_in_arc, is_in_arc_index},
        engagement::Engagement,
        grid::{
            HexAttributes, HexGrid, HexId, HexIdSequence, HexLookup, LineHit,
            PlacedHex,
        },
        hex::{
            FractionalHexPoint, HexDirection, HexPoint, HexPointIndexMap,
            HexPointMap, HexPointSet, DIAGONALS, DIRECTIONS,
        },
        line::{trace_line, Coverage, LineStep, LINE_EPSILON},
        terrain::{weighted_index, TerrainGenerator, TerrainKind, TerrainSource},
        Skirmish,
    },
};
