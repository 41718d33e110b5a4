use crate::HexPoint;
use thiserror::Error;

/// Errors raised by the hex geometry and grid layers. These are all caller
/// mistakes (bad coordinates, bad direction indexes, asking for hexes that
/// were never placed). A hex simply being absent from the grid during a line
/// trace or arc search is **not** an error; those searches treat gaps as
/// barriers and carry on.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum HexError {
    /// An integer triple that doesn't fall on the plane `q + r + s = 0`
    #[error("invalid hex coordinate ({q}, {r}, {s}); q + r + s must be 0")]
    InvalidCoordinate { q: i32, r: i32, s: i32 },

    /// A fractional triple whose sum doesn't round to zero
    #[error(
        "invalid fractional hex coordinate ({q}, {r}, {s}); \
        q + r + s must round to 0"
    )]
    InvalidFractionalCoordinate { q: f64, r: f64, s: f64 },

    /// A direction or facing index outside `[0, 6)`
    #[error("invalid direction index {0}; must be in [0, 6)")]
    InvalidDirection(i32),

    /// The grid has no hex at this position
    #[error("no hex placed at {0}")]
    NotFound(HexPoint),

    /// The grid already has a hex at this position
    #[error("a hex is already placed at {0}")]
    AlreadyPlaced(HexPoint),
}
