use crate::{HexDirection, HexError};
use derive_more::{Add, Display, Mul, Neg, Sub};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// The 6 unit vectors between adjacent hexes, indexed by direction. See the
/// module-level docs for a diagram of which way each index points.
pub const DIRECTIONS: [HexPoint; 6] = [
    HexPoint::new_qr(1, 0),
    HexPoint::new_qr(1, -1),
    HexPoint::new_qr(0, -1),
    HexPoint::new_qr(-1, 0),
    HexPoint::new_qr(-1, 1),
    HexPoint::new_qr(0, 1),
];

/// The 6 vectors to the diagonal neighbors of a hex, i.e. the hexes that sit
/// just beyond each vertex rather than across each side. Diagonal `i` lies
/// between directions `i` and `i + 1`.
pub const DIAGONALS: [HexPoint; 6] = [
    HexPoint::new_qr(2, -1),
    HexPoint::new_qr(1, -2),
    HexPoint::new_qr(-1, -1),
    HexPoint::new_qr(-2, 1),
    HexPoint::new_qr(-1, 2),
    HexPoint::new_qr(1, 1),
];

/// A whole hex in cube coordinates. See the module-level docs for how the
/// coordinate system works.
///
/// Only `q` and `r` are stored; `s` is always derived as `-q - r`. That means
/// once a point exists it can't violate `q + r + s = 0`, and every operation
/// on it (addition, scaling, rotation...) stays valid without re-checking.
/// The only place the invariant actually has to be enforced is
/// [HexPoint::new], where all three components are supplied by the caller.
///
/// Points double as vectors: a direction is just the point one step away
/// from the origin, so `point + DIRECTIONS[0]` is the east neighbor.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Add,
    Sub,
    Mul,
    Neg,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.q", "self.r", "self.s()")]
#[serde(into = "[i32; 3]", try_from = "[i32; 3]")]
pub struct HexPoint {
    q: i32,
    r: i32,
}

impl HexPoint {
    pub const ORIGIN: Self = Self::new_qr(0, 0);

    /// Construct a point from all three cube components. Fails if the
    /// components don't satisfy `q + r + s = 0`; the input is never corrected.
    pub fn new(q: i32, r: i32, s: i32) -> Result<Self, HexError> {
        // Sum wide so extreme components can't overflow into a false zero
        if i64::from(q) + i64::from(r) + i64::from(s) != 0 {
            Err(HexError::InvalidCoordinate { q, r, s })
        } else {
            Ok(Self::new_qr(q, r))
        }
    }

    /// Construct a point from `q` and `r`. Since q+r+s=0 for all points, `s`
    /// is derived, so this can never fail.
    pub const fn new_qr(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    pub fn q(&self) -> i32 {
        self.q
    }

    pub fn r(&self) -> i32 {
        self.r
    }

    pub fn s(&self) -> i32 {
        // q + r = -s, which always fits for a point built with `new`
        -(self.q + self.r)
    }

    /// Multiply each component by `k`. Same as `self * k`.
    pub fn scale(self, k: i32) -> Self {
        self * k
    }

    /// Number of single-hex steps from the origin to this point.
    pub fn length(self) -> usize {
        Self::steps(i64::from(self.q), i64::from(self.r))
    }

    /// Calculate the path distance between two hexes, meaning the number of
    /// hops it takes to get from one to the other. 0 if the points are equal,
    /// 1 if they're adjacent, etc.
    pub fn distance_to(self, other: HexPoint) -> usize {
        Self::steps(
            i64::from(self.q) - i64::from(other.q),
            i64::from(self.r) - i64::from(other.r),
        )
    }

    /// Length of the vector `(q, r, -q-r)`. Works in i64 so that no pair of
    /// i32 components (or their differences) can overflow.
    fn steps(q: i64, r: i64) -> usize {
        // https://www.redblobgames.com/grids/hexagons/#distances
        // The sum of absolute values is always even because the components
        // sum to zero, so this division is exact
        let s = -q - r;
        ((q.abs() + r.abs() + s.abs()) / 2) as usize
    }

    /// Get the hex adjacent to this one in the given direction
    pub fn neighbor(self, direction: HexDirection) -> HexPoint {
        self + direction.to_vector()
    }

    /// Get the hex adjacent to this one by raw direction index. Fails if the
    /// index is outside `[0, 6)`.
    pub fn neighbor_index(self, index: i32) -> Result<HexPoint, HexError> {
        Ok(self.neighbor(HexDirection::try_from(index)?))
    }

    /// Get the diagonal neighbor in the given direction. See [DIAGONALS].
    pub fn diagonal_neighbor(self, direction: HexDirection) -> HexPoint {
        self + direction.to_diagonal_vector()
    }

    /// Get the diagonal neighbor by raw direction index. Fails if the index is
    /// outside `[0, 6)`.
    pub fn diagonal_neighbor_index(
        self,
        index: i32,
    ) -> Result<HexPoint, HexError> {
        Ok(self.diagonal_neighbor(HexDirection::try_from(index)?))
    }

    /// Rotate this point 60° counter-clockwise around the origin
    pub fn rotate_left(self) -> HexPoint {
        // (q, r, s) => (-s, -q, -r)
        Self::new_qr(-self.s(), -self.q)
    }

    /// Rotate this point 60° clockwise around the origin
    pub fn rotate_right(self) -> HexPoint {
        // (q, r, s) => (-r, -s, -q)
        Self::new_qr(-self.r, -self.s())
    }

    /// Get an iterator of all the points directly adjacent to this one. The
    /// iterator will always contain exactly 6 values, in direction order.
    pub fn adjacents(self) -> impl Iterator<Item = HexPoint> {
        HexDirection::iter().map(move |dir| self.neighbor(dir))
    }
}

impl From<HexPoint> for [i32; 3] {
    fn from(point: HexPoint) -> Self {
        [point.q(), point.r(), point.s()]
    }
}

impl TryFrom<[i32; 3]> for HexPoint {
    type Error = HexError;

    fn try_from([q, r, s]: [i32; 3]) -> Result<Self, Self::Error> {
        Self::new(q, r, s)
    }
}
