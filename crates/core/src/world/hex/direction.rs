use crate::{HexError, HexPoint, DIAGONALS, DIRECTIONS};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// The 6 directions in which hexes line up side-to-side. For any given hex, a
/// direction represents both the side of the hex a unit can face and the
/// neighbor that lies across that side.
///
/// Each variant's discriminant is its direction index, matching [DIRECTIONS]
/// and [DIAGONALS]. Indexes proceed counter-clockwise starting from east.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    EnumIter,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HexDirection {
    /// East
    E = 0,
    /// Northeast
    NE = 1,
    /// Northwest
    NW = 2,
    /// West
    W = 3,
    /// Southwest
    SW = 4,
    /// Southeast
    SE = 5,
}

impl HexDirection {
    /// All directions, in index order
    pub const ALL: [Self; 6] =
        [Self::E, Self::NE, Self::NW, Self::W, Self::SW, Self::SE];

    /// Index of this direction, in `[0, 6)`
    pub fn index(self) -> usize {
        self as usize
    }

    /// Turn by some number of 60° steps. Positive is counter-clockwise,
    /// negative is clockwise. Any step count is valid; it wraps around.
    pub fn turn(self, steps: i32) -> Self {
        // rem_euclid keeps negative turns in [0, 6)
        Self::ALL[(self as i32 + steps).rem_euclid(6) as usize]
    }

    /// The direction pointing the opposite way
    pub fn opposite(self) -> Self {
        self.turn(3)
    }

    /// The three directions that make up the 120° frontal cone for a unit
    /// facing this way: straight ahead, then one step counter-clockwise, then
    /// one step clockwise.
    pub fn front_arc(self) -> [Self; 3] {
        [self, self.turn(1), self.turn(-1)]
    }

    /// Get the vector offset that moves a point one hex in this direction
    pub fn to_vector(self) -> HexPoint {
        DIRECTIONS[self.index()]
    }

    /// Get the vector offset that moves a point to its diagonal neighbor in
    /// this direction
    pub fn to_diagonal_vector(self) -> HexPoint {
        DIAGONALS[self.index()]
    }
}

impl TryFrom<i32> for HexDirection {
    type Error = HexError;

    fn try_from(index: i32) -> Result<Self, Self::Error> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or(HexError::InvalidDirection(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_index_round_trip() {
        for (i, direction) in HexDirection::iter().enumerate() {
            assert_eq!(direction.index(), i);
            assert_eq!(HexDirection::try_from(i as i32), Ok(direction));
        }
    }

    #[test]
    fn test_invalid_index() {
        assert_eq!(
            HexDirection::try_from(6),
            Err(HexError::InvalidDirection(6))
        );
        assert_eq!(
            HexDirection::try_from(-1),
            Err(HexError::InvalidDirection(-1))
        );
    }

    #[test]
    fn test_turn() {
        assert_eq!(HexDirection::E.turn(1), HexDirection::NE);
        assert_eq!(HexDirection::E.turn(-1), HexDirection::SE);
        assert_eq!(HexDirection::SE.turn(1), HexDirection::E);
        assert_eq!(HexDirection::NW.turn(12), HexDirection::NW);
        assert_eq!(HexDirection::NW.turn(-9), HexDirection::SE);
        assert_eq!(HexDirection::NE.opposite(), HexDirection::SW);
    }

    #[test]
    fn test_front_arc() {
        assert_eq!(
            HexDirection::E.front_arc(),
            [HexDirection::E, HexDirection::NE, HexDirection::SE]
        );
        assert_eq!(
            HexDirection::W.front_arc(),
            [HexDirection::W, HexDirection::SW, HexDirection::NW]
        );
    }

    #[test]
    fn test_opposite_vectors_cancel() {
        for direction in HexDirection::iter() {
            assert_eq!(
                direction.to_vector() + direction.opposite().to_vector(),
                HexPoint::ORIGIN
            );
            assert_eq!(
                direction.to_diagonal_vector()
                    + direction.opposite().to_diagonal_vector(),
                HexPoint::ORIGIN
            );
        }
    }
}
