use crate::{
    trace_line, Coverage, HexDirection, HexError, HexPoint, HexPointIndexMap,
    TerrainKind, TerrainSource,
};
use derive_more::Display;
use log::debug;
use serde::{Deserialize, Serialize};
use std::{
    cmp,
    collections::{HashMap, HashSet},
    hash::BuildHasher,
    mem,
};

/// Anything that can answer "is there a hex at this position?". The line of
/// sight and firing arc logic only ever need membership, so they take this
/// trait instead of a concrete grid. That also lets tests describe a grid as
/// a plain set of points.
pub trait HexLookup {
    fn contains(&self, point: HexPoint) -> bool;
}

impl<S: BuildHasher> HexLookup for HashSet<HexPoint, S> {
    fn contains(&self, point: HexPoint) -> bool {
        HashSet::contains(self, &point)
    }
}

impl<T, S: BuildHasher> HexLookup for HashMap<HexPoint, T, S> {
    fn contains(&self, point: HexPoint) -> bool {
        self.contains_key(&point)
    }
}

/// Sequential identifier for a placed hex. IDs are handed out in creation
/// order by a [HexIdSequence].
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
pub struct HexId(pub u32);

/// Source of [HexId]s. Each grid population takes one of these explicitly,
/// so independent grids (and independent tests) never share a counter.
#[derive(Clone, Debug, Default)]
pub struct HexIdSequence {
    next: u32,
}

impl HexIdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grab the next ID and advance the sequence
    pub fn next_id(&mut self) -> HexId {
        let id = HexId(self.next);
        self.next += 1;
        id
    }

    /// Start counting from zero again
    pub fn reset(&mut self) {
        self.next = 0;
    }
}

/// The presentation attributes of a placed hex. These are the only part of a
/// hex that can change after it's placed, and they can only change as a
/// whole via [HexGrid::replace].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HexAttributes {
    /// Terrain category, or [TerrainKind::Mech] for a unit-occupied hex
    pub kind: TerrainKind,
    /// Display label derived from height, e.g. `"Elev: 2"`. Empty for units.
    pub level: String,
    /// Elevation for land, negative depth for water
    pub height: i32,
    /// Which way the unit on this hex faces. `None` for plain terrain.
    pub facing: Option<HexDirection>,
}

/// A hex that has been placed in a grid. Position and ID are fixed at
/// creation; see [HexAttributes] for the mutable part.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedHex {
    position: HexPoint,
    id: HexId,
    attributes: HexAttributes,
}

impl PlacedHex {
    pub fn position(&self) -> HexPoint {
        self.position
    }

    pub fn id(&self) -> HexId {
        self.id
    }

    pub fn attributes(&self) -> &HexAttributes {
        &self.attributes
    }

    /// Does this hex hold a unit?
    pub fn is_unit(&self) -> bool {
        self.attributes.kind == TerrainKind::Mech
    }
}

/// A traced line step, joined with whatever hex sits at that position in a
/// grid. See [HexGrid::line_of_sight].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineHit {
    pub point: HexPoint,
    pub coverage: Coverage,
    /// The hex at this position, or `None` if the line leaves the grid here
    pub hex: Option<HexId>,
}

/// The set of placed hexes that make up a map, keyed by position. There is no
/// stored adjacency; neighbors are always recomputed from coordinates.
///
/// Hexes are never removed once placed. Iteration follows placement order.
#[derive(Clone, Debug, Default)]
pub struct HexGrid {
    hexes: HexPointIndexMap<PlacedHex>,
}

impl HexGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill a hexagon-shaped map of the given radius. Radius 0 is a single
    /// hex, 1 is 7 hexes, 2 is 19, etc. Each hex gets its terrain from the
    /// given source and its ID from the given sequence, in `q`-major order.
    pub fn populate_hexagon(
        radius: u16,
        terrain: &mut impl TerrainSource,
        ids: &mut HexIdSequence,
    ) -> Self {
        let mut grid = Self::new();
        grid.hexes.reserve(crate::hexagon_len(radius));

        let radius = radius as i32;
        for q in -radius..=radius {
            // If we just do [-r,r] for r as well, then we end up with a
            // diamond pattern instead of a hexagon
            // https://www.redblobgames.com/grids/hexagons/#range
            let r_min = cmp::max(-radius, -q - radius);
            let r_max = cmp::min(radius, -q + radius);
            for r in r_min..=r_max {
                let position = HexPoint::new_qr(q, r);
                grid.hexes.insert(
                    position,
                    PlacedHex {
                        position,
                        id: ids.next_id(),
                        attributes: terrain.terrain(),
                    },
                );
            }
        }

        debug_assert_eq!(
            grid.len(),
            crate::hexagon_len(radius as u16),
            "expected 3r²+3r+1 hexes"
        );
        grid
    }

    /// Place a single hex. Fails if the position is already taken.
    pub fn insert(
        &mut self,
        position: HexPoint,
        attributes: HexAttributes,
        ids: &mut HexIdSequence,
    ) -> Result<HexId, HexError> {
        if self.hexes.contains_key(&position) {
            return Err(HexError::AlreadyPlaced(position));
        }
        let id = ids.next_id();
        self.hexes.insert(
            position,
            PlacedHex {
                position,
                id,
                attributes,
            },
        );
        Ok(id)
    }

    pub fn get(&self, position: HexPoint) -> Option<&PlacedHex> {
        self.hexes.get(&position)
    }

    pub fn contains(&self, position: HexPoint) -> bool {
        self.hexes.contains_key(&position)
    }

    /// Iterate over every placed hex, in placement order
    pub fn iter(&self) -> impl Iterator<Item = &PlacedHex> {
        self.hexes.values()
    }

    pub fn len(&self) -> usize {
        self.hexes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hexes.is_empty()
    }

    /// Swap out the attributes of the hex at the given position, returning
    /// the old ones. Every lookup after this sees the new attributes. Fails if
    /// no hex is placed there.
    pub fn replace(
        &mut self,
        position: HexPoint,
        attributes: HexAttributes,
    ) -> Result<HexAttributes, HexError> {
        let hex = self
            .hexes
            .get_mut(&position)
            .ok_or(HexError::NotFound(position))?;
        Ok(mem::replace(&mut hex.attributes, attributes))
    }

    /// Trace a line between two positions (see [trace_line]) and look up the
    /// hex under each step. Steps that fall outside the grid are still
    /// reported, just with no hex attached.
    pub fn line_of_sight(&self, from: HexPoint, to: HexPoint) -> Vec<LineHit> {
        trace_line(from, to)
            .into_iter()
            .map(|step| {
                let hex = self.get(step.point).map(PlacedHex::id);
                match hex {
                    Some(id) => debug!(
                        "Line {} -> {} crosses hex {} ({:?})",
                        from, to, id, step.coverage
                    ),
                    None => debug!(
                        "Line {} -> {} leaves the grid at {}",
                        from, to, step.point
                    ),
                }
                LineHit {
                    point: step.point,
                    coverage: step.coverage,
                    hex,
                }
            })
            .collect()
    }
}

impl HexLookup for HexGrid {
    fn contains(&self, point: HexPoint) -> bool {
        HexGrid::contains(self, point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HexPointMap;

    /// Hands out flat ground with increasing elevation, so each hex is
    /// distinguishable
    #[derive(Default)]
    struct Staircase(i32);

    impl TerrainSource for Staircase {
        fn terrain(&mut self) -> HexAttributes {
            self.0 += 1;
            ground(self.0)
        }
    }

    fn ground(height: i32) -> HexAttributes {
        HexAttributes {
            kind: TerrainKind::Ground,
            level: format!("Elev: {}", height),
            height,
            facing: None,
        }
    }

    #[test]
    fn test_id_sequence() {
        let mut ids = HexIdSequence::new();
        assert_eq!(ids.next_id(), HexId(0));
        assert_eq!(ids.next_id(), HexId(1));
        ids.reset();
        assert_eq!(ids.next_id(), HexId(0));
    }

    #[test]
    fn test_populate_hexagon() {
        for radius in 0..5 {
            let grid = HexGrid::populate_hexagon(
                radius,
                &mut Staircase::default(),
                &mut HexIdSequence::new(),
            );
            assert_eq!(grid.len(), crate::hexagon_len(radius));
            assert!(grid
                .iter()
                .all(|hex| hex.position().length() <= radius as usize));
        }
    }

    #[test]
    fn test_populate_ids() {
        let mut ids = HexIdSequence::new();
        let grid =
            HexGrid::populate_hexagon(1, &mut Staircase::default(), &mut ids);
        let found: Vec<u32> = grid.iter().map(|hex| hex.id().0).collect();
        assert_eq!(found, (0..7).collect::<Vec<_>>());
        // First hex is the one with the lowest q, then lowest r
        assert_eq!(
            grid.get(HexPoint::new_qr(-1, 0)).map(PlacedHex::id),
            Some(HexId(0))
        );
        // The sequence picks up where the grid left off
        assert_eq!(ids.next_id(), HexId(7));
    }

    #[test]
    fn test_insert() {
        let mut grid = HexGrid::new();
        let mut ids = HexIdSequence::new();
        let point = HexPoint::new_qr(2, -1);
        assert_eq!(grid.insert(point, ground(1), &mut ids), Ok(HexId(0)));
        assert_eq!(
            grid.insert(point, ground(2), &mut ids),
            Err(HexError::AlreadyPlaced(point))
        );
        assert_eq!(grid.get(point).unwrap().attributes().height, 1);
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn test_replace() {
        let mut grid = HexGrid::populate_hexagon(
            2,
            &mut Staircase::default(),
            &mut HexIdSequence::new(),
        );
        let point = HexPoint::new_qr(1, 0);
        let before = grid.get(point).unwrap().clone();

        let unit = HexAttributes {
            kind: TerrainKind::Mech,
            level: String::new(),
            height: before.attributes().height,
            facing: Some(HexDirection::SW),
        };
        let old = grid.replace(point, unit.clone()).unwrap();
        assert_eq!(&old, before.attributes());

        let after = grid.get(point).unwrap();
        assert_eq!(after.attributes(), &unit);
        assert!(after.is_unit());
        // Identity doesn't change
        assert_eq!(after.id(), before.id());
        assert_eq!(after.position(), point);
        assert_eq!(grid.len(), 19);
    }

    #[test]
    fn test_replace_missing() {
        let mut grid = HexGrid::new();
        let point = HexPoint::new_qr(4, 4);
        assert_eq!(
            grid.replace(point, ground(0)),
            Err(HexError::NotFound(point))
        );
    }

    #[test]
    fn test_line_of_sight() {
        let grid = HexGrid::populate_hexagon(
            1,
            &mut Staircase::default(),
            &mut HexIdSequence::new(),
        );
        let from = HexPoint::new_qr(-1, 1);
        let to = HexPoint::new_qr(2, -2);
        let hits = grid.line_of_sight(from, to);

        let points: Vec<HexPoint> = hits.iter().map(|hit| hit.point).collect();
        let expected: Vec<HexPoint> =
            trace_line(from, to).iter().map(|step| step.point).collect();
        assert_eq!(points, expected);

        // The last step is outside the radius-1 grid, everything else is in
        assert_eq!(hits.last().unwrap().hex, None);
        assert!(hits[..hits.len() - 1].iter().all(|hit| hit.hex.is_some()));
        assert_eq!(hits[0].hex, grid.get(from).map(PlacedHex::id));
    }

    #[test]
    fn test_lookup_impls() {
        let set: HashSet<HexPoint> =
            vec![HexPoint::ORIGIN].into_iter().collect();
        assert!(HexLookup::contains(&set, HexPoint::ORIGIN));
        assert!(!HexLookup::contains(&set, HexPoint::new_qr(1, 0)));

        // Heights keyed by position work as a lookup too
        let mut heights = HexPointMap::default();
        heights.insert(HexPoint::new_qr(1, 0), 3);
        assert!(HexLookup::contains(&heights, HexPoint::new_qr(1, 0)));
        assert!(!HexLookup::contains(&heights, HexPoint::ORIGIN));
        assert!(crate::is_in_arc(
            HexPoint::ORIGIN,
            HexDirection::E,
            HexPoint::new_qr(1, 0),
            &heights
        ));
    }
}
