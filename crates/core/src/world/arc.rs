use crate::{HexDirection, HexError, HexLookup, HexPoint, HexPointSet};
use std::collections::VecDeque;

/// Is `target` inside the frontal firing arc of a unit at `source` facing
/// `facing`?
///
/// The arc is the 120° cone made of the three directions in
/// [HexDirection::front_arc]. This does a breadth-first search out from the
/// source, only ever stepping in those three directions and only onto hexes
/// that exist in `grid`. The directions are fixed by the _source's_ facing
/// and never re-derived along the way, so the reachable region fans out from
/// the source rather than bending around obstacles. Positions missing from
/// the grid are barriers; the search routes around them if it can.
///
/// The source always reaches itself. Each hex is visited at most once, so
/// the search is linear in the size of the grid.
///
/// The source itself is **not** checked against the grid. Passing a source
/// that has no hex is a caller error; the search still fans out from it into
/// whichever of its cone neighbors exist.
pub fn is_in_arc(
    source: HexPoint,
    facing: HexDirection,
    target: HexPoint,
    grid: &impl HexLookup,
) -> bool {
    let cone = facing.front_arc();
    let mut visited = HexPointSet::default();
    let mut queue = VecDeque::new();
    visited.insert(source);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        if current == target {
            return true;
        }
        for direction in cone.iter() {
            let next = current.neighbor(*direction);
            // Only enqueue each hex once, and never step off the grid
            if grid.contains(next) && visited.insert(next) {
                queue.push_back(next);
            }
        }
    }
    false
}

/// Same as [is_in_arc], but takes the facing as a raw direction index. An
/// index outside `[0, 6)` is an error rather than an empty arc.
pub fn is_in_arc_index(
    source: HexPoint,
    facing: i32,
    target: HexPoint,
    grid: &impl HexLookup,
) -> Result<bool, HexError> {
    let facing = HexDirection::try_from(facing)?;
    Ok(is_in_arc(source, facing, target, grid))
}
