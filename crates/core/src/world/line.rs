use crate::{FractionalHexPoint, HexPoint};
use serde::{Deserialize, Serialize};
use std::cmp;

/// Size of the nudge applied to both ends of a traced line. See [trace_line].
pub const LINE_EPSILON: f64 = 1e-6;

/// How much of a hex a traced line covers at one step
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Coverage {
    /// The line passes cleanly through this hex
    Full,
    /// The line runs exactly along an edge at this step, grazing this hex and
    /// the one on the other side of the edge
    Partial,
}

/// One entry in a traced line
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStep {
    pub point: HexPoint,
    pub coverage: Coverage,
}

impl LineStep {
    fn new(point: HexPoint, coverage: Coverage) -> Self {
        Self { point, coverage }
    }
}

/// Trace a straight line from the center of `from` to the center of `to`,
/// and return every hex it passes through, in order.
///
/// A line of distance `N` is sampled at `N + 1` evenly spaced points. Each
/// sample is taken twice: once along the line shifted by `(ε, ε, -2ε)` and
/// once along the line shifted by the opposite amount. When both shifted
/// lines land in the same hex, the step is [Coverage::Full]. When they land
/// in different hexes, the unshifted line runs exactly along the edge between
/// them, so both are reported as [Coverage::Partial] (positive nudge first)
/// rather than arbitrarily picking one.
///
/// The output always has between `N + 1` and `2 * (N + 1)` entries, and
/// always starts at `from` and ends at `to`.
pub fn trace_line(from: HexPoint, to: HexPoint) -> Vec<LineStep> {
    let distance = from.distance_to(to);
    let from: FractionalHexPoint = from.into();
    let to: FractionalHexPoint = to.into();
    let from_pos = from.nudge(LINE_EPSILON);
    let to_pos = to.nudge(LINE_EPSILON);
    let from_neg = from.nudge(-LINE_EPSILON);
    let to_neg = to.nudge(-LINE_EPSILON);

    // A zero-length line still gets one sample, at t=0
    let step = 1.0 / cmp::max(distance, 1) as f64;
    let mut steps = Vec::with_capacity(distance + 1);
    for i in 0..=distance {
        let t = step * i as f64;
        let pos = from_pos.lerp(to_pos, t).round();
        let neg = from_neg.lerp(to_neg, t).round();
        if pos == neg {
            steps.push(LineStep::new(pos, Coverage::Full));
        } else {
            steps.push(LineStep::new(pos, Coverage::Partial));
            steps.push(LineStep::new(neg, Coverage::Partial));
        }
    }
    steps
}
