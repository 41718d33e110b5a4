use crate::{HexDirection, HexId, LineHit};
use serde::{Deserialize, Serialize};

/// The outcome of checking one unit's shot at another. See
/// [Skirmish::engage](crate::Skirmish::engage).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Engagement {
    /// Hex holding the shooting unit
    pub attacker: HexId,
    /// Hex holding the target unit
    pub defender: HexId,
    /// Which way the attacker faces
    pub facing: HexDirection,
    /// Hex distance between the two units
    pub distance: usize,
    /// Every hex the line of fire passes through, attacker first
    pub line: Vec<LineHit>,
    /// Is the defender inside the attacker's frontal arc?
    pub in_arc: bool,
}

impl Engagement {
    /// IDs of hexes along the line of fire, excluding both endpoints. Steps
    /// that fall outside the grid are skipped.
    pub fn intervening(&self) -> impl Iterator<Item = HexId> + '_ {
        let (attacker, defender) = (self.attacker, self.defender);
        self.line
            .iter()
            .filter_map(|hit| hit.hex)
            .filter(move |id| *id != attacker && *id != defender)
    }
}
