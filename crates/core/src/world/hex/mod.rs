//! This module holds basic types and data structures related to hexagon grids.
//!
//! ## Coordinate System
//!
//! Skirmish uses the [cube coordinate system defined by Amit
//! Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube).
//! Each hex is addressed by three integer components `q`, `r` and `s`, and
//! **for every hex, `q + r + s = 0`.** Three components are more than a flat
//! grid strictly needs, but they make distance, rotation and line drawing
//! trivially symmetric.
//!
//! Hexes are laid out "pointy topped". With the screen's y axis pointing
//! down, direction 0 is east and the indexes proceed counter-clockwise:
//!
//! ```text
//!          2 (NW)   1 (NE)
//!              \   /
//!     3 (W) ---  o  --- 0 (E)
//!              /   \
//!          4 (SW)   5 (SE)
//! ```
//!
//! ### Fractional Coordinates
//!
//! Drawing a straight line between two hexes means interpolating through
//! points that fall _between_ hex centers. [FractionalHexPoint] is the
//! continuous analogue of [HexPoint] used for those intermediate values. It's
//! never stored anywhere; it only exists long enough to be rounded back to a
//! whole hex.

mod data_structure;
mod direction;
mod fractional;
mod point;

pub use self::{data_structure::*, direction::*, fractional::*, point::*};
