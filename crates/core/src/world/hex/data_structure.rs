use crate::HexPoint;
use fnv::FnvBuildHasher;
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};

/// A set of hex points
pub type HexPointSet = HashSet<HexPoint, FnvBuildHasher>;
/// A map of hex points to some `T`
pub type HexPointMap<T> = HashMap<HexPoint, T, FnvBuildHasher>;
/// An ORDERED map of hex points to some `T`. Iteration follows insertion
/// order, which keeps anything that walks the map (e.g. picking a random hex)
/// reproducible under a fixed seed.
pub type HexPointIndexMap<T> = IndexMap<HexPoint, T, FnvBuildHasher>;
