use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A cell on a track grid. Ordered row-major by `x` then `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coords {
    pub x: u32,
    pub y: u32,
}

impl Coords {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Coords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Serde adapter for `BTreeMap<Coords, V>`.
///
/// JSON object keys must be strings, so coordinate-keyed maps are written as a
/// list of `[coords, value]` pairs instead.
pub mod coord_map {
    use super::*;

    pub fn serialize<V, S>(map: &BTreeMap<Coords, V>, serializer: S) -> Result<S::Ok, S::Error>
    where
        V: Serialize,
        S: Serializer,
    {
        serializer.collect_seq(map.iter())
    }

    pub fn deserialize<'de, V, D>(deserializer: D) -> Result<BTreeMap<Coords, V>, D::Error>
    where
        V: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        let entries: Vec<(Coords, V)> = Vec::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}
