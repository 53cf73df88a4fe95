//! Alliance identification and per-alliance data storage.
//!
//! ## Alliance
//!
//! One of the two opposing sides. `Axis` holds the first half of the board
//! (the low tile ids), `Ally` the second half.
//!
//! ## AllianceMap
//!
//! Fixed two-slot storage indexed by `Alliance` for O(1) access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two opposing sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Alliance {
    /// Owns the first half of the board (tile ids `0..N/2`).
    Axis,
    /// Owns the second half of the board (tile ids `N/2..N`).
    Ally,
}

impl Alliance {
    /// Both alliances, in board order.
    pub const ALL: [Alliance; 2] = [Alliance::Axis, Alliance::Ally];

    /// Get the opposing alliance.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Alliance::Axis => Alliance::Ally,
            Alliance::Ally => Alliance::Axis,
        }
    }

    /// Get the slot index (0 for Axis, 1 for Ally).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Alliance::Axis => 0,
            Alliance::Ally => 1,
        }
    }
}

impl std::fmt::Display for Alliance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Alliance::Axis => write!(f, "AXIS"),
            Alliance::Ally => write!(f, "ALLY"),
        }
    }
}

/// Per-alliance data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_generals::core::{Alliance, AllianceMap};
///
/// let mut counts: AllianceMap<u32> = AllianceMap::with_value(0);
/// counts[Alliance::Ally] += 3;
///
/// assert_eq!(counts[Alliance::Axis], 0);
/// assert_eq!(counts[Alliance::Ally], 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AllianceMap<T> {
    data: [T; 2],
}

impl<T> AllianceMap<T> {
    /// Create a new map with values from a factory function.
    pub fn new(factory: impl Fn(Alliance) -> T) -> Self {
        Self {
            data: [factory(Alliance::Axis), factory(Alliance::Ally)],
        }
    }

    /// Create a new map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to an alliance's data.
    #[must_use]
    pub fn get(&self, alliance: Alliance) -> &T {
        &self.data[alliance.index()]
    }

    /// Get a mutable reference to an alliance's data.
    pub fn get_mut(&mut self, alliance: Alliance) -> &mut T {
        &mut self.data[alliance.index()]
    }

    /// Iterate over (Alliance, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Alliance, &T)> {
        Alliance::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (Alliance, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Alliance, &mut T)> {
        Alliance::ALL.into_iter().zip(self.data.iter_mut())
    }
}

impl<T> Index<Alliance> for AllianceMap<T> {
    type Output = T;

    fn index(&self, alliance: Alliance) -> &Self::Output {
        self.get(alliance)
    }
}

impl<T> IndexMut<Alliance> for AllianceMap<T> {
    fn index_mut(&mut self, alliance: Alliance) -> &mut Self::Output {
        self.get_mut(alliance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Alliance::Axis.opponent(), Alliance::Ally);
        assert_eq!(Alliance::Ally.opponent(), Alliance::Axis);
        assert_eq!(Alliance::Axis.opponent().opponent(), Alliance::Axis);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Alliance::Axis), "AXIS");
        assert_eq!(format!("{}", Alliance::Ally), "ALLY");
    }

    #[test]
    fn test_alliance_map_new() {
        let map: AllianceMap<usize> = AllianceMap::new(|a| a.index() * 10);

        assert_eq!(map[Alliance::Axis], 0);
        assert_eq!(map[Alliance::Ally], 10);
    }

    #[test]
    fn test_alliance_map_mutation() {
        let mut map: AllianceMap<Vec<u8>> = AllianceMap::default();

        map[Alliance::Axis].push(1);
        map.get_mut(Alliance::Ally).push(2);

        assert_eq!(map[Alliance::Axis], vec![1]);
        assert_eq!(map[Alliance::Ally], vec![2]);
    }

    #[test]
    fn test_alliance_map_iter() {
        let map: AllianceMap<i32> = AllianceMap::new(|a| a.index() as i32);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(Alliance::Axis, &0), (Alliance::Ally, &1)]);
    }

    #[test]
    fn test_serialization() {
        let map: AllianceMap<i32> = AllianceMap::new(|a| a.index() as i32 + 1);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: AllianceMap<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
