//! Piece mobility.
//!
//! Every piece steps one tile orthogonally. A neighbour exists only if it
//! is on the board: stepping right from the last column never wraps onto
//! the next row, and stepping left from the first column never wraps back.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::BoardConfig;

/// Orthogonal step direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Lowercase label, as shown in move highlights.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Neighbouring tiles a piece at `coords` may step to.
pub type Destinations = SmallVec<[(Direction, usize); 4]>;

/// Tile reached by stepping from `coords` in `direction`, if it exists.
#[must_use]
pub fn neighbour(config: &BoardConfig, coords: usize, direction: Direction) -> Option<usize> {
    if !config.contains(coords) {
        return None;
    }

    let columns = config.columns;
    match direction {
        Direction::Up => coords.checked_sub(columns),
        Direction::Down => Some(coords + columns).filter(|&id| config.contains(id)),
        Direction::Left => (coords % columns != 0).then(|| coords - 1),
        Direction::Right => ((coords + 1) % columns != 0).then(|| coords + 1),
    }
}

/// All legal destinations from `coords`, in `Direction::ALL` order.
///
/// Off-board coordinates have no destinations.
#[must_use]
pub fn legal_destinations(config: &BoardConfig, coords: usize) -> Destinations {
    Direction::ALL
        .into_iter()
        .filter_map(|direction| neighbour(config, coords, direction).map(|id| (direction, id)))
        .collect()
}

/// Check if `destination` is one orthogonal step from `origin`.
#[must_use]
pub fn is_legal_step(config: &BoardConfig, origin: usize, destination: usize) -> bool {
    legal_destinations(config, origin)
        .iter()
        .any(|&(_, id)| id == destination)
}
