//! Game pieces.
//!
//! A `Piece` is a small value: its rank and alliance are fixed at
//! construction and only its coordinates change. Moving a piece produces a
//! relocated copy, so a piece is never shared between two tiles.

use serde::{Deserialize, Serialize};

use super::rank::Rank;
use crate::board::Board;
use crate::core::Alliance;
use crate::moves::{self, CandidateMoves};

/// A ranked token owned by one alliance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    rank: Rank,
    alliance: Alliance,
    coords: Option<usize>,
}

impl Piece {
    /// Create an unplaced piece.
    #[must_use]
    pub const fn new(rank: Rank, alliance: Alliance) -> Self {
        Self {
            rank,
            alliance,
            coords: None,
        }
    }

    /// Create a piece with coordinates already set.
    #[must_use]
    pub const fn at(rank: Rank, alliance: Alliance, coords: usize) -> Self {
        Self {
            rank,
            alliance,
            coords: Some(coords),
        }
    }

    #[must_use]
    pub fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub fn alliance(&self) -> Alliance {
        self.alliance
    }

    /// The player owning this piece. Players are seated by alliance.
    #[must_use]
    pub fn owner(&self) -> Alliance {
        self.alliance
    }

    /// Combat power from the rank table.
    #[must_use]
    pub fn power(&self) -> u8 {
        self.rank.power()
    }

    /// Tile id, or `None` while unplaced.
    #[must_use]
    pub fn coords(&self) -> Option<usize> {
        self.coords
    }

    #[must_use]
    pub fn is_flag(&self) -> bool {
        self.rank.is_flag()
    }

    /// Stamp new coordinates.
    pub fn set_coords(&mut self, coords: usize) {
        self.coords = Some(coords);
    }

    /// Copy of this piece placed at `coords`.
    #[must_use]
    pub fn relocated(&self, coords: usize) -> Self {
        Self {
            coords: Some(coords),
            ..*self
        }
    }

    /// Evaluate every geometrically possible step for this piece.
    ///
    /// Returns one classified candidate per existing orthogonal neighbour,
    /// keyed by direction. Unplaced pieces have no candidates.
    #[must_use]
    pub fn evaluate_moves(&self, board: &Board) -> CandidateMoves {
        match self.coords {
            Some(coords) => moves::candidate_moves(board, self, coords),
            None => CandidateMoves::new(),
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.alliance, self.rank)?;
        if let Some(coords) = self.coords {
            write!(f, " at {coords}")?;
        }
        Ok(())
    }
}
