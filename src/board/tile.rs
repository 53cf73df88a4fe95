//! Board tiles.
//!
//! A `Tile` is one addressable cell. Its id and territory are fixed when the
//! board is laid out; the occupant comes and goes during arrangement and play.

use serde::{Deserialize, Serialize};

use crate::core::Alliance;
use crate::error::TileError;
use crate::pieces::Piece;

/// One cell of the board holding at most one piece.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    id: usize,
    territory: Alliance,
    occupant: Option<Piece>,
}

impl Tile {
    /// Create an empty tile.
    #[must_use]
    pub fn new(id: usize, territory: Alliance) -> Self {
        Self {
            id,
            territory,
            occupant: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> usize {
        self.id
    }

    #[must_use]
    pub fn territory(&self) -> Alliance {
        self.territory
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    #[must_use]
    pub fn is_occupied(&self) -> bool {
        self.occupant.is_some()
    }

    /// The occupying piece, or `None` if the tile is empty.
    #[must_use]
    pub fn occupant(&self) -> Option<&Piece> {
        self.occupant.as_ref()
    }

    /// The occupying piece, failing with `TileError::Empty`.
    pub fn piece(&self) -> Result<&Piece, TileError> {
        self.occupant.as_ref().ok_or(TileError::Empty(self.id))
    }

    /// Place a piece on an empty tile.
    pub fn insert(&mut self, piece: Piece) -> Result<(), TileError> {
        if self.is_occupied() {
            return Err(TileError::Occupied(self.id));
        }
        self.occupant = Some(piece);
        Ok(())
    }

    /// Overwrite the occupant, returning the previous one.
    pub fn replace(&mut self, piece: Piece) -> Result<Piece, TileError> {
        match self.occupant.as_mut() {
            Some(current) => Ok(std::mem::replace(current, piece)),
            None => Err(TileError::Empty(self.id)),
        }
    }

    /// Clear the tile, returning the removed piece.
    pub fn remove(&mut self) -> Result<Piece, TileError> {
        self.occupant.take().ok_or(TileError::Empty(self.id))
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.occupant {
            Some(piece) => write!(
                f,
                "Tile {} contains {} {}",
                self.id,
                piece.alliance(),
                piece.rank()
            ),
            None => write!(f, "Tile {} is empty", self.id),
        }
    }
}
