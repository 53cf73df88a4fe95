//! Error types for the rules engine.
//!
//! Every gameplay-facing failure is recoverable and returned as a value.
//! `RankError` is the only one that signals a bug in data rather than a
//! player action.

use thiserror::Error;

use crate::board::GamePhase;
use crate::core::Alliance;
use crate::pieces::Rank;

/// Rank table lookup failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    #[error("unknown rank: {0}")]
    UnknownRank(String),
}

/// Tile occupancy violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TileError {
    #[error("tile {0} is occupied")]
    Occupied(usize),
    #[error("tile {0} is empty")]
    Empty(usize),
}

/// Rejection of a single placement while building an arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArrangementError {
    #[error("{alliance} {rank} has no coordinates")]
    Unplaced { rank: Rank, alliance: Alliance },
    #[error("tile {coords} is out of bounds (board has {tile_count} tiles)")]
    OutOfBounds { coords: usize, tile_count: usize },
    #[error("{alliance} {rank} at tile {coords} is in {territory} territory")]
    WrongTerritory {
        rank: Rank,
        alliance: Alliance,
        coords: usize,
        territory: Alliance,
    },
    #[error("{alliance} already has the maximum of {max} {rank}")]
    QuotaExceeded {
        rank: Rank,
        alliance: Alliance,
        max: usize,
    },
    #[error("tile {0} is already claimed")]
    TileClaimed(usize),
}

/// Board mutation or query failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("tile {coords} is out of bounds (board has {tile_count} tiles)")]
    OutOfBounds { coords: usize, tile_count: usize },
    #[error(transparent)]
    Tile(#[from] TileError),
    #[error(transparent)]
    Arrangement(#[from] ArrangementError),
    #[error("operation requires the {expected:?} phase, board is {actual:?}")]
    WrongPhase { expected: GamePhase, actual: GamePhase },
    #[error("game already over")]
    GameOver,
    #[error("{0} is already the move maker")]
    AlreadyMoveMaker(Alliance),
    #[error("no move maker has been assigned")]
    NoMoveMaker,
    #[error("{0} may not rearrange while the other side is arranging")]
    NotArrangingTurn(Alliance),
    #[error("pieces at tiles {0} and {1} belong to different alliances")]
    AllianceMismatch(usize, usize),
    #[error("{0} has already been declared the winner")]
    WinnerAlreadySet(Alliance),
    #[error("no arrangement snapshot for turn {0}")]
    NoSnapshot(u32),
    #[error("arrangement is for a {builder_rows}x{builder_columns} board, board is {rows}x{columns}")]
    GeometryMismatch {
        builder_rows: usize,
        builder_columns: usize,
        rows: usize,
        columns: usize,
    },
}

/// Move request failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("moves are only allowed while playing (board is {0:?})")]
    NotPlaying(GamePhase),
    #[error("game already over")]
    GameOver,
    #[error("it is not {0}'s turn")]
    NotYourTurn(Alliance),
    #[error("no piece at tile {0}")]
    NoPiece(usize),
    #[error("piece at tile {coords} does not belong to {alliance}")]
    NotYourPiece { coords: usize, alliance: Alliance },
    #[error("illegal move from {origin} to {destination}")]
    Illegal { origin: usize, destination: usize },
    #[error("no move to undo")]
    NothingToUndo,
    #[error("no move to redo")]
    NothingToRedo,
    #[error("move from {origin} to {destination} was already executed")]
    AlreadyExecuted { origin: usize, destination: usize },
    #[error("tile {0} no longer holds what the move was evaluated against")]
    BoardChanged(usize),
    #[error(transparent)]
    Board(#[from] BoardError),
}
