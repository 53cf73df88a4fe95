//! # rust-generals
//!
//! A rules engine for the Game of the Generals, a two-player military
//! strategy game: ranked pieces are arranged secretly on opposing halves
//! of a grid and moved one step at a time; when pieces collide, rank
//! decides which one is eliminated. The game ends when a Flag is captured
//! or a Flag reaches the opposing back row.
//!
//! ## Design Principles
//!
//! 1. **Engine Only**: No rendering, input or networking. A presentation
//!    layer drives the engine through `Board` and reads its state back.
//!
//! 2. **Per-Game State**: All state lives in a `Board` value. Nothing is
//!    global, so any number of games can run in one process.
//!
//! 3. **Tagged Data**: Ranks, move classifications and phases are enums
//!    compared by value.
//!
//! ## Architecture
//!
//! - **Persistent Tiles**: The tile grid is an `im::Vector`, so the
//!   initial-arrangement snapshot and cloned boards are cheap.
//!
//! - **Reversible Moves**: A `Move` keeps snapshots of both pieces, so undo
//!   restores eliminated pieces and withdraws a declared winner.
//!
//! ## Modules
//!
//! - `core`: Alliances, board configuration, RNG
//! - `pieces`: Rank table and pieces
//! - `board`: Tiles, arrangement builder, board state
//! - `moves`: Mobility, classification, combat, execution
//! - `player`: Per-alliance move history
//! - `error`: Error types
//!
//! ## Example
//!
//! ```
//! use rust_generals::{Alliance, Board, BoardBuilder, BoardConfig, MoveKind, Rank};
//!
//! let config = BoardConfig::default();
//! let mut builder = BoardBuilder::new(&config);
//! builder.place(Rank::Private, Alliance::Ally, 54).unwrap();
//! builder.place(Rank::Flag, Alliance::Axis, 0).unwrap();
//!
//! let mut board = Board::new(config);
//! board.set_board_builder(builder).unwrap();
//! board.init_game().unwrap();
//! board.start_game().unwrap();
//!
//! // Ally moves first.
//! assert_eq!(board.make_move(Alliance::Ally, 54, 45), Ok(MoveKind::Normal));
//! assert_eq!(board.move_maker(), Some(Alliance::Axis));
//! assert_eq!(board.current_turn(), 2);
//! ```

pub mod core;
pub mod pieces;
pub mod board;
pub mod moves;
pub mod player;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Alliance, AllianceMap,
    BoardConfig, DEFAULT_COLUMNS, DEFAULT_ROWS,
    GameRng, GameRngState, TilePicker,
};

pub use crate::pieces::{Piece, Rank, RankInfo, RankTable};

pub use crate::board::{Board, BoardBuilder, GamePhase, Tile};

pub use crate::moves::{
    CandidateMoves, CombatOutcome, Direction, Move, MoveKind,
    candidate_moves, legal_destinations, resolve_combat,
};

pub use crate::player::Player;

pub use crate::error::{ArrangementError, BoardError, MoveError, RankError, TileError};
