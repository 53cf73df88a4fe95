//! Board system: tiles, arrangement building and game state.
//!
//! ## Key Types
//!
//! - `Tile`: One cell with a fixed territory and at most one piece
//! - `BoardBuilder`: Validated arrangement, random or scripted
//! - `Board`: Tile grid, phases, turns, players and move history
//! - `GamePhase`: Uninitialized, Arranging, Playing, Ended

pub mod builder;
pub mod state;
pub mod tile;

pub use builder::BoardBuilder;
pub use state::{Board, GamePhase};
pub use tile::Tile;
