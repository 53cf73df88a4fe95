//! Player system: per-alliance move history and move-maker flag.
//!
//! Players are owned by the `Board`; they are read through
//! `Board::player` and only changed by board operations.

pub mod state;

pub use state::Player;
