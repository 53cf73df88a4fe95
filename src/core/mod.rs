//! Core engine types: alliances, board configuration, RNG.
//!
//! These are the leaf building blocks shared by pieces, board and moves.

pub mod alliance;
pub mod config;
pub mod rng;

pub use alliance::{Alliance, AllianceMap};
pub use config::{BoardConfig, DEFAULT_COLUMNS, DEFAULT_ROWS};
pub use rng::{GameRng, GameRngState, TilePicker};
