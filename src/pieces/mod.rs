//! Piece system: ranks, the rank table, and piece values.
//!
//! ## Key Types
//!
//! - `Rank`: Enumerated military grade
//! - `RankInfo`: Power and quota for one rank
//! - `RankTable`: Name-based lookup over the static table
//! - `Piece`: Rank + alliance + coordinates

pub mod piece;
pub mod rank;

pub use piece::Piece;
pub use rank::{Rank, RankInfo, RankTable};
