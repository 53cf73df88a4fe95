//! Per-alliance player state.

use serde::{Deserialize, Serialize};

use crate::core::Alliance;
use crate::moves::Move;

/// One side of the game.
///
/// The history holds every recorded move in turn order. Undone moves stay
/// in the history, marked not executed, until a new move discards them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    alliance: Alliance,
    is_move_maker: bool,
    history: Vec<Move>,
}

impl Player {
    #[must_use]
    pub fn new(alliance: Alliance) -> Self {
        Self {
            alliance,
            is_move_maker: false,
            history: Vec::new(),
        }
    }

    #[must_use]
    pub fn alliance(&self) -> Alliance {
        self.alliance
    }

    /// Check if this player may act now.
    #[must_use]
    pub fn is_move_maker(&self) -> bool {
        self.is_move_maker
    }

    pub(crate) fn set_move_maker(&mut self, is_move_maker: bool) {
        self.is_move_maker = is_move_maker;
    }

    /// Every recorded move, oldest first.
    #[must_use]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The move this player made on `turn`, if any.
    #[must_use]
    pub fn move_from_history(&self, turn: u32) -> Option<&Move> {
        self.history.iter().find(|mv| mv.turn() == Some(turn))
    }

    /// Most recent move still in effect.
    #[must_use]
    pub fn last_executed(&self) -> Option<&Move> {
        self.history.iter().rev().find(|mv| mv.is_executed())
    }

    /// Number of moves still in effect.
    #[must_use]
    pub fn executed_count(&self) -> usize {
        self.history.iter().filter(|mv| mv.is_executed()).count()
    }

    pub(crate) fn record(&mut self, mv: Move) {
        self.history.push(mv);
    }

    pub(crate) fn replace(&mut self, index: usize, mv: Move) {
        if let Some(slot) = self.history.get_mut(index) {
            *slot = mv;
        }
    }

    /// Drop undone moves; they can no longer be redone.
    pub(crate) fn discard_undone(&mut self) {
        self.history.retain(Move::is_executed);
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} moves", self.alliance, self.executed_count())?;
        if self.is_move_maker {
            f.write_str(", to move")?;
        }
        f.write_str(")")
    }
}
