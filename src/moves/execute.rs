//! Move execution, undo and redo.
//!
//! ## Effects by classification
//!
//! - `Normal`: the piece relocates. A Flag stepping onto the opponent's back
//!   row wins the game for its alliance.
//! - `Attacking`: the loser is removed. If the attacker wins it takes the
//!   destination; either way the origin is cleared. Eliminating a Flag wins
//!   the game for the Flag's opponent.
//! - `Draw`: both pieces are removed.
//! - `Invalid`: nothing changes; the move is recorded as the board's last
//!   invalid move and execution fails.
//!
//! Turn counters and the move maker are advanced by `Board::make_move`, not
//! here.

use super::combat::{resolve_combat, CombatOutcome};
use super::evaluate::{Move, MoveKind};
use crate::board::Board;
use crate::core::Alliance;
use crate::error::{BoardError, MoveError, TileError};
use crate::pieces::Piece;

impl Move {
    /// Apply this move to the board.
    ///
    /// Stamps the board's current turn, resolves combat, declares a winner
    /// when the game ends and records the move as the board's last move.
    pub fn execute(&mut self, board: &mut Board) -> Result<MoveKind, MoveError> {
        if self.executed {
            return Err(self.already_executed());
        }
        if board.is_end_game() {
            return Err(MoveError::GameOver);
        }
        if !self.kind.is_legal() {
            tracing::debug!(mv = %self, "invalid move rejected");
            board.set_last_invalid_move(self.clone());
            return Err(MoveError::Illegal {
                origin: self.origin,
                destination: self.destination,
            });
        }

        self.check_board(board)?;

        self.turn = Some(board.current_turn());
        self.apply(board)?;

        tracing::debug!(mv = %self, "move executed");
        Ok(self.kind)
    }

    /// Reverse an executed move, restoring both tiles to their snapshots.
    ///
    /// A winner declared by this move is withdrawn.
    pub fn undo(&mut self, board: &mut Board) -> Result<(), MoveError> {
        if !self.executed {
            return Err(MoveError::NothingToUndo);
        }

        if self.winner.is_some() {
            board.clear_end_game_winner();
        }
        board.restore_tile(self.destination, self.target)?;
        board.restore_tile(self.origin, Some(self.source))?;

        self.eliminated = None;
        self.winner = None;
        self.executed = false;
        board.set_last_move(None);

        tracing::debug!(mv = %self, "move undone");
        Ok(())
    }

    /// Re-apply an undone move, keeping its original turn stamp.
    pub fn redo(&mut self, board: &mut Board) -> Result<MoveKind, MoveError> {
        if self.executed {
            return Err(self.already_executed());
        }
        if self.turn.is_none() {
            return Err(MoveError::NothingToRedo);
        }
        if board.is_end_game() {
            return Err(MoveError::GameOver);
        }

        self.check_board(board)?;
        self.apply(board)?;

        tracing::debug!(mv = %self, "move redone");
        Ok(self.kind)
    }

    /// Both tiles must still hold the pieces seen at evaluation.
    fn check_board(&self, board: &Board) -> Result<(), MoveError> {
        if board.tile(self.origin)?.occupant() != Some(&self.source) {
            return Err(MoveError::BoardChanged(self.origin));
        }
        if board.tile(self.destination)?.occupant() != self.target.as_ref() {
            return Err(MoveError::BoardChanged(self.destination));
        }
        Ok(())
    }

    fn apply(&mut self, board: &mut Board) -> Result<(), MoveError> {
        let winner = match self.kind {
            MoveKind::Normal => {
                board.move_piece(self.origin, self.destination)?;
                self.eliminated = None;

                let reached_back_row = board
                    .config()
                    .is_back_row_for(self.source.alliance(), self.destination);
                (self.source.is_flag() && reached_back_row).then(|| self.source.alliance())
            }
            MoveKind::Attacking => {
                let target = self
                    .target
                    .ok_or(BoardError::Tile(TileError::Empty(self.destination)))?;

                let loser = match resolve_combat(self.source.rank(), target.rank()) {
                    CombatOutcome::AttackerWins => {
                        board.replace_piece(self.destination, self.source)?;
                        target
                    }
                    CombatOutcome::DefenderWins => self.source,
                };
                board.delete_piece(self.origin)?;
                self.eliminated = Some(loser);

                losing_alliance(&loser).map(Alliance::opponent)
            }
            MoveKind::Draw => {
                board.delete_piece(self.origin)?;
                self.eliminated = Some(board.delete_piece(self.destination)?);
                None
            }
            MoveKind::Invalid => {
                return Err(MoveError::Illegal {
                    origin: self.origin,
                    destination: self.destination,
                });
            }
        };

        self.executed = true;
        self.winner = winner;
        if let Some(alliance) = winner {
            board.set_end_game_winner(alliance)?;
        }
        board.set_last_move(Some(self.clone()));
        Ok(())
    }

    fn already_executed(&self) -> MoveError {
        MoveError::AlreadyExecuted {
            origin: self.origin,
            destination: self.destination,
        }
    }
}

/// Alliance that loses when `eliminated` is removed, if that ends the game.
#[must_use]
pub fn losing_alliance(eliminated: &Piece) -> Option<Alliance> {
    eliminated.is_flag().then(|| eliminated.alliance())
}
