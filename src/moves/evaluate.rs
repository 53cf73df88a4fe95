//! Move classification.
//!
//! A `Move` is built by evaluating an `(origin, destination)` request
//! against the board. Classification precedence:
//!
//! 1. Destination not one orthogonal step away: `Invalid`
//! 2. Destination empty: `Normal`
//! 3. Destination held by the same alliance: `Invalid`
//! 4. Destination held by the same rank: `Draw`, or `Attacking` when that
//!    rank is Flag
//! 5. Otherwise: `Attacking`
//!
//! Evaluation never mutates the board. See `execute` for applying a move.

use serde::{Deserialize, Serialize};

use super::mobility::is_legal_step;
use crate::board::Board;
use crate::core::Alliance;
use crate::error::MoveError;
use crate::pieces::Piece;

/// Classification of a prospective move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    Normal,
    Attacking,
    Draw,
    Invalid,
}

impl MoveKind {
    #[must_use]
    pub fn is_legal(self) -> bool {
        self != MoveKind::Invalid
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MoveKind::Normal => "normal",
            MoveKind::Attacking => "attacking",
            MoveKind::Draw => "draw",
            MoveKind::Invalid => "invalid",
        }
    }
}

impl std::fmt::Display for MoveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a step of `source` onto a tile holding `target`.
///
/// Assumes the step is geometrically legal.
#[must_use]
pub fn classify(source: &Piece, target: Option<&Piece>) -> MoveKind {
    match target {
        None => MoveKind::Normal,
        Some(target) if target.alliance() == source.alliance() => MoveKind::Invalid,
        Some(target) if target.rank() == source.rank() && !target.is_flag() => MoveKind::Draw,
        Some(_) => MoveKind::Attacking,
    }
}

/// An evaluated, and possibly executed, transition of one piece.
///
/// Rank and position data are snapshots taken at evaluation time. Only the
/// turn stamp, the execution flag and the combat results change afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub(super) player: Alliance,
    pub(super) origin: usize,
    pub(super) destination: usize,
    pub(super) kind: MoveKind,
    pub(super) turn: Option<u32>,
    pub(super) source: Piece,
    pub(super) target: Option<Piece>,
    /// Piece removed by combat. On a draw this is the defender; the
    /// attacker is removed as well.
    pub(super) eliminated: Option<Piece>,
    /// Alliance declared the winner by this move.
    pub(super) winner: Option<Alliance>,
    pub(super) executed: bool,
}

impl Move {
    /// Evaluate `player` moving the piece at `origin` to `destination`.
    ///
    /// Fails if `origin` is off the board or empty. A destination that is
    /// off the board or not adjacent yields an `Invalid` move rather than
    /// an error, so it can be reported back to the player.
    pub fn evaluate(
        player: Alliance,
        board: &Board,
        origin: usize,
        destination: usize,
    ) -> Result<Self, MoveError> {
        let source = *board
            .tile(origin)?
            .occupant()
            .ok_or(MoveError::NoPiece(origin))?;

        let target = board.tile(destination).ok().and_then(|tile| tile.occupant().copied());

        let kind = if is_legal_step(board.config(), origin, destination) {
            classify(&source, target.as_ref())
        } else {
            MoveKind::Invalid
        };

        Ok(Self::classified(player, source, origin, destination, target, kind))
    }

    /// Build a move from an already known classification.
    pub(crate) fn classified(
        player: Alliance,
        source: Piece,
        origin: usize,
        destination: usize,
        target: Option<Piece>,
        kind: MoveKind,
    ) -> Self {
        Self {
            player,
            origin,
            destination,
            kind,
            turn: None,
            source,
            target,
            eliminated: None,
            winner: None,
            executed: false,
        }
    }

    /// Forget execution results, keeping the turn stamp.
    pub(crate) fn reset_execution(&mut self) {
        self.eliminated = None;
        self.winner = None;
        self.executed = false;
    }

    #[must_use]
    pub fn player(&self) -> Alliance {
        self.player
    }

    #[must_use]
    pub fn origin(&self) -> usize {
        self.origin
    }

    #[must_use]
    pub fn destination(&self) -> usize {
        self.destination
    }

    #[must_use]
    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    /// Turn the move was executed on, or `None` if never executed.
    #[must_use]
    pub fn turn(&self) -> Option<u32> {
        self.turn
    }

    /// Moving piece as it stood on `origin`.
    #[must_use]
    pub fn source(&self) -> &Piece {
        &self.source
    }

    /// Piece on `destination` at evaluation time.
    #[must_use]
    pub fn target(&self) -> Option<&Piece> {
        self.target.as_ref()
    }

    #[must_use]
    pub fn eliminated(&self) -> Option<&Piece> {
        self.eliminated.as_ref()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Alliance> {
        self.winner
    }

    #[must_use]
    pub fn is_executed(&self) -> bool {
        self.executed
    }

    #[must_use]
    pub fn is_legal(&self) -> bool {
        self.kind.is_legal()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} -> {} ({})",
            self.player,
            self.source.rank(),
            self.origin,
            self.destination,
            self.kind
        )?;
        if let Some(turn) = self.turn {
            write!(f, " turn {turn}")?;
        }
        if !self.executed {
            f.write_str(" [not executed]")?;
        }
        Ok(())
    }
}
