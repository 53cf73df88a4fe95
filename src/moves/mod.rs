//! Move system: mobility, classification, combat and execution.
//!
//! ## Key Types
//!
//! - `Direction`: Orthogonal step direction
//! - `MoveKind`: Normal, Attacking, Draw or Invalid
//! - `Move`: Evaluated transition with piece snapshots
//! - `CombatOutcome`: Which side of an attack survives
//!
//! ## Flow
//!
//! `Move::evaluate` classifies a request against the board without
//! mutating it. `Move::execute` applies a legal move. `Board::make_move`
//! wraps both with turn and history bookkeeping.

pub mod combat;
pub mod evaluate;
pub mod execute;
pub mod mobility;

use smallvec::SmallVec;

pub use combat::{resolve_combat, CombatOutcome};
pub use evaluate::{classify, Move, MoveKind};
pub use execute::losing_alliance;
pub use mobility::{is_legal_step, legal_destinations, neighbour, Destinations, Direction};

use crate::board::Board;
use crate::pieces::Piece;

/// One classified candidate per existing neighbour of a piece.
pub type CandidateMoves = SmallVec<[(Direction, Move); 4]>;

/// Classify every step `piece` could take from `coords`.
///
/// Candidates include `Invalid` ones (friendly-occupied neighbours) so a
/// caller can tell blocked directions from missing ones.
#[must_use]
pub fn candidate_moves(board: &Board, piece: &Piece, coords: usize) -> CandidateMoves {
    legal_destinations(board.config(), coords)
        .into_iter()
        .map(|(direction, destination)| {
            let target = board
                .tile(destination)
                .ok()
                .and_then(|tile| tile.occupant().copied());
            let kind = classify(piece, target.as_ref());
            let mv = Move::classified(
                piece.alliance(),
                piece.relocated(coords),
                coords,
                destination,
                target,
                kind,
            );
            (direction, mv)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Alliance, BoardConfig};
    use crate::pieces::Rank;

    #[test]
    fn test_candidates_for_corner_piece() {
        let mut board = Board::new(BoardConfig::default());
        board.insert_piece(0, Piece::new(Rank::Major, Alliance::Axis)).unwrap();
        board.insert_piece(1, Piece::new(Rank::Private, Alliance::Axis)).unwrap();

        let piece = *board.tile(0).unwrap().piece().unwrap();
        let candidates = piece.evaluate_moves(&board);

        let summary: Vec<(Direction, usize, MoveKind)> = candidates
            .iter()
            .map(|(d, mv)| (*d, mv.destination(), mv.kind()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (Direction::Down, 9, MoveKind::Normal),
                (Direction::Right, 1, MoveKind::Invalid),
            ]
        );
    }

    #[test]
    fn test_candidates_classify_enemies() {
        let mut board = Board::new(BoardConfig::default());
        board.insert_piece(31, Piece::new(Rank::Colonel, Alliance::Axis)).unwrap();
        board.insert_piece(40, Piece::new(Rank::Colonel, Alliance::Ally)).unwrap();
        board.insert_piece(30, Piece::new(Rank::Agent, Alliance::Ally)).unwrap();

        let piece = *board.tile(31).unwrap().piece().unwrap();
        let kinds: Vec<MoveKind> = piece
            .evaluate_moves(&board)
            .iter()
            .map(|(_, mv)| mv.kind())
            .collect();

        // up, down, left, right
        assert_eq!(
            kinds,
            vec![MoveKind::Normal, MoveKind::Draw, MoveKind::Attacking, MoveKind::Normal]
        );
    }

    #[test]
    fn test_unplaced_piece_has_no_candidates() {
        let board = Board::new(BoardConfig::default());
        let piece = Piece::new(Rank::Flag, Alliance::Ally);

        assert!(piece.evaluate_moves(&board).is_empty());
    }
}
