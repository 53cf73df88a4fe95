//! Move scenario integration tests.
//!
//! Each test sets up a small position on an empty 8x9 board, evaluates a
//! move and checks the classification and the resulting board.

use rust_generals::board::Board;
use rust_generals::core::{Alliance, BoardConfig};
use rust_generals::error::MoveError;
use rust_generals::moves::{Move, MoveKind};
use rust_generals::pieces::{Piece, Rank};

fn board_with(pieces: &[(Rank, Alliance, usize)]) -> Board {
    let mut board = Board::new(BoardConfig::default());
    for &(rank, alliance, coords) in pieces {
        board.insert_piece(coords, Piece::new(rank, alliance)).unwrap();
    }
    board
}

fn occupant(board: &Board, coords: usize) -> Option<Piece> {
    board.tile(coords).unwrap().occupant().copied()
}

// =============================================================================
// Normal Moves
// =============================================================================

/// Test that a Private steps onto an empty neighbour.
#[test]
fn test_normal_move() {
    let mut board = board_with(&[(Rank::Private, Alliance::Ally, 54)]);

    let mut mv = Move::evaluate(Alliance::Ally, &board, 54, 45).unwrap();
    assert_eq!(mv.kind(), MoveKind::Normal);

    mv.execute(&mut board).unwrap();

    assert!(board.tile(54).unwrap().is_empty());
    let private = occupant(&board, 45).unwrap();
    assert_eq!(private.rank(), Rank::Private);
    assert_eq!(private.coords(), Some(45));
}

// =============================================================================
// Combat
// =============================================================================

/// Test that two opposing Colonels eliminate each other.
#[test]
fn test_draw_between_equal_ranks() {
    let mut board = board_with(&[
        (Rank::Colonel, Alliance::Axis, 31),
        (Rank::Colonel, Alliance::Ally, 40),
    ]);

    let mut mv = Move::evaluate(Alliance::Axis, &board, 31, 40).unwrap();
    assert_eq!(mv.kind(), MoveKind::Draw);

    mv.execute(&mut board).unwrap();

    assert!(board.tile(31).unwrap().is_empty());
    assert!(board.tile(40).unwrap().is_empty());
    assert!(!board.is_end_game());
}

/// Test that a Colonel defeats a LtTwo and takes its tile.
#[test]
fn test_attack_by_strict_power() {
    let mut board = board_with(&[
        (Rank::Colonel, Alliance::Axis, 31),
        (Rank::LtTwo, Alliance::Ally, 32),
    ]);

    let mut mv = Move::evaluate(Alliance::Axis, &board, 31, 32).unwrap();
    assert_eq!(mv.kind(), MoveKind::Attacking);

    mv.execute(&mut board).unwrap();

    let colonel = occupant(&board, 32).unwrap();
    assert_eq!(colonel.rank(), Rank::Colonel);
    assert_eq!(colonel.coords(), Some(32));
    assert!(board.tile(31).unwrap().is_empty());
}

/// Test that a Private ambushes an Agent despite its lower power.
#[test]
fn test_private_ambushes_agent() {
    let mut board = board_with(&[
        (Rank::Private, Alliance::Axis, 31),
        (Rank::Agent, Alliance::Ally, 40),
    ]);

    let mut mv = Move::evaluate(Alliance::Axis, &board, 31, 40).unwrap();
    assert_eq!(mv.kind(), MoveKind::Attacking);

    mv.execute(&mut board).unwrap();

    assert_eq!(occupant(&board, 40).map(|p| p.rank()), Some(Rank::Private));
    assert_eq!(mv.eliminated().map(Piece::rank), Some(Rank::Agent));
    assert!(board.tile(31).unwrap().is_empty());
}

/// Test that an Agent attacking a Private loses; the Private keeps its tile.
#[test]
fn test_agent_attacking_private_loses() {
    let mut board = board_with(&[
        (Rank::Agent, Alliance::Axis, 31),
        (Rank::Private, Alliance::Ally, 40),
    ]);

    let mut mv = Move::evaluate(Alliance::Axis, &board, 31, 40).unwrap();
    assert_eq!(mv.kind(), MoveKind::Attacking);

    mv.execute(&mut board).unwrap();

    let private = occupant(&board, 40).unwrap();
    assert_eq!(private.rank(), Rank::Private);
    assert_eq!(private.alliance(), Alliance::Ally);
    assert!(board.tile(31).unwrap().is_empty());
}

/// Test that a Private attacking a non-Agent follows plain power.
#[test]
fn test_private_loses_to_sergeant() {
    let mut board = board_with(&[
        (Rank::Private, Alliance::Ally, 40),
        (Rank::Sergeant, Alliance::Axis, 31),
    ]);

    let mut mv = Move::evaluate(Alliance::Ally, &board, 40, 31).unwrap();
    mv.execute(&mut board).unwrap();

    assert_eq!(occupant(&board, 31).map(|p| p.rank()), Some(Rank::Sergeant));
    assert!(board.tile(40).unwrap().is_empty());
}

// =============================================================================
// Game End
// =============================================================================

/// Test that capturing a Flag ends the game for the attacker.
#[test]
fn test_flag_capture_ends_game() {
    let mut board = board_with(&[
        (Rank::Sergeant, Alliance::Ally, 40),
        (Rank::Flag, Alliance::Axis, 31),
    ]);

    let mut mv = Move::evaluate(Alliance::Ally, &board, 40, 31).unwrap();
    assert_eq!(mv.kind(), MoveKind::Attacking);

    mv.execute(&mut board).unwrap();

    assert!(board.is_end_game());
    assert_eq!(board.end_game_winner(), Some(Alliance::Ally));
}

/// Test that a Flag attacking a Flag wins.
#[test]
fn test_flag_takes_flag() {
    let mut board = board_with(&[
        (Rank::Flag, Alliance::Axis, 31),
        (Rank::Flag, Alliance::Ally, 40),
    ]);

    let mut mv = Move::evaluate(Alliance::Axis, &board, 31, 40).unwrap();
    assert_eq!(mv.kind(), MoveKind::Attacking);

    mv.execute(&mut board).unwrap();

    assert_eq!(board.end_game_winner(), Some(Alliance::Axis));
    assert_eq!(occupant(&board, 40).map(|p| p.alliance()), Some(Alliance::Axis));
}

/// Test that an Axis Flag reaching the last row wins.
#[test]
fn test_flag_reaches_back_row() {
    let mut board = board_with(&[(Rank::Flag, Alliance::Axis, 58)]);

    let mut mv = Move::evaluate(Alliance::Axis, &board, 58, 67).unwrap();
    mv.execute(&mut board).unwrap();

    assert_eq!(board.end_game_winner(), Some(Alliance::Axis));
}

/// Test that no further move runs once the game is over.
#[test]
fn test_no_moves_after_game_over() {
    let mut board = board_with(&[
        (Rank::Sergeant, Alliance::Ally, 40),
        (Rank::Flag, Alliance::Axis, 31),
        (Rank::Major, Alliance::Axis, 0),
    ]);
    Move::evaluate(Alliance::Ally, &board, 40, 31)
        .unwrap()
        .execute(&mut board)
        .unwrap();

    let mut mv = Move::evaluate(Alliance::Axis, &board, 0, 1).unwrap();
    assert_eq!(mv.execute(&mut board), Err(MoveError::GameOver));
    assert!(board.tile(0).unwrap().is_occupied());
}

// =============================================================================
// Illegal Moves
// =============================================================================

/// Test that a two-tile jump is rejected and recorded.
#[test]
fn test_two_tiles_away_rejected() {
    let mut board = board_with(&[(Rank::Private, Alliance::Ally, 54)]);
    let before = board.tiles().clone();

    let mut mv = Move::evaluate(Alliance::Ally, &board, 54, 36).unwrap();
    assert_eq!(mv.kind(), MoveKind::Invalid);
    assert!(mv.execute(&mut board).is_err());

    assert_eq!(board.tiles(), &before);
    let invalid = board.last_invalid_move().unwrap();
    assert_eq!((invalid.origin(), invalid.destination()), (54, 36));
}

/// Test that stepping onto a friendly piece is rejected and recorded.
#[test]
fn test_friendly_target_rejected() {
    let mut board = board_with(&[
        (Rank::Private, Alliance::Ally, 54),
        (Rank::Captain, Alliance::Ally, 45),
    ]);
    let before = board.tiles().clone();

    let mut mv = Move::evaluate(Alliance::Ally, &board, 54, 45).unwrap();
    assert_eq!(mv.kind(), MoveKind::Invalid);
    assert_eq!(
        mv.execute(&mut board),
        Err(MoveError::Illegal { origin: 54, destination: 45 })
    );

    assert_eq!(board.tiles(), &before);
    assert_eq!(board.last_invalid_move().map(Move::kind), Some(MoveKind::Invalid));
    assert_eq!(board.last_move(), None);
}

/// Test that stepping right off the last column does not wrap.
#[test]
fn test_no_wrap_to_next_row() {
    let board = board_with(&[(Rank::Major, Alliance::Axis, 17)]);

    let mv = Move::evaluate(Alliance::Axis, &board, 17, 18).unwrap();
    assert_eq!(mv.kind(), MoveKind::Invalid);
}
