//! Property-based tests for board invariants.

use proptest::prelude::*;

use rust_generals::board::{Board, BoardBuilder};
use rust_generals::core::{Alliance, BoardConfig, GameRng};
use rust_generals::moves::{is_legal_step, legal_destinations};
use rust_generals::pieces::Rank;

fn assert_tiles_consistent(board: &Board) -> Result<(), TestCaseError> {
    for tile in board.tiles() {
        prop_assert_ne!(tile.is_empty(), tile.is_occupied());
        if let Some(piece) = tile.occupant() {
            prop_assert_eq!(piece.coords(), Some(tile.id()));
        }
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Random arrangements keep territory and quota for every seed.
    #[test]
    fn prop_random_arrangement_valid(seed in any::<u64>()) {
        let config = BoardConfig::default();
        let builder = BoardBuilder::random(&config, &mut GameRng::new(seed));

        for rank in Rank::ALL {
            for alliance in Alliance::ALL {
                prop_assert!(builder.count_instances(rank, alliance) <= rank.max_instances());
            }
        }
        for (coords, piece) in builder.placements() {
            prop_assert_eq!(config.territory_of(coords), piece.alliance());
        }
    }

    /// Arbitrary placement attempts never break builder invariants.
    #[test]
    fn prop_builder_rejections_are_clean(
        attempts in prop::collection::vec((0usize..15, any::<bool>(), 0usize..80), 0..120)
    ) {
        let config = BoardConfig::default();
        let mut builder = BoardBuilder::new(&config);

        for (rank_index, axis, coords) in attempts {
            let alliance = if axis { Alliance::Axis } else { Alliance::Ally };
            let _ = builder.place(Rank::ALL[rank_index], alliance, coords);
        }

        let mut total = 0;
        for alliance in Alliance::ALL {
            let count: usize = Rank::ALL.iter().map(|&r| builder.count_instances(r, alliance)).sum();
            prop_assert_eq!(count, builder.pieces_count(alliance));
            total += count;
        }
        prop_assert_eq!(total, builder.len());

        for (coords, piece) in builder.placements() {
            prop_assert!(config.contains(coords));
            prop_assert_eq!(config.territory_of(coords), piece.alliance());
            prop_assert!(builder.count_instances(piece.rank(), piece.alliance()) <= piece.rank().max_instances());
        }
    }

    /// Adjacency is symmetric on any board shape.
    #[test]
    fn prop_adjacency_symmetric(half_rows in 1usize..6, columns in 2usize..12, pick in any::<prop::sample::Index>()) {
        let config = BoardConfig::new(half_rows * 2, columns);
        let origin = pick.index(config.tile_count());

        for (_, dest) in legal_destinations(&config, origin) {
            prop_assert!(config.contains(dest));
            prop_assert!(is_legal_step(&config, dest, origin));
        }
    }

    /// Random play keeps every tile consistent and undo restores the board.
    #[test]
    fn prop_random_play_consistent(seed in any::<u64>(), steps in 1usize..40) {
        let mut board = Board::new(BoardConfig::default().with_seed(seed));
        board.init_game().unwrap();
        board.start_game().unwrap();
        let initial = board.tiles().clone();

        let mut rng = GameRng::new(seed ^ 0x5EED);
        for _ in 0..steps {
            if board.is_end_game() {
                break;
            }
            let Some(alliance) = board.move_maker() else { break };

            let mut origins: Vec<usize> = board
                .tiles()
                .iter()
                .filter(|t| t.occupant().is_some_and(|p| p.alliance() == alliance))
                .map(|t| t.id())
                .collect();
            if origins.is_empty() {
                break;
            }
            let start = rng.below(origins.len());
            origins.rotate_left(start);

            let chosen = origins.iter().find_map(|&origin| {
                let piece = *board.tile(origin).ok()?.piece().ok()?;
                piece
                    .evaluate_moves(&board)
                    .into_iter()
                    .find(|(_, mv)| mv.is_legal())
                    .map(|(_, mv)| (origin, mv.destination()))
            });
            let Some((origin, dest)) = chosen else { break };

            prop_assert!(board.make_move(alliance, origin, dest).is_ok());
            assert_tiles_consistent(&board)?;
        }

        while board.undo_last_move().is_ok() {}
        prop_assert_eq!(board.tiles(), &initial);
    }
}
