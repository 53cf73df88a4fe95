//! Board state: tiles, game phase and turn bookkeeping.
//!
//! ## Phases
//!
//! ```text
//! Uninitialized --init_game--> Arranging --start_game--> Playing --win--> Ended
//!                                  ^                                        |
//!                                  +---------------restart_game-------------+
//! ```
//!
//! `Ended` is derived from the declared winner: once a winner is set every
//! mutation except `restart_game` (and undoing the winning move) is
//! rejected.
//!
//! ## Ownership
//!
//! The board owns both players. Moves are requested through
//! `Board::make_move` with the acting alliance, so there is no shared
//! mutable state between boards and any number of games can run side by
//! side.
//!
//! ## Tiles
//!
//! Tiles live in an `im::Vector`, so the initial arrangement snapshot taken
//! at `start_game` and any cloned board share structure with the live one.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::builder::BoardBuilder;
use super::tile::Tile;
use crate::core::{Alliance, AllianceMap, BoardConfig, GameRng, GameRngState};
use crate::error::{ArrangementError, BoardError, MoveError, TileError};
use crate::moves::{Move, MoveKind};
use crate::pieces::Piece;
use crate::player::Player;

/// Lifecycle phase of a game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Uninitialized,
    Arranging,
    Playing,
    Ended,
}

/// The grid of tiles plus all per-game state.
#[derive(Clone, Debug)]
pub struct Board {
    config: BoardConfig,
    tiles: Vector<Tile>,

    // === Progression ===
    phase: GamePhase,
    current_turn: u32,
    last_executed_turn: Option<u32>,
    move_maker: Option<Alliance>,
    first_move_maker: Option<Alliance>,
    end_game_winner: Option<Alliance>,

    // === History ===
    last_move: Option<Move>,
    last_invalid_move: Option<Move>,
    initial_arrangement: Option<Vector<Tile>>,
    players: AllianceMap<Player>,

    // === Setup ===
    player_names: AllianceMap<Option<String>>,
    builder: Option<BoardBuilder>,
    rng: GameRng,
}

impl Board {
    /// Create an empty board in the `Uninitialized` phase.
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        let tiles = Self::empty_tiles(&config);
        let rng = GameRng::new(config.seed);

        Self {
            config,
            tiles,
            phase: GamePhase::Uninitialized,
            current_turn: 0,
            last_executed_turn: None,
            move_maker: None,
            first_move_maker: None,
            end_game_winner: None,
            last_move: None,
            last_invalid_move: None,
            initial_arrangement: None,
            players: AllianceMap::new(Player::new),
            player_names: AllianceMap::default(),
            builder: None,
            rng,
        }
    }

    fn empty_tiles(config: &BoardConfig) -> Vector<Tile> {
        (0..config.tile_count())
            .map(|id| Tile::new(id, config.territory_of(id)))
            .collect()
    }

    /// Use `builder` instead of a random arrangement on the next
    /// `init_game` or `restart_game`.
    pub fn set_board_builder(&mut self, builder: BoardBuilder) -> Result<(), BoardError> {
        let geometry = builder.config();
        if geometry.rows != self.config.rows || geometry.columns != self.config.columns {
            return Err(BoardError::GeometryMismatch {
                builder_rows: geometry.rows,
                builder_columns: geometry.columns,
                rows: self.config.rows,
                columns: self.config.columns,
            });
        }
        self.builder = Some(builder);
        Ok(())
    }

    // === Phase Transitions ===

    /// Lay out a fresh arrangement and enter the `Arranging` phase.
    ///
    /// Uses the builder set with `set_board_builder`, or a random
    /// arrangement drawn from the board's RNG.
    pub fn init_game(&mut self) -> Result<(), BoardError> {
        let builder = match &self.builder {
            Some(builder) => builder.clone(),
            None => BoardBuilder::random(&self.config, &mut self.rng),
        };

        self.reset();
        for (coords, piece) in builder.placements() {
            self.tile_mut(coords)?.insert(piece)?;
        }

        self.phase = GamePhase::Arranging;
        self.assign_move_maker(Some(self.config.first_move_maker));

        tracing::info!(
            pieces = builder.len(),
            move_maker = %self.config.first_move_maker,
            "arrangement started"
        );
        Ok(())
    }

    fn reset(&mut self) {
        self.tiles = Self::empty_tiles(&self.config);
        self.phase = GamePhase::Uninitialized;
        self.current_turn = 0;
        self.last_executed_turn = None;
        self.first_move_maker = None;
        self.end_game_winner = None;
        self.last_move = None;
        self.last_invalid_move = None;
        self.initial_arrangement = None;
        self.players = AllianceMap::new(Player::new);
        self.assign_move_maker(None);
    }

    /// Hand arrangement over to the other alliance.
    pub fn player_done_arranging(&mut self) -> Result<Alliance, BoardError> {
        self.expect_phase(GamePhase::Arranging)?;
        self.switch_move_maker_player()
    }

    /// Freeze the arrangement and start play on turn 1.
    ///
    /// Whoever holds the move when arrangement ends makes the first move.
    pub fn start_game(&mut self) -> Result<(), BoardError> {
        self.expect_phase(GamePhase::Arranging)?;

        let first = self.move_maker.unwrap_or(self.config.first_move_maker);
        self.initial_arrangement = Some(self.tiles.clone());
        self.current_turn = 1;
        self.first_move_maker = Some(first);
        self.assign_move_maker(Some(first));
        self.phase = GamePhase::Playing;

        tracing::info!(move_maker = %first, "game started");
        Ok(())
    }

    /// Discard the current game and return to `Arranging` with a new board.
    pub fn restart_game(&mut self) -> Result<(), BoardError> {
        tracing::info!(winner = ?self.end_game_winner, "game restarted");
        self.init_game()
    }

    fn expect_phase(&self, expected: GamePhase) -> Result<(), BoardError> {
        let actual = self.phase();
        if actual == GamePhase::Ended {
            return Err(BoardError::GameOver);
        }
        if actual != expected {
            return Err(BoardError::WrongPhase { expected, actual });
        }
        Ok(())
    }

    fn ensure_not_over(&self) -> Result<(), BoardError> {
        if self.is_end_game() {
            return Err(BoardError::GameOver);
        }
        Ok(())
    }

    // === Move Maker & Turns ===

    /// Pass the move to the other alliance, returning the new move maker.
    pub fn switch_move_maker_player(&mut self) -> Result<Alliance, BoardError> {
        self.ensure_not_over()?;
        let current = self.move_maker.ok_or(BoardError::NoMoveMaker)?;
        let next = current.opponent();
        self.assign_move_maker(Some(next));
        Ok(next)
    }

    /// Make `alliance` the move maker.
    ///
    /// Rejected if it already is.
    pub fn set_move_maker(&mut self, alliance: Alliance) -> Result<(), BoardError> {
        self.ensure_not_over()?;
        if self.move_maker == Some(alliance) {
            return Err(BoardError::AlreadyMoveMaker(alliance));
        }
        self.assign_move_maker(Some(alliance));
        Ok(())
    }

    fn assign_move_maker(&mut self, alliance: Option<Alliance>) {
        self.move_maker = alliance;
        for (side, player) in self.players.iter_mut() {
            player.set_move_maker(Some(side) == alliance);
        }
    }

    pub fn increment_turn(&mut self) -> Result<u32, BoardError> {
        self.ensure_not_over()?;
        self.current_turn += 1;
        Ok(self.current_turn)
    }

    /// Step the turn counter back, saturating at zero.
    pub fn decrement_turn(&mut self) -> Result<u32, BoardError> {
        self.ensure_not_over()?;
        self.current_turn = self.current_turn.saturating_sub(1);
        Ok(self.current_turn)
    }

    /// Declare the winner, ending the game.
    ///
    /// One-shot: a second declaration is rejected.
    pub fn set_end_game_winner(&mut self, alliance: Alliance) -> Result<(), BoardError> {
        if let Some(winner) = self.end_game_winner {
            return Err(BoardError::WinnerAlreadySet(winner));
        }
        self.end_game_winner = Some(alliance);
        tracing::info!(winner = %alliance, turn = self.current_turn, "game over");
        Ok(())
    }

    pub(crate) fn clear_end_game_winner(&mut self) {
        self.end_game_winner = None;
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Current phase. `Ended` once a winner is declared.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if self.end_game_winner.is_some() {
            GamePhase::Ended
        } else {
            self.phase
        }
    }

    /// Get a tile by id.
    pub fn tile(&self, coords: usize) -> Result<&Tile, BoardError> {
        self.tiles.get(coords).ok_or(BoardError::OutOfBounds {
            coords,
            tile_count: self.tiles.len(),
        })
    }

    fn tile_mut(&mut self, coords: usize) -> Result<&mut Tile, BoardError> {
        let tile_count = self.tiles.len();
        self.tiles
            .get_mut(coords)
            .ok_or(BoardError::OutOfBounds { coords, tile_count })
    }

    /// All tiles in id order.
    #[must_use]
    pub fn tiles(&self) -> &Vector<Tile> {
        &self.tiles
    }

    #[must_use]
    pub fn current_turn(&self) -> u32 {
        self.current_turn
    }

    /// Turn of the most recent executed move.
    #[must_use]
    pub fn last_executed_turn(&self) -> Option<u32> {
        self.last_executed_turn
    }

    #[must_use]
    pub fn move_maker(&self) -> Option<Alliance> {
        self.move_maker
    }

    #[must_use]
    pub fn first_move_maker(&self) -> Option<Alliance> {
        self.first_move_maker
    }

    #[must_use]
    pub fn is_end_game(&self) -> bool {
        self.end_game_winner.is_some()
    }

    #[must_use]
    pub fn end_game_winner(&self) -> Option<Alliance> {
        self.end_game_winner
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.last_move.as_ref()
    }

    #[must_use]
    pub fn last_invalid_move(&self) -> Option<&Move> {
        self.last_invalid_move.as_ref()
    }

    pub(crate) fn set_last_move(&mut self, mv: Option<Move>) {
        self.last_move = mv;
    }

    pub(crate) fn set_last_invalid_move(&mut self, mv: Move) {
        self.last_invalid_move = Some(mv);
    }

    /// Tiles as they stood when play started.
    #[must_use]
    pub fn initial_arrangement(&self) -> Option<&Vector<Tile>> {
        self.initial_arrangement.as_ref()
    }

    #[must_use]
    pub fn player(&self, alliance: Alliance) -> &Player {
        &self.players[alliance]
    }

    /// Display name chosen for `alliance`, kept across restarts.
    #[must_use]
    pub fn player_name(&self, alliance: Alliance) -> Option<&str> {
        self.player_names[alliance].as_deref()
    }

    pub fn set_player_name(&mut self, alliance: Alliance, name: impl Into<String>) {
        self.player_names[alliance] = Some(name.into());
    }

    /// The player whose turn it is.
    pub fn move_maker_player(&self) -> Result<&Player, BoardError> {
        self.move_maker
            .map(|alliance| &self.players[alliance])
            .ok_or(BoardError::NoMoveMaker)
    }

    /// Arrangement RNG position, for checkpointing.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Continue random arrangements from a checkpointed RNG position.
    pub fn restore_rng(&mut self, state: &GameRngState) {
        self.rng = GameRng::from_state(state);
    }

    /// Number of `alliance`'s pieces still on the board.
    #[must_use]
    pub fn pieces_left(&self, alliance: Alliance) -> usize {
        self.tiles
            .iter()
            .filter_map(Tile::occupant)
            .filter(|piece| piece.alliance() == alliance)
            .count()
    }

    // === Piece Mutations ===

    /// Exchange two pieces of the same alliance during arrangement.
    ///
    /// Only the alliance currently arranging may swap.
    pub fn swap_piece(&mut self, a: usize, b: usize) -> Result<(), BoardError> {
        self.expect_phase(GamePhase::Arranging)?;

        let first = *self.tile(a)?.piece()?;
        let second = *self.tile(b)?.piece()?;
        if first.alliance() != second.alliance() {
            return Err(BoardError::AllianceMismatch(a, b));
        }
        self.check_arranger(first.alliance())?;

        self.tile_mut(a)?.replace(second.relocated(a))?;
        self.tile_mut(b)?.replace(first.relocated(b))?;

        tracing::debug!(a, b, "pieces swapped");
        Ok(())
    }

    /// Relocate the piece at `from` onto the empty tile `to`.
    ///
    /// While arranging, only the arranging alliance may move its pieces and
    /// only within its own territory.
    pub fn move_piece(&mut self, from: usize, to: usize) -> Result<(), BoardError> {
        self.ensure_not_over()?;

        let piece = *self.tile(from)?.piece()?;
        if self.tile(to)?.is_occupied() {
            return Err(TileError::Occupied(to).into());
        }
        if self.phase == GamePhase::Arranging {
            self.check_arranger(piece.alliance())?;
            self.check_territory(&piece, to)?;
        }

        self.tile_mut(from)?.remove()?;
        self.tile_mut(to)?.insert(piece.relocated(to))?;
        Ok(())
    }

    /// Place `piece` on the empty tile `coords`, stamping its coordinates.
    ///
    /// While arranging, the piece must belong to the arranging alliance,
    /// land in its territory and stay within its rank's quota.
    pub fn insert_piece(&mut self, coords: usize, piece: Piece) -> Result<(), BoardError> {
        self.ensure_not_over()?;
        if self.tile(coords)?.is_occupied() {
            return Err(TileError::Occupied(coords).into());
        }
        if self.phase == GamePhase::Arranging {
            self.check_arranger(piece.alliance())?;
            self.check_territory(&piece, coords)?;
            self.check_quota(&piece, 0)?;
        }
        self.tile_mut(coords)?.insert(piece.relocated(coords))?;
        Ok(())
    }

    /// Overwrite the occupant of `coords`, returning the replaced piece.
    ///
    /// Arrangement rules apply as for `insert_piece`.
    pub fn replace_piece(&mut self, coords: usize, piece: Piece) -> Result<Piece, BoardError> {
        self.ensure_not_over()?;
        if self.phase == GamePhase::Arranging {
            let current = *self.tile(coords)?.piece()?;
            self.check_arranger(current.alliance())?;
            self.check_arranger(piece.alliance())?;
            self.check_territory(&piece, coords)?;
            let freed = usize::from(current.rank() == piece.rank());
            self.check_quota(&piece, freed)?;
        }
        Ok(self.tile_mut(coords)?.replace(piece.relocated(coords))?)
    }

    /// Clear `coords`, returning the removed piece.
    pub fn delete_piece(&mut self, coords: usize) -> Result<Piece, BoardError> {
        self.ensure_not_over()?;
        Ok(self.tile_mut(coords)?.remove()?)
    }

    fn check_arranger(&self, alliance: Alliance) -> Result<(), BoardError> {
        if self.move_maker != Some(alliance) {
            return Err(BoardError::NotArrangingTurn(alliance));
        }
        Ok(())
    }

    fn check_territory(&self, piece: &Piece, coords: usize) -> Result<(), BoardError> {
        let territory = self.config.territory_of(coords);
        if territory != piece.alliance() {
            return Err(ArrangementError::WrongTerritory {
                rank: piece.rank(),
                alliance: piece.alliance(),
                coords,
                territory,
            }
            .into());
        }
        Ok(())
    }

    /// `freed` counts instances of the rank about to leave the board.
    fn check_quota(&self, piece: &Piece, freed: usize) -> Result<(), BoardError> {
        let on_board = self
            .tiles
            .iter()
            .filter_map(Tile::occupant)
            .filter(|p| p.rank() == piece.rank() && p.alliance() == piece.alliance())
            .count();
        let max = piece.rank().max_instances();
        if on_board - freed >= max {
            return Err(ArrangementError::QuotaExceeded {
                rank: piece.rank(),
                alliance: piece.alliance(),
                max,
            }
            .into());
        }
        Ok(())
    }

    /// Force a tile to hold exactly `occupant`.
    pub(crate) fn restore_tile(
        &mut self,
        coords: usize,
        occupant: Option<Piece>,
    ) -> Result<(), BoardError> {
        let tile = self.tile_mut(coords)?;
        if tile.is_occupied() {
            tile.remove()?;
        }
        if let Some(piece) = occupant {
            tile.insert(piece.relocated(coords))?;
        }
        Ok(())
    }

    // === Play ===

    /// Move `alliance`'s piece from `origin` to `destination`.
    ///
    /// Evaluates and executes the move, records it in the player's
    /// history, advances the turn and passes the move to the opponent
    /// unless the game just ended. Making a move discards any undone moves.
    pub fn make_move(
        &mut self,
        alliance: Alliance,
        origin: usize,
        destination: usize,
    ) -> Result<MoveKind, MoveError> {
        match self.phase() {
            GamePhase::Playing => {}
            GamePhase::Ended => return Err(MoveError::GameOver),
            phase => return Err(MoveError::NotPlaying(phase)),
        }
        if self.move_maker != Some(alliance) {
            return Err(MoveError::NotYourTurn(alliance));
        }

        let piece = self.tile(origin)?.occupant().ok_or(MoveError::NoPiece(origin))?;
        if piece.alliance() != alliance {
            return Err(MoveError::NotYourPiece {
                coords: origin,
                alliance,
            });
        }

        let mut mv = Move::evaluate(alliance, self, origin, destination)?;
        let kind = mv.execute(self)?;

        for (_, player) in self.players.iter_mut() {
            player.discard_undone();
        }
        self.players[alliance].record(mv);
        self.last_executed_turn = Some(self.current_turn);
        self.current_turn += 1;
        if !self.is_end_game() {
            self.assign_move_maker(Some(alliance.opponent()));
        }

        Ok(kind)
    }

    /// Reverse the most recent executed move.
    ///
    /// Restores both tiles, withdraws a winner it declared, steps the turn
    /// back and returns the move to the player who made it.
    pub fn undo_last_move(&mut self) -> Result<Move, MoveError> {
        if !matches!(self.phase(), GamePhase::Playing | GamePhase::Ended) {
            return Err(MoveError::NotPlaying(self.phase()));
        }
        let turn = self.last_executed_turn.ok_or(MoveError::NothingToUndo)?;
        let (alliance, index) = self
            .find_move(|mv| mv.turn() == Some(turn) && mv.is_executed())
            .ok_or(MoveError::NothingToUndo)?;

        let mut mv = self.players[alliance].history()[index].clone();
        mv.undo(self)?;
        self.players[alliance].replace(index, mv.clone());

        self.current_turn = turn;
        self.last_executed_turn = turn.checked_sub(1).filter(|&t| t >= 1);
        self.last_move = self
            .last_executed_turn
            .and_then(|t| self.find_move(|mv| mv.turn() == Some(t)))
            .map(|(a, i)| self.players[a].history()[i].clone());
        self.assign_move_maker(Some(alliance));

        Ok(mv)
    }

    /// Re-apply the earliest undone move.
    pub fn redo_last_move(&mut self) -> Result<Move, MoveError> {
        match self.phase() {
            GamePhase::Playing => {}
            GamePhase::Ended => return Err(MoveError::GameOver),
            phase => return Err(MoveError::NotPlaying(phase)),
        }
        let turn = self.current_turn;
        let (alliance, index) = self
            .find_move(|mv| mv.turn() == Some(turn) && !mv.is_executed())
            .ok_or(MoveError::NothingToRedo)?;

        let mut mv = self.players[alliance].history()[index].clone();
        mv.redo(self)?;
        self.players[alliance].replace(index, mv.clone());

        self.last_executed_turn = Some(turn);
        self.current_turn += 1;
        if !self.is_end_game() {
            self.assign_move_maker(Some(alliance.opponent()));
        }

        Ok(mv)
    }

    fn find_move(&self, pred: impl Fn(&Move) -> bool) -> Option<(Alliance, usize)> {
        self.players.iter().find_map(|(alliance, player)| {
            player
                .history()
                .iter()
                .position(&pred)
                .map(|index| (alliance, index))
        })
    }

    /// Rebuild the game as it stood at the start of `turn`.
    ///
    /// Starts from the initial arrangement and re-applies every executed
    /// move from earlier turns. The returned board has no redo history.
    pub fn replay_to(&self, turn: u32) -> Result<Board, MoveError> {
        let snapshot = self
            .initial_arrangement
            .as_ref()
            .ok_or(BoardError::NoSnapshot(turn))?;
        if turn == 0 || turn > self.current_turn {
            return Err(BoardError::NoSnapshot(turn).into());
        }

        let mut moves: Vec<Move> = self
            .players
            .iter()
            .flat_map(|(_, player)| player.history().iter())
            .filter(|mv| mv.is_executed() && mv.turn().is_some_and(|t| t < turn))
            .cloned()
            .collect();
        moves.sort_by_key(Move::turn);

        let mut board = self.clone();
        board.tiles = snapshot.clone();
        board.phase = GamePhase::Playing;
        board.end_game_winner = None;
        board.last_move = None;
        board.last_invalid_move = None;
        board.players = AllianceMap::new(Player::new);
        board.current_turn = 1;
        board.last_executed_turn = None;

        for mut mv in moves {
            mv.reset_execution();
            mv.redo(&mut board)?;
            board.players[mv.player()].record(mv);
            board.last_executed_turn = Some(board.current_turn);
            board.current_turn += 1;
        }

        let next = match board.last_move() {
            Some(mv) if board.is_end_game() => mv.player(),
            Some(mv) => mv.player().opponent(),
            None => self.first_move_maker.unwrap_or(self.config.first_move_maker),
        };
        board.assign_move_maker(Some(next));

        Ok(board)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{:?} turn={} move_maker={}",
            self.phase(),
            self.current_turn,
            self.move_maker.map_or_else(|| "-".to_string(), |a| a.to_string())
        )?;
        for row in 0..self.config.rows {
            let cells: Vec<String> = (0..self.config.columns)
                .map(|column| {
                    let id = row * self.config.columns + column;
                    match self.tiles.get(id).and_then(Tile::occupant) {
                        Some(piece) if piece.alliance() == Alliance::Axis => {
                            piece.rank().symbol().to_string()
                        }
                        Some(piece) => piece.rank().symbol().to_lowercase(),
                        None => "..".to_string(),
                    }
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
