//! Arrangement building.
//!
//! A `BoardBuilder` collects the pieces to place before a game starts and
//! validates each placement as it arrives:
//!
//! 1. the tile lies on the board,
//! 2. the tile is in the piece's own territory,
//! 3. the rank's per-alliance quota is not exceeded,
//! 4. the tile is not already claimed.
//!
//! A rejected placement leaves the builder untouched, so callers can keep
//! feeding it.
//!
//! ```
//! use rust_generals::board::BoardBuilder;
//! use rust_generals::core::{Alliance, BoardConfig};
//! use rust_generals::pieces::Rank;
//!
//! let mut builder = BoardBuilder::new(&BoardConfig::default());
//! builder.place(Rank::Flag, Alliance::Ally, 65).unwrap();
//!
//! // A second Flag exceeds the quota.
//! assert!(builder.place(Rank::Flag, Alliance::Ally, 66).is_err());
//! // Axis pieces cannot be arranged on Ally territory.
//! assert!(builder.place(Rank::Major, Alliance::Axis, 50).is_err());
//!
//! assert_eq!(builder.pieces_count(Alliance::Ally), 1);
//! ```

use rustc_hash::FxHashMap;

use crate::core::{Alliance, AllianceMap, BoardConfig, TilePicker, DEFAULT_COLUMNS};
use crate::error::ArrangementError;
use crate::pieces::{Piece, Rank};

/// Rows per territory in the demo layout.
const DEMO_DEPTH: usize = 4;

/// Demo layout for one alliance, starting from its back row.
const DEMO_LAYOUT: [[Option<Rank>; DEFAULT_COLUMNS]; DEMO_DEPTH] = {
    use Rank::*;
    [
        [
            Some(Private),
            Some(LtTwo),
            Some(Flag),
            Some(Private),
            Some(LtOne),
            Some(Sergeant),
            Some(Private),
            Some(Major),
            Some(GeneralTwo),
        ],
        [
            Some(LtCol),
            Some(Private),
            Some(Colonel),
            Some(Agent),
            Some(Captain),
            None,
            Some(Private),
            Some(Agent),
            None,
        ],
        [
            None,
            None,
            None,
            None,
            Some(GeneralFour),
            Some(Private),
            None,
            None,
            Some(GeneralThree),
        ],
        [
            None,
            Some(GeneralFive),
            Some(GeneralOne),
            None,
            None,
            None,
            None,
            None,
            None,
        ],
    ]
};

/// Validated mapping from tile id to the piece placed there.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    config: BoardConfig,
    placements: FxHashMap<usize, Piece>,
    pieces_count: AllianceMap<usize>,
    rank_counts: FxHashMap<(Rank, Alliance), usize>,
}

impl BoardBuilder {
    /// Create an empty builder for the given board geometry.
    #[must_use]
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            config: config.clone(),
            placements: FxHashMap::default(),
            pieces_count: AllianceMap::with_value(0),
            rank_counts: FxHashMap::default(),
        }
    }

    /// Create a builder with every rank's full quota scattered at random
    /// over each alliance's territory.
    ///
    /// Placement stops early for an alliance whose territory fills up.
    pub fn random(config: &BoardConfig, picker: &mut impl TilePicker) -> Self {
        let mut builder = Self::new(config);

        for alliance in Alliance::ALL {
            let (from, to) = config.territory_bounds(alliance);
            let mut claimed: Vec<usize> = Vec::new();

            'ranks: for rank in Rank::ALL.into_iter().rev() {
                while builder.count_instances(rank, alliance) < rank.max_instances() {
                    let Some(coords) = picker.pick(from, to, &claimed) else {
                        tracing::debug!(%alliance, "territory full, random arrangement stopped");
                        break 'ranks;
                    };
                    claimed.push(coords);
                    if let Err(err) = builder.set_piece(Piece::at(rank, alliance, coords)) {
                        tracing::debug!(%err, "random placement rejected");
                    }
                }
            }
        }

        builder
    }

    /// Create the fixed demo arrangement for both alliances.
    ///
    /// The Ally half mirrors the Axis half across the centre line.
    ///
    /// Panics unless the board has the standard 9 columns and at least
    /// four rows per territory.
    #[must_use]
    pub fn demo(config: &BoardConfig) -> Self {
        assert!(
            config.columns == DEFAULT_COLUMNS && config.rows >= DEMO_DEPTH * 2,
            "Demo arrangement needs a board of 9 columns and at least 8 rows"
        );

        let mut builder = Self::new(config);
        for (depth, row) in DEMO_LAYOUT.iter().enumerate() {
            for (column, rank) in row.iter().enumerate() {
                let Some(rank) = *rank else { continue };

                let axis = depth * config.columns + column;
                let ally = (config.rows - 1 - depth) * config.columns + column;

                for piece in [
                    Piece::at(rank, Alliance::Axis, axis),
                    Piece::at(rank, Alliance::Ally, ally),
                ] {
                    if let Err(err) = builder.set_piece(piece) {
                        tracing::debug!(%err, "demo placement rejected");
                    }
                }
            }
        }

        builder
    }

    /// Board geometry this builder validates against.
    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Accept a placed piece after validating it.
    pub fn set_piece(&mut self, piece: Piece) -> Result<(), ArrangementError> {
        let rank = piece.rank();
        let alliance = piece.alliance();

        let coords = piece
            .coords()
            .ok_or(ArrangementError::Unplaced { rank, alliance })?;

        if let Err(err) = self.validate(rank, alliance, coords) {
            tracing::debug!(%err, "placement rejected");
            return Err(err);
        }

        self.placements.insert(coords, piece);
        self.pieces_count[alliance] += 1;
        *self.rank_counts.entry((rank, alliance)).or_insert(0) += 1;

        tracing::debug!(%alliance, %rank, coords, "piece placed");
        Ok(())
    }

    /// Place a new piece of `rank` for `alliance` at `coords`.
    pub fn place(
        &mut self,
        rank: Rank,
        alliance: Alliance,
        coords: usize,
    ) -> Result<(), ArrangementError> {
        self.set_piece(Piece::at(rank, alliance, coords))
    }

    fn validate(&self, rank: Rank, alliance: Alliance, coords: usize) -> Result<(), ArrangementError> {
        if !self.config.contains(coords) {
            return Err(ArrangementError::OutOfBounds {
                coords,
                tile_count: self.config.tile_count(),
            });
        }

        let territory = self.config.territory_of(coords);
        if territory != alliance {
            return Err(ArrangementError::WrongTerritory {
                rank,
                alliance,
                coords,
                territory,
            });
        }

        if self.count_instances(rank, alliance) >= rank.max_instances() {
            return Err(ArrangementError::QuotaExceeded {
                rank,
                alliance,
                max: rank.max_instances(),
            });
        }

        if self.placements.contains_key(&coords) {
            return Err(ArrangementError::TileClaimed(coords));
        }

        Ok(())
    }

    /// Number of accepted pieces of `rank` for `alliance`.
    #[must_use]
    pub fn count_instances(&self, rank: Rank, alliance: Alliance) -> usize {
        self.rank_counts.get(&(rank, alliance)).copied().unwrap_or(0)
    }

    /// Number of accepted pieces for `alliance`.
    #[must_use]
    pub fn pieces_count(&self, alliance: Alliance) -> usize {
        self.pieces_count[alliance]
    }

    /// Piece claimed for a tile, if any.
    #[must_use]
    pub fn get(&self, coords: usize) -> Option<&Piece> {
        self.placements.get(&coords)
    }

    /// Check if a tile has been claimed.
    #[must_use]
    pub fn is_claimed(&self, coords: usize) -> bool {
        self.placements.contains_key(&coords)
    }

    /// All placements ordered by tile id.
    #[must_use]
    pub fn placements(&self) -> Vec<(usize, Piece)> {
        let mut placements: Vec<_> = self.placements.iter().map(|(&k, &v)| (k, v)).collect();
        placements.sort_unstable_by_key(|(coords, _)| *coords);
        placements
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

impl std::fmt::Display for BoardBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "BoardBuilder placements={}", self.len())?;
        for (coords, piece) in self.placements() {
            writeln!(f, "tile={coords};piece={};alliance={}", piece.rank(), piece.alliance())?;
        }
        Ok(())
    }
}
