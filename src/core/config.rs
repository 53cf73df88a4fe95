//! Board configuration and tile geometry.
//!
//! Tiles are addressed by a linear id `0..rows * columns`, row-major. The
//! first half of the rows is `Axis` territory, the second half `Ally`.
//!
//! ```
//! use rust_generals::core::{Alliance, BoardConfig};
//!
//! let config = BoardConfig::default();
//! assert_eq!(config.tile_count(), 72);
//! assert_eq!(config.territory_of(35), Alliance::Axis);
//! assert_eq!(config.territory_of(36), Alliance::Ally);
//! ```

use serde::{Deserialize, Serialize};

use super::alliance::Alliance;

/// Standard board height.
pub const DEFAULT_ROWS: usize = 8;

/// Standard board width.
pub const DEFAULT_COLUMNS: usize = 9;

/// Board geometry and game setup options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of rows (even, split between the two territories).
    pub rows: usize,

    /// Number of columns.
    pub columns: usize,

    /// Alliance that arranges and moves first.
    pub first_move_maker: Alliance,

    /// Seed for random arrangements.
    pub seed: u64,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLUMNS)
    }
}

impl BoardConfig {
    /// Create a configuration for a `rows` x `columns` board.
    pub fn new(rows: usize, columns: usize) -> Self {
        assert!(rows >= 2 && columns >= 2, "Board must be at least 2x2");
        assert!(rows % 2 == 0, "Row count must be even to split territories");

        Self {
            rows,
            columns,
            first_move_maker: Alliance::Ally,
            seed: 0,
        }
    }

    /// Set the first move maker.
    #[must_use]
    pub fn with_first_move_maker(mut self, alliance: Alliance) -> Self {
        self.first_move_maker = alliance;
        self
    }

    /// Set the arrangement seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Total number of tiles.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Check if a tile id lies on the board.
    #[must_use]
    pub fn contains(&self, id: usize) -> bool {
        id < self.tile_count()
    }

    /// Row index of a tile.
    #[must_use]
    pub fn row_of(&self, id: usize) -> usize {
        id / self.columns
    }

    /// Column index of a tile.
    #[must_use]
    pub fn column_of(&self, id: usize) -> usize {
        id % self.columns
    }

    /// Territory a tile belongs to.
    #[must_use]
    pub fn territory_of(&self, id: usize) -> Alliance {
        if id < self.tile_count() / 2 {
            Alliance::Axis
        } else {
            Alliance::Ally
        }
    }

    /// Inclusive tile id bounds of an alliance's territory.
    #[must_use]
    pub fn territory_bounds(&self, alliance: Alliance) -> (usize, usize) {
        let half = self.tile_count() / 2;
        match alliance {
            Alliance::Axis => (0, half - 1),
            Alliance::Ally => (half, self.tile_count() - 1),
        }
    }

    /// Check if a tile is on the back row of `alliance`'s opponent, i.e. the
    /// row a Flag of `alliance` must reach.
    #[must_use]
    pub fn is_back_row_for(&self, alliance: Alliance, id: usize) -> bool {
        match alliance {
            Alliance::Axis => self.row_of(id) == self.rows - 1,
            Alliance::Ally => self.row_of(id) == 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let config = BoardConfig::default();

        assert_eq!(config.rows, 8);
        assert_eq!(config.columns, 9);
        assert_eq!(config.tile_count(), 72);
        assert_eq!(config.first_move_maker, Alliance::Ally);
        assert!(config.contains(71));
        assert!(!config.contains(72));
    }

    #[test]
    fn test_rows_and_columns() {
        let config = BoardConfig::default();

        assert_eq!(config.row_of(0), 0);
        assert_eq!(config.row_of(8), 0);
        assert_eq!(config.row_of(9), 1);
        assert_eq!(config.column_of(9), 0);
        assert_eq!(config.column_of(17), 8);
        assert_eq!(config.row_of(71), 7);
    }

    #[test]
    fn test_territories() {
        let config = BoardConfig::default();

        assert_eq!(config.territory_bounds(Alliance::Axis), (0, 35));
        assert_eq!(config.territory_bounds(Alliance::Ally), (36, 71));
        assert_eq!(config.territory_of(0), Alliance::Axis);
        assert_eq!(config.territory_of(35), Alliance::Axis);
        assert_eq!(config.territory_of(36), Alliance::Ally);
        assert_eq!(config.territory_of(71), Alliance::Ally);
    }

    #[test]
    fn test_back_rows() {
        let config = BoardConfig::default();

        assert!(config.is_back_row_for(Alliance::Axis, 63));
        assert!(config.is_back_row_for(Alliance::Axis, 71));
        assert!(!config.is_back_row_for(Alliance::Axis, 62));
        assert!(config.is_back_row_for(Alliance::Ally, 0));
        assert!(config.is_back_row_for(Alliance::Ally, 8));
        assert!(!config.is_back_row_for(Alliance::Ally, 9));
    }

    #[test]
    fn test_builder() {
        let config = BoardConfig::new(4, 5)
            .with_first_move_maker(Alliance::Axis)
            .with_seed(99);

        assert_eq!(config.tile_count(), 20);
        assert_eq!(config.first_move_maker, Alliance::Axis);
        assert_eq!(config.seed, 99);
    }

    #[test]
    #[should_panic(expected = "Row count must be even")]
    fn test_odd_rows_rejected() {
        BoardConfig::new(7, 9);
    }
}
