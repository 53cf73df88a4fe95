//! Piece ranks and the static rank table.
//!
//! Each rank carries a combat `power` (higher wins a head-to-head) and a
//! per-alliance instance quota. The table is data-only and shared read-only
//! by every piece.
//!
//! ```
//! use rust_generals::pieces::{Rank, RankTable};
//!
//! let colonel = RankTable::get("Colonel").unwrap();
//! assert_eq!(colonel.power, 9);
//! assert_eq!(colonel.max_instances, 1);
//!
//! assert!(RankTable::get("Admiral").is_err());
//! assert_eq!(Rank::Private.max_instances(), 6);
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::RankError;

/// Military grade of a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Flag,
    Private,
    Sergeant,
    LtTwo,
    LtOne,
    Captain,
    Major,
    LtCol,
    Colonel,
    GeneralOne,
    GeneralTwo,
    GeneralThree,
    GeneralFour,
    GeneralFive,
    Agent,
}

/// Static data for one rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RankInfo {
    pub rank: Rank,
    pub name: &'static str,
    /// Two-letter code used in grid renderings.
    pub symbol: &'static str,
    pub power: u8,
    pub max_instances: usize,
}

impl RankInfo {
    const fn new(
        rank: Rank,
        name: &'static str,
        symbol: &'static str,
        power: u8,
        max_instances: usize,
    ) -> Self {
        Self {
            rank,
            name,
            symbol,
            power,
            max_instances,
        }
    }
}

/// Every rank, indexed by `Rank as usize`.
static RANKS: [RankInfo; 15] = [
    RankInfo::new(Rank::Flag, "Flag", "FL", 1, 1),
    RankInfo::new(Rank::Private, "Private", "PV", 2, 6),
    RankInfo::new(Rank::Sergeant, "Sergeant", "SG", 3, 1),
    RankInfo::new(Rank::LtTwo, "LtTwo", "2L", 4, 1),
    RankInfo::new(Rank::LtOne, "LtOne", "1L", 5, 1),
    RankInfo::new(Rank::Captain, "Captain", "CP", 6, 1),
    RankInfo::new(Rank::Major, "Major", "MJ", 7, 1),
    RankInfo::new(Rank::LtCol, "LtCol", "LC", 8, 1),
    RankInfo::new(Rank::Colonel, "Colonel", "CL", 9, 1),
    RankInfo::new(Rank::GeneralOne, "GeneralOne", "1G", 10, 1),
    RankInfo::new(Rank::GeneralTwo, "GeneralTwo", "2G", 11, 1),
    RankInfo::new(Rank::GeneralThree, "GeneralThree", "3G", 12, 1),
    RankInfo::new(Rank::GeneralFour, "GeneralFour", "4G", 13, 1),
    RankInfo::new(Rank::GeneralFive, "GeneralFive", "5G", 14, 1),
    RankInfo::new(Rank::Agent, "Agent", "AG", 15, 2),
];

impl Rank {
    /// All ranks, weakest first (Agent last).
    pub const ALL: [Rank; 15] = [
        Rank::Flag,
        Rank::Private,
        Rank::Sergeant,
        Rank::LtTwo,
        Rank::LtOne,
        Rank::Captain,
        Rank::Major,
        Rank::LtCol,
        Rank::Colonel,
        Rank::GeneralOne,
        Rank::GeneralTwo,
        Rank::GeneralThree,
        Rank::GeneralFour,
        Rank::GeneralFive,
        Rank::Agent,
    ];

    /// Get this rank's table entry.
    #[must_use]
    pub fn info(self) -> &'static RankInfo {
        &RANKS[self as usize]
    }

    /// Combat power.
    #[must_use]
    pub fn power(self) -> u8 {
        self.info().power
    }

    /// Maximum instances per alliance.
    #[must_use]
    pub fn max_instances(self) -> usize {
        self.info().max_instances
    }

    /// Display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.info().name
    }

    #[must_use]
    pub fn symbol(self) -> &'static str {
        self.info().symbol
    }

    #[must_use]
    pub fn is_flag(self) -> bool {
        self == Rank::Flag
    }
}

impl FromStr for Rank {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RankTable::get(s).map(|info| info.rank)
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Lookup of rank data by name.
#[derive(Clone, Copy, Debug, Default)]
pub struct RankTable;

impl RankTable {
    /// Look up a rank by its name.
    pub fn get(name: &str) -> Result<&'static RankInfo, RankError> {
        RANKS
            .iter()
            .find(|info| info.name == name)
            .ok_or_else(|| RankError::UnknownRank(name.to_string()))
    }

    /// Iterate over all rank entries.
    pub fn iter() -> impl Iterator<Item = &'static RankInfo> {
        RANKS.iter()
    }

    /// Number of pieces each alliance fields with full quotas.
    #[must_use]
    pub fn pieces_per_alliance() -> usize {
        RANKS.iter().map(|info| info.max_instances).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_indexed_by_rank() {
        for rank in Rank::ALL {
            assert_eq!(rank.info().rank, rank);
        }
    }

    #[test]
    fn test_powers_are_strictly_increasing() {
        let powers: Vec<u8> = Rank::ALL.iter().map(|r| r.power()).collect();
        assert!(powers.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_known_values() {
        assert_eq!(Rank::Flag.power(), 1);
        assert_eq!(Rank::LtTwo.power(), 4);
        assert_eq!(Rank::Colonel.power(), 9);
        assert_eq!(Rank::GeneralTwo.power(), 11);
        assert_eq!(Rank::Flag.max_instances(), 1);
        assert_eq!(Rank::Agent.max_instances(), 2);
    }

    #[test]
    fn test_lookup_by_name() {
        let info = RankTable::get("Agent").unwrap();
        assert_eq!(info.rank, Rank::Agent);

        assert_eq!("LtCol".parse::<Rank>(), Ok(Rank::LtCol));
        assert_eq!(
            "General".parse::<Rank>(),
            Err(RankError::UnknownRank("General".to_string()))
        );
    }

    #[test]
    fn test_names_round_trip() {
        for rank in Rank::ALL {
            assert_eq!(rank.to_string().parse::<Rank>(), Ok(rank));
        }
    }

    #[test]
    fn test_symbols_are_unique() {
        let mut symbols: Vec<&str> = Rank::ALL.iter().map(|r| r.symbol()).collect();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), Rank::ALL.len());
        assert!(symbols.iter().all(|s| s.len() == 2));
    }

    #[test]
    fn test_pieces_per_alliance() {
        assert_eq!(RankTable::pieces_per_alliance(), 21);
        assert_eq!(RankTable::iter().count(), 15);
    }
}
