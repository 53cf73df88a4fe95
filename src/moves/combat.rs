//! Combat resolution between an attacker and a defender.
//!
//! ## Rules
//!
//! 1. Flag attacking Flag: the attacker wins.
//! 2. Private attacking Agent: the attacker wins (ambush).
//! 3. Agent attacking Private: the defender wins.
//! 4. Otherwise the strictly greater power wins.
//!
//! The ambush is one-sided: it only favours the Private. Equal non-Flag
//! ranks never reach combat, they are classified as a draw beforehand.
//!
//! ```
//! use rust_generals::moves::{resolve_combat, CombatOutcome};
//! use rust_generals::pieces::Rank;
//!
//! assert_eq!(resolve_combat(Rank::Colonel, Rank::LtTwo), CombatOutcome::AttackerWins);
//! assert_eq!(resolve_combat(Rank::Private, Rank::Agent), CombatOutcome::AttackerWins);
//! assert_eq!(resolve_combat(Rank::Agent, Rank::Private), CombatOutcome::DefenderWins);
//! ```

use serde::{Deserialize, Serialize};

use crate::pieces::Rank;

/// Which side of an engagement survives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CombatOutcome {
    AttackerWins,
    DefenderWins,
}

/// Resolve an attack of `attacker` on `defender`.
#[must_use]
pub fn resolve_combat(attacker: Rank, defender: Rank) -> CombatOutcome {
    match (attacker, defender) {
        (Rank::Flag, Rank::Flag) | (Rank::Private, Rank::Agent) => CombatOutcome::AttackerWins,
        (Rank::Agent, Rank::Private) => CombatOutcome::DefenderWins,
        _ if attacker.power() > defender.power() => CombatOutcome::AttackerWins,
        _ => CombatOutcome::DefenderWins,
    }
}
