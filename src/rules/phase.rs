//! Battle phases.

use serde::{Deserialize, Serialize};

/// Outcome of a finished battle, from the player's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleResult {
    Win,
    Lose,
}

/// Where the turn state machine currently rests.
///
/// `Init` and `ResolvingAttack` are transient: they run to completion inside
/// a single call and are never observed between calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Init,
    PlayerTurn,
    ResolvingAttack,
    EnemyTurn,
    GameOver(BattleResult),
}

impl Phase {
    /// Whether the battle has ended.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::GameOver(_))
    }

    /// The result, once the battle has ended.
    #[must_use]
    pub fn result(self) -> Option<BattleResult> {
        match self {
            Phase::GameOver(result) => Some(result),
            _ => None,
        }
    }
}
