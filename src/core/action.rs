//! Input events and their history records.
//!
//! The battle accepts three inputs from the outside world. Accepted inputs
//! are recorded with the turn they arrived in and a per-turn sequence number,
//! which is enough to replay a battle from its config.

use serde::{Deserialize, Serialize};

use super::entity::InstanceId;

/// An input event accepted by the battle core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattleInput {
    /// Append a hand card to the chain.
    SelectCard(InstanceId),

    /// Truncate the chain at this index.
    DeselectCard(usize),

    /// Attack with the current chain.
    ExecuteAttack,
}

/// A recorded input with ordering metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub input: BattleInput,

    /// Turn number when the input was accepted.
    pub turn: u32,

    /// Sequence number within the turn.
    pub sequence: u32,
}

impl InputRecord {
    #[must_use]
    pub fn new(input: BattleInput, turn: u32, sequence: u32) -> Self {
        Self {
            input,
            turn,
            sequence,
        }
    }
}
