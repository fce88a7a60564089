//! Battle rules: phases and the turn state machine.
//!
//! ```text
//! Init -> PlayerTurn -> ResolvingAttack -> EnemyTurn -> PlayerTurn ...
//!                              |                |
//!                              v                v
//!                        GameOver(Win)    GameOver(Lose)
//! ```
//!
//! [`TurnController`] owns the battle. Inputs are applied one at a time and
//! either commit fully or are rejected with no effect.

pub mod controller;
pub mod phase;

pub use controller::TurnController;
pub use phase::{BattleResult, Phase};
