//! Core battle types: ids, RNG, configuration, inputs, state, errors.

pub mod entity;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;
pub mod error;

pub use entity::{InstanceAllocator, InstanceId};
pub use rng::{BattleRng, BattleRngState};
pub use config::{BattleConfig, ComboRules, MAX_HAND_SIZE};
pub use action::{BattleInput, InputRecord};
pub use state::{BattleState, EnemyState, PlayerState, StatusEffect, StatusKind};
pub use error::{BattleError, CatalogError, Rejection};
