//! # combo-battle
//!
//! Rules core for a turn-based card battle against a single enemy.
//!
//! The player draws from a shuffled deck, chains hand cards that share a
//! number or an element, and attacks with the chain. Longer runs of matching
//! cards grow an additive damage multiplier. The enemy answers each attack
//! with a fixed counter-attack until one side reaches zero HP.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Free**: No rendering, timing or input devices. The core
//!    commits each state change fully, then emits a notification.
//!
//! 2. **Deterministic**: All randomness flows from one seeded ChaCha8 RNG.
//!    The same config, catalogs, master deck and inputs give the same battle.
//!
//! 3. **No Globals**: Card and enemy catalogs are passed in at battle start.
//!
//! ## Modules
//!
//! - `core`: Instance ids, RNG, configuration, inputs, state, errors
//! - `cards`: Card definitions, instances and the card catalog
//! - `enemies`: Enemy definitions and the enemy catalog
//! - `zones`: Deck service (draw, shuffle, reshuffle, discard)
//! - `combo`: Chain validation and damage
//! - `events`: Notifications and observers
//! - `rules`: Phases and the turn controller

pub mod core;
pub mod cards;
pub mod enemies;
pub mod zones;
pub mod combo;
pub mod events;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    InstanceId,
    BattleRng, BattleRngState,
    BattleConfig, ComboRules,
    BattleInput, InputRecord,
    BattleState, EnemyState, PlayerState,
    BattleError, CatalogError, Rejection,
};

pub use crate::cards::{
    CardCatalog, CardDefinition, CardFace, CardId, CardInstance, CardRegistry, Element, Rarity,
};

pub use crate::enemies::{EnemyCatalog, EnemyDefinition, EnemyId, EnemyRegistry};

pub use crate::zones::{DeckService, DrawReport};

pub use crate::combo::{ComboBreakdown, ComboChain, ComboEngine, ComboStep};

pub use crate::events::{BattleEvent, BattleObserver, Target};

pub use crate::rules::{BattleResult, Phase, TurnController};
